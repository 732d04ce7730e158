pub mod analysis;
pub mod annotation;
pub mod catalog;
pub mod config;
pub mod dataset;
pub mod describer;
pub mod error;
pub mod pipeline;
pub mod writer;

pub use error::{Error, Result};
