use std::path::PathBuf;

use crate::describer::{DEFAULT_HOST, DEFAULT_MODEL};

pub const DEFAULT_DATASET: &str = "dataset";
pub const DEFAULT_OUTPUT: &str = "anotacoes_llava.csv";
pub const DEFAULT_PORT: u16 = 11434;

/// Run settings. `Config::default()` is the plain no-argument run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dataset: PathBuf,
    pub output: PathBuf,
    pub model: String,
    /// Normalized base URL of the inference server.
    pub host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from(DEFAULT_DATASET),
            output: PathBuf::from(DEFAULT_OUTPUT),
            model: DEFAULT_MODEL.to_string(),
            host: DEFAULT_HOST.to_string(),
        }
    }
}

/// Accepts a bare host, `host:port` or a full URL (the forms
/// `OLLAMA_HOST` usually takes) and strips trailing slashes. A bare host
/// gets Ollama's port 11434.
pub fn normalize_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.contains("://") {
        return host.to_string();
    }
    let authority = host.split('/').next().unwrap_or_default();
    // Skip past an IPv6 literal so its colons are not read as a port.
    let after_address = authority.rsplit(']').next().unwrap_or_default();
    if after_address.contains(':') {
        format!("http://{host}")
    } else {
        match host.split_once('/') {
            Some((authority, path)) => format!("http://{authority}:{DEFAULT_PORT}/{path}"),
            None => format!("http://{host}:{DEFAULT_PORT}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.dataset, PathBuf::from("dataset"));
        assert_eq!(config.output, PathBuf::from("anotacoes_llava.csv"));
        assert_eq!(config.model, "llava");
        assert_eq!(config.host, "http://localhost:11434");
    }

    #[test]
    fn host_normalization() {
        assert_eq!(normalize_host("0.0.0.0:11434"), "http://0.0.0.0:11434");
        assert_eq!(
            normalize_host("https://gpu-box:11434/"),
            "https://gpu-box:11434"
        );
        assert_eq!(
            normalize_host(" http://localhost:11434 "),
            "http://localhost:11434"
        );
    }

    #[test]
    fn bare_host_gets_ollama_port() {
        assert_eq!(normalize_host("localhost"), "http://localhost:11434");
        assert_eq!(normalize_host("0.0.0.0"), "http://0.0.0.0:11434");
        assert_eq!(normalize_host("gpu-box/"), "http://gpu-box:11434");
        assert_eq!(normalize_host("[::1]"), "http://[::1]:11434");
        assert_eq!(normalize_host("[::1]:8080"), "http://[::1]:8080");
    }
}
