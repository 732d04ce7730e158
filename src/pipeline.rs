use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::analysis::analyze_gesture;
use crate::annotation::UserRecord;
use crate::dataset::{dir_name, subdirectories};
use crate::describer::Describer;
use crate::error::Result;
use crate::writer::AnnotationWriter;

/// Builds the record of one user directory, gesture by gesture.
pub fn annotate_user<D>(user_dir: &Path, describer: &mut D) -> Result<UserRecord>
where
    D: Describer + ?Sized,
{
    let mut record = UserRecord::new(dir_name(user_dir));
    for gesture_dir in subdirectories(user_dir)? {
        let gesture_dir = gesture_dir?;
        info!("Analyzing gesture: {}", dir_name(&gesture_dir));
        let annotation = analyze_gesture(&gesture_dir, describer)?;
        record.merge(&annotation);
    }
    Ok(record)
}

/// Walks every user under `root` and writes one row each. Returns the
/// number of rows written. Stops at the first error; rows already written
/// stay in the output.
pub fn annotate_dataset<D, W>(
    root: &Path,
    describer: &mut D,
    writer: &mut AnnotationWriter<W>,
) -> Result<usize>
where
    D: Describer + ?Sized,
    W: Write,
{
    for user_dir in subdirectories(root)? {
        let user_dir = user_dir?;
        info!("Processing user: {}", dir_name(&user_dir));
        let record = annotate_user(&user_dir, describer)?;
        writer.write_record(&record)?;
        info!("User {} processed", record.id_user());
    }
    Ok(writer.rows_written())
}
