//! Disk writer for generated files.

use std::fs;
use std::path::Path;

use super::{GeneratedFile, ScaffoldError};

/// Write every generated file under `base_path`, creating intermediate
/// directories and overwriting existing files. Failures are fatal; files
/// already written are left in place.
pub fn write_files(base_path: &Path, files: &[GeneratedFile]) -> Result<(), ScaffoldError> {
    for file in files {
        let full_path = base_path.join(&file.relative_path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(ScaffoldError::CreateDir)?;
        }
        fs::write(&full_path, &file.content).map_err(ScaffoldError::WriteFile)?;
    }
    Ok(())
}
