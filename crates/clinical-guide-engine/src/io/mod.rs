use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid output directory: {0}")]
    InvalidOutputDir(String),
}

/// Make sure `output_root` exists and is a directory, creating it if needed.
pub fn prepare_output_dir(output_root: &Path) -> Result<(), IoError> {
    if output_root.exists() {
        if !output_root.is_dir() {
            return Err(IoError::InvalidOutputDir(format!(
                "{} exists and is not a directory",
                output_root.display()
            )));
        }
        return Ok(());
    }

    log::info!("Creating output directory {}", output_root.display());
    fs::create_dir_all(output_root)?;
    Ok(())
}

/// Write a rendered page below the output root, returning its absolute path.
pub fn write_page(
    relative_path: &RelativePath,
    output_root: &Path,
    html: &str,
) -> Result<PathBuf, IoError> {
    let absolute_path = relative_path.to_path(output_root);

    // Create parent directories if they don't exist
    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(&absolute_path, html)?;
    log::debug!("Wrote {}", absolute_path.display());
    Ok(absolute_path)
}
