//! Document output

use std::path::Path;

use curate_core::{OutputError, Result};
use tracing::{debug, instrument};

/// Write a rendered document, creating missing parent directories
#[instrument(skip(content), fields(path = %path.display(), len = content.len()))]
pub fn write_document(path: &Path, content: &str) -> Result<()> {
    let failed = |e: std::io::Error| OutputError::WriteFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(failed)?;
    }

    std::fs::write(path, content).map_err(failed)?;
    debug!("document written");
    Ok(())
}
