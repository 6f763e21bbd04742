// Output file writing

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{PlaylistError, Result};

/// Create or truncate `path` and write `content` followed by one newline.
pub fn write_playlist(path: &Path, content: &str) -> Result<()> {
    let to_write_error = |source: std::io::Error| PlaylistError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(to_write_error)?;
    file.write_all(content.as_bytes()).map_err(to_write_error)?;
    file.write_all(b"\n").map_err(to_write_error)?;
    file.flush().map_err(to_write_error)?;

    log::debug!("Wrote {} bytes to {:?}", content.len() + 1, path);
    Ok(())
}
