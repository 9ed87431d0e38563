use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::ConvertError;

/// Writes the complete buffer next to `dest` and renames it into place,
/// so the destination is either fully written or untouched.
pub fn write_atomic(dest: &Path, bytes: &[u8]) -> Result<(), ConvertError> {
    let wrap = |source| ConvertError::OutputWrite {
        path: dest.to_path_buf(),
        source,
    };

    let dir = parent_dir(dest);
    let mut tmp = NamedTempFile::new_in(&dir).map_err(wrap)?;
    tmp.write_all(bytes).map_err(wrap)?;
    tmp.as_file().sync_all().map_err(wrap)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .map_err(wrap)?;
    }

    tmp.persist(dest).map_err(|e| wrap(e.error))?;
    tracing::debug!(path = %dest.display(), "renamed temporary file into place");
    Ok(())
}

fn parent_dir(dest: &Path) -> PathBuf {
    match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
