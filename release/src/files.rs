//! Small filesystem helpers.

use crate::error::Result;
use camino::Utf8Path;
use std::fs;
use std::io::ErrorKind;

/// Delete `path`, treating an already-missing file as success.
pub(crate) fn remove_if_exists(path: &Utf8Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    #[test]
    fn removes_existing_and_tolerates_missing() {
        let dir = TempDir::new().expect("temp dir");
        let path = Utf8PathBuf::try_from(dir.path().join("stale.md")).expect("UTF-8 temp dir");
        fs::write(&path, "stale").expect("write");

        remove_if_exists(&path).expect("existing file removed");
        assert!(!path.exists());
        remove_if_exists(&path).expect("missing file is fine");
    }
}
