use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{PatchError, PatchResult};
use crate::error_handling::fs_operation;

/// Full text of one file, held in memory between read and write
#[derive(Debug, Clone)]
pub struct DocumentBuffer {
    path: PathBuf,
    text: String,
}

impl DocumentBuffer {
    /// Read the whole file and decode it as UTF-8.
    ///
    /// The handle lives only inside this call and is closed on every exit
    /// path, including decode failures.
    pub fn load(path: impl AsRef<Path>) -> PatchResult<Self> {
        let path = path.as_ref();

        let bytes = {
            let mut file = fs_operation(|| File::open(path), path, "reading")?;
            let mut bytes = Vec::new();
            fs_operation(|| file.read_to_end(&mut bytes), path, "reading")?;
            bytes
        };
        debug!("Read {} bytes from {}", bytes.len(), path.display());

        let text = String::from_utf8(bytes).map_err(|e| PatchError::decode_error(path, e))?;

        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace every non-overlapping occurrence of `old` with `new`, left to right.
    /// Returns the number of occurrences replaced.
    pub fn replace_all(&mut self, old: &str, new: &str) -> usize {
        let count = count_occurrences(&self.text, old);
        if count > 0 {
            self.text = self.text.replace(old, new);
        }
        count
    }

    /// Truncate the file and write the buffer back to it.
    ///
    /// Not atomic: the file is emptied before the new content lands.
    pub fn store(&self) -> PatchResult<()> {
        let path = self.path.as_path();
        let mut file = fs_operation(|| File::create(path), path, "writing")?;
        fs_operation(|| file.write_all(self.text.as_bytes()), path, "writing")?;
        fs_operation(|| file.flush(), path, "writing")?;
        debug!("Wrote {} bytes to {}", self.text.len(), path.display());
        Ok(())
    }
}

/// Count non-overlapping occurrences of `literal`, scanning left to right.
/// An empty literal matches at each char boundary, so `"abc"` yields 4.
pub fn count_occurrences(text: &str, literal: &str) -> usize {
    text.matches(literal).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_count_is_non_overlapping() {
        assert_eq!(count_occurrences("aaaa", "aa"), 2);
        assert_eq!(count_occurrences("aaa", "aa"), 1);
        assert_eq!(count_occurrences("abc", "x"), 0);
        assert_eq!(count_occurrences("abc", ""), 4);
        assert_eq!(count_occurrences("", ""), 1);
    }

    #[test]
    fn test_replace_all_scans_left_to_right() {
        let mut doc = DocumentBuffer {
            path: PathBuf::from("mem.txt"),
            text: "aaa".to_string(),
        };
        assert_eq!(doc.replace_all("aa", "b"), 1);
        assert_eq!(doc.text(), "ba");
    }

    #[test]
    fn test_replace_all_is_case_sensitive() {
        let mut doc = DocumentBuffer {
            path: PathBuf::from("mem.txt"),
            text: "World world WORLD".to_string(),
        };
        assert_eq!(doc.replace_all("world", "there"), 1);
        assert_eq!(doc.text(), "World there WORLD");
    }

    #[test]
    fn test_load_and_store() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "first line\nsecond line\n").unwrap();

        let mut doc = DocumentBuffer::load(file.path()).unwrap();
        assert_eq!(doc.path(), file.path());
        assert_eq!(doc.replace_all("second", "2nd"), 1);
        doc.store().unwrap();

        assert_eq!(
            fs::read_to_string(file.path()).unwrap(),
            "first line\n2nd line\n"
        );
    }

    #[test]
    fn test_store_truncates_longer_content() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "a very long line that will shrink").unwrap();

        let mut doc = DocumentBuffer::load(file.path()).unwrap();
        doc.replace_all("a very long line that will shrink", "short");
        doc.store().unwrap();

        assert_eq!(fs::read_to_string(file.path()).unwrap(), "short");
    }

    #[test]
    fn test_load_rejects_invalid_utf8() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), [b'o', b'k', 0xff, 0xfe]).unwrap();

        let err = DocumentBuffer::load(file.path()).unwrap_err();
        assert!(matches!(err, PatchError::Decode { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = DocumentBuffer::load(dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, PatchError::NotFound { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_store_on_read_only_file_is_permission_denied() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("locked.tsx");
        fs::write(&path, "text: \"old\"").unwrap();

        let mut doc = DocumentBuffer::load(&path).unwrap();
        doc.replace_all("old", "new");

        fs::set_permissions(&path, fs::Permissions::from_mode(0o444)).unwrap();

        // root ignores the mode bits, nothing to observe then
        if fs::OpenOptions::new().write(true).open(&path).is_ok() {
            return;
        }

        let err = doc.store().unwrap_err();
        match err {
            PatchError::PermissionDenied { operation, .. } => assert_eq!(operation, "writing"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), "text: \"old\"");
    }

    #[test]
    fn test_byte_order_mark_is_preserved() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "\u{feff}hello").unwrap();

        let mut doc = DocumentBuffer::load(file.path()).unwrap();
        doc.replace_all("hello", "bye");
        doc.store().unwrap();

        assert_eq!(fs::read(file.path()).unwrap(), "\u{feff}bye".as_bytes());
    }
}
