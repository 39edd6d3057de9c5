//! Filesystem helpers built on `cap-std` and `camino`.

use std::io;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

/// Open a UTF-8 file path using ambient authority.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Return whether `path` exists and is a regular file.
///
/// A missing file surfaces as an [`io::ErrorKind::NotFound`] error so callers
/// can tell "absent" apart from "not a file".
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other("path should include a file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::rstest;
    use tempfile::TempDir;

    fn utf8(dir: &TempDir, name: &str) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().join(name)).expect("utf-8 temp path")
    }

    #[rstest]
    fn distinguishes_files_directories_and_missing_paths() {
        let dir = TempDir::new().expect("temp dir");
        let file = utf8(&dir, "deliveries.csv");
        std::fs::write(&file, "id\n").expect("write");
        std::fs::create_dir(utf8(&dir, "nested")).expect("mkdir");

        assert!(file_is_file(&file).expect("file"));
        assert!(!file_is_file(&utf8(&dir, "nested")).expect("dir"));
        let missing = file_is_file(&utf8(&dir, "missing.csv")).expect_err("missing");
        assert_eq!(missing.kind(), io::ErrorKind::NotFound);
        assert!(open_utf8_file(&file).is_ok());
    }
}
