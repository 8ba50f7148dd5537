use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::errors::StorageError;

/// 同じディレクトリの一時ファイルに書き込んでから rename で置き換える
///
/// 途中で失敗した場合、一時ファイルは drop 時に削除され `dir/name` には何も残らない。
/// 同じキーへの並行書き込みは最後に rename したものが残る。
/// ブロッキング I/O なので非同期コンテキストからは spawn_blocking 内で呼ぶこと
pub fn write_atomic(dir: &Path, name: &str, data: &[u8]) -> Result<PathBuf, StorageError> {
    let target = dir.join(name);

    let mut tmp = NamedTempFile::new_in(dir)
        .map_err(|e| StorageError::io("failed to create temporary file", dir, e))?;
    tmp.write_all(data)
        .map_err(|e| StorageError::io("failed to write temporary file", tmp.path(), e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| StorageError::io("failed to sync temporary file", tmp.path(), e))?;

    tmp.persist(&target)
        .map_err(|e| StorageError::io("failed to move file into place", &target, e.error))?;

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_atomic_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_atomic(dir.path(), "sample.png", b"first").unwrap();

        assert_eq!(path, dir.path().join("sample.png"));
        assert_eq!(std::fs::read(&path).unwrap(), b"first");
    }

    #[test]
    fn test_write_atomic_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        write_atomic(dir.path(), "sample.png", b"first").unwrap();
        let path = write_atomic(dir.path(), "sample.png", b"second").unwrap();

        assert_eq!(std::fs::read(path).unwrap(), b"second");
        // 一時ファイルが残っていないこと
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_atomic_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let result = write_atomic(&dir.path().join("missing"), "sample.png", b"data");
        assert!(matches!(result, Err(StorageError::Io { .. })));
    }
}
