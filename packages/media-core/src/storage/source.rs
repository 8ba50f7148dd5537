use std::path::PathBuf;

use bytes::Bytes;

use crate::errors::StorageError;

/// 入力ディレクトリの元画像へのアクセス（読み取り専用）
#[derive(Debug, Clone)]
pub struct SourceStore {
    input_dir: PathBuf,
}

impl SourceStore {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
        }
    }

    pub fn path_of(&self, filename: &str) -> PathBuf {
        self.input_dir.join(filename)
    }

    /// 元画像が通常ファイルとして存在するか
    pub async fn exists(&self, filename: &str) -> Result<bool, StorageError> {
        let path = self.path_of(filename);
        match tokio::fs::metadata(&path).await {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::io("failed to stat source image", path, e)),
        }
    }

    /// 元画像を読み込む
    pub async fn read(&self, filename: &str) -> Result<Bytes, StorageError> {
        let path = self.path_of(filename);
        let data = tokio::fs::read(&path)
            .await
            .map_err(|e| StorageError::io("failed to read source image", path, e))?;
        Ok(Bytes::from(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_exists_and_read() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("sample.jpg"), b"bytes").unwrap();

        let store = SourceStore::new(dir.path());
        assert!(store.exists("sample.jpg").await.unwrap());
        assert!(!store.exists("ghost.jpg").await.unwrap());
        assert_eq!(store.read("sample.jpg").await.unwrap(), Bytes::from_static(b"bytes"));
    }

    #[tokio::test]
    async fn test_directory_is_not_a_source() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("album.jpg")).unwrap();

        let store = SourceStore::new(dir.path());
        assert!(!store.exists("album.jpg").await.unwrap());
    }

    #[tokio::test]
    async fn test_read_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = SourceStore::new(dir.path());
        assert!(matches!(
            store.read("ghost.jpg").await,
            Err(StorageError::Io { .. })
        ));
    }
}
