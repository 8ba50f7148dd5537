use std::path::PathBuf;

use crate::errors::StorageError;

/// 出力ディレクトリ上の生成済みバリアントを探す
///
/// 読み取り専用。存在確認に失敗した場合はミス扱いにして再生成させる
#[derive(Debug, Clone)]
pub struct CacheStore {
    output_dir: PathBuf,
}

impl CacheStore {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// キーに対応するファイルがあればそのパスを返す
    pub async fn lookup(&self, key: &str) -> Option<PathBuf> {
        match self.probe(key).await {
            Ok(found) => found,
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "cache probe failed, treating as miss");
                None
            }
        }
    }

    async fn probe(&self, key: &str) -> Result<Option<PathBuf>, StorageError> {
        let path = self.output_dir.join(key);

        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => Ok(Some(path)),
            Ok(_) => Ok(None),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::ProbeFailed { path, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookup_miss() {
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(dir.path());
        assert_eq!(store.lookup("sample.png").await, None);
    }

    #[tokio::test]
    async fn test_lookup_hit() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("sample.png"), b"png").unwrap();

        let store = CacheStore::new(dir.path());
        assert_eq!(
            store.lookup("sample.png").await,
            Some(dir.path().join("sample.png"))
        );
    }

    #[tokio::test]
    async fn test_lookup_missing_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(dir.path().join("not-created-yet"));
        assert_eq!(store.lookup("sample.png").await, None);
    }

    #[tokio::test]
    async fn test_probe_error_is_a_miss() {
        let dir = tempfile::tempdir().unwrap();
        // 出力ディレクトリの位置に通常ファイルがあると metadata は NotFound 以外で失敗する
        let not_a_dir = dir.path().join("processed");
        std::fs::write(&not_a_dir, b"file").unwrap();

        let store = CacheStore::new(&not_a_dir);
        assert!(matches!(
            store.probe("sample.jpg").await,
            Err(StorageError::ProbeFailed { .. })
        ));
        assert_eq!(store.lookup("sample.jpg").await, None);
    }

    #[tokio::test]
    async fn test_directory_is_not_a_hit() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sample.png")).unwrap();

        let store = CacheStore::new(dir.path());
        assert_eq!(store.lookup("sample.png").await, None);
    }
}
