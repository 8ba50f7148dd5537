use std::path::PathBuf;

use thiserror::Error;

/// メディア処理の統合エラー型
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("width and height must be positive numbers")]
    InvalidDimension,

    #[error("invalid filename: {0}")]
    InvalidFilename(String),

    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("source image not found: {filename}")]
    SourceNotFound { filename: String },

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("transform error: {0}")]
    Transform(#[from] TransformError),
}

impl MediaError {
    /// クライアント起因のエラーかどうか（4xx 相当）
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MissingParameter(_)
                | Self::InvalidDimension
                | Self::InvalidFilename(_)
                | Self::UnsupportedFormat(_)
                | Self::SourceNotFound { .. }
        )
    }
}

/// ストレージアクセスエラー
#[derive(Debug, Error)]
pub enum StorageError {
    /// キャッシュ存在確認の失敗（呼び出し側でミス扱いにする）
    #[error("cache probe failed for {}: {source}", path.display())]
    ProbeFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{context} ({}): {source}", path.display())]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    pub fn io(context: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            context,
            path: path.into(),
            source,
        }
    }
}

/// 画像変換エラー
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    #[error("image resolution exceeds maximum ({width}x{height})")]
    ResolutionTooLarge { width: u32, height: u32 },

    #[error("processing failed: {0}")]
    ProcessingFailed(String),
}
