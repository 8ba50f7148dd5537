use std::path::PathBuf;

use crate::cache::{derive_key, CacheStore};
use crate::config::MediaConfig;
use crate::errors::MediaError;
use crate::request::ProcessingRequest;
use crate::storage::SourceStore;
use crate::transform::OutputFormat;
use crate::transformer::ImageTransformer;

/// リクエストごとに解決された画像
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub format: OutputFormat,
    /// キャッシュから返した場合 true
    pub cached: bool,
}

/// キャッシュ確認 → 変換の順にリクエストを処理する
///
/// 状態を持たないので複数リクエストから共有してよい。同じキーの並行リクエストは
/// 両方ミスして両方変換することがあるが、書き込みはアトミックなので
/// 壊れたファイルが読まれることはない
#[derive(Debug, Clone)]
pub struct ImageService {
    sources: SourceStore,
    cache: CacheStore,
    transformer: ImageTransformer,
}

impl ImageService {
    pub fn new(config: MediaConfig) -> Self {
        Self {
            sources: SourceStore::new(&config.input_dir),
            cache: CacheStore::new(&config.output_dir),
            transformer: ImageTransformer::new(&config),
        }
    }

    pub async fn process(&self, request: &ProcessingRequest) -> Result<Artifact, MediaError> {
        if !self.sources.exists(request.filename()).await? {
            tracing::debug!(filename = %request.filename(), "source image not found");
            return Err(MediaError::SourceNotFound {
                filename: request.filename().to_string(),
            });
        }

        let format = request.output_format()?;

        let key = derive_key(request);
        if let Some(path) = self.cache.lookup(&key).await {
            tracing::info!(key = %key, "cache hit");
            return Ok(Artifact {
                path,
                format,
                cached: true,
            });
        }

        tracing::info!(key = %key, "cache miss");
        let path = self.transformer.transform(request).await?;

        Ok(Artifact {
            path,
            format,
            cached: false,
        })
    }
}
