use std::path::PathBuf;

use crate::cache::derive_key;
use crate::config::MediaConfig;
use crate::errors::{MediaError, StorageError, TransformError};
use crate::request::ProcessingRequest;
use crate::storage::{write_atomic, SourceStore};
use crate::transform::{render_variant, RenderOptions};

/// 元画像からバリアントを生成して出力ディレクトリに書き込む
#[derive(Debug, Clone)]
pub struct ImageTransformer {
    sources: SourceStore,
    output_dir: PathBuf,
    quality: u8,
}

impl ImageTransformer {
    pub fn new(config: &MediaConfig) -> Self {
        Self {
            sources: SourceStore::new(&config.input_dir),
            output_dir: config.output_dir.clone(),
            quality: config.quality,
        }
    }

    /// バリアントを生成し、出力ファイルの絶対パスを返す
    ///
    /// 出力先はキャッシュと同じ [`derive_key`] で決まる。既存ファイルは上書きする
    pub async fn transform(&self, request: &ProcessingRequest) -> Result<PathBuf, MediaError> {
        // コーデックの失敗から推測せず、先に存在を確認する
        if !self.sources.exists(request.filename()).await? {
            return Err(MediaError::SourceNotFound {
                filename: request.filename().to_string(),
            });
        }

        let format = request.output_format()?;

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| StorageError::io("failed to create output directory", &self.output_dir, e))?;
        let output_dir = tokio::fs::canonicalize(&self.output_dir)
            .await
            .map_err(|e| StorageError::io("failed to resolve output directory", &self.output_dir, e))?;

        let input = self.sources.read(request.filename()).await?;
        let key = derive_key(request);
        let options = RenderOptions {
            width: request.width(),
            height: request.height(),
            format,
            quality: self.quality,
        };

        tracing::info!(
            filename = %request.filename(),
            key = %key,
            w = ?options.width,
            h = ?options.height,
            f = ?options.format,
            "transforming image"
        );

        let path = tokio::task::spawn_blocking(move || -> Result<PathBuf, MediaError> {
            let output = render_variant(&input, &options)?;
            Ok(write_atomic(&output_dir, &key, &output)?)
        })
        .await
        .map_err(|e| TransformError::ProcessingFailed(format!("transform task failed: {e}")))??;

        tracing::debug!(path = %path.display(), "variant written");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, GenericImageView};

    fn setup() -> (tempfile::TempDir, MediaConfig) {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input");
        std::fs::create_dir(&input).unwrap();
        DynamicImage::new_rgb8(640, 480)
            .save(input.join("sample.jpg"))
            .unwrap();
        let config = MediaConfig::new(input, dir.path().join("output").join("nested"));
        (dir, config)
    }

    #[tokio::test]
    async fn test_transform_writes_derived_key() {
        let (_dir, config) = setup();
        let transformer = ImageTransformer::new(&config);
        let request =
            ProcessingRequest::parse(Some("sample.jpg"), Some("300"), Some("200"), None).unwrap();

        let path = transformer.transform(&request).await.unwrap();

        assert!(path.is_absolute());
        assert_eq!(path.file_name().unwrap(), "sample_300x200.jpg");
        let img = image::open(&path).unwrap();
        assert_eq!(img.dimensions(), (300, 200));
    }

    #[tokio::test]
    async fn test_transform_reencodes_without_resize() {
        let (_dir, config) = setup();
        let transformer = ImageTransformer::new(&config);
        let request = ProcessingRequest::parse(Some("sample.jpg"), None, None, Some("png")).unwrap();

        let path = transformer.transform(&request).await.unwrap();

        assert_eq!(path.file_name().unwrap(), "sample.png");
        let data = std::fs::read(&path).unwrap();
        assert_eq!(&data[0..4], &[0x89, 0x50, 0x4E, 0x47]);
        assert_eq!(image::open(&path).unwrap().dimensions(), (640, 480));
    }

    #[tokio::test]
    async fn test_transform_source_not_found() {
        let (_dir, config) = setup();
        let transformer = ImageTransformer::new(&config);
        let request = ProcessingRequest::parse(Some("ghost.jpg"), None, None, None).unwrap();

        assert!(matches!(
            transformer.transform(&request).await,
            Err(MediaError::SourceNotFound { filename }) if filename == "ghost.jpg"
        ));
        // 失敗時は出力ディレクトリも作らない
        assert!(!config.output_dir.exists());
    }

    #[tokio::test]
    async fn test_transform_corrupt_source_leaves_no_artifact() {
        let (_dir, config) = setup();
        std::fs::write(config.input_dir.join("broken.jpg"), b"not really a jpeg").unwrap();
        let transformer = ImageTransformer::new(&config);
        let request = ProcessingRequest::parse(Some("broken.jpg"), Some("10"), None, None).unwrap();

        let result = transformer.transform(&request).await;

        assert!(matches!(result, Err(MediaError::Transform(_))));
        assert!(!config.output_dir.join("broken_10xauto.jpg").exists());
    }
}
