use std::path::PathBuf;

use crate::constants::DEFAULT_QUALITY;
use crate::errors::TransformError;
use crate::validation::validate_quality;

/// 各コンポーネントに注入するディレクトリ・品質設定
#[derive(Debug, Clone)]
pub struct MediaConfig {
    /// 元画像のディレクトリ（読み取り専用）
    pub input_dir: PathBuf,
    /// 生成済みバリアントのディレクトリ（必要に応じて作成）
    pub output_dir: PathBuf,
    /// 非可逆エンコード時の品質（1-100）
    pub quality: u8,
}

impl MediaConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            quality: DEFAULT_QUALITY,
        }
    }

    pub fn with_quality(mut self, quality: u8) -> Result<Self, TransformError> {
        validate_quality(quality)?;
        self.quality = quality;
        Ok(self)
    }
}
