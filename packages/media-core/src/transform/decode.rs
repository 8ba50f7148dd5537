use crate::errors::TransformError;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::io::Cursor;

/// 画像バイト列をデコードし、DynamicImage と元のフォーマットを返す
///
/// フォーマットは拡張子ではなく内容から推測する
pub fn decode_image(input: &[u8]) -> Result<(DynamicImage, Option<ImageFormat>), TransformError> {
    let reader = ImageReader::new(Cursor::new(input))
        .with_guessed_format()
        .map_err(|e| TransformError::ProcessingFailed(format!("failed to guess format: {e}")))?;

    let source_format = reader.format();

    let img = reader
        .decode()
        .map_err(|e| TransformError::ProcessingFailed(format!("decode failed: {e}")))?;

    Ok((img, source_format))
}
