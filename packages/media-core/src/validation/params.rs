use crate::errors::{MediaError, TransformError};

/// クエリ文字列の幅・高さをパースする
///
/// 空文字は未指定として扱う。数値でない・0 以下は `InvalidDimension`。
/// 上限は設けず、メモリ保護は変換時のピクセル数チェックに任せる
pub fn parse_dimension(raw: Option<&str>) -> Result<Option<u32>, MediaError> {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    let parsed: u32 = value.parse().map_err(|_| MediaError::InvalidDimension)?;
    if parsed == 0 {
        return Err(MediaError::InvalidDimension);
    }

    Ok(Some(parsed))
}

/// 品質を検証する
pub fn validate_quality(quality: u8) -> Result<(), TransformError> {
    if quality == 0 || quality > 100 {
        return Err(TransformError::InvalidParams(format!(
            "quality must be 1-100, got {quality}"
        )));
    }
    Ok(())
}
