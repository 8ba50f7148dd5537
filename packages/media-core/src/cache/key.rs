use crate::constants::AUTO_DIMENSION;
use crate::request::ProcessingRequest;

/// リクエストからキャッシュキー（= 出力ファイル名）を導出する
///
/// `{base}{_WxH}.{ext}` の形式。幅・高さの片方だけ指定された場合は
/// もう片方を `auto` とする。base はファイル名をそのまま使い、エスケープしない。
///
/// fit モードや背景色はキーに含まれない。これらを可変にする場合は
/// キーが衝突するので注意。
pub fn derive_key(request: &ProcessingRequest) -> String {
    let dims = if request.has_dimensions() {
        format!(
            "_{}x{}",
            dimension_token(request.width()),
            dimension_token(request.height())
        )
    } else {
        String::new()
    };

    format!("{}{}.{}", request.base_name(), dims, request.extension())
}

fn dimension_token(value: Option<u32>) -> String {
    value.map_or_else(|| AUTO_DIMENSION.to_string(), |v| v.to_string())
}
