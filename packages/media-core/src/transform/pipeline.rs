use crate::errors::TransformError;
use crate::transform::decode::decode_image;
use crate::transform::dimensions::calculate_fit_layout;
use crate::transform::encode::encode_image;
use crate::transform::orientation::apply_exif_orientation;
use crate::transform::params::OutputFormat;
use crate::transform::resize::{check_pixels, fit_image};

/// バリアント生成に必要なパラメータ
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub format: OutputFormat,
    pub quality: u8,
}

/// 元画像バイト列から指定サイズ・フォーマットの画像を生成する
///
/// CPU バウンドなので非同期コンテキストからは spawn_blocking 経由で呼ぶこと
pub fn render_variant(input: &[u8], options: &RenderOptions) -> Result<Vec<u8>, TransformError> {
    let (img, _) = decode_image(input)?;
    let img = apply_exif_orientation(img, input);

    let (src_w, src_h) = (img.width(), img.height());
    check_pixels(src_w, src_h)?;

    let img = if options.width.is_some() || options.height.is_some() {
        let layout = calculate_fit_layout(src_w, src_h, options.width, options.height);
        // 片方の辺だけ指定された場合、導出された辺が極端に大きくなることがある
        check_pixels(layout.canvas.0, layout.canvas.1)?;
        fit_image(&img, &layout)?
    } else {
        img
    };

    encode_image(&img, options.format, options.quality)
}
