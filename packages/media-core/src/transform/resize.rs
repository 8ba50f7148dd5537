use crate::constants::MAX_PIXELS;
use crate::errors::TransformError;
use crate::transform::dimensions::FitLayout;
use fast_image_resize::{images::Image, FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::{imageops, DynamicImage, RgbaImage};

/// 画像をリサイズする
///
/// fast_image_resize を使用して高品質なリサイズを行う
/// Lanczos3 フィルタを使用。透過を保持するため RGBA8 で処理する
pub fn resize_image(
    img: &DynamicImage,
    target_w: u32,
    target_h: u32,
) -> Result<DynamicImage, TransformError> {
    check_pixels(target_w, target_h)?;

    let rgba_img = img.to_rgba8();
    let width = rgba_img.width();
    let height = rgba_img.height();

    let src_image = Image::from_vec_u8(width, height, rgba_img.into_raw(), PixelType::U8x4)
        .map_err(|e| {
            TransformError::ProcessingFailed(format!("failed to create source image: {e}"))
        })?;

    let mut dst_image = Image::new(target_w, target_h, PixelType::U8x4);

    let mut resizer = Resizer::new();
    resizer
        .resize(
            &src_image,
            &mut dst_image,
            &ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3)),
        )
        .map_err(|e| TransformError::ProcessingFailed(format!("resize failed: {e}")))?;

    let resized = RgbaImage::from_raw(target_w, target_h, dst_image.into_vec()).ok_or_else(|| {
        TransformError::ProcessingFailed("failed to convert resized image".to_string())
    })?;

    Ok(DynamicImage::ImageRgba8(resized))
}

/// レイアウトに従ってリサイズし、余白を完全な透明で埋める
///
/// クロップや変形は行わない
pub fn fit_image(img: &DynamicImage, layout: &FitLayout) -> Result<DynamicImage, TransformError> {
    let (inner_w, inner_h) = layout.inner;
    let inner = if (img.width(), img.height()) == layout.inner {
        img.clone()
    } else {
        resize_image(img, inner_w, inner_h)?
    };

    if !layout.needs_padding() {
        return Ok(inner);
    }

    let (canvas_w, canvas_h) = layout.canvas;
    check_pixels(canvas_w, canvas_h)?;

    // RgbaImage::new はゼロ埋め = 透明
    let mut canvas = RgbaImage::new(canvas_w, canvas_h);
    let (x, y) = layout.offset;
    imageops::replace(&mut canvas, &inner.to_rgba8(), i64::from(x), i64::from(y));

    Ok(DynamicImage::ImageRgba8(canvas))
}

/// 総ピクセル数を検証し、メモリ枯渇を防ぐ
pub(crate) fn check_pixels(width: u32, height: u32) -> Result<(), TransformError> {
    let total_pixels = width as u64 * height as u64;
    if total_pixels > MAX_PIXELS {
        return Err(TransformError::ResolutionTooLarge { width, height });
    }
    Ok(())
}
