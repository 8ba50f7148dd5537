/// Fit-to-box リサイズのレイアウト
///
/// `inner` はアスペクト比を維持して縮小・拡大した画像の寸法、
/// `canvas` は出力画像全体の寸法。`offset` は canvas 上の inner の左上位置で、
/// それ以外の領域は透明で埋められる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitLayout {
    pub canvas: (u32, u32),
    pub inner: (u32, u32),
    pub offset: (u32, u32),
}

impl FitLayout {
    /// パディングが必要かどうか
    pub fn needs_padding(&self) -> bool {
        self.canvas != self.inner
    }
}

/// 倍率を適用して新しい寸法を計算する
fn apply_scale(src_w: u32, src_h: u32, scale: f64) -> (u32, u32) {
    let new_w = (src_w as f64 * scale).round() as u32;
    let new_h = (src_h as f64 * scale).round() as u32;

    // 最小1pxを保証
    (new_w.max(1), new_h.max(1))
}

/// 幅のみ指定時の寸法を計算する（高さはアスペクト比から導出）
fn calculate_width_only(src_w: u32, src_h: u32, target_w: u32) -> (u32, u32) {
    let scale = target_w as f64 / src_w as f64;
    let (_, h) = apply_scale(src_w, src_h, scale);
    (target_w, h)
}

/// 高さのみ指定時の寸法を計算する（幅はアスペクト比から導出）
fn calculate_height_only(src_w: u32, src_h: u32, target_h: u32) -> (u32, u32) {
    let scale = target_h as f64 / src_h as f64;
    let (w, _) = apply_scale(src_w, src_h, scale);
    (w, target_h)
}

/// Contain モードのレイアウトを計算する
///
/// 両方指定時は出力が必ず `target_w x target_h` になり、
/// 収まらない部分はクロップせずにパディングする。拡大も許可する。
pub fn calculate_fit_layout(
    src_w: u32,
    src_h: u32,
    target_w: Option<u32>,
    target_h: Option<u32>,
) -> FitLayout {
    match (target_w, target_h) {
        (Some(w), Some(h)) => {
            let scale = (w as f64 / src_w as f64).min(h as f64 / src_h as f64);
            let (inner_w, inner_h) = apply_scale(src_w, src_h, scale);
            // 丸め誤差で枠をはみ出さないようにする
            let inner = (inner_w.min(w), inner_h.min(h));
            FitLayout {
                canvas: (w, h),
                inner,
                offset: ((w - inner.0) / 2, (h - inner.1) / 2),
            }
        }
        (Some(w), None) => unpadded(calculate_width_only(src_w, src_h, w)),
        (None, Some(h)) => unpadded(calculate_height_only(src_w, src_h, h)),
        (None, None) => unpadded((src_w, src_h)),
    }
}

fn unpadded(size: (u32, u32)) -> FitLayout {
    FitLayout {
        canvas: size,
        inner: size,
        offset: (0, 0),
    }
}
