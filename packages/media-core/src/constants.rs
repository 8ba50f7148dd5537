/// 画像の最大ピクセル数（1GP = 実質無制限、極端な攻撃のみ防止）
pub const MAX_PIXELS: u64 = 1_000_000_000;

/// デフォルト品質（1-100）
pub const DEFAULT_QUALITY: u8 = 80;

/// フォーマット指定も拡張子もない場合の出力拡張子
pub const DEFAULT_EXTENSION: &str = "jpg";

/// サイズ指定が片方だけの場合にキャッシュキーへ入れるトークン
pub const AUTO_DIMENSION: &str = "auto";
