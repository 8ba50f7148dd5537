use crate::constants::DEFAULT_EXTENSION;
use crate::errors::MediaError;
use crate::transform::OutputFormat;
use crate::validation::{parse_dimension, validate_filename};

/// 1 リクエスト分の変換指定
///
/// HTTP ハンドラもキャッシュも [`ProcessingRequest::parse`] を通した値だけを扱う
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingRequest {
    filename: String,
    width: Option<u32>,
    height: Option<u32>,
    format: Option<String>,
}

impl ProcessingRequest {
    /// 生のクエリ値を検証して ProcessingRequest を作成する
    ///
    /// 検証順: filename の有無 → 幅・高さ → ファイル名の安全性。
    /// 出力フォーマットの解決は元画像の存在確認の後に [`Self::output_format`] で行う
    pub fn parse(
        filename: Option<&str>,
        width: Option<&str>,
        height: Option<&str>,
        format: Option<&str>,
    ) -> Result<Self, MediaError> {
        let filename = filename
            .filter(|f| !f.is_empty())
            .ok_or(MediaError::MissingParameter("filename"))?;

        let width = parse_dimension(width)?;
        let height = parse_dimension(height)?;

        validate_filename(filename)?;

        Ok(Self {
            filename: filename.to_string(),
            width,
            height,
            format: format.filter(|f| !f.is_empty()).map(str::to_string),
        })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn width(&self) -> Option<u32> {
        self.width
    }

    pub fn height(&self) -> Option<u32> {
        self.height
    }

    /// リクエストで明示されたフォーマット（未指定なら None）
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    /// 出力拡張子に対応するエンコード形式
    ///
    /// 対応していない拡張子なら `UnsupportedFormat`
    pub fn output_format(&self) -> Result<OutputFormat, MediaError> {
        let extension = self.extension();
        OutputFormat::from_extension(extension)
            .ok_or_else(|| MediaError::UnsupportedFormat(extension.to_string()))
    }

    pub fn has_dimensions(&self) -> bool {
        self.width.is_some() || self.height.is_some()
    }

    /// 拡張子を除いたファイル名
    pub fn base_name(&self) -> &str {
        split_extension(&self.filename).0
    }

    /// 出力ファイルの拡張子（ドットなし）
    ///
    /// 指定フォーマット → 元ファイルの拡張子 → `jpg` の順で決まる
    pub fn extension(&self) -> &str {
        resolve_extension(&self.filename, self.format.as_deref())
    }
}

fn resolve_extension<'a>(filename: &'a str, format: Option<&'a str>) -> &'a str {
    format
        .or_else(|| split_extension(filename).1)
        .unwrap_or(DEFAULT_EXTENSION)
}

/// 最後のドットで base と拡張子に分ける。拡張子が空なら None
fn split_extension(filename: &str) -> (&str, Option<&str>) {
    match filename.rsplit_once('.') {
        Some((base, ext)) if !base.is_empty() => (base, Some(ext).filter(|e| !e.is_empty())),
        _ => (filename, None),
    }
}
