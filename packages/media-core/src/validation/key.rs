use crate::errors::MediaError;

/// ファイル名の最大長
const MAX_FILENAME_LEN: usize = 255;

/// 入力ディレクトリ直下のファイル名として安全かを検証する
///
/// 入力ディレクトリはフラットなので、パス区切りを含む名前はすべて拒否する。
/// 先頭ドットの拒否で `.` と `..` も弾かれる（`my..photo.jpg` は許可）。
/// 二重エンコード経由のトラバーサルを防ぐため URL デコード後の値も検査する
pub fn validate_filename(filename: &str) -> Result<(), MediaError> {
    let invalid = || MediaError::InvalidFilename(filename.to_string());

    if filename.is_empty() {
        return Err(MediaError::MissingParameter("filename"));
    }

    if filename.len() > MAX_FILENAME_LEN {
        return Err(invalid());
    }

    let decoded = urlencoding::decode(filename).map_err(|_| invalid())?;

    for candidate in [filename, decoded.as_ref()] {
        if candidate.starts_with('.')
            || candidate.contains('/')
            || candidate.contains('\\')
            || candidate.chars().any(char::is_control)
        {
            return Err(invalid());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_filenames() {
        assert!(validate_filename("sample.jpg").is_ok());
        assert!(validate_filename("photo-123_final.png").is_ok());
        assert!(validate_filename("no_extension").is_ok());
        assert!(validate_filename("family photo.jpeg").is_ok());
        assert!(validate_filename("my..photo.jpg").is_ok());
    }

    #[test]
    fn test_empty_filename() {
        assert!(matches!(
            validate_filename(""),
            Err(MediaError::MissingParameter("filename"))
        ));
    }

    #[test]
    fn test_path_traversal() {
        assert!(validate_filename("../etc/passwd").is_err());
        assert!(validate_filename("folder/image.jpg").is_err());
        assert!(validate_filename("..\\secret.jpg").is_err());
        assert!(validate_filename("%2e%2e%2fsecret.jpg").is_err());
        assert!(validate_filename(".hidden.jpg").is_err());
        assert!(validate_filename("..").is_err());
        assert!(validate_filename("%2e%2e").is_err());
    }

    #[test]
    fn test_too_long() {
        let name = format!("{}.jpg", "a".repeat(300));
        assert!(matches!(
            validate_filename(&name),
            Err(MediaError::InvalidFilename(_))
        ));
    }
}
