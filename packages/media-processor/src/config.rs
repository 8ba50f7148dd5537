use std::net::SocketAddr;
use std::path::PathBuf;

use media_core::{MediaConfig, DEFAULT_QUALITY};

const DEFAULT_INPUT_DIR: &str = "images";
const DEFAULT_OUTPUT_DIR: &str = "images/processed";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// プロセス全体の設定
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    pub media: MediaConfig,
    pub bind_addr: SocketAddr,
    /// 設定されていればルート外のパスを静的ファイルとして配信する
    pub static_dir: Option<PathBuf>,
}

impl ProcessorConfig {
    /// 環境変数から ProcessorConfig を作成する
    ///
    /// 任意の環境変数:
    /// - MEDIA_INPUT_DIR (default: images)
    /// - MEDIA_OUTPUT_DIR (default: images/processed)
    /// - MEDIA_QUALITY (default: 80)
    /// - BIND_ADDR (default: 0.0.0.0:3000)
    /// - STATIC_DIR
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let input_dir = var("MEDIA_INPUT_DIR").unwrap_or_else(|| DEFAULT_INPUT_DIR.to_string());
        let output_dir = var("MEDIA_OUTPUT_DIR").unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());

        let quality = match var("MEDIA_QUALITY") {
            Some(raw) => raw
                .trim()
                .parse::<u8>()
                .map_err(|_| format!("MEDIA_QUALITY must be 1-100, got {raw}"))?,
            None => DEFAULT_QUALITY,
        };
        let media = MediaConfig::new(input_dir, output_dir)
            .with_quality(quality)
            .map_err(|e| format!("MEDIA_QUALITY: {e}"))?;

        let raw_addr = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse()
            .map_err(|_| format!("BIND_ADDR is not a valid socket address: {raw_addr}"))?;

        Ok(Self {
            media,
            bind_addr,
            static_dir: var("STATIC_DIR").map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<ProcessorConfig, String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ProcessorConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.media.input_dir, PathBuf::from("images"));
        assert_eq!(config.media.output_dir, PathBuf::from("images/processed"));
        assert_eq!(config.media.quality, DEFAULT_QUALITY);
        assert_eq!(config.bind_addr.port(), 3000);
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("MEDIA_INPUT_DIR", "/srv/in"),
            ("MEDIA_OUTPUT_DIR", "/srv/out"),
            ("MEDIA_QUALITY", "90"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("STATIC_DIR", "public"),
        ])
        .unwrap();
        assert_eq!(config.media.input_dir, PathBuf::from("/srv/in"));
        assert_eq!(config.media.quality, 90);
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.static_dir, Some(PathBuf::from("public")));
    }

    #[test]
    fn test_invalid_values() {
        assert!(config_from(&[("MEDIA_QUALITY", "0")]).is_err());
        assert!(config_from(&[("MEDIA_QUALITY", "high")]).is_err());
        assert!(config_from(&[("BIND_ADDR", "localhost")]).is_err());
    }
}
