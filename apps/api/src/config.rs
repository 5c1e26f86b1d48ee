use anyhow::{ensure, Context, Result};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
///
/// `GOOGLE_API_KEY` is read once here and handed to the Gemini client. A missing key
/// does not stop startup; every analysis request fails until it is set.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: Option<String>,
    pub port: u16,
    pub max_upload_bytes: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let max_upload_bytes = parse_max_upload_bytes(optional_env("MAX_UPLOAD_BYTES"))?;

        Ok(Config {
            google_api_key: optional_env("GOOGLE_API_KEY"),
            port: optional_env("PORT")
                .unwrap_or_else(|| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            max_upload_bytes,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

/// Reads `key`, treating an empty value the same as an unset one.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_max_upload_bytes(raw: Option<String>) -> Result<usize> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_MAX_UPLOAD_BYTES);
    };
    let bytes = raw
        .trim()
        .parse::<usize>()
        .context("MAX_UPLOAD_BYTES must be a positive integer")?;
    ensure!(bytes > 0, "MAX_UPLOAD_BYTES must be a positive integer");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_upload_bytes_defaults_when_unset() {
        assert_eq!(parse_max_upload_bytes(None).unwrap(), DEFAULT_MAX_UPLOAD_BYTES);
    }

    #[test]
    fn test_max_upload_bytes_parses_value() {
        assert_eq!(
            parse_max_upload_bytes(Some("2048".to_string())).unwrap(),
            2048
        );
    }

    #[test]
    fn test_max_upload_bytes_rejects_zero() {
        let err = parse_max_upload_bytes(Some("0".to_string())).unwrap_err();
        assert!(err.to_string().contains("positive integer"));
    }

    #[test]
    fn test_max_upload_bytes_rejects_garbage() {
        assert!(parse_max_upload_bytes(Some("ten megs".to_string())).is_err());
    }
}
