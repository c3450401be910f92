//! エラー型定義

use thiserror::Error;

/// 予測サーバーが2xx以外を返したときの固定メッセージ
pub const SERVER_ERROR_HINT: &str = "Server error. Is the Python backend running?";

/// 共通エラー型
///
/// 解析中の失敗はすべてコントローラ境界で `to_string()` され、
/// 画面のエラーメッセージになる。
#[derive(Error, Debug)]
pub enum Error {
    /// 2xx以外のHTTPステータス。本文は読まない
    #[error("{}", SERVER_ERROR_HINT)]
    Server { status: u16 },

    /// 送信中の例外。メッセージをそのまま表示する
    #[error("{0}")]
    Transport(String),

    /// 2xxだが診断結果の形をしていない本文
    #[error("Unexpected response from server: {0}")]
    MalformedResponse(String),

    /// 結果が届く前に解析が破棄された
    #[error("Analysis was interrupted before the server responded")]
    Interrupted,

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// HTTPステータスから失敗を作る
    pub fn server(status: u16) -> Self {
        Error::Server { status }
    }

    /// 例外メッセージから失敗を作る
    pub fn transport(message: impl Into<String>) -> Self {
        Error::Transport(message.into())
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_message_is_fixed() {
        let not_found = Error::server(404);
        let internal = Error::server(500);
        assert_eq!(not_found.to_string(), SERVER_ERROR_HINT);
        assert_eq!(internal.to_string(), SERVER_ERROR_HINT);
    }

    #[test]
    fn test_server_error_hint_text() {
        assert_eq!(
            Error::server(503).to_string(),
            "Server error. Is the Python backend running?"
        );
    }

    #[test]
    fn test_transport_message_verbatim() {
        let error = Error::transport("Failed to fetch");
        assert_eq!(error.to_string(), "Failed to fetch");
    }

    #[test]
    fn test_error_display_malformed() {
        let error = Error::MalformedResponse("missing field `status`".to_string());
        let display = format!("{}", error);
        assert!(display.starts_with("Unexpected response from server"));
        assert!(display.contains("status"));
    }

    #[test]
    fn test_error_display_config() {
        let error = Error::Config("home directory not found".to_string());
        assert_eq!(error.to_string(), "Config error: home directory not found");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }
}
