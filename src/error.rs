use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgroVisionError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("対応していない画像形式です: {0}（JPG, PNG, WEBP, GIF, BMP）")]
    UnsupportedImage(String),

    #[error("HTTPクライアントの初期化に失敗: {0}")]
    HttpClient(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] agrovision_common::Error),

    /// 解析失敗。メッセージは画面表示と同じ
    #[error("{0}")]
    Diagnosis(String),
}

pub type Result<T> = std::result::Result<T, AgroVisionError>;
