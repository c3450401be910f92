//! 予測エンドポイント設定

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// ローカルで起動した予測サーバーの既定URL
pub const DEFAULT_PREDICT_URL: &str = "http://127.0.0.1:5000/predict";

const PREDICT_PATH: &str = "/predict";

/// 画像をPOSTする先のURL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Endpoint(String);

impl Endpoint {
    /// URLを検証して作る。`http://` か `https://` で始まり、ホスト部が空でないこと
    pub fn parse(url: &str) -> Result<Self> {
        let trimmed = url.trim();
        let rest = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"))
            .ok_or_else(|| Error::InvalidEndpoint(url.to_string()))?;

        let host = rest.split('/').next().unwrap_or_default();
        if host.is_empty() || trimmed.chars().any(char::is_whitespace) {
            return Err(Error::InvalidEndpoint(url.to_string()));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// サーバーの生存確認用URL（末尾の `/predict` を外したルート）
    pub fn health_url(&self) -> String {
        let base = self.0.trim_end_matches('/');
        let root = base.strip_suffix(PREDICT_PATH).unwrap_or(base);
        format!("{}/", root)
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self(DEFAULT_PREDICT_URL.to_string())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Endpoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Endpoint {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Endpoint> for String {
    fn from(endpoint: Endpoint) -> Self {
        endpoint.0
    }
}
