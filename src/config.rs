use crate::error::{AgroVisionError, Result};
use agrovision_common::Endpoint;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 環境変数でエンドポイントを上書きする
pub const ENDPOINT_ENV: &str = "AGROVISION_ENDPOINT";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub endpoint: Endpoint,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AgroVisionError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("agrovision").join("config.json"))
    }

    /// 使用するエンドポイント（フラグ > 環境変数 > 設定ファイル）
    pub fn resolve_endpoint(&self, flag: Option<&str>) -> Result<Endpoint> {
        let env = std::env::var(ENDPOINT_ENV).ok();
        self.resolve_endpoint_with(flag, env.as_deref())
    }

    /// 環境変数の値を引数で受け取る版（空白のみの値は未設定扱い）
    pub fn resolve_endpoint_with(&self, flag: Option<&str>, env: Option<&str>) -> Result<Endpoint> {
        if let Some(url) = flag {
            return Ok(Endpoint::parse(url)?);
        }

        if let Some(url) = env.filter(|url| !url.trim().is_empty()) {
            return Ok(Endpoint::parse(url)?);
        }

        Ok(self.endpoint.clone())
    }

    pub fn set_endpoint(&mut self, url: &str) -> Result<()> {
        self.endpoint = Endpoint::parse(url)?;
        self.save()
    }
}
