//! 設定ファイルのテスト

use agrovision::config::Config;
use agrovision::error::AgroVisionError;
use agrovision_common::{Endpoint, Error};
use tempfile::tempdir;

/// 設定ファイルがなければ既定値
#[test]
fn test_load_missing_file_uses_default() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).expect("読み込み失敗");
    assert_eq!(config.endpoint, Endpoint::default());
}

/// 保存と読み込み
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let config = Config {
        endpoint: Endpoint::parse("http://192.168.1.20:5000/predict").unwrap(),
    };
    config.save_to(&path).expect("保存失敗");

    let loaded = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(loaded.endpoint.as_str(), "http://192.168.1.20:5000/predict");
}

/// endpointキーがなくても既定値で読める
#[test]
fn test_load_empty_object() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{}").unwrap();

    let config = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(config.endpoint, Endpoint::default());
}

/// 不正なURLの設定ファイルはJSONエラー
#[test]
fn test_load_invalid_endpoint() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"endpoint": "localhost:5000"}"#).unwrap();

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(AgroVisionError::JsonParse(_))));
}

/// フラグ指定が最優先
#[test]
fn test_resolve_endpoint_flag() {
    let config = Config::default();
    let endpoint = config
        .resolve_endpoint(Some("http://10.0.0.5:8080/predict"))
        .expect("解決失敗");
    assert_eq!(endpoint.as_str(), "http://10.0.0.5:8080/predict");
}

#[test]
fn test_resolve_endpoint_invalid_flag() {
    let config = Config::default();
    let result = config.resolve_endpoint(Some("not-a-url"));
    assert!(matches!(
        result,
        Err(AgroVisionError::Common(Error::InvalidEndpoint(_)))
    ));
}

fn file_config() -> Config {
    Config {
        endpoint: Endpoint::parse("http://192.168.1.20:5000/predict").unwrap(),
    }
}

/// 環境変数は設定ファイルより優先
#[test]
fn test_resolve_endpoint_env_overrides_file() {
    let endpoint = file_config()
        .resolve_endpoint_with(None, Some("http://10.0.0.7:5000/predict"))
        .expect("解決失敗");
    assert_eq!(endpoint.as_str(), "http://10.0.0.7:5000/predict");
}

/// フラグは環境変数より優先
#[test]
fn test_resolve_endpoint_flag_overrides_env() {
    let endpoint = file_config()
        .resolve_endpoint_with(
            Some("http://10.0.0.5:8080/predict"),
            Some("http://10.0.0.7:5000/predict"),
        )
        .expect("解決失敗");
    assert_eq!(endpoint.as_str(), "http://10.0.0.5:8080/predict");
}

/// 空・空白のみの環境変数は無視して設定ファイルの値を使う
#[test]
fn test_resolve_endpoint_blank_env_ignored() {
    for blank in ["", "   ", "\t\n"] {
        let endpoint = file_config()
            .resolve_endpoint_with(None, Some(blank))
            .expect("解決失敗");
        assert_eq!(endpoint.as_str(), "http://192.168.1.20:5000/predict");
    }
}

/// 環境変数なしなら設定ファイルの値
#[test]
fn test_resolve_endpoint_without_env_uses_file() {
    let endpoint = file_config()
        .resolve_endpoint_with(None, None)
        .expect("解決失敗");
    assert_eq!(endpoint.as_str(), "http://192.168.1.20:5000/predict");
}

/// 不正な環境変数は設定ファイルにフォールバックせずエラー
#[test]
fn test_resolve_endpoint_invalid_env_rejected() {
    let result = file_config().resolve_endpoint_with(None, Some("localhost:5000"));
    assert!(matches!(
        result,
        Err(AgroVisionError::Common(Error::InvalidEndpoint(_)))
    ));
}
