//! 予測レスポンスパーサー
//!
//! `/predict` の2xx本文を検証して `DiagnosisResult` にする。
//! 形が合わないものは描画せず `Error::MalformedResponse` として扱う。

use serde_json::error::Category;

use crate::error::{Error, Result};
use crate::types::DiagnosisResult;

/// 成功レスポンスの本文をパース
///
/// # Arguments
/// * `body` - レスポンス本文（JSONオブジェクト）
///
/// # Returns
/// * `Ok(DiagnosisResult)` - 4フィールドが揃っている
/// * `Err(Error::MalformedResponse)` - JSONでない、フィールド欠落・型違い、confidenceが0〜1の外
///
/// # Examples
/// ```
/// use agrovision_common::parse_diagnosis;
///
/// let body = r#"{"status":"healthy","disease":"Potato___healthy","confidence":0.97,"treatment":"Keep watering."}"#;
/// let result = parse_diagnosis(body).unwrap();
/// assert!(result.is_healthy());
/// ```
pub fn parse_diagnosis(body: &str) -> Result<DiagnosisResult> {
    let body = body.trim();

    // 構造体は配列形式でもデシリアライズできてしまうので先に弾く
    if body.starts_with('[') {
        return Err(Error::MalformedResponse("expected a JSON object".into()));
    }

    let result: DiagnosisResult = serde_json::from_str(body).map_err(|e| match e.classify() {
        Category::Data => Error::MalformedResponse(e.to_string()),
        _ => Error::MalformedResponse(format!("invalid JSON: {}", e)),
    })?;

    if !(0.0..=1.0).contains(&result.confidence) {
        return Err(Error::MalformedResponse(format!(
            "confidence {} is outside 0..1",
            result.confidence
        )));
    }

    Ok(result)
}
