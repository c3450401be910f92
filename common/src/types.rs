//! 診断結果の型定義
//!
//! 予測サーバー `/predict` の成功レスポンスをそのまま表す。

use serde::{Deserialize, Serialize};

/// 健康と判定されたときのステータス文字列
pub const HEALTHY_STATUS: &str = "healthy";

/// 診断結果
///
/// `status` はサーバー側の分類文字列で、`"healthy"` 以外は
/// `infected` / `critical` / `unknown` / `error` など何でもあり得る。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    pub status: String,
    /// 病名ラベル（`Potato___Early_blight` のようにアンダースコアを含む）
    pub disease: String,
    /// 0.0〜1.0
    pub confidence: f64,
    pub treatment: String,
}

impl DiagnosisResult {
    pub fn is_healthy(&self) -> bool {
        self.status == HEALTHY_STATUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_healthy() {
        let result = DiagnosisResult {
            status: "healthy".to_string(),
            ..Default::default()
        };
        assert!(result.is_healthy());
    }

    #[test]
    fn test_other_status_is_not_healthy() {
        for status in ["infected", "critical", "unknown", "error", "Healthy", ""] {
            let result = DiagnosisResult {
                status: status.to_string(),
                ..Default::default()
            };
            assert!(!result.is_healthy(), "{} は healthy ではない", status);
        }
    }

    #[test]
    fn test_diagnosis_serialize_field_names() {
        let result = DiagnosisResult {
            status: "critical".to_string(),
            disease: "Potato___Late_blight".to_string(),
            confidence: 0.88,
            treatment: "Remove and destroy infected plants immediately.".to_string(),
        };

        let json = serde_json::to_string(&result).expect("シリアライズ失敗");
        assert!(json.contains("\"status\":\"critical\""));
        assert!(json.contains("\"disease\":\"Potato___Late_blight\""));
        assert!(json.contains("\"confidence\":0.88"));
        assert!(json.contains("\"treatment\""));
    }
}
