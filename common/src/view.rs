//! 表示ポリシー
//!
//! 状態から導出するだけで、何も保持しない。ブラウザとCLIで同じ表示にする。

use crate::types::DiagnosisResult;

pub const ANALYZE_LABEL: &str = "Analyze Disease";
pub const PROCESSING_LABEL: &str = "Processing...";
pub const EMPTY_STATE_TEXT: &str = "Upload and analyze an image to see results here.";

/// 解析ボタンのラベル
pub fn action_label(busy: bool) -> &'static str {
    if busy {
        PROCESSING_LABEL
    } else {
        ANALYZE_LABEL
    }
}

/// 病名の表示用文字列（アンダースコアをすべて空白に置換）
pub fn display_label(disease: &str) -> String {
    disease.replace('_', " ")
}

/// 信頼度をパーセント値にする（0.93 → 93.0）
pub fn confidence_percent(confidence: f64) -> f64 {
    confidence * 100.0
}

/// 信頼度の表示文字列（小数1桁、0.5は切り上げ）
///
/// `{:.1}` は偶数丸めなので 6.25 が "6.2" になる。先に四捨五入してから整形する。
pub fn format_confidence(confidence: f64) -> String {
    let rounded = (confidence_percent(confidence) * 10.0).round() / 10.0;
    format!("{:.1}%", rounded)
}

/// 信頼度バーの幅（0〜100%に収める）
pub fn bar_width_percent(confidence: f64) -> f64 {
    let percent = confidence_percent(confidence);
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}

/// 結果ヘッダーの色調（healthyかそれ以外かの2分岐）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Healthy,
    Alert,
}

impl Tone {
    pub fn of(result: &DiagnosisResult) -> Self {
        if result.is_healthy() {
            Tone::Healthy
        } else {
            Tone::Alert
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Healthy => "healthy",
            Tone::Alert => "alert",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tone::Healthy => "✔",
            Tone::Alert => "⚠",
        }
    }
}
