//! 診断レポートの端末出力

use agrovision_common::view::{bar_width_percent, display_label, format_confidence, Tone};
use agrovision_common::DiagnosisResult;
use chrono::{DateTime, Local};
use serde::Serialize;

const RULE_WIDTH: usize = 30;
const BAR_WIDTH: usize = 20;

/// 信頼度バー（`[########------------]`）
pub fn confidence_bar(confidence: f64) -> String {
    let filled = ((bar_width_percent(confidence) / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// 診断結果を端末向けのテキストにする
pub fn render_report(file_name: &str, result: &DiagnosisResult) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let tone = Tone::of(result);

    let mut lines = vec![
        rule.clone(),
        "   DIAGNOSIS".to_string(),
        rule.clone(),
        format!("File:       {}", file_name),
        format!("{} {}", tone.icon(), display_label(&result.disease)),
        format!("Status:     {}", result.status),
        format!(
            "Confidence: {} {}",
            format_confidence(result.confidence),
            confidence_bar(result.confidence)
        ),
    ];

    if !result.treatment.is_empty() {
        lines.push(String::new());
        lines.push("Recommended Action".to_string());
        lines.push(format!("  {}", result.treatment));
    }

    lines.push(rule);
    lines.join("\n")
}

/// `--json` 出力
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonReport<'a> {
    pub file_name: &'a str,
    pub analyzed_at: DateTime<Local>,
    #[serde(flatten)]
    pub result: &'a DiagnosisResult,
}

impl<'a> JsonReport<'a> {
    pub fn new(file_name: &'a str, result: &'a DiagnosisResult) -> Self {
        Self {
            file_name,
            analyzed_at: Local::now(),
            result,
        }
    }
}
