//! 診断結果パネル

use agrovision_common::view::{
    bar_width_percent, display_label, format_confidence, Tone, EMPTY_STATE_TEXT,
};
use agrovision_common::DiagnosisResult;
use leptos::prelude::*;

#[component]
pub fn ResultPanel(result: Signal<Option<DiagnosisResult>>) -> impl IntoView {
    view! {
        <Show
            when=move || result.get().is_some()
            fallback=|| view! {
                <div class="empty-state">
                    <div class="empty-icon">"📈"</div>
                    <p>{EMPTY_STATE_TEXT}</p>
                </div>
            }
        >
            {move || result.get().map(|result| view! { <ResultCard result=result /> })}
        </Show>
    }
}

#[component]
fn ResultCard(result: DiagnosisResult) -> impl IntoView {
    let tone = Tone::of(&result);
    let label = display_label(&result.disease);
    let percent = format_confidence(result.confidence);
    let bar_style = format!("width: {}%", bar_width_percent(result.confidence));

    view! {
        <div class="result-card">
            <div class=format!("result-header {}", tone.as_str())>
                <div>
                    <p class="result-caption">"Diagnosis"</p>
                    <h3 class="result-title">{label}</h3>
                </div>
                <span class="result-icon">{tone.icon()}</span>
            </div>

            <div class="result-body">
                <div class="confidence-row">
                    <span class="text-muted">"AI Confidence Score"</span>
                    <span class="confidence-value">{percent}</span>
                </div>
                <div class="confidence-track">
                    <div class=format!("confidence-fill {}", tone.as_str()) style=bar_style></div>
                </div>

                <div class="treatment">
                    <h4>"📋 Recommended Action"</h4>
                    <p>{result.treatment}</p>
                </div>
            </div>
        </div>
    }
}
