//! エラーバナー

use leptos::prelude::*;

/// 次の解析か画像選択で消える（閉じるボタンはない）
#[component]
pub fn ErrorBanner(error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-banner" role="alert">
                <span class="error-icon">"⚠"</span>
                {move || error.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
