//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-inner">
                <span class="header-icon">"🌿"</span>
                <h1>"AgroVision AI"</h1>
            </div>
        </header>
    }
}
