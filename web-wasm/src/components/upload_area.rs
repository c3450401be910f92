//! アップロードエリアコンポーネント

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, File, HtmlInputElement};

#[component]
pub fn UploadArea<F>(
    preview: Signal<Option<String>>,
    on_select: F,
) -> impl IntoView
where
    F: Fn(File) + 'static + Clone,
{
    // ファイル未選択（キャンセル）なら何もしない
    let on_change = move |ev: Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_select(file);
        }
    };

    view! {
        <div class="upload-area">
            <input
                type="file"
                accept="image/*"
                class="file-input"
                on:change=on_change
            />
            <Show
                when=move || preview.get().is_some()
                fallback=|| view! {
                    <div class="upload-placeholder">
                        <div class="upload-icon">"🌿"</div>
                        <p class="upload-title">"Click to select Image"</p>
                        <p class="text-muted">"Supports JPG, PNG"</p>
                    </div>
                }
            >
                <img
                    class="preview"
                    alt="Preview"
                    src=move || preview.get().unwrap_or_default()
                />
            </Show>
        </div>
    }
}
