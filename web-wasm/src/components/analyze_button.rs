//! 解析ボタンコンポーネント

use agrovision_common::view::action_label;
use leptos::prelude::*;

#[component]
pub fn AnalyzeButton<F>(
    can_submit: Signal<bool>,
    busy: Signal<bool>,
    on_analyze: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <button
            class=move || if busy.get() { "btn btn-primary busy" } else { "btn btn-primary" }
            disabled=move || !can_submit.get()
            on:click={
                let on_analyze = on_analyze.clone();
                move |_| on_analyze(())
            }
        >
            <Show when=move || busy.get()>
                <span class="spinner"></span>
            </Show>
            {move || action_label(busy.get())}
        </button>
    }
}
