//! メインアプリケーションコンポーネント

use agrovision_common::{AnalysisGuard, DiagnosisController, DiagnosisResult, Endpoint, PredictClient};
use leptos::prelude::*;
use web_sys::File;

use crate::api::predict::FetchPredictClient;
use crate::components::{
    analyze_button::AnalyzeButton,
    error_banner::ErrorBanner,
    header::Header,
    result_panel::ResultPanel,
    upload_area::UploadArea,
};
use crate::selection::Selection;

/// メインアプリケーションコンポーネント
#[component]
pub fn App(endpoint: Endpoint) -> impl IntoView {
    // web_sys::File は Send でないのでローカルシグナルに置く
    let controller = RwSignal::new_local(DiagnosisController::<Selection>::new());
    let client = StoredValue::new(FetchPredictClient::new(endpoint));

    let busy = Signal::derive(move || controller.with(|c| c.is_busy()));
    let can_submit = Signal::derive(move || controller.with(|c| c.can_submit()));
    let preview = Signal::derive(move || {
        controller.with(|c| c.selection().map(|s| s.preview_url.clone()))
    });
    let error = Signal::derive(move || controller.with(|c| c.error().map(str::to_string)));
    let result: Signal<Option<DiagnosisResult>> =
        Signal::derive(move || controller.with(|c| c.result().cloned()));

    // 画像選択ハンドラ
    let on_select = move |file: File| {
        let selection = match Selection::from_file(file) {
            Ok(selection) => selection,
            Err(err) => {
                gloo::console::error!(err);
                return;
            }
        };

        let previous = controller
            .try_update(|c| c.select_file(Some(selection)))
            .flatten();
        if let Some(previous) = previous {
            previous.release();
        }
    };

    // 解析開始ハンドラ（解析中・未選択なら何もしない）
    let on_analyze = move |_| {
        let Some((ticket, selection)) = controller.try_update(|c| c.begin_analysis()).flatten()
        else {
            return;
        };
        let client = client.get_value();

        wasm_bindgen_futures::spawn_local(async move {
            let guard = AnalysisGuard::new(move |outcome| {
                if let Err(err) = &outcome {
                    gloo::console::error!(err.to_string());
                }
                controller.update(|c| {
                    c.resolve(ticket, outcome);
                });
            });
            let outcome = client.predict(&selection).await;
            guard.complete(outcome);
        });
    };

    view! {
        <div class="app">
            <Header />

            <main class="container">
                <div class="grid">
                    <section class="panel">
                        <h2 class="panel-title">"⬆ Upload Plant Leaf"</h2>

                        <UploadArea preview=preview on_select=on_select />

                        <AnalyzeButton
                            can_submit=can_submit
                            busy=busy
                            on_analyze=on_analyze
                        />

                        <ErrorBanner error=error />
                    </section>

                    <section class="results">
                        <ResultPanel result=result />
                    </section>
                </div>
            </main>
        </div>
    }
}
