//! 予測サーバー連携（fetch + FormData）

use agrovision_common::{parse_diagnosis, DiagnosisResult, Endpoint, Error, PredictClient, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

use crate::selection::Selection;

/// multipartのフィールド名
const FILE_FIELD: &str = "file";

/// ブラウザの `fetch` で `/predict` に画像をPOSTするクライアント
#[derive(Debug, Clone)]
pub struct FetchPredictClient {
    endpoint: Endpoint,
}

impl FetchPredictClient {
    pub fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }
}

impl PredictClient<Selection> for FetchPredictClient {
    async fn predict(&self, selection: &Selection) -> Result<DiagnosisResult> {
        post_file(self.endpoint.as_str(), &selection.file).await
    }
}

/// 例外値から表示用メッセージを取り出す
///
/// `fetch` の失敗は `TypeError("Failed to fetch")` なので `message` をそのまま使う。
pub fn js_error_message(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

fn js_error(err: JsValue) -> Error {
    Error::transport(js_error_message(&err))
}

async fn post_file(url: &str, file: &File) -> Result<DiagnosisResult> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(FILE_FIELD, file, &file.name())
        .map_err(js_error)?;

    // Content-Typeはブラウザがboundary付きで設定する
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| Error::transport("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    // 2xx以外は本文を見ない
    if !resp.ok() {
        return Err(Error::server(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let body = text
        .as_string()
        .ok_or_else(|| Error::MalformedResponse("response body is not text".into()))?;

    parse_diagnosis(&body)
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_type_error_message_is_verbatim() {
        let err: JsValue = js_sys::TypeError::new("Failed to fetch").into();
        assert_eq!(js_error_message(&err), "Failed to fetch");
    }

    #[wasm_bindgen_test]
    fn wasm_plain_error_message_is_verbatim() {
        let err: JsValue = js_sys::Error::new("NetworkError when attempting to fetch resource.").into();
        assert_eq!(
            js_error_message(&err),
            "NetworkError when attempting to fetch resource."
        );
    }

    #[wasm_bindgen_test]
    fn wasm_string_value_passes_through() {
        assert_eq!(js_error_message(&JsValue::from_str("boom")), "boom");
    }

    #[wasm_bindgen_test]
    fn wasm_js_error_becomes_transport() {
        let err = js_error(js_sys::TypeError::new("Failed to fetch").into());
        assert!(matches!(&err, Error::Transport(message) if message == "Failed to fetch"));
        assert_eq!(err.to_string(), "Failed to fetch");
    }
}
