//! 選択中の画像とプレビューURL

use wasm_bindgen::JsValue;
use web_sys::{File, Url};

/// ブラウザ版のSelection
#[derive(Debug, Clone)]
pub struct Selection {
    pub file: File,
    /// `URL.createObjectURL` で作ったプレビュー参照
    pub preview_url: String,
}

impl Selection {
    pub fn from_file(file: File) -> Result<Self, JsValue> {
        let preview_url = Url::create_object_url_with_blob(&file)?;
        Ok(Self { file, preview_url })
    }

    /// プレビューURLを解放する（差し替え時）
    pub fn release(self) {
        let _ = Url::revoke_object_url(&self.preview_url);
    }
}
