//! 予測サーバーHTTPクライアント

use agrovision_common::{parse_diagnosis, DiagnosisResult, Endpoint, Error, PredictClient};
use log::debug;
use reqwest::multipart::{Form, Part};

use crate::error::{AgroVisionError, Result};
use crate::image::LocalImage;

/// multipartのフィールド名
const FILE_FIELD: &str = "file";

/// `reqwest` で `/predict` に画像をPOSTするクライアント
///
/// タイムアウトもリトライも持たない。1回送って結果を待つだけ。
pub struct HttpPredictClient {
    http: reqwest::Client,
    endpoint: Endpoint,
}

impl HttpPredictClient {
    pub fn new(endpoint: Endpoint) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AgroVisionError::HttpClient(e.to_string()))?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// サーバーのルートにGETして応答本文を返す
    pub async fn ping(&self) -> Result<String> {
        let url = self.endpoint.health_url();
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::server(status.as_u16()).into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;
        Ok(body.trim().to_string())
    }
}

impl PredictClient<LocalImage> for HttpPredictClient {
    async fn predict(&self, image: &LocalImage) -> agrovision_common::Result<DiagnosisResult> {
        debug!(
            "POST {} ({}, {} bytes, {})",
            self.endpoint,
            image.file_name,
            image.bytes.len(),
            image.mime_type
        );

        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(image.mime_type)
            .map_err(|e| Error::transport(e.to_string()))?;
        let form = Form::new().part(FILE_FIELD, part);

        let response = self
            .http
            .post(self.endpoint.as_str())
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        // 2xx以外は本文を見ない
        let status = response.status();
        if !status.is_success() {
            debug!("prediction server answered {}", status);
            return Err(Error::server(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;
        parse_diagnosis(&body)
    }
}
