//! 予測エンドポイントの決定
//!
//! 優先順位: `?endpoint=` クエリ > ビルド時の `AGROVISION_ENDPOINT` > 既定値

use agrovision_common::Endpoint;
use web_sys::UrlSearchParams;

pub const ENDPOINT_PARAM: &str = "endpoint";

/// 候補のうち最初に有効なURLを使う
pub fn pick_endpoint(query: Option<&str>, compiled: Option<&str>) -> Endpoint {
    [query, compiled]
        .into_iter()
        .flatten()
        .find_map(|url| Endpoint::parse(url).ok())
        .unwrap_or_default()
}

/// 現在のページURLから決める
pub fn endpoint_from_location() -> Endpoint {
    let query = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .and_then(|search| UrlSearchParams::new_with_str(&search).ok())
        .and_then(|params| params.get(ENDPOINT_PARAM));

    if let Some(url) = query.as_deref() {
        if let Err(err) = Endpoint::parse(url) {
            gloo::console::warn!(format!("ignoring ?{}={}: {}", ENDPOINT_PARAM, url, err));
        }
    }

    pick_endpoint(query.as_deref(), option_env!("AGROVISION_ENDPOINT"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_default() {
        assert_eq!(pick_endpoint(None, None), Endpoint::default());
    }

    #[test]
    fn test_pick_query_first() {
        let endpoint = pick_endpoint(
            Some("http://10.0.0.9:5000/predict"),
            Some("http://build.example/predict"),
        );
        assert_eq!(endpoint.as_str(), "http://10.0.0.9:5000/predict");
    }

    #[test]
    fn test_pick_skips_invalid_query() {
        let endpoint = pick_endpoint(Some("garbage"), Some("http://build.example/predict"));
        assert_eq!(endpoint.as_str(), "http://build.example/predict");
    }

    #[test]
    fn test_pick_all_invalid_falls_back() {
        let endpoint = pick_endpoint(Some("garbage"), Some(""));
        assert_eq!(endpoint, Endpoint::default());
    }
}
