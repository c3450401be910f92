//! AgroVision Common Library
//!
//! ブラウザ(WASM)とCLIで共有される診断モデル・状態機械・表示ポリシー

pub mod types;
pub mod error;
pub mod endpoint;
pub mod parser;
pub mod controller;
pub mod view;

pub use types::DiagnosisResult;
pub use error::{Error, Result};
pub use endpoint::{Endpoint, DEFAULT_PREDICT_URL};
pub use parser::parse_diagnosis;
pub use controller::{AnalysisGuard, DiagnosisController, Phase, PredictClient};
pub use view::Tone;
