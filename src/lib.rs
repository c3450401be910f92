//! AgroVision CLI
//!
//! 葉の写真を予測サーバーへ送り、診断結果を端末に表示する。

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod image;
pub mod report;
