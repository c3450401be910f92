use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "agrovision")]
#[command(about = "葉の写真から病気を診断するクライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像を予測サーバーへ送り診断結果を表示
    Diagnose {
        /// 葉の画像ファイル (JPG/PNG)
        #[arg(required = true)]
        image: PathBuf,

        /// 予測エンドポイント（設定・環境変数より優先）
        #[arg(short, long)]
        endpoint: Option<String>,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 予測サーバーが起動しているか確認
    Ping {
        /// 予測エンドポイント
        #[arg(short, long)]
        endpoint: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// 予測エンドポイントを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
