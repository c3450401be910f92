use std::process::ExitCode;
use std::time::Duration;

use agrovision::{cli, client, config, error, image, report};
use agrovision_common::view::PROCESSING_LABEL;
use agrovision_common::{DiagnosisController, Phase};
use clap::Parser;
use cli::{Cli, Commands};
use client::HttpPredictClient;
use config::Config;
use error::{AgroVisionError, Result};
use image::LocalImage;
use indicatif::{ProgressBar, ProgressStyle};
use log::LevelFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("✖ {}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logger(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Diagnose { image, endpoint, json } => {
            let endpoint = config.resolve_endpoint(endpoint.as_deref())?;
            let selection = LocalImage::load(&image)?;
            log::info!("selected {} ({})", selection.preview(), selection.mime_type);

            let client = HttpPredictClient::new(endpoint)?;
            let mut controller = DiagnosisController::new();
            controller.select_file(Some(selection));

            // 解析中はスピナーを表示
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner:.green} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.set_message(PROCESSING_LABEL);
            spinner.enable_steady_tick(Duration::from_millis(100));

            controller.analyze(&client).await;
            spinner.finish_and_clear();

            let file_name = controller
                .selection()
                .map(|s| s.file_name.clone())
                .unwrap_or_default();

            match controller.phase() {
                Phase::Success(result) => {
                    if json {
                        let out = report::JsonReport::new(&file_name, result);
                        println!("{}", serde_json::to_string_pretty(&out)?);
                    } else {
                        println!("{}", report::render_report(&file_name, result));
                    }
                }
                Phase::Failure(message) => {
                    return Err(AgroVisionError::Diagnosis(message.clone()));
                }
                Phase::Idle | Phase::Analyzing => {
                    return Err(AgroVisionError::Diagnosis(
                        "analysis did not start".to_string(),
                    ));
                }
            }
        }

        Commands::Ping { endpoint } => {
            let endpoint = config.resolve_endpoint(endpoint.as_deref())?;
            let client = HttpPredictClient::new(endpoint)?;
            let body = client.ping().await?;
            println!("✔ {} is up", client.endpoint().health_url());
            if !body.is_empty() {
                println!("  {}", body);
            }
        }

        Commands::Config { set_endpoint, show } => {
            let mut config = config;

            if let Some(url) = set_endpoint {
                config.set_endpoint(&url)?;
                println!("✔ エンドポイントを設定しました: {}", config.endpoint);
            }

            if show {
                println!("設定:");
                println!("  エンドポイント: {}", config.endpoint);
                println!("  設定ファイル: {}", Config::config_path()?.display());
                if let Ok(url) = std::env::var(config::ENDPOINT_ENV) {
                    println!("  {} で上書き中: {}", config::ENDPOINT_ENV, url);
                }
            }
        }
    }

    Ok(())
}
