use clap::Parser;
use drillbox::adapters::github::GithubOrgClient;
use drillbox::adapters::http::HttpJsonSource;
use drillbox::config::{CliConfig, Command, DrillConfig};
use drillbox::core::{annotations, comprehension, delays};
use drillbox::domain::model::RepoListing;
use drillbox::utils::error::Result;
use drillbox::utils::nested_map::access_dotted;
use drillbox::utils::logger;
use drillbox::utils::validation::{validate_range, Validate};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::io::AsyncReadExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose, cli.json_logs);
    tracing::info!("Starting drillbox CLI");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    match run(&cli.command, &config).await {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Err(e) => {
            tracing::error!("❌ Command failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}

fn load_config(cli: &CliConfig) -> Result<DrillConfig> {
    let config = match &cli.config {
        Some(path) => {
            tracing::debug!("Loading configuration from {}", path.display());
            DrillConfig::from_file(path)?
        }
        None => DrillConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn delay_args(config: &DrillConfig, n: Option<usize>, max_delay: Option<f64>) -> Result<(usize, f64)> {
    let max_delay = max_delay.unwrap_or_else(|| config.max_delay());
    validate_range("--max-delay", max_delay, 0.0, 3600.0)?;
    Ok((n.unwrap_or_else(|| config.delay_count()), max_delay))
}

async fn run(command: &Command, config: &DrillConfig) -> Result<Value> {
    match command {
        Command::Zoom { values, factor } => Ok(json!(annotations::zoom_array(values, *factor))),
        Command::ElementLength { items } => {
            Ok(json!(annotations::element_length(items.iter().map(String::as_str))))
        }
        Command::WaitN { n, max_delay } => {
            let (n, max_delay) = delay_args(config, *n, *max_delay)?;
            Ok(json!(delays::wait_n(n, max_delay).await))
        }
        Command::TaskWaitN { n, max_delay } => {
            let (n, max_delay) = delay_args(config, *n, *max_delay)?;
            Ok(json!(delays::task_wait_n(n, max_delay).await?))
        }
        Command::MeasureTime { n, max_delay } => {
            let (n, max_delay) = delay_args(config, *n, *max_delay)?;
            // measure_time 會自建 runtime，必須離開目前的 async context
            let per_call =
                tokio::task::spawn_blocking(move || delays::measure_time(n, max_delay)).await??;
            Ok(json!({ "n": n, "max_delay": max_delay, "seconds_per_call": per_call }))
        }
        Command::Comprehension => {
            let settings = config.generator_settings();
            Ok(json!(comprehension::async_comprehension_with(settings).await))
        }
        Command::MeasureRuntime => {
            let elapsed = comprehension::measure_runtime_with(config.generator_settings()).await;
            Ok(json!({ "seconds": elapsed.as_secs_f64() }))
        }
        Command::Nested { json: document, path } => {
            let document = if document == "-" {
                let mut buffer = String::new();
                tokio::io::stdin().read_to_string(&mut buffer).await?;
                buffer
            } else {
                document.clone()
            };
            let value: Value = serde_json::from_str(&document)?;
            access_dotted(&value, path).cloned()
        }
        Command::Org { name } => {
            let client = github_client(config, name)?;
            client.org().await.cloned()
        }
        Command::Repos { name, license } => {
            let client = github_client(config, name)?;
            let repos = client.public_repos(license.as_deref()).await?;
            let listing = RepoListing {
                org: name.clone(),
                license: license.clone(),
                repos,
            };
            Ok(serde_json::to_value(listing)?)
        }
    }
}

fn github_client(config: &DrillConfig, org_name: &str) -> Result<GithubOrgClient> {
    let source = HttpJsonSource::with_settings(config.user_agent(), config.request_timeout())?;
    Ok(GithubOrgClient::with_source(
        org_name,
        Arc::new(source),
        config.github_base_url(),
    ))
}

