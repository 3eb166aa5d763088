use std::{io, path::PathBuf, process::ExitCode};

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use lgota_service::{BenefitSearchService, SearchEnvelope, SearchRequest};
use lgota_storage::db::Db;

/// Runs one benefit search and prints the JSON result on stdout.
#[derive(Debug, Parser)]
#[command(
	version = lgota_cli::VERSION,
	rename_all = "kebab",
	styles = lgota_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	/// Required when the configured mode is `personalized`.
	#[arg(long, short = 'u', value_name = "ID")]
	pub user_id: Option<String>,
	#[arg(value_name = "TEXT", num_args = 1.., required = true)]
	pub text: Vec<String>,
}

#[derive(Debug, Serialize)]
struct FailureEnvelope {
	ok: bool,
	error: String,
}
impl From<&color_eyre::Report> for FailureEnvelope {
	fn from(err: &color_eyre::Report) -> Self {
		Self { ok: false, error: format!("{err:#}") }
	}
}

pub async fn run(args: Args) -> color_eyre::Result<ExitCode> {
	let (output, code) = match search(args).await {
		Ok(envelope) => (serde_json::to_string_pretty(&envelope)?, ExitCode::SUCCESS),
		Err(err) => {
			tracing::error!(error = %err, "Benefit search failed.");

			(serde_json::to_string_pretty(&FailureEnvelope::from(&err))?, ExitCode::FAILURE)
		},
	};

	println!("{output}");

	Ok(code)
}

async fn search(args: Args) -> color_eyre::Result<SearchEnvelope> {
	let config = lgota_config::load(&args.config)?;

	init_tracing(&config);

	let db = Db::connect(&config.storage.postgres).await?;
	let service = BenefitSearchService::new(config, db);
	let request = SearchRequest { query: args.text.join(" "), user_id: args.user_id };
	let result = service.search(request).await;

	service.db.pool.close().await;

	Ok(SearchEnvelope::from(result?))
}

fn init_tracing(config: &lgota_config::Config) {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}
