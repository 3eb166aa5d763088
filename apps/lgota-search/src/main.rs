use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<ExitCode> {
	color_eyre::install()?;

	let args = lgota_search::Args::parse();

	lgota_search::run(args).await
}
