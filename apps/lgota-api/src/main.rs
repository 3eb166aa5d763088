use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = lgota_api::Args::parse();

	lgota_api::run(args).await
}
