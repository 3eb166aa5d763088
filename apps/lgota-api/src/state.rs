use std::sync::Arc;

use lgota_service::BenefitSearchService;
use lgota_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<BenefitSearchService>,
}
impl AppState {
	pub async fn new(config: lgota_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		Ok(Self::from_service(BenefitSearchService::new(config, db)))
	}

	pub fn from_service(service: BenefitSearchService) -> Self {
		Self { service: Arc::new(service) }
	}
}
