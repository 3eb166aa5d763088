pub mod search;

mod error;

pub use error::{Error, Result};
pub use search::{SearchEnvelope, SearchRequest, SearchResponse};

use std::{future::Future, pin::Pin, sync::Arc};

use serde_json::Value;

use lgota_config::{Config, IntentParserProviderConfig, TranslatorProviderConfig};
use lgota_providers::{intent, translator};
use lgota_storage::db::Db;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait Translator
where
	Self: Send + Sync,
{
	fn detect<'a>(
		&'a self,
		cfg: &'a TranslatorProviderConfig,
		text: &'a str,
	) -> BoxFuture<'a, lgota_providers::Result<String>>;

	fn translate<'a>(
		&'a self,
		cfg: &'a TranslatorProviderConfig,
		text: &'a str,
		target_language: &'a str,
	) -> BoxFuture<'a, lgota_providers::Result<String>>;
}

pub trait IntentParser
where
	Self: Send + Sync,
{
	fn parse<'a>(
		&'a self,
		cfg: &'a IntentParserProviderConfig,
		text: &'a str,
		default_region_code: &'a str,
	) -> BoxFuture<'a, lgota_providers::Result<Value>>;
}

#[derive(Clone)]
pub struct Providers {
	pub translator: Arc<dyn Translator>,
	pub intent_parser: Arc<dyn IntentParser>,
}
impl Providers {
	pub fn new(translator: Arc<dyn Translator>, intent_parser: Arc<dyn IntentParser>) -> Self {
		Self { translator, intent_parser }
	}
}
impl Default for Providers {
	fn default() -> Self {
		let provider = Arc::new(HttpProviders);

		Self { translator: provider.clone(), intent_parser: provider }
	}
}

pub struct BenefitSearchService {
	pub cfg: Config,
	pub db: Db,
	pub providers: Providers,
}
impl BenefitSearchService {
	pub fn new(cfg: Config, db: Db) -> Self {
		Self { cfg, db, providers: Providers::default() }
	}

	pub fn with_providers(cfg: Config, db: Db, providers: Providers) -> Self {
		Self { cfg, db, providers }
	}
}

struct HttpProviders;
impl Translator for HttpProviders {
	fn detect<'a>(
		&'a self,
		cfg: &'a TranslatorProviderConfig,
		text: &'a str,
	) -> BoxFuture<'a, lgota_providers::Result<String>> {
		Box::pin(translator::detect_language(cfg, text))
	}

	fn translate<'a>(
		&'a self,
		cfg: &'a TranslatorProviderConfig,
		text: &'a str,
		target_language: &'a str,
	) -> BoxFuture<'a, lgota_providers::Result<String>> {
		Box::pin(translator::translate(cfg, text, target_language))
	}
}
impl IntentParser for HttpProviders {
	fn parse<'a>(
		&'a self,
		cfg: &'a IntentParserProviderConfig,
		text: &'a str,
		default_region_code: &'a str,
	) -> BoxFuture<'a, lgota_providers::Result<Value>> {
		Box::pin(intent::parse(cfg, text, default_region_code))
	}
}
