use serde::Deserialize;
use serde_json::{Map, Value};

use lgota_domain::{present::Locale, selection::SearchMode};

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	pub providers: Providers,
	#[serde(default)]
	pub search: Search,
	#[serde(default)]
	pub presenter: Presenter,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
	/// Candidate scope, either "region_only" or "personalized".
	#[serde(default)]
	pub mode: SearchMode,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

#[derive(Debug, Deserialize)]
pub struct Providers {
	pub translator: TranslatorProviderConfig,
	pub intent_parser: IntentParserProviderConfig,
}

#[derive(Debug, Deserialize)]
pub struct TranslatorProviderConfig {
	pub api_base: String,
	pub api_key: String,
	pub folder_id: String,
	#[serde(default = "default_detect_path")]
	pub detect_path: String,
	#[serde(default = "default_translate_path")]
	pub translate_path: String,
	/// Language every query is translated into before parsing and scoring.
	#[serde(default = "default_base_language")]
	pub base_language: String,
	#[serde(default = "default_language_hints")]
	pub language_hints: Vec<String>,
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct IntentParserProviderConfig {
	pub api_base: String,
	pub api_key: String,
	pub path: String,
	pub model_uri: String,
	pub temperature: f32,
	pub max_tokens: u32,
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Search {
	/// Region used when the parsed intent carries no region code.
	pub default_region_code: String,
	pub max_results: u32,
	/// Offset of the calendar used for the freshness check, in whole hours east of UTC.
	pub utc_offset_hours: i8,
}
impl Default for Search {
	fn default() -> Self {
		Self { default_region_code: "14".to_string(), max_results: 3, utc_offset_hours: 0 }
	}
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Presenter {
	pub locale: Locale,
}
impl Default for Presenter {
	fn default() -> Self {
		Self { locale: Locale::Ru }
	}
}

fn default_detect_path() -> String {
	"/translate/v2/detect".to_string()
}

fn default_translate_path() -> String {
	"/translate/v2/translate".to_string()
}

fn default_base_language() -> String {
	"ru".to_string()
}

fn default_language_hints() -> Vec<String> {
	vec!["ru".to_string(), "sah".to_string()]
}
