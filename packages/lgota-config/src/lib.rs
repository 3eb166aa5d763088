mod error;
mod types;

pub use error::{Error, Result};
pub use types::{
	Config, IntentParserProviderConfig, Postgres, Presenter, Providers, Search, Service, Storage,
	TranslatorProviderConfig,
};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
		});
	}

	let translator = &cfg.providers.translator;
	let parser = &cfg.providers.intent_parser;

	for (label, key) in [("translator", &translator.api_key), ("intent_parser", &parser.api_key)]
	{
		if key.trim().is_empty() {
			return Err(Error::Validation {
				message: format!("Provider {label} api_key must be non-empty."),
			});
		}
	}
	for (label, timeout_ms) in
		[("translator", translator.timeout_ms), ("intent_parser", parser.timeout_ms)]
	{
		if timeout_ms == 0 {
			return Err(Error::Validation {
				message: format!("Provider {label} timeout_ms must be greater than zero."),
			});
		}
	}

	if translator.folder_id.trim().is_empty() {
		return Err(Error::Validation {
			message: "providers.translator.folder_id must be non-empty.".to_string(),
		});
	}
	if translator.base_language.trim().is_empty() {
		return Err(Error::Validation {
			message: "providers.translator.base_language must be non-empty.".to_string(),
		});
	}
	if !parser.temperature.is_finite() {
		return Err(Error::Validation {
			message: "providers.intent_parser.temperature must be a finite number.".to_string(),
		});
	}
	if !(0.0..=1.0).contains(&parser.temperature) {
		return Err(Error::Validation {
			message: "providers.intent_parser.temperature must be in the range 0.0-1.0."
				.to_string(),
		});
	}
	if parser.max_tokens == 0 {
		return Err(Error::Validation {
			message: "providers.intent_parser.max_tokens must be greater than zero.".to_string(),
		});
	}
	if cfg.search.max_results == 0 {
		return Err(Error::Validation {
			message: "search.max_results must be greater than zero.".to_string(),
		});
	}
	if cfg.search.default_region_code.trim().is_empty() {
		return Err(Error::Validation {
			message: "search.default_region_code must be non-empty.".to_string(),
		});
	}
	if !(-12..=14).contains(&cfg.search.utc_offset_hours) {
		return Err(Error::Validation {
			message: "search.utc_offset_hours must be in the range -12..14.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.search.default_region_code = cfg.search.default_region_code.trim().to_string();
	cfg.providers.translator.language_hints.retain(|hint| !hint.trim().is_empty());
}
