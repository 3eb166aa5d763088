use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::{Error, Result};
use lgota_config::TranslatorProviderConfig;

pub const UNKNOWN_LANGUAGE: &str = "unknown";

pub async fn detect_language(cfg: &TranslatorProviderConfig, text: &str) -> Result<String> {
	let body = serde_json::json!({
		"folderId": cfg.folder_id,
		"text": text,
		"languageCodeHints": cfg.language_hints,
	});
	let json = post(cfg, &cfg.detect_path, &body).await?;

	Ok(parse_detect_response(&json))
}

pub async fn translate(
	cfg: &TranslatorProviderConfig,
	text: &str,
	target_language: &str,
) -> Result<String> {
	let body = serde_json::json!({
		"folderId": cfg.folder_id,
		"texts": [text],
		"targetLanguageCode": target_language,
	});
	let json = post(cfg, &cfg.translate_path, &body).await?;

	parse_translate_response(&json)
}

async fn post(cfg: &TranslatorProviderConfig, path: &str, body: &Value) -> Result<Value> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, path);
	let res = client
		.post(url)
		.headers(crate::auth_headers(&cfg.api_key, &cfg.default_headers)?)
		.json(body)
		.send()
		.await?;

	Ok(res.error_for_status()?.json().await?)
}

fn parse_detect_response(json: &Value) -> String {
	json.get("languageCode")
		.and_then(Value::as_str)
		.filter(|code| !code.trim().is_empty())
		.unwrap_or(UNKNOWN_LANGUAGE)
		.to_string()
}

fn parse_translate_response(json: &Value) -> Result<String> {
	json.get("translations")
		.and_then(Value::as_array)
		.and_then(|translations| translations.first())
		.and_then(|translation| translation.get("text"))
		.and_then(Value::as_str)
		.map(str::to_string)
		.ok_or_else(|| Error::InvalidResponse {
			message: "Translation response is missing translations[0].text.".to_string(),
		})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn detect_reads_language_code() {
		let json = serde_json::json!({ "languageCode": "sah" });

		assert_eq!(parse_detect_response(&json), "sah");
	}

	#[test]
	fn detect_without_code_is_unknown() {
		assert_eq!(parse_detect_response(&serde_json::json!({})), UNKNOWN_LANGUAGE);
		assert_eq!(
			parse_detect_response(&serde_json::json!({ "languageCode": "" })),
			UNKNOWN_LANGUAGE
		);
	}

	#[test]
	fn translate_reads_first_translation() {
		let json = serde_json::json!({
			"translations": [
				{ "text": "Льготы для пенсионеров", "detectedLanguageCode": "en" },
				{ "text": "ignored" }
			]
		});

		assert_eq!(
			parse_translate_response(&json).expect("parse failed"),
			"Льготы для пенсионеров"
		);
	}

	#[test]
	fn translate_without_text_is_an_error() {
		let err = parse_translate_response(&serde_json::json!({ "translations": [] }))
			.expect_err("Expected missing translation error.");

		assert!(matches!(err, Error::InvalidResponse { .. }));
	}
}
