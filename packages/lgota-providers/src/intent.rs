use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::{Error, Result};
use lgota_config::IntentParserProviderConfig;
use lgota_domain::hints::{CATEGORY_CODES, TYPE_CODES};

const MAX_ATTEMPTS: usize = 3;

/// Asks the completion model to turn a base-language query into a structured intent object.
///
/// The returned value is the raw JSON object; field validation happens in the caller.
pub async fn parse(
	cfg: &IntentParserProviderConfig,
	text: &str,
	default_region_code: &str,
) -> Result<Value> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let body = serde_json::json!({
		"modelUri": cfg.model_uri,
		"completionOptions": {
			"temperature": cfg.temperature,
			"maxTokens": cfg.max_tokens,
		},
		"messages": [
			{ "role": "user", "text": build_prompt(text, default_region_code) }
		],
	});

	for _ in 0..MAX_ATTEMPTS {
		let res = client
			.post(&url)
			.headers(crate::auth_headers(&cfg.api_key, &cfg.default_headers)?)
			.json(&body)
			.send()
			.await?;
		let json: Value = res.error_for_status()?.json().await?;

		if let Ok(parsed) = parse_completion(&json) {
			return Ok(parsed);
		}
	}

	Err(Error::InvalidResponse { message: "Intent parser response is not valid JSON.".to_string() })
}

pub fn build_prompt(text: &str, default_region_code: &str) -> String {
	let categories = CATEGORY_CODES.map(|code| format!("- {code}")).join("\n");
	let types = TYPE_CODES.map(|code| format!("- {code}")).join("\n");

	format!(
		"Ты — эксперт по льготам России и интеллектуальный парсер.\n\
Разбери смысл запроса и верни строго JSON.\n\n\
Запрос: \"{text}\"\n\n\
Формат ответа ТОЛЬКО JSON:\n\
{{\n  \"categories\": [],\n  \"types\": [],\n  \"region_code\": \"{default_region_code}\",\n  \"intent\": \"\",\n  \"keywords\": []\n}}\n\n\
Допустимые categories:\n{categories}\n\n\
Допустимые types:\n{types}\n\n\
Правила:\n\
- Не придумывай лишнее.\n\
- Используй только то, что в запросе.\n\
- region_code по умолчанию: \"{default_region_code}\".\n\
- intent — короткая формулировка цели.\n\
- keywords: 5–10 ключевых слов.\n\
- НИКАКОГО текста вне JSON."
	)
}

/// Pulls the JSON object out of `result.alternatives[0].message.text`.
pub fn parse_completion(json: &Value) -> Result<Value> {
	let text = json
		.pointer("/result/alternatives/0/message/text")
		.and_then(Value::as_str)
		.ok_or_else(|| Error::InvalidResponse {
			message: "Intent parser response is missing message text.".to_string(),
		})?;
	let object = extract_json(text).ok_or_else(|| Error::InvalidResponse {
		message: "Intent parser message contains no JSON object.".to_string(),
	})?;
	let parsed: Value = serde_json::from_str(object)?;

	if !parsed.is_object() {
		return Err(Error::InvalidResponse {
			message: "Intent parser JSON must be an object.".to_string(),
		});
	}

	Ok(parsed)
}

/// Returns the outermost `{...}` span of `text`, ignoring Markdown code fences around it.
pub fn extract_json(text: &str) -> Option<&str> {
	let trimmed = text.trim().trim_matches('`');
	let start = trimmed.find('{')?;
	let end = trimmed.rfind('}')?;

	if end < start {
		return None;
	}

	Some(trimmed[start..=end].trim())
}
