use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

use crate::hints::{self, CATEGORY_HINTS, TYPE_HINTS};

/// Structured intent as returned by the intent parser. Every field is optional on the wire, and
/// an explicit `null` reads as the field's default.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ParsedIntent {
	#[serde(deserialize_with = "null_as_default")]
	pub categories: Vec<String>,
	#[serde(deserialize_with = "null_as_default")]
	pub types: Vec<String>,
	#[serde(alias = "regionCode", deserialize_with = "region_code")]
	pub region_code: Option<String>,
	#[serde(deserialize_with = "null_as_default")]
	pub intent: String,
	#[serde(deserialize_with = "null_as_default")]
	pub keywords: Vec<String>,
}
impl ParsedIntent {
	/// Intent used when the parser returns nothing usable: every whitespace-separated token of
	/// the lowercased query becomes a keyword.
	pub fn fallback(text: &str, default_region_code: &str) -> Self {
		Self {
			region_code: Some(default_region_code.to_string()),
			keywords: text.to_lowercase().split_whitespace().map(str::to_string).collect(),
			..Self::default()
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedQuery {
	pub categories: Vec<String>,
	pub types: Vec<String>,
	pub keywords: Vec<String>,
	pub region_code: Option<String>,
}

/// Merges parser output with the categories and types detected by the hint tables.
pub fn normalize(intent: ParsedIntent, text: &str) -> NormalizedQuery {
	let lowered = text.to_lowercase();
	let detected_categories = hints::detect(CATEGORY_HINTS, &lowered);
	let detected_types = hints::detect(TYPE_HINTS, &lowered);
	let categories = dedup(
		intent.categories.into_iter().chain(detected_categories.into_iter().map(str::to_string)),
		false,
	);
	let types = dedup(
		intent.types.into_iter().chain(detected_types.into_iter().map(str::to_string)),
		false,
	);
	let keywords = dedup(intent.keywords, true);

	NormalizedQuery { categories, types, keywords, region_code: intent.region_code }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RegionCode {
	Text(String),
	Number(i64),
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Region codes arrive as `"14"` or `14`.
fn region_code<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<RegionCode>::deserialize(deserializer)?.map(|code| match code {
		RegionCode::Text(text) => text,
		RegionCode::Number(number) => number.to_string(),
	}))
}

/// Keeps the first occurrence of every value, comparing lowercased trimmed forms. Empty values
/// are dropped. With `lowercase` set the lowercased form is kept instead of the original.
fn dedup<I>(values: I, lowercase: bool) -> Vec<String>
where
	I: IntoIterator<Item = String>,
{
	let mut out = Vec::new();
	let mut seen = HashSet::new();

	for value in values {
		let trimmed = value.trim();

		if trimmed.is_empty() {
			continue;
		}

		let key = trimmed.to_lowercase();

		if !seen.insert(key.clone()) {
			continue;
		}

		out.push(if lowercase { key } else { trimmed.to_string() });
	}

	out
}
