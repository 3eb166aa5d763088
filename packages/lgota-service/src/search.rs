use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime, UtcOffset};

use crate::{BenefitSearchService, Error, Result};
use lgota_domain::{
	benefit::BenefitRecord,
	present,
	query::{self, NormalizedQuery, ParsedIntent},
	selection::{self, ResultItem, SearchMode, SelectionPolicy},
};
use lgota_providers::translator::UNKNOWN_LANGUAGE;
use lgota_storage::{models::UserContext, queries};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SearchRequest {
	pub query: String,
	#[serde(default)]
	pub user_id: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SearchResponse {
	/// Query text in the base language, as passed to the intent parser.
	pub query_ru: String,
	pub detected_lang: String,
	pub answer_ru: String,
	/// Answer translated back into `detected_lang`, or `answer_ru` when no translation applies.
	pub answer_final: String,
	pub items: Vec<ResultItem>,
}

/// Success envelope shared by the HTTP and command-line entrypoints.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SearchEnvelope {
	pub ok: bool,
	#[serde(flatten)]
	pub response: SearchResponse,
}
impl From<SearchResponse> for SearchEnvelope {
	fn from(response: SearchResponse) -> Self {
		Self { ok: true, response }
	}
}

impl BenefitSearchService {
	pub async fn search(&self, req: SearchRequest) -> Result<SearchResponse> {
		let text = req.query.trim();

		if text.is_empty() {
			return Err(Error::InvalidRequest { message: "query must be non-empty.".to_string() });
		}

		let mode = self.cfg.service.mode;
		let user_context = match mode {
			SearchMode::Personalized => Some(self.resolve_user(req.user_id.as_deref()).await?),
			SearchMode::RegionOnly => None,
		};
		let (query_ru, detected_lang) = self.ensure_base_language(text).await;
		let intent = self.parse_intent(&query_ru).await;
		let normalized = query::normalize(intent, &query_ru);
		let index = queries::load_categories(&self.db).await?;
		let candidates = match user_context.as_ref() {
			Some(context) => queries::load_benefits_for_user(&self.db, context).await?,
			None => self.region_candidates(&normalized).await?,
		};
		let candidate_count = candidates.len();
		let policy = SelectionPolicy::for_mode(mode, self.cfg.search.max_results as usize);
		let today = local_date(OffsetDateTime::now_utc(), self.cfg.search.utc_offset_hours);
		let items = selection::select_results(candidates, &normalized, &index, policy, today);

		for item in &items {
			tracing::debug!(benefit_id = %item.id, score = item.score, "Selected benefit.");
		}

		let answer_ru = present::render(&items, self.cfg.presenter.locale);
		let answer_final = self.translate_back(&answer_ru, &detected_lang).await;

		tracing::info!(
			mode = mode.as_str(),
			detected_lang = %detected_lang,
			candidates = candidate_count,
			selected = items.len(),
			"Benefit search completed."
		);

		Ok(SearchResponse { query_ru, detected_lang, answer_ru, answer_final, items })
	}

	async fn resolve_user(&self, user_id: Option<&str>) -> Result<UserContext> {
		let Some(user_id) = user_id.map(str::trim).filter(|id| !id.is_empty()) else {
			return Err(Error::UserContextNotFound { user_id: None });
		};

		queries::load_user_context(&self.db, user_id)
			.await?
			.ok_or_else(|| Error::UserContextNotFound { user_id: Some(user_id.to_string()) })
	}

	/// Returns the query in the base language together with the detected source language.
	///
	/// Provider failures never fail the request: detection falls back to `unknown` and a failed
	/// translation keeps the original text.
	pub(crate) async fn ensure_base_language(&self, text: &str) -> (String, String) {
		let cfg = &self.cfg.providers.translator;
		let detected = match self.providers.translator.detect(cfg, text).await {
			Ok(lang) if !lang.trim().is_empty() => lang,
			Ok(_) => UNKNOWN_LANGUAGE.to_string(),
			Err(err) => {
				tracing::warn!(error = %err, "Language detection failed. Falling back to unknown.");

				UNKNOWN_LANGUAGE.to_string()
			},
		};

		if detected == cfg.base_language {
			return (text.to_string(), detected);
		}

		match self.providers.translator.translate(cfg, text, &cfg.base_language).await {
			Ok(translated) => (translated, detected),
			Err(err) => {
				tracing::warn!(
					error = %err,
					detected_lang = %detected,
					"Query translation failed. Using the original text."
				);

				(text.to_string(), detected)
			},
		}
	}

	pub(crate) async fn parse_intent(&self, query_ru: &str) -> ParsedIntent {
		let default_region = self.cfg.search.default_region_code.as_str();
		let raw = match self
			.providers
			.intent_parser
			.parse(&self.cfg.providers.intent_parser, query_ru, default_region)
			.await
		{
			Ok(raw) => raw,
			Err(err) => {
				tracing::warn!(error = %err, "Intent parsing failed. Using keyword fallback.");

				return ParsedIntent::fallback(query_ru, default_region);
			},
		};

		match serde_json::from_value::<ParsedIntent>(raw) {
			Ok(intent) => intent,
			Err(err) => {
				tracing::warn!(
					error = %err,
					"Intent payload has an unexpected shape. Using keyword fallback."
				);

				ParsedIntent::fallback(query_ru, default_region)
			},
		}
	}

	async fn region_candidates(&self, normalized: &NormalizedQuery) -> Result<Vec<BenefitRecord>> {
		let code = normalized
			.region_code
			.as_deref()
			.map(str::trim)
			.filter(|code| !code.is_empty())
			.unwrap_or(self.cfg.search.default_region_code.as_str());
		let Some(region_id) = queries::load_region_id(&self.db, code).await? else {
			tracing::info!(region_code = code, "Region is unknown. No candidates.");

			return Ok(Vec::new());
		};

		Ok(queries::load_benefits_by_region(&self.db, &region_id).await?)
	}

	/// Translates the rendered answer into the detected language. Base-language and undetected
	/// queries keep the answer as is.
	pub(crate) async fn translate_back(&self, answer_ru: &str, detected_lang: &str) -> String {
		let cfg = &self.cfg.providers.translator;

		if detected_lang == cfg.base_language || detected_lang == UNKNOWN_LANGUAGE {
			return answer_ru.to_string();
		}

		match self.providers.translator.translate(cfg, answer_ru, detected_lang).await {
			Ok(translated) => translated,
			Err(err) => {
				tracing::warn!(
					error = %err,
					detected_lang,
					"Answer translation failed. Returning the base-language answer."
				);

				answer_ru.to_string()
			},
		}
	}
}

/// Calendar date of `now` at `offset_hours` east of UTC.
pub(crate) fn local_date(now: OffsetDateTime, offset_hours: i8) -> Date {
	let offset = UtcOffset::from_hms(offset_hours, 0, 0).unwrap_or(UtcOffset::UTC);

	now.to_offset(offset).date()
}
