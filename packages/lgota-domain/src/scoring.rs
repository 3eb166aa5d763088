use serde::Serialize;
use time::Date;

use crate::{
	benefit::{BenefitRecord, CategoryIndex},
	hints::{self, TYPE_HINTS},
	query::NormalizedQuery,
};

pub const CATEGORY_CODE_MATCH: u32 = 6;
pub const CATEGORY_TEXT_MATCH: u32 = 2;
pub const TYPE_DIRECT_MATCH: u32 = 3;
pub const TYPE_HINT_MATCH: u32 = 2;
pub const KEYWORD_TITLE_MATCH: u32 = 2;
pub const KEYWORD_TEXT_MATCH: u32 = 1;
pub const FRESHNESS_BONUS: u32 = 1;
/// Keywords shorter than this many characters never contribute.
pub const MIN_KEYWORD_CHARS: usize = 3;

/// Per-signal contributions of one candidate's score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
	pub category: u32,
	pub r#type: u32,
	pub keyword: u32,
	pub freshness: u32,
}
impl ScoreBreakdown {
	pub fn total(&self) -> u32 {
		self.category + self.r#type + self.keyword + self.freshness
	}
}

pub fn score(
	candidate: &BenefitRecord,
	query: &NormalizedQuery,
	index: &CategoryIndex,
	today: Date,
) -> u32 {
	score_breakdown(candidate, query, index, today).total()
}

pub fn score_breakdown(
	candidate: &BenefitRecord,
	query: &NormalizedQuery,
	index: &CategoryIndex,
	today: Date,
) -> ScoreBreakdown {
	let full_text = candidate.full_text();
	let title = candidate.title.as_deref().unwrap_or_default().to_lowercase();
	let benefit_type = candidate.r#type.to_lowercase();

	ScoreBreakdown {
		category: category_score(candidate, query, index, &full_text),
		r#type: type_score(query, &benefit_type),
		keyword: keyword_score(query, &title, &full_text),
		freshness: freshness_score(candidate, today),
	}
}

fn category_score(
	candidate: &BenefitRecord,
	query: &NormalizedQuery,
	index: &CategoryIndex,
	full_text: &str,
) -> u32 {
	let mut total = 0;

	for code in &query.categories {
		if index.codes(&candidate.category_ids).any(|assigned| assigned.eq_ignore_ascii_case(code))
		{
			total += CATEGORY_CODE_MATCH;

			continue;
		}
		if full_text.contains(code.to_lowercase().as_str()) {
			total += CATEGORY_TEXT_MATCH;
		}
	}

	total
}

fn type_score(query: &NormalizedQuery, benefit_type: &str) -> u32 {
	let mut total = 0;

	for code in &query.types {
		let code = code.to_lowercase();

		if benefit_type.contains(code.as_str()) {
			total += TYPE_DIRECT_MATCH;
		} else if hints::first_match(hints::hints_for(TYPE_HINTS, &code), benefit_type).is_some() {
			total += TYPE_HINT_MATCH;
		}
	}

	total
}

fn keyword_score(query: &NormalizedQuery, title: &str, full_text: &str) -> u32 {
	let mut total = 0;

	for keyword in &query.keywords {
		let keyword = keyword.trim().to_lowercase();

		if keyword.chars().count() < MIN_KEYWORD_CHARS {
			continue;
		}

		if title.contains(keyword.as_str()) {
			total += KEYWORD_TITLE_MATCH;
		} else if full_text.contains(keyword.as_str()) {
			total += KEYWORD_TEXT_MATCH;
		}
	}

	total
}

fn freshness_score(candidate: &BenefitRecord, today: Date) -> u32 {
	match candidate.valid_to {
		Some(valid_to) if valid_to >= today => FRESHNESS_BONUS,
		_ => 0,
	}
}
