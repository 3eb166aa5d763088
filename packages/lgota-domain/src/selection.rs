use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
	benefit::{BenefitRecord, CategoryIndex},
	query::NormalizedQuery,
	scoring,
};

pub const DEFAULT_MAX_RESULTS: usize = 3;

/// Which candidates a deployment searches over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
	/// Candidates restricted to one user's confirmed categories and region.
	Personalized,
	/// Candidates restricted only to the region named in the parsed query.
	#[default]
	RegionOnly,
}
impl SearchMode {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Personalized => "personalized",
			Self::RegionOnly => "region_only",
		}
	}

	/// Candidates must score strictly above this to be picked before the fallback applies.
	pub fn threshold(self) -> u32 {
		match self {
			Self::Personalized => 1,
			Self::RegionOnly => 0,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionPolicy {
	pub threshold: u32,
	pub limit: usize,
}
impl SelectionPolicy {
	pub fn for_mode(mode: SearchMode, limit: usize) -> Self {
		Self { threshold: mode.threshold(), limit }
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoredCandidate {
	pub record: BenefitRecord,
	pub score: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResultItem {
	pub id: String,
	pub title: String,
	pub categories: Vec<String>,
	pub r#type: String,
	pub valid_to: String,
	#[serde(rename = "howToGet")]
	pub how_to_get: String,
	pub requirements: String,
	pub source_url: Option<String>,
	pub score: u32,
}
impl ResultItem {
	pub fn from_candidate(candidate: ScoredCandidate, index: &CategoryIndex) -> Self {
		let ScoredCandidate { record, score } = candidate;

		Self {
			categories: index.titles(&record.category_ids),
			valid_to: record.valid_to.map(|date| date.to_string()).unwrap_or_default(),
			id: record.id,
			title: record.title.unwrap_or_default(),
			r#type: record.r#type,
			how_to_get: record.how_to_get.unwrap_or_default(),
			requirements: record.requirements.unwrap_or_default(),
			source_url: record.source_url,
			score,
		}
	}
}

/// Scores every candidate and stable-sorts by score descending, keeping fetch order on ties.
pub fn rank(
	candidates: Vec<BenefitRecord>,
	query: &NormalizedQuery,
	index: &CategoryIndex,
	today: Date,
) -> Vec<ScoredCandidate> {
	let mut scored: Vec<ScoredCandidate> = candidates
		.into_iter()
		.map(|record| {
			let score = scoring::score(&record, query, index, today);

			ScoredCandidate { record, score }
		})
		.collect();

	sort_by_score(&mut scored);

	scored
}

pub fn sort_by_score(scored: &mut [ScoredCandidate]) {
	// `sort_by` is stable, which keeps equal scores in fetch order.
	scored.sort_by(|a, b| b.score.cmp(&a.score));
}

/// Picks up to `policy.limit` candidates above the threshold from an already ranked list.
///
/// When nothing clears the threshold the leading candidates are returned regardless of score,
/// so a non-empty candidate list always yields results.
pub fn select(ranked: Vec<ScoredCandidate>, policy: SelectionPolicy) -> Vec<ScoredCandidate> {
	let passing = ranked.iter().filter(|candidate| candidate.score > policy.threshold).count();

	if passing == 0 {
		return ranked.into_iter().take(policy.limit).collect();
	}

	ranked
		.into_iter()
		.filter(|candidate| candidate.score > policy.threshold)
		.take(policy.limit)
		.collect()
}

/// Full selector: rank, select, and resolve each pick into a [`ResultItem`].
pub fn select_results(
	candidates: Vec<BenefitRecord>,
	query: &NormalizedQuery,
	index: &CategoryIndex,
	policy: SelectionPolicy,
	today: Date,
) -> Vec<ResultItem> {
	select(rank(candidates, query, index, today), policy)
		.into_iter()
		.map(|candidate| ResultItem::from_candidate(candidate, index))
		.collect()
}
