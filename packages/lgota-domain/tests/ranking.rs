use time::{Date, macros::date};

use lgota_domain::{
	benefit::{BenefitRecord, CategoryEntry, CategoryIndex},
	hints,
	present::{self, Locale},
	query::{self, NormalizedQuery, ParsedIntent},
	scoring,
	selection::{self, SearchMode, SelectionPolicy},
};

const TODAY: Date = date!(2025 - 06 - 15);

fn strings(values: &[&str]) -> Vec<String> {
	values.iter().map(|value| value.to_string()).collect()
}

fn category_index() -> CategoryIndex {
	[
		("cat-1", "PENSIONER", "Пенсионеры"),
		("cat-2", "VETERAN", "Ветераны"),
		("cat-3", "MULTICHILD_PARENT", "Многодетные семьи"),
	]
	.into_iter()
	.map(|(id, code, title)| {
		(id.to_string(), CategoryEntry { code: code.to_string(), title: title.to_string() })
	})
	.collect()
}

fn record(id: &str, title: &str) -> BenefitRecord {
	BenefitRecord {
		id: id.to_string(),
		title: Some(title.to_string()),
		r#type: "Выплаты".to_string(),
		..BenefitRecord::default()
	}
}

fn sample_query() -> NormalizedQuery {
	NormalizedQuery {
		categories: strings(&["PENSIONER", "VETERAN"]),
		types: strings(&["housing", "transport"]),
		keywords: strings(&["проезд", "жкх", "компенсация"]),
		region_code: Some("14".to_string()),
	}
}

fn sample_candidates() -> Vec<BenefitRecord> {
	vec![
		BenefitRecord {
			description: Some("Компенсация расходов на ЖКХ".to_string()),
			r#type: "ЖКХ".to_string(),
			category_ids: strings(&["cat-1"]),
			valid_to: Some(date!(2026 - 01 - 01)),
			..record("b-1", "Льгота пенсионерам")
		},
		BenefitRecord {
			r#type: "Транспорт".to_string(),
			category_ids: strings(&["cat-2", "unknown"]),
			valid_to: Some(date!(2024 - 01 - 01)),
			..record("b-2", "Бесплатный проезд")
		},
		record("b-3", "Налоговый вычет"),
	]
}

#[test]
fn merge_is_deduplicated_superset() {
	let intent = ParsedIntent {
		categories: strings(&["VETERAN", "PENSIONER"]),
		types: strings(&["medical", "medical"]),
		keywords: strings(&["лекарства", "Лекарства"]),
		..ParsedIntent::default()
	};
	let text = "Пенсионер, ветеран, многодетная мать: скидки на лекарства";
	let lowered = text.to_lowercase();
	let normalized = query::normalize(intent.clone(), text);

	for code in &intent.categories {
		assert!(normalized.categories.contains(code), "missing {code}");
	}
	for code in hints::detect(hints::CATEGORY_HINTS, &lowered) {
		assert!(normalized.categories.iter().any(|value| value == code), "missing {code}");
	}
	for code in &intent.types {
		assert!(normalized.types.contains(code), "missing {code}");
	}
	for code in hints::detect(hints::TYPE_HINTS, &lowered) {
		assert!(normalized.types.iter().any(|value| value == code), "missing {code}");
	}

	let mut categories = normalized.categories.clone();
	let mut types = normalized.types.clone();

	categories.sort();
	categories.dedup();
	types.sort();
	types.dedup();

	assert_eq!(categories.len(), normalized.categories.len());
	assert_eq!(types.len(), normalized.types.len());
	assert_eq!(normalized.keywords, strings(&["лекарства"]));
}

#[test]
fn scoring_is_deterministic_and_order_independent() {
	let index = category_index();
	let query = sample_query();
	let mut reversed = query.clone();

	reversed.categories.reverse();
	reversed.types.reverse();
	reversed.keywords.reverse();

	for candidate in sample_candidates() {
		let first = scoring::score(&candidate, &query, &index, TODAY);
		let second = scoring::score(&candidate, &query, &index, TODAY);
		let swapped = scoring::score(&candidate, &reversed, &index, TODAY);

		assert_eq!(first, second);
		assert_eq!(first, swapped);
	}
}

#[test]
fn sample_candidates_score_as_expected() {
	let index = category_index();
	let query = sample_query();
	let scores: Vec<u32> = sample_candidates()
		.iter()
		.map(|candidate| scoring::score(candidate, &query, &index, TODAY))
		.collect();

	// b-1: PENSIONER code +6, housing hint +2, "жкх" in text +1, "компенсация" in text +1, fresh +1.
	// b-2: VETERAN code +6, transport hint +2, "проезд" in title +2.
	assert_eq!(scores, vec![11, 10, 0]);
}

#[test]
fn missing_fields_never_fail_scoring() {
	let candidate = BenefitRecord { id: "empty".to_string(), ..BenefitRecord::default() };

	assert_eq!(scoring::score(&candidate, &sample_query(), &category_index(), TODAY), 0);
}

#[test]
fn scenario_a_category_code_match() {
	let candidate = BenefitRecord { category_ids: strings(&["cat-1"]), ..record("a", "Выплата") };
	let query = NormalizedQuery { categories: strings(&["PENSIONER"]), ..Default::default() };

	assert_eq!(scoring::score(&candidate, &query, &category_index(), TODAY), 6);
}

#[test]
fn scenario_b_keyword_title_match() {
	let candidate = record("b", "Льгота на ЖКХ");
	let query = NormalizedQuery { keywords: strings(&["ЖКХ"]), ..Default::default() };
	let breakdown = scoring::score_breakdown(&candidate, &query, &category_index(), TODAY);

	assert_eq!(breakdown.keyword, 2);
	assert_eq!(breakdown.total(), 2);
}

#[test]
fn scenario_c_freshness_boundary() {
	let query = NormalizedQuery::default();
	let index = category_index();
	let yesterday = BenefitRecord { valid_to: TODAY.previous_day(), ..record("y", "") };
	let today = BenefitRecord { valid_to: Some(TODAY), ..record("t", "") };
	let tomorrow = BenefitRecord { valid_to: TODAY.next_day(), ..record("f", "") };

	assert_eq!(scoring::score(&yesterday, &query, &index, TODAY), 0);
	assert_eq!(scoring::score(&today, &query, &index, TODAY), 1);
	assert_eq!(scoring::score(&tomorrow, &query, &index, TODAY), 1);
}

#[test]
fn scenario_d_empty_personalized_candidates() {
	let policy = SelectionPolicy::for_mode(SearchMode::Personalized, 3);
	let items = selection::select_results(
		Vec::new(),
		&sample_query(),
		&category_index(),
		policy,
		TODAY,
	);

	assert!(items.is_empty());
}

#[test]
fn scenario_e_threshold_selection_keeps_fetch_order() {
	let scores = [5, 5, 3, 3, 3, 0, 0, 0, 0, 0];
	let ranked: Vec<_> = scores
		.iter()
		.enumerate()
		.map(|(position, score)| selection::ScoredCandidate {
			record: record(&format!("c{position}"), ""),
			score: *score,
		})
		.collect();
	let picked = selection::select(ranked, SelectionPolicy { threshold: 1, limit: 3 });
	let ids: Vec<_> = picked.iter().map(|candidate| candidate.record.id.as_str()).collect();

	assert_eq!(ids, vec!["c0", "c1", "c2"]);
}

#[test]
fn equal_scores_keep_input_order_after_ranking() {
	let query = NormalizedQuery { keywords: strings(&["проезд"]), ..Default::default() };
	let candidates = vec![
		record("first", "Проезд в автобусе"),
		record("other", "Налоговый вычет"),
		record("second", "Проезд в поезде"),
		record("third", "Проезд в метро"),
	];
	let ranked = selection::rank(candidates, &query, &category_index(), TODAY);
	let ids: Vec<_> = ranked.iter().map(|candidate| candidate.record.id.as_str()).collect();

	assert_eq!(ids, vec!["first", "second", "third", "other"]);
}

#[test]
fn fallback_returns_leading_candidates_when_nothing_is_relevant() {
	let candidates = vec![record("x", "A"), record("y", "B"), record("z", "C"), record("w", "D")];
	let items = selection::select_results(
		candidates,
		&NormalizedQuery::default(),
		&category_index(),
		SelectionPolicy::for_mode(SearchMode::RegionOnly, 3),
		TODAY,
	);
	let ids: Vec<_> = items.iter().map(|item| item.id.as_str()).collect();

	assert_eq!(ids, vec!["x", "y", "z"]);
	assert!(items.iter().all(|item| item.score == 0));
}

#[test]
fn personalized_threshold_drops_single_point_matches() {
	let candidates = vec![
		BenefitRecord { valid_to: Some(TODAY), ..record("fresh-only", "A") },
		BenefitRecord { category_ids: strings(&["cat-1"]), ..record("pensioner", "B") },
	];
	let query = NormalizedQuery { categories: strings(&["PENSIONER"]), ..Default::default() };
	let items = selection::select_results(
		candidates,
		&query,
		&category_index(),
		SelectionPolicy::for_mode(SearchMode::Personalized, 3),
		TODAY,
	);
	let ids: Vec<_> = items.iter().map(|item| item.id.as_str()).collect();

	assert_eq!(ids, vec!["pensioner"]);
}

#[test]
fn result_items_resolve_titles_and_render() {
	let items = selection::select_results(
		sample_candidates(),
		&sample_query(),
		&category_index(),
		SelectionPolicy::for_mode(SearchMode::RegionOnly, 3),
		TODAY,
	);

	assert_eq!(items.len(), 2);
	assert_eq!(items[0].id, "b-1");
	assert_eq!(items[0].categories, strings(&["Пенсионеры"]));
	assert_eq!(items[0].valid_to, "2026-01-01");
	assert_eq!(items[1].categories, strings(&["Ветераны"]));

	let text = present::render(&items, Locale::Ru);

	assert!(text.contains("1) Льгота пенсионерам"));
	assert!(text.contains("2) Бесплатный проезд"));
	assert!(text.contains("Категории: Ветераны"));
}

#[test]
fn result_item_serializes_with_wire_names() {
	let items = selection::select_results(
		vec![BenefitRecord { how_to_get: Some("МФЦ".to_string()), ..record("b", "Проезд") }],
		&NormalizedQuery::default(),
		&category_index(),
		SelectionPolicy::for_mode(SearchMode::RegionOnly, 3),
		TODAY,
	);
	let json = serde_json::to_value(&items[0]).expect("Item must serialize.");

	assert_eq!(json["howToGet"], "МФЦ");
	assert_eq!(json["type"], "Выплаты");
	assert!(json.get("how_to_get").is_none());
}
