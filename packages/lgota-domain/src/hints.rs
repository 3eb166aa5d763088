//! Fixed dictionaries that map category and type codes to lowercase substring hints.
//!
//! Hints are Russian word stems matched against base-language text that was lowercased once by
//! the caller.

pub type HintTable = &'static [(&'static str, &'static [&'static str])];

pub const CATEGORY_CODES: [&str; 10] = [
	"PENSIONER",
	"LOW_INCOME",
	"MULTICHILD_PARENT",
	"STUDENT",
	"VETERAN",
	"DISABLED_1",
	"DISABLED_2",
	"DISABLED_3",
	"DISABLED_CHILD_PARENT",
	"RESIDENTS_NORTH_REGIONS",
];

pub const TYPE_CODES: [&str; 10] = [
	"housing",
	"medical",
	"transport",
	"social",
	"federal",
	"regional",
	"commercial",
	"tax",
	"family",
	"education",
];

pub const CATEGORY_HINTS: HintTable = &[
	("PENSIONER", &["пенсионер", "пенсии", "пожил", "по старости"]),
	("LOW_INCOME", &["малоимущ", "малообеспеч", "низкий доход", "низким доходом"]),
	("MULTICHILD_PARENT", &["многодет"]),
	("STUDENT", &["студент", "учащ", "обучающ"]),
	("VETERAN", &["ветеран", "участник сво", "боевых действ"]),
	("DISABLED_1", &["инвалид 1", "1 группы", "первой группы"]),
	("DISABLED_2", &["инвалид 2", "2 группы", "второй группы"]),
	("DISABLED_3", &["инвалид 3", "3 группы", "третьей группы"]),
	(
		"DISABLED_CHILD_PARENT",
		&["ребенок-инвалид", "ребёнок-инвалид", "ребенка-инвалида", "ребёнка-инвалида", "детей-инвалидов"],
	),
	("RESIDENTS_NORTH_REGIONS", &["крайнего севера", "северн", "север"]),
];

pub const TYPE_HINTS: HintTable = &[
	("housing", &["жкх", "жку", "жиль", "коммунал", "квартир", "капремонт"]),
	("medical", &["медиц", "лекарств", "лечен", "здоров", "санатор"]),
	("transport", &["транспорт", "проезд", "автобус", "поезд", "билет"]),
	("social", &["социальн", "соцзащит", "уход"]),
	("federal", &["федеральн"]),
	("regional", &["региональн", "республик"]),
	("commercial", &["коммерч", "скидк", "магазин"]),
	("tax", &["налог", "вычет"]),
	("family", &["семь", "семей", "материнск", "детск", "ребен", "ребён"]),
	("education", &["образован", "обучен", "учеб", "школ", "вуз"]),
];

/// Returns every code whose hint list has at least one substring match in `text`.
///
/// `text` must already be lowercased. Codes come back in table order.
pub fn detect(table: HintTable, text: &str) -> Vec<&'static str> {
	table
		.iter()
		.filter(|(_, hints)| first_match(hints, text).is_some())
		.map(|(code, _)| *code)
		.collect()
}

/// Hints registered for `code`, compared case-insensitively.
pub fn hints_for(table: HintTable, code: &str) -> &'static [&'static str] {
	table
		.iter()
		.find(|(candidate, _)| candidate.eq_ignore_ascii_case(code))
		.map(|(_, hints)| *hints)
		.unwrap_or(&[])
}

/// First hint in declaration order that occurs in `text`.
pub fn first_match(hints: &[&'static str], text: &str) -> Option<&'static str> {
	hints.iter().copied().find(|hint| text.contains(hint))
}
