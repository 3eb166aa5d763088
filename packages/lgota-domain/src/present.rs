use serde::{Deserialize, Serialize};

use crate::selection::ResultItem;

const PLACEHOLDER: &str = "—";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
	#[default]
	Ru,
	En,
}
impl Locale {
	fn templates(self) -> &'static Templates {
		match self {
			Self::Ru => &RU,
			Self::En => &EN,
		}
	}
}

struct Templates {
	header: &'static str,
	empty: &'static str,
	categories: &'static str,
	r#type: &'static str,
	valid_to: &'static str,
	how_to_get: &'static str,
}

const RU: Templates = Templates {
	header: "Я нашёл подходящие льготы:\n",
	empty: "К сожалению, подходящих льгот не найдено.",
	categories: "Категории",
	r#type: "Тип",
	valid_to: "Действует до",
	how_to_get: "Как получить",
};

const EN: Templates = Templates {
	header: "I found matching benefits:\n",
	empty: "Unfortunately, no matching benefits were found.",
	categories: "Categories",
	r#type: "Type",
	valid_to: "Valid until",
	how_to_get: "How to get",
};

/// Renders the selected items as a numbered plain-text answer.
pub fn render(items: &[ResultItem], locale: Locale) -> String {
	let templates = locale.templates();

	if items.is_empty() {
		return templates.empty.to_string();
	}

	let mut lines = Vec::with_capacity(items.len() + 1);

	lines.push(templates.header.to_string());

	for (position, item) in items.iter().enumerate() {
		let categories =
			if item.categories.is_empty() { PLACEHOLDER.to_string() } else { item.categories.join(", ") };

		lines.push(format!(
			"{number}) {title}\n   {categories_label}: {categories}\n   {type_label}: {kind}\n   {valid_to_label}: {valid_to}\n   {how_to_get_label}: {how_to_get}\n",
			number = position + 1,
			title = item.title,
			categories_label = templates.categories,
			type_label = templates.r#type,
			kind = item.r#type,
			valid_to_label = templates.valid_to,
			valid_to = or_placeholder(&item.valid_to),
			how_to_get_label = templates.how_to_get,
			how_to_get = or_placeholder(&item.how_to_get),
		));
	}

	lines.join("\n")
}

fn or_placeholder(value: &str) -> &str {
	if value.trim().is_empty() { PLACEHOLDER } else { value }
}

#[cfg(test)]
mod tests {
	use super::*;

	fn item(title: &str, categories: &[&str]) -> ResultItem {
		ResultItem {
			id: "b1".to_string(),
			title: title.to_string(),
			categories: categories.iter().map(|value| value.to_string()).collect(),
			r#type: "ЖКХ".to_string(),
			valid_to: "2026-12-31".to_string(),
			how_to_get: "Через МФЦ".to_string(),
			requirements: String::new(),
			source_url: None,
			score: 4,
		}
	}

	#[test]
	fn renders_numbered_russian_answer() {
		let text = render(&[item("Льгота на ЖКХ", &["Пенсионеры", "Ветераны"])], Locale::Ru);

		assert_eq!(
			text,
			"Я нашёл подходящие льготы:\n\n1) Льгота на ЖКХ\n   Категории: Пенсионеры, Ветераны\n   Тип: ЖКХ\n   Действует до: 2026-12-31\n   Как получить: Через МФЦ\n"
		);
	}

	#[test]
	fn missing_values_use_placeholder() {
		let mut entry = item("Проезд", &[]);

		entry.valid_to = String::new();

		let text = render(&[entry], Locale::En);

		assert!(text.starts_with("I found matching benefits:\n"));
		assert!(text.contains("Categories: —"));
		assert!(text.contains("Valid until: —"));
	}

	#[test]
	fn empty_selection_has_its_own_sentence() {
		assert_eq!(render(&[], Locale::Ru), "К сожалению, подходящих льгот не найдено.");
	}

	#[test]
	fn locales_deserialize_from_codes() {
		let locales: Vec<Locale> =
			serde_json::from_str(r#"["ru", "en"]"#).expect("Locales must deserialize.");

		assert_eq!(locales, vec![Locale::Ru, Locale::En]);
		assert!(serde_json::from_str::<Locale>(r#""sah""#).is_err());
		assert_eq!(Locale::default(), Locale::Ru);
	}
}
