use std::collections::HashMap;

use time::Date;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BenefitRecord {
	pub id: String,
	pub title: Option<String>,
	pub description: Option<String>,
	pub requirements: Option<String>,
	pub how_to_get: Option<String>,
	pub r#type: String,
	pub valid_from: Option<Date>,
	pub valid_to: Option<Date>,
	pub source_url: Option<String>,
	pub category_ids: Vec<String>,
}
impl BenefitRecord {
	/// Lowercased title, description, requirements and how-to-get joined by single spaces.
	pub fn full_text(&self) -> String {
		[&self.title, &self.description, &self.requirements, &self.how_to_get]
			.into_iter()
			.map(|field| field.as_deref().unwrap_or_default().to_lowercase())
			.collect::<Vec<_>>()
			.join(" ")
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryEntry {
	/// Internal code such as `PENSIONER`.
	pub code: String,
	/// Human-readable title shown to users.
	pub title: String,
}

#[derive(Clone, Debug, Default)]
pub struct CategoryIndex {
	entries: HashMap<String, CategoryEntry>,
}
impl CategoryIndex {
	pub fn new(entries: HashMap<String, CategoryEntry>) -> Self {
		Self { entries }
	}

	pub fn get(&self, id: &str) -> Option<&CategoryEntry> {
		self.entries.get(id)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Internal codes of the given ids. Unknown ids are skipped.
	pub fn codes<'a>(&'a self, ids: &'a [String]) -> impl Iterator<Item = &'a str> + 'a {
		ids.iter().filter_map(|id| self.get(id)).map(|entry| entry.code.as_str())
	}

	/// Display titles of the given ids in input order. Unknown ids are skipped.
	pub fn titles(&self, ids: &[String]) -> Vec<String> {
		ids.iter().filter_map(|id| self.get(id)).map(|entry| entry.title.clone()).collect()
	}
}
impl FromIterator<(String, CategoryEntry)> for CategoryIndex {
	fn from_iter<T: IntoIterator<Item = (String, CategoryEntry)>>(iter: T) -> Self {
		Self { entries: iter.into_iter().collect() }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn full_text_treats_missing_fields_as_empty() {
		let record = BenefitRecord {
			title: Some("Льгота".to_string()),
			requirements: Some("Справка".to_string()),
			..BenefitRecord::default()
		};

		assert_eq!(record.full_text(), "льгота  справка ");
	}

	#[test]
	fn titles_skip_unknown_ids() {
		let index: CategoryIndex = [(
			"c1".to_string(),
			CategoryEntry { code: "PENSIONER".to_string(), title: "Пенсионеры".to_string() },
		)]
		.into_iter()
		.collect();
		let ids = vec!["missing".to_string(), "c1".to_string()];

		assert_eq!(index.titles(&ids), vec!["Пенсионеры".to_string()]);
		assert_eq!(index.codes(&ids).collect::<Vec<_>>(), vec!["PENSIONER"]);
	}
}
