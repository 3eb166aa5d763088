use time::Date;

use lgota_domain::benefit::{BenefitRecord, CategoryEntry};

#[derive(Debug, sqlx::FromRow)]
pub struct BenefitRow {
	pub id: String,
	pub title: Option<String>,
	pub description: Option<String>,
	pub benefit_type: String,
	pub valid_from: Option<Date>,
	pub valid_to: Option<Date>,
	pub requirements: Option<String>,
	pub how_to_get: Option<String>,
	pub source_url: Option<String>,
	pub category_ids: Vec<String>,
}
impl From<BenefitRow> for BenefitRecord {
	fn from(row: BenefitRow) -> Self {
		Self {
			id: row.id,
			title: row.title,
			description: row.description,
			requirements: row.requirements,
			how_to_get: row.how_to_get,
			r#type: row.benefit_type,
			valid_from: row.valid_from,
			valid_to: row.valid_to,
			source_url: row.source_url,
			category_ids: row.category_ids,
		}
	}
}

#[derive(Debug, sqlx::FromRow)]
pub struct CategoryRow {
	pub id: String,
	pub name: String,
	pub title: String,
}
impl From<CategoryRow> for (String, CategoryEntry) {
	fn from(row: CategoryRow) -> Self {
		(row.id, CategoryEntry { code: row.name, title: row.title })
	}
}

/// Region and confirmed categories of an active, verified user.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UserContext {
	pub user_id: String,
	pub region_id: Option<String>,
	pub category_ids: Vec<String>,
}
