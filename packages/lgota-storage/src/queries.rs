use lgota_domain::benefit::{BenefitRecord, CategoryEntry, CategoryIndex};

use crate::{
	Result,
	db::Db,
	models::{BenefitRow, CategoryRow, UserContext},
};

const BENEFIT_COLUMNS: &str = "\
	b.id,
	b.title,
	b.description,
	b.type AS benefit_type,
	b.valid_from::date AS valid_from,
	b.valid_to::date AS valid_to,
	b.requirements,
	b.\"howToGet\" AS how_to_get,
	b.source_url,
	COALESCE(
		array_agg(DISTINCT bbc.\"categoryId\") FILTER (WHERE bbc.\"categoryId\" IS NOT NULL),
		ARRAY[]::text[]
	) AS category_ids";

pub async fn load_region_id(db: &Db, code: &str) -> Result<Option<String>> {
	let id = sqlx::query_scalar("SELECT id FROM region WHERE code = $1")
		.bind(code)
		.fetch_optional(&db.pool)
		.await?;

	Ok(id)
}

pub async fn load_categories(db: &Db) -> Result<CategoryIndex> {
	let rows: Vec<CategoryRow> =
		sqlx::query_as("SELECT id, name, title FROM beneficiary_category")
			.fetch_all(&db.pool)
			.await?;

	Ok(rows.into_iter().map(<(String, CategoryEntry)>::from).collect())
}

/// Every benefit offered in `region_id`, in id order.
pub async fn load_benefits_by_region(db: &Db, region_id: &str) -> Result<Vec<BenefitRecord>> {
	let sql = format!(
		"\
SELECT
{BENEFIT_COLUMNS}
FROM benefit b
JOIN benefit_region br ON br.\"benefitId\" = b.id
LEFT JOIN benefit_beneficiary_category bbc ON bbc.\"benefitId\" = b.id
WHERE br.\"regionId\" = $1
GROUP BY b.id
ORDER BY b.id"
	);
	let rows: Vec<BenefitRow> =
		sqlx::query_as(sql.as_str()).bind(region_id).fetch_all(&db.pool).await?;

	Ok(rows.into_iter().map(BenefitRecord::from).collect())
}

/// Region and confirmed category ids of `user_id`, or `None` when the user does not exist or is
/// not an active, verified account.
pub async fn load_user_context(db: &Db, user_id: &str) -> Result<Option<UserContext>> {
	let context = sqlx::query_as(
		"\
SELECT
	u.id AS user_id,
	u.\"regionId\" AS region_id,
	COALESCE(
		array_agg(ubc.\"categoryId\" ORDER BY ubc.\"categoryId\")
			FILTER (WHERE ubc.\"categoryId\" IS NOT NULL),
		ARRAY[]::text[]
	) AS category_ids
FROM \"user\" u
LEFT JOIN user_beneficiary_category ubc
	ON ubc.\"userId\" = u.id
	AND ubc.confirmed
WHERE u.id = $1
	AND u.status = 'ACTIVE'
	AND u.\"isVerified\"
GROUP BY u.id",
	)
	.bind(user_id)
	.fetch_optional(&db.pool)
	.await?;

	Ok(context)
}

/// Benefits in the user's region that share at least one confirmed category, minus the ones the
/// user hid. Empty when the user has no region or no confirmed categories.
pub async fn load_benefits_for_user(db: &Db, context: &UserContext) -> Result<Vec<BenefitRecord>> {
	let Some(region_id) = context.region_id.as_deref() else { return Ok(Vec::new()) };

	if context.category_ids.is_empty() {
		return Ok(Vec::new());
	}

	let sql = format!(
		"\
SELECT
{BENEFIT_COLUMNS}
FROM benefit b
JOIN benefit_region br ON br.\"benefitId\" = b.id
LEFT JOIN benefit_beneficiary_category bbc ON bbc.\"benefitId\" = b.id
WHERE br.\"regionId\" = $1
	AND EXISTS (
		SELECT 1
		FROM benefit_beneficiary_category owned
		WHERE owned.\"benefitId\" = b.id
			AND owned.\"categoryId\" = ANY($2)
	)
	AND NOT EXISTS (
		SELECT 1
		FROM hidden_benefit hb
		WHERE hb.\"benefitId\" = b.id
			AND hb.\"userId\" = $3
	)
GROUP BY b.id
ORDER BY b.id"
	);
	let rows: Vec<BenefitRow> = sqlx::query_as(sql.as_str())
		.bind(region_id)
		.bind(&context.category_ids)
		.bind(context.user_id.as_str())
		.fetch_all(&db.pool)
		.await?;

	Ok(rows.into_iter().map(BenefitRecord::from).collect())
}
