/// Tables read by the search pipeline. Column names follow the admin backend that owns the data,
/// which mixes snake_case and quoted camelCase identifiers.
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS region (
	id text PRIMARY KEY,
	name text NOT NULL,
	code text NOT NULL UNIQUE,
	type text NOT NULL DEFAULT 'regional'
);

CREATE TABLE IF NOT EXISTS beneficiary_category (
	id text PRIMARY KEY,
	name text NOT NULL UNIQUE,
	title text NOT NULL
);

CREATE TABLE IF NOT EXISTS benefit (
	id text PRIMARY KEY,
	title text NOT NULL,
	description text NULL,
	type text NOT NULL,
	valid_from timestamp(3) NULL,
	valid_to timestamp(3) NULL,
	requirements text NULL,
	"howToGet" text NULL,
	source_url text NULL,
	created_at timestamp(3) NOT NULL DEFAULT now()
);

CREATE TABLE IF NOT EXISTS benefit_region (
	"benefitId" text NOT NULL REFERENCES benefit(id) ON DELETE CASCADE,
	"regionId" text NOT NULL REFERENCES region(id) ON DELETE CASCADE,
	PRIMARY KEY ("benefitId", "regionId")
);

CREATE TABLE IF NOT EXISTS benefit_beneficiary_category (
	"benefitId" text NOT NULL REFERENCES benefit(id) ON DELETE CASCADE,
	"categoryId" text NOT NULL REFERENCES beneficiary_category(id) ON DELETE CASCADE,
	PRIMARY KEY ("benefitId", "categoryId")
);

CREATE TABLE IF NOT EXISTS "user" (
	id text PRIMARY KEY,
	"regionId" text NULL REFERENCES region(id),
	status text NOT NULL DEFAULT 'REGISTRATION_PENDING',
	"isVerified" boolean NOT NULL DEFAULT false
);

CREATE TABLE IF NOT EXISTS user_beneficiary_category (
	"userId" text NOT NULL REFERENCES "user"(id) ON DELETE CASCADE,
	"categoryId" text NOT NULL REFERENCES beneficiary_category(id) ON DELETE CASCADE,
	confirmed boolean NOT NULL DEFAULT false,
	"confirmationDate" timestamp(3) NULL,
	PRIMARY KEY ("userId", "categoryId")
);

CREATE TABLE IF NOT EXISTS hidden_benefit (
	"userId" text NOT NULL REFERENCES "user"(id) ON DELETE CASCADE,
	"benefitId" text NOT NULL REFERENCES benefit(id) ON DELETE CASCADE,
	PRIMARY KEY ("userId", "benefitId")
);

CREATE INDEX IF NOT EXISTS benefit_region_region_idx ON benefit_region ("regionId");
CREATE INDEX IF NOT EXISTS benefit_category_category_idx ON benefit_beneficiary_category ("categoryId")
"#;
