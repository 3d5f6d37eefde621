/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Calendar date without a time zone (`DATE` columns).
pub type Date = chrono::NaiveDate;
