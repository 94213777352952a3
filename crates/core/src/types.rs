/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// An XRPL classic address (`r...`).
pub type LedgerAddress = String;

/// A 64-character hex NFTokenID.
pub type TokenId = String;
