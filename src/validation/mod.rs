mod record;
mod schema;
#[cfg(test)]
mod tests;

pub use record::{normalize_record, validate_record};
pub use schema::{missing_headers, resolve_columns, validate_schema, REQUIRED_HEADERS};
