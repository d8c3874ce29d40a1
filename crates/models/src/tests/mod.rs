/// JSON shape of the entities
pub mod entity_tests;

/// SQL generated for the entities against the Postgres backend
pub mod query_tests;
