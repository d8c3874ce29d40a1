use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use tracing::debug;

/// Outcome of a failed store operation. Every storage failure lands in
/// exactly one of these three kinds.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// No record carries the requested identifier.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// A uniqueness constraint (identifier or unique attribute) was violated.
    #[error("{kind} already exists: {detail}")]
    Conflict { kind: &'static str, detail: String },
    /// Anything else: connectivity, malformed query, foreign keys, timeouts.
    #[error("storage error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn not_found(kind: &'static str) -> Self { Self::NotFound(kind) }

    pub fn conflict(kind: &'static str, detail: impl Into<String>) -> Self {
        Self::Conflict { kind, detail: detail.into() }
    }

    /// Classify a SeaORM error for an operation on `kind` records.
    pub fn from_db(kind: &'static str, err: DbErr) -> Self {
        if let Some(sql) = err.sql_err() {
            if let Some(classified) = Self::from_sql(kind, sql) {
                return classified;
            }
        }
        match err {
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => Self::NotFound(kind),
            other => {
                debug!(entity = kind, error = %other, "unclassified storage error");
                Self::Internal(other.to_string())
            }
        }
    }

    /// Only uniqueness violations are singled out; other constraint
    /// failures stay internal.
    pub fn from_sql(kind: &'static str, err: SqlErr) -> Option<Self> {
        match err {
            SqlErr::UniqueConstraintViolation(detail) => Some(Self::conflict(kind, detail)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_not_found_maps_to_not_found() {
        let e = ServiceError::from_db("Vendor", DbErr::RecordNotFound("vendors".into()));
        assert_eq!(e, ServiceError::NotFound("Vendor"));
        assert_eq!(e.to_string(), "Vendor not found");
    }

    #[test]
    fn record_not_updated_maps_to_not_found() {
        let e = ServiceError::from_db("Product", DbErr::RecordNotUpdated);
        assert_eq!(e, ServiceError::NotFound("Product"));
    }

    #[test]
    fn unique_violation_maps_to_conflict() {
        let e = ServiceError::from_sql(
            "Customer",
            SqlErr::UniqueConstraintViolation("customers_email_key".into()),
        );
        assert_eq!(e, Some(ServiceError::conflict("Customer", "customers_email_key")));
    }

    #[test]
    fn foreign_key_violation_is_not_a_conflict() {
        let e = ServiceError::from_sql(
            "Product",
            SqlErr::ForeignKeyConstraintViolation("fk-products-vendor_id".into()),
        );
        assert_eq!(e, None);
    }

    #[test]
    fn everything_else_is_internal() {
        let e = ServiceError::from_db("Service", DbErr::Custom("connection reset".into()));
        assert!(matches!(e, ServiceError::Internal(ref m) if m.contains("connection reset")));
        let e = ServiceError::from_db("Service", DbErr::Conn(sea_orm::RuntimeErr::Internal("refused".into())));
        assert!(matches!(e, ServiceError::Internal(_)));
    }
}
