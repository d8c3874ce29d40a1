use serde::Deserialize;
use uuid::Uuid;

/// What an optional equality filter asks of the storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion<T> {
    /// No filter given.
    Any,
    Eq(T),
    /// The filter value cannot match any record.
    Nothing,
}

/// `GET /customers?emailAddress=...`
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerFilter {
    pub email_address: Option<String>,
}

impl CustomerFilter {
    pub fn criterion(&self) -> Criterion<&str> {
        match self.email_address.as_deref() {
            None | Some("") => Criterion::Any,
            Some(email) => Criterion::Eq(email),
        }
    }
}

/// `GET /products?vendorId=...`
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    pub vendor_id: Option<String>,
}

impl ProductFilter {
    pub fn for_vendor(vendor_id: Uuid) -> Self { Self { vendor_id: Some(vendor_id.to_string()) } }

    pub fn criterion(&self) -> Criterion<Uuid> {
        match self.vendor_id.as_deref() {
            None | Some("") => Criterion::Any,
            Some(raw) => match Uuid::parse_str(raw) {
                Ok(id) => Criterion::Eq(id),
                Err(_) => Criterion::Nothing,
            },
        }
    }
}

/// Entities listed without a filter. Unknown query parameters are ignored.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct NoFilter {}
