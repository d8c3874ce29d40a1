use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Nil when omitted from a request body.
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(default)]
    pub customer_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    #[serde(rename = "emailAddress")]
    pub email: String,
    #[serde(rename = "phoneNumber", default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
