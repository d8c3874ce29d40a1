use sea_orm::{ColumnTrait, DbBackend, EntityTrait, QueryFilter, QueryTrait, Schema};
use uuid::Uuid;

use crate::{customer, product, service, vendor};

#[test]
fn tables_are_unqualified() {
    let sql = vendor::Entity::find().build(DbBackend::Postgres).to_string();
    assert!(sql.contains(r#"FROM "vendors""#), "{sql}");
    let sql = service::Entity::find().build(DbBackend::Postgres).to_string();
    assert!(sql.contains(r#"FROM "services""#), "{sql}");
}

#[test]
fn customer_email_filter() {
    let sql = customer::Entity::find()
        .filter(customer::Column::Email.eq("ada@example.com"))
        .build(DbBackend::Postgres)
        .to_string();
    assert!(sql.contains(r#""customers"."email" = 'ada@example.com'"#), "{sql}");
}

#[test]
fn product_vendor_filter() {
    let vid = Uuid::new_v4();
    let sql = product::Entity::find()
        .filter(product::Column::VendorId.eq(vid))
        .build(DbBackend::Postgres)
        .to_string();
    assert!(sql.contains(r#""products"."vendor_id" = "#), "{sql}");
    assert!(sql.contains(&vid.to_string()), "{sql}");
}

#[test]
fn customer_table_has_unique_email() {
    let schema = Schema::new(DbBackend::Postgres);
    let sql = DbBackend::Postgres
        .build(&schema.create_table_from_entity(customer::Entity))
        .to_string();
    assert!(sql.contains("UNIQUE"), "{sql}");
}

#[test]
fn product_table_references_vendors() {
    let schema = Schema::new(DbBackend::Postgres);
    let sql = DbBackend::Postgres
        .build(&schema.create_table_from_entity(product::Entity))
        .to_string();
    assert!(sql.contains("FOREIGN KEY"), "{sql}");
    assert!(sql.contains(r#""vendors""#), "{sql}");
}
