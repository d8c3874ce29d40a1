//! Round trips against a real Postgres. Skipped unless `DATABASE_URL` is set.

use models::{customer, product, service, vendor};
use uuid::Uuid;

use super::seaorm::SeaOrmStore;
use super::{CustomerFilter, NoFilter, ProductFilter, Ready, Store};
use crate::errors::ServiceError;
use crate::test_support::get_db;

fn vendor(name: &str) -> vendor::Model {
    vendor::Model {
        vendor_id: Uuid::nil(),
        name: name.into(),
        contact: Some("Sam".into()),
        phone: Some("555-0199".into()),
        email: None,
        address: None,
    }
}

#[tokio::test]
async fn vendor_crud_against_postgres() -> Result<(), anyhow::Error> {
    let Some(db) = get_db().await? else { return Ok(()) };
    let store = SeaOrmStore::new(db);
    assert!(store.ready().await);

    let created = Store::<vendor::Model>::create(&store, vendor(&format!("svc_vendor_{}", Uuid::new_v4()))).await?;
    assert!(!created.vendor_id.is_nil());

    let found = Store::<vendor::Model>::get(&store, created.vendor_id).await?;
    assert_eq!(found, created);

    let dup = Store::<vendor::Model>::create(&store, created.clone()).await.unwrap_err();
    assert!(matches!(dup, ServiceError::Conflict { kind: "Vendor", .. }));

    let mut changed = created.clone();
    changed.address = Some("1 Desert Rd".into());
    let updated = Store::<vendor::Model>::update(&store, changed.clone()).await?;
    assert_eq!(updated, changed);

    let mut ghost = created.clone();
    ghost.vendor_id = Uuid::new_v4();
    let miss = Store::<vendor::Model>::update(&store, ghost).await.unwrap_err();
    assert_eq!(miss, ServiceError::NotFound("Vendor"));

    let listed = Store::<vendor::Model>::list(&store, &NoFilter {}).await?;
    assert!(listed.iter().any(|v| v.vendor_id == created.vendor_id));

    Store::<vendor::Model>::delete(&store, created.vendor_id).await?;
    Store::<vendor::Model>::delete(&store, created.vendor_id).await?;
    let gone = Store::<vendor::Model>::get(&store, created.vendor_id).await.unwrap_err();
    assert_eq!(gone, ServiceError::NotFound("Vendor"));
    Ok(())
}

#[tokio::test]
async fn customer_email_is_unique() -> Result<(), anyhow::Error> {
    let Some(db) = get_db().await? else { return Ok(()) };
    let store = SeaOrmStore::new(db);

    let email = format!("svc_{}@example.com", Uuid::new_v4());
    let c = customer::Model {
        customer_id: Uuid::nil(),
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: email.clone(),
        phone: None,
        address: None,
    };
    let first = Store::<customer::Model>::create(&store, c.clone()).await?;
    let err = Store::<customer::Model>::create(&store, c).await.unwrap_err();
    assert!(matches!(err, ServiceError::Conflict { kind: "Customer", .. }));

    let hits = Store::<customer::Model>::list(&store, &CustomerFilter { email_address: Some(email) }).await?;
    assert_eq!(hits, vec![first.clone()]);

    Store::<customer::Model>::delete(&store, first.customer_id).await?;
    Ok(())
}

#[tokio::test]
async fn products_filter_by_vendor_and_reject_unknown_vendor() -> Result<(), anyhow::Error> {
    let Some(db) = get_db().await? else { return Ok(()) };
    let store = SeaOrmStore::new(db);

    let v = Store::<vendor::Model>::create(&store, vendor(&format!("svc_vendor_{}", Uuid::new_v4()))).await?;
    let p = product::Model { product_id: Uuid::nil(), name: "Anvil".into(), price: 42.5, vendor_id: v.vendor_id };
    let p = Store::<product::Model>::create(&store, p).await?;

    let mine = Store::<product::Model>::list(&store, &ProductFilter::for_vendor(v.vendor_id)).await?;
    assert_eq!(mine, vec![p.clone()]);

    // foreign keys are a storage failure, not a conflict
    let orphan = product::Model { product_id: Uuid::nil(), name: "Orphan".into(), price: 1.0, vendor_id: Uuid::new_v4() };
    let err = Store::<product::Model>::create(&store, orphan).await.unwrap_err();
    assert!(matches!(err, ServiceError::Internal(_)));

    Store::<product::Model>::delete(&store, p.product_id).await?;
    Store::<vendor::Model>::delete(&store, v.vendor_id).await?;
    Ok(())
}

#[tokio::test]
async fn service_round_trip() -> Result<(), anyhow::Error> {
    let Some(db) = get_db().await? else { return Ok(()) };
    let store = SeaOrmStore::new(db);

    let s = service::Model { service_id: Uuid::nil(), name: "Tune-up".into(), price: 80.0 };
    let s = Store::<service::Model>::create(&store, s).await?;
    assert_eq!(Store::<service::Model>::get(&store, s.service_id).await?, s);
    Store::<service::Model>::delete(&store, s.service_id).await?;
    Ok(())
}
