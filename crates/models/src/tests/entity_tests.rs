use serde_json::json;
use uuid::Uuid;

use crate::{customer, product, service, vendor};

#[test]
fn vendor_without_id_decodes_to_nil() {
    let v: vendor::Model = serde_json::from_value(json!({"name": "Acme"})).unwrap();
    assert!(v.vendor_id.is_nil());
    assert_eq!(v.name, "Acme");
    assert!(v.contact.is_none() && v.phone.is_none() && v.email.is_none() && v.address.is_none());
}

#[test]
fn vendor_requires_name() {
    let res: Result<vendor::Model, _> = serde_json::from_value(json!({"contact": "Bob"}));
    assert!(res.is_err());
}

#[test]
fn customer_uses_wire_names() {
    let id = Uuid::new_v4();
    let c = customer::Model {
        customer_id: id,
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.com".into(),
        phone: Some("555-0100".into()),
        address: None,
    };
    let v = serde_json::to_value(&c).unwrap();
    assert_eq!(v["customerId"], json!(id));
    assert_eq!(v["firstName"], "Ada");
    assert_eq!(v["lastName"], "Lovelace");
    assert_eq!(v["emailAddress"], "ada@example.com");
    assert_eq!(v["phoneNumber"], "555-0100");
    assert!(v.get("email").is_none());

    let back: customer::Model = serde_json::from_value(v).unwrap();
    assert_eq!(back, c);
}

#[test]
fn product_rejects_malformed_vendor_id() {
    let res: Result<product::Model, _> =
        serde_json::from_value(json!({"name": "Widget", "price": 9.5, "vendorId": "nope"}));
    assert!(res.is_err());
}

#[test]
fn service_price_is_numeric() {
    let s: service::Model = serde_json::from_value(json!({"name": "Repair", "price": 12.25})).unwrap();
    assert_eq!(s.price, 12.25);
    assert!(serde_json::from_value::<service::Model>(json!({"name": "Repair", "price": "12"})).is_err());
}
