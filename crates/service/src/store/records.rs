use models::{customer, product, service, vendor};
use uuid::Uuid;

use super::{Criterion, CustomerFilter, NoFilter, ProductFilter, Record};

impl Record for customer::Model {
    const KIND: &'static str = "Customer";
    type Filter = CustomerFilter;

    fn id(&self) -> Uuid { self.customer_id }

    fn set_id(&mut self, id: Uuid) { self.customer_id = id; }

    fn matches(&self, filter: &CustomerFilter) -> bool {
        match filter.criterion() {
            Criterion::Any => true,
            Criterion::Eq(email) => self.email == email,
            Criterion::Nothing => false,
        }
    }

    fn unique_attribute(&self) -> Option<(&'static str, String)> {
        Some(("email", self.email.clone()))
    }
}

impl Record for product::Model {
    const KIND: &'static str = "Product";
    type Filter = ProductFilter;

    fn id(&self) -> Uuid { self.product_id }

    fn set_id(&mut self, id: Uuid) { self.product_id = id; }

    fn matches(&self, filter: &ProductFilter) -> bool {
        match filter.criterion() {
            Criterion::Any => true,
            Criterion::Eq(vendor_id) => self.vendor_id == vendor_id,
            Criterion::Nothing => false,
        }
    }
}

impl Record for service::Model {
    const KIND: &'static str = "Service";
    type Filter = NoFilter;

    fn id(&self) -> Uuid { self.service_id }

    fn set_id(&mut self, id: Uuid) { self.service_id = id; }

    fn matches(&self, _: &NoFilter) -> bool { true }
}

impl Record for vendor::Model {
    const KIND: &'static str = "Vendor";
    type Filter = NoFilter;

    fn id(&self) -> Uuid { self.vendor_id }

    fn set_id(&mut self, id: Uuid) { self.vendor_id = id; }

    fn matches(&self, _: &NoFilter) -> bool { true }
}
