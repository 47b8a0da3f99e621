//! Customer repository.

use domain::models::customer::{Customer, UpsertCustomerRequest};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::store::{Store, StoreError};

/// Repository for customer operations.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    store: Store,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository over the given store.
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Inserts a customer, rejecting duplicate email addresses.
    pub async fn insert(&self, customer: Customer) -> Result<Customer, StoreError> {
        let mut inner = self.store.write().await;
        if inner
            .customers
            .values()
            .any(|c| c.email.eq_ignore_ascii_case(&customer.email))
        {
            return Err(StoreError::Conflict(format!(
                "A customer with email {} already exists",
                customer.email
            )));
        }
        inner.customers.insert(customer.id, customer.clone());
        Ok(customer)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, StoreError> {
        let inner = self.store.read().await;
        Ok(inner.customers.get(&id).cloned())
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, StoreError> {
        let inner = self.store.read().await;
        Ok(inner
            .customers
            .values()
            .find(|c| c.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    /// Lists customers ordered by join date, newest first.
    pub async fn list(&self) -> Result<Vec<Customer>, StoreError> {
        let inner = self.store.read().await;
        let mut customers: Vec<Customer> = inner.customers.values().cloned().collect();
        customers.sort_by(|a, b| b.joined_at.cmp(&a.joined_at).then(b.id.cmp(&a.id)));
        Ok(customers)
    }

    /// Replaces a customer's editable fields.
    pub async fn update(
        &self,
        id: Uuid,
        request: UpsertCustomerRequest,
    ) -> Result<Customer, StoreError> {
        let mut inner = self.store.write().await;

        let email_taken = inner
            .customers
            .values()
            .any(|c| c.id != id && c.email.eq_ignore_ascii_case(&request.email));
        if email_taken {
            return Err(StoreError::Conflict(format!(
                "A customer with email {} already exists",
                request.email
            )));
        }

        let customer = inner
            .customers
            .get_mut(&id)
            .ok_or(StoreError::NotFound("Customer"))?;
        customer.name = request.name;
        customer.email = request.email;
        customer.phone = request.phone;
        customer.address = request.address;
        customer.city = request.city;
        customer.state = request.state;
        customer.zip_code = request.zip_code;
        customer.country = request.country;
        Ok(customer.clone())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.store.write().await;
        inner
            .customers
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound("Customer"))
    }

    /// Records a booking against the customer matching `email`, creating the
    /// customer on first booking. Returns the up-to-date record.
    pub async fn record_booking(
        &self,
        name: &str,
        email: &str,
        phone: &str,
        total_price: Decimal,
    ) -> Result<Customer, StoreError> {
        let mut inner = self.store.write().await;
        if let Some(customer) = inner
            .customers
            .values_mut()
            .find(|c| c.email.eq_ignore_ascii_case(email))
        {
            customer.record_booking(total_price);
            return Ok(customer.clone());
        }

        let mut customer = Customer::from_request(UpsertCustomerRequest {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            address: None,
            city: None,
            state: None,
            zip_code: None,
            country: None,
        });
        customer.record_booking(total_price);
        inner.customers.insert(customer.id, customer.clone());
        Ok(customer)
    }
}
