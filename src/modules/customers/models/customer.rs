use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::traits::Entity;
use crate::core::validation::{Validate, Validator};
use crate::core::Result;

/// Customer record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub loyalty_points: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateCustomerRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub loyalty_points: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateCustomerRequest {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub loyalty_points: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerResponse {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub loyalty_points: i32,
}

fn contact_rules(
    validator: Validator,
    name: &str,
    email: &str,
    phone: &str,
    address: &str,
    loyalty_points: i32,
) -> Validator {
    validator
        .required("name", name, 1, 100)
        .email("email", email, 100)
        .required("phone", phone, 1, 100)
        .required("address", address, 1, 100)
        .min_i64("loyalty_points", loyalty_points.into(), 0)
}

impl Validate for CreateCustomerRequest {
    fn validate(&self) -> Result<()> {
        contact_rules(
            Validator::new(),
            &self.name,
            &self.email,
            &self.phone,
            &self.address,
            self.loyalty_points,
        )
        .finish()
    }
}

impl Validate for UpdateCustomerRequest {
    fn validate(&self) -> Result<()> {
        contact_rules(
            Validator::new().min_u64("id", self.id, 1),
            &self.name,
            &self.email,
            &self.phone,
            &self.address,
            self.loyalty_points,
        )
        .finish()
    }
}

impl From<&Customer> for CustomerResponse {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone(),
            address: customer.address.clone(),
            loyalty_points: customer.loyalty_points,
        }
    }
}

impl Entity for Customer {
    const NAME: &'static str = "Customer";

    type CreateRequest = CreateCustomerRequest;
    type UpdateRequest = UpdateCustomerRequest;
    type Response = CustomerResponse;

    fn id(&self) -> u64 {
        self.id
    }

    fn assign_id(&mut self, id: u64) {
        self.id = id;
    }

    fn from_create(request: CreateCustomerRequest) -> Self {
        Self {
            id: 0,
            name: request.name,
            email: request.email,
            phone: request.phone,
            address: request.address,
            loyalty_points: request.loyalty_points,
        }
    }

    fn update_target(request: &UpdateCustomerRequest) -> u64 {
        request.id
    }

    fn retarget(request: &mut UpdateCustomerRequest, id: u64) {
        request.id = id;
    }

    fn apply_update(&mut self, request: UpdateCustomerRequest) {
        self.name = request.name;
        self.email = request.email;
        self.phone = request.phone;
        self.address = request.address;
        self.loyalty_points = request.loyalty_points;
    }

    fn to_response(&self) -> CustomerResponse {
        CustomerResponse::from(self)
    }
}
