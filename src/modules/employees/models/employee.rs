use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::traits::Entity;
use crate::core::validation::{Validate, Validator};
use crate::core::Result;

/// Employee record
///
/// `date_hired` is kept as the caller supplied it; no date format is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_hired: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_hired: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateEmployeeRequest {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_hired: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeResponse {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_hired: String,
}

fn employee_rules(
    validator: Validator,
    name: &str,
    email: &str,
    phone: &str,
    date_hired: &str,
) -> Validator {
    validator
        .required("name", name, 1, 100)
        .email("email", email, 100)
        .required("phone", phone, 1, 100)
        .required("date_hired", date_hired, 1, 50)
}

impl Validate for CreateEmployeeRequest {
    fn validate(&self) -> Result<()> {
        employee_rules(
            Validator::new(),
            &self.name,
            &self.email,
            &self.phone,
            &self.date_hired,
        )
        .finish()
    }
}

impl Validate for UpdateEmployeeRequest {
    fn validate(&self) -> Result<()> {
        employee_rules(
            Validator::new().min_u64("id", self.id, 1),
            &self.name,
            &self.email,
            &self.phone,
            &self.date_hired,
        )
        .finish()
    }
}

impl From<&Employee> for EmployeeResponse {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone(),
            date_hired: employee.date_hired.clone(),
        }
    }
}

impl Entity for Employee {
    const NAME: &'static str = "Employee";

    type CreateRequest = CreateEmployeeRequest;
    type UpdateRequest = UpdateEmployeeRequest;
    type Response = EmployeeResponse;

    fn id(&self) -> u64 {
        self.id
    }

    fn assign_id(&mut self, id: u64) {
        self.id = id;
    }

    fn from_create(request: CreateEmployeeRequest) -> Self {
        Self {
            id: 0,
            name: request.name,
            email: request.email,
            phone: request.phone,
            date_hired: request.date_hired,
        }
    }

    fn update_target(request: &UpdateEmployeeRequest) -> u64 {
        request.id
    }

    fn retarget(request: &mut UpdateEmployeeRequest, id: u64) {
        request.id = id;
    }

    fn apply_update(&mut self, request: UpdateEmployeeRequest) {
        self.name = request.name;
        self.email = request.email;
        self.phone = request.phone;
        self.date_hired = request.date_hired;
    }

    fn to_response(&self) -> EmployeeResponse {
        EmployeeResponse::from(self)
    }
}
