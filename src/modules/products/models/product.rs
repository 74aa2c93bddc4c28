use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::traits::Entity;
use crate::core::validation::{Validate, Validator};
use crate::core::Result;

const MAX_TAX_RATE: Decimal = Decimal::ONE_HUNDRED;
/// Largest value a DECIMAL(12,2) column holds
const MAX_PRICE: Decimal = Decimal::from_parts(0xD4A5_0FFF, 0xE8, 0, false, 2);
/// Both money columns keep two decimal places
const MONEY_SCALE: u32 = 2;

/// Product record
///
/// `price` and `tax_rate` are exact decimals in storage and plain JSON numbers
/// on the wire. `category_id` is not checked against the categories table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock_qty: i32,
    pub category_id: u64,
    pub sku: String,
    pub tax_rate: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock_qty: i32,
    pub category_id: u64,
    pub sku: String,
    pub tax_rate: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateProductRequest {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock_qty: i32,
    pub category_id: u64,
    pub sku: String,
    pub tax_rate: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock_qty: i32,
    pub category_id: u64,
    pub sku: String,
    pub tax_rate: Decimal,
}

struct ProductFields<'a> {
    name: &'a str,
    description: &'a str,
    price: Decimal,
    stock_qty: i32,
    category_id: u64,
    sku: &'a str,
    tax_rate: Decimal,
}

impl ProductFields<'_> {
    fn check(&self, validator: Validator) -> Validator {
        validator
            .required("name", self.name, 1, 100)
            .max_len("description", self.description, 500)
            .decimal_range("price", self.price, Decimal::ZERO, Some(MAX_PRICE))
            .max_scale("price", self.price, MONEY_SCALE)
            .min_i64("stock_qty", self.stock_qty.into(), 0)
            .min_u64("category_id", self.category_id, 1)
            .required("sku", self.sku, 1, 50)
            .decimal_range("tax_rate", self.tax_rate, Decimal::ZERO, Some(MAX_TAX_RATE))
            .max_scale("tax_rate", self.tax_rate, MONEY_SCALE)
    }
}

impl Validate for CreateProductRequest {
    fn validate(&self) -> Result<()> {
        ProductFields {
            name: &self.name,
            description: &self.description,
            price: self.price,
            stock_qty: self.stock_qty,
            category_id: self.category_id,
            sku: &self.sku,
            tax_rate: self.tax_rate,
        }
        .check(Validator::new())
        .finish()
    }
}

impl Validate for UpdateProductRequest {
    fn validate(&self) -> Result<()> {
        ProductFields {
            name: &self.name,
            description: &self.description,
            price: self.price,
            stock_qty: self.stock_qty,
            category_id: self.category_id,
            sku: &self.sku,
            tax_rate: self.tax_rate,
        }
        .check(Validator::new().min_u64("id", self.id, 1))
        .finish()
    }
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            stock_qty: product.stock_qty,
            category_id: product.category_id,
            sku: product.sku.clone(),
            tax_rate: product.tax_rate,
        }
    }
}

impl Entity for Product {
    const NAME: &'static str = "Product";

    type CreateRequest = CreateProductRequest;
    type UpdateRequest = UpdateProductRequest;
    type Response = ProductResponse;

    fn id(&self) -> u64 {
        self.id
    }

    fn assign_id(&mut self, id: u64) {
        self.id = id;
    }

    fn from_create(request: CreateProductRequest) -> Self {
        Self {
            id: 0,
            name: request.name,
            description: request.description,
            price: request.price,
            stock_qty: request.stock_qty,
            category_id: request.category_id,
            sku: request.sku,
            tax_rate: request.tax_rate,
        }
    }

    fn update_target(request: &UpdateProductRequest) -> u64 {
        request.id
    }

    fn retarget(request: &mut UpdateProductRequest, id: u64) {
        request.id = id;
    }

    fn apply_update(&mut self, request: UpdateProductRequest) {
        self.name = request.name;
        self.description = request.description;
        self.price = request.price;
        self.stock_qty = request.stock_qty;
        self.category_id = request.category_id;
        self.sku = request.sku;
        self.tax_rate = request.tax_rate;
    }

    fn to_response(&self) -> ProductResponse {
        ProductResponse::from(self)
    }
}
