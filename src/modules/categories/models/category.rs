use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::traits::Entity;
use crate::core::validation::{Validate, Validator};
use crate::core::Result;

/// Product category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateCategoryRequest {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateCategoryRequest {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id: u64,
    pub name: String,
}

impl Validate for CreateCategoryRequest {
    fn validate(&self) -> Result<()> {
        Validator::new().required("name", &self.name, 1, 100).finish()
    }
}

impl Validate for UpdateCategoryRequest {
    fn validate(&self) -> Result<()> {
        Validator::new()
            .min_u64("id", self.id, 1)
            .required("name", &self.name, 1, 100)
            .finish()
    }
}

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
        }
    }
}

impl Entity for Category {
    const NAME: &'static str = "Category";

    type CreateRequest = CreateCategoryRequest;
    type UpdateRequest = UpdateCategoryRequest;
    type Response = CategoryResponse;

    fn id(&self) -> u64 {
        self.id
    }

    fn assign_id(&mut self, id: u64) {
        self.id = id;
    }

    fn from_create(request: CreateCategoryRequest) -> Self {
        Self {
            id: 0,
            name: request.name,
        }
    }

    fn update_target(request: &UpdateCategoryRequest) -> u64 {
        request.id
    }

    fn retarget(request: &mut UpdateCategoryRequest, id: u64) {
        request.id = id;
    }

    fn apply_update(&mut self, request: UpdateCategoryRequest) {
        self.name = request.name;
    }

    fn to_response(&self) -> CategoryResponse {
        CategoryResponse::from(self)
    }
}
