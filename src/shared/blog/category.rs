//! Category Data Structure

use serde::{Deserialize, Serialize};

use super::EntityId;
use crate::shared::error::{require, SharedError};

/// A post category. Also the response body of category creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: EntityId,
    pub name: String,
}

/// Response type for listing categories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListCategoriesResponse {
    pub categories: Vec<Category>,
}

/// Request type for creating a category
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: Option<String>,
}

impl CreateCategoryRequest {
    /// Build an unsaved category; the store assigns the id
    pub fn into_category(self) -> Result<Category, SharedError> {
        let name = require("name", self.name.as_deref())?.to_string();
        Ok(Category { id: 0, name })
    }
}
