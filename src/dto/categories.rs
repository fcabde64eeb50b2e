use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::category::Category;
use crate::domain::types::CategoryName;
use crate::dto::DtoError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CategoryDto {
    /// Ignored on input; the store or the request path decides the id.
    #[serde(default)]
    pub id: Option<i32>,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

impl CategoryDto {
    pub fn new(id: Option<i32>, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Validate the trimmed name and extract it.
    pub fn to_name(&self) -> Result<CategoryName, DtoError> {
        let trimmed = Self::new(self.id, self.name.trim());
        trimmed.validate()?;
        Ok(CategoryName::new(trimmed.name)?)
    }
}

impl From<Category> for CategoryDto {
    fn from(value: Category) -> Self {
        Self {
            id: Some(value.id.get()),
            name: value.name.into_inner(),
        }
    }
}
