use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::product::Product;
use crate::domain::types::ProductName;
use crate::dto::DtoError;
use crate::dto::categories::CategoryDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductDto {
    /// Ignored on input; the store or the request path decides the id.
    #[serde(default)]
    pub id: Option<i32>,
    #[validate(length(min = 5, max = 60))]
    pub name: String,
    /// Only the `id` of each entry is read on input.
    #[serde(default)]
    pub categories: Vec<CategoryDto>,
}

impl ProductDto {
    /// Validate the trimmed name and extract it.
    ///
    /// Length bounds apply after trimming, so padding cannot stretch a short
    /// name past the minimum.
    pub fn to_name(&self) -> Result<ProductName, DtoError> {
        let trimmed = Self {
            id: self.id,
            name: self.name.trim().to_string(),
            categories: Vec::new(),
        };
        trimmed.validate()?;
        Ok(ProductName::new(trimmed.name)?)
    }

    /// Raw ids of the referenced categories, in request order.
    pub fn category_ids(&self) -> Result<Vec<i32>, DtoError> {
        self.categories
            .iter()
            .map(|category| category.id.ok_or(DtoError::MissingCategoryId))
            .collect()
    }
}

impl From<Product> for ProductDto {
    fn from(value: Product) -> Self {
        Self {
            id: Some(value.id.get()),
            name: value.name.into_inner(),
            categories: value.categories.into_iter().map(CategoryDto::from).collect(),
        }
    }
}
