use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::types::{CategoryId, ProductId, ProductName};

/// A catalog product together with the categories it is filed under.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    /// Associated categories ordered by name.
    pub categories: Vec<Category>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

/// Information required to create or overwrite a [`Product`].
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct NewProduct {
    pub name: ProductName,
    /// Categories to associate; duplicates are collapsed on construction.
    pub category_ids: Vec<CategoryId>,
    pub created_at: NaiveDateTime,
}

impl NewProduct {
    pub fn new(name: ProductName, category_ids: impl IntoIterator<Item = CategoryId>) -> Self {
        let mut unique = Vec::new();
        for id in category_ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        Self {
            name,
            category_ids: unique,
            created_at: Utc::now().naive_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_product_collapses_duplicate_categories() {
        let ids = [1, 2, 1, 3, 2].map(|id| CategoryId::new(id).unwrap());
        let product = NewProduct::new(ProductName::new("Phone").unwrap(), ids);
        assert_eq!(product.category_ids, vec![1, 2, 3]);
    }
}
