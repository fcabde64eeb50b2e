use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::category::Category as DomainCategory;
use crate::domain::product::{NewProduct as DomainNewProduct, Product as DomainProduct};
use crate::domain::types::{ProductName, TypeConstraintError};
use crate::models::category::Category;

/// Diesel model representing the `products` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

/// Insertable form of [`Product`]. Category links are written separately.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct {
    pub name: String,
    pub created_at: NaiveDateTime,
}

/// Row of the `product_categories` join table.
#[derive(Debug, Clone, Copy, Identifiable, Queryable, Selectable, Insertable, Associations)]
#[diesel(table_name = crate::schema::product_categories)]
#[diesel(primary_key(product_id, category_id))]
#[diesel(belongs_to(Product, foreign_key = product_id))]
#[diesel(belongs_to(Category, foreign_key = category_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProductCategory {
    pub product_id: i32,
    pub category_id: i32,
}

impl Product {
    /// Combine the row with its loaded categories into a domain product.
    pub fn into_domain(
        self,
        categories: Vec<Category>,
    ) -> Result<DomainProduct, TypeConstraintError> {
        Ok(DomainProduct {
            id: self.id.try_into()?,
            name: ProductName::new(self.name)?,
            categories: categories
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<Vec<DomainCategory>, _>>()?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl From<&DomainNewProduct> for NewProduct {
    fn from(product: &DomainNewProduct) -> Self {
        Self {
            name: product.name.as_str().to_string(),
            created_at: product.created_at,
        }
    }
}
