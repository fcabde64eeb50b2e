use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, NewCategory};
use crate::domain::product::{NewProduct, Product};
use crate::domain::types::{CategoryId, CategoryName, ProductId};
use crate::pagination::PageRequest;

pub use errors::{RepositoryError, RepositoryResult};

pub mod category;
pub mod errors;
pub mod product;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// Return the total number of categories and the slice selected by `request`.
    fn list_categories(&self, request: &PageRequest) -> RepositoryResult<(usize, Vec<Category>)>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category and return it with its assigned id.
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category>;
    /// Overwrite the name of an existing category.
    ///
    /// Fails with [`RepositoryError::NotFound`] when no row has `id`.
    fn update_category(&self, id: CategoryId, name: &CategoryName) -> RepositoryResult<Category>;
    /// Delete a category.
    ///
    /// Fails with [`RepositoryError::NotFound`] when no row has `id` and with
    /// [`RepositoryError::ConstraintViolation`] while products still reference it.
    fn delete_category(&self, id: CategoryId) -> RepositoryResult<()>;
}

/// Read-only operations for product entities.
pub trait ProductReader {
    /// Return the total number of products and the slice selected by `request`.
    fn list_products(&self, request: &PageRequest) -> RepositoryResult<(usize, Vec<Product>)>;
    /// Retrieve a product, with its categories, by identifier.
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
}

/// Write operations for product entities and their category links.
pub trait ProductWriter {
    /// Persist a new product and link it to `product.category_ids`.
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product>;
    /// Overwrite the name and replace the category links of a product.
    ///
    /// `product.created_at` is ignored. Fails with [`RepositoryError::NotFound`]
    /// when no row has `id`.
    fn update_product(&self, id: ProductId, product: &NewProduct) -> RepositoryResult<Product>;
    /// Delete a product and its category links.
    fn delete_product(&self, id: ProductId) -> RepositoryResult<()>;
}
