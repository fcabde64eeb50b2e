use crate::domain::product::NewProduct;
use crate::domain::types::{CategoryId, ProductId};
use crate::dto::products::ProductDto;
use crate::pagination::{Page, PageRequest};
use crate::repository::{CategoryReader, ProductReader, ProductWriter, RepositoryError};

use super::{ServiceError, ServiceResult};

fn id_not_found(id: i32) -> ServiceError {
    ServiceError::ResourceNotFound(format!("Id not found {id}"))
}

/// Turn the DTO into a [`NewProduct`], checking every referenced category.
///
/// Categories are looked up eagerly so a dangling reference fails here, before
/// anything is written.
fn build_new_product<R>(dto: &ProductDto, repo: &R) -> ServiceResult<NewProduct>
where
    R: CategoryReader,
{
    let name = dto.to_name()?;

    let mut category_ids = Vec::new();
    for raw_id in dto.category_ids()? {
        let category_not_found =
            || ServiceError::ResourceNotFound(format!("Category not found {raw_id}"));

        let category_id = CategoryId::new(raw_id).map_err(|_| category_not_found())?;
        match repo.get_category_by_id(category_id) {
            Ok(Some(category)) => category_ids.push(category.id),
            Ok(None) => return Err(category_not_found()),
            Err(e) => {
                log::error!("Failed to resolve category {raw_id}: {e}");
                return Err(ServiceError::Internal);
            }
        }
    }

    Ok(NewProduct::new(name, category_ids))
}

/// Fetch one page of products mapped to DTOs.
pub fn find_all_paged<R>(request: PageRequest, repo: &R) -> ServiceResult<Page<ProductDto>>
where
    R: ProductReader,
{
    match repo.list_products(&request) {
        Ok((total, products)) => Ok(Page::new(products, &request, total).map(ProductDto::from)),
        Err(e) => {
            log::error!("Failed to list products: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn find_by_id<R>(id: i32, repo: &R) -> ServiceResult<ProductDto>
where
    R: ProductReader,
{
    let not_found = || ServiceError::ResourceNotFound("Entity not found".to_string());

    let product_id = ProductId::new(id).map_err(|_| not_found())?;

    match repo.get_product_by_id(product_id) {
        Ok(Some(product)) => Ok(product.into()),
        Ok(None) => Err(not_found()),
        Err(e) => {
            log::error!("Failed to get product {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Create a product and link it to the categories named in the DTO.
pub fn insert<R>(dto: ProductDto, repo: &R) -> ServiceResult<ProductDto>
where
    R: CategoryReader + ProductWriter,
{
    let new_product = build_new_product(&dto, repo)?;

    match repo.create_product(&new_product) {
        Ok(product) => {
            log::info!("Created product {}", product.id);
            Ok(product.into())
        }
        Err(RepositoryError::ConstraintViolation(e)) => {
            log::warn!("Product insert rejected: {e}");
            Err(ServiceError::Database("Integrity violation".to_string()))
        }
        Err(e) => {
            log::error!("Failed to create product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Overwrite the product at `id` and replace its categories.
///
/// `id` is authoritative; the DTO's own id is never read.
pub fn update<R>(id: i32, dto: ProductDto, repo: &R) -> ServiceResult<ProductDto>
where
    R: CategoryReader + ProductReader + ProductWriter,
{
    let product_id = ProductId::new(id).map_err(|_| id_not_found(id))?;

    match repo.get_product_by_id(product_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(id_not_found(id)),
        Err(e) => {
            log::error!("Failed to get product {id}: {e}");
            return Err(ServiceError::Internal);
        }
    }

    let changes = build_new_product(&dto, repo)?;

    match repo.update_product(product_id, &changes) {
        Ok(product) => Ok(product.into()),
        Err(RepositoryError::NotFound) => Err(id_not_found(id)),
        Err(RepositoryError::ConstraintViolation(e)) => {
            log::warn!("Product {id} update rejected: {e}");
            Err(ServiceError::Database("Integrity violation".to_string()))
        }
        Err(e) => {
            log::error!("Failed to update product {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Delete a product with a single store call.
pub fn delete<R>(id: i32, repo: &R) -> ServiceResult<()>
where
    R: ProductWriter,
{
    let product_id = ProductId::new(id).map_err(|_| id_not_found(id))?;

    match repo.delete_product(product_id) {
        Ok(()) => {
            log::info!("Deleted product {id}");
            Ok(())
        }
        Err(RepositoryError::NotFound) => Err(id_not_found(id)),
        Err(RepositoryError::ConstraintViolation(e)) => {
            log::warn!("Product {id} is still referenced: {e}");
            Err(ServiceError::Database("Integrity violation".to_string()))
        }
        Err(e) => {
            log::error!("Failed to delete product {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}
