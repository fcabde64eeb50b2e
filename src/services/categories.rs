use crate::domain::category::NewCategory;
use crate::domain::types::CategoryId;
use crate::dto::categories::CategoryDto;
use crate::pagination::{Page, PageRequest};
use crate::repository::{CategoryReader, CategoryWriter, RepositoryError};

use super::{ServiceError, ServiceResult};

fn id_not_found(id: i32) -> ServiceError {
    ServiceError::ResourceNotFound(format!("Id not found {id}"))
}

/// Fetch one page of categories mapped to DTOs.
///
/// The store is queried exactly once with `request`; page metadata is carried
/// over unchanged.
pub fn find_all_paged<R>(request: PageRequest, repo: &R) -> ServiceResult<Page<CategoryDto>>
where
    R: CategoryReader,
{
    match repo.list_categories(&request) {
        Ok((total, categories)) => {
            Ok(Page::new(categories, &request, total).map(CategoryDto::from))
        }
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn find_by_id<R>(id: i32, repo: &R) -> ServiceResult<CategoryDto>
where
    R: CategoryReader,
{
    let not_found = || ServiceError::ResourceNotFound("Entity not found".to_string());

    let category_id = CategoryId::new(id).map_err(|_| not_found())?;

    match repo.get_category_by_id(category_id) {
        Ok(Some(category)) => Ok(category.into()),
        Ok(None) => Err(not_found()),
        Err(e) => {
            log::error!("Failed to get category {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Create a category from the DTO's name. Any id in the DTO is ignored.
pub fn insert<R>(dto: CategoryDto, repo: &R) -> ServiceResult<CategoryDto>
where
    R: CategoryWriter,
{
    let name = dto.to_name()?;

    match repo.create_category(&NewCategory::new(name)) {
        Ok(category) => {
            log::info!("Created category {}", category.id);
            Ok(category.into())
        }
        Err(RepositoryError::ConstraintViolation(e)) => {
            log::warn!("Category insert rejected: {e}");
            Err(ServiceError::Database("Integrity violation".to_string()))
        }
        Err(e) => {
            log::error!("Failed to create category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Overwrite the category at `id` with the DTO's name.
///
/// `id` is authoritative; the DTO's own id is never read.
pub fn update<R>(id: i32, dto: CategoryDto, repo: &R) -> ServiceResult<CategoryDto>
where
    R: CategoryReader + CategoryWriter,
{
    let category_id = CategoryId::new(id).map_err(|_| id_not_found(id))?;

    match repo.get_category_by_id(category_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(id_not_found(id)),
        Err(e) => {
            log::error!("Failed to get category {id}: {e}");
            return Err(ServiceError::Internal);
        }
    }

    let name = dto.to_name()?;

    match repo.update_category(category_id, &name) {
        Ok(category) => Ok(category.into()),
        Err(RepositoryError::NotFound) => Err(id_not_found(id)),
        Err(RepositoryError::ConstraintViolation(e)) => {
            log::warn!("Category {id} update rejected: {e}");
            Err(ServiceError::Database("Integrity violation".to_string()))
        }
        Err(e) => {
            log::error!("Failed to update category {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Delete a category with a single store call.
pub fn delete<R>(id: i32, repo: &R) -> ServiceResult<()>
where
    R: CategoryWriter,
{
    let category_id = CategoryId::new(id).map_err(|_| id_not_found(id))?;

    match repo.delete_category(category_id) {
        Ok(()) => {
            log::info!("Deleted category {id}");
            Ok(())
        }
        Err(RepositoryError::NotFound) => Err(id_not_found(id)),
        Err(RepositoryError::ConstraintViolation(e)) => {
            log::warn!("Category {id} is still referenced: {e}");
            Err(ServiceError::Database("Integrity violation".to_string()))
        }
        Err(e) => {
            log::error!("Failed to delete category {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::Product;
    use crate::domain::types::{ProductId, ProductName};
    use crate::pagination::{Direction, SortField};
    use crate::repository::test::{TestRepository, sample_category, timestamp};

    const EXISTING_ID: i32 = 1;
    const NON_EXISTING_ID: i32 = 2;
    const DEPENDENT_ID: i32 = 3;

    fn sample_repo() -> TestRepository {
        let dependent = sample_category(DEPENDENT_ID, "Electronics");
        let product = Product {
            id: ProductId::new(10).unwrap(),
            name: ProductName::new("Smart TV").unwrap(),
            categories: vec![dependent.clone()],
            created_at: timestamp(),
            updated_at: None,
        };
        TestRepository::new(
            vec![sample_category(EXISTING_ID, "Books"), dependent],
            vec![product],
        )
    }

    #[test]
    fn find_all_paged_queries_store_once_with_same_request() {
        let repo = sample_repo();
        let request = PageRequest::new(0, 12).sorted(SortField::Name, Direction::Asc);

        let page = find_all_paged(request, &repo).unwrap();

        assert_eq!(*repo.category_list_calls.borrow(), vec![request]);
        assert_eq!(page.total, 2);
        assert_eq!(page.page, 0);
        assert_eq!(page.size, 12);
        assert_eq!(page.items[0].name, "Books");
    }

    #[test]
    fn find_all_paged_reports_store_failures_as_internal() {
        let repo = sample_repo().failing_reads();
        let err = find_all_paged(PageRequest::default(), &repo).unwrap_err();
        assert_eq!(err, ServiceError::Internal);
    }

    #[test]
    fn find_by_id_returns_dto_when_id_exists() {
        let repo = sample_repo();
        let dto = find_by_id(EXISTING_ID, &repo).unwrap();
        assert_eq!(dto.id, Some(EXISTING_ID));
        assert_eq!(dto.name, "Books");
    }

    #[test]
    fn find_by_id_fails_when_id_does_not_exist() {
        let repo = sample_repo();
        let err = find_by_id(NON_EXISTING_ID, &repo).unwrap_err();
        assert!(matches!(err, ServiceError::ResourceNotFound(_)));

        let err = find_by_id(-1, &repo).unwrap_err();
        assert!(matches!(err, ServiceError::ResourceNotFound(_)));
    }

    #[test]
    fn insert_ignores_incoming_id() {
        let repo = sample_repo();
        let dto = insert(CategoryDto::new(Some(EXISTING_ID), "Garden"), &repo).unwrap();

        assert_ne!(dto.id, Some(EXISTING_ID));
        assert_eq!(dto.name, "Garden");
        assert_eq!(find_by_id(dto.id.unwrap(), &repo).unwrap(), dto);
    }

    #[test]
    fn insert_rejects_blank_names() {
        let repo = sample_repo();
        let err = insert(CategoryDto::new(None, "  "), &repo).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn update_returns_dto_when_id_exists() {
        let repo = sample_repo();
        let dto = update(EXISTING_ID, CategoryDto::new(None, "Novels"), &repo).unwrap();
        assert_eq!(dto, CategoryDto::new(Some(EXISTING_ID), "Novels"));
    }

    #[test]
    fn update_uses_path_id_over_dto_id() {
        let repo = sample_repo();
        let dto = update(
            EXISTING_ID,
            CategoryDto::new(Some(DEPENDENT_ID), "Novels"),
            &repo,
        )
        .unwrap();

        assert_eq!(dto.id, Some(EXISTING_ID));
        assert_eq!(find_by_id(DEPENDENT_ID, &repo).unwrap().name, "Electronics");
    }

    #[test]
    fn update_fails_when_id_does_not_exist() {
        let repo = sample_repo();
        let err = update(NON_EXISTING_ID, CategoryDto::new(None, "Novels"), &repo).unwrap_err();
        assert_eq!(
            err,
            ServiceError::ResourceNotFound(format!("Id not found {NON_EXISTING_ID}"))
        );
    }

    #[test]
    fn delete_does_nothing_when_id_exists() {
        let repo = sample_repo();
        delete(EXISTING_ID, &repo).unwrap();
        assert_eq!(*repo.category_delete_calls.borrow(), vec![EXISTING_ID]);
    }

    #[test]
    fn delete_fails_with_not_found_when_id_does_not_exist() {
        let repo = sample_repo();
        let err = delete(NON_EXISTING_ID, &repo).unwrap_err();
        assert!(matches!(err, ServiceError::ResourceNotFound(_)));
        assert_eq!(*repo.category_delete_calls.borrow(), vec![NON_EXISTING_ID]);
    }

    #[test]
    fn delete_fails_with_database_error_when_id_is_referenced() {
        let repo = sample_repo();
        let err = delete(DEPENDENT_ID, &repo).unwrap_err();
        assert_eq!(err, ServiceError::Database("Integrity violation".to_string()));
        assert_eq!(*repo.category_delete_calls.borrow(), vec![DEPENDENT_ID]);
    }
}
