use chrono::Utc;
use diesel::prelude::*;

use crate::domain::category::{Category, NewCategory};
use crate::domain::types::{CategoryId, CategoryName};
use crate::models::category::{Category as DbCategory, NewCategory as DbNewCategory};
use crate::pagination::{Direction, PageRequest, SortField};
use crate::repository::{
    CategoryReader, CategoryWriter, DieselRepository, RepositoryError, RepositoryResult,
};

impl CategoryReader for DieselRepository {
    fn list_categories(&self, request: &PageRequest) -> RepositoryResult<(usize, Vec<Category>)> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let total = categories::table.count().get_result::<i64>(&mut conn)? as usize;
        let Some(offset) = request.offset() else {
            return Ok((total, Vec::new()));
        };

        let items = categories::table
            .select(DbCategory::as_select())
            .into_boxed::<diesel::sqlite::Sqlite>();
        let items = match (request.sort().field, request.sort().direction) {
            (SortField::Id, Direction::Asc) => items.order(categories::id.asc()),
            (SortField::Id, Direction::Desc) => items.order(categories::id.desc()),
            (SortField::Name, Direction::Asc) => {
                items.order((categories::name.asc(), categories::id.asc()))
            }
            (SortField::Name, Direction::Desc) => {
                items.order((categories::name.desc(), categories::id.asc()))
            }
        };

        let items = items
            .offset(offset)
            .limit(request.limit())
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Category>, _>>()?;

        Ok((total, items))
    }

    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .find(id.get())
            .select(DbCategory::as_select())
            .first::<DbCategory>(&mut conn)
            .optional()?;

        let category = category.map(TryInto::try_into).transpose()?;
        Ok(category)
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let db_category: DbNewCategory = category.clone().into();

        let created = diesel::insert_into(categories::table)
            .values(db_category)
            .returning(DbCategory::as_returning())
            .get_result::<DbCategory>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_category(&self, id: CategoryId, name: &CategoryName) -> RepositoryResult<Category> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let updated = diesel::update(categories::table.find(id.get()))
            .set((
                categories::name.eq(name.as_str()),
                categories::updated_at.eq(Some(Utc::now().naive_utc())),
            ))
            .returning(DbCategory::as_returning())
            .get_result::<DbCategory>(&mut conn)
            .optional()?
            .ok_or(RepositoryError::NotFound)?;

        Ok(updated.try_into()?)
    }

    fn delete_category(&self, id: CategoryId) -> RepositoryResult<()> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let affected = diesel::delete(categories::table.find(id.get())).execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
