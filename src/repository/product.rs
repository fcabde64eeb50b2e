use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::product::{NewProduct, Product};
use crate::domain::types::{CategoryId, ProductId};
use crate::models::category::Category as DbCategory;
use crate::models::product::{NewProduct as DbNewProduct, Product as DbProduct, ProductCategory};
use crate::pagination::{Direction, PageRequest, SortField};
use crate::repository::{
    DieselRepository, ProductReader, ProductWriter, RepositoryError, RepositoryResult,
};

/// Load the categories of every row in one query and build domain products.
fn attach_categories(
    conn: &mut SqliteConnection,
    rows: Vec<DbProduct>,
) -> RepositoryResult<Vec<Product>> {
    use crate::schema::categories;

    let links = ProductCategory::belonging_to(&rows)
        .inner_join(categories::table)
        .select((ProductCategory::as_select(), DbCategory::as_select()))
        .order((categories::name.asc(), categories::id.asc()))
        .load::<(ProductCategory, DbCategory)>(conn)?;

    let grouped = links.grouped_by(&rows);

    rows.into_iter()
        .zip(grouped)
        .map(|(row, links)| {
            let categories = links.into_iter().map(|(_, category)| category).collect();
            row.into_domain(categories).map_err(RepositoryError::from)
        })
        .collect()
}

fn link_categories(
    conn: &mut SqliteConnection,
    product_id: i32,
    category_ids: &[CategoryId],
) -> RepositoryResult<()> {
    use crate::schema::product_categories;

    if category_ids.is_empty() {
        return Ok(());
    }

    let links = category_ids
        .iter()
        .map(|category_id| ProductCategory {
            product_id,
            category_id: category_id.get(),
        })
        .collect::<Vec<_>>();

    diesel::insert_into(product_categories::table)
        .values(&links)
        .execute(conn)?;

    Ok(())
}

fn load_one(conn: &mut SqliteConnection, row: DbProduct) -> RepositoryResult<Product> {
    attach_categories(conn, vec![row])?
        .pop()
        .ok_or(RepositoryError::NotFound)
}

impl ProductReader for DieselRepository {
    fn list_products(&self, request: &PageRequest) -> RepositoryResult<(usize, Vec<Product>)> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let total = products::table.count().get_result::<i64>(&mut conn)? as usize;
        let Some(offset) = request.offset() else {
            return Ok((total, Vec::new()));
        };

        let items = products::table
            .select(DbProduct::as_select())
            .into_boxed::<diesel::sqlite::Sqlite>();
        let items = match (request.sort().field, request.sort().direction) {
            (SortField::Id, Direction::Asc) => items.order(products::id.asc()),
            (SortField::Id, Direction::Desc) => items.order(products::id.desc()),
            (SortField::Name, Direction::Asc) => {
                items.order((products::name.asc(), products::id.asc()))
            }
            (SortField::Name, Direction::Desc) => {
                items.order((products::name.desc(), products::id.asc()))
            }
        };

        let rows = items
            .offset(offset)
            .limit(request.limit())
            .load::<DbProduct>(&mut conn)?;

        let items = attach_categories(&mut conn, rows)?;
        Ok((total, items))
    }

    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let row = products::table
            .find(id.get())
            .select(DbProduct::as_select())
            .first::<DbProduct>(&mut conn)
            .optional()?;

        row.map(|row| load_one(&mut conn, row)).transpose()
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let row = diesel::insert_into(products::table)
                .values(DbNewProduct::from(product))
                .returning(DbProduct::as_returning())
                .get_result::<DbProduct>(conn)?;

            link_categories(conn, row.id, &product.category_ids)?;
            load_one(conn, row)
        })
    }

    fn update_product(&self, id: ProductId, product: &NewProduct) -> RepositoryResult<Product> {
        use crate::schema::{product_categories, products};

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let row = diesel::update(products::table.find(id.get()))
                .set((
                    products::name.eq(product.name.as_str()),
                    products::updated_at.eq(Some(Utc::now().naive_utc())),
                ))
                .returning(DbProduct::as_returning())
                .get_result::<DbProduct>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;

            diesel::delete(
                product_categories::table.filter(product_categories::product_id.eq(row.id)),
            )
            .execute(conn)?;

            link_categories(conn, row.id, &product.category_ids)?;
            load_one(conn, row)
        })
    }

    fn delete_product(&self, id: ProductId) -> RepositoryResult<()> {
        use crate::schema::{product_categories, products};

        let mut conn = self.conn()?;

        let affected = conn.transaction::<_, RepositoryError, _>(|conn| {
            diesel::delete(
                product_categories::table.filter(product_categories::product_id.eq(id.get())),
            )
            .execute(conn)?;

            Ok(diesel::delete(products::table.find(id.get())).execute(conn)?)
        })?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
