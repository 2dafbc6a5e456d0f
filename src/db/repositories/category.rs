use crate::entities::{category, prelude::*};
use crate::models::Category as CategoryRow;
use anyhow::Result;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::info;

pub struct CategoryRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    #[must_use]
    pub const fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    fn map_model(model: category::Model) -> CategoryRow {
        CategoryRow {
            id: model.id,
            name: model.name,
        }
    }

    pub async fn add(&self, name: &str) -> Result<CategoryRow> {
        let active_model = category::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };

        let res = Category::insert(active_model).exec(self.conn).await?;
        info!("Added category {}: {}", res.last_insert_id, name);

        Ok(CategoryRow {
            id: res.last_insert_id,
            name: name.to_string(),
        })
    }

    pub async fn get(&self, id: i32) -> Result<Option<CategoryRow>> {
        let row = Category::find_by_id(id).one(self.conn).await?;
        Ok(row.map(Self::map_model))
    }

    /// Exact match on the category name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<CategoryRow>> {
        let row = Category::find()
            .filter(category::Column::Name.eq(name))
            .order_by_asc(category::Column::Id)
            .one(self.conn)
            .await?;
        Ok(row.map(Self::map_model))
    }

    pub async fn list_all(&self) -> Result<Vec<CategoryRow>> {
        let rows = Category::find()
            .order_by_asc(category::Column::Name)
            .all(self.conn)
            .await?;
        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn count_by_name(&self, name: &str) -> Result<u64> {
        use sea_orm::PaginatorTrait;

        let count = Category::find()
            .filter(category::Column::Name.eq(name))
            .count(self.conn)
            .await?;
        Ok(count)
    }
}
