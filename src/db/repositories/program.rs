use crate::entities::{prelude::*, program, program_actor};
use crate::models::{NewProgram, Program as ProgramRow};
use anyhow::Result;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set};
use tracing::{debug, info};

pub struct ProgramRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ProgramRepository<'a, C> {
    #[must_use]
    pub const fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    fn map_model(model: program::Model) -> ProgramRow {
        ProgramRow::new(
            model.id,
            model.title,
            model.synopsis,
            model.poster,
            model.category_id,
        )
    }

    pub async fn add(&self, program: &NewProgram) -> Result<ProgramRow> {
        let active_model = program::ActiveModel {
            title: Set(program.title.clone()),
            synopsis: Set(program.synopsis.clone()),
            poster: Set(program.poster.clone()),
            category_id: Set(program.category_id),
            ..Default::default()
        };

        let res = Program::insert(active_model).exec(self.conn).await?;
        info!("Added program {}: {}", res.last_insert_id, program.title);

        Ok(ProgramRow::new(
            res.last_insert_id,
            program.title.clone(),
            program.synopsis.clone(),
            program.poster.clone(),
            program.category_id,
        ))
    }

    pub async fn get(&self, id: i32) -> Result<Option<ProgramRow>> {
        let row = Program::find_by_id(id).one(self.conn).await?;
        Ok(row.map(Self::map_model))
    }

    pub async fn list_all(&self) -> Result<Vec<ProgramRow>> {
        let rows = Program::find()
            .order_by_asc(program::Column::Id)
            .all(self.conn)
            .await?;
        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    /// Looks a program up by its title, ignoring case.
    ///
    /// `lookup_key` must already be lower-cased.
    pub async fn find_by_title_key(&self, lookup_key: &str) -> Result<Option<ProgramRow>> {
        debug!(lookup_key, "Looking up program by title");

        let row = Program::find()
            .filter(Expr::expr(Func::lower(Expr::col(program::Column::Title))).eq(lookup_key))
            .order_by_asc(program::Column::Id)
            .one(self.conn)
            .await?;
        Ok(row.map(Self::map_model))
    }

    /// Most recent programs of a category, newest id first.
    pub async fn find_by_category(&self, category_id: i32, limit: u64) -> Result<Vec<ProgramRow>> {
        let rows = Program::find()
            .filter(program::Column::CategoryId.eq(category_id))
            .order_by_desc(program::Column::Id)
            .limit(limit)
            .all(self.conn)
            .await?;
        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn add_actor(&self, program_id: i32, actor_id: i32) -> Result<()> {
        let link = program_actor::ActiveModel {
            program_id: Set(program_id),
            actor_id: Set(actor_id),
        };

        ProgramActor::insert(link)
            .exec_without_returning(self.conn)
            .await?;
        Ok(())
    }
}
