use crate::entities::{prelude::*, season};
use crate::models::{NewSeason, Season as SeasonRow};
use anyhow::Result;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};

pub struct SeasonRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> SeasonRepository<'a, C> {
    #[must_use]
    pub const fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    fn map_model(model: season::Model) -> SeasonRow {
        SeasonRow {
            id: model.id,
            number: model.number,
            description: model.description,
            year: model.year,
            program_id: model.program_id,
        }
    }

    pub async fn add(&self, season: &NewSeason) -> Result<SeasonRow> {
        let active_model = season::ActiveModel {
            number: Set(season.number),
            description: Set(season.description.clone()),
            year: Set(season.year),
            program_id: Set(season.program_id),
            ..Default::default()
        };

        let res = Season::insert(active_model).exec(self.conn).await?;

        Ok(SeasonRow {
            id: res.last_insert_id,
            number: season.number,
            description: season.description.clone(),
            year: season.year,
            program_id: season.program_id,
        })
    }

    pub async fn get(&self, id: i32) -> Result<Option<SeasonRow>> {
        let row = Season::find_by_id(id).one(self.conn).await?;
        Ok(row.map(Self::map_model))
    }

    pub async fn find_by_program(&self, program_id: i32) -> Result<Vec<SeasonRow>> {
        let rows = Season::find()
            .filter(season::Column::ProgramId.eq(program_id))
            .order_by_asc(season::Column::Number)
            .order_by_asc(season::Column::Id)
            .all(self.conn)
            .await?;
        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    /// Every season carrying `number`, whatever program it belongs to.
    pub async fn find_by_number(&self, number: i32) -> Result<Vec<SeasonRow>> {
        let rows = Season::find()
            .filter(season::Column::Number.eq(number))
            .order_by_asc(season::Column::Id)
            .all(self.conn)
            .await?;
        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn list_ids(&self) -> Result<Vec<i32>> {
        let rows = Season::find()
            .order_by_asc(season::Column::Id)
            .all(self.conn)
            .await?;
        Ok(rows.into_iter().map(|s| s.id).collect())
    }
}
