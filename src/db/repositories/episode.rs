use crate::entities::{episode, prelude::*};
use crate::models::{Episode as EpisodeRow, NewEpisode};
use anyhow::Result;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};

pub struct EpisodeRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> EpisodeRepository<'a, C> {
    #[must_use]
    pub const fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    fn map_model(model: episode::Model) -> EpisodeRow {
        EpisodeRow {
            id: model.id,
            title: model.title,
            number: model.number,
            synopsis: model.synopsis,
            season_id: model.season_id,
        }
    }

    pub async fn add(&self, episode: &NewEpisode) -> Result<EpisodeRow> {
        let active_model = episode::ActiveModel {
            title: Set(episode.title.clone()),
            number: Set(episode.number),
            synopsis: Set(episode.synopsis.clone()),
            season_id: Set(episode.season_id),
            ..Default::default()
        };

        let res = Episode::insert(active_model).exec(self.conn).await?;

        Ok(EpisodeRow {
            id: res.last_insert_id,
            title: episode.title.clone(),
            number: episode.number,
            synopsis: episode.synopsis.clone(),
            season_id: episode.season_id,
        })
    }

    pub async fn get(&self, id: i32) -> Result<Option<EpisodeRow>> {
        let row = Episode::find_by_id(id).one(self.conn).await?;
        Ok(row.map(Self::map_model))
    }

    /// First episode (lowest id) referencing `season_id`.
    pub async fn find_first_by_season(&self, season_id: i32) -> Result<Option<EpisodeRow>> {
        let row = Episode::find()
            .filter(episode::Column::SeasonId.eq(season_id))
            .order_by_asc(episode::Column::Id)
            .one(self.conn)
            .await?;
        Ok(row.map(Self::map_model))
    }

    pub async fn list_all(&self) -> Result<Vec<EpisodeRow>> {
        let rows = Episode::find()
            .order_by_asc(episode::Column::Id)
            .all(self.conn)
            .await?;
        Ok(rows.into_iter().map(Self::map_model).collect())
    }
}
