use crate::entities::{actor, prelude::*};
use crate::models::Actor as ActorRow;
use anyhow::Result;
use sea_orm::{ConnectionTrait, EntityTrait, ModelTrait, QueryOrder, Set};

pub struct ActorRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ActorRepository<'a, C> {
    #[must_use]
    pub const fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    fn map_model(model: actor::Model) -> ActorRow {
        ActorRow {
            id: model.id,
            name: model.name,
        }
    }

    pub async fn add(&self, name: &str) -> Result<ActorRow> {
        let active_model = actor::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };

        let res = Actor::insert(active_model).exec(self.conn).await?;

        Ok(ActorRow {
            id: res.last_insert_id,
            name: name.to_string(),
        })
    }

    pub async fn find_by_program(&self, program_id: i32) -> Result<Vec<ActorRow>> {
        let Some(program) = Program::find_by_id(program_id).one(self.conn).await? else {
            return Ok(Vec::new());
        };

        let rows = program
            .find_related(Actor)
            .order_by_asc(actor::Column::Name)
            .all(self.conn)
            .await?;
        Ok(rows.into_iter().map(Self::map_model).collect())
    }
}
