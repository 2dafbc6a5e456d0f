use async_trait::async_trait;

use super::program::PROGRAM_POOL;
use super::{Fixture, FixtureContext, FixtureError, reference};
use crate::constants::fixtures::PROGRAM_REFERENCE;
use crate::db::repositories::actor::ActorRepository;
use crate::db::repositories::program::ProgramRepository;
use crate::parser::slug;

/// Main cast of `program_0`, written as slugs.
const WALKING_DEAD_CAST: &[&str] = &[
    "andrew-lincoln",
    "norman-reedus",
    "lauren-cohan",
    "danai-gurira",
];

pub struct ActorFixtures {
    count: usize,
}

impl ActorFixtures {
    /// `count` random actors are created on top of the fixed cast.
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self { count }
    }
}

#[async_trait]
impl Fixture for ActorFixtures {
    fn name(&self) -> &'static str {
        "actors"
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec!["programs"]
    }

    async fn load(&self, ctx: &mut FixtureContext<'_>) -> Result<usize, FixtureError> {
        let actors = ActorRepository::new(ctx.conn);
        let programs = ProgramRepository::new(ctx.conn);

        let walking_dead = ctx.get_reference(&reference(PROGRAM_REFERENCE, 0))?;
        for cast_slug in WALKING_DEAD_CAST {
            let actor = actors.add(&slug::to_title(cast_slug)).await?;
            programs.add_actor(walking_dead, actor.id).await?;
        }

        for _ in 0..self.count {
            let program_index = ctx.faker.index(PROGRAM_POOL);
            let program_id = ctx.get_reference(&reference(PROGRAM_REFERENCE, program_index))?;

            let actor = actors.add(&ctx.faker.name()).await?;
            programs.add_actor(program_id, actor.id).await?;
        }

        Ok(WALKING_DEAD_CAST.len() + self.count)
    }
}
