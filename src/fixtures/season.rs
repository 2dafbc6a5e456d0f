use async_trait::async_trait;

use super::program::PROGRAM_POOL;
use super::{Fixture, FixtureContext, FixtureError, reference};
use crate::constants::fixtures::{PROGRAM_REFERENCE, SEASON_REFERENCE};
use crate::db::repositories::season::SeasonRepository;
use crate::models::NewSeason;

pub struct SeasonFixtures {
    count: usize,
}

impl SeasonFixtures {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self { count }
    }
}

#[async_trait]
impl Fixture for SeasonFixtures {
    fn name(&self) -> &'static str {
        "seasons"
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec!["programs"]
    }

    async fn load(&self, ctx: &mut FixtureContext<'_>) -> Result<usize, FixtureError> {
        let repo = SeasonRepository::new(ctx.conn);

        for i in 0..self.count {
            let program_index = ctx.faker.index(PROGRAM_POOL);
            let program_id = ctx.get_reference(&reference(PROGRAM_REFERENCE, program_index))?;

            let season = NewSeason {
                number: ctx.faker.random_digit(),
                description: ctx.faker.text(200),
                year: ctx.faker.year(),
                program_id,
            };

            let season = repo.add(&season).await?;
            ctx.add_reference(reference(SEASON_REFERENCE, i), season.id)?;
        }

        Ok(self.count)
    }
}
