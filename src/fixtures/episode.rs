use async_trait::async_trait;

use super::{Fixture, FixtureContext, FixtureError, reference};
use crate::constants::fixtures::SEASON_REFERENCE;
use crate::db::repositories::episode::EpisodeRepository;
use crate::models::NewEpisode;

pub struct EpisodeFixtures {
    count: usize,
    season_pool: usize,
}

impl EpisodeFixtures {
    /// `season_pool` is the number of `season_{n}` references to draw from.
    #[must_use]
    pub const fn new(count: usize, season_pool: usize) -> Self {
        Self { count, season_pool }
    }
}

#[async_trait]
impl Fixture for EpisodeFixtures {
    fn name(&self) -> &'static str {
        "episodes"
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec!["seasons"]
    }

    async fn load(&self, ctx: &mut FixtureContext<'_>) -> Result<usize, FixtureError> {
        let repo = EpisodeRepository::new(ctx.conn);

        for _ in 0..self.count {
            let season_index = ctx.faker.index(self.season_pool);
            let season_id = ctx.get_reference(&reference(SEASON_REFERENCE, season_index))?;

            let episode = NewEpisode {
                title: ctx.faker.title(),
                number: ctx.faker.random_digit(),
                synopsis: ctx.faker.text(200),
                season_id,
            };

            repo.add(&episode).await?;
        }

        Ok(self.count)
    }
}
