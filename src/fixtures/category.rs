use async_trait::async_trait;

use super::{Fixture, FixtureContext, FixtureError, reference};
use crate::constants::fixtures::CATEGORY_REFERENCE;
use crate::db::repositories::category::CategoryRepository;

pub const CATEGORIES: &[&str] = &[
    "Action",
    "Aventure",
    "Animation",
    "Fantastique",
    "Horreur",
    "Drame",
];

pub struct CategoryFixtures;

#[async_trait]
impl Fixture for CategoryFixtures {
    fn name(&self) -> &'static str {
        "categories"
    }

    async fn load(&self, ctx: &mut FixtureContext<'_>) -> Result<usize, FixtureError> {
        let repo = CategoryRepository::new(ctx.conn);

        for (i, name) in CATEGORIES.iter().enumerate() {
            let category = repo.add(name).await?;
            ctx.add_reference(reference(CATEGORY_REFERENCE, i), category.id)?;
        }

        Ok(CATEGORIES.len())
    }
}
