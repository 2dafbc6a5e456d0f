//! Sample data loader.
//!
//! Each fixture inserts one kind of row and may depend on other fixtures. The
//! loader runs them in dependency order inside a single transaction, and
//! fixtures hand rows to each other through named references
//! (`program_0`, `season_12`, ...).

mod actor;
mod category;
mod episode;
pub mod faker;
mod program;
mod season;

use async_trait::async_trait;
use rand::Rng;
use sea_orm::DatabaseTransaction;
use std::collections::{BTreeMap, HashMap, HashSet};
use thiserror::Error;
use tracing::{debug, info};

pub use actor::ActorFixtures;
pub use category::CategoryFixtures;
pub use episode::EpisodeFixtures;
pub use faker::Faker;
pub use program::ProgramFixtures;
pub use season::SeasonFixtures;

use crate::config::FixturesConfig;
use crate::db::Store;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Fixture '{fixture}' depends on unknown fixture '{dependency}'")]
    UnknownDependency {
        fixture: &'static str,
        dependency: &'static str,
    },

    #[error("Circular fixture dependency between: {}", .0.join(", "))]
    Cycle(Vec<&'static str>),

    #[error("Duplicate fixture name: {0}")]
    DuplicateFixture(&'static str),

    #[error("Reference '{0}' does not exist")]
    UnknownReference(String),

    #[error("Reference '{0}' already exists")]
    DuplicateReference(String),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

#[async_trait]
pub trait Fixture: Send + Sync {
    fn name(&self) -> &'static str;

    /// Fixtures that must have run before this one.
    fn dependencies(&self) -> Vec<&'static str> {
        Vec::new()
    }

    /// Inserts the rows and returns how many were written.
    async fn load(&self, ctx: &mut FixtureContext<'_>) -> Result<usize, FixtureError>;
}

/// State shared by the fixtures of one run.
pub struct FixtureContext<'a> {
    pub conn: &'a DatabaseTransaction,
    pub faker: Faker,
    references: HashMap<String, i32>,
}

impl<'a> FixtureContext<'a> {
    #[must_use]
    pub fn new(conn: &'a DatabaseTransaction, faker: Faker) -> Self {
        Self {
            conn,
            faker,
            references: HashMap::new(),
        }
    }

    pub fn add_reference(&mut self, name: impl Into<String>, id: i32) -> Result<(), FixtureError> {
        let name = name.into();
        if self.references.contains_key(&name) {
            return Err(FixtureError::DuplicateReference(name));
        }
        self.references.insert(name, id);
        Ok(())
    }

    pub fn get_reference(&self, name: &str) -> Result<i32, FixtureError> {
        self.references
            .get(name)
            .copied()
            .ok_or_else(|| FixtureError::UnknownReference(name.to_string()))
    }
}

#[must_use]
pub fn reference(prefix: &str, index: usize) -> String {
    format!("{prefix}_{index}")
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    pub seed: Option<u64>,
    /// Keep existing rows instead of purging the catalogue first.
    pub append: bool,
}

#[derive(Debug, Clone)]
pub struct LoadReport {
    pub seed: u64,
    pub order: Vec<&'static str>,
    pub rows: BTreeMap<&'static str, usize>,
}

#[derive(Default)]
pub struct FixtureLoader {
    fixtures: Vec<Box<dyn Fixture>>,
}

impl FixtureLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader with every catalogue fixture registered.
    #[must_use]
    pub fn with_defaults(config: &FixturesConfig) -> Self {
        let mut loader = Self::new();
        loader.add(CategoryFixtures);
        loader.add(ProgramFixtures);
        loader.add(SeasonFixtures::new(config.seasons));
        loader.add(EpisodeFixtures::new(config.episodes, config.seasons));
        loader.add(ActorFixtures::new(config.actors));
        loader
    }

    pub fn add(&mut self, fixture: impl Fixture + 'static) {
        self.fixtures.push(Box::new(fixture));
    }

    /// Orders fixtures so every fixture comes after its dependencies.
    ///
    /// Ties keep registration order.
    pub fn ordered(&self) -> Result<Vec<&dyn Fixture>, FixtureError> {
        let mut names = HashSet::new();
        for fixture in &self.fixtures {
            if !names.insert(fixture.name()) {
                return Err(FixtureError::DuplicateFixture(fixture.name()));
            }
        }

        for fixture in &self.fixtures {
            if let Some(dependency) = fixture
                .dependencies()
                .into_iter()
                .find(|d| !names.contains(d))
            {
                return Err(FixtureError::UnknownDependency {
                    fixture: fixture.name(),
                    dependency,
                });
            }
        }

        let mut done: HashSet<&'static str> = HashSet::new();
        let mut ordered: Vec<&dyn Fixture> = Vec::with_capacity(self.fixtures.len());

        while ordered.len() < self.fixtures.len() {
            let next = self.fixtures.iter().find(|f| {
                !done.contains(f.name()) && f.dependencies().iter().all(|d| done.contains(d))
            });

            match next {
                Some(fixture) => {
                    done.insert(fixture.name());
                    ordered.push(fixture.as_ref());
                }
                None => {
                    let stuck = self
                        .fixtures
                        .iter()
                        .map(|f| f.name())
                        .filter(|n| !done.contains(n))
                        .collect();
                    return Err(FixtureError::Cycle(stuck));
                }
            }
        }

        Ok(ordered)
    }

    pub async fn load(
        &self,
        store: &Store,
        options: LoadOptions,
    ) -> Result<LoadReport, FixtureError> {
        let ordered = self.ordered()?;
        let seed = options.seed.unwrap_or_else(|| rand::rng().random());

        info!(seed, append = options.append, "Loading fixtures");

        let txn = store.begin().await?;

        if !options.append {
            debug!("Purging catalogue tables");
            crate::db::purge(&txn).await?;
        }

        let mut ctx = FixtureContext::new(&txn, Faker::from_seed(seed));
        let mut report = LoadReport {
            seed,
            order: Vec::with_capacity(ordered.len()),
            rows: BTreeMap::new(),
        };

        for fixture in ordered {
            let rows = fixture.load(&mut ctx).await?;
            info!("Loaded {} rows from {}", rows, fixture.name());
            report.order.push(fixture.name());
            report.rows.insert(fixture.name(), rows);
        }

        txn.commit().await?;

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named {
        name: &'static str,
        deps: Vec<&'static str>,
    }

    #[async_trait]
    impl Fixture for Named {
        fn name(&self) -> &'static str {
            self.name
        }

        fn dependencies(&self) -> Vec<&'static str> {
            self.deps.clone()
        }

        async fn load(&self, _ctx: &mut FixtureContext<'_>) -> Result<usize, FixtureError> {
            Ok(0)
        }
    }

    fn named(name: &'static str, deps: &[&'static str]) -> Named {
        Named {
            name,
            deps: deps.to_vec(),
        }
    }

    fn order_of(loader: &FixtureLoader) -> Vec<&'static str> {
        loader
            .ordered()
            .unwrap()
            .into_iter()
            .map(|f| f.name())
            .collect()
    }

    #[test]
    fn test_dependencies_run_first() {
        let mut loader = FixtureLoader::new();
        loader.add(named("episodes", &["seasons"]));
        loader.add(named("actors", &["programs"]));
        loader.add(named("seasons", &["programs"]));
        loader.add(named("programs", &[]));

        assert_eq!(
            order_of(&loader),
            vec!["programs", "actors", "seasons", "episodes"]
        );
    }

    #[test]
    fn test_default_fixture_order() {
        let loader = FixtureLoader::with_defaults(&FixturesConfig::default());
        let order = order_of(&loader);

        let position = |name: &str| order.iter().position(|n| *n == name).unwrap();
        assert!(position("categories") < position("programs"));
        assert!(position("programs") < position("seasons"));
        assert!(position("seasons") < position("episodes"));
        assert!(position("programs") < position("actors"));
    }

    #[test]
    fn test_cycle_is_rejected() {
        let mut loader = FixtureLoader::new();
        loader.add(named("a", &["b"]));
        loader.add(named("b", &["a"]));
        loader.add(named("c", &[]));

        match loader.ordered() {
            Err(FixtureError::Cycle(names)) => assert_eq!(names, vec!["a", "b"]),
            other => panic!("expected cycle, got {:?}", other.map(|o| o.len())),
        }
    }

    #[test]
    fn test_unknown_dependency_is_rejected() {
        let mut loader = FixtureLoader::new();
        loader.add(named("seasons", &["programs"]));

        assert!(matches!(
            loader.ordered(),
            Err(FixtureError::UnknownDependency {
                fixture: "seasons",
                dependency: "programs"
            })
        ));
    }

    #[test]
    fn test_duplicate_fixture_is_rejected() {
        let mut loader = FixtureLoader::new();
        loader.add(named("programs", &[]));
        loader.add(named("programs", &[]));

        assert!(matches!(
            loader.ordered(),
            Err(FixtureError::DuplicateFixture("programs"))
        ));
    }

    #[test]
    fn test_reference_helper() {
        assert_eq!(reference("season", 12), "season_12");
    }
}
