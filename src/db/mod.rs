use crate::entities::{actor, category, episode, program, program_actor, season};
use crate::models::{Actor, Category, Episode, NewEpisode, NewProgram, NewSeason, Program, Season};
use anyhow::Result;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DatabaseTransaction,
    EntityTrait, Statement, TransactionTrait,
};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

use repositories::actor::ActorRepository;
use repositories::category::CategoryRepository;
use repositories::episode::EpisodeRepository;
use repositories::program::ProgramRepository;
use repositories::season::SeasonRepository;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        // Every pooled connection to an in-memory database sees its own empty
        // database, so the pool is pinned to a single connection.
        let (max_connections, min_connections) = if db_url.contains(":memory:") {
            (1, 1)
        } else {
            let path_str = db_url.trim_start_matches("sqlite:").trim_start_matches("//");
            let path_str = path_str.split('?').next().unwrap_or(path_str);
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
            (max_connections, min_connections)
        };

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    pub async fn begin(&self) -> Result<DatabaseTransaction> {
        Ok(self.conn.begin().await?)
    }

    const fn program_repo(&self) -> ProgramRepository<'_, DatabaseConnection> {
        ProgramRepository::new(&self.conn)
    }

    const fn category_repo(&self) -> CategoryRepository<'_, DatabaseConnection> {
        CategoryRepository::new(&self.conn)
    }

    const fn season_repo(&self) -> SeasonRepository<'_, DatabaseConnection> {
        SeasonRepository::new(&self.conn)
    }

    const fn episode_repo(&self) -> EpisodeRepository<'_, DatabaseConnection> {
        EpisodeRepository::new(&self.conn)
    }

    const fn actor_repo(&self) -> ActorRepository<'_, DatabaseConnection> {
        ActorRepository::new(&self.conn)
    }

    // ========================================================================
    // Programs
    // ========================================================================

    pub async fn list_programs(&self) -> Result<Vec<Program>> {
        self.program_repo().list_all().await
    }

    pub async fn get_program(&self, id: i32) -> Result<Option<Program>> {
        self.program_repo().get(id).await
    }

    pub async fn find_program_by_title(&self, lookup_key: &str) -> Result<Option<Program>> {
        self.program_repo().find_by_title_key(lookup_key).await
    }

    pub async fn find_programs_by_category(
        &self,
        category_id: i32,
        limit: u64,
    ) -> Result<Vec<Program>> {
        self.program_repo()
            .find_by_category(category_id, limit)
            .await
    }

    pub async fn add_program(&self, program: &NewProgram) -> Result<Program> {
        self.program_repo().add(program).await
    }

    // ========================================================================
    // Categories
    // ========================================================================

    pub async fn add_category(&self, name: &str) -> Result<Category> {
        self.category_repo().add(name).await
    }

    pub async fn get_category(&self, id: i32) -> Result<Option<Category>> {
        self.category_repo().get(id).await
    }

    pub async fn find_category_by_name(&self, name: &str) -> Result<Option<Category>> {
        self.category_repo().find_by_name(name).await
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        self.category_repo().list_all().await
    }

    pub async fn count_categories_named(&self, name: &str) -> Result<u64> {
        self.category_repo().count_by_name(name).await
    }

    // ========================================================================
    // Seasons & episodes
    // ========================================================================

    pub async fn add_season(&self, season: &NewSeason) -> Result<Season> {
        self.season_repo().add(season).await
    }

    pub async fn add_episode(&self, episode: &NewEpisode) -> Result<Episode> {
        self.episode_repo().add(episode).await
    }

    pub async fn get_season(&self, id: i32) -> Result<Option<Season>> {
        self.season_repo().get(id).await
    }

    pub async fn find_seasons_by_program(&self, program_id: i32) -> Result<Vec<Season>> {
        self.season_repo().find_by_program(program_id).await
    }

    pub async fn find_seasons_by_number(&self, number: i32) -> Result<Vec<Season>> {
        self.season_repo().find_by_number(number).await
    }

    pub async fn get_episode(&self, id: i32) -> Result<Option<Episode>> {
        self.episode_repo().get(id).await
    }

    pub async fn find_first_episode_by_season(&self, season_id: i32) -> Result<Option<Episode>> {
        self.episode_repo().find_first_by_season(season_id).await
    }

    pub async fn list_episodes(&self) -> Result<Vec<Episode>> {
        self.episode_repo().list_all().await
    }

    pub async fn list_season_ids(&self) -> Result<Vec<i32>> {
        self.season_repo().list_ids().await
    }

    // ========================================================================
    // Actors
    // ========================================================================

    pub async fn find_actors_by_program(&self, program_id: i32) -> Result<Vec<Actor>> {
        self.actor_repo().find_by_program(program_id).await
    }
}

/// Deletes every catalogue row, children before parents.
pub async fn purge<C: ConnectionTrait>(conn: &C) -> Result<()> {
    program_actor::Entity::delete_many().exec(conn).await?;
    actor::Entity::delete_many().exec(conn).await?;
    episode::Entity::delete_many().exec(conn).await?;
    season::Entity::delete_many().exec(conn).await?;
    program::Entity::delete_many().exec(conn).await?;
    category::Entity::delete_many().exec(conn).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_store() -> Store {
        Store::new("sqlite::memory:").await.unwrap()
    }

    async fn add_program(store: &Store, title: &str, category_id: i32) -> Program {
        store
            .add_program(&NewProgram {
                title: title.to_string(),
                synopsis: format!("Synopsis of {title}"),
                poster: None,
                category_id,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_find_program_by_title_ignores_case() {
        let store = memory_store().await;
        let drama = store.add_category("Drama").await.unwrap();
        let program = add_program(&store, "The Walking Dead", drama.id).await;
        add_program(&store, "Fear The Walking Dead", drama.id).await;

        let found = store
            .find_program_by_title("the walking dead")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found, program);

        assert!(
            store
                .find_program_by_title("walking dead")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_find_programs_by_category_limits_and_orders() {
        let store = memory_store().await;
        let horror = store.add_category("Horreur").await.unwrap();
        let comedy = store.add_category("Comedie").await.unwrap();

        let mut horror_ids = Vec::new();
        for i in 0..5 {
            horror_ids.push(add_program(&store, &format!("Horror {i}"), horror.id).await.id);
            add_program(&store, &format!("Comedy {i}"), comedy.id).await;
        }

        let programs = store.find_programs_by_category(horror.id, 3).await.unwrap();
        let ids: Vec<i32> = programs.iter().map(|p| p.id).collect();

        horror_ids.reverse();
        assert_eq!(ids, horror_ids[..3].to_vec());
        assert!(programs.iter().all(|p| p.category_id == horror.id));
    }

    #[tokio::test]
    async fn test_purge_empties_catalogue() {
        let store = memory_store().await;
        let drama = store.add_category("Drama").await.unwrap();
        add_program(&store, "Lost", drama.id).await;

        purge(&store.conn).await.unwrap();

        assert!(store.list_programs().await.unwrap().is_empty());
        assert!(store.list_categories().await.unwrap().is_empty());
    }
}
