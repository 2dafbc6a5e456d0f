use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();

        conn.execute_unprepared(
            "CREATE INDEX IF NOT EXISTS idx_program_title_lower ON program(lower(title))",
        )
        .await?;

        conn.execute_unprepared("CREATE INDEX IF NOT EXISTS idx_category_name ON category(name)")
            .await?;

        conn.execute_unprepared(
            "CREATE INDEX IF NOT EXISTS idx_program_category ON program(category_id, id)",
        )
        .await?;

        conn.execute_unprepared("CREATE INDEX IF NOT EXISTS idx_season_program ON season(program_id)")
            .await?;

        conn.execute_unprepared("CREATE INDEX IF NOT EXISTS idx_episode_season ON episode(season_id)")
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();

        for index in [
            "idx_episode_season",
            "idx_season_program",
            "idx_program_category",
            "idx_category_name",
            "idx_program_title_lower",
        ] {
            conn.execute_unprepared(&format!("DROP INDEX IF EXISTS {index}"))
                .await?;
        }

        Ok(())
    }
}
