//! Fixtures command handler

use crate::config::Config;
use crate::db::Store;
use crate::fixtures::{FixtureLoader, LoadOptions};

pub async fn cmd_fixtures(config: &Config, seed: Option<u64>, append: bool) -> anyhow::Result<()> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    let loader = FixtureLoader::with_defaults(&config.fixtures);
    let options = LoadOptions {
        seed: seed.or(config.fixtures.seed),
        append,
    };

    let report = loader.load(&store, options).await?;

    println!("Fixtures loaded (seed {})", report.seed);
    println!("{:-<40}", "");
    for name in &report.order {
        let rows = report.rows.get(name).copied().unwrap_or(0);
        println!("  {name:<20} {rows:>6} rows");
    }
    println!();
    println!(
        "Run again with '--seed {}' to reproduce this data set",
        report.seed
    );

    Ok(())
}
