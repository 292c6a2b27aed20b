//! Applies or rolls back the Provisio schema on `DATABASE_URL`.
use sea_orm::Database;
use sea_orm_migration::prelude::*;

use migration::{DEFAULT_DATABASE_URL, Migrator};

const USAGE: &str = "usage: migration [up|down|fresh|status] (DATABASE_URL overrides the local provisio.db)";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cmd = std::env::args().nth(1).unwrap_or_else(|| "up".to_string());
    let db_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    let db = Database::connect(&db_url).await?;
    match cmd.as_str() {
        "up" => Migrator::up(&db, None).await?,
        "down" => Migrator::down(&db, None).await?,
        "fresh" => Migrator::fresh(&db).await?,
        "status" => Migrator::status(&db).await?,
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    }
    println!("{cmd}: done on {db_url}");

    Ok(())
}
