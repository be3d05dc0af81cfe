//! Quick sanity check for seeded data — prints lead counts.
//!
//! Usage: `cargo run --bin check_seed`

use leadboard::models::lead::LeadStatus;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let db_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(2)
        .connect(&db_url)
        .await?;

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM leads")
        .fetch_one(&pool)
        .await?;
    println!("Leads: {total} documents");

    for status in LeadStatus::ALL {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM leads WHERE status = $1")
                .bind(status)
                .fetch_one(&pool)
                .await?;
        println!("- {status:?}: {count}");
    }

    pool.close().await;
    Ok(())
}
