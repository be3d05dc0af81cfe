//! Seed script for development — clears and repopulates the lead collection
//! with generated sample data.
//!
//! Usage: `cargo run --bin seed`
//!
//! Requires `DATABASE_URL` (reads .env). Generation is index-based and
//! deterministic, so repeated runs produce the same distribution.

use chrono::{Duration, Utc};
use sqlx::PgPool;

const NUM_LEADS: usize = 500;

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "Michael", "Linda", "David", "Elena", "Carlos",
    "Sofia", "Wei", "Priya", "Ahmed", "Yuki", "Lucas", "Emma", "Noah", "Olivia", "Liam", "Ava",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Garcia", "Chen", "Patel", "Johnson", "Martinez", "Kim", "Novak", "Okafor",
    "Tanaka", "Brown", "Silva", "Kowalski", "Haddad", "Nguyen", "Fischer",
];

const STATUSES: &[&str] = &["New", "Contacted", "Qualified", "Converted", "Lost"];
const SOURCES: &[&str] = &["Google", "LinkedIn", "Referral", "Organic", "Ads"];
const AGENTS: &[&str] = &[
    "John Doe",
    "Jane Smith",
    "Alice Johnson",
    "Bob Brown",
    "Charlie Davis",
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let db_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    // Run migrations first
    sqlx::migrate!("./migrations").run(&pool).await?;

    println!("=== Leadboard Seed Script ===");

    clear_leads(&pool).await?;
    seed_leads(&pool).await?;

    println!("\n=== Seed complete! ===");

    Ok(())
}

async fn clear_leads(pool: &PgPool) -> anyhow::Result<()> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM leads")
        .fetch_one(pool)
        .await?;

    sqlx::query("DELETE FROM leads").execute(pool).await?;
    println!("[done] Cleared {existing} existing leads");
    Ok(())
}

async fn seed_leads(pool: &PgPool) -> anyhow::Result<()> {
    for i in 0..NUM_LEADS {
        let first = pick(FIRST_NAMES, i, 1);
        let last = pick(LAST_NAMES, i, 2);
        let name = format!("{first} {last}");
        let email = format!(
            "{}.{}.{i}@example.com",
            first.to_lowercase(),
            last.to_lowercase()
        );
        let phone = format!("+1-555-{:04}", (i * 73) % 10_000);
        let status = pick(STATUSES, i, 3);
        let source = pick(SOURCES, i, 4);
        let agent = pick(AGENTS, i, 5);

        // Spread creation dates over the last 60 days
        let created_at =
            Utc::now() - Duration::days(((i * 37) % 60) as i64) - Duration::hours((i % 24) as i64);

        sqlx::query(
            "INSERT INTO leads (name, email, phone, status, source, assigned_to, created_at, updated_at)
             VALUES ($1, $2, $3, $4::lead_status, $5, $6, $7, $7)",
        )
        .bind(&name)
        .bind(&email)
        .bind(&phone)
        .bind(status)
        .bind(source)
        .bind(agent)
        .bind(created_at)
        .execute(pool)
        .await?;
    }

    println!("[done] Created {NUM_LEADS} sample leads");
    Ok(())
}

/// Deterministic pick from a fixed pool, offset per field so the columns
/// don't cycle in lockstep.
fn pick<'a>(pool: &[&'a str], index: usize, salt: usize) -> &'a str {
    pool[index.wrapping_mul(31).wrapping_add(salt.wrapping_mul(7919)) % pool.len()]
}
