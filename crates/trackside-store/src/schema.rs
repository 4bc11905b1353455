//! Schema provisioning and seed data.
//!
//! Used by the binary at startup and by tests. The read path never calls
//! into this module. Seeding mirrors the external lifecycle contract: rows
//! appear only through `seed_*` or disappear through `truncate`, and a
//! reader racing either may observe a partial dataset.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use rand::Rng;
use rusqlite::{Connection, named_params};
use tracing::debug;

use crate::errors::Result;

/// Sport category labels used by the seeder.
pub const SPORTS: [&str; 7] = [
    "Cricket",
    "Netball",
    "Football",
    "Basketball",
    "Tennis",
    "Golf",
    "Rugby",
];

const RACE_NAMES: [&str; 8] = [
    "North Run", "Coastal Dash", "Twilight Stakes", "Harbour Mile",
    "Spring Plate", "Valley Sprint", "Midland Cup", "River Handicap",
];

const EVENT_NAMES: [&str; 8] = [
    "City Derby", "State Final", "Charity Shield", "Night Series",
    "Regional Open", "Championship Round", "Qualifier", "Invitational",
];

/// Create the `races` and `events` tables if missing.
pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS races (
             id INTEGER PRIMARY KEY,
             meeting_id INTEGER,
             name TEXT,
             number INTEGER,
             visible INTEGER,
             advertised_start_time DATETIME
         );
         CREATE TABLE IF NOT EXISTS events (
             id INTEGER PRIMARY KEY,
             name TEXT,
             sport TEXT,
             visible INTEGER,
             advertised_start_time DATETIME
         );",
    )?;
    Ok(())
}

/// Seed `count` race rows with ids `1..=count`.
///
/// Existing ids are left untouched (`INSERT OR IGNORE`). Start times fan out
/// around `now` so both open and closed races exist.
pub fn seed_races(conn: &Connection, count: i64, now: DateTime<Utc>) -> Result<()> {
    let mut rng = rand::rng();
    for id in 1..=count {
        let start = now + Duration::minutes((id - count / 2) * 30);
        let _ = conn.execute(
            "INSERT OR IGNORE INTO races (id, meeting_id, name, number, visible, advertised_start_time)
             VALUES (:id, :meeting_id, :name, :number, :visible, :time)",
            named_params! {
                ":id": id,
                ":meeting_id": rng.random_range(1..=10_i64),
                ":name": RACE_NAMES[rng.random_range(0..RACE_NAMES.len())],
                ":number": rng.random_range(1..=12_i64),
                ":visible": rng.random::<bool>(),
                ":time": format_utc(start),
            },
        )?;
    }
    debug!(count, table = "races", "seeded");
    Ok(())
}

/// Seed `count` event rows with ids `1..=count`.
pub fn seed_events(conn: &Connection, count: i64, now: DateTime<Utc>) -> Result<()> {
    let mut rng = rand::rng();
    for id in 1..=count {
        let start = now + Duration::minutes((id - count / 2) * 30);
        let _ = conn.execute(
            "INSERT OR IGNORE INTO events (id, name, sport, visible, advertised_start_time)
             VALUES (:id, :name, :sport, :visible, :time)",
            named_params! {
                ":id": id,
                ":name": EVENT_NAMES[rng.random_range(0..EVENT_NAMES.len())],
                ":sport": SPORTS[rng.random_range(0..SPORTS.len())],
                ":visible": rng.random::<bool>(),
                ":time": format_utc(start),
            },
        )?;
    }
    debug!(count, table = "events", "seeded");
    Ok(())
}

/// Delete every row from `races`.
pub fn truncate_races(conn: &Connection) -> Result<()> {
    let _ = conn.execute("DELETE FROM races", [])?;
    Ok(())
}

/// Delete every row from `events`.
pub fn truncate_events(conn: &Connection) -> Result<()> {
    let _ = conn.execute("DELETE FROM events", [])?;
    Ok(())
}

/// Fixed-precision RFC 3339 UTC text, the canonical stored form.
///
/// Fixed precision keeps lexicographic and chronological order aligned for
/// `ORDER BY advertised_start_time`.
pub fn format_utc(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}
