//! Race repository — reads over the `races` table.

use chrono::{DateTime, Utc};
use rusqlite::Connection;
use trackside_core::{OrderSpec, Race, RaceFilter, Status};

use crate::errors::Result;
use crate::query::{self, Predicate, RACES};
use crate::scan::{self, FromRow};

/// Race repository — stateless, every method takes `&Connection`.
pub struct RaceRepo;

impl RaceRepo {
    /// List races matching `filter`, in the database's row order for the
    /// built query. The inputs are never mutated.
    pub fn list(
        conn: &Connection,
        filter: &RaceFilter,
        order: &OrderSpec,
        now: DateTime<Utc>,
    ) -> Result<Vec<Race>> {
        let query = query::build_list(&RACES, predicates(filter), order);
        scan::scan_rows(conn, &query, now)
    }

    /// Fetch a single race by id. Absence is `None`, not an error.
    pub fn get(conn: &Connection, id: i64, now: DateTime<Utc>) -> Result<Option<Race>> {
        let query = query::build_get(&RACES, id);
        let mut races: Vec<Race> = scan::scan_rows(conn, &query, now)?;
        Ok(if races.is_empty() {
            None
        } else {
            Some(races.swap_remove(0))
        })
    }
}

/// Filter-clause generators for the race filter shape.
fn predicates(filter: &RaceFilter) -> Vec<Predicate> {
    let mut predicates = vec![Predicate::InInt64 {
        column: "meeting_id",
        prefix: "meeting_id",
        values: filter.meeting_ids.clone(),
    }];
    // only_visible = false means no restriction, never "non-visible only".
    if filter.only_visible {
        predicates.push(Predicate::Literal("visible = 1"));
    }
    predicates
}

impl FromRow for Race {
    fn from_row(row: &rusqlite::Row<'_>, now: DateTime<Utc>) -> rusqlite::Result<Self> {
        let advertised_start_time = scan::read_utc(row, 5)?;
        Ok(Self {
            id: row.get(0)?,
            meeting_id: row.get(1)?,
            name: row.get(2)?,
            number: row.get(3)?,
            visible: row.get(4)?,
            advertised_start_time,
            status: Status::derive(advertised_start_time, now),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
