//! Event repository — reads over the `events` table.
//!
//! Structurally parallel to the race repository on purpose: the two filter
//! shapes evolve independently, only the descriptor-driven builder and
//! mapper are shared.

use chrono::{DateTime, Utc};
use rusqlite::Connection;
use trackside_core::{EventFilter, OrderSpec, SportEvent, Status};

use crate::errors::Result;
use crate::query::{self, EVENTS, Predicate};
use crate::scan::{self, FromRow};

/// Event repository — stateless, every method takes `&Connection`.
pub struct EventRepo;

impl EventRepo {
    /// List events matching `filter`, in the database's row order for the
    /// built query. The inputs are never mutated.
    pub fn list(
        conn: &Connection,
        filter: &EventFilter,
        order: &OrderSpec,
        now: DateTime<Utc>,
    ) -> Result<Vec<SportEvent>> {
        let query = query::build_list(&EVENTS, predicates(filter), order);
        scan::scan_rows(conn, &query, now)
    }

    /// Fetch a single event by id. Absence is `None`, not an error.
    pub fn get(conn: &Connection, id: i64, now: DateTime<Utc>) -> Result<Option<SportEvent>> {
        let query = query::build_get(&EVENTS, id);
        let mut events: Vec<SportEvent> = scan::scan_rows(conn, &query, now)?;
        Ok(if events.is_empty() {
            None
        } else {
            Some(events.swap_remove(0))
        })
    }
}

/// Filter-clause generators for the event filter shape.
fn predicates(filter: &EventFilter) -> Vec<Predicate> {
    let mut predicates = vec![Predicate::InText {
        column: "sport",
        prefix: "sport",
        values: filter.sports.clone(),
    }];
    if filter.only_visible {
        predicates.push(Predicate::Literal("visible = 1"));
    }
    predicates
}

impl FromRow for SportEvent {
    fn from_row(row: &rusqlite::Row<'_>, now: DateTime<Utc>) -> rusqlite::Result<Self> {
        let advertised_start_time = scan::read_utc(row, 4)?;
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            sport: row.get(2)?,
            visible: row.get(3)?,
            advertised_start_time,
            status: Status::derive(advertised_start_time, now),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
