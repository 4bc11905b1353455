//! High-level `Store` facade.
//!
//! Composes the storage gateway, clock, and repositories behind the
//! `list`/`get` contract the RPC layer consumes. Each call acquires a fresh
//! connection, evaluates the clock once, and releases the connection on
//! every exit path — there is no pooling, no retry, and no cross-call state,
//! so concurrent calls never contend inside the store.

use std::sync::Arc;

use tracing::instrument;
use trackside_core::{Clock, EventFilter, OrderSpec, Race, RaceFilter, SportEvent};

use crate::db::Db;
use crate::errors::Result;
use crate::repositories::{EventRepo, RaceRepo};

/// Store facade over the races and events repositories.
pub struct Store {
    db: Db,
    clock: Arc<dyn Clock>,
}

impl Store {
    /// Create a store over the given gateway and clock.
    pub fn new(db: Db, clock: Arc<dyn Clock>) -> Self {
        Self { db, clock }
    }

    /// List races. Record order is exactly the database's row order.
    #[instrument(skip(self, filter, order))]
    pub fn list_races(&self, filter: &RaceFilter, order: &OrderSpec) -> Result<Vec<Race>> {
        let conn = self.db.connect()?;
        RaceRepo::list(&conn, filter, order, self.clock.now())
    }

    /// Fetch a race by id; `None` for legitimate absence.
    #[instrument(skip(self))]
    pub fn get_race(&self, id: i64) -> Result<Option<Race>> {
        let conn = self.db.connect()?;
        RaceRepo::get(&conn, id, self.clock.now())
    }

    /// List sporting events. Record order is exactly the database's row order.
    #[instrument(skip(self, filter, order))]
    pub fn list_events(&self, filter: &EventFilter, order: &OrderSpec) -> Result<Vec<SportEvent>> {
        let conn = self.db.connect()?;
        EventRepo::list(&conn, filter, order, self.clock.now())
    }

    /// Fetch an event by id; `None` for legitimate absence.
    #[instrument(skip(self))]
    pub fn get_event(&self, id: i64) -> Result<Option<SportEvent>> {
        let conn = self.db.connect()?;
        EventRepo::get(&conn, id, self.clock.now())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
