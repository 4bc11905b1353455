//! Storage gateway — produces fresh `SQLite` connections.
//!
//! Connections are not pooled: every repository call borrows its own handle
//! for the duration of one operation and drops it on exit. The gateway only
//! remembers where the database lives.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{Connection, OpenFlags};

use crate::errors::Result;

/// Handle to a `SQLite` database location.
///
/// For a shared in-memory database the gateway keeps one anchor connection
/// open for its own lifetime; `SQLite` drops a `cache=shared` memory
/// database once its last connection closes.
pub struct Db {
    conn_str: String,
    _anchor: Option<Mutex<Connection>>,
}

impl Db {
    /// Gateway for a file-backed database.
    pub fn open_file(path: &Path) -> Result<Self> {
        let conn_str = format!("file:{}", path.display());
        // Probe once so a bad path fails at startup, not on first request.
        let probe = Connection::open_with_flags(&conn_str, Self::flags())?;
        drop(probe);
        Ok(Self { conn_str, _anchor: None })
    }

    /// Gateway for a named shared in-memory database.
    pub fn open_memory(name: &str) -> Result<Self> {
        let conn_str = format!("file:{name}?mode=memory&cache=shared");
        let anchor = Connection::open_with_flags(&conn_str, Self::flags())?;
        Ok(Self {
            conn_str,
            _anchor: Some(Mutex::new(anchor)),
        })
    }

    /// Open a fresh connection. One per call; the caller drops it.
    pub fn connect(&self) -> Result<Connection> {
        Ok(Connection::open_with_flags(&self.conn_str, Self::flags())?)
    }

    fn flags() -> OpenFlags {
        OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX
    }
}
