//! Materialized domain records.
//!
//! Records are constructed fresh on every read. `status` is derived at scan
//! time from the advertised start and the evaluation instant; it is never
//! persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Derived publication state of a race or event.
///
/// `Open` while the advertised start is still in the future, `Closed` once
/// it has been reached. Serialized as `"OPEN"` / `"CLOSED"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Advertised start is strictly in the future.
    #[serde(rename = "OPEN")]
    Open,
    /// Advertised start has been reached or passed.
    #[serde(rename = "CLOSED")]
    Closed,
}

impl Status {
    /// Derive status from an advertised start and an evaluation instant.
    ///
    /// A start exactly equal to `now` counts as closed.
    pub fn derive(advertised_start: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if advertised_start > now {
            Self::Open
        } else {
            Self::Closed
        }
    }

    /// Wire spelling of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
        }
    }
}

/// A race within a meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    /// Unique identifier, never reassigned.
    pub id: i64,
    /// Meeting this race belongs to.
    pub meeting_id: i64,
    /// Display name.
    pub name: String,
    /// Race number within the meeting.
    pub number: i64,
    /// Publication flag.
    pub visible: bool,
    /// Advertised start, UTC.
    pub advertised_start_time: DateTime<Utc>,
    /// Derived open/closed state, recomputed on every read.
    pub status: Status,
}

/// A sporting event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SportEvent {
    /// Unique identifier, never reassigned.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Sport category label.
    pub sport: String,
    /// Publication flag.
    pub visible: bool,
    /// Advertised start, UTC.
    pub advertised_start_time: DateTime<Utc>,
    /// Derived open/closed state, recomputed on every read.
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn future_start_is_open() {
        assert_eq!(Status::derive(now() + Duration::minutes(5), now()), Status::Open);
    }

    #[test]
    fn past_start_is_closed() {
        assert_eq!(Status::derive(now() - Duration::minutes(5), now()), Status::Closed);
    }

    #[test]
    fn start_equal_to_now_is_closed() {
        assert_eq!(Status::derive(now(), now()), Status::Closed);
    }

    #[test]
    fn status_serializes_to_wire_strings() {
        assert_eq!(serde_json::to_value(Status::Open).unwrap(), "OPEN");
        assert_eq!(serde_json::to_value(Status::Closed).unwrap(), "CLOSED");
        assert_eq!(Status::Open.as_str(), "OPEN");
        assert_eq!(Status::Closed.as_str(), "CLOSED");
    }

    #[test]
    fn race_serializes_camel_case() {
        let race = Race {
            id: 7,
            meeting_id: 2,
            name: "North Run".into(),
            number: 3,
            visible: true,
            advertised_start_time: now(),
            status: Status::Closed,
        };
        let value = serde_json::to_value(&race).unwrap();
        assert_eq!(value["meetingId"], 2);
        assert_eq!(value["advertisedStartTime"], "2024-06-01T12:00:00Z");
        assert_eq!(value["status"], "CLOSED");
    }
}
