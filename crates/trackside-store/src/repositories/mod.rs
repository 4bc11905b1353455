//! Per-resource repositories.
//!
//! Stateless unit structs: every method borrows a `&Connection` and an
//! evaluation instant. The two repositories share the generic builder and
//! mapper; only their descriptor, filter shape, and record type differ, and
//! those stay independently evolvable.

pub mod events;
pub mod races;

pub use events::EventRepo;
pub use races::RaceRepo;
