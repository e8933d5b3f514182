//! Services layer (ports + adapters).
//!
//! - `ports`: collaborator contracts the bridge is written against.
//! - `adapters`: concrete implementations (clocks, config loading, the
//!   in-memory recording widget).

pub mod adapters;
pub mod ports;
