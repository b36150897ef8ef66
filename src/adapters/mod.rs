//! Port implementations.
//!
//! - `live`: real network, disk, terminal, and `log` output.
//! - `recording`: wraps a live source and captures fetches to a cassette.
//! - `replaying`: serves fetches from a cassette.
//! - `memory`: in-process fixtures for tests and embedding.

pub mod live;
pub mod memory;
pub mod recording;
pub mod replaying;
