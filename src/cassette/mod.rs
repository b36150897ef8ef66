//! Cassette format for recording and replaying document fetches.

pub mod format;
pub mod recorder;
pub mod replayer;
