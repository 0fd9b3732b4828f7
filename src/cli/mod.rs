//! Command-line interface for libmajor.
//!
//! The CLI wraps the library's batch flow: load a word list, build the
//! index, and either search it (`generate`), describe it (`info`,
//! `stats`), or persist it (`export`). With the `fetch` feature a word
//! list can also be downloaded and cached (`fetch`).

pub mod args;
pub mod commands;
