//! Core modules: configuration, signal collection, scoring, and the
//! snapshot model.

pub mod checklist;
pub mod config;
pub mod error;
pub mod scan;
pub mod score;
pub mod snapshot;
pub mod time;
