//! One-shot batch reporting for state-level sales exports.
//!
//! The crate ingests a comma-delimited sales export, validates and cleans it,
//! aggregates it by state along two dimensions (products sold, sales
//! earnings), and renders the results as styled horizontal bar charts, one
//! chart per page of a single PDF document.  A best-effort desktop
//! notification is raised once the document is written (or when loading the
//! input fails).
//!
//! The pipeline is wired together in [`pipeline::run`]; the binary in
//! `src/main.rs` is a thin wrapper that installs the file logger and maps the
//! result to a process exit code.

pub mod aggregate;
pub mod chart;
pub mod config;
pub mod dataset;
pub mod error;
pub mod loader;
pub mod logging;
pub mod notify;
pub mod pipeline;
pub mod report;
