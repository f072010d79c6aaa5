//! Core worktree operations.
//!
//! Each submodule contains the business logic for one command, separated
//! from argument parsing and output rendering. Functions accept structured
//! params, a `GitPort`, and a `ProgressSink`, and return structured results.

pub mod add;
pub mod copy;
pub mod list;
pub mod new;
pub mod remove;
pub mod setup;
