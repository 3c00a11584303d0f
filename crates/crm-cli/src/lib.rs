//! CRM dashboard CLI library.
//!
//! This crate provides the `crm` command: it loads a dataset file, runs the
//! metrics aggregator and prints the result as a table, JSON or one-liners.

pub mod cli;
pub mod commands;
pub mod config;
pub mod render;
