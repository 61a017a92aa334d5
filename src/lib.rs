//! Staff records manager.
//!
//! This crate models three kinds of employees (teachers, administrators and
//! logistics staff), computes their pay, and persists the roster to a flat
//! text file with one record per line.

#![warn(missing_docs)]

pub mod calculation;
pub mod codec;
pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod roster;
