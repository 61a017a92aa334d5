//! Core data models for the staff roster.
//!
//! This module contains the employee record variants and their kind tag.

mod employee;
mod kind;

pub use employee::{Administrator, Employee, Logistics, Teacher};
pub use kind::Kind;
