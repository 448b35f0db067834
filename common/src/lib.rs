//! # Menagerie Common
//!
//! Shared building blocks for the zoo inventory tool.
//!
//! * **[`inventory`]**: Animals, things and the [`inventory::Inventoried`] capability.
//! * **[`clinic`]**: The [`clinic::HealthCheck`] port consulted before an animal is admitted.
//! * **[`config`]**: Runtime options collected from the command line.
//!
//! Nothing in this crate performs I/O.

pub mod clinic;
pub mod config;
pub mod error;
pub mod inventory;
