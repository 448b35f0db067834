//! # Health Check Port
//!
//! The zoo never admits an animal on its own authority. Every admission is
//! decided by a [`HealthCheck`] implementation handed to the zoo when it is
//! built. Implementations live outside this crate: automatic ones in
//! `menagerie-core`, the interactive veterinary check in the CLI.

use crate::inventory::animal::Animal;

/// Decides whether an animal is healthy enough to be admitted.
pub trait HealthCheck {
    /// Examines `animal` and returns `true` if it passed.
    ///
    /// Takes `&mut self` so scripted checks can advance through their verdicts.
    fn check_animal(&mut self, animal: &Animal) -> bool;
}
