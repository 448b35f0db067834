//! # Automatic Health Checks
//!
//! Non-interactive [`HealthCheck`] implementations. `ApproveAll` and
//! `RejectAll` back the `--clinic approve|reject` options of the CLI;
//! `ScriptedClinic` replays a fixed list of verdicts.

use std::collections::VecDeque;

use menagerie_common::clinic::HealthCheck;
use menagerie_common::inventory::animal::Animal;

/// Passes every animal.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApproveAll;

impl HealthCheck for ApproveAll {
    fn check_animal(&mut self, _animal: &Animal) -> bool {
        true
    }
}

/// Fails every animal.
#[derive(Clone, Copy, Debug, Default)]
pub struct RejectAll;

impl HealthCheck for RejectAll {
    fn check_animal(&mut self, _animal: &Animal) -> bool {
        false
    }
}

/// Hands out pre-recorded verdicts in order.
///
/// Once the verdicts run out every further animal is rejected.
#[derive(Clone, Debug, Default)]
pub struct ScriptedClinic {
    verdicts: VecDeque<bool>,
    examined: Vec<String>,
}

impl ScriptedClinic {
    pub fn new<I>(verdicts: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        Self {
            verdicts: verdicts.into_iter().collect(),
            examined: Vec::new(),
        }
    }

    /// Names of the animals examined so far, in order.
    pub fn examined(&self) -> &[String] {
        &self.examined
    }

    pub fn remaining(&self) -> usize {
        self.verdicts.len()
    }
}

impl HealthCheck for ScriptedClinic {
    fn check_animal(&mut self, animal: &Animal) -> bool {
        self.examined.push(animal.name.clone());
        self.verdicts.pop_front().unwrap_or(false)
    }
}
