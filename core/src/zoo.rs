//! # Zoo
//!
//! The aggregate that owns every admitted animal and every inventory item.
//!
//! Animals only get in through [`Zoo::add_animal`], which asks the injected
//! [`HealthCheck`] first. Things are appended unconditionally. Both
//! collections keep insertion order and nothing is ever removed.

use menagerie_common::clinic::HealthCheck;
use menagerie_common::inventory::Inventoried;
use menagerie_common::inventory::animal::{Animal, Herbivore};
use menagerie_common::inventory::thing::Thing;
use tracing::debug;

/// Herbivores strictly kinder than this may join the contact zoo.
pub const CONTACT_ZOO_MIN_KINDNESS: i32 = 5;

/// Outcome of an admission attempt.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    Admitted,
    /// The animal failed its health check and was discarded.
    Rejected,
}

impl Admission {
    pub fn is_admitted(self) -> bool {
        self == Admission::Admitted
    }
}

pub struct Zoo {
    clinic: Box<dyn HealthCheck>,
    animals: Vec<Animal>,
    things: Vec<Thing>,
}

impl Zoo {
    pub fn new(clinic: Box<dyn HealthCheck>) -> Self {
        Self {
            clinic,
            animals: Vec::new(),
            things: Vec::new(),
        }
    }

    /// Runs the health check and keeps the animal only if it passes.
    pub fn add_animal(&mut self, animal: Animal) -> Admission {
        if !self.clinic.check_animal(&animal) {
            debug!(name = %animal.name, "animal rejected by health check");
            return Admission::Rejected;
        }

        debug!(name = %animal.name, species = %animal.species(), "animal admitted");
        self.animals.push(animal);
        Admission::Admitted
    }

    pub fn add_thing(&mut self, thing: Thing) {
        debug!(name = %thing.name, kind = %thing.kind, "thing added");
        self.things.push(thing);
    }

    /// Kilograms of food all admitted animals need per day.
    pub fn total_food_consumption(&self) -> u64 {
        self.animals
            .iter()
            .map(|animal| u64::from(animal.daily_food_kg))
            .sum()
    }

    /// Admitted herbivores kind enough for direct contact with visitors,
    /// in admission order.
    pub fn contact_zoo_candidates(&self) -> Vec<Herbivore<'_>> {
        self.animals
            .iter()
            .filter_map(Animal::as_herbivore)
            .filter(|herbivore| herbivore.kindness > CONTACT_ZOO_MIN_KINDNESS)
            .collect()
    }

    /// Every animal followed by every thing, each in admission order.
    pub fn list_inventory(&self) -> Vec<&dyn Inventoried> {
        let animals = self.animals.iter().map(|animal| animal as &dyn Inventoried);
        let things = self.things.iter().map(|thing| thing as &dyn Inventoried);
        animals.chain(things).collect()
    }

    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub fn things(&self) -> &[Thing] {
        &self.things
    }

    pub fn animal_count(&self) -> usize {
        self.animals.len()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
