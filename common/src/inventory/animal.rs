use std::fmt;
use std::str::FromStr;

use crate::error::ParseKindError;
use crate::inventory::{Inventoried, format_label};

/// Species of plant-eating animals the zoo accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HerbivoreSpecies {
    Monkey,
    Rabbit,
}

/// Species of meat-eating animals the zoo accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PredatorSpecies {
    Tiger,
    Wolf,
}

/// Category of an animal together with the data only that category carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnimalClass {
    /// Kindness is meant to be on a 0-10 scale but is stored as given.
    Herbivore {
        species: HerbivoreSpecies,
        kindness: i32,
    },
    Predator {
        species: PredatorSpecies,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Animal {
    pub name: String,
    pub daily_food_kg: u32,
    pub inventory_number: u32,
    pub class: AnimalClass,
}

/// Borrowed view of an animal known to be a herbivore.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Herbivore<'a> {
    pub animal: &'a Animal,
    pub kindness: i32,
}

impl Animal {
    pub fn herbivore(
        species: HerbivoreSpecies,
        name: impl Into<String>,
        daily_food_kg: u32,
        inventory_number: u32,
        kindness: i32,
    ) -> Self {
        Self {
            name: name.into(),
            daily_food_kg,
            inventory_number,
            class: AnimalClass::Herbivore { species, kindness },
        }
    }

    pub fn predator(
        species: PredatorSpecies,
        name: impl Into<String>,
        daily_food_kg: u32,
        inventory_number: u32,
    ) -> Self {
        Self {
            name: name.into(),
            daily_food_kg,
            inventory_number,
            class: AnimalClass::Predator { species },
        }
    }

    pub fn monkey(name: impl Into<String>, food: u32, number: u32, kindness: i32) -> Self {
        Self::herbivore(HerbivoreSpecies::Monkey, name, food, number, kindness)
    }

    pub fn rabbit(name: impl Into<String>, food: u32, number: u32, kindness: i32) -> Self {
        Self::herbivore(HerbivoreSpecies::Rabbit, name, food, number, kindness)
    }

    pub fn tiger(name: impl Into<String>, food: u32, number: u32) -> Self {
        Self::predator(PredatorSpecies::Tiger, name, food, number)
    }

    pub fn wolf(name: impl Into<String>, food: u32, number: u32) -> Self {
        Self::predator(PredatorSpecies::Wolf, name, food, number)
    }

    pub fn species(&self) -> Species {
        match self.class {
            AnimalClass::Herbivore { species, .. } => species.into(),
            AnimalClass::Predator { species } => species.into(),
        }
    }

    pub fn as_herbivore(&self) -> Option<Herbivore<'_>> {
        match self.class {
            AnimalClass::Herbivore { kindness, .. } => Some(Herbivore {
                animal: self,
                kindness,
            }),
            AnimalClass::Predator { .. } => None,
        }
    }

    pub fn kindness(&self) -> Option<i32> {
        self.as_herbivore().map(|herbivore| herbivore.kindness)
    }
}

impl Inventoried for Animal {
    fn name(&self) -> &str {
        &self.name
    }

    fn inventory_number(&self) -> u32 {
        self.inventory_number
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_label(&self.name, self.inventory_number))
    }
}

impl fmt::Display for Herbivore<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.animal, f)
    }
}

/// Flat list of every species, used when the category is not known yet
/// (e.g. while collecting input).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Species {
    Monkey,
    Rabbit,
    Tiger,
    Wolf,
}

impl Species {
    /// In menu order.
    pub const ALL: [Species; 4] = [
        Species::Monkey,
        Species::Rabbit,
        Species::Tiger,
        Species::Wolf,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Species::Monkey => "Monkey",
            Species::Rabbit => "Rabbit",
            Species::Tiger => "Tiger",
            Species::Wolf => "Wolf",
        }
    }

    pub fn is_herbivore(self) -> bool {
        matches!(self, Species::Monkey | Species::Rabbit)
    }

    /// Builds an animal of this species.
    ///
    /// `kindness` is only read for herbivores.
    pub fn build(self, name: impl Into<String>, food: u32, number: u32, kindness: i32) -> Animal {
        match self {
            Species::Monkey => Animal::monkey(name, food, number, kindness),
            Species::Rabbit => Animal::rabbit(name, food, number, kindness),
            Species::Tiger => Animal::tiger(name, food, number),
            Species::Wolf => Animal::wolf(name, food, number),
        }
    }
}

impl From<HerbivoreSpecies> for Species {
    fn from(species: HerbivoreSpecies) -> Self {
        match species {
            HerbivoreSpecies::Monkey => Species::Monkey,
            HerbivoreSpecies::Rabbit => Species::Rabbit,
        }
    }
}

impl From<PredatorSpecies> for Species {
    fn from(species: PredatorSpecies) -> Self {
        match species {
            PredatorSpecies::Tiger => Species::Tiger,
            PredatorSpecies::Wolf => Species::Wolf,
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Species {
    type Err = ParseKindError;

    /// Parses a species name, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Species::ALL
            .into_iter()
            .find(|species| species.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseKindError::Species(s.to_string()))
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
