use std::str::FromStr;

use menagerie_common::inventory::animal::Species;
use menagerie_common::inventory::thing::ThingKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid choice: '{0}'")]
pub struct InvalidChoice(pub String);

/// Entries of the main menu, numbered from 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    AddAnimal,
    AnimalReport,
    ContactZoo,
    Inventory,
    AddThing,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::AddAnimal,
        MenuChoice::AnimalReport,
        MenuChoice::ContactZoo,
        MenuChoice::Inventory,
        MenuChoice::AddThing,
        MenuChoice::Exit,
    ];

    pub fn title(self) -> &'static str {
        match self {
            MenuChoice::AddAnimal => "Add an animal",
            MenuChoice::AnimalReport => "Animal report (count and food)",
            MenuChoice::ContactZoo => "Contact zoo animals",
            MenuChoice::Inventory => "Inventory list",
            MenuChoice::AddThing => "Add an inventory item",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        pick_numbered(s, &MenuChoice::ALL)
    }
}

/// Accepts the menu number (`1`-`4`) or the species name.
pub fn parse_species(s: &str) -> Result<Species, InvalidChoice> {
    pick_numbered(s, &Species::ALL).or_else(|err| s.parse().map_err(|_| err))
}

/// Accepts the menu number (`1`-`2`) or the kind name.
pub fn parse_thing_kind(s: &str) -> Result<ThingKind, InvalidChoice> {
    pick_numbered(s, &ThingKind::ALL).or_else(|err| s.parse().map_err(|_| err))
}

fn pick_numbered<T: Copy>(s: &str, options: &[T]) -> Result<T, InvalidChoice> {
    s.trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| options.get(idx).copied())
        .ok_or_else(|| InvalidChoice(s.trim().to_string()))
}
