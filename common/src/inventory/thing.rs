use std::fmt;
use std::str::FromStr;

use crate::error::ParseKindError;
use crate::inventory::{Inventoried, format_label};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThingKind {
    Table,
    Computer,
}

impl ThingKind {
    /// In menu order.
    pub const ALL: [ThingKind; 2] = [ThingKind::Table, ThingKind::Computer];

    pub fn name(self) -> &'static str {
        match self {
            ThingKind::Table => "Table",
            ThingKind::Computer => "Computer",
        }
    }
}

impl fmt::Display for ThingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThingKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ThingKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseKindError::Thing(s.to_string()))
    }
}

/// A non-living inventory item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Thing {
    pub name: String,
    pub inventory_number: u32,
    pub kind: ThingKind,
}

impl Thing {
    pub fn new(kind: ThingKind, name: impl Into<String>, inventory_number: u32) -> Self {
        Self {
            name: name.into(),
            inventory_number,
            kind,
        }
    }

    pub fn table(name: impl Into<String>, inventory_number: u32) -> Self {
        Self::new(ThingKind::Table, name, inventory_number)
    }

    pub fn computer(name: impl Into<String>, inventory_number: u32) -> Self {
        Self::new(ThingKind::Computer, name, inventory_number)
    }
}

impl Inventoried for Thing {
    fn name(&self) -> &str {
        &self.name
    }

    fn inventory_number(&self) -> u32 {
        self.inventory_number
    }
}

impl fmt::Display for Thing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_label(&self.name, self.inventory_number))
    }
}
