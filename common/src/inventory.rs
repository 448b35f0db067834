//! # Inventory Models
//!
//! Everything the zoo keeps on its books is inventoried: it has a name and an
//! inventory number, and it is reported as `"<name> (Inv. No. <number>)"`.
//!
//! * [`animal::Animal`]: A living item, either a herbivore (with a kindness
//!   score) or a predator.
//! * [`thing::Thing`]: A non-living item such as a table or a computer.
//!
//! Inventory numbers are tags, not keys. Duplicates are allowed.

pub mod animal;
pub mod thing;

/// Capability shared by every item the zoo keeps track of.
pub trait Inventoried {
    fn name(&self) -> &str;
    fn inventory_number(&self) -> u32;

    /// Renders the item the way every report lists it.
    fn label(&self) -> String {
        format_label(self.name(), self.inventory_number())
    }
}

pub(crate) fn format_label(name: &str, number: u32) -> String {
    format!("{name} (Inv. No. {number})")
}
