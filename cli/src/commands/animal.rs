use std::io::{BufRead, Write};

use menagerie_common::config::Config;
use menagerie_common::inventory::animal::{Animal, Species};
use menagerie_core::zoo::{Admission, Zoo};
use tracing::debug;

use crate::commands::choice;
use crate::terminal::print;
use crate::terminal::prompt::{InputError, SharedPrompt};

/// Collects a new animal from the operator and submits it for admission.
///
/// An unknown species aborts the flow before any other question is asked.
pub fn add_animal<R, W>(
    zoo: &mut Zoo,
    prompt: &SharedPrompt<R, W>,
    cfg: &Config,
) -> Result<(), InputError>
where
    R: BufRead,
    W: Write,
{
    print::header("add an animal", cfg);
    print::numbered_options(Species::ALL.map(Species::name));

    let Some(animal) = read_animal(prompt)? else {
        print::failure("Invalid animal type.");
        return Ok(());
    };

    let name = animal.name.clone();
    match zoo.add_animal(animal) {
        Admission::Admitted => {
            print::success(format!("Animal \"{name}\" was admitted to the zoo."))
        }
        Admission::Rejected => print::failure(format!(
            "Animal \"{name}\" failed the health check and was not admitted."
        )),
    }
    print::blank();
    Ok(())
}

// The prompt borrow must end here, the interactive clinic reads from it too.
fn read_animal<R, W>(prompt: &SharedPrompt<R, W>) -> Result<Option<Animal>, InputError>
where
    R: BufRead,
    W: Write,
{
    let mut prompt = prompt.borrow_mut();

    let choice = prompt.ask("Species")?;
    let species = match choice::parse_species(&choice) {
        Ok(species) => species,
        Err(err) => {
            debug!("{err}");
            return Ok(None);
        }
    };

    let name = prompt.ask_non_empty("Name")?;
    let food: u32 = prompt.ask_parsed("Daily food (kg)")?;
    let number: u32 = prompt.ask_parsed("Inventory number")?;
    let kindness: i32 = if species.is_herbivore() {
        prompt.ask_parsed("Kindness (0 to 10)")?
    } else {
        0
    };

    Ok(Some(species.build(name, food, number, kindness)))
}
