use std::io::{BufRead, Write};

use menagerie_common::config::Config;
use menagerie_common::inventory::thing::{Thing, ThingKind};
use menagerie_core::zoo::Zoo;
use tracing::debug;

use crate::commands::choice;
use crate::terminal::print;
use crate::terminal::prompt::{InputError, SharedPrompt};

pub fn add_thing<R, W>(
    zoo: &mut Zoo,
    prompt: &SharedPrompt<R, W>,
    cfg: &Config,
) -> Result<(), InputError>
where
    R: BufRead,
    W: Write,
{
    print::header("add an inventory item", cfg);
    print::numbered_options(ThingKind::ALL.map(ThingKind::name));

    let thing = {
        let mut prompt = prompt.borrow_mut();

        let choice = prompt.ask("Item type")?;
        let kind = match choice::parse_thing_kind(&choice) {
            Ok(kind) => kind,
            Err(err) => {
                debug!("{err}");
                print::failure("Invalid item type.");
                return Ok(());
            }
        };

        let name = prompt.ask_non_empty("Name")?;
        let number: u32 = prompt.ask_parsed("Inventory number")?;
        Thing::new(kind, name, number)
    };

    print::success(format!("Item \"{}\" was added.", thing.name));
    print::blank();
    zoo.add_thing(thing);
    Ok(())
}
