use std::io::{BufRead, Write};

use menagerie_common::config::Config;
use menagerie_core::zoo::Zoo;
use tracing::{debug, warn};

use crate::commands::choice::MenuChoice;
use crate::commands::{animal, report, thing};
use crate::terminal::print;
use crate::terminal::prompt::{InputError, SharedPrompt};

/// One interactive run of the main menu against a single zoo.
pub struct Session<R, W> {
    zoo: Zoo,
    prompt: SharedPrompt<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(zoo: Zoo, prompt: SharedPrompt<R, W>) -> Self {
        Self { zoo, prompt }
    }

    pub fn zoo(&self) -> &Zoo {
        &self.zoo
    }

    /// Serves menu choices until the operator exits or the input ends.
    pub fn run(&mut self, cfg: &Config) -> anyhow::Result<()> {
        loop {
            print::header("main menu", cfg);
            print::numbered_options(MenuChoice::ALL.map(MenuChoice::title));

            let answer = self.prompt.borrow_mut().ask("Your choice");
            let choice = match answer {
                Ok(answer) => answer,
                Err(InputError::Closed) => break,
                Err(err) => return Err(err.into()),
            };

            match choice.parse::<MenuChoice>() {
                Ok(MenuChoice::Exit) => break,
                Ok(choice) => self.dispatch(choice, cfg)?,
                Err(err) => {
                    debug!("{err}");
                    print::failure("Invalid choice.");
                    print::blank();
                }
            }
        }

        print::end_of_program();
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice, cfg: &Config) -> anyhow::Result<()> {
        let outcome = match choice {
            MenuChoice::AddAnimal => animal::add_animal(&mut self.zoo, &self.prompt, cfg),
            MenuChoice::AddThing => thing::add_thing(&mut self.zoo, &self.prompt, cfg),
            MenuChoice::AnimalReport => {
                report::animal_report(&self.zoo, cfg);
                Ok(())
            }
            MenuChoice::ContactZoo => {
                report::contact_zoo(&self.zoo, cfg);
                Ok(())
            }
            MenuChoice::Inventory => {
                report::inventory(&self.zoo, cfg);
                Ok(())
            }
            MenuChoice::Exit => Ok(()),
        };

        match outcome {
            Err(InputError::Closed) => {
                warn!("Input ended before the entry was complete, nothing was added.");
                Ok(())
            }
            other => other.map_err(Into::into),
        }
    }
}
