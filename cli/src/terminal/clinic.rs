use std::io::{BufRead, Write};

use menagerie_common::clinic::HealthCheck;
use menagerie_common::inventory::animal::Animal;
use tracing::warn;

use crate::terminal::print;
use crate::terminal::prompt::SharedPrompt;

const HEALTHY: &str = "1";

/// Veterinary check performed by the operator at the console.
pub struct TerminalClinic<R, W> {
    prompt: SharedPrompt<R, W>,
}

impl<R, W> TerminalClinic<R, W> {
    pub fn new(prompt: SharedPrompt<R, W>) -> Self {
        Self { prompt }
    }
}

impl<R: BufRead, W: Write> HealthCheck for TerminalClinic<R, W> {
    fn check_animal(&mut self, animal: &Animal) -> bool {
        print::blank();
        print::print_status(format!("Running health check on \"{}\".", animal.name));

        let answer = self
            .prompt
            .borrow_mut()
            .ask("Enter '1' if the animal is healthy or '0' if not");

        match answer {
            Ok(answer) => answer.trim() == HEALTHY,
            Err(err) => {
                warn!("Health check for \"{}\" was not completed: {err}", animal.name);
                false
            }
        }
    }
}
