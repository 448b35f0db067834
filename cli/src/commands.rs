pub mod animal;
pub mod choice;
pub mod report;
pub mod session;
pub mod thing;

use std::io::{BufRead, Write};

use clap::{ArgAction, Parser, ValueEnum};
use menagerie_common::clinic::HealthCheck;
use menagerie_core::clinic::{ApproveAll, RejectAll};

use crate::terminal::clinic::TerminalClinic;
use crate::terminal::prompt::SharedPrompt;

#[derive(Parser)]
#[command(name = "menagerie")]
#[command(about = "An inventory manager for a small zoo.")]
pub struct CommandLine {
    /// How incoming animals are health-checked
    #[arg(long, value_enum, default_value_t = ClinicMode::Interactive)]
    pub clinic: ClinicMode,
    /// Do not print the startup banner
    #[arg(long)]
    pub no_banner: bool,
    /// Hide the banner and section headers
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ClinicMode {
    /// Ask the operator to confirm every animal's health
    Interactive,
    /// Admit every animal
    Approve,
    /// Turn every animal away
    Reject,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

pub fn build_clinic<R, W>(mode: ClinicMode, prompt: &SharedPrompt<R, W>) -> Box<dyn HealthCheck>
where
    R: BufRead + 'static,
    W: Write + 'static,
{
    match mode {
        ClinicMode::Interactive => Box::new(TerminalClinic::new(prompt.clone())),
        ClinicMode::Approve => Box::new(ApproveAll),
        ClinicMode::Reject => Box::new(RejectAll),
    }
}
