use std::io;

use crate::command::Command;
use crate::executable::{ExecutablePathFinder, ExecutableRunner, PathFinder, Runner};
use crate::prompt::{ConsolePrompter, Prompter};

mod command;
mod executable;
mod prompt;

const PROMPT: &str = "simple_shell> ";
const FAREWELL: &str = "\nExiting shell...\n";

fn main() -> anyhow::Result<()> {
    let reader = io::stdin().lock();
    let writer = io::stdout();
    let mut prompter = ConsolePrompter::new(reader, writer);
    let finder = PathFinder::new();
    let runner = Runner::new();

    // A stream fault ends the session the same way a clean EOF does: the
    // diagnostic is printed and the shell still exits with 0.
    if let Err(error) = run_loop(&mut prompter, &finder, &runner) {
        eprintln!("simple_shell: {}", error);
    }

    return Ok(());
}

fn run_loop(
    prompter: &mut impl Prompter,
    finder: &impl ExecutablePathFinder,
    runner: &impl ExecutableRunner,
) -> anyhow::Result<()> {
    loop {
        prompter.prompt(PROMPT)?;

        let Some(input) = prompter.read()? else {
            prompter.prompt(FAREWELL)?;
            return Ok(());
        };

        let command = input.parse::<Command>()?;
        command.run(prompter, finder, runner)?;
    }
}
