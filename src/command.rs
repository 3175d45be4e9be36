use std::str::FromStr;

use crate::{
    executable::{ExecutableError, ExecutablePathFinder, ExecutableRunner},
    prompt::Prompter,
};

pub const MAX_ARGS: usize = 10;

const HELP_TEXT: &str = "--- Simple Shell Help ---
Available built-in commands:
  help   : Display this help message.
  exit   : Terminate the shell.

Other commands are executed via the system's PATH.
Examples:
  ls -l
  echo Hello World
-------------------------
";

#[derive(Debug, PartialEq)]
pub enum BuiltinCommand {
    Exit,
    Help,
}

#[derive(Debug, PartialEq)]
pub enum Command {
    Noop,
    Builtin(BuiltinCommand),
    External { cmd: String, args: Vec<String> },
}

fn tokenize(line: &str) -> Vec<String> {
    return line
        .split(' ')
        .filter(|token| !token.is_empty())
        .take(MAX_ARGS - 1)
        .map(|token| token.to_string())
        .collect();
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = tokenize(s);

        let [cmd, args @ ..] = tokens.as_slice() else {
            return Ok(Command::Noop);
        };

        match cmd.as_str() {
            "exit" => {
                let command = Command::Builtin(BuiltinCommand::Exit);
                return Ok(command);
            }
            "help" => {
                let command = Command::Builtin(BuiltinCommand::Help);
                return Ok(command);
            }
            _ => {
                let cmd = cmd.to_string();
                let args = args.to_vec();

                let command = Command::External { cmd, args };
                return Ok(command);
            }
        }
    }
}

impl Command {
    pub fn run(
        self,
        prompter: &mut impl Prompter,
        finder: &impl ExecutablePathFinder,
        runner: &impl ExecutableRunner,
    ) -> anyhow::Result<()> {
        match self {
            Command::Noop => {
                return Ok(());
            }
            Command::Builtin(builtin_command) => {
                return run_builtin_command(builtin_command, prompter);
            }
            Command::External { cmd, args } => {
                return run_external_command(prompter, finder, runner, cmd, args);
            }
        }
    }
}

fn run_builtin_command(
    command: BuiltinCommand,
    prompter: &mut impl Prompter,
) -> anyhow::Result<()> {
    match command {
        BuiltinCommand::Exit => {
            prompter.prompt("Exiting simple_shell.\n")?;
            std::process::exit(0);
        }
        BuiltinCommand::Help => {
            return prompter.prompt(HELP_TEXT);
        }
    }
}

fn run_external_command(
    prompter: &mut impl Prompter,
    finder: &impl ExecutablePathFinder,
    runner: &impl ExecutableRunner,
    cmd: String,
    args: Vec<String>,
) -> anyhow::Result<()> {
    let env_path = std::env::var("PATH").unwrap_or_default();

    let Some(exec_path) = finder.find_executable_path(&env_path, &cmd) else {
        let error = ExecutableError::CommandNotFound(cmd);
        return prompter.prompt(&error.to_string());
    };

    let args: Vec<&str> = args.iter().map(|arg| arg.as_str()).collect();

    if let Err(error) = runner.execute(&exec_path, args.as_slice()) {
        return prompter.prompt(&error.to_string());
    }

    return Ok(());
}
