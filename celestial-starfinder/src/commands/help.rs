use super::{Command, CommandOutput, COMMAND_NAMES};
use crate::error::Result;
use crate::session::Session;

pub struct Help;

impl Command for Help {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "Show available commands"
    }

    fn execute(&self, _session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        if let Some(cmd) = args.first() {
            Ok(CommandOutput::Text(command_help(cmd)))
        } else {
            Ok(CommandOutput::Text(general_help()))
        }
    }
}

fn command_help(cmd: &str) -> String {
    match cmd.to_lowercase().as_str() {
        "stars" => "stars <file>\n  Load stars from a CSV file with header StarID,ProperName,X,Y,Z\n  A bad file leaves no stars loaded".into(),
        "naive_neighbors" => "naive_neighbors <k> <x> <y> <z>\nnaive_neighbors <k> \"<name>\"\n  Print the ids of the k stars nearest a point or a named star\n  Ties at the cutoff are broken at random".into(),
        "add" => "add <a> <b>\n  Print a + b".into(),
        "subtract" => "subtract <a> <b>\n  Print a - b".into(),
        "info" => "info\n  Show the number of loaded stars and the first star".into(),
        "help" => "help [command]\n  Show help for a command".into(),
        "quit" => "quit\n  Exit the program".into(),
        _ => format!("Unknown command: {}", cmd),
    }
}

fn general_help() -> String {
    let mut lines = vec!["Commands:".to_string()];
    for name in COMMAND_NAMES {
        lines.push(format!("  {}", name));
    }
    lines.push("Type 'help <command>' for details".into());
    lines.join("\n")
}
