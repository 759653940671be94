use super::{parse_number, Command, CommandOutput};
use crate::error::{Error, Result};
use crate::session::Session;

pub struct Add;
pub struct Subtract;

impl Command for Add {
    fn name(&self) -> &str { "add" }
    fn description(&self) -> &str { "Add two numbers" }

    fn execute(&self, _session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        let (a, b) = two_operands(self.name(), args)?;
        Ok(CommandOutput::Text((a + b).to_string()))
    }
}

impl Command for Subtract {
    fn name(&self) -> &str { "subtract" }
    fn description(&self) -> &str { "Subtract the second number from the first" }

    fn execute(&self, _session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        let (a, b) = two_operands(self.name(), args)?;
        Ok(CommandOutput::Text((a - b).to_string()))
    }
}

fn two_operands(cmd: &str, args: &[&str]) -> Result<(f64, f64)> {
    if args.len() != 2 {
        return Err(Error::Parse(format!(
            "{} takes exactly two numbers, got {}",
            cmd,
            args.len()
        )));
    }
    Ok((parse_number(args[0])?, parse_number(args[1])?))
}
