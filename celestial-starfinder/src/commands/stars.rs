use super::{Command, CommandOutput};
use crate::error::{Error, Result};
use crate::session::Session;

pub struct Stars;

impl Command for Stars {
    fn name(&self) -> &str { "stars" }
    fn description(&self) -> &str { "Load a star catalog from a CSV file" }

    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        if args.len() != 1 {
            return Err(Error::Parse(
                "please provide your input in the format 'stars <CSV file>'".into(),
            ));
        }
        let count = session.load_catalog(args[0])?;
        Ok(CommandOutput::Text(format!("Read {} stars from {}", count, args[0])))
    }
}
