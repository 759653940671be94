use super::{Command, CommandOutput};
use crate::error::Result;
use crate::session::Session;

pub struct Info;

impl Command for Info {
    fn name(&self) -> &str { "info" }
    fn description(&self) -> &str { "Show the loaded catalog" }

    fn execute(&self, session: &mut Session, _args: &[&str]) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(session.catalog.to_string()))
    }
}
