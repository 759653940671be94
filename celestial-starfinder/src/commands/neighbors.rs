use super::{parse_number, Command, CommandOutput};
use crate::error::{Error, Result};
use crate::output::NeighborReport;
use crate::session::Session;
use celestial_stars::query::try_search;
use celestial_stars::{NeighborTarget, Position};

pub struct NaiveNeighbors;

impl Command for NaiveNeighbors {
    fn name(&self) -> &str { "naive_neighbors" }
    fn description(&self) -> &str { "Find the k nearest stars to a point or a named star" }

    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        let (k, target) = parse_args(args)?;
        let stars = try_search(&session.catalog, k, &target, &mut session.rng)?;
        let origin = target.resolve(&session.catalog).unwrap_or_default();
        Ok(CommandOutput::Neighbors(NeighborReport {
            origin,
            stars: stars.into_iter().cloned().collect(),
        }))
    }
}

fn parse_args(args: &[&str]) -> Result<(usize, NeighborTarget)> {
    let target = match args.len() {
        2 => NeighborTarget::Named(args[1].to_string()),
        4 => NeighborTarget::Position(Position::new(
            parse_number(args[1])?,
            parse_number(args[2])?,
            parse_number(args[3])?,
        )),
        _ => return Err(Error::Parse(usage().into())),
    };
    let k = args[0]
        .parse::<usize>()
        .map_err(|_| Error::Parse(format!("k must be a non-negative integer, got '{}'", args[0])))?;
    Ok((k, target))
}

fn usage() -> &'static str {
    "use 'naive_neighbors <k> <x> <y> <z>' or 'naive_neighbors <k> \"<name>\"'"
}
