use celestial_starfinder::commands::{self, CommandOutput, COMMAND_NAMES};
use celestial_starfinder::session::{OutputFormat, Session};
use clap::Parser;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Editor, Helper};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "star-finder")]
#[command(about = "Load star catalogs and query nearest neighbors")]
#[command(version)]
struct Cli {
    /// Star CSV file to load before the first prompt
    #[arg(long)]
    data: Option<PathBuf>,

    /// Seed for breaking distance ties (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Neighbor output format
    #[arg(long, value_enum, default_value = "ids")]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Do not read or write the history file
    #[arg(long)]
    no_history: bool,
}

fn history_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(".star_finder_history")
}

struct StarFinderHelper;

/// Byte offset where the word under the cursor begins.
fn word_start(up_to: &str) -> usize {
    up_to
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(i, c)| i + c.len_utf8())
}

fn split_path_prefix(partial: &str) -> (&Path, &str) {
    if partial.is_empty() {
        return (Path::new("."), "");
    }
    let path = Path::new(partial);
    if partial.ends_with(std::path::is_separator) {
        return (path, "");
    }
    match (path.parent(), path.file_name()) {
        (Some(p), Some(f)) => {
            let dir = if p.as_os_str().is_empty() { Path::new(".") } else { p };
            (dir, f.to_str().unwrap_or(""))
        }
        _ => (Path::new("."), partial),
    }
}

fn complete_path(partial: &str) -> Vec<Pair> {
    let (dir, prefix) = split_path_prefix(partial);
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return vec![],
    };
    let base = match partial.rfind(std::path::is_separator) {
        Some(i) => partial[..=i].to_string(),
        None => String::new(),
    };
    entries
        .filter_map(|e| e.ok())
        .filter_map(|e| {
            let name = e.file_name().into_string().ok()?;
            if !name.starts_with(prefix) {
                return None;
            }
            let suffix = if e.path().is_dir() { std::path::MAIN_SEPARATOR_STR } else { "" };
            Some(Pair {
                display: format!("{}{}", name, suffix),
                replacement: format!("{}{}{}", base, name, suffix),
            })
        })
        .collect()
}

impl Completer for StarFinderHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let up_to = &line[..pos];
        let words: Vec<&str> = up_to.split_whitespace().collect();
        let start = word_start(up_to);

        if words.is_empty() || (words.len() == 1 && !up_to.ends_with(' ')) {
            let prefix = words.first().map_or(String::new(), |s| s.to_lowercase());
            let matches = COMMAND_NAMES
                .iter()
                .filter(|c| c.starts_with(&prefix))
                .map(|c| Pair { display: c.to_string(), replacement: c.to_string() })
                .collect();
            Ok((start, matches))
        } else if words[0].eq_ignore_ascii_case("stars") {
            let partial = if up_to.ends_with(' ') { "" } else { words.last().copied().unwrap_or("") };
            Ok((start, complete_path(partial)))
        } else {
            Ok((pos, vec![]))
        }
    }
}

impl Hinter for StarFinderHelper {
    type Hint = String;
}
impl Highlighter for StarFinderHelper {}
impl Validator for StarFinderHelper {}
impl Helper for StarFinderHelper {}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut session = match cli.seed {
        Some(seed) => Session::with_seed(seed),
        None => Session::new(),
    };
    session.format = cli.format;

    if let Some(path) = &cli.data {
        match session.load_catalog(path) {
            Ok(count) => println!("Read {} stars from {}", count, path.display()),
            Err(e) => eprintln!("ERROR: {}", e),
        }
    }

    let mut rl = Editor::with_config(
        rustyline::Config::builder()
            .auto_add_history(true)
            .build(),
    )?;
    rl.set_helper(Some(StarFinderHelper));

    let history = history_path();
    if !cli.no_history {
        let _ = rl.load_history(&history);
    }

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match commands::dispatch(&mut session, line) {
                    Ok(CommandOutput::Quit) => break,
                    Ok(output) => print_output(output, session.format),
                    Err(e) => eprintln!("ERROR: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("ERROR: {}", e);
                break;
            }
        }
    }

    if !cli.no_history {
        let _ = rl.save_history(&history);
    }
    Ok(())
}

fn print_output(output: CommandOutput, format: OutputFormat) {
    match output {
        CommandOutput::Text(s) => println!("{}", s),
        CommandOutput::Neighbors(report) => match report.render(format) {
            Ok(s) if s.is_empty() => {}
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("ERROR: {}", e),
        },
        CommandOutput::Quit | CommandOutput::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_start_after_ascii_space() {
        assert_eq!(word_start("stars data/te"), 6);
        assert_eq!(word_start("sta"), 0);
        assert_eq!(word_start("stars "), 6);
    }

    #[test]
    fn word_start_after_multibyte_whitespace() {
        // U+3000 is three bytes wide.
        let line = "stars\u{3000}data";
        let start = word_start(line);
        assert_eq!(start, 8);
        assert_eq!(&line[start..], "data");
    }

    #[test]
    fn split_path_prefix_separates_dir_and_file() {
        assert_eq!(split_path_prefix("data/te"), (Path::new("data"), "te"));
        assert_eq!(split_path_prefix("te"), (Path::new("."), "te"));
        assert_eq!(split_path_prefix(""), (Path::new("."), ""));
    }
}
