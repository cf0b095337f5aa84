// Interactive lookup loop.
//
// Reads one line at a time and dispatches it:
// - empty line      -> random player
// - decimal number  -> players nearest to that eDPI
// - `exit`          -> stop
// - anything else   -> case-insensitive name lookup

use std::io::{self, BufRead, Write};

use rand::Rng;
use tracing::debug;

use prosens_core::config::QueryConfig;
use prosens_core::query;
use prosens_core::report;
use prosens_core::store::PlayerStore;

const PROMPT: &str = "\nEnter a player's name, a number for eDPI comparison, or \
                      press Enter for a random player (type 'exit' to quit): ";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Random,
    Nearest(f64),
    Lookup(String),
    Exit,
}

impl Command {
    /// Classify a raw input line. Only the line ending is stripped, so a
    /// line of spaces is a name and ` exit` does not quit. A number may have
    /// leading whitespace but must otherwise parse entirely as a finite decimal.
    pub fn parse(line: &str) -> Self {
        let input = line.trim_end_matches(&['\n', '\r'][..]);
        if input == "exit" {
            return Command::Exit;
        }
        if input.is_empty() {
            return Command::Random;
        }
        match input.trim_start().parse::<f64>() {
            Ok(target) if target.is_finite() => Command::Nearest(target),
            _ => Command::Lookup(input.to_string()),
        }
    }
}

/// Produce the output text for a non-exit command.
pub fn execute<R: Rng + ?Sized>(
    command: &Command,
    store: &PlayerStore,
    settings: &QueryConfig,
    rng: &mut R,
) -> String {
    match command {
        Command::Random => {
            report::render_random(query::random_player(store, rng), &settings.reference_dpis)
        }
        Command::Nearest(target) => {
            let matches = query::nearest_by_edpi(store, *target, settings.nearest_count);
            report::render_nearest(*target, &matches)
        }
        Command::Lookup(name) => {
            let found = query::find_by_name(store, name);
            let suggestions = if found.is_none() {
                query::search_by_prefix(store, name, settings.nearest_count)
            } else {
                Vec::new()
            };
            report::render_lookup(found, &suggestions, &settings.reference_dpis)
        }
        Command::Exit => String::new(),
    }
}

/// Prompt, read and answer until `exit` or end of input.
pub fn run<I, O, R>(
    store: &PlayerStore,
    settings: &QueryConfig,
    input: I,
    mut output: O,
    rng: &mut R,
) -> io::Result<()>
where
    I: BufRead,
    O: Write,
    R: Rng + ?Sized,
{
    let mut lines = input.lines();
    loop {
        output.write_all(PROMPT.as_bytes())?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            debug!("End of input");
            writeln!(output)?;
            break;
        };

        let command = Command::parse(&line);
        debug!(?command, "Dispatching command");
        if command == Command::Exit {
            break;
        }
        output.write_all(execute(&command, store, settings, rng).as_bytes())?;
    }
    Ok(())
}
