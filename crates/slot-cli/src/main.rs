//! `slots` CLI — find the free slots of a day able to host a meeting.
//!
//! ## Usage
//!
//! ```sh
//! # Compute slots for a query document (stdin → stdout)
//! slots find < query.json
//!
//! # From file to file
//! slots find -i query.json -o slots.json
//!
//! # Human-readable rows instead of JSON
//! slots find -i query.json --table
//!
//! # Earliest slot only; exit status 1 when nothing fits
//! slots find -i query.json --first
//!
//! # Validate a query document without running it
//! slots check -i query.json
//! ```
//!
//! The query document pairs a calendar with a request:
//!
//! ```json
//! {
//!   "events": [
//!     { "when": { "start": 540, "duration_minutes": 60 }, "attendees": ["alice"] }
//!   ],
//!   "request": {
//!     "duration_minutes": 30,
//!     "mandatory_attendees": ["alice", "bob"],
//!     "optional_attendees": ["carol"]
//!   }
//! }
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use slot_engine::{find_first_slot, find_slots, validate_query, BusyEvent, Interval, MeetingRequest};
use std::io::{self, Read};
use std::process;

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Find the free slots of a day able to host a meeting"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute every slot able to host the requested meeting
    Find {
        /// Input query file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Emit only the earliest slot; exits with status 1 when none fits
        #[arg(long)]
        first: bool,
        /// Render HH:MM–HH:MM rows instead of JSON
        #[arg(long)]
        table: bool,
    },
    /// Decode and validate a query document without running it
    Check {
        /// Input query file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

/// The query document this CLI accepts. The engine imposes no wire format;
/// this shape belongs entirely to the CLI.
#[derive(Deserialize)]
struct QueryDoc {
    events: Vec<BusyEvent>,
    request: MeetingRequest,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Find {
            input,
            output,
            first,
            table,
        } => {
            let query = read_query(input.as_deref())?;

            let slots = if first {
                match find_first_slot(&query.events, &query.request) {
                    Some(slot) => vec![slot],
                    None => {
                        eprintln!("no feasible slot");
                        process::exit(1);
                    }
                }
            } else {
                find_slots(&query.events, &query.request)
            };

            let rendered = if table {
                render_table(&slots)
            } else {
                serde_json::to_string_pretty(&slots)?
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Check { input } => {
            let query = read_query(input.as_deref())?;
            println!(
                "OK: {} events, {} mandatory / {} optional attendees",
                query.events.len(),
                query.request.mandatory_attendees.len(),
                query.request.optional_attendees.len()
            );
        }
    }

    Ok(())
}

/// Read, decode, and validate a query document.
fn read_query(path: Option<&str>) -> Result<QueryDoc> {
    let raw = read_input(path)?;
    let query: QueryDoc =
        serde_json::from_str(&raw).context("Failed to parse query document")?;
    validate_query(&query.events, &query.request).context("Invalid query document")?;
    Ok(query)
}

/// Render slots as `HH:MM–HH:MM` rows; the trailing slot closes at 24:00.
fn render_table(slots: &[Interval]) -> String {
    let mut out = String::new();
    for slot in slots {
        out.push_str(&format!(
            "{}–{}  ({} min)\n",
            clock(slot.start),
            clock(slot.end()),
            slot.duration_minutes
        ));
    }
    out
}

fn clock(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
