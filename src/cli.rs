//! Command-line interface.
//!
//! Thin orchestration over the library: read a file, run the parser, print
//! what it found. All structural work happens in [`crate::parser`].

use std::{fs, io, io::Write as _, path::Path, path::PathBuf, process};

use clap::{Parser, Subcommand};
use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::{
    document::{LineSource, TextDocument},
    parser::{parse_tags, TagCollector, TagEvent, TagEventKind},
    stack::TagStack,
    ScanError,
};

#[derive(Debug, Parser)]
#[command(
    name = "tagscan",
    version,
    about = "Scan XML-like markup and report tag pairing, recovery, and open-tag context."
)]
pub struct TagscanArgs {
    #[command(subcommand)]
    pub command: ArgsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ArgsCommand {
    /// Parse a file and print every complete and unclosed tag, plus the tags
    /// still open at the end of the scan.
    Outline {
        /// The markup file to scan.
        #[arg(required = true)]
        file: PathBuf,
        /// Last line to scan (zero-based, inclusive). Defaults to the last
        /// line of the file.
        #[arg(long)]
        end_line: Option<usize>,
        /// Emit JSON instead of colored text.
        #[arg(long)]
        json: bool,
    },
    /// Print the open-tag hierarchy at a line, outermost first.
    Context {
        /// The markup file to scan.
        #[arg(required = true)]
        file: PathBuf,
        /// The line whose structural context to report (zero-based).
        #[arg(required = true)]
        line: usize,
    },
    /// Report whether a character offset falls inside an unterminated tag.
    Caret {
        /// The markup file to inspect.
        #[arg(required = true)]
        file: PathBuf,
        /// Caret position as a character offset from the start of the file.
        #[arg(required = true)]
        offset: usize,
    },
}

/// The main entry point for the CLI.
pub fn run() {
    let args = TagscanArgs::parse();

    match args.command {
        ArgsCommand::Outline {
            file,
            end_line,
            json,
        } => {
            let doc = read_document_or_exit(&file);
            let end_line = end_line.unwrap_or_else(|| doc.line_count() - 1);
            let mut sink = TagCollector::new();
            let stack = parse_tags(&doc, end_line, &mut sink).unwrap_or_else(|e| {
                print_error(e);
                process::exit(1);
            });
            if json {
                print_outline_json(&sink.events, &stack);
            } else if let Err(e) = print_outline(&sink.events, &stack) {
                eprintln!("Error writing output: {}", e);
                process::exit(1);
            }
        }

        ArgsCommand::Context { file, line } => {
            let doc = read_document_or_exit(&file);
            let stack = parse_tags(&doc, line, &mut ()).unwrap_or_else(|e| {
                print_error(e);
                process::exit(1);
            });
            print_context(&stack);
        }

        ArgsCommand::Caret { file, offset } => {
            let doc = read_document_or_exit(&file);
            if doc.caret_in_tag(offset) {
                println!("inside tag: yes");
            } else {
                println!("inside tag: no");
            }
        }
    }
}

fn read_document_or_exit(path: &Path) -> TextDocument {
    match fs::read_to_string(path) {
        Ok(text) => TextDocument::new(text),
        Err(e) => {
            eprintln!("Error reading file {}: {}", path.display(), e);
            process::exit(1);
        }
    }
}

/// Prints a ScanError with full miette diagnostics.
fn print_error(error: ScanError) {
    let report = miette::Report::new(error);
    eprintln!("{report:?}");
}

#[derive(Serialize)]
struct Outline<'a> {
    events: &'a [TagEvent],
    open: &'a TagStack,
}

fn print_outline_json(events: &[TagEvent], stack: &TagStack) {
    let outline = Outline {
        events,
        open: stack,
    };
    match serde_json::to_string_pretty(&outline) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing outline: {}", e);
            process::exit(1);
        }
    }
}

fn print_outline(events: &[TagEvent], stack: &TagStack) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    for event in events {
        let (label, color) = match event.kind {
            TagEventKind::Complete => ("complete", Color::Green),
            TagEventKind::Unclosed => ("unclosed", Color::Yellow),
        };
        stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(stdout, "{:>8}", label)?;
        stdout.reset()?;
        writeln!(stdout, " {} {}..{}", event.name, event.start, event.end)?;
    }
    if stack.is_empty() {
        writeln!(stdout, "no tags open at end of scan")?;
    } else {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(stdout, "open at end:")?;
        stdout.reset()?;
        for record in stack {
            write!(stdout, " {}@{}", record.name, record.start())?;
        }
        writeln!(stdout)?;
    }
    Ok(())
}

fn print_context(stack: &TagStack) {
    if stack.is_empty() {
        println!("(top level)");
        return;
    }
    let path: Vec<&str> = stack.iter().map(|r| r.name.as_str()).collect();
    println!("{}", path.join(" > "));
}
