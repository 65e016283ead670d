use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use minus::Pager;
use rundo::areas::document::JsonDocument;
use rundo::areas::session::Session;
use rundo::artifacts::age::age;
use rundo::artifacts::core::PagerWriter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rundo",
    version = "0.1.0",
    about = "Visualize a document's undo history as an ASCII tree",
    long_about = "rundo renders the undo history of a document as an ASCII line-art tree \
    and shows diffs between any two historical states. The history is read from a JSON \
    document describing the raw undo tree and the text of every state.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short,
        long,
        global = true,
        default_value = "history.json",
        help = "Path to the history document"
    )]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "graph",
        about = "Render the undo tree",
        long_about = "This command renders the full undo tree as an ASCII graph, newest state \
        first, with an age and change summary per node. Long output is paged on a terminal."
    )]
    Graph {
        #[arg(short, long, help = "Insert a connector row between nodes")]
        verbose: bool,
    },
    #[command(
        name = "diff",
        about = "Diff two historical states",
        long_about = "This command shows the difference between two states of the document, \
        either as a full unified diff or as a compact one-line summary."
    )]
    Diff {
        #[arg(index = 1, help = "Sequence number of the before state (0 = original)")]
        before: u64,
        #[arg(index = 2, help = "Sequence number of the after state")]
        after: u64,
        #[arg(short, long, help = "Print a one-line summary instead of a unified diff")]
        compact: bool,
    },
    #[command(
        name = "show",
        about = "Preview a revert to a state",
        long_about = "This command diffs the current state against the specified one, showing \
        what a revert would change."
    )]
    Show {
        #[arg(index = 1, help = "Sequence number of the state to preview")]
        target: u64,
    },
    #[command(
        name = "play",
        about = "List the playback steps to a state",
        long_about = "This command lists the states stepped through when playing back from \
        the current state to the specified one."
    )]
    Play {
        #[arg(index = 1, help = "Sequence number of the state to play to")]
        target: u64,
    },
    #[command(
        name = "search",
        about = "Find the state whose change matches a pattern",
        long_about = "This command scans states near the current one for a change that added \
        or removed a line matching the pattern."
    )]
    Search {
        #[arg(index = 1, help = "Regular expression to look for")]
        pattern: String,
        #[arg(short, long, help = "Scan newer states instead of older ones")]
        newer: bool,
    },
    #[command(
        name = "age",
        about = "Format a timestamp as a relative age",
        long_about = "This command turns an epoch timestamp into the same relative age string \
        the graph labels use."
    )]
    Age {
        #[arg(index = 1, help = "Epoch timestamp in seconds")]
        timestamp: i64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::Age { timestamp } = &cli.command {
        println!("{}", age(*timestamp, Utc::now().timestamp()));
        return Ok(());
    }

    let document = JsonDocument::from_path(&cli.file)?;

    match &cli.command {
        Commands::Graph { verbose } => {
            if std::io::stdout().is_terminal() {
                let pager = Pager::new();
                let mut session =
                    Session::new(document, Box::new(PagerWriter::new(pager.clone())));
                session.graph(*verbose)?;
                minus::page_all(pager)?;
            } else {
                let mut session = Session::new(document, Box::new(std::io::stdout()));
                session.graph(*verbose)?;
            }
        }
        Commands::Diff {
            before,
            after,
            compact,
        } => {
            let mut session = Session::new(document, Box::new(std::io::stdout()));
            session.diff(*before, *after, *compact)?;
        }
        Commands::Show { target } => {
            let mut session = Session::new(document, Box::new(std::io::stdout()));
            session.show(*target)?;
        }
        Commands::Play { target } => {
            let mut session = Session::new(document, Box::new(std::io::stdout()));
            session.play(*target)?;
        }
        Commands::Search { pattern, newer } => {
            let mut session = Session::new(document, Box::new(std::io::stdout()));
            session.find(pattern, *newer)?;
        }
        Commands::Age { .. } => unreachable!("handled before the document is loaded"),
    }

    Ok(())
}
