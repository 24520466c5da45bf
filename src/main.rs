use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use classbook::config::Config;
use classbook::storage::{HistoryFile, JsonRecordStorage};
use classbook::Logic;

#[derive(Parser)]
#[command(name = "classbook")]
#[command(about = "Keep track of students, their classes and assignments")]
struct Cli {
    /// Record book JSON file (overrides CLASSBOOK_DATA_FILE)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Command history file (overrides CLASSBOOK_HISTORY_FILE)
    #[arg(long, global = true)]
    history_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands from stdin until `exit` or end of input
    Repl,
    /// Run a single command and print its result
    Exec {
        /// The command line, e.g. `mark 1-3 c/Math a/hw1`
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
}

/// Logs go to stderr so stdout carries only command feedback.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "classbook=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = Config::from_env()?;
    if let Some(path) = cli.data_file {
        config.data_file = path;
    }
    if let Some(path) = cli.history_file {
        config.history_file = path;
    }
    tracing::debug!(?config, "Resolved configuration");

    let mut logic = Logic::load(Box::new(JsonRecordStorage::open(&config.data_file)))
        .with_history_file(HistoryFile::open(&config.history_file), config.history_capacity);

    match cli.command {
        Some(Commands::Exec { command }) => {
            let result = logic.execute(&command.join(" "))?;
            println!("{}", result.feedback);
            if result.redisplay {
                print_students(&logic);
            }
        }
        Some(Commands::Repl) | None => run_repl(&mut logic)?,
    }

    Ok(())
}

fn run_repl(logic: &mut Logic) -> anyhow::Result<()> {
    tracing::info!("Starting classbook session");
    print_students(logic);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        // History browsing prints the recalled line rather than running it.
        match line.trim() {
            ":prev" => {
                println!("{}", logic.history_mut().previous().unwrap_or_default());
                continue;
            }
            ":next" => {
                println!("{}", logic.history_mut().next().unwrap_or_default());
                continue;
            }
            _ => {}
        }

        match logic.execute(&line) {
            Ok(result) => {
                println!("{}", result.feedback);
                if result.redisplay {
                    print_students(logic);
                }
                if result.exit {
                    break;
                }
            }
            Err(e) => println!("{}", e),
        }
    }

    Ok(())
}

fn print_students(logic: &Logic) {
    for (i, person) in logic.filtered_persons().iter().enumerate() {
        println!("{:>3}. {}", i + 1, person);
    }
}
