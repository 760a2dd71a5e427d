use anyhow::Context;
use clap::{Parser, Subcommand};
use clavier::{create_keyboard, repl, ClavierConfig, LayoutTable};
use clavier_core::{search_query, search_url, AdStatus, BufferState, NoAds};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "clavier")]
#[command(about = "On-screen Arabic keyboard for the terminal")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive editing session (default)
    Repl,
    /// Print the keyboard layout
    Layout {
        /// Include the Latin digit row
        #[arg(long)]
        latin: bool,
    },
    /// Print the search URL for some text
    SearchUrl {
        /// Text to search for
        text: Vec<String>,
    },
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<ClavierConfig> {
    match path {
        Some(p) => ClavierConfig::load_toml(p)
            .with_context(|| format!("failed to load config {}", p.display())),
        None => Ok(ClavierConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Layout { latin } => {
            let layout = if latin || config.base().show_latin_digits {
                LayoutTable::with_latin_digits()
            } else {
                LayoutTable::standard()
            };
            repl::print_layout(&mut out, layout)?;
        }
        Commands::SearchUrl { text } => {
            let state = BufferState::with_text(text.join(" "));
            match search_query(&state) {
                Ok(query) => writeln!(out, "{}", search_url(&config.base().search_base_url, &query))?,
                Err(e) => anyhow::bail!("{}", e),
            }
        }
        Commands::Repl => {
            // No ad network in the terminal; both slots degrade to placeholders.
            for slot in config.base().ad_slots() {
                if slot.render(&NoAds) == AdStatus::Placeholder {
                    tracing::debug!(slot = %slot.slot_id, "ad placeholder");
                }
            }

            let mut kb = create_keyboard(config);
            writeln!(out, "clavier: type Arabic text, :help for commands, Ctrl-D to exit")?;
            let stdin = io::stdin();
            repl::run(&mut kb, stdin.lock(), &mut out)?;
        }
    }
    Ok(())
}
