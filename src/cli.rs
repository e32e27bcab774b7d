// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::Path;
use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use flipdeck_core::Config;
use flipdeck_core::config::CONFIG_FILE_NAME;

use crate::cmd::check::check_deck;
use crate::cmd::export::export_deck;
use crate::cmd::list::list_decks;
use crate::cmd::review::ReviewConfig;
use crate::cmd::review::resolve_position_file;
use crate::cmd::review::start_review;
use crate::error::Fallible;
use crate::error::fail;

/// Review tab-separated flashcard decks in the terminal.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    /// Deck file to review. Without it, the decks in the directory are listed for selection.
    deck: Option<PathBuf>,
    #[command(flatten)]
    options: Options,
}

#[derive(Args)]
struct Options {
    /// Directory to look for decks in. By default, the current working directory is used.
    #[arg(long, global = true)]
    directory: Option<PathBuf>,
    /// Path to the configuration file. By default, `flipdeck.toml` in the deck directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// File that remembers the last card viewed. Relative paths are resolved against the deck directory.
    #[arg(long, global = true)]
    position_file: Option<PathBuf>,
    /// Whether flipping a card a second time moves on to the next card. Default is true.
    #[arg(long, global = true)]
    flip_advances: Option<bool>,
}

#[derive(Subcommand)]
enum Command {
    /// Review a deck. Same as running without a subcommand.
    Review {
        /// Deck file to review. Without it, the decks in the directory are listed for selection.
        deck: Option<PathBuf>,
    },
    /// Report the cards in a deck file and the lines that will be skipped.
    Check {
        /// Path to the deck file.
        deck: PathBuf,
    },
    /// List the decks in the directory.
    List,
    /// Export a deck as JSON.
    Export {
        /// Path to the deck file.
        deck: PathBuf,
        /// Optional path to the output file. By default, the output is printed to stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Cli = Cli::parse();
    let directory = cli
        .options
        .directory
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let config = load_config(&directory, &cli.options)?;
    match cli.command {
        None => start_review(review_config(cli.deck, directory, config)),
        Some(Command::Review { deck }) => {
            start_review(review_config(deck.or(cli.deck), directory, config))
        }
        Some(Command::Check { deck }) => check_deck(&deck),
        Some(Command::List) => list_decks(&directory, &config.deck_marker),
        Some(Command::Export { deck, output }) => export_deck(&deck, output.as_deref()),
    }
}

/// Read the configuration file, then apply command-line overrides.
fn load_config(directory: &Path, options: &Options) -> Fallible<Config> {
    let mut config = match &options.config {
        Some(path) if !path.exists() => {
            return fail(format!("configuration file {} does not exist.", path.display()));
        }
        Some(path) => Config::load(path)?,
        None => Config::load(&directory.join(CONFIG_FILE_NAME))?,
    };
    if let Some(position_file) = &options.position_file {
        config.position_file = position_file.clone();
    }
    if let Some(flip_advances) = options.flip_advances {
        config.flip_advances = flip_advances;
    }
    Ok(config)
}

fn review_config(deck: Option<PathBuf>, directory: PathBuf, config: Config) -> ReviewConfig {
    ReviewConfig {
        deck,
        position_file: resolve_position_file(&directory, &config.position_file),
        policy: config.flip_policy(),
        frame_interval: config.frame_interval(),
        deck_marker: config.deck_marker,
        directory,
    }
}
