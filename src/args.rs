use clap::{Parser, Subcommand, ValueEnum};
use limited_menu::config::FetcherKind;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "limited-menu")]
#[command(about = "Answers questions about limited-time menu items")]
#[command(version)]
pub struct Args {
    /// Path to JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Fetcher backend (overrides the configuration file)
    #[arg(short, long, value_enum, global = true)]
    pub fetcher: Option<FetcherArg>,

    /// Print replies and items as JSON lines
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the menu categories
    Categories,

    /// Ask about one category, as if the key had been sent to the bot
    Query {
        /// Category key (1-9)
        key: String,
    },

    /// Extract limited items from a saved category page
    Extract {
        /// HTML file to read
        path: PathBuf,
    },

    /// Chat with the bot over stdin/stdout
    Chat {
        /// User id used for mentions
        #[arg(long, default_value_t = 1)]
        user_id: i64,

        /// Display name used for mentions
        #[arg(long, default_value = "ゲスト")]
        name: String,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FetcherArg {
    Http,
    Webdriver,
}

/// Convert from CLI argument fetcher type to internal fetcher type
pub fn convert_fetcher(arg: FetcherArg) -> FetcherKind {
    match arg {
        FetcherArg::Http => FetcherKind::Http,
        FetcherArg::Webdriver => FetcherKind::Webdriver,
    }
}
