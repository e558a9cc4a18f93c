use cata::view::SortOrder;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "cata")]
#[command(version)]
#[command(about = "A command-line tasting journal for specialty coffee", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum SortArg {
    #[default]
    Newest,
    Oldest,
    Rating,
    Name,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Newest => SortOrder::Newest,
            SortArg::Oldest => SortOrder::Oldest,
            SortArg::Rating => SortOrder::Rating,
            SortArg::Name => SortOrder::Name,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log a new tasting record
    #[command(alias = "a")]
    Add {
        /// Coffee name / variety
        name: String,

        #[arg(short, long)]
        origin: String,

        #[arg(short, long)]
        roaster: String,

        /// Harvest year
        #[arg(short, long)]
        year: i32,

        /// Rating, 1 to 5 (fractions allowed)
        #[arg(long)]
        rating: f32,

        /// Tasting notes
        #[arg(short, long)]
        notes: String,

        /// Brew recipe
        #[arg(long)]
        recipe: Option<String>,

        /// Image URL
        #[arg(long)]
        image_url: Option<String>,
    },

    /// List records, optionally filtered and sorted
    #[command(alias = "ls")]
    List {
        /// Match against name or notes (case-insensitive)
        #[arg(short, long, default_value = "")]
        search: String,

        /// Filter by origin (substring)
        #[arg(short, long, default_value = "")]
        origin: String,

        /// Filter by roaster (substring)
        #[arg(short, long, default_value = "")]
        roaster: String,

        /// Filter by exact harvest year
        #[arg(short, long, default_value = "")]
        year: String,

        #[arg(long, value_enum, default_value_t = SortArg::Newest)]
        sort: SortArg,
    },

    /// Show one record in full, including the tasting insight
    #[command(alias = "v")]
    Show {
        /// Record id or unique id prefix
        id: String,
    },

    /// Edit a record; omitted flags keep their current value
    #[command(alias = "e")]
    Edit {
        /// Record id or unique id prefix
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(short, long)]
        origin: Option<String>,

        #[arg(short, long)]
        roaster: Option<String>,

        #[arg(short, long)]
        year: Option<i32>,

        #[arg(long)]
        rating: Option<f32>,

        #[arg(short, long)]
        notes: Option<String>,

        #[arg(long)]
        recipe: Option<String>,

        #[arg(long)]
        image_url: Option<String>,
    },

    /// Toggle a record's favorite flag
    #[command(alias = "f")]
    Fav {
        /// Record id or unique id prefix
        id: String,
    },

    /// Delete a record
    #[command(alias = "rm")]
    Delete {
        /// Record id or unique id prefix
        id: String,
    },

    /// One-time import of the 2021 tasting archive
    Import,

    /// Print a shareable card for a record
    Share {
        /// Record id or unique id prefix
        id: String,

        /// Copy the card to the clipboard
        #[arg(long)]
        copy: bool,

        /// Print a WhatsApp link instead
        #[arg(long)]
        whatsapp: bool,
    },

    /// Print the known origins, roasters, and harvest years
    Facets,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., insights-model)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
