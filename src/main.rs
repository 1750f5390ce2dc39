mod cli;
mod color;
mod utils;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use cli::{
    find::find_cmd,
    list::list_cmd,
    show::{default_cmd, show_cmd},
    suggest::suggest_cmd,
    ColorMode, Context,
};
use omnai::{CostTier, QualityTier, SpeedTier};

#[derive(Default, Clone, Copy, ValueEnum, strum_macros::Display, strum_macros::EnumString)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum RequestedColorMode {
    #[default]
    Auto,
    On,
    Off,
}

#[derive(Parser)]
#[command(name = "omnai")]
#[command(about = "Look up, search, and validate AI model configurations", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(long, default_value_t = RequestedColorMode::default())]
    color: RequestedColorMode,
    /// Read the configuration from the specified file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Increase the logging verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List models or engines
    List(ListArgs),
    /// Search for models matching every given criterion
    Find(FindArgs),
    /// Show a model, suggesting similar models if it does not exist
    Show(ShowArgs),
    /// Suggest models with identifiers resembling a query
    Suggest(SuggestArgs),
    /// Print the default model of an engine
    Default(DefaultArgs),
}

/// Possible listings
#[derive(Subcommand)]
pub(crate) enum ListObject {
    /// Registered models
    Models(ListModelArgs),
    /// Engines
    Engines,
}

/// Output formats
#[derive(ValueEnum, Default, Clone, Copy, strum_macros::Display, strum_macros::EnumString)]
#[strum(serialize_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub(crate) enum ListingFormat {
    /// Format the output as a table
    #[default]
    Table,
    /// Format the output as JSON
    Json,
    /// Format the output as a table without a header
    HeaderlessTable,
}

#[derive(Parser)]
pub(crate) struct ListArgs {
    /// Output the listing with the specified format
    #[arg(short, long, default_value_t = ListingFormat::default())]
    format: ListingFormat,
    /// List the specified object
    #[command(subcommand)]
    object: ListObject,
}

#[derive(Parser, Default)]
pub(crate) struct ListModelArgs {
    /// Limit listing to the specified engine
    #[arg(short, long)]
    engine: Option<String>,
    /// Only list models added through the configuration
    #[arg(long)]
    custom: bool,
}

#[derive(Parser, Default)]
pub(crate) struct FindArgs {
    /// Output the results with the specified format
    #[arg(short, long, default_value_t = ListingFormat::default())]
    format: ListingFormat,
    /// Accept models in this cost tier
    #[arg(long, value_delimiter = ',')]
    cost: Vec<CostTier>,
    /// Accept models in this speed tier
    #[arg(long, value_delimiter = ',')]
    speed: Vec<SpeedTier>,
    /// Accept models in this quality tier
    #[arg(long, value_delimiter = ',')]
    quality: Vec<QualityTier>,
    /// Accept models recommended for this use case
    #[arg(long, value_delimiter = ',')]
    best_for: Vec<String>,
    /// Require models with (true) or without (false) a free tier
    #[arg(long)]
    free_tier: Option<bool>,
    /// Accept models served by this engine
    #[arg(short, long, value_delimiter = ',')]
    engine: Vec<String>,
}

#[derive(Parser)]
pub(crate) struct ShowArgs {
    /// Output the model with the specified format
    #[arg(short, long, default_value_t = ListingFormat::default())]
    format: ListingFormat,
    /// Require the model to be served by this engine
    #[arg(short, long)]
    engine: Option<String>,
    /// Model identifier
    id: String,
}

#[derive(Parser)]
pub(crate) struct SuggestArgs {
    /// Output the suggestions with the specified format
    #[arg(short, long, default_value_t = ListingFormat::default())]
    format: ListingFormat,
    /// Limit suggestions to the specified engine
    #[arg(short, long)]
    engine: Option<String>,
    /// Maximum number of suggestions
    #[arg(short, long)]
    limit: Option<usize>,
    /// Partial or misspelled model identifier
    query: String,
}

#[derive(Parser)]
pub(crate) struct DefaultArgs {
    /// Engine identifier or alias
    engine: String,
}

fn main() {
    let cli = Cli::parse();

    let color = ColorMode::resolve_auto(cli.color);

    color::configure_color(color);
    utils::logging::setup_tracing(cli.verbose, color);

    let ctx = Context::load(cli.config);

    match &cli.command {
        Commands::List(args) => list_cmd(&ctx, args),
        Commands::Find(args) => find_cmd(&ctx, args),
        Commands::Show(args) => show_cmd(&ctx, args),
        Commands::Suggest(args) => suggest_cmd(&ctx, args),
        Commands::Default(args) => default_cmd(&ctx, args),
    }
}
