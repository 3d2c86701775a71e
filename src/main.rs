use clap::{Parser, Subcommand};
use recipe_mosaic::config::{self, FeedConfig};
use recipe_mosaic::session::{self, FeedSession};
use recipe_mosaic::{LayoutMode, MaxGroups, Strategy, input, output};
use std::path::PathBuf;
use tracing::Level;

/// Feed shape overrides shared by commands that pack results.
#[derive(clap::Args, Clone)]
struct FeedArgs {
    /// Screen class to shape groups for (overrides config)
    #[arg(long, value_enum)]
    layout: Option<LayoutMode>,

    /// Packing strategy (overrides config)
    #[arg(long, value_enum)]
    strategy: Option<Strategy>,

    /// Group limit: a positive count or "unlimited" (overrides config)
    #[arg(long)]
    max_groups: Option<MaxGroups>,

    /// Results per page (overrides config)
    #[arg(long)]
    page_size: Option<usize>,
}

impl FeedArgs {
    fn apply(&self, mut config: FeedConfig) -> Result<FeedConfig, config::ConfigError> {
        if let Some(layout) = self.layout {
            config.layout = layout;
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(max_groups) = self.max_groups {
            config.max_groups = max_groups;
        }
        if let Some(page_size) = self.page_size {
            config.paging.page_size = page_size;
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Parser)]
#[command(name = "recipe-mosaic")]
#[command(about = "Pack a paginated recipe feed into display groups")]
#[command(long_about = "\
Pack a paginated recipe feed into display groups

Results are fed into the packer one page at a time, the way a search screen
receives them. Masonry feeds (strategy \"simple\") cycle through shapes:

  wide:    left(5) -> row3(3) -> right(5) -> left(5) ...
  narrow:  single(1) -> row2(2) -> single(1) ...

A group opens only when it can be filled, except at end of stream, where the
leftovers form a short final group. Category rails use one shape throughout:
row4 (wide) or row2 (narrow).

Settings are read from mosaic.toml in --config-dir; run 'recipe-mosaic
gen-config' for a documented template.")]
#[command(version)]
struct Cli {
    /// Directory holding mosaic.toml
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    /// Log packing decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Page a recipe list through the packer and print the groups
    Pack {
        /// File of recipe ids: JSON array, or one per line
        #[arg(long, conflicts_with = "count")]
        items: Option<PathBuf>,

        /// Generate this many synthetic recipe ids instead of reading a file
        #[arg(long, default_value_t = 24)]
        count: usize,

        /// Print the final groups as JSON instead of a tree
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        feed: FeedArgs,
    },
    /// Print every group shape with its capacity and successor
    Shapes,
    /// Print a stock mosaic.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Pack {
            items,
            count,
            json,
            feed,
        } => {
            let config = feed.apply(config::load_config(&cli.config_dir)?)?;
            let results = match items {
                Some(path) => input::load_items(&path)?,
                None => input::generated_items(count),
            };
            tracing::info!(
                results = results.len(),
                layout = ?config.layout,
                strategy = ?config.strategy,
                max_groups = %config.max_groups,
                "packing feed"
            );

            let mut feed_session = FeedSession::new(config.adder());
            session::run_feed(
                &mut feed_session,
                &results,
                config.paging.page_size,
                |event| {
                    if !json {
                        println!("{}", output::format_feed_event(event));
                    }
                },
            );

            if json {
                println!("{}", serde_json::to_string_pretty(feed_session.groups())?);
            } else {
                output::print_pack_output(feed_session.groups(), results.len());
            }
        }
        Command::Shapes => output::print_shape_table(),
        Command::GenConfig => print!("{}", config::stock_config_toml()),
    }

    Ok(())
}

/// Install the stderr log subscriber. Warnings only unless `--verbose`.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
