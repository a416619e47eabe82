use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use pokedex::catalog::{default_regions, Pokemon, ALL_REGIONS};
use pokedex::config::Config;
use pokedex::logging::init_tracing;
use pokedex::store::PokedexStore;

#[derive(Parser, Debug)]
#[command(
    name = "pokedex",
    version,
    about = "Browse the Pokémon catalog by region, name or number"
)]
struct Cli {
    /// Path to config file (defaults to ~/.config/pokedex/config.toml)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Override the API root URL
    #[arg(long, value_name = "URL", global = true)]
    base_url: Option<String>,

    /// Override the maximum number of records fetched
    #[arg(long, value_name = "N", global = true)]
    limit: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one page of the filtered catalog
    List {
        /// Region name, or "all"
        #[arg(long, default_value = ALL_REGIONS)]
        region: String,

        /// Name substring or exact number
        #[arg(long, default_value = "")]
        search: String,

        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Print a single entry by number
    Show { id: u32 },
    /// Print the region table
    Regions,
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(err) = run(Cli::parse()).await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if let Command::Regions = cli.command {
        for region in default_regions() {
            println!(
                "{:<8} {:>4}-{:<4} {}",
                region.name,
                region.offset + 1,
                region.end(),
                region.url
            );
        }
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    if let Some(limit) = cli.limit {
        config.api.limit = limit;
    }
    config.validate()?;

    let mut store = PokedexStore::new(&config.api)?;
    store.fetch_all_pokemon().await;
    if let Some(message) = store.state().error() {
        bail!("{}", message);
    }

    match cli.command {
        Command::List {
            region,
            search,
            page,
        } => {
            store.set_region_filter(region);
            store.set_search_query(search);
            store.set_page(page);

            let state = store.state();
            for pokemon in state.displayed_pokemon() {
                print_row(pokemon);
            }
            println!(
                "Page {}/{} ({} matching of {})",
                state.current_page(),
                state.total_pages(),
                state.filtered_pokemon().len(),
                state.all_pokemon().len()
            );
        }
        Command::Show { id } => {
            let Some(pokemon) = store.state().find_pokemon(id) else {
                bail!("Pokémon #{} not found", id);
            };
            print_row(pokemon);
            println!("{}", pokemon.url);
        }
        Command::Regions => {}
    }

    Ok(())
}

fn print_row(pokemon: &Pokemon) {
    println!("#{:>4} {}", pokemon.id, pokemon.name);
}
