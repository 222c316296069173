use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use shelfwise_core::{Grader, top_n};
use shelfwise_ingest::{load_keyword_dir, parse_inventory};
use std::path::PathBuf;

mod config;
mod display;
mod logging;
mod prompt;
mod state;

use config::{Config, init_config, load_config};
use display::{Report, render_catalog, render_json, render_results};
use prompt::{Console, Preset, collect_criteria};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SHELFWISE_BUILD_SHA"), ")");

#[derive(Parser, Debug)]
#[command(name = "shelfwise", version = VERSION, about = "Bookstore recommender")]
struct Cli {
    /// Log filter used when SHELFWISE_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Config file (default: ~/.shelfwise/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask for your preferences and rank the catalog
    Recommend {
        #[command(flatten)]
        sources: Sources,

        /// Number of books to show (default from config, else 5)
        #[arg(long)]
        top: Option<usize>,

        #[arg(long)]
        age: Option<u32>,

        /// Maximum price in US $
        #[arg(long)]
        max_price: Option<f64>,

        /// man, woman or other
        #[arg(long)]
        gender: Option<String>,

        /// Free-text description of what you are looking for
        #[arg(long)]
        interests: Option<String>,

        /// Print a JSON report instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the inventory without grading it
    Catalog {
        #[command(flatten)]
        sources: Sources,
    },

    /// Write a default ~/.shelfwise/config.toml
    InitConfig,
}

#[derive(clap::Args, Debug)]
struct Sources {
    /// Semicolon-separated inventory file
    #[arg(long)]
    inventory: Option<PathBuf>,

    /// Directory with the <Genre>_Keywords.txt files
    #[arg(long)]
    keywords_dir: Option<PathBuf>,
}

impl Sources {
    fn apply(self, cfg: &mut Config) {
        if let Some(p) = self.inventory {
            cfg.catalog.inventory = p;
        }
        if let Some(p) = self.keywords_dir {
            cfg.catalog.keywords_dir = p;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    match cli.command {
        Command::InitConfig => init_config()?,

        Command::Catalog { sources } => {
            let mut cfg = load_config(cli.config.as_deref())?;
            sources.apply(&mut cfg);
            let books = load_books(&cfg)?;
            println!("{} books in {}\n", books.len(), cfg.catalog.inventory.display());
            println!("{}", render_catalog(&books));
        }

        Command::Recommend {
            sources,
            top,
            age,
            max_price,
            gender,
            interests,
            json,
        } => {
            let mut cfg = load_config(cli.config.as_deref())?;
            sources.apply(&mut cfg);
            if let Some(n) = top {
                cfg.ranking.top_n = n;
            }
            let preset = Preset {
                age,
                max_price,
                gender,
                interests,
            };
            recommend(&cfg, &preset, json)?;
        }
    }

    Ok(())
}

fn load_books(cfg: &Config) -> Result<Vec<shelfwise_core::Book>> {
    let path = &cfg.catalog.inventory;
    if !path.exists() {
        bail!("inventory not found: {} (pass --inventory <path>)", path.display());
    }
    parse_inventory(path).with_context(|| format!("parsing {}", path.display()))
}

fn recommend(cfg: &Config, preset: &Preset, json: bool) -> Result<()> {
    let mut books = load_books(cfg)?;
    let keywords = load_keyword_dir(&cfg.catalog.keywords_dir)
        .with_context(|| format!("loading keywords from {}", cfg.catalog.keywords_dir.display()))?;

    // Prompts move to stderr when stdout carries the JSON report.
    let mut console = Console::stdio(json);
    if !json {
        console.say("Welcome to the bookstore! Tell me a bit about yourself and I'll find a book for you.\n")?;
    }
    let criteria = collect_criteria(&mut console, preset)?;
    tracing::info!(age = criteria.age, max_price = criteria.max_price, "criteria collected");

    let mut grader = Grader::new(&keywords, &mut console).with_matcher(cfg.matching.matcher());
    grader
        .grade_all(&mut books, &criteria)
        .context("grading stopped: input closed")?;
    let summary = grader.finish();
    let results = top_n(&books, cfg.ranking.top_n);

    if json {
        let report = Report {
            generated_at_utc: chrono::Utc::now().to_rfc3339(),
            criteria: &criteria,
            session: &summary.session,
            recommendations: &summary.recommendations,
            results: &results,
        };
        println!("{}", render_json(&report)?);
        return Ok(());
    }

    for r in &summary.recommendations {
        println!("{r}");
    }
    println!("\nThe {} most suitable books for you are:", results.len());
    println!("{}", render_results(&results));
    Ok(())
}
