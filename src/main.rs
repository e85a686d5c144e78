use anyhow::{Context, Result};
use catalog::InMemoryCatalog;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use meal_planning::{available_preferences, MealPlanner, PlanQuery, PlannerConfig};
use poshan::render;

/// poshan - maternal nutrition planning
#[derive(Parser)]
#[command(name = "poshan")]
#[command(about = "Pregnancy-safe food recommendation and meal planning", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a multi-day meal plan
    Plan {
        /// Number of days to plan (1-30)
        #[arg(long, default_value_t = 7)]
        days: u32,

        /// Current trimester (1-3)
        #[arg(long)]
        trimester: u8,

        /// Diet filter: vegetarian, non-vegetarian, vegan, or any
        #[arg(long)]
        diet: Option<String>,

        /// Regional preference, e.g. "North India"
        #[arg(long)]
        region: Option<String>,

        /// Health condition to avoid (repeat the flag for several)
        #[arg(long = "condition")]
        conditions: Vec<String>,

        /// Seed for reproducible tie-breaking
        #[arg(long)]
        seed: Option<u64>,

        /// Calendar date of day 1 (YYYY-MM-DD), used for display only
        #[arg(long)]
        start_date: Option<String>,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Rank the best-fitting safe foods without scheduling
    Recommend {
        /// Current trimester (1-3)
        #[arg(long)]
        trimester: u8,

        /// Diet filter: vegetarian, non-vegetarian, vegan, or any
        #[arg(long)]
        diet: Option<String>,

        /// Regional preference
        #[arg(long)]
        region: Option<String>,

        /// Health condition to avoid (repeat the flag for several)
        #[arg(long = "condition")]
        conditions: Vec<String>,

        /// Maximum number of recommendations
        #[arg(long, default_value_t = 10)]
        count: usize,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// List regions, diet types and the day range the catalog supports
    Preferences {
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = poshan::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    poshan::observability::init_observability(&config.observability.log_level)?;

    let catalog = load_catalog(&config.catalog.path)?;
    let planner = MealPlanner::new(PlannerConfig {
        cooldown_window: config.planner.cooldown_window,
        ..PlannerConfig::default()
    });

    match cli.command {
        Commands::Plan {
            days,
            trimester,
            diet,
            region,
            conditions,
            seed,
            start_date,
            format,
        } => {
            let query = build_query(days, trimester, diet, region, conditions, seed)?;
            let start_date = parse_start_date(start_date)?;
            let plan = planner.generate(&catalog, &query)?;
            match format {
                OutputFormat::Table => {
                    print!("{}", render::plan_table(&plan, &catalog, start_date));
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
            }
        }
        Commands::Recommend {
            trimester,
            diet,
            region,
            conditions,
            count,
            format,
        } => {
            let query = build_query(1, trimester, diet, region, conditions, None)?;
            let ranked = planner.recommend(&catalog, &query, count)?;
            match format {
                OutputFormat::Table => {
                    print!("{}", render::recommendations_table(&ranked, &catalog));
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ranked)?),
            }
        }
        Commands::Preferences { format } => {
            let prefs = available_preferences(&catalog);
            match format {
                OutputFormat::Table => print!("{}", render::preferences_table(&prefs)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&prefs)?),
            }
        }
    }

    Ok(())
}

fn load_catalog(path: &str) -> Result<InMemoryCatalog> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file {path}"))?;
    let catalog = InMemoryCatalog::from_json_str(&json)
        .with_context(|| format!("failed to load catalog from {path}"))?;
    tracing::info!(path, items = catalog.len(), "catalog loaded");
    Ok(catalog)
}

fn build_query(
    days: u32,
    trimester: u8,
    diet: Option<String>,
    region: Option<String>,
    conditions: Vec<String>,
    seed: Option<u64>,
) -> Result<PlanQuery> {
    let trimester = PlanQuery::parse_trimester(trimester)?;
    let diet = match diet {
        Some(tag) => PlanQuery::parse_diet(&tag)?,
        None => None,
    };

    let mut query = PlanQuery::new(days, trimester);
    query.diet = diet;
    query.region = region.filter(|r| !r.trim().is_empty() && !r.eq_ignore_ascii_case("any"));
    query.seed = seed;
    for condition in conditions {
        query = query.with_health_condition(condition);
    }
    Ok(query)
}

fn parse_start_date(value: Option<String>) -> Result<Option<NaiveDate>> {
    match value {
        Some(s) => {
            let date = NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                .with_context(|| format!("invalid start date {s}, expected YYYY-MM-DD"))?;
            Ok(Some(date))
        }
        None => Ok(None),
    }
}
