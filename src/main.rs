use clap::{Args, Parser, Subcommand};
use outfit_agent::catalog::Catalog;
use outfit_agent::config::AppConfig;
use outfit_agent::error::AppError;
use outfit_agent::recommend::{self, prompts, render, Preferences, Requirements};
use outfit_agent::telemetry;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Outfit Agent",
    about = "Assemble and rank outfit recommendations from a clothing catalog",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate ranked outfit recommendations for a free-text request
    Recommend(RecommendArgs),
    /// List example prompts to try
    Prompts,
    /// Summarize the loaded catalog
    Catalog(CatalogArgs),
}

#[derive(Args, Debug)]
struct RecommendArgs {
    /// Free-text description of the outfit needs
    text: String,
    /// Override the configured catalog path
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Maximum number of outfits to assemble
    #[arg(long)]
    max_outfits: Option<usize>,
    /// Emit machine-readable JSON instead of the text report
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct CatalogArgs {
    /// Override the configured catalog path
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct RecommendResponse {
    query: String,
    requirements: Requirements,
    preferences: Preferences,
    outfits: Vec<render::OutfitView>,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Recommend(args) => run_recommend(&config, args),
        Command::Prompts => {
            run_prompts();
            Ok(())
        }
        Command::Catalog(args) => run_catalog_info(&config, args),
    }
}

fn run_recommend(config: &AppConfig, args: RecommendArgs) -> Result<(), AppError> {
    let catalog_path = args.catalog.unwrap_or_else(|| config.catalog.path.clone());
    let max_outfits = args.max_outfits.unwrap_or(config.recommender.max_outfits);

    let catalog = Catalog::from_path(&catalog_path)?;
    info!(
        catalog = %catalog_path.display(),
        items = catalog.get_all_items().len(),
        max_outfits,
        "generating outfit recommendations"
    );

    let recommendation = recommend::recommend(&catalog, &args.text, max_outfits);

    if args.json {
        let response = RecommendResponse {
            query: args.text,
            outfits: recommendation
                .outfits
                .iter()
                .map(|outfit| outfit.to_view())
                .collect(),
            requirements: recommendation.requirements,
            preferences: recommendation.preferences,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    render_recommendation_report(&args.text, &recommendation);
    Ok(())
}

fn render_recommendation_report(query: &str, recommendation: &recommend::Recommendation<'_>) {
    println!("Outfit recommendations");
    println!("Request: {query}");

    let requirements = &recommendation.requirements;
    let mut extracted: Vec<String> = Vec::new();
    if !requirements.occasion.is_empty() {
        extracted.push(format!("occasion {}", requirements.occasion));
    }
    if !requirements.seasonality.is_empty() {
        extracted.push(format!("season {}", requirements.seasonality));
    }
    if let Some(min_warmth) = requirements.min_warmth {
        extracted.push(format!("min warmth {min_warmth}/5"));
    }
    if let Some(target) = requirements.formality_target {
        extracted.push(format!("formality target {target}/5"));
    }
    if let Some(budget) = requirements.budget {
        let min = budget.min.map_or("-".to_string(), |v| format!("${v:.0}"));
        let max = budget.max.map_or("-".to_string(), |v| format!("${v:.0}"));
        extracted.push(format!("budget {min}..{max}"));
    }
    if extracted.is_empty() {
        println!("Understood as: no specific constraints");
    } else {
        println!("Understood as: {}", extracted.join(", "));
    }

    if recommendation.outfits.is_empty() {
        println!("\nNo outfits could be assembled from the current catalog.");
        return;
    }

    for outfit in &recommendation.outfits {
        println!("\n{}", render::render_outfit_summary(outfit));
        println!(
            "{}",
            render::render_outfit_description(outfit, Some(requirements))
        );
    }
}

fn run_prompts() {
    println!("Example prompts");
    for prompt in prompts::demo_prompts() {
        println!("- {prompt}");
    }
}

fn run_catalog_info(config: &AppConfig, args: CatalogArgs) -> Result<(), AppError> {
    let catalog_path = args.catalog.unwrap_or_else(|| config.catalog.path.clone());
    let catalog = Catalog::from_path(&catalog_path)?;

    println!("Catalog: {}", catalog_path.display());
    println!("Total items: {}", catalog.get_all_items().len());

    let categories = catalog.categories();
    if categories.is_empty() {
        println!("Categories: none");
    } else {
        println!("Categories");
        for category in categories {
            println!(
                "- {category}: {} item(s)",
                catalog.get_items_by_category(&category).len()
            );
        }
    }

    Ok(())
}
