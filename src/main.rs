use clap::{Parser, Subcommand};
use log::debug;

use mealdb_diet::{
    classify_diet, BrowserConfig, Course, DietLabel, MealBrowser, MealDbClient, MealSource,
    TaggedMeal,
};

#[derive(Parser, Debug)]
#[command(name = "mealdb-diet")]
#[command(about = "Browse TheMealDB recipes tagged as vegan, vegetarian or regular", long_about = None)]
struct Cli {
    /// API root to query instead of TheMealDB
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify a list of ingredient names
    Classify {
        /// Ingredient names, e.g. "chicken breast" salt pepper
        #[arg(required = true)]
        ingredients: Vec<String>,
    },

    /// List a category with each meal's diet label
    Browse {
        /// Course preset (breakfast, dinner)
        #[arg(long, conflicts_with = "category")]
        course: Option<Course>,

        /// TheMealDB category name
        #[arg(short, long)]
        category: Option<String>,

        /// Only show meals with this diet (regular, vegetarian, vegan)
        #[arg(short, long)]
        diet: Option<DietLabel>,
    },

    /// Show the detail view of one meal
    Show {
        /// TheMealDB meal id
        id: String,
    },

    /// List available categories
    Categories,
}

fn load_config(cli: &Cli) -> Result<BrowserConfig, Box<dyn std::error::Error>> {
    let mut config = BrowserConfig::load()?;
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.timeout = timeout;
    }
    debug!("{:?}", config);
    Ok(config)
}

/// Heading over a browse listing, e.g. "Breakfast: Vegetarian"
fn browse_header(category: &str, diet: Option<DietLabel>) -> String {
    match diet {
        Some(diet) => format!("{}: {}", category, diet.display_name()),
        None => format!("{}: All diets", category),
    }
}

fn summary_line(tagged: &TaggedMeal) -> String {
    let mut line = format!(
        "{} | Diet: {}",
        tagged.meal.name,
        tagged.diet.as_str().to_uppercase()
    );
    if let Some(area) = &tagged.meal.area {
        line.push_str(&format!(" | Origin: {}", area));
    }
    line
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Classify { ingredients } => {
            let normalized: Vec<String> = ingredients
                .iter()
                .map(|i| i.trim().to_lowercase())
                .filter(|i| !i.is_empty())
                .collect();
            println!("{}", classify_diet(&normalized));
        }
        Commands::Browse {
            course,
            category,
            diet,
        } => {
            let category = match (course, category) {
                (Some(course), _) => course.category().to_string(),
                (None, Some(category)) => category.clone(),
                (None, None) => Course::Breakfast.category().to_string(),
            };

            let mut builder = MealBrowser::builder()
                .config(config.clone())
                .category(category);
            if let Some(diet) = diet {
                builder = builder.diet(*diet);
            }

            let result = builder.build().await?;
            println!("{}", browse_header(&result.category, result.diet));
            if result.meals.is_empty() {
                let diet = result.diet.map(|d| d.as_str()).unwrap_or("matching");
                println!("No {} {} recipes found.", diet, result.category.to_lowercase());
            }
            for tagged in &result.meals {
                println!("{}", summary_line(tagged));
            }
        }
        Commands::Show { id } => {
            let client = MealDbClient::new(&config)?;
            let meal = client
                .lookup_meal(id)
                .await?
                .ok_or_else(|| format!("No meal found with id {}", id))?;
            let tagged = TaggedMeal::from_meal(meal);
            println!("{}", tagged.meal.to_detail_text());
            println!("Diet: {}", tagged.diet.as_str().to_uppercase());
        }
        Commands::Categories => {
            let client = MealDbClient::new(&config)?;
            for category in client.list_categories().await? {
                println!("{}", category.name);
            }
        }
    }

    Ok(())
}
