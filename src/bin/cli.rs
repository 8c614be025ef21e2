//! Recipe Book CLI
//!
//! Command-line interface for the remote recipe collection:
//! - List recipes
//! - Add, edit and delete recipes
//! - Work the add/edit form interactively
//! - Generate a config file

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use recipe_book::config::{generate_default_config, Config};
use recipe_book::logging::init_logging;
use recipe_book::shell::{self, Flow};
use recipe_book::{FormField, RecipeClient, RecipeId, RecipeManager, Submitted};

#[derive(Parser)]
#[command(name = "recipes")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Manage the recipes stored behind a REST service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/recipe-book/config.toml, then ./recipes.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Recipe service base URL, overrides the config file
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format for `list`
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Recipe cards, as on the page
    Text,
    /// The fetched records as JSON
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all recipes
    List,

    /// Add a recipe
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Edit a recipe; fields not given keep their current value
    Edit {
        /// Recipe id
        id: RecipeId,
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete a recipe
    Delete {
        /// Recipe id
        id: RecipeId,
    },

    /// Work the recipe form interactively
    Form,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Form inputs settable from the command line
#[derive(Args, Default)]
pub struct FieldArgs {
    #[arg(long)]
    pub name: Option<String>,
    /// Image URL
    #[arg(long)]
    pub image: Option<String>,
    /// Preparation time, free text
    #[arg(long)]
    pub time: Option<String>,
    #[arg(long)]
    pub rating: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    /// Recipe source URL
    #[arg(long)]
    pub url: Option<String>,
    #[arg(long)]
    pub review: Option<String>,
    #[arg(long)]
    pub author: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Comma-separated ingredients
    #[arg(long)]
    pub ingredients: Option<String>,
    /// Comma-separated method steps
    #[arg(long)]
    pub method: Option<String>,
}

impl FieldArgs {
    fn into_edits(self) -> Vec<(FormField, String)> {
        [
            (FormField::Name, self.name),
            (FormField::Image, self.image),
            (FormField::Time, self.time),
            (FormField::Rating, self.rating),
            (FormField::Category, self.category),
            (FormField::Url, self.url),
            (FormField::Review, self.review),
            (FormField::Author, self.author),
            (FormField::Description, self.description),
            (FormField::Ingredients, self.ingredients),
            (FormField::Method, self.method),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        let config = generate_default_config();
        match output {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, &config)?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", config),
        }
        return Ok(());
    }

    let (mut config, warnings) = match &cli.config {
        Some(path) => (Config::load_with_env(path)?, Vec::new()),
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    init_logging(&config.logging);
    for warning in warnings {
        tracing::warn!("{}", warning);
    }
    tracing::debug!(base_url = %config.api.base_url, "Using recipe service");

    let client = RecipeClient::new(config.api.client_config())?;
    let mut manager = RecipeManager::new(client);

    match cli.command {
        Commands::List => {
            manager.list().await.context("Failed to fetch recipes")?;
            print_recipes(&manager, cli.format)?;
        }

        Commands::Add { fields } => {
            for (field, value) in fields.into_edits() {
                manager.set_field(field, value);
            }
            let recipe = manager.create().await.context("Failed to add recipe")?;
            println!("Added recipe {} ({})", recipe.id, recipe.name);
        }

        Commands::Edit { id, fields } => {
            manager.list().await.context("Failed to fetch recipes")?;
            if manager.select(&id).is_none() {
                anyhow::bail!("No recipe with id {}", id);
            }
            for (field, value) in fields.into_edits() {
                manager.set_field(field, value);
            }
            match manager.submit().await.context("Failed to update recipe")? {
                Submitted::Updated(recipe) | Submitted::Created(recipe) => {
                    println!("Updated recipe {} ({})", recipe.id, recipe.name)
                }
            }
        }

        Commands::Delete { id } => {
            manager.delete(&id).await.context("Failed to delete recipe")?;
            println!("Deleted recipe {}", id);
        }

        Commands::Form => run_form(&mut manager).await?,

        Commands::Config { .. } => {}
    }

    Ok(())
}

fn print_recipes(manager: &RecipeManager<RecipeClient>, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(manager.recipes())?),
        OutputFormat::Text => {
            println!("{}", recipe_book::view::PAGE_TITLE);
            println!();
            print!("{}", recipe_book::view::render_list(manager.recipes()));
        }
    }
    Ok(())
}

async fn run_form(manager: &mut RecipeManager<RecipeClient>) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    writeln!(stdout, "{}", recipe_book::view::PAGE_TITLE)?;
    // The list is fetched once on start, like the page load
    shell::execute(manager, shell::Command::List, &mut stdout).await?;
    writeln!(stdout, "Type 'help' for commands.")?;

    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "recipes> ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;

        match shell::parse(&line) {
            Ok(command) => {
                if shell::execute(manager, command, &mut stdout).await? == Flow::Quit {
                    break;
                }
            }
            Err(message) => writeln!(stdout, "{}", message)?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_flag() {
        let cli = Cli::try_parse_from(["recipes", "list"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Text);

        let cli = Cli::try_parse_from(["recipes", "--format", "json", "list"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);

        assert!(Cli::try_parse_from(["recipes", "-f", "table", "list"]).is_err());
    }
}
