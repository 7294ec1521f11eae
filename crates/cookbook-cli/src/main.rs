use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use sqlx::PgPool;

use cookbook_cli::admin::{NewAdmin, create_admin};
use cookbook_cli::seeder::{self, CatalogueSize, SeedConfig};

#[derive(Parser)]
#[command(name = "cookbook-cli")]
#[command(about = "Cookbook CLI - Administrative tools for the Cookbook API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account holding the admin and user roles
    CreateAdmin {
        #[arg(short = 'f', long)]
        forename: Option<String>,

        #[arg(short = 's', long)]
        surname: Option<String>,

        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the database with fake users, recipes, cookbooks and categories
    Seed {
        /// Number of users to create
        #[arg(short = 'u', long, default_value = "20")]
        users: usize,

        #[arg(long, default_value = "12")]
        categories: usize,

        #[arg(long, default_value = "5")]
        recipes_per_user: usize,

        #[arg(long, default_value = "6")]
        ingredients_per_recipe: usize,

        #[arg(long, default_value = "2")]
        cookbooks_per_user: usize,
    },
    /// Delete seeded users (and everything they own) and seeded categories
    ClearSeed,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("\n❌ {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let pool = connect().await?;

    match cli.command {
        Commands::CreateAdmin {
            forename,
            surname,
            email,
            password,
        } => handle_create_admin(&pool, forename, surname, email, password).await,
        Commands::Seed {
            users,
            categories,
            recipes_per_user,
            ingredients_per_recipe,
            cookbooks_per_user,
        } => {
            let config = SeedConfig::new(users).with_catalogue(CatalogueSize {
                categories,
                recipes_per_user,
                ingredients_per_recipe,
                cookbooks_per_user,
                ..Default::default()
            });
            seeder::seed_all(&pool, config).await
        }
        Commands::ClearSeed => seeder::clear_all(&pool).await,
    }
}

async fn connect() -> anyhow::Result<PgPool> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .context("Failed to connect to database")
}

fn prompt(value: Option<String>, label: &str) -> anyhow::Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Input::new()
            .with_prompt(label)
            .interact_text()
            .with_context(|| format!("Failed to read {}", label.to_lowercase())),
    }
}

async fn handle_create_admin(
    pool: &PgPool,
    forename: Option<String>,
    surname: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let forename = prompt(forename, "Forename")?;
    let surname = prompt(surname, "Surname")?;
    let email = prompt(email, "Email address")?;
    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .context("Failed to read password")?,
    };

    let admin = NewAdmin {
        forename,
        surname,
        email,
        password,
    };
    let id = create_admin(pool, admin).await?;

    println!("\n✅ Admin created successfully!");
    println!("   Id: {id}");
    Ok(())
}
