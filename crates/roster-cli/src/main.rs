use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use dialoguer::Confirm;
use dotenvy::dotenv;
use roster_cli::seeder::{self, SeedConfig, students::existing_house_ids};
use roster_config::DatabaseConfig;
use roster_db::{PgPool, init_db_pool, run_migrations};

#[derive(Parser)]
#[command(name = "roster-cli")]
#[command(about = "Roster CLI - Database tools for the Roster API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Seed the database with fake houses and students
    Seed {
        /// Number of houses to create
        #[arg(long, default_value = "4")]
        houses: usize,

        /// Number of students per house
        #[arg(short = 's', long, default_value = "25")]
        students: usize,
    },
    /// Seed students into the houses that already exist
    SeedStudents {
        /// Number of students per house
        #[arg(short = 's', long, default_value = "25")]
        students: usize,
    },
    /// Delete every student and house
    Clear {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    let config = DatabaseConfig::from_env()?;
    let pool = init_db_pool(&config)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Migrate => handle_migrate(&pool).await,
        Commands::Seed { houses, students } => {
            let config = SeedConfig {
                houses,
                students_per_house: students,
            };
            seeder::seed_all(&pool, config).await?;
            Ok(())
        }
        Commands::SeedStudents { students } => handle_seed_students(&pool, students).await,
        Commands::Clear { yes } => handle_clear(&pool, yes).await,
    }
}

async fn handle_migrate(pool: &PgPool) -> anyhow::Result<()> {
    run_migrations(pool).await?;
    println!("✅ Migrations applied");
    Ok(())
}

async fn handle_seed_students(pool: &PgPool, students: usize) -> anyhow::Result<()> {
    let house_ids = existing_house_ids(pool).await?;
    if house_ids.is_empty() {
        bail!("No houses found. Run `roster-cli seed` or create houses first.");
    }

    seeder::seed_students(pool, &house_ids, students).await?;
    Ok(())
}

async fn handle_clear(pool: &PgPool, yes: bool) -> anyhow::Result<()> {
    let confirmed = yes
        || Confirm::new()
            .with_prompt("Delete every student and house?")
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;

    if !confirmed {
        println!("Aborted");
        return Ok(());
    }

    seeder::clear_all(pool).await?;
    println!("\n✅ Database cleared");
    Ok(())
}
