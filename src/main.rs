//! Kavholm Admin CLI

use std::process;

use clap::{Args, Parser, Subcommand};
use kavholm_app::{
    database::{self, Db},
    domain::{
        listings::{ListingsService, PgListingsService, data::NewListing, records::ListingUuid},
        users::{PgUsersService, UsersService, data::NewUser, records::UserUuid},
    },
};

#[derive(Debug, Parser)]
#[command(name = "kavholm-app", about = "Kavholm admin CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Database maintenance
    Db(DbCommand),
    /// User administration
    User(UserCommand),
    /// Listing administration
    Listing(ListingCommand),
}

#[derive(Debug, Args)]
struct DbCommand {
    #[command(subcommand)]
    command: DbSubcommand,
}

#[derive(Debug, Subcommand)]
enum DbSubcommand {
    /// Apply pending migrations
    Migrate(DatabaseArgs),
}

#[derive(Debug, Args)]
struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Debug, Subcommand)]
enum UserSubcommand {
    Create(CreateUserArgs),
}

#[derive(Debug, Args)]
struct CreateUserArgs {
    /// Unique username
    #[arg(long)]
    username: String,

    #[command(flatten)]
    database: DatabaseArgs,
}

#[derive(Debug, Args)]
struct ListingCommand {
    #[command(subcommand)]
    command: ListingSubcommand,
}

#[derive(Debug, Subcommand)]
enum ListingSubcommand {
    Create(CreateListingArgs),
}

#[derive(Debug, Args)]
struct CreateListingArgs {
    /// Username of the hosting user
    #[arg(long)]
    host: String,

    /// Nightly price in minor currency units
    #[arg(long)]
    price: u64,

    #[command(flatten)]
    database: DatabaseArgs,
}

#[derive(Debug, Args)]
struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Db(DbCommand {
            command: DbSubcommand::Migrate(args),
        }) => {
            let pool = database::connect(&args.database_url)
                .await
                .map_err(|e| e.to_string())?;

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .map_err(|e| e.to_string())?;

            println!("migrations applied");
        }

        Commands::User(UserCommand {
            command: UserSubcommand::Create(args),
        }) => {
            let pool = database::connect(&args.database.database_url)
                .await
                .map_err(|e| e.to_string())?;

            let user = PgUsersService::new(Db::new(pool))
                .create_user(NewUser {
                    uuid: UserUuid::new(),
                    username: args.username,
                })
                .await
                .map_err(|e| e.to_string())?;

            println!("created user {} ({})", user.username, user.uuid);
        }

        Commands::Listing(ListingCommand {
            command: ListingSubcommand::Create(args),
        }) => {
            let pool = database::connect(&args.database.database_url)
                .await
                .map_err(|e| e.to_string())?;

            let db = Db::new(pool);

            let host = PgUsersService::new(db.clone())
                .fetch_user_by_username(&args.host)
                .await
                .map_err(|e| e.to_string())?;

            let listing = PgListingsService::new(db)
                .create_listing(NewListing {
                    uuid: ListingUuid::new(),
                    host_uuid: host.uuid,
                    price: args.price,
                })
                .await
                .map_err(|e| e.to_string())?;

            println!(
                "created listing {} for host {} at {} minor units/night",
                listing.uuid, listing.host_username, listing.price
            );
        }
    }

    Ok(())
}
