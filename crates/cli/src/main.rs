//! Sonero CLI - manage the storefront catalog, news, cart and orders.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog (adds any new preset watches first)
//! sonero catalog list
//!
//! # Add a product; the price accepts "2450", "2450,50" or "2450.5"
//! sonero catalog add --name "Sonero Pilot" --price 2100 --image pilot.jpg --tag pilot
//!
//! # Fill the cart and check out
//! sonero cart add <product-id>
//! sonero cart checkout --name "Ana Pop" --phone 0722123456
//!
//! # Send an inquiry through the order form
//! sonero inquiry --name "Ana Pop" --email ana@example.ro --phone 0722123456 \
//!     --kind service --details "Revizie pentru un Sonero Classic Gold"
//! ```
//!
//! # Environment Variables
//!
//! See `sonero_storefront::config` for `STOREFRONT_*` variables. Log output is
//! filtered with `RUST_LOG` (default: `sonero=info,sonero_storefront=info`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sonero_storefront::config::StorefrontConfig;
use sonero_storefront::{AppError, AppState};

mod commands;

#[derive(Parser)]
#[command(name = "sonero")]
#[command(author, version, about = "Sonero storefront tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage catalog products
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Manage the news feed
    News {
        #[command(subcommand)]
        action: NewsAction,
    },
    /// Work with the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Inspect the order log
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
    /// Submit an inquiry through the order form
    Inquiry {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        phone: String,

        /// Request type (e.g. `comanda`, `service`)
        #[arg(short, long, default_value = "comanda")]
        kind: String,

        /// What the shopper is asking for
        #[arg(short, long)]
        details: String,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products, adding missing presets first
    List,
    /// Add a product
    Add {
        #[arg(short, long)]
        name: String,

        /// Price in RON
        #[arg(short, long)]
        price: String,

        /// Main image URL
        #[arg(short, long)]
        image: String,

        /// Gallery image URLs, in display order
        #[arg(long = "images", num_args = 1..)]
        images: Vec<String>,

        #[arg(short, long)]
        desc: Option<String>,

        /// Tag (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },
    /// Delete a product by id
    Delete { id: String },
}

#[derive(Subcommand)]
enum NewsAction {
    /// List news, seeding the welcome item on first run
    List,
    /// Publish a news item
    Add {
        #[arg(short, long)]
        title: String,

        #[arg(short, long, default_value = "")]
        desc: String,

        /// News type (default: `noutate`)
        #[arg(short, long)]
        kind: Option<String>,

        /// Publication date, `YYYY-MM-DD` (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Delete a news item by id
    Delete { id: String },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart lines and totals
    Show,
    /// Add one unit of a product
    Add { product_id: String },
    /// Remove a product's line
    Remove { product_id: String },
    /// Turn the cart into an order
    Checkout {
        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        #[arg(short, long)]
        phone: Option<String>,
    },
}

#[derive(Subcommand)]
enum OrdersAction {
    /// List every recorded order
    List,
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sonero=info,sonero_storefront=info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        if e.is_user_error() {
            tracing::warn!("{e}");
        } else {
            tracing::error!("Command failed: {e}");
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config = StorefrontConfig::from_env()?;
    let state = AppState::open(config).await?;

    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list(&state).await?,
            CatalogAction::Add {
                name,
                price,
                image,
                images,
                desc,
                tags,
            } => {
                let form = sonero_storefront::models::ProductForm {
                    name,
                    price,
                    image,
                    images,
                    desc,
                    tags,
                };
                commands::catalog::add(&state, form).await?;
            }
            CatalogAction::Delete { id } => commands::catalog::delete(&state, &id).await?,
        },
        Commands::News { action } => match action {
            NewsAction::List => commands::news::list(&state).await?,
            NewsAction::Add {
                title,
                desc,
                kind,
                date,
            } => {
                let item = sonero_storefront::models::NewNewsItem {
                    title,
                    kind: kind.map(Into::into),
                    desc,
                    date,
                };
                commands::news::add(&state, item).await?;
            }
            NewsAction::Delete { id } => commands::news::delete(&state, &id).await?,
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&state).await,
            CartAction::Add { product_id } => commands::cart::add(&state, &product_id).await?,
            CartAction::Remove { product_id } => {
                commands::cart::remove(&state, &product_id).await?;
            }
            CartAction::Checkout { name, email, phone } => {
                let contact = sonero_storefront::models::Contact { name, email, phone };
                commands::cart::checkout(&state, contact).await?;
            }
        },
        Commands::Orders { action } => match action {
            OrdersAction::List => commands::orders::list(&state).await?,
        },
        Commands::Inquiry {
            name,
            email,
            phone,
            kind,
            details,
        } => {
            let form = sonero_storefront::models::InquiryForm {
                name,
                email,
                phone,
                kind,
                details,
            };
            commands::inquiry::submit(&state, form).await?;
        }
    }
    Ok(())
}
