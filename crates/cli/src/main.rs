use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use stocker_core::models::holding::AssetClass;
use stocker_core::models::price::SeriesState;
use stocker_core::models::settings::Settings;
use stocker_core::services::chart_service::{format_point, recent_points};
use stocker_core::storage::file::FileStore;
use stocker_core::Stocker;

mod cli;

fn preprocess() {
    // grant access to .env
    dotenv::dotenv().ok();

    // initialise logger
    env_logger::init();
}

fn open_dashboard() -> Result<Stocker> {
    let dir = std::env::var("STOCKER_DIR").unwrap_or_else(|_| "./.stocker".to_string());
    let store = FileStore::open(dir)?;
    let api_key = std::env::var("ALPHAVANTAGE_API_KEY").unwrap_or_default();
    Ok(Stocker::open(Box::new(store), Settings::with_api_key(api_key))?)
}

fn class_of(crypto: bool) -> AssetClass {
    if crypto {
        AssetClass::Crypto
    } else {
        AssetClass::Stock
    }
}

fn print_portfolio(app: &Stocker, class: AssetClass) {
    let title = match class {
        AssetClass::Stock => "Stocks",
        AssetClass::Crypto => "Cryptos",
    };
    println!("{}", title.bold().underline());
    for h in &app.portfolio(class).holdings {
        println!(
            "  {:<8} amount {:>12.4}   price ${:>12.2}   value ${:>12.2}",
            h.ticker.cyan(),
            h.amount,
            h.price,
            h.value(),
        );
    }
    println!(
        "  {} ${:.2}\n",
        "Total:".bold(),
        app.total_value(class)
    );
}

fn landing() {
    println!("{}", "STOCKER".bold());
    println!("Track your stock and crypto holdings from the terminal.\n");
    println!("  {}  view the dashboard", "stocker show".green());
    println!("  {}  see all commands", "stocker help".green());
}

#[tokio::main]
async fn main() -> Result<()> {
    preprocess();
    let cli = cli::Cli::parse();
    log::debug!("Command line input recorded: {cli:#?}");

    let Some(command) = cli.command else {
        landing();
        return Ok(());
    };

    let mut app = open_dashboard()?;

    match command {
        cli::Commands::Show => {
            println!("{}\n", "Dashboard".bold());
            print_portfolio(&app, AssetClass::Stock);
            print_portfolio(&app, AssetClass::Crypto);
        }

        cli::Commands::Add { ticker, crypto } => {
            let class = class_of(crypto);
            match app.add(class, &ticker) {
                Ok(()) => println!("Added {} to {}.", ticker.to_uppercase().cyan(), class),
                // duplicate/empty ticker: warn, portfolio untouched
                Err(e) => println!("{} {e}", "warning:".yellow().bold()),
            }
        }

        cli::Commands::Rm { ticker, crypto } => {
            let class = class_of(crypto);
            app.delete(class, &ticker.to_uppercase())?;
            println!("Removed {} from {}.", ticker.to_uppercase().cyan(), class);
        }

        cli::Commands::Amount {
            ticker,
            value,
            crypto,
        } => {
            app.update_amount(class_of(crypto), &ticker.to_uppercase(), &value)?;
        }

        cli::Commands::Price {
            ticker,
            value,
            crypto,
        } => {
            app.update_price(class_of(crypto), &ticker.to_uppercase(), &value)?;
        }

        cli::Commands::History { ticker, crypto } => {
            let class = class_of(crypto);
            if app.settings().api_key.is_empty() {
                println!(
                    "{} ALPHAVANTAGE_API_KEY is not set; the request will likely be rejected.",
                    "warning:".yellow().bold()
                );
            }
            println!("{} Prices", ticker.to_uppercase().bold());
            match app.select_and_fetch(&ticker, class).await {
                SeriesState::Success(points) => {
                    for p in recent_points(points) {
                        println!("  {}", format_point(p));
                    }
                }
                SeriesState::Empty => {
                    println!("No time series data returned (maybe unsupported symbol)");
                }
                SeriesState::Error(msg) => println!("{} {msg}", "error:".red().bold()),
                // select_and_fetch always resolves past Loading
                SeriesState::Loading => {}
            }
        }
    }

    Ok(())
}
