use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Run without a command to see the landing screen.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the dashboard: both portfolios with their totals.
    Show,

    /// Add a ticker to a portfolio (zero amount, zero price).
    Add {
        ticker: String,
        /// Add to the crypto portfolio instead of stocks.
        #[arg(long)]
        crypto: bool,
    },

    /// Remove a ticker from a portfolio.
    Rm {
        ticker: String,
        #[arg(long)]
        crypto: bool,
    },

    /// Set the amount held for a ticker. Unparsable values become 0.
    Amount {
        ticker: String,
        value: String,
        #[arg(long)]
        crypto: bool,
    },

    /// Set the per-unit price for a ticker. Unparsable values become 0.
    Price {
        ticker: String,
        value: String,
        #[arg(long)]
        crypto: bool,
    },

    /// Fetch and print the recent daily closing prices for a ticker.
    History {
        ticker: String,
        #[arg(long)]
        crypto: bool,
    },
}
