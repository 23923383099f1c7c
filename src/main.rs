use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use storedesk::application::engine::{Collaborators, DecisionEngine};
use storedesk::domain::order::{Order, PaymentMethod, PaymentStatus};
use storedesk::domain::ports::ClockRef;
use storedesk::infrastructure::in_memory::{
    FixedClock, OutboxEmailSender, ScriptedPaymentProcessor, StaticQuoteTable, StaticRateTable,
};
use storedesk::infrastructure::system::{RandomCodeGenerator, SystemClock, TracingAnalyticsTracker};
use storedesk::interfaces::csv::quote_reader::QuoteReader;
use storedesk::interfaces::csv::rate_reader::RateReader;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Exchange-rate table CSV file (`currency, rate`)
    #[arg(long, global = true)]
    rates: Option<PathBuf>,

    /// Shipping quote table CSV file (`destination, cost, estimated_days`)
    #[arg(long, global = true)]
    quotes: Option<PathBuf>,

    /// Pin the clock to a local time such as 2024-12-25T09:00:00
    #[arg(long, global = true)]
    now: Option<NaiveDateTime>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a price into another currency
    Convert { price: Decimal, currency: String },
    /// Apply today's seasonal discount to a price
    Promo { price: Decimal },
    /// Print today's seasonal discount
    Discount,
    /// Describe shipping to a destination
    Shipping { destination: String },
    /// Charge an order against a simulated processor
    Checkout {
        amount: Decimal,
        #[arg(long)]
        card: String,
        /// Make the simulated processor decline the charge
        #[arg(long)]
        decline: bool,
    },
    /// Register an email address
    Signup { email: String },
    /// Send a one-time login code
    Login { email: String },
    /// Tell whether the business is open right now
    Open,
    /// Render the home page
    Home,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn load_rates(path: &Path, table: &StaticRateTable) -> Result<()> {
    let file = File::open(path).into_diagnostic()?;
    for record in RateReader::new(file).rates() {
        match record {
            Ok(record) => table.insert(&record.currency, record.rate).await,
            Err(e) => tracing::warn!("Skipping exchange rate row: {}", e),
        }
    }
    Ok(())
}

async fn load_quotes(path: &Path, table: &StaticQuoteTable) -> Result<()> {
    let file = File::open(path).into_diagnostic()?;
    for quote in QuoteReader::new(file).quotes() {
        match quote {
            Ok((destination, quote)) => table.insert(&destination, quote).await,
            Err(e) => tracing::warn!("Skipping shipping quote row: {}", e),
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let rates = StaticRateTable::new();
    if let Some(path) = &cli.rates {
        load_rates(path, &rates).await?;
    }
    let quotes = StaticQuoteTable::new();
    if let Some(path) = &cli.quotes {
        load_quotes(path, &quotes).await?;
    }

    let clock: ClockRef = match cli.now {
        Some(reading) => Arc::new(FixedClock(reading)),
        None => Arc::new(SystemClock),
    };
    let payment_status = match &cli.command {
        Command::Checkout { decline: true, .. } => PaymentStatus::Failed,
        _ => PaymentStatus::Success,
    };
    let outbox = OutboxEmailSender::new();

    let engine = DecisionEngine::new(Collaborators {
        exchange_rates: Arc::new(rates),
        shipping_quotes: Arc::new(quotes),
        analytics: Arc::new(TracingAnalyticsTracker),
        payments: Arc::new(ScriptedPaymentProcessor::new(payment_status)),
        email: Arc::new(outbox.clone()),
        codes: Arc::new(RandomCodeGenerator),
        clock,
    });

    match cli.command {
        Command::Convert { price, currency } => {
            let converted = engine
                .pricing
                .convert_price(price, &currency)
                .await
                .into_diagnostic()?;
            println!("{}", converted.normalize());
        }
        Command::Promo { price } => {
            let discounted = engine.pricing.promotional_price(price).into_diagnostic()?;
            println!("{}", discounted.normalize());
        }
        Command::Discount => {
            println!("{}", engine.pricing.current_seasonal_discount().normalize());
        }
        Command::Shipping { destination } => {
            let text = engine
                .shipping
                .describe_shipping(&destination)
                .await
                .into_diagnostic()?;
            println!("{text}");
        }
        Command::Checkout { amount, card, .. } => {
            let outcome = engine
                .checkout
                .submit_order(&Order::new(amount), &PaymentMethod::card(card))
                .await
                .into_diagnostic()?;
            println!("{}", serde_json::to_string(&outcome).into_diagnostic()?);
        }
        Command::Signup { email } => {
            let accepted = engine.accounts.sign_up(&email).await.into_diagnostic()?;
            println!("{}", if accepted { "accepted" } else { "rejected" });
        }
        Command::Login { email } => {
            engine.accounts.login(&email).await.into_diagnostic()?;
        }
        Command::Open => {
            let open = engine.availability.is_open_now();
            println!("{}", if open { "open" } else { "closed" });
        }
        Command::Home => {
            println!("{}", engine.storefront.render_home_page().await);
        }
    }

    for message in outbox.sent().await {
        println!("To: {}\n{}", message.recipient, message.body);
    }

    Ok(())
}
