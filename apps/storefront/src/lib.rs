//! # rv Storefront Library
//!
//! Cart and wishlist state for the rv storefront, plus the command line
//! front end that drives it.
//!
//! ## Module Organization
//! ```text
//! rv_storefront_lib/
//! ├── lib.rs          ◄─── You are here (startup & dispatch)
//! ├── cli.rs          ◄─── clap definitions
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState
//! │   ├── cart.rs     ◄─── CartStore (cart + wishlist + persistence)
//! │   ├── provider.rs ◄─── CartProvider scope
//! │   ├── config.rs   ◄─── Configuration state
//! │   └── db.rs       ◄─── Opening the key-value store
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── wishlist.rs ◄─── Wishlist commands
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod state;

use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::{CartCommand, Cli, Commands, WishlistCommand};
use error::ApiError;
use state::{AppState, CartProvider, ConfigState};

/// Runs one CLI invocation.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Invocation                                        │
/// │                                                                         │
/// │  1. Parse arguments (clap) ───────────────────────────────────────────► │
/// │  2. Load configuration (RV_* env, then --db / --memory) ──────────────► │
/// │  3. Initialize logging (stderr, RUST_LOG or config filter) ───────────► │
/// │  4. Open store & mount CartProvider ──────────────────────────────────► │
/// │     • SQLite with WAL mode, migrations applied                          │
/// │     • rv_cart / rv_wishlist restored, unreadable values start empty     │
/// │  5. Run the command, print JSON ──────────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> ExitCode {
    let cli = Cli::parse();
    let config = cli.apply_overrides(ConfigState::from_env());

    init_tracing(&config.log_filter);
    info!(storage = %config.storage, "Starting rv storefront");

    match execute(cli.command, config).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", render(&err));
            ExitCode::FAILURE
        }
    }
}

/// Executes a parsed command and returns the JSON to print.
///
/// `config` never opens the store; every other command mounts the cart
/// provider first.
pub async fn execute(command: Commands, config: ConfigState) -> Result<String, ApiError> {
    debug!(?command, "Dispatching command");

    match command {
        Commands::Config => {
            let state = AppState::detached(config);
            render_ok(&commands::config::get_config(&state.config))
        }
        Commands::Cart(cart) => {
            let mut state = AppState::start(config).await?;
            run_cart(&mut state.cart, cart).await
        }
        Commands::Wishlist(wishlist) => {
            let mut state = AppState::start(config).await?;
            run_wishlist(&mut state.cart, wishlist).await
        }
    }
}

async fn run_cart(provider: &mut CartProvider, command: CartCommand) -> Result<String, ApiError> {
    match command {
        CartCommand::Show => render_ok(&commands::cart::get_cart(provider)?),
        CartCommand::Add { product } => {
            let product = cli::parse_product(&product)?;
            render_ok(&commands::cart::add_to_cart(provider, product).await?)
        }
        CartCommand::Remove { id } => {
            render_ok(&commands::cart::remove_from_cart(provider, &id).await?)
        }
        CartCommand::Clear => render_ok(&commands::cart::clear_cart(provider).await?),
    }
}

async fn run_wishlist(
    provider: &mut CartProvider,
    command: WishlistCommand,
) -> Result<String, ApiError> {
    match command {
        WishlistCommand::Show => render_ok(&commands::wishlist::get_wishlist(provider)?),
        WishlistCommand::Toggle { product } => {
            let product = cli::parse_product(&product)?;
            render_ok(&commands::wishlist::toggle_wishlist(provider, product).await?)
        }
        WishlistCommand::Contains { id } => {
            render_ok(&commands::wishlist::is_in_wishlist(provider, &id)?)
        }
    }
}

fn render_ok<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ApiError::internal(format!("Could not render output: {e}")))
}

fn render(err: &ApiError) -> String {
    serde_json::to_string(err).unwrap_or_else(|_| err.to_string())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=rv=trace` - Show trace for rv crates only
/// - Default: the configured filter (`info,rv=debug,sqlx=warn`)
///
/// Logs go to stderr so stdout stays pure JSON.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
