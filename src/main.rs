use std::path::PathBuf;

use blockpay_admin::config::{self, Config};
use blockpay_admin::dashboard::{BlockchainOverview, DashboardSummary};
use blockpay_admin::domain::{AccountStatus, KycStatus, TransactionStatus, TransactionType};
use blockpay_admin::mock_data::sample_active_sessions;
use blockpay_admin::query::{FieldFilter, TransactionFilters, UserFilters};
use blockpay_admin::session::AdminSession;
use blockpay_admin::source::{load_source, InMemorySource};
use blockpay_admin::{global_search, logger, query_transactions, query_users, AppError};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use tokio::task;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "BlockPay admin queries over the in-memory dataset")]
struct Cli {
    /// Path to the TOML config (default: config/default.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Admin email to sign in as (default: session.admin_email from config)
    #[arg(long = "as")]
    admin: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct Paging {
    /// 1-based page number; values below 1 are treated as 1
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    page: i64,

    /// Page size (default: query.default_page_size from config)
    #[arg(long, allow_negative_numbers = true)]
    limit: Option<i64>,

    /// Case-insensitive text to look for
    #[arg(long)]
    search: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List transactions, newest first
    Transactions {
        #[command(flatten)]
        paging: Paging,
        /// A value outside pending/completed/failed/refunded matches nothing
        #[arg(long)]
        status: Option<FieldFilter<TransactionStatus>>,
        /// A value outside payment/withdrawal/deposit/refund matches nothing
        #[arg(long = "type")]
        kind: Option<FieldFilter<TransactionType>>,
    },
    /// List users, most recently joined first
    Users {
        #[command(flatten)]
        paging: Paging,
        #[arg(long)]
        kyc_status: Option<FieldFilter<KycStatus>>,
        #[arg(long)]
        account_status: Option<FieldFilter<AccountStatus>>,
    },
    /// First page of transactions matching free text
    Search { text: String },
    /// Totals, revenue and growth series, system metrics
    Dashboard,
    /// Network status and recent smart contract calls
    Blockchain,
}

///
/// 1. Load config and start logging.
///
/// 2. Build the data source on a blocking task (CSV reads or generation).
///
/// 3. Sign in the admin, answer one command as JSON on stdout, sign out.
///
#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    // 1.
    let config = config::load(cli.config.as_deref())?;
    logger::init(&config.log_level)?;
    debug!(?config, "configuration loaded");

    // 2.
    let dataset = config.dataset.clone();
    let now = chrono::Utc::now();
    let (source, mut rng) = task::spawn_blocking(move || {
        let mut rng = dataset.rng();
        load_source(&dataset, &mut rng, now).map(|source| (source, rng))
    })
    .await
    .map_err(|e| AppError::Task(e.to_string()))??;

    // 3.
    let email = cli.admin.as_deref().unwrap_or(&config.admin_email);
    let session = AdminSession::sign_in(email, now)?;

    if !config.dataset.simulated_latency.is_zero() {
        tokio::time::sleep(config.dataset.simulated_latency).await;
    }

    let output = run(cli.command, &config, &source, &mut rng)?;
    println!("{output}");

    session.sign_out();
    Ok(())
}

fn run(
    command: Command,
    config: &Config,
    source: &InMemorySource,
    rng: &mut StdRng,
) -> Result<String, AppError> {
    let json = match command {
        Command::Transactions { paging, status, kind } => {
            let filters = TransactionFilters {
                status: status.unwrap_or_default(),
                r#type: kind.unwrap_or_default(),
                search: paging.search,
            };
            let limit = paging.limit.unwrap_or(config.default_page_size);
            let page = query_transactions(source, paging.page, limit, &filters);
            info!(total = page.total, returned = page.items.len(), "transactions query");
            serde_json::to_string_pretty(&page)?
        }
        Command::Users {
            paging,
            kyc_status,
            account_status,
        } => {
            let filters = UserFilters {
                kyc_status: kyc_status.unwrap_or_default(),
                account_status: account_status.unwrap_or_default(),
                search: paging.search,
            };
            let limit = paging.limit.unwrap_or(config.default_page_size);
            let page = query_users(source, paging.page, limit, &filters);
            info!(total = page.total, returned = page.items.len(), "users query");
            serde_json::to_string_pretty(&page)?
        }
        Command::Search { text } => {
            let page = global_search(source, &text, config.default_page_size);
            info!(total = page.total, "global search");
            serde_json::to_string_pretty(&page)?
        }
        Command::Dashboard => {
            let active_sessions = sample_active_sessions(rng);
            serde_json::to_string_pretty(&DashboardSummary::from_source(source, active_sessions))?
        }
        Command::Blockchain => serde_json::to_string_pretty(&BlockchainOverview::from_source(source))?,
    };
    Ok(json)
}
