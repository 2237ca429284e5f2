//! Synthetic dataset for running the dashboard without a backend.
//!
//! Every generator takes the RNG and the reference time explicitly, so a
//! seeded `StdRng` reproduces the same dataset.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use tracing::info;

use crate::domain::{
    AccountStatus, CallOutcome, ContractCallParams, DailyRevenue, KycStatus, MetricHealth,
    MetricValue, NetworkHealth, NetworkStatus, SmartContractLog, SystemMetric, Transaction,
    TransactionStatus, TransactionType, User, UserGrowth,
};
use crate::source::InMemorySource;

const FIRST_NAMES: [&str; 10] = [
    "Alice", "Bob", "Charlie", "David", "Eve", "Fiona", "George", "Hannah", "Ian", "Julia",
];
const LAST_NAMES: [&str; 10] = [
    "Smith", "Jones", "Williams", "Brown", "Davis", "Miller", "Wilson", "Moore", "Taylor",
    "Anderson",
];
const CONTRACT_FUNCTIONS: [&str; 4] = ["transfer", "approve", "mint", "burn"];
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SERIES_DAYS: i64 = 30;

/// How many records of each kind to synthesize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSize {
    pub transactions: usize,
    pub users: usize,
    pub contract_logs: usize,
}

impl Default for DatasetSize {
    fn default() -> Self {
        DatasetSize {
            transactions: 50,
            users: 30,
            contract_logs: 20,
        }
    }
}

fn pick<T: Copy, R: Rng + ?Sized>(rng: &mut R, options: &[T]) -> T {
    options[rng.gen_range(0..options.len())]
}

fn random_chars<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8], len: usize) -> String {
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}

pub fn random_id<R: Rng + ?Sized>(rng: &mut R, prefix: &str) -> String {
    format!("{prefix}-{}", random_chars(rng, BASE36, 8))
}

pub fn random_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, &FIRST_NAMES), pick(rng, &LAST_NAMES))
}

pub fn random_wallet_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("0x{}", random_chars(rng, &BASE36[..16], 40))
}

pub fn random_tx_hash<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("0x{}", random_chars(rng, &BASE36[..16], 64))
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub fn generate_transactions<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    count: usize,
) -> Vec<Transaction> {
    (0..count)
        .map(|_| Transaction {
            id: random_id(rng, "tx"),
            user_id: random_id(rng, "user"),
            user_name: random_name(rng),
            amount: round_to(rng.gen::<f64>() * 1000.0 + 5.0, 2),
            currency: "USD".to_string(),
            status: pick(rng, TransactionStatus::ALL),
            r#type: pick(rng, TransactionType::ALL),
            timestamp: now - Duration::days(rng.gen_range(0..365)),
            merchant: Some(format!("Walmart Store #{}", rng.gen_range(1..=1000))),
            blockchain_tx_hash: Some(random_tx_hash(rng)),
        })
        .collect()
}

pub fn generate_users<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>, count: usize) -> Vec<User> {
    (0..count)
        .map(|_| {
            let name = random_name(rng);
            let initial = name.chars().next().unwrap_or('U');
            User {
                id: random_id(rng, "usr"),
                email: format!("{}@example.com", name.to_lowercase().replacen(' ', ".", 1)),
                avatar_url: Some(format!("https://placehold.co/40x40.png?text={initial}")),
                kyc_status: pick(rng, KycStatus::ALL),
                wallet_address: random_wallet_address(rng),
                loyalty_points: rng.gen_range(0..5000),
                crypto_balance: round_to(rng.gen::<f64>() * 5.0, 4),
                account_status: pick(rng, AccountStatus::ALL),
                last_login: now - Duration::hours(rng.gen_range(0..72)),
                join_date: now - Duration::days(rng.gen_range(0..365)),
                name,
            }
        })
        .collect()
}

fn gas_price<R: Rng + ?Sized>(rng: &mut R, base: f64, spread: f64) -> String {
    format!("{:.2} Gwei", rng.gen::<f64>() * spread + base)
}

pub fn generate_network_status<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Vec<NetworkStatus> {
    vec![
        NetworkStatus {
            name: "Ethereum Mainnet".to_string(),
            status: NetworkHealth::Online,
            block_height: 19_000_000 + rng.gen_range(0..1000),
            last_block_time: now,
            avg_gas_price: gas_price(rng, 10.0, 50.0),
        },
        NetworkStatus {
            name: "Polygon Mainnet".to_string(),
            status: NetworkHealth::Online,
            block_height: 50_000_000 + rng.gen_range(0..1000),
            last_block_time: now,
            avg_gas_price: gas_price(rng, 30.0, 100.0),
        },
        NetworkStatus {
            name: "Hyperledger Fabric (Walmart)".to_string(),
            status: NetworkHealth::Degraded,
            block_height: 120_000 + rng.gen_range(0..100),
            last_block_time: now - Duration::hours(1),
            avg_gas_price: "N/A".to_string(),
        },
    ]
}

/// Logs are spaced two hours apart going back from `now`; roughly one in ten fails.
pub fn generate_contract_logs<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    count: usize,
) -> Vec<SmartContractLog> {
    (0..count)
        .map(|i| SmartContractLog {
            id: random_id(rng, "log"),
            contract_address: random_wallet_address(rng),
            function_called: pick(rng, &CONTRACT_FUNCTIONS).to_string(),
            params: ContractCallParams {
                to: random_wallet_address(rng),
                amount: round_to(rng.gen::<f64>() * 100.0, 2),
            },
            timestamp: now - Duration::hours(2 * i as i64),
            status: if rng.gen::<f64>() > 0.1 {
                CallOutcome::Success
            } else {
                CallOutcome::Failure
            },
            gas_used: format!("{:.0}", rng.gen::<f64>() * 100_000.0 + 21_000.0),
        })
        .collect()
}

fn series_label(now: DateTime<Utc>, day: i64) -> String {
    (now - Duration::days(SERIES_DAYS - 1 - day))
        .format("%b %d")
        .to_string()
}

/// Oldest day first, so the series plots left to right.
pub fn generate_daily_revenue<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Vec<DailyRevenue> {
    (0..SERIES_DAYS)
        .map(|day| DailyRevenue {
            date: series_label(now, day),
            revenue: rng.gen_range(10_000..60_000),
        })
        .collect()
}

pub fn generate_user_growth<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Vec<UserGrowth> {
    (0..SERIES_DAYS)
        .map(|day| UserGrowth {
            date: series_label(now, day),
            new_users: rng.gen_range(10..110),
        })
        .collect()
}

fn metric(name: &str, value: MetricValue, unit: &str) -> SystemMetric {
    SystemMetric {
        name: name.to_string(),
        value,
        unit: Some(unit.to_string()),
        status: Some(MetricHealth::Healthy),
    }
}

pub fn generate_system_metrics<R: Rng + ?Sized>(rng: &mut R) -> Vec<SystemMetric> {
    vec![
        metric(
            "API Latency",
            MetricValue::Text(format!("{:.0}", rng.gen::<f64>() * 100.0 + 50.0)),
            "ms",
        ),
        metric(
            "Error Rate",
            MetricValue::Text(format!("{:.2}", rng.gen::<f64>() * 0.5)),
            "%",
        ),
        metric(
            "Database Connections",
            MetricValue::Number(rng.gen_range(20..70)),
            "active",
        ),
        metric(
            "Transaction Queue Length",
            MetricValue::Number(rng.gen_range(0..5)),
            "jobs",
        ),
        metric(
            "Server CPU Utilization",
            MetricValue::Text(format!("{:.1}", rng.gen::<f64>() * 60.0 + 10.0)),
            "%",
        ),
    ]
}

/// Figure shown on the dashboard; no dataset records live sessions.
pub fn sample_active_sessions<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(100..600)
}

pub struct MockDataset;

impl MockDataset {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>, size: DatasetSize) -> InMemorySource {
        let transactions = generate_transactions(rng, now, size.transactions);
        let users = generate_users(rng, now, size.users);
        Self::attach_activity(rng, now, size, InMemorySource::new(transactions, users))
    }

    /// Adds generated chain activity and metric series to `source`. Draws
    /// from `rng` after the record generators, so a seeded run yields the
    /// same dataset whether it goes through here or [`MockDataset::generate`].
    pub fn attach_activity<R: Rng + ?Sized>(
        rng: &mut R,
        now: DateTime<Utc>,
        size: DatasetSize,
        source: InMemorySource,
    ) -> InMemorySource {
        let network_status = generate_network_status(rng, now);
        let contract_logs = generate_contract_logs(rng, now, size.contract_logs);
        let daily_revenue = generate_daily_revenue(rng, now);
        let user_growth = generate_user_growth(rng, now);
        let system_metrics = generate_system_metrics(rng);

        info!(contract_logs = size.contract_logs, "generated chain activity and metrics");

        source
            .with_chain_activity(network_status, contract_logs)
            .with_metrics(daily_revenue, user_growth, system_metrics)
    }
}
