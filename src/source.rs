use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::info;

use crate::config::DatasetConfig;
use crate::csv_reader::{self, CsvReadError};
use crate::domain::{DailyRevenue, NetworkStatus, SmartContractLog, SystemMetric, Transaction, User, UserGrowth};
use crate::mock_data::{self, MockDataset};

/// Read-only record collections handed to the query and dashboard functions.
///
/// Only transactions and users are required; chain activity and metric
/// series default to empty for sources that don't carry them (CSV imports).
pub trait DataSource: Send + Sync {
    fn transactions(&self) -> &[Transaction];

    fn users(&self) -> &[User];

    fn network_status(&self) -> &[NetworkStatus] {
        &[]
    }

    fn contract_logs(&self) -> &[SmartContractLog] {
        &[]
    }

    fn daily_revenue(&self) -> &[DailyRevenue] {
        &[]
    }

    fn user_growth(&self) -> &[UserGrowth] {
        &[]
    }

    fn system_metrics(&self) -> &[SystemMetric] {
        &[]
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    transactions: Vec<Transaction>,
    users: Vec<User>,
    network_status: Vec<NetworkStatus>,
    contract_logs: Vec<SmartContractLog>,
    daily_revenue: Vec<DailyRevenue>,
    user_growth: Vec<UserGrowth>,
    system_metrics: Vec<SystemMetric>,
}

impl InMemorySource {
    /// Transactions are ordered newest-first by timestamp, users newest-first
    /// by join date.
    pub fn new(mut transactions: Vec<Transaction>, mut users: Vec<User>) -> Self {
        transactions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        users.sort_by(|a, b| b.join_date.cmp(&a.join_date));
        InMemorySource {
            transactions,
            users,
            ..InMemorySource::default()
        }
    }

    /// Contract logs are ordered newest-first.
    pub fn with_chain_activity(
        mut self,
        network_status: Vec<NetworkStatus>,
        mut contract_logs: Vec<SmartContractLog>,
    ) -> Self {
        contract_logs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        self.network_status = network_status;
        self.contract_logs = contract_logs;
        self
    }

    pub fn with_metrics(
        mut self,
        daily_revenue: Vec<DailyRevenue>,
        user_growth: Vec<UserGrowth>,
        system_metrics: Vec<SystemMetric>,
    ) -> Self {
        self.daily_revenue = daily_revenue;
        self.user_growth = user_growth;
        self.system_metrics = system_metrics;
        self
    }
}

impl DataSource for InMemorySource {
    fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    fn users(&self) -> &[User] {
        &self.users
    }

    fn network_status(&self) -> &[NetworkStatus] {
        &self.network_status
    }

    fn contract_logs(&self) -> &[SmartContractLog] {
        &self.contract_logs
    }

    fn daily_revenue(&self) -> &[DailyRevenue] {
        &self.daily_revenue
    }

    fn user_growth(&self) -> &[UserGrowth] {
        &self.user_growth
    }

    fn system_metrics(&self) -> &[SystemMetric] {
        &self.system_metrics
    }
}

/// Builds the process-lifetime source: CSV files where configured, generated
/// records everywhere else. Chain activity and metrics are always generated.
pub fn load_source<R: Rng + ?Sized>(
    dataset: &DatasetConfig,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Result<InMemorySource, CsvReadError> {
    let transactions = match &dataset.transactions_csv {
        Some(path) => csv_reader::read_transactions(path)?,
        None => mock_data::generate_transactions(rng, now, dataset.size.transactions),
    };
    let users = match &dataset.users_csv {
        Some(path) => csv_reader::read_users(path)?,
        None => mock_data::generate_users(rng, now, dataset.size.users),
    };

    let source = MockDataset::attach_activity(
        rng,
        now,
        dataset.size,
        InMemorySource::new(transactions, users),
    );

    info!(
        transactions = source.transactions.len(),
        users = source.users.len(),
        seeded = dataset.seed.is_some(),
        "data source ready"
    );
    Ok(source)
}
