use crate::domain::{DailyRevenue, NetworkStatus, SmartContractLog, SystemMetric, TransactionStatus, UserGrowth};
use crate::source::DataSource;

/// How many contract logs the blockchain overview shows.
pub const RECENT_CONTRACT_LOGS: usize = 10;

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_transactions: usize,
    pub total_users: usize,
    /// Sum of completed transaction amounts only.
    pub total_revenue: f64,
    pub active_sessions: u32,
    pub daily_revenue: Vec<DailyRevenue>,
    pub user_growth: Vec<UserGrowth>,
    pub system_metrics: Vec<SystemMetric>,
}

impl DashboardSummary {
    /// `active_sessions` comes from outside the dataset (a live counter, or a
    /// random figure in demo mode).
    pub fn from_source(source: &dyn DataSource, active_sessions: u32) -> Self {
        let total_revenue: f64 = source
            .transactions()
            .iter()
            .filter(|tx| tx.status == TransactionStatus::Completed)
            .map(|tx| tx.amount)
            .sum();

        DashboardSummary {
            total_transactions: source.transactions().len(),
            total_users: source.users().len(),
            total_revenue,
            active_sessions,
            daily_revenue: source.daily_revenue().to_vec(),
            user_growth: source.user_growth().to_vec(),
            system_metrics: source.system_metrics().to_vec(),
        }
    }
}

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlockchainOverview {
    pub network_status: Vec<NetworkStatus>,
    pub smart_contract_logs: Vec<SmartContractLog>,
}

impl BlockchainOverview {
    pub fn from_source(source: &dyn DataSource) -> Self {
        BlockchainOverview {
            network_status: source.network_status().to_vec(),
            smart_contract_logs: source
                .contract_logs()
                .iter()
                .take(RECENT_CONTRACT_LOGS)
                .cloned()
                .collect(),
        }
    }
}
