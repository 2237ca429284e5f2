use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::query::QueryError;

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub amount: f64,
    pub currency: String,
    pub status: TransactionStatus,
    #[serde(rename = "type")]
    pub r#type: TransactionType,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub merchant: Option<String>,
    #[serde(default)]
    pub blockchain_tx_hash: Option<String>,
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub kyc_status: KycStatus,
    pub wallet_address: String,
    pub loyalty_points: u32,
    pub crypto_balance: f64,
    pub account_status: AccountStatus,
    pub last_login: DateTime<Utc>,
    pub join_date: DateTime<Utc>,
}

/// Implements `FromStr` and `Display` over the wire names of a fieldless enum,
/// plus an `ALL` constant listing every variant.
macro_rules! wire_names {
    ($ty:ident, $field:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = QueryError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok($ty::$variant),)+
                    other => Err(QueryError::UnknownValue {
                        field: $field,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

wire_names!(TransactionStatus, "status", {
    Pending => "pending",
    Completed => "completed",
    Failed => "failed",
    Refunded => "refunded",
});

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Payment,
    Withdrawal,
    Deposit,
    Refund,
}

wire_names!(TransactionType, "type", {
    Payment => "payment",
    Withdrawal => "withdrawal",
    Deposit => "deposit",
    Refund => "refund",
});

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum KycStatus {
    Verified,
    Pending,
    Rejected,
    NotStarted,
}

wire_names!(KycStatus, "kycStatus", {
    Verified => "verified",
    Pending => "pending",
    Rejected => "rejected",
    NotStarted => "not_started",
});

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Suspended,
}

wire_names!(AccountStatus, "accountStatus", {
    Active => "active",
    Suspended => "suspended",
});

// Chain activity and dashboard metrics.

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NetworkHealth {
    Online,
    Offline,
    Degraded,
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStatus {
    pub name: String,
    pub status: NetworkHealth,
    pub block_height: u64,
    pub last_block_time: DateTime<Utc>,
    /// Display string such as `"23.41 Gwei"`, or `"N/A"` for permissioned chains.
    pub avg_gas_price: String,
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CallOutcome {
    Success,
    Failure,
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
pub struct ContractCallParams {
    pub to: String,
    pub amount: f64,
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SmartContractLog {
    pub id: String,
    pub contract_address: String,
    pub function_called: String,
    pub params: ContractCallParams,
    pub timestamp: DateTime<Utc>,
    pub status: CallOutcome,
    pub gas_used: String,
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
pub struct DailyRevenue {
    pub date: String,
    pub revenue: u64,
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserGrowth {
    pub date: String,
    pub new_users: u32,
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum MetricValue {
    Number(u64),
    Text(String),
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MetricHealth {
    Healthy,
    Warning,
    Critical,
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
pub struct SystemMetric {
    pub name: String,
    pub value: MetricValue,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub status: Option<MetricHealth>,
}
