use blockpay_admin::domain::{
    AccountStatus, KycStatus, Transaction, TransactionStatus, TransactionType, User,
};
use csv::Writer;
use std::error::Error;
use std::path::{Path, PathBuf};

pub fn transaction(id: &str, user_name: &str, status: TransactionStatus) -> Transaction {
    Transaction {
        id: id.to_string(),
        user_id: format!("user-{id}"),
        user_name: user_name.to_string(),
        amount: 25.0,
        currency: "USD".to_string(),
        status,
        r#type: TransactionType::Payment,
        timestamp: "2024-05-01T09:30:00Z".parse().unwrap(),
        merchant: Some("Walmart Store #12".to_string()),
        blockchain_tx_hash: None,
    }
}

pub fn user(id: &str, name: &str, wallet_address: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        avatar_url: None,
        kyc_status: KycStatus::Verified,
        wallet_address: wallet_address.to_string(),
        loyalty_points: 100,
        crypto_balance: 1.25,
        account_status: AccountStatus::Active,
        last_login: "2024-05-01T09:30:00Z".parse().unwrap(),
        join_date: "2023-05-01T09:30:00Z".parse().unwrap(),
    }
}

/// Sample set with every status and type represented.
pub fn sample_transactions() -> Vec<Transaction> {
    let statuses = [
        TransactionStatus::Completed,
        TransactionStatus::Pending,
        TransactionStatus::Failed,
        TransactionStatus::Refunded,
    ];
    let types = [
        TransactionType::Payment,
        TransactionType::Withdrawal,
        TransactionType::Deposit,
        TransactionType::Refund,
    ];
    let names = ["Alice Smith", "Bob Jones", "Charlie Brown"];

    (0..24)
        .map(|i| {
            let mut tx = transaction(
                &format!("tx-{i:02}"),
                names[i % names.len()],
                statuses[i % statuses.len()],
            );
            tx.r#type = types[(i / 2) % types.len()];
            tx.timestamp = tx.timestamp - chrono::Duration::hours(i as i64);
            if i % 5 == 0 {
                tx.merchant = None;
            }
            tx
        })
        .collect()
}

/// Writes `records` with a header row into `dir/file_name`.
pub fn write_csv<T: serde::Serialize>(
    dir: &Path,
    file_name: &str,
    records: &[T],
) -> Result<PathBuf, Box<dyn Error>> {
    let file_path = dir.join(file_name);
    let mut writer = Writer::from_path(&file_path)?;

    for record in records {
        writer.serialize(record)?;
    }

    writer.flush()?;

    Ok(file_path)
}
