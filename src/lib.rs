//! # blockpay_admin
//!
//! Back end of the BlockPay admin dashboard: payment transactions and user
//! accounts held in memory, queried by page with equality filters and a
//! case-insensitive free-text search, plus the dashboard and chain-activity
//! aggregates.
//!
//! ```rust
//! use blockpay_admin::mock_data::{DatasetSize, MockDataset};
//! use blockpay_admin::query::{query_transactions, TransactionFilters};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let source = MockDataset::generate(
//!     &mut StdRng::seed_from_u64(1),
//!     chrono::Utc::now(),
//!     DatasetSize::default(),
//! );
//! let filters = TransactionFilters::from_pairs([("status", "completed")]);
//! let page = query_transactions(&source, 1, 10, &filters);
//! assert!(page.items.len() <= 10);
//! ```

pub mod config;
pub mod csv_reader;
pub mod dashboard;
pub mod domain;
pub mod error;
pub mod logger;
pub mod mock_data;
pub mod query;
pub mod session;
pub mod source;

pub use error::AppError;
pub use query::{global_search, query_transactions, query_users, Page, PageRequest};
pub use source::{DataSource, InMemorySource};
