use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use thiserror::Error;
use tracing::debug;

use crate::domain::{AccountStatus, KycStatus, Transaction, TransactionStatus, TransactionType, User};
use crate::source::DataSource;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    #[error("unknown {field} value: '{value}'")]
    UnknownValue { field: &'static str, value: String },
}

/// 1-based page index and page size, both clamped to at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    limit: usize,
}

impl PageRequest {
    pub fn new(page: i64, limit: i64) -> Self {
        PageRequest {
            page: clamp_positive(page),
            limit: clamp_positive(limit),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    fn start(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }

    fn end(&self) -> usize {
        self.page.saturating_mul(self.limit)
    }
}

fn clamp_positive(value: i64) -> usize {
    usize::try_from(value.max(1)).unwrap_or(usize::MAX)
}

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
}

/// Single pass over `records`: counts every match and keeps the ones that fall
/// inside the requested page. Source order is preserved.
pub fn paginate<'a, T, I, P>(records: I, request: PageRequest, mut predicate: P) -> Page<T>
where
    T: Clone + 'a,
    I: IntoIterator<Item = &'a T>,
    P: FnMut(&T) -> bool,
{
    let (start, end) = (request.start(), request.end());
    let mut items = Vec::new();
    let mut total = 0usize;

    for record in records {
        if !predicate(record) {
            continue;
        }
        if total >= start && total < end {
            items.push(record.clone());
        }
        total += 1;
    }

    Page {
        items,
        total,
        page: request.page(),
        limit: request.limit(),
    }
}

/// Lowercased needle for case-insensitive substring search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// `None` for an absent or empty search, which imposes no restriction.
    pub fn new(raw: Option<&str>) -> Option<Self> {
        match raw {
            Some(text) if !text.is_empty() => Some(SearchTerm(text.to_lowercase())),
            _ => None,
        }
    }

    /// A missing optional field never matches.
    pub fn matches_any<'f>(&self, fields: impl IntoIterator<Item = Option<&'f str>>) -> bool {
        fields
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&self.0))
    }
}

/// Equality constraint on one enum-valued field.
///
/// A value that names no variant still constrains the query: it becomes
/// `Unmatched`, which no record satisfies.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldFilter<T> {
    Any,
    Is(T),
    Unmatched(String),
}

impl<T> Default for FieldFilter<T> {
    fn default() -> Self {
        FieldFilter::Any
    }
}

impl<T: PartialEq> FieldFilter<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            FieldFilter::Any => true,
            FieldFilter::Is(expected) => expected == value,
            FieldFilter::Unmatched(_) => false,
        }
    }
}

impl<T> FieldFilter<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    /// Absent or empty input imposes no restriction.
    pub fn from_value(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => FieldFilter::Any,
            Some(text) => match text.parse() {
                Ok(value) => FieldFilter::Is(value),
                Err(err) => {
                    debug!(%err, "filter value matches no record");
                    FieldFilter::Unmatched(text.to_string())
                }
            },
        }
    }
}

impl<T> FromStr for FieldFilter<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(FieldFilter::from_value(Some(s)))
    }
}

impl<T> From<T> for FieldFilter<T> {
    fn from(value: T) -> Self {
        FieldFilter::Is(value)
    }
}

impl<'de, T> Deserialize<'de> for FieldFilter<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(FieldFilter::from_value(raw.as_deref()))
    }
}

/// Recognized transaction filter keys: `status`, `type`, `search`.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFilters {
    #[serde(default)]
    pub status: FieldFilter<TransactionStatus>,
    #[serde(default, rename = "type")]
    pub r#type: FieldFilter<TransactionType>,
    #[serde(default)]
    pub search: Option<String>,
}

impl TransactionFilters {
    /// Builds filters from loose key/value pairs, such as a URL query string.
    /// Unknown keys are ignored and empty values count as absent.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut filters = TransactionFilters::default();
        for (key, value) in pairs {
            if value.is_empty() {
                continue;
            }
            match key {
                "status" => filters.status = FieldFilter::from_value(Some(value)),
                "type" => filters.r#type = FieldFilter::from_value(Some(value)),
                "search" => filters.search = Some(value.to_string()),
                ignored => debug!(key = ignored, "ignoring unrecognized transaction filter"),
            }
        }
        filters
    }

    fn matcher(&self) -> impl Fn(&Transaction) -> bool + '_ {
        let search = SearchTerm::new(self.search.as_deref());
        move |tx: &Transaction| {
            self.status.admits(&tx.status)
                && self.r#type.admits(&tx.r#type)
                && search.as_ref().map_or(true, |term| {
                    term.matches_any([
                        Some(tx.id.as_str()),
                        Some(tx.user_name.as_str()),
                        tx.merchant.as_deref(),
                        tx.blockchain_tx_hash.as_deref(),
                    ])
                })
        }
    }
}

/// Recognized user filter keys: `kycStatus`, `accountStatus`, `search`.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserFilters {
    #[serde(default)]
    pub kyc_status: FieldFilter<KycStatus>,
    #[serde(default)]
    pub account_status: FieldFilter<AccountStatus>,
    #[serde(default)]
    pub search: Option<String>,
}

impl UserFilters {
    /// See [`TransactionFilters::from_pairs`].
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut filters = UserFilters::default();
        for (key, value) in pairs {
            if value.is_empty() {
                continue;
            }
            match key {
                "kycStatus" => filters.kyc_status = FieldFilter::from_value(Some(value)),
                "accountStatus" => filters.account_status = FieldFilter::from_value(Some(value)),
                "search" => filters.search = Some(value.to_string()),
                ignored => debug!(key = ignored, "ignoring unrecognized user filter"),
            }
        }
        filters
    }

    fn matcher(&self) -> impl Fn(&User) -> bool + '_ {
        let search = SearchTerm::new(self.search.as_deref());
        move |user: &User| {
            self.kyc_status.admits(&user.kyc_status)
                && self.account_status.admits(&user.account_status)
                && search.as_ref().map_or(true, |term| {
                    term.matches_any([
                        Some(user.id.as_str()),
                        Some(user.name.as_str()),
                        Some(user.email.as_str()),
                        Some(user.wallet_address.as_str()),
                    ])
                })
        }
    }
}

pub fn query_transactions(
    source: &dyn DataSource,
    page: i64,
    limit: i64,
    filters: &TransactionFilters,
) -> Page<Transaction> {
    let request = PageRequest::new(page, limit);
    let result = paginate(source.transactions(), request, filters.matcher());
    debug!(
        page = result.page,
        limit = result.limit,
        total = result.total,
        returned = result.items.len(),
        "queried transactions"
    );
    result
}

pub fn query_users(source: &dyn DataSource, page: i64, limit: i64, filters: &UserFilters) -> Page<User> {
    let request = PageRequest::new(page, limit);
    let result = paginate(source.users(), request, filters.matcher());
    debug!(
        page = result.page,
        limit = result.limit,
        total = result.total,
        returned = result.items.len(),
        "queried users"
    );
    result
}

/// First page of transactions matching free text, as the header search box does.
pub fn global_search(source: &dyn DataSource, text: &str, limit: i64) -> Page<Transaction> {
    let filters = TransactionFilters {
        search: Some(text.to_string()),
        ..TransactionFilters::default()
    };
    query_transactions(source, 1, limit, &filters)
}
