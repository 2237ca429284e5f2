//! Signed-in admin context.
//!
//! There is no credential store: signing in only builds the admin profile
//! shown in the header, and the session object is passed explicitly to
//! whatever needs it.

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;
use tracing::info;

use crate::domain::{AccountStatus, KycStatus, User};

pub const ADMIN_USER_ID: &str = "user-admin-blockpay";
const ADMIN_WALLET: &str = "0xAbCdEf1234567890aBcDeF1234567890AbCdEf12";
const DEFAULT_ADMIN_NAME: &str = "Admin User";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("an email address is required to sign in")]
    MissingEmail,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminSession {
    profile: User,
}

impl AdminSession {
    pub fn sign_in(email: &str, now: DateTime<Utc>) -> Result<Self, SessionError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(SessionError::MissingEmail);
        }

        let local_part = email.split('@').next().unwrap_or_default();
        let name = if local_part.is_empty() {
            DEFAULT_ADMIN_NAME.to_string()
        } else {
            local_part.to_string()
        };
        let initial = name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('A');

        let profile = User {
            id: ADMIN_USER_ID.to_string(),
            email: email.to_string(),
            avatar_url: Some(format!("https://placehold.co/100x100.png?text={initial}")),
            kyc_status: KycStatus::Verified,
            wallet_address: ADMIN_WALLET.to_string(),
            loyalty_points: 1500,
            crypto_balance: 2.5,
            account_status: AccountStatus::Active,
            last_login: now,
            join_date: now - Duration::days(30),
            name,
        };

        info!(email = %profile.email, "admin signed in");
        Ok(AdminSession { profile })
    }

    pub fn profile(&self) -> &User {
        &self.profile
    }

    pub fn sign_out(self) {
        info!(email = %self.profile.email, "admin signed out");
    }
}
