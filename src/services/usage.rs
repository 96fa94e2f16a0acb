// SPDX-License-Identifier: MPL-2.0
//! Usage and subscription collaborator.
//!
//! Daily limits follow the account tier: free accounts get 10 BIN lookups
//! and 5 card generations a day, paid tiers 10 000 and 1 000.
//! [`LocalUsage`] reads today's counters and subscription state from the
//! `usage.toml` ledger in the data directory.

use super::session::{Plan, User};
use crate::error::Result;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Daily allowance of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanLimits {
    pub lookups: u32,
    pub generations: u32,
}

impl PlanLimits {
    #[must_use]
    pub fn for_plan(plan: Plan) -> Self {
        match plan {
            Plan::Free => Self {
                lookups: 10,
                generations: 5,
            },
            Plan::Premium | Plan::Api => Self {
                lookups: 10_000,
                generations: 1_000,
            },
        }
    }
}

/// Today's consumption against the plan's limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageStats {
    pub day: NaiveDate,
    pub lookups_used: u32,
    pub generations_used: u32,
    pub limits: PlanLimits,
}

impl UsageStats {
    #[must_use]
    pub fn lookups_remaining(&self) -> u32 {
        self.limits.lookups.saturating_sub(self.lookups_used)
    }

    #[must_use]
    pub fn generations_remaining(&self) -> u32 {
        self.limits.generations.saturating_sub(self.generations_used)
    }

    #[must_use]
    pub fn is_lookup_limit_reached(&self) -> bool {
        self.lookups_remaining() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    #[default]
    Unpaid,
    Active,
    Canceled,
    Expired,
}

impl SubscriptionStatus {
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            SubscriptionStatus::Unpaid => "subscription-unpaid",
            SubscriptionStatus::Active => "subscription-active",
            SubscriptionStatus::Canceled => "subscription-canceled",
            SubscriptionStatus::Expired => "subscription-expired",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionInfo {
    pub plan: Plan,
    pub status: SubscriptionStatus,
    pub renews_on: Option<NaiveDate>,
}

pub trait UsageService: Send + Sync {
    fn load_usage_stats(&self, user: &User) -> Result<UsageStats>;

    fn load_subscription(&self, user: &User) -> Result<SubscriptionInfo>;
}

/// One user's row in the ledger.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LedgerEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<NaiveDate>,
    #[serde(default)]
    pub lookups: u32,
    #[serde(default)]
    pub generations: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_status: Option<SubscriptionStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renews_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Ledger {
    #[serde(default)]
    pub users: HashMap<String, LedgerEntry>,
}

impl Ledger {
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Ledger-backed usage service.
#[derive(Debug, Clone)]
pub struct LocalUsage {
    path: Option<PathBuf>,
}

impl LocalUsage {
    #[must_use]
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    fn entry(&self, username: &str) -> Result<LedgerEntry> {
        match self.path.as_deref() {
            Some(path) if path.exists() => Ok(Ledger::load_from_path(path)?
                .users
                .remove(username)
                .unwrap_or_default()),
            _ => Ok(LedgerEntry::default()),
        }
    }

    /// Usage for `user` as of `today`; counters from an earlier day read as zero.
    pub fn usage_on(&self, user: &User, today: NaiveDate) -> Result<UsageStats> {
        let entry = self.entry(&user.username)?;
        let (lookups_used, generations_used) = if entry.day == Some(today) {
            (entry.lookups, entry.generations)
        } else {
            (0, 0)
        };

        Ok(UsageStats {
            day: today,
            lookups_used,
            generations_used,
            limits: PlanLimits::for_plan(user.plan),
        })
    }

    /// Subscription for `user` as of `today`.
    ///
    /// Free accounts have no subscription. A paid subscription whose renewal
    /// date has passed reads as expired.
    pub fn subscription_on(&self, user: &User, today: NaiveDate) -> Result<SubscriptionInfo> {
        if !user.plan.is_paid() {
            return Ok(SubscriptionInfo {
                plan: user.plan,
                status: SubscriptionStatus::Unpaid,
                renews_on: None,
            });
        }

        let entry = self.entry(&user.username)?;
        let mut status = entry
            .subscription_status
            .unwrap_or(SubscriptionStatus::Active);
        if status == SubscriptionStatus::Active
            && entry.renews_on.is_some_and(|date| date < today)
        {
            status = SubscriptionStatus::Expired;
        }

        Ok(SubscriptionInfo {
            plan: user.plan,
            status,
            renews_on: entry.renews_on,
        })
    }
}

impl UsageService for LocalUsage {
    fn load_usage_stats(&self, user: &User) -> Result<UsageStats> {
        self.usage_on(user, Local::now().date_naive())
    }

    fn load_subscription(&self, user: &User) -> Result<SubscriptionInfo> {
        self.subscription_on(user, Local::now().date_naive())
    }
}
