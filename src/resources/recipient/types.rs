//! Recipient objects and params

use crate::pagination::{ListItem, ListParams, ListResponse};
use crate::params::{BankAccountParams, CardParams, Params};
use crate::types::{Expandable, Metadata};
use serde::{Deserialize, Serialize};

// ============================================================================
// Enums
// ============================================================================

/// Legal entity type of a recipient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipientType {
    #[default]
    Individual,
    Corporation,
}

impl RecipientType {
    pub fn as_str(self) -> &'static str {
        match self {
            RecipientType::Individual => "individual",
            RecipientType::Corporation => "corporation",
        }
    }
}

/// Verification state of a bank account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BankAccountStatus {
    New,
    Verified,
    Validated,
    Errored,
}

// ============================================================================
// Objects
// ============================================================================

/// Bank account attached to a recipient
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BankAccount {
    pub id: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub last4: String,
    #[serde(default)]
    pub fingerprint: Option<String>,
    #[serde(default)]
    pub status: Option<BankAccountStatus>,
}

/// Debit card attached to a recipient
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Card {
    pub id: String,
    #[serde(default)]
    pub last4: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub exp_month: u8,
    #[serde(default)]
    pub exp_year: u16,
    #[serde(default)]
    pub fingerprint: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl ListItem for Card {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A transfer recipient
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Recipient {
    pub id: String,
    #[serde(default)]
    pub livemode: bool,
    #[serde(default)]
    pub created: i64,
    #[serde(rename = "type", default)]
    pub kind: RecipientType,
    #[serde(default)]
    pub active_account: Option<BankAccount>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cards: Option<ListResponse<Card>>,
    #[serde(default)]
    pub default_card: Option<Expandable<Card>>,
}

impl Recipient {
    /// Creation time
    pub fn created_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        crate::types::timestamp(self.created)
    }
}

impl ListItem for Recipient {
    fn id(&self) -> &str {
        &self.id
    }
}

// ============================================================================
// Params
// ============================================================================

/// Params for creating, retrieving and updating recipients
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipientParams {
    pub name: String,
    pub kind: RecipientType,
    pub tax_id: String,
    /// Card token; takes precedence over `card`
    pub token: String,
    pub email: String,
    pub description: String,
    pub bank_account: Option<BankAccountParams>,
    pub card: Option<CardParams>,
    /// ID of the card to make default (update only)
    pub default_card: String,
    pub params: Params,
}

impl RecipientParams {
    pub fn new(name: impl Into<String>, kind: RecipientType) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Default::default()
        }
    }
}

/// Params for listing recipients
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipientListParams {
    pub list: ListParams,
    /// Only verified (or only unverified) recipients
    pub verified: Option<bool>,
}
