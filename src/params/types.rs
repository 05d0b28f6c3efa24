//! Shared parameter types
//!
//! [`Params`] carries the fields every request may include (metadata and
//! expansions). The nested card and bank account params are shared by every
//! resource that accepts payment details.

use super::form::Form;
use std::collections::BTreeMap;

/// Fields common to every request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    /// Key/value metadata, sent as `metadata[key]=value`
    pub metadata: BTreeMap<String, String>,
    /// Fields to expand, sent as `expand[]=field`
    pub expand: Vec<String>,
    /// Raw extra fields for parameters this crate does not model yet
    pub extra: Form,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a metadata entry
    #[must_use]
    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Request expansion of a field
    #[must_use]
    pub fn expand(mut self, field: impl Into<String>) -> Self {
        self.expand.push(field.into());
        self
    }

    /// Add a raw form field
    #[must_use]
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.add(key, value);
        self
    }

    /// Append the common fields to a form
    pub fn append_to(&self, form: &mut Form) {
        for (key, value) in &self.metadata {
            form.add(format!("metadata[{key}]"), value.as_str());
        }
        for field in &self.expand {
            form.add("expand[]", field.as_str());
        }
        form.extend(self.extra.iter());
    }
}

// ============================================================================
// Bank Account Params
// ============================================================================

/// Bank account details, either as a token or as raw account numbers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BankAccountParams {
    /// Tokenized bank account; takes precedence over the raw fields
    pub token: String,
    pub country: String,
    pub routing_number: String,
    pub account_number: String,
}

impl BankAccountParams {
    /// Bank account from a token
    pub fn from_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Default::default()
        }
    }

    /// Bank account from raw details
    pub fn new(
        country: impl Into<String>,
        routing_number: impl Into<String>,
        account_number: impl Into<String>,
    ) -> Self {
        Self {
            token: String::new(),
            country: country.into(),
            routing_number: routing_number.into(),
            account_number: account_number.into(),
        }
    }

    pub fn append_details(&self, form: &mut Form) {
        if self.token.is_empty() {
            form.add("bank_account[country]", self.country.as_str());
            form.add("bank_account[routing_number]", self.routing_number.as_str());
            form.add("bank_account[account_number]", self.account_number.as_str());
        } else {
            form.add("bank_account", self.token.as_str());
        }
    }
}

// ============================================================================
// Card Params
// ============================================================================

/// Debit card details
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardParams {
    pub number: String,
    pub exp_month: String,
    pub exp_year: String,
    pub cvc: String,
    pub name: String,
    pub address_line1: String,
    pub address_line2: String,
    pub address_city: String,
    pub address_state: String,
    pub address_zip: String,
    pub address_country: String,
}

impl CardParams {
    pub fn new(
        number: impl Into<String>,
        exp_month: impl Into<String>,
        exp_year: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            exp_month: exp_month.into(),
            exp_year: exp_year.into(),
            ..Default::default()
        }
    }

    /// Append `card[...]` fields. The number and expiry are only sent when
    /// `creating` is set; the remaining fields are sent when non-empty.
    pub fn append_details(&self, form: &mut Form, creating: bool) {
        if creating {
            form.add("card[number]", self.number.as_str());
            form.add("card[exp_month]", self.exp_month.as_str());
            form.add("card[exp_year]", self.exp_year.as_str());
        }

        form.add_non_empty("card[cvc]", &self.cvc);
        form.add_non_empty("card[name]", &self.name);
        form.add_non_empty("card[address_line1]", &self.address_line1);
        form.add_non_empty("card[address_line2]", &self.address_line2);
        form.add_non_empty("card[address_city]", &self.address_city);
        form.add_non_empty("card[address_state]", &self.address_state);
        form.add_non_empty("card[address_zip]", &self.address_zip);
        form.add_non_empty("card[address_country]", &self.address_country);
    }
}
