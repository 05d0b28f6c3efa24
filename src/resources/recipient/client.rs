//! Recipient operations

use super::types::{Recipient, RecipientListParams, RecipientParams};
use crate::client::Client;
use crate::error::Result;
use crate::pagination::{CursorStrategy, Iter};
use crate::params::Form;
use crate::types::{Deleted, Method};
use tracing::debug;

const PATH: &str = "/recipients";

/// Iterator over recipients
pub type RecipientIter = Iter<Recipient>;

/// Client for `/recipients`
#[derive(Debug, Clone)]
pub struct RecipientClient {
    client: Client,
}

impl RecipientClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a recipient
    pub async fn create(&self, params: &RecipientParams) -> Result<Recipient> {
        let mut form = Form::new();
        form.add("name", params.name.as_str());
        form.add("type", params.kind.as_str());

        if let Some(bank) = &params.bank_account {
            bank.append_details(&mut form);
        }

        append_card(params, &mut form);

        form.add_non_empty("tax_id", &params.tax_id);
        form.add_non_empty("email", &params.email);
        form.add_non_empty("description", &params.description);

        params.params.append_to(&mut form);

        self.client.call_json(Method::POST, PATH, Some(&form)).await
    }

    /// Retrieve a recipient. Only the common params (expand, metadata) are sent.
    pub async fn get(&self, id: &str, params: Option<&RecipientParams>) -> Result<Recipient> {
        let form = params.map(|p| {
            let mut form = Form::new();
            p.params.append_to(&mut form);
            form
        });

        self.client
            .call_json(Method::GET, &object_path(id), form.as_ref())
            .await
    }

    /// Update a recipient. Empty fields are left unchanged.
    pub async fn update(&self, id: &str, params: Option<&RecipientParams>) -> Result<Recipient> {
        let form = params.map(|p| {
            let mut form = Form::new();
            form.add_non_empty("name", &p.name);

            if let Some(bank) = &p.bank_account {
                bank.append_details(&mut form);
            }

            append_card(p, &mut form);

            form.add_non_empty("tax_id", &p.tax_id);
            form.add_non_empty("default_card", &p.default_card);
            form.add_non_empty("email", &p.email);
            form.add_non_empty("description", &p.description);

            p.params.append_to(&mut form);
            form
        });

        self.client
            .call_json(Method::POST, &object_path(id), form.as_ref())
            .await
    }

    /// Delete a recipient
    pub async fn delete(&self, id: &str) -> Result<Deleted> {
        self.client
            .call_json(Method::DELETE, &object_path(id), None)
            .await
    }

    /// List recipients
    pub async fn list(&self, params: Option<&RecipientListParams>) -> RecipientIter {
        let mut form = Form::new();
        let list = params.map(|p| {
            if let Some(verified) = p.verified {
                form.add("verified", verified.to_string());
            }
            p.list.clone()
        });

        let strategy = list
            .as_ref()
            .map(CursorStrategy::for_params)
            .unwrap_or_default();
        debug!("Listing recipients with {:?} paging", strategy);

        Iter::new(list, form, strategy, self.client.fetcher::<Recipient>(PATH)).await
    }
}

fn object_path(id: &str) -> String {
    format!("{PATH}/{id}")
}

/// A card token wins over raw card details
fn append_card(params: &RecipientParams, form: &mut Form) {
    if !params.token.is_empty() {
        form.add("card", params.token.as_str());
    } else if let Some(card) = &params.card {
        card.append_details(form, true);
    }
}
