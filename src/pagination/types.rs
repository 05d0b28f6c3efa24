//! Pagination types
//!
//! Request-side list parameters, response-side page metadata, and the cursor
//! conventions used to ask for the next page.

use crate::params::Form;
use serde::{Deserialize, Serialize};

const STARTING_AFTER: &str = "starting_after";
const ENDING_BEFORE: &str = "ending_before";
const LIMIT: &str = "limit";

// ============================================================================
// Filters
// ============================================================================

/// A single list filter: `field[op]=value`, or `field=value` without an operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub key: String,
    pub op: String,
    pub value: String,
}

impl Filter {
    /// Form key for this filter
    pub fn form_key(&self) -> String {
        if self.op.is_empty() {
            self.key.clone()
        } else {
            format!("{}[{}]", self.key, self.op)
        }
    }
}

/// Ordered collection of list filters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    filters: Vec<Filter>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter. `op` may be empty (`created`, `""`, `"1400000000"`) or an
    /// operator such as `gt`, `gte`, `lt`, `lte`.
    pub fn add_filter(
        &mut self,
        key: impl Into<String>,
        op: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.filters.push(Filter {
            key: key.into(),
            op: op.into(),
            value: value.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Filter> {
        self.filters.iter()
    }

    pub fn append_to(&self, form: &mut Form) {
        for filter in &self.filters {
            form.add(filter.form_key(), filter.value.as_str());
        }
    }
}

// ============================================================================
// List Params
// ============================================================================

/// Parameters shared by every list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Free-form filters
    pub filters: Filters,
    /// Return objects after this ID (forward paging)
    pub starting_after: Option<String>,
    /// Return objects before this ID (backward paging)
    pub ending_before: Option<String>,
    /// Page size
    pub limit: Option<u32>,
    /// Only fetch the first page
    pub single: bool,
}

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Start after the given object
    #[must_use]
    pub fn starting_after(mut self, id: impl Into<String>) -> Self {
        self.starting_after = Some(id.into());
        self
    }

    /// End before the given object
    #[must_use]
    pub fn ending_before(mut self, id: impl Into<String>) -> Self {
        self.ending_before = Some(id.into());
        self
    }

    /// Stop after the first page
    #[must_use]
    pub fn single(mut self) -> Self {
        self.single = true;
        self
    }

    /// Add a filter
    #[must_use]
    pub fn filter(
        mut self,
        key: impl Into<String>,
        op: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.filters.add_filter(key, op, value);
        self
    }

    /// Append paging fields and filters. `single` is client-side only.
    pub fn append_to(&self, form: &mut Form) {
        if let Some(id) = &self.starting_after {
            form.add(STARTING_AFTER, id.as_str());
        }
        if let Some(id) = &self.ending_before {
            form.add(ENDING_BEFORE, id.as_str());
        }
        if let Some(limit) = self.limit {
            form.add(LIMIT, limit.to_string());
        }
        self.filters.append_to(form);
    }
}

// ============================================================================
// List Responses
// ============================================================================

/// Metadata returned with every page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMeta {
    /// Total number of objects, when the endpoint reports it
    #[serde(default, rename = "total_count", alias = "count")]
    pub count: Option<u64>,
    /// Whether more pages exist after this one
    #[serde(default)]
    pub has_more: bool,
    /// URL of the list endpoint
    #[serde(default)]
    pub url: Option<String>,
}

/// One page of a list endpoint
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ListResponse<T> {
    #[serde(flatten)]
    pub meta: ListMeta,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>, has_more: bool) -> Self {
        Self {
            meta: ListMeta {
                has_more,
                ..Default::default()
            },
            data,
        }
    }

    /// Set the total count
    #[must_use]
    pub fn with_count(mut self, count: u64) -> Self {
        self.meta.count = Some(count);
        self
    }
}

/// An object that can appear in a list page
pub trait ListItem {
    /// Object ID, used as the paging cursor
    fn id(&self) -> &str;
}

// ============================================================================
// Cursor Strategy
// ============================================================================

/// How the next page is requested once the current one is drained
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CursorStrategy {
    /// `starting_after` = ID of the last item of the page
    #[default]
    StartingAfter,
    /// `ending_before` = ID of the first item of the page
    EndingBefore,
    /// `param` = starting offset plus the number of items fetched so far
    Offset { param: String },
}

impl CursorStrategy {
    /// Offset paging with the given parameter name
    pub fn offset(param: impl Into<String>) -> Self {
        Self::Offset {
            param: param.into(),
        }
    }

    /// Backward paging if the caller set `ending_before`, forward otherwise
    pub fn for_params(params: &ListParams) -> Self {
        if params.ending_before.is_some() {
            Self::EndingBefore
        } else {
            Self::StartingAfter
        }
    }

    /// Cursor value to remember from a freshly fetched page
    pub(crate) fn cursor_of<T: ListItem>(&self, page: &[T], fetched: u64) -> Option<String> {
        match self {
            Self::StartingAfter => page.last().map(|item| item.id().to_string()),
            Self::EndingBefore => page.first().map(|item| item.id().to_string()),
            Self::Offset { .. } => (!page.is_empty()).then(|| fetched.to_string()),
        }
    }

    /// Position the first request starts from
    ///
    /// Non-zero only for offset paging when the form already carries the
    /// offset parameter.
    pub(crate) fn start_position(&self, form: &Form) -> u64 {
        match self {
            Self::Offset { param } => form
                .get(param)
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
            _ => 0,
        }
    }

    /// Write the cursor into the form for the next request
    pub(crate) fn apply(&self, form: &mut Form, cursor: &str) {
        match self {
            Self::StartingAfter => form.set(STARTING_AFTER, cursor),
            Self::EndingBefore => form.set(ENDING_BEFORE, cursor),
            Self::Offset { param } => form.set(param.as_str(), cursor),
        }
    }
}
