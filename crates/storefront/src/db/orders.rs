//! Append-only order log.

use tracing::instrument;

use sonero_core::{Rule, validate};

use super::RepositoryError;
use crate::models::{InquiryForm, Order, OrderDetails};
use crate::store::{self, KeyValueStore, StoreError};

/// Rules applied to every inquiry form.
const INQUIRY_RULES: &[(&str, Rule)] = &[
    ("name", Rule::Name),
    ("email", Rule::Email),
    ("phone", Rule::Phone),
    ("details", Rule::Details),
];

/// Repository for submitted orders. Orders are never updated or deleted.
pub struct OrderLog<'a, S> {
    store: &'a S,
    key: &'a str,
}

impl<'a, S: KeyValueStore> OrderLog<'a, S> {
    /// Create a new order log.
    #[must_use]
    pub const fn new(store: &'a S, key: &'a str) -> Self {
        Self { store, key }
    }

    /// Load every order, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DataCorruption` if the stored log is not a
    /// valid order list, or `RepositoryError::Store` if the read fails.
    pub async fn all(&self) -> Result<Vec<Order>, RepositoryError> {
        read_log(self.store, self.key).await
    }

    /// Stamp `details` with an id and timestamp and append it to the log.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DataCorruption` if the existing log cannot be
    /// read, or `RepositoryError::Store` if the write fails.
    #[instrument(skip(self, details), fields(key = self.key, kind = %details.kind))]
    pub async fn append(&self, details: OrderDetails) -> Result<Order, RepositoryError> {
        let mut orders = read_log(self.store, self.key).await?;
        let order = Order::create(details);
        orders.push(order.clone());

        store::set_json(self.store, self.key, &orders).await?;
        tracing::info!(id = %order.id, total = orders.len(), "Order recorded");
        Ok(order)
    }

    /// Validate an inquiry form and record it.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Validation` with the per-field report if any
    /// field is invalid (nothing is written), otherwise the errors of
    /// [`OrderLog::append`].
    #[instrument(skip_all, fields(key = self.key, kind = %form.kind))]
    pub async fn submit_inquiry(&self, form: InquiryForm) -> Result<Order, RepositoryError> {
        let report = validate(&form.fields(), INQUIRY_RULES);
        if !report.is_valid() {
            tracing::debug!(%report, "Inquiry rejected");
            return Err(RepositoryError::Validation(report));
        }
        self.append(OrderDetails::from(form)).await
    }
}

/// Read the order log strictly: a missing key is an empty log, anything
/// unparsable is corruption.
pub(crate) async fn read_log<S: KeyValueStore>(
    store: &S,
    key: &str,
) -> Result<Vec<Order>, RepositoryError> {
    match store::get_json(store, key).await {
        Ok(orders) => Ok(orders.unwrap_or_default()),
        Err(StoreError::Serialization(e)) => {
            tracing::error!(key, error = %e, "Order log is unreadable");
            Err(RepositoryError::DataCorruption(format!(
                "order log `{key}`: {e}"
            )))
        }
        Err(e) => Err(e.into()),
    }
}
