use crate::error::Result;
use async_trait::async_trait;

/// Read-only queries against a user's refrigerator inventory.
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Names of the user's items that expire within `within_days` days from today.
    async fn find_expiring_names(&self, user_id: &str, within_days: u32) -> Result<Vec<String>>;

    /// The subset of `candidates` the user actually has on hand.
    ///
    /// Order follows `candidates`; names the user does not own are dropped.
    async fn find_names_matching(&self, user_id: &str, candidates: &[String])
    -> Result<Vec<String>>;
}
