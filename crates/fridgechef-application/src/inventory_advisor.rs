//! "What's about to expire?" chat queries.

use crate::collaborator::bounded;
use fridgechef_core::error::Result;
use fridgechef_core::inventory::InventoryRepository;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpiringReport {
    pub names: Vec<String>,
    pub message: String,
}

/// Answers inventory-check questions with a wider window than recommendations use.
pub struct InventoryAdvisor {
    inventory: Arc<dyn InventoryRepository>,
    within_days: u32,
    timeout: Duration,
}

impl InventoryAdvisor {
    pub fn new(inventory: Arc<dyn InventoryRepository>) -> Self {
        Self {
            inventory,
            within_days: 3,
            timeout: Duration::from_secs(15),
        }
    }

    pub fn with_window(mut self, within_days: u32) -> Self {
        self.within_days = within_days;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub async fn expiring_soon(&self, user_id: &str) -> Result<ExpiringReport> {
        let names = bounded(
            "inventory",
            self.timeout,
            self.inventory.find_expiring_names(user_id, self.within_days),
        )
        .await?;

        let message = if names.is_empty() {
            format!("{}일 안에 유통기한이 끝나는 재료가 없어요.", self.within_days)
        } else {
            format!(
                "{}일 안에 유통기한이 끝나는 재료는 {}이에요. 이 재료로 요리를 추천해 드릴까요?",
                self.within_days,
                names.join(", ")
            )
        };

        Ok(ExpiringReport { names, message })
    }
}
