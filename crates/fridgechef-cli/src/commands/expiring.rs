use super::render;
use crate::bootstrap::Runtime;
use anyhow::Result;

pub async fn run(runtime: &Runtime, user: &str) -> Result<()> {
    let report = runtime.assistant.inventory.expiring_soon(user).await?;
    render::expiring(&report);
    Ok(())
}
