use super::render;
use crate::bootstrap::Runtime;
use anyhow::Result;

pub async fn run(runtime: &Runtime, user: &str, text: &str) -> Result<()> {
    let result = runtime
        .assistant
        .recommendations
        .recommend_from_text(user, text)
        .await?;
    render::recommendation(&result);
    Ok(())
}
