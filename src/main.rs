/*
 * Responsibility
 * - start the tokio runtime and call app::run() (no logic here)
 */
use anyhow::Result;

use jwt_token_extractor::app;

#[tokio::main]
async fn main() -> Result<()> {
    app::run().await
}
