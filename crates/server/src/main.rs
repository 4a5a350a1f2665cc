#[tokio::main]
async fn main() -> anyhow::Result<()> {
    appraisal_server::start().await
}
