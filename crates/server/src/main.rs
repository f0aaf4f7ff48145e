#[tokio::main]
async fn main() -> anyhow::Result<()> {
    roadmap_server::start().await
}
