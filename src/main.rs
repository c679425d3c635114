#[tokio::main]
async fn main() -> std::io::Result<()> {
    naval_combat::run_with_config().await
}
