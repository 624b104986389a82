#[tokio::main]
async fn main() -> oceanchat::error::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("oceanchat=info"))
        .init();
    log::info!("Starting oceanchat");

    match oceanchat::run().await {
        Ok(()) => {
            log::info!("Chat shut down successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Chat encountered an error: {}", e);
            eprintln!("{}", e.user_message());
            Err(e)
        }
    }
}
