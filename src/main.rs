use celesta::config::AppConfig;
use celesta::remote::NoopReloader;
use celesta::storage::FileStorage;
use celesta::store::{AuthStore, ContentStore};
use log::info;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Celesta: content catalog engine");

    let config = AppConfig::load()?;
    println!(
        "Configuration loaded: data_dir={} platform={:?}",
        config.storage.data_dir, config.platform
    );

    let storage = Arc::new(FileStorage::open(&config.storage.data_dir).await?);
    let remote = Arc::new(config.stub_remote());

    let content = ContentStore::open(storage.clone(), remote.clone()).await?;
    let auth = AuthStore::open(
        storage.clone(),
        remote,
        Arc::new(NoopReloader),
        config.platform,
    )
    .await?;

    info!(
        "catalog ready: {} courses, {} meditations, {} instructors, {} cards across {} decks, {} civilizations",
        content.courses().len(),
        content.meditations().len(),
        content.instructors().len(),
        content.metaphor_cards().len()
            + content.archangel_cards().len()
            + content.amu_mom_cards().len(),
        celesta::seed::card_decks().len(),
        content.civilizations().len(),
    );
    info!(
        "session: authenticated={} admin={}",
        auth.is_authenticated(),
        auth.is_admin()
    );

    if content.check_for_updates().await {
        info!("newer published content is available");
    }

    // Make sure the seeded snapshot is on disk before exiting.
    content.flush().await;
    auth.flush().await;
    println!("catalog persisted to {}", config.storage.data_dir);

    Ok(())
}
