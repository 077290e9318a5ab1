use clap::Args;
use internship_portal::catalog::{PostingCatalog, PostingUpsert};
use internship_portal::config::AppConfig;
use internship_portal::error::AppError;
use internship_portal::store::SqliteStore;
use internship_portal::telemetry;
use std::sync::Arc;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct UpsertPostingArgs {
    /// Organization offering the internship
    #[arg(long)]
    pub(crate) company: String,
    /// Category or domain of the internship
    #[arg(long)]
    pub(crate) domain: String,
    /// Total slots to set; replaces the stored count
    #[arg(long)]
    pub(crate) slots: u32,
}

async fn open_store() -> Result<SqliteStore, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, config.environment)?;
    Ok(SqliteStore::open(&config.database).await?)
}

pub(crate) async fn init_db() -> Result<(), AppError> {
    let store = open_store().await?;
    store.close().await;
    info!("database initialised");
    Ok(())
}

pub(crate) async fn list_postings() -> Result<(), AppError> {
    let store = Arc::new(open_store().await?);
    let catalog = PostingCatalog::new(store.clone());
    let postings = catalog.list().await?;
    println!("{}", serde_json::to_string_pretty(&postings)?);
    store.close().await;
    Ok(())
}

pub(crate) async fn upsert_posting(args: UpsertPostingArgs) -> Result<(), AppError> {
    let store = Arc::new(open_store().await?);
    let catalog = PostingCatalog::new(store.clone());
    let posting = catalog
        .upsert(PostingUpsert::new(args.company, args.domain, args.slots))
        .await?;
    println!("{}", serde_json::to_string_pretty(&posting)?);
    store.close().await;
    Ok(())
}
