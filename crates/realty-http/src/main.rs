use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use realty_core::Registry;
use realty_http::router;
use realty_store::JsonFileStore;

#[derive(Debug, Parser)]
#[command(name = "realty-api", version, about = "File-backed realty CRUD API")]
struct Args {
    /// Address to bind the HTTP listener on
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// Path to the JSON document backing the store
    #[arg(long, default_value = "db.json")]
    db_path: PathBuf,

    /// Seed an empty document if the backing file is missing
    #[arg(long)]
    init: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let store = JsonFileStore::new(&args.db_path);
    if args.init && store.create_if_missing()? {
        tracing::info!("seeded empty document at {}", args.db_path.display());
    }

    let registry = Arc::new(Registry::new(store));
    let app = router(registry);

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    tracing::info!("realty api listening on http://{}", args.bind);
    axum::serve(listener, app).await?;
    Ok(())
}
