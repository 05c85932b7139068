//! 服务启动：根据配置选择存储、组装路由并监听

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::app::build_router;
use crate::app::product::handler::AppState;
use crate::app::product::service::ProductService;
use crate::config::{Config, StoreBackend};
use crate::infrastructure::database::DatabaseManager;
use crate::infrastructure::store::{MemoryProductStore, PgProductStore, ProductStore};

/// 根据配置创建存储
pub async fn open_store(config: &Config) -> anyhow::Result<Arc<dyn ProductStore>> {
    match config.database.backend {
        StoreBackend::Postgres => {
            let db = &config.database;
            let manager = DatabaseManager::connect(
                &db.url,
                db.max_connections,
                db.min_connections,
                db.acquire_timeout_seconds,
            )
            .await
            .context("failed to connect to database")?;
            manager
                .ensure_schema()
                .await
                .context("failed to create product table")?;

            Ok(Arc::new(PgProductStore::new(manager.get_pool().clone())))
        }
        StoreBackend::Memory => {
            warn!("Using in-memory product store, data is lost on exit");
            Ok(Arc::new(MemoryProductStore::new()))
        }
    }
}

pub fn app_state(store: Arc<dyn ProductStore>) -> AppState {
    AppState {
        product_service: ProductService::new(store),
    }
}

/// 在已绑定的监听器上运行服务，直到收到 Ctrl+C
pub async fn serve(
    listener: TcpListener,
    store: Arc<dyn ProductStore>,
    request_timeout: Duration,
) -> anyhow::Result<()> {
    let app = build_router(app_state(store), request_timeout);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

pub async fn run(config: Config) -> anyhow::Result<()> {
    let store = open_store(&config).await?;

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    info!("🚀 Product catalog running on http://{}", listener.local_addr()?);
    info!("📖 API 端点:");
    info!("   GET    /api/product      - 获取所有产品");
    info!("   POST   /api/product/:id  - 按 id 查询产品");
    info!("   GET    /api/product/:id  - 按 id 获取产品");
    info!("   POST   /api/product      - 创建产品");
    info!("   PUT    /api/product      - 更新产品");
    info!("   DELETE /api/product/:id  - 删除产品");
    info!("   GET    /health           - 健康检查");

    serve(
        listener,
        store,
        Duration::from_secs(config.http.timeout_seconds),
    )
    .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
