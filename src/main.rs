use std::path::PathBuf;

use clap::Parser;
use product_catalog::config::Config;
use product_catalog::infrastructure::logger::Logger;
use product_catalog::server;
use tracing::error;

/// 产品目录 HTTP 服务
#[derive(Parser, Debug)]
#[command(name = "catalog-server", version, about)]
struct Args {
    /// TOML 配置文件路径
    #[arg(short, long, env = "CATALOG_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;

    Logger::init(&config.logging.level);

    // 错误只通过日志输出一次
    if let Err(e) = server::run(config).await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
    Ok(())
}
