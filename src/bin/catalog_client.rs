//! 产品目录命令行客户端
//!
//! 每个子命令对应一次用户操作；新增、编辑、删除之后都会重新加载并打印完整列表。

use clap::{Args, Parser, Subcommand};
use product_catalog::client::{CatalogClient, ClientConfig, ProductForm, ProductListView};
use product_catalog::infrastructure::logger::Logger;
use rust_decimal::Decimal;
use tracing::error;

#[derive(Parser, Debug)]
#[command(name = "catalog-client", version, about = "产品目录客户端")]
struct Cli {
    /// 服务地址，例如 http://10.0.2.2:5015/
    #[arg(long, env = "CATALOG_API_URL", global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 列出全部产品
    List,
    /// 按 id 查询产品
    Get { id: i32 },
    /// 新增产品
    Add(Fields),
    /// 编辑产品，未指定的字段保持原值
    Edit {
        id: i32,
        #[command(flatten)]
        fields: Fields,
    },
    /// 删除产品
    Delete { id: i32 },
}

#[derive(Args, Debug)]
struct Fields {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    code: Option<String>,
    #[arg(long)]
    price: Option<Decimal>,
}

impl Fields {
    fn apply(self, form: &mut ProductForm) {
        if let Some(name) = self.name {
            form.set_product_name(Some(name));
        }
        if let Some(code) = self.code {
            form.set_product_code(Some(code));
        }
        if let Some(price) = self.price {
            form.set_price(Some(price));
        }
    }
}

#[tokio::main]
async fn main() {
    Logger::init("warn");

    // 未捕获的 panic 只做诊断日志
    std::panic::set_hook(Box::new(|info| {
        error!("UNHANDLED PANIC: {}", info);
    }));

    if let Err(e) = run(Cli::parse()).await {
        error!("UNHANDLED ERROR: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = ClientConfig::resolve(cli.api_url.as_deref())?;
    tracing::debug!("=== API URL: {} ===", config.api_url);

    let client = CatalogClient::new(&config);
    let mut view = ProductListView::new(client.clone());

    match cli.command {
        Command::List => {
            view.activate().await?;
        }
        Command::Get { id } => {
            match client.get_product(id).await? {
                Some(product) => println!("{}", serde_json::to_string_pretty(&product)?),
                None => println!("产品 {} 不存在", id),
            }
            return Ok(());
        }
        Command::Add(fields) => {
            let mut form = ProductForm::new();
            fields.apply(&mut form);
            let created = view.add(form).await?;
            println!("✅ 已创建产品 {}", created.id);
        }
        Command::Edit { id, fields } => {
            view.activate().await?;
            if view.select(id).is_none() {
                anyhow::bail!("产品 {} 不存在", id);
            }
            if let Some(mut form) = view.edit_selected() {
                fields.apply(&mut form);
                view.edit(form).await?;
                println!("✅ 已更新产品 {}", id);
            }
        }
        Command::Delete { id } => {
            if view.delete(id).await? {
                println!("✅ 已删除产品 {}", id);
            } else {
                println!("产品 {} 不存在", id);
            }
        }
    }

    println!("{}", view.render());
    Ok(())
}
