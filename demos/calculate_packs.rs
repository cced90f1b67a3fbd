//! 包裝計算示例
//!
//! 用法：`cargo run --example calculate_packs -- 1 251 501 12001`

use packs::{InMemoryCatalog, PackCalculator, RequestHandler};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== 包裝分配計算示例 ===\n");

    // 創建含預設規格的目錄
    let catalog = InMemoryCatalog::with_default_sizes();

    println!("包裝規格:");
    for pack in catalog.list_packs()? {
        println!("  - {} 件/包", pack.size);
    }

    let handler = RequestHandler::new(PackCalculator::with_catalog(catalog));

    let mut orders: Vec<String> = std::env::args().skip(1).collect();
    if orders.is_empty() {
        orders = ["1", "250", "251", "501", "12001"]
            .iter()
            .map(|s| s.to_string())
            .collect();
    }

    println!("\n計算結果:");
    for raw in &orders {
        let response = handler.handle_calculate_json(raw);
        println!(
            "  訂單 {:>8} → [{}] {}",
            raw,
            response.status.status_code(),
            response.body
        );
    }

    Ok(())
}
