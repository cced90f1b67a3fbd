//! # Pack Core
//!
//! 核心資料模型與類型定義

pub mod catalog;
pub mod config;
pub mod distribution;
pub mod pack;

// Re-export 主要類型
pub use catalog::{InMemoryCatalog, PackCatalog, DEFAULT_PACK_SIZES};
pub use config::{CalculatorConfig, TieBreakRule};
pub use distribution::{Distribution, PackLine};
pub use pack::{Pack, PackSize};

/// 包裝計算錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum PackError {
    #[error("無效的訂單數量: {0}（必須大於零）")]
    InvalidOrder(i64),

    #[error("沒有可用的包裝規格")]
    NoPackSizesAvailable,

    #[error("無法以現有包裝規格滿足訂單: {0}")]
    UnfulfillableOrder(u64),

    #[error("包裝計算內部錯誤: {0}")]
    InternalComputationError(String),

    #[error("無效的包裝規格: {0}（必須大於零）")]
    InvalidPackSize(i64),

    #[error("包裝規格已存在: {0}")]
    DuplicatePackSize(u32),

    #[error("找不到包裝: {0}")]
    PackNotFound(uuid::Uuid),

    #[error("訂單數量 {order} 超過上限 {limit}")]
    OrderExceedsLimit { order: u64, limit: u64 },

    #[error("無效的訂單輸入: {0}")]
    InvalidOrderInput(String),

    #[error("無法讀取包裝目錄: {0}")]
    CatalogUnavailable(String),

    #[error("配置錯誤: {0}")]
    InvalidConfig(String),
}

impl PackError {
    /// 是否為呼叫端輸入造成的錯誤（可直接拒絕，不需重試）
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PackError::InvalidOrder(_)
                | PackError::InvalidPackSize(_)
                | PackError::InvalidOrderInput(_)
                | PackError::OrderExceedsLimit { .. }
                | PackError::DuplicatePackSize(_)
                | PackError::PackNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PackError>;
