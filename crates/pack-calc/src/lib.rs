//! # Pack Calculation Engine
//!
//! 包裝分配計算引擎

pub mod calculator;
pub mod handler;
pub mod optimizer;

// Re-export 主要類型
pub use calculator::PackCalculator;
pub use handler::{parse_order_quantity, HandlerResponse, RequestHandler, ResponseStatus};
pub use optimizer::PackOptimizer;

use pack_core::Distribution;
use serde::Serialize;

/// 包裝計算結果
#[derive(Debug, Clone, Serialize)]
pub struct CalculationResult {
    /// 訂單數量
    pub order: u64,

    /// 出貨分配
    pub distribution: Distribution,

    /// 警告信息
    pub warnings: Vec<CalcWarning>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl CalculationResult {
    /// 創建計算結果
    pub fn new(order: u64, distribution: Distribution) -> Self {
        Self {
            order,
            distribution,
            warnings: Vec::new(),
            calculation_time_ms: None,
        }
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: CalcWarning) {
        self.warnings.push(warning);
    }

    /// 出貨總件數
    pub fn total_items(&self) -> u64 {
        self.distribution.total_items()
    }

    /// 超出訂單的件數
    pub fn overshoot(&self) -> u64 {
        self.distribution.overshoot(self.order)
    }
}

/// 計算警告
#[derive(Debug, Clone, Serialize)]
pub struct CalcWarning {
    pub message: String,
    pub severity: WarningSeverity,
}

impl CalcWarning {
    pub fn new(message: String, severity: WarningSeverity) -> Self {
        Self { message, severity }
    }

    pub fn info(message: String) -> Self {
        Self::new(message, WarningSeverity::Info)
    }

    pub fn warning(message: String) -> Self {
        Self::new(message, WarningSeverity::Warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WarningSeverity {
    Info,
    Warning,
}
