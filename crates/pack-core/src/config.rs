//! 包裝計算配置

use serde::{Deserialize, Serialize};

use crate::{PackError, Result};

/// 預設訂單上限（件）
pub const DEFAULT_MAX_ORDER_QTY: u64 = 10_000_000;

/// 預設搜尋範圍上限（訂單 + 最大規格）
pub const DEFAULT_MAX_HORIZON: u64 = 20_000_000;

/// 包裝計算參數配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// 訂單數量上限（None 表示不限制）
    ///
    /// 計算成本與 訂單數量 + 最大包裝規格 成正比，
    /// 由呼叫層在進入優化器前檢查
    pub max_order_qty: Option<u64>,

    /// 搜尋範圍上限（None 表示不限制）
    ///
    /// 計算表大小為 訂單數量 + 最大包裝規格，單一超大規格即可讓計算表
    /// 超出可配置的記憶體，因此與訂單上限分開檢查
    pub max_horizon: Option<u64>,

    /// 同包數時的規格選擇規則
    pub tie_break: TieBreakRule,

    /// 批量計算是否並行
    pub parallel_batch: bool,
}

impl CalculatorConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            max_order_qty: Some(DEFAULT_MAX_ORDER_QTY),
            max_horizon: Some(DEFAULT_MAX_HORIZON),
            tie_break: TieBreakRule::PreferLarger,
            parallel_batch: true,
        }
    }

    /// 從 JSON 文件載入配置，缺少的欄位使用預設值
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PackError::InvalidConfig(e.to_string()))
    }

    /// 建構器模式：設置訂單上限
    pub fn with_max_order_qty(mut self, limit: u64) -> Self {
        self.max_order_qty = Some(limit);
        self
    }

    /// 建構器模式：取消訂單上限
    pub fn without_order_limit(mut self) -> Self {
        self.max_order_qty = None;
        self
    }

    /// 建構器模式：設置搜尋範圍上限
    pub fn with_max_horizon(mut self, limit: u64) -> Self {
        self.max_horizon = Some(limit);
        self
    }

    /// 建構器模式：設置同包數選擇規則
    pub fn with_tie_break(mut self, rule: TieBreakRule) -> Self {
        self.tie_break = rule;
        self
    }

    /// 建構器模式：設置批量計算是否並行
    pub fn with_parallel_batch(mut self, parallel: bool) -> Self {
        self.parallel_batch = parallel;
        self
    }

    /// 檢查訂單是否在上限內
    pub fn check_order_limit(&self, order: u64) -> Result<()> {
        match self.max_order_qty {
            Some(limit) if order > limit => Err(PackError::OrderExceedsLimit { order, limit }),
            _ => Ok(()),
        }
    }

    /// 檢查 訂單 + 最大規格 是否在搜尋範圍上限內
    ///
    /// 超出時以 `OrderExceedsLimit` 返回此最大規格下可接受的最大訂單
    pub fn check_horizon(&self, order: u64, max_size: u64) -> Result<()> {
        let Some(limit) = self.max_horizon else {
            return Ok(());
        };
        match order.checked_add(max_size) {
            Some(horizon) if horizon <= limit => Ok(()),
            _ => Err(PackError::OrderExceedsLimit {
                order,
                limit: limit.saturating_sub(max_size),
            }),
        }
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// 同包數時的規格選擇規則
///
/// 兩個規格都能以相同的最少包數湊出某個小計時，記錄哪一個。
/// 出貨總件數與總包數不受影響，只影響規格組合。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreakRule {
    /// 優先較大規格
    #[default]
    PreferLarger,

    /// 優先較小規格
    PreferSmaller,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_config() {
        let config = CalculatorConfig::new();

        assert_eq!(config.max_order_qty, Some(DEFAULT_MAX_ORDER_QTY));
        assert_eq!(config.max_horizon, Some(DEFAULT_MAX_HORIZON));
        assert_eq!(config.tie_break, TieBreakRule::PreferLarger);
        assert!(config.parallel_batch);
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn test_config_builder() {
        let config = CalculatorConfig::new()
            .with_max_order_qty(1_000)
            .with_tie_break(TieBreakRule::PreferSmaller)
            .with_parallel_batch(false);

        assert_eq!(config.max_order_qty, Some(1_000));
        assert_eq!(config.tie_break, TieBreakRule::PreferSmaller);
        assert!(!config.parallel_batch);

        let unlimited = config.without_order_limit();
        assert_eq!(unlimited.max_order_qty, None);
    }

    #[test]
    fn test_check_order_limit() {
        let config = CalculatorConfig::new().with_max_order_qty(100);

        assert!(config.check_order_limit(100).is_ok());
        assert!(matches!(
            config.check_order_limit(101),
            Err(PackError::OrderExceedsLimit { order: 101, limit: 100 })
        ));

        // 無上限
        let unlimited = CalculatorConfig::new().without_order_limit();
        assert!(unlimited.check_order_limit(u64::MAX).is_ok());
    }

    #[test]
    fn test_check_horizon() {
        let config = CalculatorConfig::new().with_max_horizon(1_000);

        assert!(config.check_horizon(750, 250).is_ok());
        assert!(matches!(
            config.check_horizon(751, 250),
            Err(PackError::OrderExceedsLimit { order: 751, limit: 750 })
        ));

        // 規格本身超出上限時，沒有任何訂單可接受
        assert!(matches!(
            config.check_horizon(1, 4_000_000_000),
            Err(PackError::OrderExceedsLimit { order: 1, limit: 0 })
        ));
        assert!(matches!(
            config.check_horizon(u64::MAX, 1),
            Err(PackError::OrderExceedsLimit { .. })
        ));
    }

    #[test]
    fn test_from_json() {
        let config = CalculatorConfig::from_json(
            r#"{ "max_order_qty": 5000, "tie_break": "PreferSmaller" }"#,
        )
        .unwrap();

        assert_eq!(config.max_order_qty, Some(5000));
        assert_eq!(config.tie_break, TieBreakRule::PreferSmaller);
        // 未指定的欄位使用預設值
        assert!(config.parallel_batch);

        assert!(CalculatorConfig::from_json("not json").is_err());
    }
}
