//! 包裝主計算器

use pack_core::{CalculatorConfig, PackCatalog, PackError, PackSize};
use rayon::prelude::*;

use crate::{CalcWarning, CalculationResult, PackOptimizer};

/// 包裝計算器
///
/// 每次計算從目錄讀取一次規格快照，再交給優化器。不緩存任何結果。
pub struct PackCalculator<C: PackCatalog> {
    /// 包裝目錄
    catalog: C,

    /// 計算配置
    config: CalculatorConfig,

    /// 優化器
    optimizer: PackOptimizer,
}

impl<C: PackCatalog> PackCalculator<C> {
    /// 創建新的包裝計算器
    pub fn new(catalog: C, config: CalculatorConfig) -> Self {
        let optimizer = PackOptimizer::new(config.tie_break);
        Self {
            catalog,
            config,
            optimizer,
        }
    }

    /// 使用預設配置創建
    pub fn with_catalog(catalog: C) -> Self {
        Self::new(catalog, CalculatorConfig::default())
    }

    /// 主計算入口
    pub fn calculate(&self, order: i64) -> pack_core::Result<CalculationResult> {
        tracing::info!("開始包裝計算：訂單 {}", order);

        self.check_order(order)?;
        let sizes = self.catalog.list_pack_sizes()?;

        self.calculate_with_sizes(order, &sizes)
    }

    /// 批量計算
    ///
    /// 所有訂單共用同一份目錄快照，結果順序與輸入一致。
    /// 讀取目錄失敗時整批失敗，單筆訂單的錯誤則個別返回。
    pub fn calculate_batch(
        &self,
        orders: &[i64],
    ) -> pack_core::Result<Vec<pack_core::Result<CalculationResult>>> {
        tracing::info!(
            "開始批量包裝計算：訂單 {} 筆（並行: {}）",
            orders.len(),
            self.config.parallel_batch
        );

        let sizes = self.catalog.list_pack_sizes()?;
        let start_time = std::time::Instant::now();

        let calculate_one = |order: i64| -> pack_core::Result<CalculationResult> {
            self.check_order(order)?;
            self.calculate_with_sizes(order, &sizes)
        };

        let results: Vec<_> = if self.config.parallel_batch {
            orders.par_iter().map(|&order| calculate_one(order)).collect()
        } else {
            orders.iter().map(|&order| calculate_one(order)).collect()
        };

        let failed = results.iter().filter(|r| r.is_err()).count();
        tracing::info!(
            "批量包裝計算完成，耗時 {:?}，失敗 {} 筆",
            start_time.elapsed(),
            failed
        );

        Ok(results)
    }

    /// 以給定規格快照計算單筆訂單
    fn calculate_with_sizes(
        &self,
        order: i64,
        sizes: &[PackSize],
    ) -> pack_core::Result<CalculationResult> {
        let start_time = std::time::Instant::now();

        // 呼叫端已經過 check_order，order > 0
        let order_qty = order.unsigned_abs();
        if let Some(max_size) = sizes.iter().max() {
            self.config.check_horizon(order_qty, max_size.as_u64())?;
        }

        let distribution = self.optimizer.compute_distribution(order, sizes)?;

        let mut result = CalculationResult::new(order_qty, distribution);

        let duplicates = Self::count_duplicates(sizes);
        if duplicates > 0 {
            tracing::warn!("包裝目錄含 {} 個重複規格，已合併", duplicates);
            result.add_warning(CalcWarning::warning(format!(
                "包裝目錄含 {} 個重複規格，已合併計算",
                duplicates
            )));
        }

        let overshoot = result.overshoot();
        if overshoot > 0 {
            result.add_warning(CalcWarning::info(format!(
                "出貨超出訂單 {} 件",
                overshoot
            )));
        }

        result.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!(
            "包裝計算完成：訂單 {}，出貨 {} 件，{} 包，耗時 {:?}",
            result.order,
            result.total_items(),
            result.distribution.pack_count(),
            start_time.elapsed()
        );

        Ok(result)
    }

    /// 呼叫層檢查：訂單須為正數且不超過上限
    fn check_order(&self, order: i64) -> pack_core::Result<()> {
        let qty = u64::try_from(order)
            .ok()
            .filter(|&qty| qty > 0)
            .ok_or(PackError::InvalidOrder(order))?;
        self.config.check_order_limit(qty)
    }

    fn count_duplicates(sizes: &[PackSize]) -> usize {
        let mut unique = sizes.to_vec();
        unique.sort_unstable();
        unique.dedup();
        sizes.len() - unique.len()
    }

    /// 獲取包裝目錄引用
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// 獲取配置引用
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }
}
