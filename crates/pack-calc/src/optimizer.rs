//! 包裝分配優化器
//!
//! 以完全背包（unbounded knapsack）動態規劃求出：
//! 1. 出貨總件數最少（≥ 訂單數量）
//! 2. 同總件數下包數最少
//!
//! 搜尋範圍為 `[0, 訂單 + 最大規格)`：若最佳解超出訂單達一個最大規格以上，
//! 拿掉一包最大規格仍能滿足訂單，與最佳性矛盾。

use pack_core::{Distribution, PackError, PackSize, Result, TieBreakRule};

/// 計算表索引上限（約 1 GiB 計算表）
const MAX_HORIZON: u64 = 1 << 27;

/// 計算表單格：以最少包數湊出該總數的方式
#[derive(Debug, Clone, Copy)]
struct Step {
    /// 最少包數
    packs: u32,
    /// 最後加入的規格（回溯用）
    last: PackSize,
}

/// 包裝分配優化器
#[derive(Debug, Clone, Copy, Default)]
pub struct PackOptimizer {
    tie_break: TieBreakRule,
}

impl PackOptimizer {
    /// 創建優化器
    pub fn new(tie_break: TieBreakRule) -> Self {
        Self { tie_break }
    }

    pub fn tie_break(&self) -> TieBreakRule {
        self.tie_break
    }

    /// 計算最佳包裝分配
    ///
    /// # 參數
    /// * `order` - 訂單數量，必須大於零
    /// * `available_sizes` - 包裝規格快照，順序不影響結果，重複值會被合併
    ///
    /// # 錯誤
    /// * `InvalidOrder` - 訂單數量 ≤ 0
    /// * `NoPackSizesAvailable` - 沒有任何規格
    /// * `OrderExceedsLimit` - 訂單 + 最大規格 超出計算表上限
    /// * `UnfulfillableOrder` - 搜尋範圍內沒有可達總數
    /// * `InternalComputationError` - 回溯時找不到記錄的規格
    pub fn compute_distribution(
        &self,
        order: i64,
        available_sizes: &[PackSize],
    ) -> Result<Distribution> {
        let order_qty = u64::try_from(order)
            .ok()
            .filter(|&qty| qty > 0)
            .ok_or(PackError::InvalidOrder(order))?;

        let sizes = self.ordered_sizes(available_sizes);
        let max_size = sizes
            .iter()
            .max()
            .copied()
            .ok_or(PackError::NoPackSizesAvailable)?;

        let horizon = Self::horizon(order_qty, max_size)?;
        tracing::debug!(
            "訂單 {}：規格 {} 種，最大規格 {}，搜尋範圍 {}",
            order_qty,
            sizes.len(),
            max_size,
            horizon
        );

        let table = Self::build_table(&sizes, horizon);

        // 第一個 ≥ 訂單的可達總數即為最少超出量
        let order_index = order_qty as usize;
        let best_total = (order_index..horizon)
            .find(|&total| table[total].is_some())
            .ok_or(PackError::UnfulfillableOrder(order_qty))?;

        let distribution = Self::reconstruct(&table, best_total)?;

        tracing::debug!(
            "訂單 {}：出貨 {} 件，{} 包",
            order_qty,
            distribution.total_items(),
            distribution.pack_count()
        );

        Ok(distribution)
    }

    /// 去重後依選擇規則排序，同包數時先出現的規格勝出
    fn ordered_sizes(&self, available_sizes: &[PackSize]) -> Vec<PackSize> {
        let mut sizes = available_sizes.to_vec();
        sizes.sort_unstable();
        sizes.dedup();
        if self.tie_break == TieBreakRule::PreferLarger {
            sizes.reverse();
        }
        sizes
    }

    /// 搜尋範圍 = 訂單 + 最大規格
    fn horizon(order: u64, max_size: PackSize) -> Result<usize> {
        let horizon = order.saturating_add(max_size.as_u64());
        if horizon > MAX_HORIZON {
            return Err(PackError::OrderExceedsLimit {
                order,
                limit: MAX_HORIZON.saturating_sub(max_size.as_u64()),
            });
        }
        usize::try_from(horizon).map_err(|_| PackError::OrderExceedsLimit {
            order,
            limit: usize::MAX as u64 - max_size.as_u64(),
        })
    }

    /// 填表：table[t] 為湊出恰好 t 件的最少包數，None 表示不可達
    ///
    /// table[0] 保持 None，視為以 0 包可達
    fn build_table(sizes: &[PackSize], horizon: usize) -> Vec<Option<Step>> {
        let mut table: Vec<Option<Step>> = vec![None; horizon];

        for total in 1..horizon {
            let mut best: Option<Step> = None;

            for &size in sizes {
                let Some(prev) = total.checked_sub(size.as_usize()) else {
                    continue;
                };

                let prev_packs = if prev == 0 {
                    0
                } else {
                    match table[prev] {
                        Some(step) => step.packs,
                        None => continue,
                    }
                };

                let packs = prev_packs + 1;
                if best.map_or(true, |b| packs < b.packs) {
                    best = Some(Step { packs, last: size });
                }
            }

            table[total] = best;
        }

        table
    }

    /// 從選定總數回溯出各規格包數
    fn reconstruct(table: &[Option<Step>], best_total: usize) -> Result<Distribution> {
        let expected_packs = table[best_total].map(|step| step.packs);

        let mut distribution = Distribution::new();
        let mut remaining = best_total;

        while remaining > 0 {
            let step = table[remaining].ok_or_else(|| {
                tracing::error!("計算表錯誤：總數 {} 無記錄規格", remaining);
                PackError::InternalComputationError(format!(
                    "總數 {} 沒有記錄的包裝規格",
                    remaining
                ))
            })?;

            distribution.add_pack(step.last);
            remaining = remaining.checked_sub(step.last.as_usize()).ok_or_else(|| {
                tracing::error!("計算表錯誤：總數 {} 小於規格 {}", remaining, step.last);
                PackError::InternalComputationError(format!(
                    "總數 {} 小於記錄的規格 {}",
                    remaining, step.last
                ))
            })?;
        }

        if expected_packs != Some(distribution.pack_count() as u32) {
            tracing::error!(
                "計算表錯誤：預期 {:?} 包，回溯得 {} 包",
                expected_packs,
                distribution.pack_count()
            );
            return Err(PackError::InternalComputationError(format!(
                "回溯包數 {} 與計算表不一致",
                distribution.pack_count()
            )));
        }

        Ok(distribution)
    }
}
