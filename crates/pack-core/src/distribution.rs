//! 出貨分配模型

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::PackSize;

/// 出貨分配（包裝規格 → 包數）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    counts: BTreeMap<PackSize, u64>,
}

impl Distribution {
    /// 創建空的分配
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加一包指定規格
    pub fn add_pack(&mut self, size: PackSize) {
        *self.counts.entry(size).or_insert(0) += 1;
    }

    /// 指定規格的包數（未使用則為 0）
    pub fn count_of(&self, size: PackSize) -> u64 {
        self.counts.get(&size).copied().unwrap_or(0)
    }

    /// 出貨總件數 Σ size × count
    pub fn total_items(&self) -> u64 {
        self.counts
            .iter()
            .map(|(size, count)| size.as_u64() * count)
            .sum()
    }

    /// 總包數 Σ count
    pub fn pack_count(&self) -> u64 {
        self.counts.values().sum()
    }

    /// 超出訂單的件數
    pub fn overshoot(&self, order: u64) -> u64 {
        self.total_items().saturating_sub(order)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// 依規格遞增迭代
    pub fn iter(&self) -> impl Iterator<Item = (PackSize, u64)> + '_ {
        self.counts.iter().map(|(size, count)| (*size, *count))
    }

    /// 轉換為依規格遞減排序的明細
    pub fn lines(&self) -> Vec<PackLine> {
        self.counts
            .iter()
            .rev()
            .map(|(size, count)| PackLine {
                size: size.get(),
                count: *count,
            })
            .collect()
    }
}

impl FromIterator<(PackSize, u64)> for Distribution {
    fn from_iter<I: IntoIterator<Item = (PackSize, u64)>>(iter: I) -> Self {
        let mut distribution = Self::new();
        for (size, count) in iter {
            if count > 0 {
                *distribution.counts.entry(size).or_insert(0) += count;
            }
        }
        distribution
    }
}

/// 分配明細（回應格式）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackLine {
    /// 包裝規格
    pub size: u32,
    /// 包數
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(s: i64) -> PackSize {
        PackSize::new(s).unwrap()
    }

    #[test]
    fn test_add_packs() {
        let mut distribution = Distribution::new();
        distribution.add_pack(size(5000));
        distribution.add_pack(size(250));
        distribution.add_pack(size(5000));
        distribution.add_pack(size(2000));

        assert_eq!(distribution.count_of(size(5000)), 2);
        assert_eq!(distribution.count_of(size(500)), 0);
        assert_eq!(distribution.total_items(), 12250);
        assert_eq!(distribution.pack_count(), 4);
        assert_eq!(distribution.overshoot(12001), 249);
    }

    #[test]
    fn test_lines_sorted_descending() {
        let distribution: Distribution =
            vec![(size(250), 1), (size(1000), 1), (size(500), 1)].into_iter().collect();

        let lines = distribution.lines();
        assert_eq!(
            lines,
            vec![
                PackLine { size: 1000, count: 1 },
                PackLine { size: 500, count: 1 },
                PackLine { size: 250, count: 1 },
            ]
        );
    }

    #[test]
    fn test_from_iter_skips_zero_counts() {
        let distribution: Distribution =
            vec![(size(250), 0), (size(500), 2)].into_iter().collect();

        assert_eq!(distribution.iter().count(), 1);
        assert_eq!(distribution.total_items(), 1000);
    }

    #[test]
    fn test_empty_distribution() {
        let distribution = Distribution::new();
        assert!(distribution.is_empty());
        assert_eq!(distribution.total_items(), 0);
        assert_eq!(distribution.overshoot(10), 0);
    }

    #[test]
    fn test_pack_line_json() {
        let line = PackLine { size: 500, count: 3 };
        assert_eq!(
            serde_json::to_string(&line).unwrap(),
            r#"{"size":500,"count":3}"#
        );
    }
}
