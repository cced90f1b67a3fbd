//! 包裝規格模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use uuid::Uuid;

use crate::{PackError, Result};

/// 包裝規格（每包的件數，恆為正整數）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackSize(NonZeroU32);

impl PackSize {
    /// 創建包裝規格，非正數或超出範圍時返回 `InvalidPackSize`
    pub fn new(size: i64) -> Result<Self> {
        u32::try_from(size)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or(PackError::InvalidPackSize(size))
    }

    /// 每包件數
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// 以 u64 表示（計算總件數時使用）
    pub fn as_u64(self) -> u64 {
        u64::from(self.0.get())
    }

    /// 以 usize 表示（作為計算表索引）
    pub fn as_usize(self) -> usize {
        self.0.get() as usize
    }
}

impl TryFrom<i64> for PackSize {
    type Error = PackError;

    fn try_from(size: i64) -> Result<Self> {
        Self::new(size)
    }
}

impl TryFrom<u32> for PackSize {
    type Error = PackError;

    fn try_from(size: u32) -> Result<Self> {
        Self::new(i64::from(size))
    }
}

impl fmt::Display for PackSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 包裝目錄記錄
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pack {
    /// 包裝ID
    pub id: Uuid,

    /// 包裝規格
    pub size: PackSize,

    /// 建立時間
    pub created_at: DateTime<Utc>,

    /// 最後更新時間
    pub updated_at: DateTime<Utc>,
}

impl Pack {
    /// 創建新的包裝記錄
    pub fn new(size: PackSize) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            size,
            created_at: now,
            updated_at: now,
        }
    }

    /// 變更包裝規格並更新時間戳
    pub fn resize(&mut self, size: PackSize) {
        self.size = size;
        self.updated_at = Utc::now();
    }
}
