//! 包裝目錄
//!
//! `PackCatalog` 是計算器讀取包裝規格的唯一入口，每次計算取一次快照。
//! `InMemoryCatalog` 提供帶 CRUD 的記憶體實現，規格值不可重複。

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use crate::{Pack, PackError, PackSize, Result};

/// 預設包裝規格
pub const DEFAULT_PACK_SIZES: [u32; 5] = [250, 500, 1000, 2000, 5000];

/// 包裝目錄讀取介面
pub trait PackCatalog: Send + Sync {
    /// 列出目前可用的包裝規格（慣例為遞減排序，呼叫端不應依賴順序）
    fn list_pack_sizes(&self) -> Result<Vec<PackSize>>;
}

impl PackCatalog for Vec<PackSize> {
    fn list_pack_sizes(&self) -> Result<Vec<PackSize>> {
        Ok(self.clone())
    }
}

impl<T: PackCatalog + ?Sized> PackCatalog for Arc<T> {
    fn list_pack_sizes(&self) -> Result<Vec<PackSize>> {
        (**self).list_pack_sizes()
    }
}

/// 記憶體包裝目錄
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    packs: RwLock<Vec<Pack>>,
}

impl InMemoryCatalog {
    /// 創建空目錄
    pub fn new() -> Self {
        Self::default()
    }

    /// 創建含預設規格的目錄
    pub fn with_default_sizes() -> Self {
        let packs = DEFAULT_PACK_SIZES
            .iter()
            .filter_map(|&size| PackSize::try_from(size).ok())
            .map(Pack::new)
            .collect();
        Self {
            packs: RwLock::new(packs),
        }
    }

    /// 目錄為空時寫入預設規格，返回寫入筆數
    pub fn seed_defaults(&self) -> Result<usize> {
        let mut packs = self.write()?;
        if !packs.is_empty() {
            return Ok(0);
        }
        packs.extend(
            DEFAULT_PACK_SIZES
                .iter()
                .filter_map(|&size| PackSize::try_from(size).ok())
                .map(Pack::new),
        );
        Ok(packs.len())
    }

    /// 列出所有包裝（依規格遞減）
    pub fn list_packs(&self) -> Result<Vec<Pack>> {
        let mut packs = self.read()?.clone();
        packs.sort_by(|a, b| b.size.cmp(&a.size));
        Ok(packs)
    }

    /// 依ID查詢包裝
    pub fn get_pack(&self, id: Uuid) -> Result<Option<Pack>> {
        Ok(self.read()?.iter().find(|p| p.id == id).cloned())
    }

    /// 新增包裝規格
    pub fn add_pack(&self, size: i64) -> Result<Pack> {
        let size = PackSize::new(size)?;
        let mut packs = self.write()?;
        if packs.iter().any(|p| p.size == size) {
            return Err(PackError::DuplicatePackSize(size.get()));
        }
        let pack = Pack::new(size);
        packs.push(pack.clone());
        Ok(pack)
    }

    /// 更新包裝規格
    pub fn update_pack(&self, id: Uuid, size: i64) -> Result<Pack> {
        let size = PackSize::new(size)?;
        let mut packs = self.write()?;
        let index = packs
            .iter()
            .position(|p| p.id == id)
            .ok_or(PackError::PackNotFound(id))?;
        if packs.iter().any(|p| p.size == size && p.id != id) {
            return Err(PackError::DuplicatePackSize(size.get()));
        }
        let pack = &mut packs[index];
        pack.resize(size);
        Ok(pack.clone())
    }

    /// 刪除包裝
    pub fn delete_pack(&self, id: Uuid) -> Result<Pack> {
        let mut packs = self.write()?;
        let index = packs
            .iter()
            .position(|p| p.id == id)
            .ok_or(PackError::PackNotFound(id))?;
        Ok(packs.remove(index))
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Pack>>> {
        self.packs
            .read()
            .map_err(|e| PackError::CatalogUnavailable(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Pack>>> {
        self.packs
            .write()
            .map_err(|e| PackError::CatalogUnavailable(e.to_string()))
    }
}

impl PackCatalog for InMemoryCatalog {
    fn list_pack_sizes(&self) -> Result<Vec<PackSize>> {
        let mut sizes: Vec<PackSize> = self.read()?.iter().map(|p| p.size).collect();
        sizes.sort_by(|a, b| b.cmp(a));
        Ok(sizes)
    }
}
