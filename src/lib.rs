//! # Packs
//!
//! 訂單包裝分配引擎：以最少超出件數、其次最少包數，決定各規格出貨包數。

pub use pack_calc::{
    parse_order_quantity, CalcWarning, CalculationResult, HandlerResponse, PackCalculator,
    PackOptimizer, RequestHandler, ResponseStatus, WarningSeverity,
};
pub use pack_core::{
    CalculatorConfig, Distribution, InMemoryCatalog, Pack, PackCatalog, PackError, PackLine,
    PackSize, Result, TieBreakRule, DEFAULT_PACK_SIZES,
};

pub use pack_calc;
pub use pack_core;
