//! 請求處理層
//!
//! 解析文字訂單數量、呼叫計算器、將結果序列化為依規格遞減的明細。
//! 不合法的訂單在進入優化器前即被拒絕。

use pack_core::{PackCatalog, PackError, PackLine, Result};
use serde::Serialize;

use crate::PackCalculator;

/// 解析文字訂單數量為正整數
pub fn parse_order_quantity(raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    let order: i64 = trimmed
        .parse()
        .map_err(|_| PackError::InvalidOrderInput(format!("無法解析訂單數量: '{}'", trimmed)))?;

    if order <= 0 {
        return Err(PackError::InvalidOrderInput(format!(
            "訂單數量必須為正整數: {}",
            order
        )));
    }

    Ok(order)
}

/// 回應狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResponseStatus {
    /// 成功
    Ok,
    /// 呼叫端輸入錯誤，不需重試
    BadRequest,
    /// 目錄暫不可用，可於目錄補齊後重試
    Unavailable,
    /// 內部錯誤
    InternalError,
}

impl ResponseStatus {
    /// 依錯誤類型決定回應狀態
    pub fn from_error(error: &PackError) -> Self {
        match error {
            e if e.is_input_error() => ResponseStatus::BadRequest,
            PackError::NoPackSizesAvailable | PackError::CatalogUnavailable(_) => {
                ResponseStatus::Unavailable
            }
            _ => ResponseStatus::InternalError,
        }
    }

    /// 對應的 HTTP 狀態碼
    pub fn status_code(self) -> u16 {
        match self {
            ResponseStatus::Ok => 200,
            ResponseStatus::BadRequest => 400,
            ResponseStatus::Unavailable => 503,
            ResponseStatus::InternalError => 500,
        }
    }
}

/// 序列化後的回應
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResponse {
    pub status: ResponseStatus,
    pub body: String,
}

impl HandlerResponse {
    fn ok(body: String) -> Self {
        Self {
            status: ResponseStatus::Ok,
            body,
        }
    }

    fn error(error: &PackError) -> Self {
        Self {
            status: ResponseStatus::from_error(error),
            body: serde_json::json!({ "error": error.to_string() }).to_string(),
        }
    }

    fn json<T: Serialize>(value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self::ok(body),
            Err(e) => {
                tracing::error!("回應序列化失敗: {}", e);
                Self::error(&PackError::InternalComputationError(e.to_string()))
            }
        }
    }
}

/// 請求處理器
pub struct RequestHandler<C: PackCatalog> {
    calculator: PackCalculator<C>,
}

impl<C: PackCatalog> RequestHandler<C> {
    pub fn new(calculator: PackCalculator<C>) -> Self {
        Self { calculator }
    }

    /// 計算請求：返回依規格遞減排序的分配明細
    pub fn handle_calculate(&self, raw_order: &str) -> Result<Vec<PackLine>> {
        let order = parse_order_quantity(raw_order)?;
        let result = self.calculator.calculate(order)?;
        Ok(result.distribution.lines())
    }

    /// 計算請求（JSON）：`[{"size":…,"count":…}]` 或 `{"error":…}`
    pub fn handle_calculate_json(&self, raw_order: &str) -> HandlerResponse {
        match self.handle_calculate(raw_order) {
            Ok(lines) => HandlerResponse::json(&lines),
            Err(e) => {
                tracing::warn!("計算請求失敗: {}", e);
                HandlerResponse::error(&e)
            }
        }
    }

    /// 列出目前的包裝規格（JSON，遞減）
    pub fn handle_list_packs_json(&self) -> HandlerResponse {
        match self.calculator.catalog().list_pack_sizes() {
            Ok(mut sizes) => {
                sizes.sort_by(|a, b| b.cmp(a));
                HandlerResponse::json(&sizes)
            }
            Err(e) => HandlerResponse::error(&e),
        }
    }

    pub fn calculator(&self) -> &PackCalculator<C> {
        &self.calculator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pack_core::InMemoryCatalog;
    use rstest::rstest;

    fn default_handler() -> RequestHandler<InMemoryCatalog> {
        RequestHandler::new(PackCalculator::with_catalog(
            InMemoryCatalog::with_default_sizes(),
        ))
    }

    #[rstest]
    #[case("1", 1)]
    #[case("  251 ", 251)]
    #[case("12001", 12001)]
    fn test_parse_order_quantity(#[case] raw: &str, #[case] expected: i64) {
        assert_eq!(parse_order_quantity(raw).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("12.5")]
    #[case("0")]
    #[case("-1")]
    #[case("99999999999999999999")]
    fn test_parse_order_quantity_rejects(#[case] raw: &str) {
        assert!(matches!(
            parse_order_quantity(raw),
            Err(PackError::InvalidOrderInput(_))
        ));
    }

    #[test]
    fn test_handle_calculate_sorted_descending() {
        let handler = default_handler();

        let lines = handler.handle_calculate("12001").unwrap();
        assert_eq!(
            lines,
            vec![
                PackLine { size: 5000, count: 2 },
                PackLine { size: 2000, count: 1 },
                PackLine { size: 250, count: 1 },
            ]
        );
    }

    #[test]
    fn test_handle_calculate_json() {
        let handler = default_handler();

        let response = handler.handle_calculate_json("501");
        assert_eq!(response.status, ResponseStatus::Ok);
        assert_eq!(
            response.body,
            r#"[{"size":500,"count":1},{"size":250,"count":1}]"#
        );
    }

    #[test]
    fn test_handle_calculate_json_bad_request() {
        let handler = default_handler();

        let response = handler.handle_calculate_json("-5");
        assert_eq!(response.status, ResponseStatus::BadRequest);
        assert_eq!(response.status.status_code(), 400);

        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert!(body["error"].is_string());
    }

    #[test]
    fn test_handle_calculate_json_empty_catalog() {
        let handler = RequestHandler::new(PackCalculator::with_catalog(InMemoryCatalog::new()));

        let response = handler.handle_calculate_json("10");
        assert_eq!(response.status, ResponseStatus::Unavailable);
        assert_eq!(response.status.status_code(), 503);
    }

    #[test]
    fn test_handle_list_packs_json() {
        let handler = default_handler();

        let response = handler.handle_list_packs_json();
        assert_eq!(response.status, ResponseStatus::Ok);
        assert_eq!(response.body, "[5000,2000,1000,500,250]");
    }

    #[test]
    fn test_status_from_error() {
        assert_eq!(
            ResponseStatus::from_error(&PackError::InvalidOrder(0)),
            ResponseStatus::BadRequest
        );
        assert_eq!(
            ResponseStatus::from_error(&PackError::UnfulfillableOrder(10)),
            ResponseStatus::InternalError
        );
        assert_eq!(
            ResponseStatus::from_error(&PackError::InternalComputationError("x".to_string())),
            ResponseStatus::InternalError
        );
    }
}
