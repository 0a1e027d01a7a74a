//! Pagination types for the transaction listing.

use serde::{Deserialize, Serialize};

use super::transaction::Transaction;

/// The config for pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Page size used when the request does not specify a usable `limit`.
    pub default_limit: u32,
    /// Largest page size a client may request.
    pub max_limit: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: 10,
            max_limit: 100,
        }
    }
}

/// Query string accepted by `GET /api/transactions`.
///
/// All values are kept as raw strings; interpretation (defaults, fallbacks)
/// happens in the service layer, so a non-numeric `page` or `limit` is not a
/// rejection. A structurally invalid query string (such as a repeated key)
/// is still rejected by the extractor and reported as a 400.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTransactionsQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub category: Option<String>,
    pub min_amount: Option<String>,
    pub max_amount: Option<String>,
}

/// A resolved page: 1-based page number and page size, both at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    /// Resolve raw `page`/`limit` values.
    ///
    /// Missing, non-numeric, zero or negative values fall back to page 1 and
    /// the configured default limit. The limit is capped at `max_limit`.
    pub fn resolve(page: Option<&str>, limit: Option<&str>, config: PaginationConfig) -> Self {
        let page = parse_positive(page).unwrap_or(1);
        let limit = parse_positive(limit)
            .unwrap_or(config.default_limit)
            .min(config.max_limit);

        Self { page, limit }
    }

    /// Number of records to skip: `(page - 1) * limit`.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)).saturating_mul(u64::from(self.limit))
    }
}

fn parse_positive(value: Option<&str>) -> Option<u32> {
    value
        .and_then(|raw| raw.trim().parse::<u32>().ok())
        .filter(|parsed| *parsed > 0)
}

/// Response body for a transaction listing.
///
/// # JSON Example
///
/// ```json
/// {
///   "data": [ { "id": 3, "amount": 20.0, "...": "..." } ],
///   "total": 27,
///   "page": 2,
///   "limit": 10
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct TransactionPage {
    pub data: Vec<Transaction>,
    /// Number of records matching the filter, ignoring pagination
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_missing() {
        let request = PageRequest::resolve(None, None, PaginationConfig::default());

        assert_eq!(request, PageRequest { page: 1, limit: 10 });
        assert_eq!(request.offset(), 0);
    }

    #[test]
    fn falls_back_on_garbage() {
        let request = PageRequest::resolve(Some("abc"), Some("-3"), PaginationConfig::default());

        assert_eq!(request, PageRequest { page: 1, limit: 10 });
    }

    #[test]
    fn zero_falls_back_to_default() {
        let request = PageRequest::resolve(Some("0"), Some("0"), PaginationConfig::default());

        assert_eq!(request, PageRequest { page: 1, limit: 10 });
    }

    #[test]
    fn offset_is_page_minus_one_times_limit() {
        let request = PageRequest::resolve(Some("3"), Some("25"), PaginationConfig::default());

        assert_eq!(request.offset(), 50);
    }

    #[test]
    fn limit_is_capped() {
        let config = PaginationConfig {
            default_limit: 10,
            max_limit: 20,
        };

        let request = PageRequest::resolve(Some("1"), Some("500"), config);

        assert_eq!(request.limit, 20);
    }

    #[test]
    fn large_pages_do_not_overflow() {
        let request = PageRequest {
            page: u32::MAX,
            limit: u32::MAX,
        };

        assert_eq!(
            request.offset(),
            u64::from(u32::MAX - 1) * u64::from(u32::MAX)
        );
    }
}
