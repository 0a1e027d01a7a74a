//! Transaction data models and API request/response types.
//!
//! This module defines:
//! - `Transaction`: Database entity representing a transaction
//! - `CreateTransactionRequest` / `UpdateTransactionRequest`: request bodies
//! - `NewTransaction` / `TransactionChanges`: validated values handed to the store

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Represents a transaction record from the database.
///
/// # Database Table
///
/// Maps to the `transactions` table. `id` and `created_at` are assigned by
/// the database; every other column is `NOT NULL`.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 42,
///   "amount": 12.5,
///   "description": "Lunch",
///   "category": "food",
///   "date": "2025-03-01T00:00:00Z",
///   "createdAt": "2025-03-01T12:04:55.120Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier, assigned by the store
    pub id: i64,

    pub amount: f64,

    pub description: String,

    /// Exact-match filter key for listing
    pub category: String,

    /// When the transaction happened (list ordering key)
    pub date: DateTime<Utc>,

    /// When the record was inserted
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a transaction.
///
/// Every field is optional at the deserialization level so that a missing
/// field is reported as a validation error instead of a JSON rejection.
///
/// # JSON Example
///
/// ```json
/// {
///   "amount": 12.5,
///   "description": "Lunch",
///   "category": "food",
///   "date": "2025-03-01"
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct CreateTransactionRequest {
    pub amount: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
}

/// Request body for a partial update. Any subset of fields may be sent.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTransactionRequest {
    pub amount: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
}

/// A validated transaction ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub amount: f64,
    pub description: String,
    pub category: String,
    pub date: DateTime<Utc>,
}

/// The set of columns a partial update will touch.
///
/// A `None` field is left out of the update entirely; it never means
/// "set to NULL".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionChanges {
    pub amount: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

impl TransactionChanges {
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.date.is_none()
    }

    /// Apply the changes to an existing record in place.
    pub fn apply_to(&self, transaction: &mut Transaction) {
        if let Some(amount) = self.amount {
            transaction.amount = amount;
        }
        if let Some(ref description) = self.description {
            transaction.description = description.clone();
        }
        if let Some(ref category) = self.category {
            transaction.category = category.clone();
        }
        if let Some(date) = self.date {
            transaction.date = date;
        }
    }
}

/// Returns the amount only if it counts as supplied.
///
/// Zero and NaN are treated as not supplied, so a zero amount is rejected on
/// create and dropped from an update.
pub fn supplied_amount(amount: Option<f64>) -> Option<f64> {
    amount.filter(|value| *value != 0.0 && !value.is_nan())
}

/// Returns the text only if it is non-empty.
pub fn supplied_text(text: Option<String>) -> Option<String> {
    text.filter(|value| !value.is_empty())
}

/// Normalize a client supplied date string.
///
/// Accepts an RFC 3339 timestamp (converted to UTC) or a plain `YYYY-MM-DD`
/// date (midnight UTC). Returns `None` for anything else.
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Some(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn parses_plain_date_as_midnight_utc() {
        assert_eq!(
            parse_date("2025-03-01"),
            Some(Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        assert_eq!(
            parse_date("2025-03-01T10:30:00+02:00"),
            Some(Utc.with_ymd_and_hms(2025, 3, 1, 8, 30, 0).unwrap())
        );
    }

    #[test]
    fn rejects_garbage_dates() {
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date("2025-13-01"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn zero_amount_is_not_supplied() {
        assert_eq!(supplied_amount(Some(0.0)), None);
        assert_eq!(supplied_amount(Some(f64::NAN)), None);
        assert_eq!(supplied_amount(None), None);
        assert_eq!(supplied_amount(Some(-4.5)), Some(-4.5));
    }

    #[test]
    fn empty_text_is_not_supplied() {
        assert_eq!(supplied_text(Some(String::new())), None);
        assert_eq!(supplied_text(Some("rent".to_string())), Some("rent".to_string()));
    }

    #[test]
    fn apply_changes_only_touches_supplied_fields() {
        let date = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let mut transaction = Transaction {
            id: 1,
            amount: 10.0,
            description: "coffee".to_string(),
            category: "food".to_string(),
            date,
            created_at: date,
        };
        let changes = TransactionChanges {
            description: Some("espresso".to_string()),
            ..Default::default()
        };

        changes.apply_to(&mut transaction);

        assert_eq!(transaction.description, "espresso");
        assert_eq!(transaction.amount, 10.0);
        assert_eq!(transaction.category, "food");
        assert_eq!(transaction.date, date);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let date = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let transaction = Transaction {
            id: 7,
            amount: 3.5,
            description: "bus".to_string(),
            category: "transport".to_string(),
            date,
            created_at: date,
        };

        let json = serde_json::to_value(&transaction).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["createdAt"], "2025-01-01T00:00:00Z");
        assert!(json.get("created_at").is_none());
    }
}
