//! Admin statistics aggregation.
//!
//! One full scan of the booking collection projecting only `date` and
//! `price`; user and room totals come from collection counters, not scans.
//! Chart rows keep storage scan order with no sorting or dedup.

use chrono::{DateTime, Datelike, NaiveDate};
use mongodb::bson::doc;
use serde::Serialize;
use serde_json::{json, Value};

use crate::database::{BookingSale, Store, StoreError};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_sale: f64,
    pub booking_count: u64,
    pub user_count: u64,
    pub room_count: u64,
    pub chart_data: Vec<Value>,
}

pub async fn compute_stats(store: &Store) -> Result<AdminStats, StoreError> {
    let sales: Vec<BookingSale> = store
        .bookings()
        .find_many_projected(doc! {}, doc! { "_id": 0, "date": 1, "price": 1 })
        .await?;
    let user_count = store.users().count(doc! {}).await?;
    let room_count = store.rooms().count(doc! {}).await?;

    Ok(AdminStats {
        total_sale: total_sale(&sales),
        booking_count: sales.len() as u64,
        user_count,
        room_count,
        chart_data: build_chart(&sales),
    })
}

pub fn total_sale(sales: &[BookingSale]) -> f64 {
    sales.iter().map(|s| s.price.unwrap_or(0.0)).sum()
}

/// `[["Day","Sale"], [day/month, price], ...]` with one row per booking.
pub fn build_chart(sales: &[BookingSale]) -> Vec<Value> {
    let mut chart = Vec::with_capacity(sales.len() + 1);
    chart.push(json!(["Day", "Sale"]));
    for sale in sales {
        let label = sale.date.as_deref().map(chart_label).unwrap_or_default();
        chart.push(json!([label, sale.price]));
    }
    chart
}

/// Formats a stored booking date as a `day/month` label. Dates that parse
/// neither as RFC 3339 nor as a plain calendar date keep the raw string so
/// the row count still matches the booking count.
fn chart_label(date: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(date) {
        return format!("{}/{}", parsed.day(), parsed.month());
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return format!("{}/{}", parsed.day(), parsed.month());
    }
    date.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(date: Option<&str>, price: Option<f64>) -> BookingSale {
        BookingSale {
            date: date.map(String::from),
            price,
        }
    }

    #[test]
    fn empty_booking_set_yields_header_only() {
        let sales: Vec<BookingSale> = vec![];
        assert_eq!(total_sale(&sales), 0.0);
        assert_eq!(build_chart(&sales), vec![json!(["Day", "Sale"])]);
    }

    #[test]
    fn two_bookings_sum_and_chart() {
        let sales = vec![
            sale(Some("2024-03-05T10:00:00+00:00"), Some(100.0)),
            sale(Some("2024-04-09"), Some(50.0)),
        ];
        assert_eq!(total_sale(&sales), 150.0);

        let chart = build_chart(&sales);
        assert_eq!(chart.len(), 3);
        assert_eq!(chart[0], json!(["Day", "Sale"]));
        assert_eq!(chart[1], json!(["5/3", 100.0]));
        assert_eq!(chart[2], json!(["9/4", 50.0]));
    }

    #[test]
    fn chart_keeps_scan_order_without_dedup() {
        let sales = vec![
            sale(Some("2024-01-01"), Some(10.0)),
            sale(Some("2024-01-01"), Some(20.0)),
        ];
        let chart = build_chart(&sales);
        assert_eq!(chart[1], json!(["1/1", 10.0]));
        assert_eq!(chart[2], json!(["1/1", 20.0]));
    }

    #[test]
    fn unparsable_date_keeps_its_row() {
        let sales = vec![sale(Some("next tuesday"), Some(5.0)), sale(None, None)];
        let chart = build_chart(&sales);
        assert_eq!(chart.len(), 3);
        assert_eq!(chart[1], json!(["next tuesday", 5.0]));
        assert_eq!(chart[2], json!(["", null]));
    }

    #[test]
    fn fractional_prices_keep_source_precision() {
        let sales = vec![sale(None, Some(19.99)), sale(None, Some(0.01))];
        assert_eq!(total_sale(&sales), 20.0);
    }
}
