//! Analytics aggregation queries over the full lead collection.

use chrono::{Datelike, Utc};
use serde::Serialize;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::lead::LeadStatus;

/// Snapshot analytics summary for the dashboard overview. Computed fresh
/// on every call; a failing sub-query fails the whole summary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_leads: i64,
    pub conversion_rate: String,
    pub growth_rate: String,
    pub status_breakdown: Vec<StatusCount>,
    pub source_breakdown: Vec<SourceCount>,
}

/// Lead count for a single pipeline stage.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct StatusCount {
    pub status: LeadStatus,
    pub count: i64,
}

/// Lead count for a single acquisition channel.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct SourceCount {
    pub source: String,
    pub count: i64,
}

/// Lead count for one calendar month of the current year.
#[derive(Debug, sqlx::FromRow)]
struct MonthCount {
    month: i32,
    count: i64,
}

/// Compute the full analytics summary. The sub-queries are independent
/// read-only aggregates, so they run concurrently.
pub async fn summary(pool: &PgPool) -> Result<AnalyticsSummary, AppError> {
    let (total_leads, status_breakdown, source_breakdown, monthly) = tokio::try_join!(
        fetch_total(pool),
        fetch_status_breakdown(pool),
        fetch_source_breakdown(pool),
        fetch_monthly_counts(pool),
    )?;

    let converted = status_breakdown
        .iter()
        .find(|s| s.status == LeadStatus::Converted)
        .map_or(0, |s| s.count);

    Ok(AnalyticsSummary {
        total_leads,
        conversion_rate: conversion_rate(converted, total_leads),
        growth_rate: growth_rate(&monthly, Utc::now().month()),
        status_breakdown,
        source_breakdown,
    })
}

/// Count all leads.
async fn fetch_total(pool: &PgPool) -> Result<i64, AppError> {
    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM leads")
        .fetch_one(pool)
        .await?;
    Ok(total)
}

/// Count leads grouped by pipeline stage. Ordering is not meaningful to
/// consumers but is kept stable within a call.
async fn fetch_status_breakdown(pool: &PgPool) -> Result<Vec<StatusCount>, AppError> {
    let rows = sqlx::query_as::<_, StatusCount>(
        "SELECT status, COUNT(*) AS count FROM leads GROUP BY status ORDER BY count DESC, status",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Count leads grouped by acquisition channel, truncated to the top 5 by
/// count. Ties break by source name so the output is deterministic.
async fn fetch_source_breakdown(pool: &PgPool) -> Result<Vec<SourceCount>, AppError> {
    let rows = sqlx::query_as::<_, SourceCount>(
        "SELECT source, COUNT(*) AS count FROM leads \
         GROUP BY source ORDER BY count DESC, source ASC LIMIT 5",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Count current-year leads grouped by calendar month of creation.
async fn fetch_monthly_counts(pool: &PgPool) -> Result<Vec<MonthCount>, AppError> {
    let rows = sqlx::query_as::<_, MonthCount>(
        "SELECT EXTRACT(MONTH FROM created_at)::int AS month, COUNT(*) AS count \
         FROM leads \
         WHERE EXTRACT(YEAR FROM created_at) = EXTRACT(YEAR FROM NOW()) \
         GROUP BY month",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Percentage of all leads that reached Converted, to 2 decimal places.
/// Zero when the collection is empty.
fn conversion_rate(converted: i64, total: i64) -> String {
    if total == 0 {
        return "0.00".to_string();
    }
    format!("{:.2}", converted as f64 / total as f64 * 100.0)
}

/// Month-over-month growth of lead creation within the current calendar
/// year, to 1 decimal place. January's predecessor is December, which the
/// current-year restriction leaves at zero.
fn growth_rate(monthly: &[MonthCount], current_month: u32) -> String {
    let count_for = |month: u32| {
        monthly
            .iter()
            .find(|r| r.month == month as i32)
            .map_or(0, |r| r.count)
    };

    let current = count_for(current_month);
    let previous_month = if current_month == 1 { 12 } else { current_month - 1 };
    let previous = count_for(previous_month);

    let rate = if previous > 0 {
        (current - previous) as f64 / previous as f64 * 100.0
    } else if current > 0 {
        100.0
    } else {
        0.0
    };
    format!("{rate:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_rate_zero_when_empty() {
        assert_eq!(conversion_rate(0, 0), "0.00");
    }

    #[test]
    fn conversion_rate_two_decimals() {
        assert_eq!(conversion_rate(2, 5), "40.00");
        assert_eq!(conversion_rate(1, 3), "33.33");
        assert_eq!(conversion_rate(5, 5), "100.00");
    }

    #[test]
    fn growth_rate_against_previous_month() {
        let monthly = vec![
            MonthCount { month: 3, count: 10 },
            MonthCount { month: 4, count: 15 },
        ];
        assert_eq!(growth_rate(&monthly, 4), "50.0");
    }

    #[test]
    fn growth_rate_can_be_negative() {
        let monthly = vec![
            MonthCount { month: 6, count: 20 },
            MonthCount { month: 7, count: 5 },
        ];
        assert_eq!(growth_rate(&monthly, 7), "-75.0");
    }

    #[test]
    fn growth_rate_full_when_no_previous_month() {
        let monthly = vec![MonthCount { month: 8, count: 12 }];
        assert_eq!(growth_rate(&monthly, 8), "100.0");
    }

    #[test]
    fn growth_rate_zero_when_both_months_empty() {
        assert_eq!(growth_rate(&[], 5), "0.0");
    }

    #[test]
    fn january_looks_back_at_december_of_same_year() {
        // Only current-year rows exist, so December is always empty.
        let monthly = vec![MonthCount { month: 1, count: 7 }];
        assert_eq!(growth_rate(&monthly, 1), "100.0");
    }

    #[test]
    fn summary_serializes_camel_case() {
        let summary = AnalyticsSummary {
            total_leads: 5,
            conversion_rate: "40.00".to_string(),
            growth_rate: "100.0".to_string(),
            status_breakdown: vec![StatusCount {
                status: LeadStatus::New,
                count: 2,
            }],
            source_breakdown: vec![SourceCount {
                source: "Google".to_string(),
                count: 3,
            }],
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["totalLeads"], 5);
        assert_eq!(json["conversionRate"], "40.00");
        assert_eq!(json["growthRate"], "100.0");
        assert_eq!(json["statusBreakdown"][0]["status"], "New");
        assert_eq!(json["sourceBreakdown"][0]["count"], 3);
    }
}
