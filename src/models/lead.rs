//! Lead model: a prospective customer tracked through the sales pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Pipeline stage of a lead. No transition graph is enforced; any status
/// may follow any other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "lead_status")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Converted,
    Lost,
}

impl LeadStatus {
    /// All pipeline stages, in lifecycle order.
    pub const ALL: [LeadStatus; 5] = [
        Self::New,
        Self::Contacted,
        Self::Qualified,
        Self::Converted,
        Self::Lost,
    ];
}

/// Full lead row. Email is unique across the collection; `id`, `created_at`
/// and `updated_at` are server-assigned.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: LeadStatus,
    pub source: String,
    pub assigned_to: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lead_serializes_camel_case() {
        let lead = Lead {
            id: Uuid::nil(),
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+1-555-0100".to_string(),
            status: LeadStatus::Qualified,
            source: "Referral".to_string(),
            assigned_to: "John Doe".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&lead).unwrap();
        assert_eq!(json["assignedTo"], "John Doe");
        assert_eq!(json["status"], "Qualified");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("assigned_to").is_none());
    }

    #[test]
    fn status_round_trips_through_json() {
        for status in LeadStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            let back: LeadStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }
}
