use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

pub const COLLECTION: &str = "supportTickets";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub const VALUES: [&'static str; 4] = ["open", "in_progress", "resolved", "closed"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl TicketPriority {
    pub const VALUES: [&'static str; 4] = ["low", "medium", "high", "urgent"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketCategory {
    Booking,
    Payment,
    Vehicle,
    Account,
    Technical,
    Other,
}

impl TicketCategory {
    pub const VALUES: [&'static str; 6] = [
        "booking",
        "payment",
        "vehicle",
        "account",
        "technical",
        "other",
    ];
}

/// One entry in a ticket's ordered conversation thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketMessage {
    pub from_user_id: ObjectId,
    pub message: String,
    pub timestamp: DateTime,
    #[serde(default)]
    pub attachments: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<TicketCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_id: Option<ObjectId>,
    #[serde(default)]
    pub messages: Vec<TicketMessage>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}
