use mongodb::bson::{oid::ObjectId, DateTime, Document};
use serde::{Deserialize, Serialize};

pub const COLLECTION: &str = "payments";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Cad,
    Aud,
}

impl Currency {
    pub const VALUES: [&'static str; 5] = ["USD", "EUR", "GBP", "CAD", "AUD"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Processing,
    Completed,
    Failed,
    Refunded,
    Cancelled,
}

impl PaymentStatus {
    pub const VALUES: [&'static str; 6] = [
        "pending",
        "processing",
        "completed",
        "failed",
        "refunded",
        "cancelled",
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Paypal,
    Stripe,
    Cash,
}

impl PaymentMethod {
    pub const VALUES: [&'static str; 5] =
        ["credit_card", "debit_card", "paypal", "stripe", "cash"];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub reservation_id: ObjectId,
    pub user_id: ObjectId,
    pub amount: f64,
    pub currency: Currency,
    pub status: PaymentStatus,
    pub payment_method: PaymentMethod,
    pub transaction_id: String,
    /// Raw gateway payload, shape owned by the payment provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_response: Option<Document>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_reason: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}
