pub mod mpesa;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::services::validation::{require_positive, require_text};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub amount: u64,
}

impl PaymentRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("phoneNumber", &self.phone_number)?;
        require_positive("amount", self.amount)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOutcome {
    Accepted,
    /// The gateway answered with a non-200 status.
    Rejected(u16),
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn submit(&self, request: &PaymentRequest) -> anyhow::Result<PaymentOutcome>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let request = PaymentRequest {
            phone_number: "0712345678".to_string(),
            amount: 1500,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"phoneNumber": "0712345678", "amount": 1500}));
    }

    #[test]
    fn test_validate() {
        let mut request = PaymentRequest {
            phone_number: " ".to_string(),
            amount: 10,
        };
        assert_eq!(request.validate(), Err(ValidationError::MissingField("phoneNumber")));
        request.phone_number = "0712345678".to_string();
        request.amount = 0;
        assert_eq!(request.validate(), Err(ValidationError::NotPositive("amount")));
    }

    #[test]
    fn test_missing_fields_default_then_fail_validation() {
        let request: PaymentRequest = serde_json::from_str(r#"{"amount":10}"#).unwrap();
        assert_eq!(request.validate(), Err(ValidationError::MissingField("phoneNumber")));
        let request: PaymentRequest =
            serde_json::from_str(r#"{"phoneNumber":"0712345678"}"#).unwrap();
        assert_eq!(request.validate(), Err(ValidationError::NotPositive("amount")));
    }
}
