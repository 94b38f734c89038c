use anyhow::Context;
use async_trait::async_trait;

use super::{PaymentGateway, PaymentOutcome, PaymentRequest};

/// Posts `{phoneNumber, amount}` to the M-Pesa payment endpoint.
pub struct MpesaGateway {
    url: String,
    client: reqwest::Client,
}

impl MpesaGateway {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PaymentGateway for MpesaGateway {
    async fn submit(&self, request: &PaymentRequest) -> anyhow::Result<PaymentOutcome> {
        let resp = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .context("failed to call M-Pesa payment endpoint")?;

        let status = resp.status();
        if status == reqwest::StatusCode::OK {
            Ok(PaymentOutcome::Accepted)
        } else {
            tracing::warn!(%status, "M-Pesa payment rejected");
            Ok(PaymentOutcome::Rejected(status.as_u16()))
        }
    }
}
