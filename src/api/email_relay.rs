use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::models::contact_models::TemplateParams;

/// Outbound delivery of contact submissions. Success or failure is all the caller sees.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailRelay: Send + Sync {
    async fn send(&self, params: &TemplateParams) -> Result<(), RelayError>;
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str, // EmailJS calls the public key "user_id"
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a TemplateParams,
}

/// EmailJS-compatible REST relay.
pub struct EmailJsRelay {
    client: Client,
    config: RelayConfig,
}

impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn send_url(&self) -> String {
        format!("{}/api/v1.0/email/send", self.config.api_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl EmailRelay for EmailJsRelay {
    async fn send(&self, params: &TemplateParams) -> Result<(), RelayError> {
        let body = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            access_token: self.config.private_key.as_deref(),
            template_params: params,
        };

        tracing::debug!("Sending contact email through {}", self.send_url());
        let response = self.client
            .post(self.send_url())
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RelayError::Rejected { status, body });
        }

        Ok(())
    }
}
