//! Contact form submission through the EmailJS relay.
//!
//! Client-side (csr): a JSON POST via `gloo-net`.
//! Native builds: the payload is still built and validated, but sending
//! reports [`ContactError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Every failure maps to one [`ContactError`]; the caller shows a single
//! generic alert and never retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Serialize;

use crate::config::RelayConfig;
use crate::state::contact::{ContactForm, INQUIRY_KIND};

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("contact relay is not configured")]
    NotConfigured,
    #[error("contact request failed: {0}")]
    Network(String),
    #[error("contact relay rejected the message: {0}")]
    Status(u16),
    #[error("contact relay is only reachable from the browser")]
    Unavailable,
}

/// Body of the relay's `email/send` call.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SendRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TemplateParams<'a> {
    pub from_name: &'a str,
    pub from_email: &'a str,
    pub phone: &'a str,
    pub message: &'a str,
    #[serde(rename = "type")]
    pub kind: &'a str,
}

#[must_use]
pub fn send_request<'a>(relay: &'a RelayConfig, form: &'a ContactForm) -> SendRequest<'a> {
    SendRequest {
        service_id: &relay.service_id,
        template_id: &relay.template_id,
        user_id: &relay.public_key,
        template_params: TemplateParams {
            from_name: &form.name,
            from_email: &form.email,
            phone: &form.phone,
            message: &form.message,
            kind: INQUIRY_KIND,
        },
    }
}

/// Send the form through the relay.
///
/// # Errors
///
/// [`ContactError::NotConfigured`] without relay identifiers, otherwise a
/// network or status failure from the relay.
pub async fn send_contact(relay: Option<&RelayConfig>, form: &ContactForm) -> Result<(), ContactError> {
    let relay = relay.ok_or(ContactError::NotConfigured)?;
    let body = send_request(relay, form);

    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(EMAILJS_SEND_URL)
            .json(&body)
            .map_err(|e| ContactError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ContactError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ContactError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        serde_json::to_string(&body).map_err(|e| ContactError::Network(e.to_string()))?;
        Err(ContactError::Unavailable)
    }
}
