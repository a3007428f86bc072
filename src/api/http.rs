//! HTTP implementation of the ticket backend using reqwest.
//!
//! Every failure is folded into one of three error shapes so the dashboard
//! can show the message as-is: transport failures keep reqwest's message,
//! non-2xx responses become "Request failed with status code N", and bodies
//! that don't decode become a malformed-response error. There is no retry.

use std::time::Duration;

use reqwest::{Client, Method, Response};
use secrecy::{ExposeSecret, SecretBox};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::Config;
use crate::error::{Result, TicketDeskError};
use crate::types::{Ticket, TicketPage};

use super::{TicketBackend, TicketUpdate};

const TICKET_LIST_PATH: &str = "ticket/ticket-list/";

/// Ticket backend reached over HTTP
pub struct HttpBackend {
    client: Client,
    base_url: Url,
    token: Option<SecretBox<String>>,
}

impl HttpBackend {
    /// Create a backend from configuration
    ///
    /// Uses the configured request timeout for the whole request and a third
    /// of it for connecting.
    pub fn from_config(config: &Config) -> Result<Self> {
        let backend = Self::new(config.api_url()?, config.request_timeout())?;
        Ok(match config.api_token() {
            Some(token) => backend.with_token(token),
            None => backend,
        })
    }

    /// Create a backend rooted at `base_url`.
    ///
    /// `base_url` should end with a slash; endpoint paths are joined under it.
    /// A zero timeout is rejected since no request could ever complete.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self> {
        if timeout.is_zero() {
            return Err(TicketDeskError::Config(
                "request timeout must be greater than zero".to_string(),
            ));
        }
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout / 3)
            .build()?;

        Ok(Self {
            client,
            base_url,
            token: None,
        })
    }

    /// Send `token` as a bearer credential on every request
    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(SecretBox::new(Box::new(token)));
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| TicketDeskError::Config(format!("invalid endpoint '{path}': {e}")))
    }

    fn ticket_list_url(&self, page: u32) -> Result<Url> {
        let mut url = self.endpoint(TICKET_LIST_PATH)?;
        url.query_pairs_mut()
            .append_pair("page", &page.to_string());
        Ok(url)
    }

    fn ticket_url(&self, id: u64) -> Result<Url> {
        self.endpoint(&format!("ticket/{id}/"))
    }

    async fn send(&self, method: Method, url: Url, body: Option<&TicketUpdate>) -> Result<Response> {
        tracing::debug!("{method} {url}");

        let mut request = self.client.request(method, url);
        if let Some(token) = &self.token {
            // reqwest marks bearer headers sensitive, keeping them out of debug logs
            request = request.bearer_auth(token.expose_secret());
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TicketDeskError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TicketDeskError::Status(status.as_u16()));
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self.send(Method::GET, url, None).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| TicketDeskError::Network(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| TicketDeskError::MalformedResponse(e.to_string()))
    }
}

impl TicketBackend for HttpBackend {
    async fn fetch_tickets(&self, page: u32) -> Result<TicketPage> {
        let url = self.ticket_list_url(page)?;
        self.get_json(url).await
    }

    async fn fetch_ticket(&self, id: u64) -> Result<Ticket> {
        let url = self.ticket_url(id)?;
        self.get_json(url).await.map_err(|e| match e {
            TicketDeskError::Status(404) => TicketDeskError::TicketNotFound(id),
            other => other,
        })
    }

    async fn update_ticket(&self, id: u64, update: TicketUpdate) -> Result<()> {
        if update.is_empty() {
            return Err(TicketDeskError::InvalidInput(
                "ticket update has no fields".to_string(),
            ));
        }
        let url = self.ticket_url(id)?;
        self.send(Method::PATCH, url, Some(&update))
            .await
            .map_err(|e| match e {
                TicketDeskError::Status(404) => TicketDeskError::TicketNotFound(id),
                other => other,
            })?;
        Ok(())
    }
}
