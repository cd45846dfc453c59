use log::{debug, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::calculator::LoanQuoteInput;
use crate::config::TrackerConfig;
use crate::decimal::Money;
use crate::errors::{Result, TrackerError};

pub const CSRF_HEADER: &str = "X-CSRFToken";
const MARK_PAID_ENDPOINT: &str = "ajax/mark-paid";
const CALCULATE_LOAN_ENDPOINT: &str = "ajax/calculate-loan/";

/// body returned by the mark-paid endpoint
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MarkPaidResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub loan_closed: Option<bool>,
    #[serde(default)]
    pub remaining_amount: Option<String>,
}

impl MarkPaidResponse {
    /// remaining balance on the installment, when the server reported one
    pub fn remaining_amount(&self) -> Option<Money> {
        self.remaining_amount.as_deref()?.parse().ok()
    }
}

/// quote computed by the server, rounded to whole rupees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerQuote {
    pub principal: Money,
    pub interest: Money,
    pub total_amount: Money,
    pub monthly_installment: Money,
}

#[derive(Debug, Deserialize)]
struct CalculateLoanResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
    principal: Option<Money>,
    interest: Option<Money>,
    total_amount: Option<Money>,
    monthly_installment: Option<Money>,
}

impl CalculateLoanResponse {
    fn quote(&self) -> Option<ServerQuote> {
        Some(ServerQuote {
            principal: self.principal?,
            interest: self.interest?,
            total_amount: self.total_amount?,
            monthly_installment: self.monthly_installment?,
        })
    }
}

/// HTTP client for the loan tracker's AJAX endpoints
#[derive(Clone)]
pub struct LoanTrackerClient {
    base_url: Url,
    client: Client,
}

impl LoanTrackerClient {
    /// client without a request timeout
    pub fn new(base_url: &str) -> Result<Self> {
        Self::build(base_url, None)
    }

    pub fn from_config(config: &TrackerConfig) -> Result<Self> {
        Self::build(&config.base_url, config.request_timeout())
    }

    fn build(base_url: &str, timeout: Option<std::time::Duration>) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url,
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `POST ajax/mark-paid/{id}/`
    ///
    /// A `success: false` body is returned as `Ok`; only transport failures,
    /// non-2xx statuses and unreadable bodies are errors.
    pub async fn mark_installment_paid(
        &self,
        installment_id: u64,
        csrf_token: Option<&str>,
    ) -> Result<MarkPaidResponse> {
        let url = self
            .base_url
            .join(&format!("{MARK_PAID_ENDPOINT}/{installment_id}/"))?;
        debug!("POST {url}");

        let mut request = self.client.post(url).header(CONTENT_TYPE, "application/json");
        if let Some(token) = csrf_token {
            request = request.header(CSRF_HEADER, token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TrackerError::Server {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let body: MarkPaidResponse = serde_json::from_str(&response.text().await?)?;
        if !body.success {
            warn!(
                "installment {installment_id} not marked paid: {}",
                body.error.as_deref().unwrap_or("no reason given")
            );
        }
        Ok(body)
    }

    /// `GET ajax/calculate-loan/` with the parsed form values
    pub async fn calculate_loan(&self, input: &LoanQuoteInput) -> Result<ServerQuote> {
        let mut url = self.base_url.join(CALCULATE_LOAN_ENDPOINT)?;
        url.query_pairs_mut()
            .append_pair("amount", &input.amount.as_decimal().normalize().to_string())
            .append_pair(
                "interest_rate",
                &input.interest_rate.as_percentage().normalize().to_string(),
            )
            .append_pair("tenure_months", &input.tenure_months.to_string());
        debug!("GET {url}");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TrackerError::Server {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let body: CalculateLoanResponse = serde_json::from_str(&response.text().await?)?;
        match (body.success, body.quote()) {
            (true, Some(quote)) => Ok(quote),
            _ => Err(TrackerError::Rejected {
                message: body
                    .error
                    .unwrap_or_else(|| "incomplete quote response".to_string()),
            }),
        }
    }
}
