//! HTTP reachability probing.
//!
//! Each endpoint gets one GET with a bounded timeout. Anything other than a
//! 2xx answer, including redirects that cannot be followed, counts as a
//! network issue.

use anyhow::Result;
use reqwest::blocking::Client;
use std::time::Duration;

/// What happened when an endpoint was probed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointStatus {
    /// Answered with a 2xx status.
    Reachable { status: u16 },

    /// Answered, but not with 2xx.
    BadStatus { status: u16 },

    /// No answer: DNS failure, refused connection, timeout.
    Unreachable { message: String },
}

impl EndpointStatus {
    /// Classify an HTTP status code.
    pub fn from_status(status: u16) -> Self {
        if (200..300).contains(&status) {
            EndpointStatus::Reachable { status }
        } else {
            EndpointStatus::BadStatus { status }
        }
    }

    /// Whether the endpoint counts as reachable.
    pub fn is_ok(&self) -> bool {
        matches!(self, EndpointStatus::Reachable { .. })
    }

    /// Short human description.
    pub fn describe(&self) -> String {
        match self {
            EndpointStatus::Reachable { .. } => "OK".to_string(),
            EndpointStatus::BadStatus { status } => format!("Status {}", status),
            EndpointStatus::Unreachable { message } => format!("Failed ({})", message),
        }
    }
}

/// Checks whether an endpoint answers.
pub trait NetworkProbe {
    /// Probe one endpoint.
    fn check(&self, endpoint: &str) -> EndpointStatus;
}

/// [`NetworkProbe`] backed by a blocking reqwest client.
pub struct HttpProbe {
    client: Client,
    timeout: Duration,
}

impl HttpProbe {
    /// Create a probe whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("envcheck/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;
        Ok(Self { client, timeout })
    }
}

impl NetworkProbe for HttpProbe {
    fn check(&self, endpoint: &str) -> EndpointStatus {
        tracing::debug!("Probing {}", endpoint);
        match self.client.get(endpoint).send() {
            Ok(response) => EndpointStatus::from_status(response.status().as_u16()),
            Err(e) if e.is_timeout() => EndpointStatus::Unreachable {
                message: format!("timed out after {}s", self.timeout.as_secs()),
            },
            Err(e) => EndpointStatus::Unreachable {
                message: e.to_string(),
            },
        }
    }
}
