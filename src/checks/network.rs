//! Network reachability check.
//!
//! Every endpoint is probed. Any endpoint that does not answer 2xx turns
//! the whole check into a single warning.

use super::{Check, CheckContext, CheckKind, CheckOutcome, CheckStatus, Finding};
use crate::config::NetworkConfig;
use crate::error::{EnvcheckError, Result};

#[derive(Debug)]
pub struct NetworkCheck {
    endpoints: Vec<String>,
}

impl NetworkCheck {
    pub fn new(config: &NetworkConfig) -> Self {
        Self {
            endpoints: config.endpoints.clone(),
        }
    }
}

impl Check for NetworkCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Network
    }

    fn category(&self) -> &str {
        "Network Access"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<CheckOutcome> {
        let mut findings = Vec::new();
        let mut unreachable = 0usize;

        for endpoint in &self.endpoints {
            let status = ctx.network.check(endpoint);
            if status.is_ok() {
                findings.push(Finding::pass(format!("Network access to {}: OK", endpoint)));
            } else {
                let err = EnvcheckError::NetworkUnreachable {
                    endpoint: endpoint.clone(),
                    message: status.describe(),
                };
                tracing::debug!("{}", err);
                findings.push(Finding::warning(err.to_string()));
                unreachable += 1;
            }
        }

        let outcome = if unreachable == 0 {
            CheckOutcome::new(CheckStatus::Pass, "Network access OK")
        } else {
            CheckOutcome::new(
                CheckStatus::Warning,
                format!(
                    "Some network issues detected ({} of {} endpoints unreachable)",
                    unreachable,
                    self.endpoints.len()
                ),
            )
        };
        Ok(outcome.with_findings(findings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::testing::Harness;
    use crate::probe::testing::FakeNetwork;

    fn check() -> NetworkCheck {
        NetworkCheck::new(&NetworkConfig::default())
    }

    #[test]
    fn all_reachable_passes() {
        let dir = tempfile::tempdir().unwrap();
        let network = FakeNetwork::new()
            .respond("https://pypi.org/", 200)
            .respond("https://github.com", 200)
            .respond("https://api.github.com", 200);
        let outcome = Harness::new(dir.path()).network(network).run(&check()).unwrap();
        assert_eq!(outcome.status(), Some(CheckStatus::Pass));
        assert_eq!(outcome.details(), "Network access OK");
    }

    #[test]
    fn all_timeouts_give_one_warning() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = Harness::new(dir.path()).run(&check()).unwrap();
        assert_eq!(outcome.status(), Some(CheckStatus::Warning));
        assert!(outcome.details().contains("3 of 3"));
        assert_eq!(outcome.findings.len(), 3);
    }

    #[test]
    fn non_success_status_warns() {
        let dir = tempfile::tempdir().unwrap();
        let network = FakeNetwork::new()
            .respond("https://pypi.org/", 200)
            .respond("https://github.com", 200)
            .respond("https://api.github.com", 403);
        let outcome = Harness::new(dir.path()).network(network).run(&check()).unwrap();
        assert_eq!(outcome.status(), Some(CheckStatus::Warning));
        assert!(outcome.findings[2].message.contains("Status 403"));
    }

    #[test]
    fn no_endpoints_passes() {
        let dir = tempfile::tempdir().unwrap();
        let config = NetworkConfig {
            endpoints: vec![],
            ..Default::default()
        };
        let outcome = Harness::new(dir.path())
            .run(&NetworkCheck::new(&config))
            .unwrap();
        assert_eq!(outcome.status(), Some(CheckStatus::Pass));
    }
}
