//! Diagnostics for configuration and API connectivity
//!
//! The doctor returns exit codes:
//! - 0: All checks passed
//! - 1: Some warnings detected
//! - 2: Errors detected

use anyhow::Result;

use zephyr_scale::config::{
    ENV_API_TOKEN, ENV_BASE_URL, ENV_DEFAULT_PROJECT_KEY,
};
use zephyr_scale::{ZephyrClient, ZephyrConfig};

use crate::exit_codes::{EXIT_ERROR, EXIT_SUCCESS, EXIT_WARNING};

#[derive(Debug, PartialEq)]
enum CheckStatus {
    Ok,
    Warning,
    Error,
}

struct Check {
    name: &'static str,
    status: CheckStatus,
    message: String,
}

/// Diagnostic tool accumulating configuration and connectivity checks
pub struct Doctor {
    checks: Vec<Check>,
}

impl Doctor {
    /// Create a new Doctor instance for running diagnostics
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Run all diagnostic checks and return the process exit code
    pub async fn run_diagnostics(&mut self) -> Result<i32> {
        println!("Zephyr Scale MCP Doctor");
        println!("Running diagnostics...");
        println!();

        let config = self.check_configuration();
        if let Some(config) = config {
            self.check_connectivity(&config).await;
        }

        self.print_results();
        Ok(self.exit_code())
    }

    fn check_configuration(&mut self) -> Option<ZephyrConfig> {
        match ZephyrConfig::from_env() {
            Ok(config) => {
                self.checks.push(Check {
                    name: "API token",
                    status: CheckStatus::Ok,
                    message: format!("{ENV_API_TOKEN} is set"),
                });
                self.checks.push(Check {
                    name: "Base URL",
                    status: CheckStatus::Ok,
                    message: config.base_url.clone(),
                });
                match &config.project_key {
                    Some(key) => self.checks.push(Check {
                        name: "Default project key",
                        status: CheckStatus::Ok,
                        message: key.clone(),
                    }),
                    None => self.checks.push(Check {
                        name: "Default project key",
                        status: CheckStatus::Warning,
                        message: format!(
                            "{ENV_DEFAULT_PROJECT_KEY} is not set; every tool call must supply project_key"
                        ),
                    }),
                }
                Some(config)
            }
            Err(e) => {
                self.checks.push(Check {
                    name: "API token",
                    status: CheckStatus::Error,
                    message: e.to_string(),
                });
                None
            }
        }
    }

    async fn check_connectivity(&mut self, config: &ZephyrConfig) {
        let client = match ZephyrClient::new(config) {
            Ok(client) => client,
            Err(e) => {
                self.checks.push(Check {
                    name: "HTTP client",
                    status: CheckStatus::Error,
                    message: e.to_string(),
                });
                return;
            }
        };
        match client.healthcheck().await {
            Ok(()) => self.checks.push(Check {
                name: "API healthcheck",
                status: CheckStatus::Ok,
                message: format!("{} is reachable", config.base_url),
            }),
            Err(e) => self.checks.push(Check {
                name: "API healthcheck",
                status: CheckStatus::Error,
                message: format!(
                    "{} ({ENV_BASE_URL} override or token may be wrong)",
                    e
                ),
            }),
        }
    }

    fn print_results(&self) {
        for check in &self.checks {
            let marker = match check.status {
                CheckStatus::Ok => "ok",
                CheckStatus::Warning => "warn",
                CheckStatus::Error => "FAIL",
            };
            println!("  [{marker:>4}] {}: {}", check.name, check.message);
        }
        println!();

        let errors = self.count(CheckStatus::Error);
        let warnings = self.count(CheckStatus::Warning);
        if errors > 0 {
            println!("{errors} error(s), {warnings} warning(s) found.");
        } else if warnings > 0 {
            println!("All checks passed with {warnings} warning(s).");
        } else {
            println!("All checks passed.");
        }
    }

    fn count(&self, status: CheckStatus) -> usize {
        self.checks.iter().filter(|c| c.status == status).count()
    }

    fn exit_code(&self) -> i32 {
        if self.count(CheckStatus::Error) > 0 {
            EXIT_ERROR
        } else if self.count(CheckStatus::Warning) > 0 {
            EXIT_WARNING
        } else {
            EXIT_SUCCESS
        }
    }
}

impl Default for Doctor {
    fn default() -> Self {
        Self::new()
    }
}
