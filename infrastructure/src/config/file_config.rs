//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application/domain types
//! through the accessor methods.

use ballot_application::SolverParams;
use ballot_domain::Model;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Completion backend settings
    pub backend: FileBackendConfig,
    /// Solver loop settings
    pub solver: FileSolverConfig,
    /// Journal directory settings
    pub journal: FileJournalConfig,
}

/// `[backend]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Model for decomposition, routing, candidates and judging
    pub worker_model: String,
    /// Model the final report step escalates to
    pub finalizer_model: String,
    /// Per-completion-call timeout in seconds; 0 disables the timeout
    pub request_timeout_secs: u64,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GEMINI_API_KEY".to_string(),
            worker_model: Model::default_worker().to_string(),
            finalizer_model: Model::default_finalizer().to_string(),
            request_timeout_secs: 120,
        }
    }
}

/// `[solver]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSolverConfig {
    /// Candidates generated per step
    pub vote_count: usize,
    /// Temperature of the first candidate
    pub base_temperature: f64,
    /// Temperature increment per candidate index
    pub temperature_step: f64,
    /// Escalate the final report step to the finalizer model
    pub escalate_final: bool,
}

impl Default for FileSolverConfig {
    fn default() -> Self {
        Self {
            vote_count: 3,
            base_temperature: 1.0,
            temperature_step: 0.25,
            escalate_final: true,
        }
    }
}

/// `[journal]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileJournalConfig {
    /// Log directory root; `None` resolves to `~/daily_logs`
    pub root: Option<PathBuf>,
    /// Use the Logseq folder layout (journals/ and pages/)
    pub logseq: bool,
}

impl FileConfig {
    /// Solver parameters derived from the `[solver]` and `[backend]` sections
    pub fn solver_params(&self) -> SolverParams {
        let timeout = if self.backend.request_timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.backend.request_timeout_secs))
        };

        SolverParams::default()
            .with_vote_count(self.solver.vote_count)
            .with_base_temperature(self.solver.base_temperature)
            .with_temperature_step(self.solver.temperature_step)
            .with_escalate_final(self.solver.escalate_final)
            .with_request_timeout(timeout)
    }

    /// The configured worker model
    pub fn worker_model(&self) -> Model {
        self.backend.worker_model.parse().unwrap_or_default()
    }

    /// The configured finalizer model
    pub fn finalizer_model(&self) -> Model {
        self.backend
            .finalizer_model
            .parse()
            .unwrap_or_else(|_| Model::default_finalizer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.backend.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.solver.vote_count, 3);
        assert!(config.solver.escalate_final);
        assert!(config.journal.root.is_none());
        assert!(!config.journal.logseq);
    }

    #[test]
    fn test_solver_params_conversion() {
        let mut config = FileConfig::default();
        config.solver.vote_count = 5;
        config.backend.request_timeout_secs = 0;

        let params = config.solver_params();
        assert_eq!(params.vote_count, 5);
        assert!(params.request_timeout.is_none());
    }

    #[test]
    fn test_model_accessors() {
        let config = FileConfig::default();
        assert_eq!(config.worker_model(), Model::Gemini3Flash);
        assert_eq!(config.finalizer_model(), Model::Gemini3Pro);
    }

    #[test]
    fn test_partial_toml_merges_with_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
            [solver]
            vote_count = 7
            "#,
        )
        .unwrap();

        assert_eq!(config.solver.vote_count, 7);
        assert_eq!(config.solver.base_temperature, 1.0);
        assert_eq!(config.backend.api_key_env, "GEMINI_API_KEY");
    }
}
