// src/services/submission.rs

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::registration::models::RegistrationData;

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("connection failed: {0}")]
    Connection(String),
}

/// Reply from the registration backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionOutcome {
    pub success: bool,
    pub message: String,
}

/// Transport seam for shipping a finished registration. The form
/// controller only ever sees this trait, so a real HTTP client can
/// replace the simulator without touching the submission flow.
#[async_trait]
pub trait SubmissionService: Send + Sync {
    async fn submit(
        &self,
        data: &RegistrationData,
    ) -> Result<SubmissionOutcome, SubmissionError>;
}

/// Stand-in backend: waits a fixed delay, then registers the user
/// unconditionally.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    delay: Duration,
}

impl SimulatedBackend {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000))
    }
}

#[async_trait]
impl SubmissionService for SimulatedBackend {
    async fn submit(
        &self,
        data: &RegistrationData,
    ) -> Result<SubmissionOutcome, SubmissionError> {
        tokio::time::sleep(self.delay).await;

        debug!(
            payload = %serde_json::to_string(data).unwrap_or_default(),
            "simulated backend accepted registration"
        );

        Ok(SubmissionOutcome {
            success: true,
            message: "Usuario registrado exitosamente".to_string(),
        })
    }
}
