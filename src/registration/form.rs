// src/registration/form.rs

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::common::{safe_email_log, FormConfig, FormValidation};
use crate::services::{SubmissionOutcome, SubmissionService};
use crate::ui::{BannerKind, FormUi, VisualState};

use super::fields::FieldName;
use super::models::RegistrationData;
use super::validators;

const CONFIRM_NO_SOCIAL: &str = "¿Estás seguro de que no utilizas ninguna red social? \
     Esto podría limitar algunas funcionalidades de la plataforma.";
const GENERIC_SUBMIT_ERROR: &str = "Error al procesar el registro";
const CONNECTION_ERROR: &str = "Error de conexión. Por favor intenta nuevamente.";

/// Where the form currently is in its submission lifecycle.
///
/// `Invalid` and `Failed` persist until the next submission attempt
/// re-enters `Validating`; `Succeeded` returns to `Idle` when the
/// deferred reset fires. Resubmission is only blocked in `Submitting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Validating,
    Invalid,
    Submitting,
    Succeeded,
    Failed,
}

/// How a submission attempt ended.
#[derive(Debug)]
pub enum SubmitStatus {
    /// Field validation failed; the summary lists the offending labels.
    Rejected(FormValidation),
    /// The user declined the no-social-networks confirmation. Not an
    /// error: the attempt is dropped without a banner.
    Declined,
    /// The backend replied; check `SubmissionOutcome::success`.
    Completed(SubmissionOutcome),
    /// The transport itself failed.
    ConnectionFailed,
    /// A submission was already in flight; nothing was done.
    InFlight,
}

/// Drives the registration form: per-field validation on user events,
/// aggregate validation and the submission state machine on submit.
/// Talks to the page only through [`FormUi`] and to the backend only
/// through [`SubmissionService`].
pub struct FormController {
    ui: Arc<dyn FormUi>,
    backend: Arc<dyn SubmissionService>,
    config: FormConfig,
    state: Arc<RwLock<FormState>>,
    /// Fields currently showing an invalid indicator. Tracked here so
    /// `clear_field_error` stays idempotent without querying the page.
    invalid_fields: Arc<RwLock<HashSet<FieldName>>>,
    /// Deferred post-success reset, kept so a new submission or
    /// teardown can cancel it before it fires.
    pending_reset: Mutex<Option<JoinHandle<()>>>,
}

impl FormController {
    pub fn new(
        ui: Arc<dyn FormUi>,
        backend: Arc<dyn SubmissionService>,
        config: FormConfig,
    ) -> Self {
        Self {
            ui,
            backend,
            config,
            state: Arc::new(RwLock::new(FormState::Idle)),
            invalid_fields: Arc::new(RwLock::new(HashSet::new())),
            pending_reset: Mutex::new(None),
        }
    }

    pub async fn state(&self) -> FormState {
        *self.state.read().await
    }

    /// Validate one field against its registered rule chain and push the
    /// outcome to the page. Returns the verdict.
    pub async fn validate_field(&self, field: FieldName) -> bool {
        let value = self.ui.get_value(field);
        let checked = self.ui.get_checked(field);
        let verdict = validators::validate(field, &value, checked);

        let mut invalid = self.invalid_fields.write().await;
        if verdict.is_valid {
            invalid.remove(&field);
            self.ui
                .set_visual_state(field, VisualState::Valid, verdict.message);
        } else {
            invalid.insert(field);
            self.ui
                .set_visual_state(field, VisualState::Invalid, verdict.message);
        }

        verdict.is_valid
    }

    /// Validate every registered field in registry order, accumulating
    /// the labels of the ones that failed.
    pub async fn validate_all_fields(&self) -> FormValidation {
        let mut summary = FormValidation::new();

        for field in FieldName::ALL {
            if !self.validate_field(field).await {
                summary.add_error(field.label());
            }
        }

        summary
    }

    /// Clear the error indicator on a field if one is showing. Called on
    /// every raw-value change; a no-op for fields not currently marked
    /// invalid.
    pub async fn clear_field_error(&self, field: FieldName) {
        let mut invalid = self.invalid_fields.write().await;
        if invalid.remove(&field) {
            self.ui.set_visual_state(field, VisualState::Neutral, "");
        }
    }

    /// Run one submission attempt end to end.
    pub async fn submit(&self) -> SubmitStatus {
        {
            let mut state = self.state.write().await;
            if *state == FormState::Submitting {
                warn!("submission already in flight, ignoring");
                return SubmitStatus::InFlight;
            }
            *state = FormState::Validating;
        }

        self.ui.clear_banners();

        let summary = self.validate_all_fields().await;
        if !summary.is_valid {
            let message = match summary.errors.as_slice() {
                [only] => format!("Por favor corrige el campo: {}", only),
                labels => format!(
                    "Por favor corrige los siguientes campos: {}",
                    labels.join(", ")
                ),
            };
            self.ui.show_banner(BannerKind::Error, &message);
            *self.state.write().await = FormState::Invalid;
            return SubmitStatus::Rejected(summary);
        }

        let data = self.collect_form_data();

        if data.social_media.is_empty() && !self.ui.request_confirmation(CONFIRM_NO_SOCIAL) {
            info!("user declined to register without social networks");
            *self.state.write().await = FormState::Idle;
            return SubmitStatus::Declined;
        }

        self.cancel_pending_reset();
        *self.state.write().await = FormState::Submitting;
        self.ui.set_busy(true);
        info!(email = %safe_email_log(&data.email), "submitting registration");

        let result = self.backend.submit(&data).await;

        // Busy must clear on every path out of Submitting.
        self.ui.set_busy(false);

        match result {
            Ok(outcome) if outcome.success => {
                info!("registration accepted");
                self.ui.show_banner(BannerKind::Success, &outcome.message);
                *self.state.write().await = FormState::Succeeded;
                self.schedule_reset();
                SubmitStatus::Completed(outcome)
            }
            Ok(outcome) => {
                warn!(message = %outcome.message, "registration rejected by backend");
                let message = if outcome.message.is_empty() {
                    GENERIC_SUBMIT_ERROR
                } else {
                    outcome.message.as_str()
                };
                self.ui.show_banner(BannerKind::Error, message);
                *self.state.write().await = FormState::Failed;
                SubmitStatus::Completed(outcome)
            }
            Err(err) => {
                error!(error = %err, "registration transport failed");
                self.ui.show_banner(BannerKind::Error, CONNECTION_ERROR);
                *self.state.write().await = FormState::Failed;
                SubmitStatus::ConnectionFailed
            }
        }
    }

    /// Snapshot the page into a submission payload. Built fresh for each
    /// attempt.
    fn collect_form_data(&self) -> RegistrationData {
        RegistrationData {
            identification: self.ui.get_value(FieldName::Identification),
            id_type: self.ui.get_value(FieldName::IdType),
            first_name: self.ui.get_value(FieldName::FirstName),
            last_name: self.ui.get_value(FieldName::LastName),
            birth_date: self.ui.get_value(FieldName::BirthDate),
            gender: self.ui.get_value(FieldName::Gender),
            phone: self.ui.get_value(FieldName::Phone),
            email: self.ui.get_value(FieldName::Email),
            social_media: self.ui.social_selections(),
        }
    }

    /// Schedule the post-success form reset. After `reset_delay` the
    /// page is blanked, every indicator cleared and the form returns to
    /// `Idle`.
    fn schedule_reset(&self) {
        let ui = Arc::clone(&self.ui);
        let state = Arc::clone(&self.state);
        let invalid_fields = Arc::clone(&self.invalid_fields);
        let delay = self.config.reset_delay;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            ui.reset_all_fields();
            for field in FieldName::ALL {
                ui.set_visual_state(field, VisualState::Neutral, "");
            }
            invalid_fields.write().await.clear();
            *state.write().await = FormState::Idle;
        });

        if let Ok(mut pending) = self.pending_reset.lock() {
            *pending = Some(handle);
        }
    }

    fn cancel_pending_reset(&self) {
        if let Ok(mut pending) = self.pending_reset.lock() {
            if let Some(handle) = pending.take() {
                handle.abort();
            }
        }
    }
}

impl Drop for FormController {
    fn drop(&mut self) {
        // A pending reset must not outlive the controller it belongs to.
        self.cancel_pending_reset();
    }
}
