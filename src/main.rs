// src/main.rs
use dotenv::dotenv;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

// ============================================================================
// MODULE IMPORTS
// ============================================================================

mod common;
mod registration;
mod services;
mod ui;

use common::FormConfig;
use registration::{format, FieldName, FormController};
use services::SimulatedBackend;
use ui::ConsoleUi;

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // ========================================================================
    // CONFIGURATION
    // ========================================================================

    let config = FormConfig::from_env();
    info!(
        submission_delay_ms = config.submission_delay.as_millis() as u64,
        reset_delay_ms = config.reset_delay.as_millis() as u64,
        "form configuration loaded"
    );

    // ========================================================================
    // WIRING
    // ========================================================================

    let page = Arc::new(ConsoleUi::new(true));
    let backend = Arc::new(SimulatedBackend::new(config.submission_delay));
    let form = FormController::new(page.clone(), backend, config.clone());

    // ========================================================================
    // DEMO SUBMISSION
    // ========================================================================

    // The session a browser user would have typed in.
    page.set_value(FieldName::Identification, "10203040");
    page.set_value(FieldName::IdType, "CC");
    page.set_value(FieldName::FirstName, format::capitalize_words("maría josé"));
    page.set_value(FieldName::LastName, format::capitalize_words("garcía lópez"));
    page.set_value(FieldName::BirthDate, "1995-06-15");
    page.set_value(FieldName::Gender, "femenino");
    page.set_value(FieldName::Phone, format::format_phone("3001234567"));
    page.set_terms_accepted(true);
    page.select_social("instagram");

    // A typo caught on focus loss, then corrected while typing.
    page.set_value(FieldName::Email, "maria.garcia@");
    form.validate_field(FieldName::Email).await;
    page.set_value(FieldName::Email, "maria.garcia@example.com");
    form.clear_field_error(FieldName::Email).await;

    let status = form.submit().await;
    info!(?status, "submission finished");

    // Let the deferred reset run so the whole lifecycle is visible.
    tokio::time::sleep(config.reset_delay + Duration::from_millis(100)).await;
    info!(state = ?form.state().await, "form back to idle");

    Ok(())
}
