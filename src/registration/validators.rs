// src/registration/validators.rs

use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::common::FieldVerdict;

use super::fields::FieldName;

static IDENTIFICATION_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{6,15}$").unwrap());

// Letters, spaces and the Spanish accented set; nothing else.
static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ\s]+$").unwrap());

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{7,15}$").unwrap());

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Dispatch to the validator registered for `field`. `checked` carries
/// the checkbox state and is only consulted by the terms field.
pub fn validate(field: FieldName, value: &str, checked: bool) -> FieldVerdict {
    match field {
        FieldName::Identification => validate_identification(value),
        FieldName::IdType | FieldName::Gender => validate_required(value),
        FieldName::FirstName | FieldName::LastName => validate_name(value),
        FieldName::BirthDate => validate_birth_date(value),
        FieldName::Phone => validate_phone(value),
        FieldName::Email => validate_email(value),
        FieldName::Terms => validate_terms(checked),
    }
}

// ============================================================================
// Per-field rule chains (first failing rule wins)
// ============================================================================

pub fn validate_required(value: &str) -> FieldVerdict {
    FieldVerdict {
        is_valid: !value.trim().is_empty(),
        message: "Este campo es obligatorio",
    }
}

pub fn validate_identification(value: &str) -> FieldVerdict {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return FieldVerdict::fail("El número de identificación es obligatorio");
    }

    if !IDENTIFICATION_REGEX.is_match(trimmed) {
        return FieldVerdict::fail(
            "El número de identificación debe contener entre 6 y 15 dígitos",
        );
    }

    FieldVerdict::pass("Número de identificación válido")
}

pub fn validate_name(value: &str) -> FieldVerdict {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return FieldVerdict::fail("Este campo es obligatorio");
    }

    if trimmed.chars().count() < 2 {
        return FieldVerdict::fail("Debe tener al menos 2 caracteres");
    }

    if !NAME_REGEX.is_match(trimmed) {
        return FieldVerdict::fail("Solo se permiten letras y espacios");
    }

    FieldVerdict::pass("Nombre válido")
}

pub fn validate_birth_date(value: &str) -> FieldVerdict {
    if value.is_empty() {
        return FieldVerdict::fail("La fecha de nacimiento es obligatoria");
    }

    // A malformed date is a validation failure, never a crash.
    let birth = match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => return FieldVerdict::fail("La fecha de nacimiento no es válida"),
    };

    let today = Local::now().date_naive();

    if birth > today {
        return FieldVerdict::fail("La fecha de nacimiento no puede ser futura");
    }

    let age = age_on(birth, today);

    if age < 13 {
        return FieldVerdict::fail("Debes tener al menos 13 años para registrarte");
    }

    if age > 120 {
        return FieldVerdict::fail("Por favor verifica la fecha de nacimiento");
    }

    FieldVerdict::pass("Fecha de nacimiento válida")
}

pub fn validate_phone(value: &str) -> FieldVerdict {
    if value.trim().is_empty() {
        return FieldVerdict::fail("El número de teléfono es obligatorio");
    }

    // Separators users type are stripped before the digit check.
    let clean: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect();

    if !PHONE_REGEX.is_match(&clean) {
        return FieldVerdict::fail("El teléfono debe tener entre 7 y 15 dígitos");
    }

    FieldVerdict::pass("Número de teléfono válido")
}

pub fn validate_email(value: &str) -> FieldVerdict {
    if value.trim().is_empty() {
        return FieldVerdict::fail("El correo electrónico es obligatorio");
    }

    if !EMAIL_REGEX.is_match(value.trim()) {
        return FieldVerdict::fail("Por favor ingresa un correo electrónico válido");
    }

    // Domain sanity check on the raw value, split at the first '@'.
    if let Some(domain) = value.split('@').nth(1) {
        if domain.len() < 3 {
            return FieldVerdict::fail("El dominio del correo no es válido");
        }
    }

    FieldVerdict::pass("Correo electrónico válido")
}

pub fn validate_terms(checked: bool) -> FieldVerdict {
    FieldVerdict {
        is_valid: checked,
        message: "Debes aceptar los términos y condiciones para continuar",
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Completed years between `birth` and `today`: the year difference,
/// minus one when this year's birthday has not happened yet.
pub(crate) fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if today.month() < birth.month()
        || (today.month() == birth.month() && today.day() < birth.day())
    {
        age -= 1;
    }
    age
}
