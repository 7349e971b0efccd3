// src/ui/console.rs
//
// Console front-end for the registration form. Plays the role the HTML
// page plays in production: it holds the raw field values and renders
// state transitions as terminal output.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::registration::fields::FieldName;

use super::{BannerKind, FormUi, VisualState};

pub struct ConsoleUi {
    values: Mutex<HashMap<FieldName, String>>,
    terms_accepted: Mutex<bool>,
    social: Mutex<Vec<String>>,
    /// Answer given to confirmation prompts; a real page would ask the
    /// user.
    confirm_by_default: bool,
}

impl ConsoleUi {
    pub fn new(confirm_by_default: bool) -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
            terms_accepted: Mutex::new(false),
            social: Mutex::new(Vec::new()),
            confirm_by_default,
        }
    }

    pub fn set_value(&self, field: FieldName, value: impl Into<String>) {
        self.values.lock().unwrap().insert(field, value.into());
    }

    pub fn set_terms_accepted(&self, accepted: bool) {
        *self.terms_accepted.lock().unwrap() = accepted;
    }

    pub fn select_social(&self, network: impl Into<String>) {
        self.social.lock().unwrap().push(network.into());
    }
}

impl FormUi for ConsoleUi {
    fn get_value(&self, field: FieldName) -> String {
        self.values
            .lock()
            .unwrap()
            .get(&field)
            .cloned()
            .unwrap_or_default()
    }

    fn get_checked(&self, field: FieldName) -> bool {
        match field {
            FieldName::Terms => *self.terms_accepted.lock().unwrap(),
            _ => false,
        }
    }

    fn social_selections(&self) -> Vec<String> {
        self.social.lock().unwrap().clone()
    }

    fn set_visual_state(&self, field: FieldName, state: VisualState, message: &str) {
        match state {
            VisualState::Invalid => println!("  [{}] ✗ {}", field.id(), message),
            VisualState::Valid => println!("  [{}] ✓", field.id()),
            VisualState::Neutral => {}
        }
    }

    fn show_banner(&self, kind: BannerKind, message: &str) {
        match kind {
            BannerKind::Success => println!("== {} ==", message),
            BannerKind::Error => println!("!! {} !!", message),
        }
    }

    fn clear_banners(&self) {
        // Nothing persistent to clear on a scrolling terminal.
    }

    fn set_busy(&self, busy: bool) {
        if busy {
            println!("Procesando...");
        }
    }

    fn reset_all_fields(&self) {
        self.values.lock().unwrap().clear();
        *self.terms_accepted.lock().unwrap() = false;
        self.social.lock().unwrap().clear();
        println!("(formulario restablecido)");
    }

    fn request_confirmation(&self, message: &str) -> bool {
        let answer = if self.confirm_by_default { "sí" } else { "no" };
        println!("? {} [{}]", message, answer);
        self.confirm_by_default
    }
}
