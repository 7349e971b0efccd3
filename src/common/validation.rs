// Common validation types shared by the form modules

/// Outcome of running one field through its rule chain. Messages are the
/// fixed product strings shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldVerdict {
    pub is_valid: bool,
    pub message: &'static str,
}

impl FieldVerdict {
    pub fn pass(message: &'static str) -> Self {
        Self {
            is_valid: true,
            message,
        }
    }

    pub fn fail(message: &'static str) -> Self {
        Self {
            is_valid: false,
            message,
        }
    }
}

/// Form-level summary. `errors` collects the labels of invalid fields in
/// the order the registry walks them.
#[derive(Debug, Clone)]
pub struct FormValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl FormValidation {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, label: &str) {
        self.is_valid = false;
        self.errors.push(label.to_string());
    }
}

impl Default for FormValidation {
    fn default() -> Self {
        Self::new()
    }
}
