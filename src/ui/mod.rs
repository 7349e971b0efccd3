// src/ui/mod.rs
//
// Presentation boundary. The form controller talks to the page only
// through the FormUi trait; the real page, the console demo and the
// test fakes all sit behind it.

pub mod console;

use crate::registration::fields::FieldName;

pub use console::ConsoleUi;

/// Visual validity state of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualState {
    Valid,
    Invalid,
    Neutral,
}

/// Page-level message kind, distinct from per-field error text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

pub trait FormUi: Send + Sync {
    /// Current raw value of a field.
    fn get_value(&self, field: FieldName) -> String;

    /// Checked state of a checkbox field; only meaningful for terms.
    fn get_checked(&self, field: FieldName) -> bool;

    /// Values of the checked options in the shared social-network group.
    fn social_selections(&self) -> Vec<String>;

    /// Apply a validity indicator to a field. `message` carries the
    /// verdict text; presentations typically render it only when the
    /// state is `Invalid`.
    fn set_visual_state(&self, field: FieldName, state: VisualState, message: &str);

    fn show_banner(&self, kind: BannerKind, message: &str);

    /// Hide any banner currently showing.
    fn clear_banners(&self);

    /// Disable or re-enable resubmission while a submission is in
    /// flight.
    fn set_busy(&self, busy: bool);

    /// Blank every field value, including checkboxes.
    fn reset_all_fields(&self);

    /// Ask the user to confirm an optional condition; `true` continues
    /// the submission.
    fn request_confirmation(&self, message: &str) -> bool;
}
