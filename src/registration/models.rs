// src/registration/models.rs

use serde::{Deserialize, Serialize};

/// Payload assembled from the page at submission time and discarded once
/// the attempt resolves. Wire keys match the form control names; terms
/// is a gate consumed during validation and is deliberately absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationData {
    pub identification: String,
    pub id_type: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub gender: String,
    pub phone: String,
    pub email: String,
    /// Values of every checked option in the shared social-network
    /// group; an empty list triggers the optional confirmation prompt.
    pub social_media: Vec<String>,
}
