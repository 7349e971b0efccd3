// src/registration/fields.rs

use std::fmt;

/// The nine fields of the registration form. Every variant has exactly
/// one validator and one label; form-wide operations walk them in the
/// order of [`FieldName::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Identification,
    IdType,
    FirstName,
    LastName,
    BirthDate,
    Gender,
    Phone,
    Email,
    Terms,
}

impl FieldName {
    /// Registry iteration order. Aggregate validation, error reporting
    /// and the post-success reset all follow this order.
    pub const ALL: [FieldName; 9] = [
        FieldName::Identification,
        FieldName::IdType,
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::BirthDate,
        FieldName::Gender,
        FieldName::Phone,
        FieldName::Email,
        FieldName::Terms,
    ];

    /// The field's control name on the page. These nine strings are a
    /// stable interface with the markup; renaming one breaks it.
    pub fn id(self) -> &'static str {
        match self {
            FieldName::Identification => "identification",
            FieldName::IdType => "idType",
            FieldName::FirstName => "firstName",
            FieldName::LastName => "lastName",
            FieldName::BirthDate => "birthDate",
            FieldName::Gender => "gender",
            FieldName::Phone => "phone",
            FieldName::Email => "email",
            FieldName::Terms => "terms",
        }
    }

    /// Human-readable label used in the form-level error banner.
    pub fn label(self) -> &'static str {
        match self {
            FieldName::Identification => "Número de identificación",
            FieldName::IdType => "Tipo de documento",
            FieldName::FirstName => "Nombres",
            FieldName::LastName => "Apellidos",
            FieldName::BirthDate => "Fecha de nacimiento",
            FieldName::Gender => "Género",
            FieldName::Phone => "Número de teléfono",
            FieldName::Email => "Correo electrónico",
            FieldName::Terms => "Términos y condiciones",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
