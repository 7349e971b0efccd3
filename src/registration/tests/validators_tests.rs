// src/registration/tests/validators_tests.rs

#[cfg(test)]
mod tests {
    use chrono::{Duration, Local, Months, NaiveDate};

    use crate::registration::fields::FieldName;
    use crate::registration::validators::*;

    fn date_string(date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    #[test]
    fn identification_accepts_six_to_fifteen_digits() {
        assert!(validate_identification("123456").is_valid);
        assert!(validate_identification("123456789012345").is_valid);
        assert!(validate_identification("  123456  ").is_valid);
    }

    #[test]
    fn identification_rejects_out_of_range_or_non_numeric_input() {
        assert!(!validate_identification("12345").is_valid);
        assert!(!validate_identification("1234567890123456").is_valid);
        assert!(!validate_identification("12a456").is_valid);

        let empty = validate_identification("");
        assert!(!empty.is_valid);
        assert_eq!(empty.message, "El número de identificación es obligatorio");
    }

    #[test]
    fn required_fields_need_non_blank_content() {
        assert!(validate_required("CC").is_valid);
        assert!(!validate_required("").is_valid);
        assert!(!validate_required("   ").is_valid);
    }

    #[test]
    fn names_allow_spanish_letters_and_spaces() {
        assert!(validate_name("José").is_valid);
        assert!(validate_name("María Ñáñez").is_valid);
        assert!(validate_name("Juan Pablo").is_valid);
    }

    #[test]
    fn names_reject_short_or_non_letter_input() {
        let short = validate_name("J");
        assert!(!short.is_valid);
        assert_eq!(short.message, "Debe tener al menos 2 caracteres");

        assert!(!validate_name("Juan123").is_valid);
        assert!(!validate_name("O'Brien").is_valid);
        assert!(!validate_name("  ").is_valid);
    }

    #[test]
    fn birth_date_exactly_thirteen_years_ago_is_valid() {
        let today = Local::now().date_naive();
        let birth = today.checked_sub_months(Months::new(12 * 13)).unwrap();

        assert!(validate_birth_date(&date_string(birth)).is_valid);
    }

    #[test]
    fn birth_date_one_day_short_of_thirteen_years_is_rejected() {
        let today = Local::now().date_naive();
        let birth =
            today.checked_sub_months(Months::new(12 * 13)).unwrap() + Duration::days(1);

        let result = validate_birth_date(&date_string(birth));
        assert!(!result.is_valid);
        assert_eq!(result.message, "Debes tener al menos 13 años para registrarte");
    }

    #[test]
    fn birth_date_rejects_future_and_malformed_values() {
        let tomorrow = Local::now().date_naive() + Duration::days(1);
        let future = validate_birth_date(&date_string(tomorrow));
        assert!(!future.is_valid);
        assert_eq!(future.message, "La fecha de nacimiento no puede ser futura");

        assert!(!validate_birth_date("").is_valid);
        assert!(!validate_birth_date("not-a-date").is_valid);
        assert!(!validate_birth_date("2020-13-45").is_valid);
    }

    #[test]
    fn birth_date_age_ceiling_is_one_hundred_twenty() {
        let today = Local::now().date_naive();

        let exactly_120 = today.checked_sub_months(Months::new(12 * 120)).unwrap();
        assert!(validate_birth_date(&date_string(exactly_120)).is_valid);

        let over_120 = today.checked_sub_months(Months::new(12 * 121)).unwrap();
        let result = validate_birth_date(&date_string(over_120));
        assert!(!result.is_valid);
        assert_eq!(result.message, "Por favor verifica la fecha de nacimiento");
    }

    #[test]
    fn age_counts_completed_years_only() {
        let birth = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();

        let before_birthday = NaiveDate::from_ymd_opt(2020, 6, 14).unwrap();
        assert_eq!(age_on(birth, before_birthday), 19);

        let on_birthday = NaiveDate::from_ymd_opt(2020, 6, 15).unwrap();
        assert_eq!(age_on(birth, on_birthday), 20);

        let earlier_month = NaiveDate::from_ymd_opt(2020, 5, 30).unwrap();
        assert_eq!(age_on(birth, earlier_month), 19);
    }

    #[test]
    fn phone_accepts_separators_and_seven_to_fifteen_digits() {
        assert!(validate_phone("3001234567").is_valid);
        assert!(validate_phone("300-123-4567").is_valid);
        assert!(validate_phone("(300) 123 4567").is_valid);
        assert!(validate_phone("1234567").is_valid);
    }

    #[test]
    fn phone_rejects_short_long_or_lettered_numbers() {
        let short = validate_phone("123456");
        assert!(!short.is_valid);
        assert_eq!(short.message, "El teléfono debe tener entre 7 y 15 dígitos");

        assert!(!validate_phone("1234567890123456").is_valid);
        assert!(!validate_phone("300abc4567").is_valid);
        assert!(!validate_phone("+573001234567").is_valid);
        assert!(!validate_phone("   ").is_valid);
    }

    #[test]
    fn email_requires_user_at_domain_with_dot() {
        assert!(validate_email("a@b.co").is_valid);
        assert!(validate_email("maria.garcia@example.com").is_valid);

        assert!(!validate_email("a@bc").is_valid);
        assert!(!validate_email("a@b").is_valid);
        assert!(!validate_email("a b@c.d").is_valid);
        assert!(!validate_email("").is_valid);
    }

    #[test]
    fn terms_follow_the_checkbox_state() {
        assert!(validate_terms(true).is_valid);

        let unchecked = validate_terms(false);
        assert!(!unchecked.is_valid);
        assert_eq!(
            unchecked.message,
            "Debes aceptar los términos y condiciones para continuar"
        );
    }

    #[test]
    fn every_field_accepts_a_rule_satisfying_value() {
        for field in FieldName::ALL {
            let value = match field {
                FieldName::Identification => "10203040",
                FieldName::IdType => "CC",
                FieldName::FirstName => "María",
                FieldName::LastName => "García",
                FieldName::BirthDate => "1995-06-15",
                FieldName::Gender => "femenino",
                FieldName::Phone => "300-123-4567",
                FieldName::Email => "maria@example.com",
                FieldName::Terms => "",
            };

            assert!(
                validate(field, value, true).is_valid,
                "field {} rejected a valid value",
                field.id()
            );
        }
    }

    #[test]
    fn terms_dispatch_ignores_the_raw_value() {
        assert!(validate(FieldName::Terms, "anything", true).is_valid);
        assert!(!validate(FieldName::Terms, "anything", false).is_valid);
    }
}
