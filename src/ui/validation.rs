use regex::Regex;

use crate::consts::consts::{NAME_CHAR_MAX, NAME_CHAR_MIN};

/// The message catalogue and length bounds, constructed explicitly and
/// handed to the validator (no ambient resource lookup).
#[derive(Clone, Debug)]
pub struct ValidatorResources {
    pub char_min: usize,
    pub char_max: usize,
    pub name_too_short: String,
    pub name_too_long: String,
    pub email_invalid: String,
    pub phone_invalid: String,
}

impl Default for ValidatorResources {
    fn default() -> Self {
        Self {
            char_min: NAME_CHAR_MIN,
            char_max: NAME_CHAR_MAX,
            name_too_short: format!("Name is too short, minimum {NAME_CHAR_MIN} characters"),
            name_too_long: format!("Name is too long, maximum {NAME_CHAR_MAX} characters"),
            email_invalid: "Email address is not valid".to_string(),
            phone_invalid: "Phone number is not valid".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldValidation {
    pub is_invalid: bool,
    pub message: String,
}

impl FieldValidation {
    fn valid() -> Self {
        Self {
            is_invalid: false,
            message: String::new(),
        }
    }

    fn invalid(message: &str) -> Self {
        Self {
            is_invalid: true,
            message: message.to_string(),
        }
    }
}

/// Pure field validators. Whether these run per keystroke or on focus loss
/// is the presentation layer's call.
pub struct PersonValidator {
    resources: ValidatorResources,
    email_pattern: Regex,
    phone_pattern: Regex,
}

impl PersonValidator {
    pub fn new(resources: ValidatorResources) -> Self {
        let email_pattern = Regex::new(r"^[A-Za-z0-9+_.%-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
            .expect("email pattern is valid");

        let phone_pattern =
            Regex::new(r"^\+?[0-9][0-9 ().\-]{2,}$").expect("phone pattern is valid");

        Self {
            resources,
            email_pattern,
            phone_pattern,
        }
    }

    pub fn resources(&self) -> &ValidatorResources {
        &self.resources
    }

    pub fn validate_first_name(&self, name: &str) -> FieldValidation {
        self.validate_name(name)
    }

    pub fn validate_last_name(&self, name: &str) -> FieldValidation {
        self.validate_name(name)
    }

    fn validate_name(&self, name: &str) -> FieldValidation {
        let length = name.chars().count();

        if name.is_empty() || length < self.resources.char_min {
            FieldValidation::invalid(&self.resources.name_too_short)
        } else if length > self.resources.char_max {
            FieldValidation::invalid(&self.resources.name_too_long)
        } else {
            FieldValidation::valid()
        }
    }

    /// Optional field, absent is valid.
    pub fn validate_email(&self, email: Option<&str>) -> FieldValidation {
        match email {
            None => FieldValidation::valid(),
            Some(email) if self.email_pattern.is_match(email) => FieldValidation::valid(),
            Some(_) => FieldValidation::invalid(&self.resources.email_invalid),
        }
    }

    /// Optional field, absent is valid.
    pub fn validate_phone(&self, phone: Option<&str>) -> FieldValidation {
        match phone {
            None => FieldValidation::valid(),
            Some(phone) if self.phone_pattern.is_match(phone) => FieldValidation::valid(),
            Some(_) => FieldValidation::invalid(&self.resources.phone_invalid),
        }
    }
}

impl Default for PersonValidator {
    fn default() -> Self {
        Self::new(ValidatorResources::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("A")]
    fn too_short_names_are_invalid(#[case] name: &str) {
        let validator = PersonValidator::default();

        let validation = validator.validate_first_name(name);

        assert!(validation.is_invalid);
        assert_eq!(validation.message, validator.resources().name_too_short);
    }

    #[test]
    fn over_long_names_are_invalid_with_the_too_long_message() {
        let validator = PersonValidator::default();

        let validation = validator.validate_last_name("Annegret-Wilhelmine");

        assert!(validation.is_invalid);
        assert_eq!(validation.message, validator.resources().name_too_long);
    }

    #[rstest]
    #[case("An")]
    #[case("Annegret")]
    fn in_range_names_are_valid(#[case] name: &str) {
        let validator = PersonValidator::default();

        let validation = validator.validate_first_name(name);

        assert!(!validation.is_invalid);
        assert_eq!(validation.message, "");
    }

    #[rstest]
    #[case(None, false)]
    #[case(Some("a@b.com"), false)]
    #[case(Some("arne.arndt@gmail.com"), false)]
    #[case(Some("not-an-email"), true)]
    #[case(Some("missing@tld"), true)]
    fn email_validation(#[case] email: Option<&str>, #[case] expected_invalid: bool) {
        let validator = PersonValidator::default();

        let validation = validator.validate_email(email);

        assert_eq!(validation.is_invalid, expected_invalid);
    }

    #[rstest]
    #[case(None, false)]
    #[case(Some("0123 456-789"), false)]
    #[case(Some("+49 30 1234567"), false)]
    #[case(Some("not-a-phone"), true)]
    fn phone_validation(#[case] phone: Option<&str>, #[case] expected_invalid: bool) {
        let validator = PersonValidator::default();

        let validation = validator.validate_phone(phone);

        assert_eq!(validation.is_invalid, expected_invalid);
    }
}
