use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub const MIN_NAME_LENGTH: usize = 2;
pub const MIN_AGE: i64 = 18;
pub const MAX_AGE: i64 = 100;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Age,
    Email,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::FirstName, Field::LastName, Field::Age, Field::Email];

    /// Name used for the `name`/`id` attributes of the input.
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Age => "age",
            Field::Email => "email",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::Age => "Age",
            Field::Email => "Email",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.name() == name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Must be at least 2 characters")]
    TooShort,
    #[error("Must be 18-100")]
    OutOfRange,
    #[error("Please enter a valid email")]
    InvalidEmail,
}

/// Raw input exactly as typed. Age stays a string until validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub age: String,
    pub email: String,
}

impl SignupForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Age => &self.age,
            Field::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Age => self.age = value,
            Field::Email => self.email = value,
        }
    }

    /// Age as an integer, if the field holds one.
    pub fn parsed_age(&self) -> Option<i64> {
        self.age.trim().parse().ok()
    }
}

/// Failing fields only. Empty means the form is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<Field, FieldError>);

impl FormErrors {
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn insert(&mut self, field: Field, error: Option<FieldError>) {
        if let Some(error) = error {
            self.0.insert(field, error);
        }
    }
}

pub fn validate(form: &SignupForm) -> FormErrors {
    let mut errors = FormErrors::default();
    errors.insert(Field::FirstName, check_name(Field::FirstName, &form.first_name));
    errors.insert(Field::LastName, check_name(Field::LastName, &form.last_name));
    errors.insert(Field::Age, check_age(form));
    errors.insert(Field::Email, check_email(&form.email));
    errors
}

fn check_name(field: Field, value: &str) -> Option<FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Some(FieldError::Required(field.label()))
    } else if trimmed.chars().count() < MIN_NAME_LENGTH {
        Some(FieldError::TooShort)
    } else {
        None
    }
}

fn check_age(form: &SignupForm) -> Option<FieldError> {
    if form.age.trim().is_empty() {
        return Some(FieldError::Required(Field::Age.label()));
    }
    match form.parsed_age() {
        Some(age) if (MIN_AGE..=MAX_AGE).contains(&age) => None,
        _ => Some(FieldError::OutOfRange),
    }
}

fn check_email(value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        Some(FieldError::Required(Field::Email.label()))
    } else if !EMAIL_PATTERN.is_match(value) {
        Some(FieldError::InvalidEmail)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SignupForm {
        SignupForm {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            age: "25".to_string(),
            email: "john@example.com".to_string(),
        }
    }

    fn with(field: Field, value: &str) -> SignupForm {
        let mut form = valid_form();
        form.set(field, value.to_string());
        form
    }

    #[test]
    fn valid_form_has_no_errors() {
        assert!(validate(&valid_form()).is_empty());
    }

    #[test]
    fn validation_is_deterministic() {
        let form = SignupForm {
            first_name: "A".to_string(),
            age: "abc".to_string(),
            ..SignupForm::default()
        };
        assert_eq!(validate(&form), validate(&form));
    }

    #[test]
    fn age_bounds_are_inclusive() {
        for age in ["17", "101"] {
            assert_eq!(validate(&with(Field::Age, age)).get(Field::Age), Some(&FieldError::OutOfRange));
        }
        for age in ["18", "100"] {
            assert!(validate(&with(Field::Age, age)).is_empty(), "age {age} should pass");
        }
    }

    #[test]
    fn non_numeric_age_is_out_of_range() {
        let errors = validate(&with(Field::Age, "abc"));
        assert_eq!(errors.get(Field::Age), Some(&FieldError::OutOfRange));
    }

    #[test]
    fn empty_age_is_required() {
        let errors = validate(&with(Field::Age, ""));
        assert_eq!(errors.get(Field::Age), Some(&FieldError::Required("Age")));
    }

    #[test]
    fn blank_age_counts_as_missing() {
        let errors = validate(&with(Field::Age, "   "));
        assert_eq!(errors.get(Field::Age), Some(&FieldError::Required("Age")));
    }

    #[test]
    fn email_shapes() {
        assert!(validate(&with(Field::Email, "a@b.c")).is_empty());
        for email in ["a@b", "@b.c", "a@b.", "a@@b.c", "a b@c.d"] {
            assert_eq!(
                validate(&with(Field::Email, email)).get(Field::Email),
                Some(&FieldError::InvalidEmail),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn name_length_counts_trimmed_characters() {
        assert!(validate(&with(Field::FirstName, "Al")).is_empty());
        assert_eq!(validate(&with(Field::LastName, " Ö ")).get(Field::LastName), Some(&FieldError::TooShort));
        assert_eq!(validate(&with(Field::FirstName, "A")).get(Field::FirstName), Some(&FieldError::TooShort));
        assert_eq!(
            validate(&with(Field::FirstName, "  ")).get(Field::FirstName),
            Some(&FieldError::Required("First name"))
        );
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = validate(&SignupForm::default());
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(Field::FirstName).map(ToString::to_string).as_deref(), Some("First name is required"));
        assert_eq!(errors.get(Field::LastName).map(ToString::to_string).as_deref(), Some("Last name is required"));
        assert_eq!(errors.get(Field::Age).map(ToString::to_string).as_deref(), Some("Age is required"));
        assert_eq!(errors.get(Field::Email).map(ToString::to_string).as_deref(), Some("Email is required"));
    }

    #[test]
    fn field_names_round_trip_through_input_attributes() {
        assert_eq!(Field::from_name("lastName"), Some(Field::LastName));
        assert_eq!(Field::from_name("nickname"), None);
    }
}
