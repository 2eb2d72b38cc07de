//! Named form field validators.
//!
//! Validation is pure: it never touches storage. Callers display the
//! messages next to the offending fields and block submission while
//! [`ValidationReport::is_valid`] is false.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::{Email, PhoneNumber};

/// A named validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// At least 2 characters.
    Name,
    /// `local@domain.suffix` without whitespace.
    Email,
    /// 8-15 digits after stripping separators, optional leading `+`.
    Phone,
    /// At least 10 characters.
    Details,
}

impl Rule {
    const MIN_NAME_CHARS: usize = 2;
    const MIN_DETAILS_CHARS: usize = 10;

    /// The message shown to the shopper when the rule fails.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Name => "Numele trebuie să aibă cel puțin 2 caractere",
            Self::Email => "Introdu un email valid",
            Self::Phone => "Introdu un număr de telefon valid (8-15 cifre)",
            Self::Details => "Te rugăm să descrii cererea (min. 10 caractere)",
        }
    }

    /// Check a value against the rule. The value is trimmed first.
    #[must_use]
    pub fn check(self, value: &str) -> bool {
        let value = value.trim();
        match self {
            Self::Name => value.chars().count() >= Self::MIN_NAME_CHARS,
            Self::Email => Email::parse(value).is_ok(),
            Self::Phone => PhoneNumber::parse(value).is_ok(),
            Self::Details => value.chars().count() >= Self::MIN_DETAILS_CHARS,
        }
    }
}

/// Outcome of [`validate`]: field name mapped to an error message, or `None`
/// when the field passed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport(BTreeMap<String, Option<String>>);

impl ValidationReport {
    /// True when no checked field has an error.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.0.values().all(Option::is_none)
    }

    /// The error message for a field, if it failed.
    #[must_use]
    pub fn error(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Option::as_deref)
    }

    /// True when the field was present in the input and checked.
    #[must_use]
    pub fn was_checked(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Iterate over failing fields and their messages.
    pub fn errors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .filter_map(|(field, message)| message.as_deref().map(|m| (field.as_str(), m)))
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.errors() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Validate form fields against named rules.
///
/// Fields missing from `fields` are skipped and do not appear in the report.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use sonero_core::{Rule, validate};
///
/// let fields = BTreeMap::from([
///     ("email".to_string(), "a@b".to_string()),
///     ("phone".to_string(), "069123456".to_string()),
/// ]);
/// let report = validate(&fields, &[("email", Rule::Email), ("phone", Rule::Phone)]);
///
/// assert!(!report.is_valid());
/// assert!(report.error("email").is_some());
/// assert!(report.error("phone").is_none());
/// ```
#[must_use]
pub fn validate(fields: &BTreeMap<String, String>, rules: &[(&str, Rule)]) -> ValidationReport {
    let mut report = BTreeMap::new();
    for &(field, rule) in rules {
        let Some(value) = fields.get(field) else {
            continue;
        };
        let message = (!rule.check(value)).then(|| rule.message().to_owned());
        report.insert(field.to_owned(), message);
    }
    ValidationReport(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_phone_rule() {
        assert!(Rule::Phone.check("069123456"));
        assert!(!Rule::Phone.check("123"));
    }

    #[test]
    fn test_email_rule() {
        assert!(!Rule::Email.check("a@b"));
        assert!(Rule::Email.check("a@b.com"));
        assert!(Rule::Email.check("  a@b.com  "));
    }

    #[test]
    fn test_details_rule_boundary() {
        assert!(!Rule::Details.check("123456789"));
        assert!(Rule::Details.check("1234567890"));
    }

    #[test]
    fn test_name_rule_counts_characters() {
        assert!(!Rule::Name.check("A"));
        assert!(!Rule::Name.check(" A "));
        assert!(Rule::Name.check("Ți"));
    }

    #[test]
    fn test_validate_reports_every_checked_field() {
        let input = fields(&[
            ("name", "Ana"),
            ("email", "ana@example"),
            ("phone", "0722 123 456"),
            ("details", "prea scurt"),
        ]);
        let report = validate(
            &input,
            &[
                ("name", Rule::Name),
                ("email", Rule::Email),
                ("phone", Rule::Phone),
                ("details", Rule::Details),
            ],
        );

        assert!(!report.is_valid());
        assert_eq!(report.error("name"), None);
        assert_eq!(report.error("email"), Some(Rule::Email.message()));
        assert_eq!(report.error("phone"), None);
        assert_eq!(report.error("details"), None);
        assert_eq!(report.errors().count(), 1);
    }

    #[test]
    fn test_validate_skips_missing_fields() {
        let input = fields(&[("name", "Ana")]);
        let report = validate(&input, &[("name", Rule::Name), ("email", Rule::Email)]);

        assert!(report.is_valid());
        assert!(report.was_checked("name"));
        assert!(!report.was_checked("email"));
    }

    #[test]
    fn test_report_display() {
        let input = fields(&[("name", "A"), ("details", "scurt")]);
        let report = validate(&input, &[("name", Rule::Name), ("details", Rule::Details)]);

        let text = report.to_string();
        assert!(text.contains("details: "));
        assert!(text.contains("name: "));
    }
}
