//! Submit-time validation of a [`ProfileDraft`].
//!
//! Validation is a flat list of rules. Every field is checked on every run;
//! when a field has several rules the first failing one supplies its message.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::draft::{ProfileDraft, ProfileField};

/// Coarse `local@domain.tld` check, not RFC 5322.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

/// Predicate over a single field value. Returns true when the value passes.
pub type Check = fn(&str) -> bool;

/// A single validation rule.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub field: ProfileField,
    pub check: Check,
    pub message: &'static str,
}

fn required(value: &str) -> bool {
    !value.is_empty()
}

fn email_format(value: &str) -> bool {
    // Absence is reported by the required rule.
    value.is_empty() || EMAIL_PATTERN.is_match(value)
}

pub const RULES: &[Rule] = &[
    Rule {
        field: ProfileField::LastName,
        check: required,
        message: "Le nom est requis",
    },
    Rule {
        field: ProfileField::FirstName,
        check: required,
        message: "Le prénom est requis",
    },
    Rule {
        field: ProfileField::Email,
        check: required,
        message: "L'email est requis",
    },
    Rule {
        field: ProfileField::Email,
        check: email_format,
        message: "L'email est invalide",
    },
    Rule {
        field: ProfileField::Address,
        check: required,
        message: "L'adresse est requise",
    },
    Rule {
        field: ProfileField::Phone,
        check: required,
        message: "Le téléphone est requis",
    },
    Rule {
        field: ProfileField::DateOfBirth,
        check: required,
        message: "La date de naissance est requise",
    },
    Rule {
        field: ProfileField::JobTitle,
        check: required,
        message: "Le titre du poste est requis",
    },
];

/// Per-field validation messages. An absent field is valid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorMap {
    errors: BTreeMap<ProfileField, &'static str>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: ProfileField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn contains(&self, field: ProfileField) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = ProfileField> + '_ {
        self.errors.keys().copied()
    }

    fn record(&mut self, field: ProfileField, message: &'static str) {
        self.errors.entry(field).or_insert(message);
    }
}

/// Applies [`RULES`] to the draft.
pub fn validate(draft: &ProfileDraft) -> ErrorMap {
    validate_with(RULES, draft)
}

pub fn validate_with(rules: &[Rule], draft: &ProfileDraft) -> ErrorMap {
    let mut errors = ErrorMap::new();
    for rule in rules {
        if errors.contains(rule.field) {
            continue;
        }
        if !(rule.check)(draft.get(rule.field)) {
            errors.record(rule.field, rule.message);
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ProfileDraft {
        ProfileDraft {
            last_name: "Mbarga".into(),
            first_name: "Paul".into(),
            email: "paul.mbarga@example.com".into(),
            address: "Rue 1.234, Yaoundé".into(),
            phone: "+237 677000000".into(),
            date_of_birth: "1985-11-03".into(),
            job_title: "Comptable".into(),
        }
    }

    #[test]
    fn valid_draft_has_no_errors() {
        assert!(validate(&valid_draft()).is_empty());
    }

    #[test]
    fn empty_draft_reports_every_field() {
        let errors = validate(&ProfileDraft::default());
        assert_eq!(errors.len(), 7);
        assert_eq!(errors.get(ProfileField::Email), Some("L'email est requis"));
    }

    #[test]
    fn each_missing_field_is_reported_alone() {
        let expected = [
            (ProfileField::LastName, "Le nom est requis"),
            (ProfileField::FirstName, "Le prénom est requis"),
            (ProfileField::Email, "L'email est requis"),
            (ProfileField::Address, "L'adresse est requise"),
            (ProfileField::Phone, "Le téléphone est requis"),
            (ProfileField::DateOfBirth, "La date de naissance est requise"),
            (ProfileField::JobTitle, "Le titre du poste est requis"),
        ];
        for (field, message) in expected {
            let draft = valid_draft().update(field, "");
            let errors = validate(&draft);
            assert_eq!(errors.len(), 1, "{field}");
            assert_eq!(errors.get(field), Some(message));
        }
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["not-an-email", "a@b", "@example.com", "a b@c d"] {
            let errors = validate(&valid_draft().update(ProfileField::Email, email));
            assert_eq!(
                errors.get(ProfileField::Email),
                Some("L'email est invalide"),
                "{email}"
            );
            assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn coarse_email_shapes_pass() {
        for email in ["a@b.c", "x.y+z@sub.domain.org", "weird!@host.name"] {
            let errors = validate(&valid_draft().update(ProfileField::Email, email));
            assert!(errors.is_empty(), "{email}");
        }
    }

    #[test]
    fn whitespace_only_counts_as_present() {
        let errors = validate(&valid_draft().update(ProfileField::JobTitle, "   "));
        assert!(errors.is_empty());
    }

    #[test]
    fn custom_rule_list_is_evaluated_uniformly() {
        let rules = [Rule {
            field: ProfileField::DateOfBirth,
            check: |value: &str| value.starts_with("19"),
            message: "too young",
        }];
        let draft = valid_draft().update(ProfileField::DateOfBirth, "2001-01-01");
        let errors = validate_with(&rules, &draft);
        assert_eq!(errors.get(ProfileField::DateOfBirth), Some("too young"));
        assert_eq!(errors.len(), 1);
    }
}
