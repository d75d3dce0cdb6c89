use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the seven keys of a [`ProfileDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ProfileField {
    #[default]
    LastName,
    FirstName,
    Email,
    Address,
    Phone,
    DateOfBirth,
    JobTitle,
}

impl ProfileField {
    /// All fields in display order.
    pub const ALL: [ProfileField; 7] = [
        ProfileField::LastName,
        ProfileField::FirstName,
        ProfileField::Email,
        ProfileField::Address,
        ProfileField::Phone,
        ProfileField::DateOfBirth,
        ProfileField::JobTitle,
    ];

    /// Internal key name (`lastName`, `firstName`, ...).
    pub fn key(self) -> &'static str {
        match self {
            ProfileField::LastName => "lastName",
            ProfileField::FirstName => "firstName",
            ProfileField::Email => "email",
            ProfileField::Address => "address",
            ProfileField::Phone => "phone",
            ProfileField::DateOfBirth => "dateOfBirth",
            ProfileField::JobTitle => "jobTitle",
        }
    }

    /// Key used in the request body sent to the profile API.
    pub fn wire_name(self) -> &'static str {
        match self {
            ProfileField::LastName => "nom",
            ProfileField::FirstName => "prenom",
            ProfileField::Email => "email",
            ProfileField::Address => "address",
            ProfileField::Phone => "telephone",
            ProfileField::DateOfBirth => "dateOfBirth",
            ProfileField::JobTitle => "jobTitle",
        }
    }

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            ProfileField::LastName => "Nom",
            ProfileField::FirstName => "Prénom",
            ProfileField::Email => "Email",
            ProfileField::Address => "Adresse",
            ProfileField::Phone => "Téléphone",
            ProfileField::DateOfBirth => "Date de Naissance",
            ProfileField::JobTitle => "Titre du poste",
        }
    }

    pub fn input_kind(self) -> InputKind {
        match self {
            ProfileField::Email => InputKind::Email,
            ProfileField::Phone => InputKind::Phone,
            ProfileField::DateOfBirth => InputKind::Date,
            _ => InputKind::Text,
        }
    }

    /// Position in [`ProfileField::ALL`].
    pub fn index(self) -> usize {
        match self {
            ProfileField::LastName => 0,
            ProfileField::FirstName => 1,
            ProfileField::Email => 2,
            ProfileField::Address => 3,
            ProfileField::Phone => 4,
            ProfileField::DateOfBirth => 5,
            ProfileField::JobTitle => 6,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// How an input edits its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Date,
    Phone,
}

/// In-memory record of every form value before submission.
///
/// All seven keys always exist. The empty draft (`Default`) is the at-rest
/// state on startup and after a successful submission. Serializes to the
/// request body expected by the profile API.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfileDraft {
    #[serde(rename = "nom")]
    pub last_name: String,
    #[serde(rename = "prenom")]
    pub first_name: String,
    pub email: String,
    pub address: String,
    #[serde(rename = "telephone")]
    pub phone: String,
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: String,
    #[serde(rename = "jobTitle")]
    pub job_title: String,
}

impl ProfileDraft {
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::LastName => &self.last_name,
            ProfileField::FirstName => &self.first_name,
            ProfileField::Email => &self.email,
            ProfileField::Address => &self.address,
            ProfileField::Phone => &self.phone,
            ProfileField::DateOfBirth => &self.date_of_birth,
            ProfileField::JobTitle => &self.job_title,
        }
    }

    fn slot_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::LastName => &mut self.last_name,
            ProfileField::FirstName => &mut self.first_name,
            ProfileField::Email => &mut self.email,
            ProfileField::Address => &mut self.address,
            ProfileField::Phone => &mut self.phone,
            ProfileField::DateOfBirth => &mut self.date_of_birth,
            ProfileField::JobTitle => &mut self.job_title,
        }
    }

    /// Replaces exactly one value. No validation happens here.
    pub fn update(mut self, field: ProfileField, value: impl Into<String>) -> Self {
        *self.slot_mut(field) = value.into();
        self
    }

    /// True when every value is the empty string.
    pub fn is_blank(&self) -> bool {
        ProfileField::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}
