use std::{collections::BTreeMap, str::FromStr};

use thiserror::Error;

use crate::{email_address::EmailAddress, macros::nutype_string};

/// A contact request whose fields have all passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: ContactName,
    pub email: EmailAddress,
    pub phone: ContactPhone,
    pub subject: ContactSubject,
    pub message: ContactMessageBody,
}

nutype_string!(ContactName(validate(len_char_min = 2)));
nutype_string!(ContactPhone(validate(len_char_min = 10)));
nutype_string!(ContactSubject(validate(len_char_min = 2)));
nutype_string!(ContactMessageBody(validate(len_char_min = 10)));

/// The five fields of the intake form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawContactInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl RawContactInput {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn with(mut self, field: ContactField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Returns `true` if every field is the empty string.
    pub fn is_blank(&self) -> bool {
        ContactField::ALL.iter().all(|&field| self.get(field).is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl ContactField {
    /// All fields in the order they are validated and displayed.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Subject,
        Self::Message,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    /// Human readable label, used in the outbound message and in prompts.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    /// Checks a single raw value against the rule of this field.
    pub fn validate(self, value: &str) -> Result<(), ContactFieldError> {
        match self {
            Self::Name => parse_name(value).map(drop),
            Self::Email => parse_email(value).map(drop),
            Self::Phone => parse_phone(value).map(drop),
            Self::Subject => parse_subject(value).map(drop),
            Self::Message => parse_message(value).map(drop),
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("Unknown contact field: {0:?}")]
pub struct UnknownContactField(pub String);

impl FromStr for ContactField {
    type Err = UnknownContactField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownContactField(s.into()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactFieldError {
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Phone number must be at least 10 digits")]
    PhoneTooShort,
    #[error("Subject is required")]
    SubjectTooShort,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

/// Per-field validation errors, ordered by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFieldErrors(BTreeMap<ContactField, ContactFieldError>);

impl ContactFieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: ContactField) -> Option<ContactFieldError> {
        self.0.get(&field).copied()
    }

    pub fn insert(&mut self, field: ContactField, error: ContactFieldError) {
        self.0.insert(field, error);
    }

    pub fn remove(&mut self, field: ContactField) -> Option<ContactFieldError> {
        self.0.remove(&field)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = ContactField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, ContactFieldError)> + '_ {
        self.0.iter().map(|(&field, &error)| (field, error))
    }
}

impl FromIterator<(ContactField, ContactFieldError)> for ContactFieldErrors {
    fn from_iter<T: IntoIterator<Item = (ContactField, ContactFieldError)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for ContactFieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (field, error)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {error}")?;
        }
        Ok(())
    }
}

impl ContactRequest {
    /// Validates every field of `input` independently.
    ///
    /// Either all five fields are valid and a [`ContactRequest`] is returned,
    /// or the errors of all failing fields are reported together.
    pub fn validate(input: &RawContactInput) -> Result<Self, ContactFieldErrors> {
        let name = parse_name(&input.name);
        let email = parse_email(&input.email);
        let phone = parse_phone(&input.phone);
        let subject = parse_subject(&input.subject);
        let message = parse_message(&input.message);

        match (name, email, phone, subject, message) {
            (Ok(name), Ok(email), Ok(phone), Ok(subject), Ok(message)) => Ok(Self {
                name,
                email,
                phone,
                subject,
                message,
            }),
            (name, email, phone, subject, message) => Err([
                (ContactField::Name, name.err()),
                (ContactField::Email, email.err()),
                (ContactField::Phone, phone.err()),
                (ContactField::Subject, subject.err()),
                (ContactField::Message, message.err()),
            ]
            .into_iter()
            .filter_map(|(field, error)| error.map(|error| (field, error)))
            .collect()),
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => self.email.as_str(),
            ContactField::Phone => &self.phone,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }
}

impl From<ContactRequest> for RawContactInput {
    fn from(value: ContactRequest) -> Self {
        Self {
            name: value.name.into_inner(),
            email: value.email.as_str().into(),
            phone: value.phone.into_inner(),
            subject: value.subject.into_inner(),
            message: value.message.into_inner(),
        }
    }
}

fn parse_name(value: &str) -> Result<ContactName, ContactFieldError> {
    ContactName::try_new(value.to_owned()).map_err(|_| ContactFieldError::NameTooShort)
}

fn parse_email(value: &str) -> Result<EmailAddress, ContactFieldError> {
    value.parse().map_err(|_| ContactFieldError::InvalidEmail)
}

fn parse_phone(value: &str) -> Result<ContactPhone, ContactFieldError> {
    ContactPhone::try_new(value.to_owned()).map_err(|_| ContactFieldError::PhoneTooShort)
}

fn parse_subject(value: &str) -> Result<ContactSubject, ContactFieldError> {
    ContactSubject::try_new(value.to_owned()).map_err(|_| ContactFieldError::SubjectTooShort)
}

fn parse_message(value: &str) -> Result<ContactMessageBody, ContactFieldError> {
    ContactMessageBody::try_new(value.to_owned()).map_err(|_| ContactFieldError::MessageTooShort)
}
