use intake_core_contact_contracts::{ContactFeatureService, ContactHandoff, ContactSubmitError};
use intake_di::Build;
use intake_models::contact::{ContactField, ContactFieldError, ContactFieldErrors, RawContactInput};
use intake_utils::trace_instrument;
use tracing::debug;

#[cfg(test)]
mod tests;

/// State of a single intake form.
///
/// The form owns the raw field values and their inline errors. It is reusable
/// indefinitely: every successful submit resets it to the initial state.
#[derive(Debug, Clone, Build)]
pub struct IntakeForm<Contact> {
    contact: Contact,
    #[state]
    state: FormState,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    /// All fields blank, no errors.
    #[default]
    Empty,
    /// At least one field is non-blank or has an error.
    Editing,
    /// The submit handler is running.
    Submitting,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct FormState {
    input: RawContactInput,
    errors: ContactFieldErrors,
    status: FormStatus,
    /// Set by the first submit attempt, edits are revalidated from then on.
    submitted: bool,
}

impl<Contact> IntakeForm<Contact>
where
    Contact: ContactFeatureService,
{
    pub fn new(contact: Contact) -> Self {
        Self {
            contact,
            state: FormState::default(),
        }
    }

    pub fn status(&self) -> FormStatus {
        self.state.status
    }

    pub fn input(&self) -> &RawContactInput {
        &self.state.input
    }

    pub fn errors(&self) -> &ContactFieldErrors {
        &self.state.errors
    }

    pub fn error(&self, field: ContactField) -> Option<ContactFieldError> {
        self.state.errors.get(field)
    }

    /// Updates a single field as the user types.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.state.input.set(field, value);

        if self.state.submitted {
            let value = self.state.input.get(field);
            match self.contact.validate_field(field, value) {
                Ok(()) => {
                    self.state.errors.remove(field);
                }
                Err(error) => self.state.errors.insert(field, error),
            }
        }

        self.state.status = self.idle_status();
    }

    /// Validates all fields and, if they are valid, dispatches the request
    /// and resets the form.
    ///
    /// On invalid input the values are kept and the errors of all failing
    /// fields are stored for inline display.
    #[trace_instrument]
    pub fn submit(&mut self) -> Result<ContactHandoff, ContactSubmitError> {
        self.state.status = FormStatus::Submitting;
        self.state.submitted = true;

        match self.contact.validate(&self.state.input) {
            Ok(request) => {
                let handoff = self.contact.dispatch(request);
                self.reset();
                Ok(handoff)
            }
            Err(errors) => {
                debug!(count = errors.len(), "submit rejected");
                self.state.errors = errors.clone();
                self.state.status = FormStatus::Editing;
                Err(ContactSubmitError::InvalidFields(errors))
            }
        }
    }

    /// Restores the initial, all-empty state.
    pub fn reset(&mut self) {
        self.state = FormState::default();
    }

    fn idle_status(&self) -> FormStatus {
        if self.state.input.is_blank() && self.state.errors.is_empty() {
            FormStatus::Empty
        } else {
            FormStatus::Editing
        }
    }
}
