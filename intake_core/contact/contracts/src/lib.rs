use intake_models::contact::{
    ContactField, ContactFieldError, ContactFieldErrors, ContactRequest, RawContactInput,
};
use thiserror::Error;
use url::Url;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validates all five fields of the intake form.
    ///
    /// Every failing field is reported, not just the first one.
    fn validate(&self, input: &RawContactInput) -> Result<ContactRequest, ContactFieldErrors>;

    /// Validates a single field, e.g. while the user is editing it.
    fn validate_field(&self, field: ContactField, value: &str) -> Result<(), ContactFieldError>;

    /// Formats the request as a message, hands the resulting deep link to the
    /// host environment and shows the confirmation notice.
    ///
    /// There is no feedback from the external channel, so this never fails.
    /// If the host could not open the link, the returned handoff says so.
    fn dispatch(&self, request: ContactRequest) -> ContactHandoff;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactHandoff {
    /// The deep link that was handed to the host environment.
    pub url: Url,
    /// Whether the host accepted the request to open `url`.
    pub opened: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactSubmitError {
    #[error("Invalid fields: {0}")]
    InvalidFields(ContactFieldErrors),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_validate(
        mut self,
        input: RawContactInput,
        result: Result<ContactRequest, ContactFieldErrors>,
    ) -> Self {
        self.expect_validate()
            .once()
            .with(mockall::predicate::eq(input))
            .return_once(|_| result);
        self
    }

    pub fn with_validate_field(
        mut self,
        field: ContactField,
        value: String,
        result: Result<(), ContactFieldError>,
    ) -> Self {
        self.expect_validate_field()
            .once()
            .with(
                mockall::predicate::eq(field),
                mockall::predicate::function(move |x: &str| x == value),
            )
            .return_const(result);
        self
    }

    pub fn with_dispatch(mut self, request: ContactRequest, result: ContactHandoff) -> Self {
        self.expect_dispatch()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(|_| result);
        self
    }
}
