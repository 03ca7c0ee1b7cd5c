use intake_core_contact_contracts::{
    ContactHandoff, ContactSubmitError, MockContactFeatureService,
};
use intake_demo::{EMPTY_INPUT, HANDOFF_URL, JOHN, JOHN_INPUT};
use intake_models::contact::{ContactField, ContactFieldError, ContactFieldErrors};
use intake_utils::assert_matches;
use pretty_assertions::assert_eq;

use crate::{FormStatus, IntakeForm};

type Sut = IntakeForm<MockContactFeatureService>;

fn fill(sut: &mut Sut, input: &intake_models::contact::RawContactInput) {
    for field in ContactField::ALL {
        sut.set_field(field, input.get(field));
    }
}

fn all_errors() -> ContactFieldErrors {
    [
        (ContactField::Name, ContactFieldError::NameTooShort),
        (ContactField::Email, ContactFieldError::InvalidEmail),
        (ContactField::Phone, ContactFieldError::PhoneTooShort),
        (ContactField::Subject, ContactFieldError::SubjectTooShort),
        (ContactField::Message, ContactFieldError::MessageTooShort),
    ]
    .into_iter()
    .collect()
}

#[test]
fn initial_state() {
    // Act
    let sut = Sut::new(MockContactFeatureService::new());

    // Assert
    assert_eq!(sut.status(), FormStatus::Empty);
    assert_eq!(*sut.input(), *EMPTY_INPUT);
    assert!(sut.errors().is_empty());
}

#[test]
fn editing_before_submit_does_not_validate() {
    // Arrange
    let mut sut = Sut::new(MockContactFeatureService::new());

    // Act
    sut.set_field(ContactField::Email, "not-an-email");

    // Assert
    assert_eq!(sut.status(), FormStatus::Editing);
    assert_eq!(sut.input().email, "not-an-email");
    assert_eq!(sut.error(ContactField::Email), None);
}

#[test]
fn clearing_all_fields_returns_to_empty() {
    // Arrange
    let mut sut = Sut::new(MockContactFeatureService::new());
    sut.set_field(ContactField::Name, "Jo");

    // Act
    sut.set_field(ContactField::Name, "");

    // Assert
    assert_eq!(sut.status(), FormStatus::Empty);
}

#[test]
fn submit_ok() {
    // Arrange
    let handoff = ContactHandoff {
        url: HANDOFF_URL.clone(),
        opened: true,
    };

    let contact = MockContactFeatureService::new()
        .with_validate(JOHN_INPUT.clone(), Ok(JOHN.clone()))
        .with_dispatch(JOHN.clone(), handoff.clone());

    let mut sut = Sut::new(contact);
    fill(&mut sut, &JOHN_INPUT);

    // Act
    let result = sut.submit();

    // Assert
    assert_eq!(result.unwrap(), handoff);
    assert_eq!(sut.status(), FormStatus::Empty);
    assert_eq!(*sut.input(), *EMPTY_INPUT);
    assert!(sut.errors().is_empty());
}

#[test]
fn submit_ok_reset_disables_revalidation() {
    // Arrange
    let contact = MockContactFeatureService::new()
        .with_validate(JOHN_INPUT.clone(), Ok(JOHN.clone()))
        .with_dispatch(
            JOHN.clone(),
            ContactHandoff {
                url: HANDOFF_URL.clone(),
                opened: true,
            },
        );

    let mut sut = Sut::new(contact);
    fill(&mut sut, &JOHN_INPUT);
    sut.submit().unwrap();

    // Act
    // no validate_field expectation: the mock panics if it is called
    sut.set_field(ContactField::Name, "J");

    // Assert
    assert_eq!(sut.error(ContactField::Name), None);
    assert_eq!(sut.status(), FormStatus::Editing);
}

#[test]
fn submit_all_empty_reports_every_field() {
    // Arrange
    let contact =
        MockContactFeatureService::new().with_validate(EMPTY_INPUT.clone(), Err(all_errors()));

    let mut sut = Sut::new(contact);

    // Act
    let result = sut.submit();

    // Assert
    assert_matches!(result, Err(ContactSubmitError::InvalidFields(errors)) if errors == all_errors());
    assert_eq!(*sut.errors(), all_errors());
    assert_eq!(sut.status(), FormStatus::Editing);
}

#[test]
fn submit_invalid_keeps_values() {
    // Arrange
    let mut input = JOHN_INPUT.clone();
    input.email = "not-an-email".into();
    let errors = [(ContactField::Email, ContactFieldError::InvalidEmail)]
        .into_iter()
        .collect::<ContactFieldErrors>();

    let contact = MockContactFeatureService::new().with_validate(input.clone(), Err(errors.clone()));

    let mut sut = Sut::new(contact);
    fill(&mut sut, &input);

    // Act
    let result = sut.submit();

    // Assert
    assert_eq!(result.unwrap_err(), ContactSubmitError::InvalidFields(errors));
    assert_eq!(*sut.input(), input);
    assert_eq!(
        sut.error(ContactField::Email),
        Some(ContactFieldError::InvalidEmail)
    );
    assert_eq!(sut.status(), FormStatus::Editing);
}

#[test]
fn editing_after_failed_submit_revalidates_field() {
    // Arrange
    let mut input = JOHN_INPUT.clone();
    input.email = "not-an-email".into();
    let errors = [(ContactField::Email, ContactFieldError::InvalidEmail)]
        .into_iter()
        .collect::<ContactFieldErrors>();

    let contact = MockContactFeatureService::new()
        .with_validate(input.clone(), Err(errors))
        .with_validate_field(ContactField::Email, "john@".into(), Err(ContactFieldError::InvalidEmail))
        .with_validate_field(ContactField::Email, "john@example.com".into(), Ok(()))
        .with_validate_field(ContactField::Name, "J".into(), Err(ContactFieldError::NameTooShort));

    let mut sut = Sut::new(contact);
    fill(&mut sut, &input);
    sut.submit().unwrap_err();

    // Act
    sut.set_field(ContactField::Email, "john@");
    let still_invalid = sut.error(ContactField::Email);
    sut.set_field(ContactField::Email, "john@example.com");
    let fixed = sut.error(ContactField::Email);
    sut.set_field(ContactField::Name, "J");

    // Assert
    assert_eq!(still_invalid, Some(ContactFieldError::InvalidEmail));
    assert_eq!(fixed, None);
    assert_eq!(
        sut.errors().iter().collect::<Vec<_>>(),
        [(ContactField::Name, ContactFieldError::NameTooShort)]
    );
    assert_eq!(sut.status(), FormStatus::Editing);
}

#[test]
fn resubmit_after_fixing_errors() {
    // Arrange
    let handoff = ContactHandoff {
        url: HANDOFF_URL.clone(),
        opened: false,
    };

    let contact = MockContactFeatureService::new()
        .with_validate(EMPTY_INPUT.clone(), Err(all_errors()))
        .with_validate_field(ContactField::Name, JOHN_INPUT.name.clone(), Ok(()))
        .with_validate_field(ContactField::Email, JOHN_INPUT.email.clone(), Ok(()))
        .with_validate_field(ContactField::Phone, JOHN_INPUT.phone.clone(), Ok(()))
        .with_validate_field(ContactField::Subject, JOHN_INPUT.subject.clone(), Ok(()))
        .with_validate_field(ContactField::Message, JOHN_INPUT.message.clone(), Ok(()))
        .with_validate(JOHN_INPUT.clone(), Ok(JOHN.clone()))
        .with_dispatch(JOHN.clone(), handoff.clone());

    let mut sut = Sut::new(contact);
    sut.submit().unwrap_err();
    fill(&mut sut, &JOHN_INPUT);
    assert!(sut.errors().is_empty());

    // Act
    let result = sut.submit();

    // Assert
    assert_eq!(result.unwrap(), handoff);
    assert_eq!(sut.status(), FormStatus::Empty);
    assert_eq!(*sut.input(), *EMPTY_INPUT);
}

#[test]
fn reset() {
    // Arrange
    let mut sut = Sut::new(MockContactFeatureService::new());
    fill(&mut sut, &JOHN_INPUT);

    // Act
    sut.reset();

    // Assert
    assert_eq!(sut.status(), FormStatus::Empty);
    assert_eq!(*sut.input(), *EMPTY_INPUT);
}
