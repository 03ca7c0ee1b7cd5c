use std::io::{BufRead, Write};

use anyhow::{bail, Context};
use intake_api_form::IntakeForm;
use intake_config::Config;
use intake_core_contact_contracts::{ContactFeatureService, ContactHandoff, ContactSubmitError};
use intake_models::contact::ContactField;

use super::{build_form, render_errors, render_handoff};

pub fn form(config: Config) -> anyhow::Result<()> {
    let mut form = build_form(&config)?;

    let handoff = prompt(&mut form, std::io::stdin().lock(), std::io::stdout().lock())?;

    render_handoff(std::io::stdout().lock(), &handoff)?;

    Ok(())
}

/// Asks for every field, submits, and asks again for the fields that were
/// rejected until the submit succeeds.
///
/// After the first submit every answer is validated right away and the
/// field is asked again while it is invalid.
pub fn prompt<Contact: ContactFeatureService>(
    form: &mut IntakeForm<Contact>,
    mut input: impl BufRead,
    mut output: impl Write,
) -> anyhow::Result<ContactHandoff> {
    let mut pending = ContactField::ALL.to_vec();

    loop {
        for &field in &pending {
            loop {
                write!(output, "{}: ", field.label())?;
                output.flush()?;

                let value = read_line(&mut input)?;
                form.set_field(field, value);

                match form.error(field) {
                    Some(error) => writeln!(output, "  {error}")?,
                    None => break,
                }
            }
        }

        match form.submit() {
            Ok(handoff) => return Ok(handoff),
            Err(ContactSubmitError::InvalidFields(errors)) => {
                writeln!(output, "Please correct the following fields:")?;
                render_errors(&mut output, &errors)?;
                pending = errors.fields().collect();
            }
        }
    }
}

fn read_line(mut input: impl BufRead) -> anyhow::Result<String> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    if read == 0 {
        bail!("Input ended before the form was submitted");
    }

    let line = line
        .strip_suffix('\n')
        .map(|x| x.strip_suffix('\r').unwrap_or(x))
        .unwrap_or(&line);

    Ok(line.into())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use intake_api_form::FormStatus;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::environment::types::Form;

    fn sut() -> Form {
        let mut config = intake_config::load_paths(&[intake_config::DEFAULT_CONFIG_PATH]).unwrap();
        config.handoff.open_command = Some(vec!["/nonexistent/intake-opener".into()]);
        build_form(&config).unwrap()
    }

    #[test]
    fn valid_answers() {
        // Arrange
        let mut form = sut();
        let input = "John Doe\njohn@example.com\n9999999999\nInquiry\nI would like more information.\n";
        let mut output = Vec::new();

        // Act
        let handoff = prompt(&mut form, Cursor::new(input), &mut output).unwrap();

        // Assert
        assert!(!handoff.opened);
        assert!(handoff
            .url
            .as_str()
            .starts_with("https://wa.me/919876543210?text="));
        assert_eq!(form.status(), FormStatus::Empty);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Name: Email: Phone: Subject: Message: "
        );
    }

    #[test]
    fn asks_again_for_invalid_fields() {
        // Arrange
        let mut form = sut();
        let input = "John Doe\nnot-an-email\n12345\nInquiry\nI would like more information.\n\
                     john@\njohn@example.com\n9999999999\n";
        let mut output = Vec::new();

        // Act
        let handoff = prompt(&mut form, Cursor::new(input), &mut output).unwrap();

        // Assert
        assert!(handoff.url.as_str().contains("john%40example.com"));
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Name: Email: Phone: Subject: Message: \
             Please correct the following fields:\n  \
             Email: Invalid email address\n  \
             Phone: Phone number must be at least 10 digits\n\
             Email:   Invalid email address\n\
             Email: Phone: "
        );
    }

    #[test]
    fn windows_line_endings() {
        let mut form = sut();
        let input = "John Doe\r\njohn@example.com\r\n9999999999\r\nInquiry\r\nI would like more information.\r\n";

        let handoff = prompt(&mut form, Cursor::new(input), Vec::new()).unwrap();

        assert!(handoff.url.as_str().contains("John%20Doe%0A"));
    }

    #[test]
    fn input_ends_early() {
        let mut form = sut();

        let err = prompt(&mut form, Cursor::new("John Doe\n"), Vec::new()).unwrap_err();

        assert_eq!(err.to_string(), "Input ended before the form was submitted");
        assert_eq!(form.input().name, "John Doe");
    }
}
