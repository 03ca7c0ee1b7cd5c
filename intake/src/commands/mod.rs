use std::io::Write;

use intake_core_contact_contracts::ContactHandoff;
use intake_di::Provide;
use intake_models::contact::ContactFieldErrors;

use crate::environment::{types::Form, ConfigProvider, Provider};

pub mod form;
pub mod submit;

fn build_form(config: &intake_config::Config) -> anyhow::Result<Form> {
    let config_provider = ConfigProvider::new(config)?;
    let mut provider = Provider::new(config_provider);
    Ok(provider.provide())
}

/// Writes one line per invalid field, next to the field's label.
fn render_errors(mut output: impl Write, errors: &ContactFieldErrors) -> std::io::Result<()> {
    for (field, error) in errors.iter() {
        writeln!(output, "  {}: {error}", field.label())?;
    }
    Ok(())
}

/// Tells the user where to send the message if the host could not open it.
fn render_handoff(mut output: impl Write, handoff: &ContactHandoff) -> std::io::Result<()> {
    if !handoff.opened {
        writeln!(
            output,
            "Could not open the messaging app. Open this link to send your message:\n{}",
            handoff.url
        )?;
    }
    Ok(())
}
