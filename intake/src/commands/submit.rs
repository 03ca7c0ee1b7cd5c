use std::io::Write;

use anyhow::bail;
use clap::Args;
use intake_api_form::IntakeForm;
use intake_config::Config;
use intake_core_contact_contracts::{ContactFeatureService, ContactHandoff, ContactSubmitError};
use intake_models::contact::ContactField;
use tracing::info;

use super::{build_form, render_errors, render_handoff};

#[derive(Debug, Default, Args)]
pub struct SubmitCommand {
    /// Full name of the sender
    #[arg(long, default_value = "")]
    pub name: String,
    /// Email address of the sender
    #[arg(long, default_value = "")]
    pub email: String,
    /// Phone number of the sender
    #[arg(long, default_value = "")]
    pub phone: String,
    /// Subject of the message
    #[arg(long, default_value = "")]
    pub subject: String,
    /// The message itself
    #[arg(long, default_value = "")]
    pub message: String,
}

impl SubmitCommand {
    pub fn invoke(self, config: Config) -> anyhow::Result<()> {
        let mut form = build_form(&config)?;

        self.run(
            &mut form,
            std::io::stdout().lock(),
            std::io::stderr().lock(),
        )?;

        Ok(())
    }

    /// Fills `form` with the arguments and submits it once.
    ///
    /// Field errors go to `stderr`, the fallback link to `stdout`.
    pub fn run<Contact: ContactFeatureService>(
        self,
        form: &mut IntakeForm<Contact>,
        stdout: impl Write,
        stderr: impl Write,
    ) -> anyhow::Result<ContactHandoff> {
        for (field, value) in [
            (ContactField::Name, self.name),
            (ContactField::Email, self.email),
            (ContactField::Phone, self.phone),
            (ContactField::Subject, self.subject),
            (ContactField::Message, self.message),
        ] {
            form.set_field(field, value);
        }

        match form.submit() {
            Ok(handoff) => {
                info!(opened = handoff.opened, "handed off contact request");
                render_handoff(stdout, &handoff)?;
                Ok(handoff)
            }
            Err(ContactSubmitError::InvalidFields(errors)) => {
                render_errors(stderr, &errors)?;
                bail!("Contact request is invalid");
            }
        }
    }
}
