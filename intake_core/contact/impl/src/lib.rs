use std::sync::Arc;

use anyhow::{anyhow, ensure};
use intake_core_contact_contracts::{ContactFeatureService, ContactHandoff};
use intake_di::Build;
use intake_extern_contracts::{link_opener::LinkOpenerService, notification::NotificationService};
use intake_models::{
    contact::{
        ContactField, ContactFieldError, ContactFieldErrors, ContactRequest, RawContactInput,
    },
    handoff::{HandoffRecipient, Notice},
};
use intake_utils::trace_instrument;
use tracing::{debug, info, warn};
use url::Url;

pub mod message;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Build)]
pub struct ContactFeatureServiceImpl<LinkOpener, Notification> {
    link_opener: LinkOpener,
    notification: Notification,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// Base url of the external channel with the recipient already appended.
    pub handoff_url: Arc<Url>,
    pub notice: Arc<Notice>,
}

impl ContactFeatureConfig {
    pub fn new(
        base_url: &Url,
        recipient: &HandoffRecipient,
        notice: Notice,
    ) -> anyhow::Result<Self> {
        ensure!(
            matches!(base_url.scheme(), "http" | "https"),
            "Handoff base url must use http or https, got {base_url}"
        );

        let mut handoff_url = base_url.clone();
        handoff_url
            .path_segments_mut()
            .map_err(|()| anyhow!("Handoff base url cannot have path segments: {base_url}"))?
            .pop_if_empty()
            .push(recipient);
        handoff_url.set_query(None);
        handoff_url.set_fragment(None);

        Ok(Self {
            handoff_url: handoff_url.into(),
            notice: notice.into(),
        })
    }
}

impl<LinkOpener, Notification> ContactFeatureService
    for ContactFeatureServiceImpl<LinkOpener, Notification>
where
    LinkOpener: LinkOpenerService,
    Notification: NotificationService,
{
    #[trace_instrument]
    fn validate(&self, input: &RawContactInput) -> Result<ContactRequest, ContactFieldErrors> {
        ContactRequest::validate(input).inspect_err(|errors| {
            debug!(
                fields = ?errors.fields().collect::<Vec<_>>(),
                "contact request is invalid"
            )
        })
    }

    #[trace_instrument(fields(field = %field), ret(level = "trace"))]
    fn validate_field(&self, field: ContactField, value: &str) -> Result<(), ContactFieldError> {
        field.validate(value)
    }

    #[trace_instrument]
    fn dispatch(&self, request: ContactRequest) -> ContactHandoff {
        let body = message::format(&request);
        let url = message::handoff_url(&self.config.handoff_url, &body);

        let opened = self
            .link_opener
            .open(&url)
            .inspect_err(|err| warn!("Failed to open handoff link: {err:#}"))
            .is_ok();

        self.notification.notify(&self.config.notice);

        info!(opened, "dispatched contact request");

        ContactHandoff { url, opened }
    }
}
