//! Formatting of the outbound message and of the deep link carrying it.

use intake_models::contact::{ContactField, ContactRequest};
use url::Url;

pub const MESSAGE_HEADER: &str = "*New Contact Request*";

/// Renders `request` as the text block sent through the external channel.
///
/// ```text
/// *New Contact Request*
///
/// *Name:* <name>
/// *Email:* <email>
/// *Phone:* <phone>
/// *Subject:* <subject>
/// *Message:* <message>
/// ```
pub fn format(request: &ContactRequest) -> String {
    let mut body = format!("{MESSAGE_HEADER}\n");
    for field in ContactField::ALL {
        body.push_str(&format!("\n*{}:* {}", field.label(), request.get(field)));
    }
    body
}

/// Appends the percent-encoded `body` as the `text` query parameter.
pub fn handoff_url(base: &Url, body: &str) -> Url {
    let mut url = base.clone();
    url.set_query(Some(&format!("text={}", urlencoding::encode(body))));
    url
}
