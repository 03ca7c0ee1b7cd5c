use std::sync::LazyLock;

use intake_models::{
    contact::{ContactRequest, RawContactInput},
    handoff::{HandoffRecipient, Notice},
};
use url::Url;

pub static RECIPIENT: LazyLock<HandoffRecipient> =
    LazyLock::new(|| "919876543210".try_into().unwrap());

pub static BASE_URL: LazyLock<Url> = LazyLock::new(|| "https://wa.me".parse().unwrap());

/// [`BASE_URL`] with [`RECIPIENT`] appended.
pub static HANDOFF_URL: LazyLock<Url> =
    LazyLock::new(|| "https://wa.me/919876543210".parse().unwrap());

pub static NOTICE: LazyLock<Notice> = LazyLock::new(|| Notice {
    title: "Opening WhatsApp".into(),
    description: "Redirecting you to send the message".into(),
});

pub static EMPTY_INPUT: LazyLock<RawContactInput> = LazyLock::new(RawContactInput::default);

pub static JOHN_INPUT: LazyLock<RawContactInput> = LazyLock::new(|| RawContactInput {
    name: "John Doe".into(),
    email: "john@example.com".into(),
    phone: "9999999999".into(),
    subject: "Inquiry".into(),
    message: "I would like more information.".into(),
});

pub static JOHN: LazyLock<ContactRequest> = LazyLock::new(|| ContactRequest {
    name: "John Doe".try_into().unwrap(),
    email: "john@example.com".parse().unwrap(),
    phone: "9999999999".try_into().unwrap(),
    subject: "Inquiry".try_into().unwrap(),
    message: "I would like more information.".try_into().unwrap(),
});

pub static JANE_INPUT: LazyLock<RawContactInput> = LazyLock::new(|| RawContactInput {
    name: "Jane Roe".into(),
    email: "jane.roe@example.org".into(),
    phone: "+91 98765 43210".into(),
    subject: "Admission".into(),
    message: "When does the next batch start?".into(),
});

pub static JANE: LazyLock<ContactRequest> = LazyLock::new(|| ContactRequest {
    name: "Jane Roe".try_into().unwrap(),
    email: "jane.roe@example.org".parse().unwrap(),
    phone: "+91 98765 43210".try_into().unwrap(),
    subject: "Admission".try_into().unwrap(),
    message: "When does the next batch start?".try_into().unwrap(),
});
