use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::macros::nutype_string;

pub static HANDOFF_RECIPIENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[0-9]{6,15}$").unwrap());

nutype_string!(HandoffRecipient(validate(regex = HANDOFF_RECIPIENT_REGEX)));

/// A transient message shown to the user by the host environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
}
