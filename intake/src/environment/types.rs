use intake_api_form::IntakeForm;
use intake_core_contact_impl::ContactFeatureServiceImpl;
use intake_extern_impl::{
    link_opener::LinkOpenerServiceImpl, notification::NotificationServiceImpl,
};

// API
pub type Form = IntakeForm<ContactFeature>;

// Extern
pub type LinkOpener = LinkOpenerServiceImpl;
pub type Notification = NotificationServiceImpl;

// Core
pub type ContactFeature = ContactFeatureServiceImpl<LinkOpener, Notification>;
