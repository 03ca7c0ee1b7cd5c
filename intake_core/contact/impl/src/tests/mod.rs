use intake_demo::{BASE_URL, NOTICE, RECIPIENT};
use intake_extern_contracts::{
    link_opener::MockLinkOpenerService, notification::MockNotificationService,
};

use crate::{ContactFeatureConfig, ContactFeatureServiceImpl};


type Sut = ContactFeatureServiceImpl<MockLinkOpenerService, MockNotificationService>;

impl Default for Sut {
    fn default() -> Self {
        Self {
            link_opener: MockLinkOpenerService::new(),
            notification: MockNotificationService::new(),
            config: ContactFeatureConfig::new(&BASE_URL, &RECIPIENT, NOTICE.clone()).unwrap(),
        }
    }
}
