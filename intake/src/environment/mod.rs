use intake_config::Config;
use intake_core_contact_impl::ContactFeatureConfig;
use intake_di::provider;
use intake_extern_impl::link_opener::LinkOpenerConfig;
use intake_models::handoff::Notice;

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        ..config: ConfigProvider {
            // Extern
            LinkOpenerConfig,

            // Core
            ContactFeatureConfig,
        }
    }
}

impl Provider {
    pub fn new(config: ConfigProvider) -> Self {
        Self {
            _cache: Default::default(),
            config,
        }
    }
}

provider! {
    /// Reduced provider, capable of providing services that only depend on the configuration
    pub ConfigProvider {
        // Extern
        link_opener_config: LinkOpenerConfig,

        // Core
        contact_feature_config: ContactFeatureConfig,
    }
}

impl ConfigProvider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        // Extern
        let link_opener_config = LinkOpenerConfig::new(config.handoff.open_command.as_deref());

        // Core
        let contact_feature_config = ContactFeatureConfig::new(
            &config.handoff.base_url,
            &config.contact.recipient,
            Notice {
                title: config.notice.title.clone(),
                description: config.notice.description.clone(),
            },
        )?;

        Ok(Self {
            _cache: Default::default(),

            // Extern
            link_opener_config,

            // Core
            contact_feature_config,
        })
    }
}
