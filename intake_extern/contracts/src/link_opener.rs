use url::Url;

/// Asks the host environment to open a link in a new, independent context.
///
/// Opening is fire-and-forget: `Ok` only means the request was handed to the
/// host, not that anything was delivered.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait LinkOpenerService: Send + Sync + 'static {
    fn open(&self, url: &Url) -> anyhow::Result<()>;
}

#[cfg(feature = "mock")]
impl MockLinkOpenerService {
    pub fn with_open(mut self, url: Url, ok: bool) -> Self {
        self.expect_open()
            .once()
            .with(mockall::predicate::eq(url))
            .return_once(move |_| {
                if ok {
                    Ok(())
                } else {
                    Err(anyhow::anyhow!("popup blocked"))
                }
            });
        self
    }
}
