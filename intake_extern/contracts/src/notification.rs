use intake_models::handoff::Notice;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait NotificationService: Send + Sync + 'static {
    /// Displays a transient notice to the user.
    fn notify(&self, notice: &Notice);
}

#[cfg(feature = "mock")]
impl MockNotificationService {
    pub fn with_notify(mut self, notice: Notice) -> Self {
        self.expect_notify()
            .once()
            .with(mockall::predicate::eq(notice))
            .return_const(());
        self
    }
}
