use std::io::Write;

use intake_di::Build;
use intake_extern_contracts::notification::NotificationService;
use intake_models::handoff::Notice;
use tracing::{info, warn};

/// Shows notices on the terminal the host binary runs in.
#[derive(Debug, Clone, Copy, Build)]
pub struct NotificationServiceImpl;

impl NotificationService for NotificationServiceImpl {
    fn notify(&self, notice: &Notice) {
        info!(title = %notice.title, description = %notice.description, "notice");

        if let Err(err) = show(std::io::stderr().lock(), notice) {
            warn!("Failed to display notice: {err}");
        }
    }
}

fn show(mut output: impl Write, notice: &Notice) -> std::io::Result<()> {
    writeln!(output, "{}\n  {}", notice.title, notice.description)
}
