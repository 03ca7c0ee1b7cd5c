use std::{
    io::Write,
    process::{Command, Stdio},
    sync::Arc,
};

use anyhow::{bail, Context};
use intake_di::Build;
use intake_extern_contracts::link_opener::LinkOpenerService;
use intake_utils::trace_instrument;
use tracing::debug;
use url::Url;

#[derive(Debug, Clone, Build)]
pub struct LinkOpenerServiceImpl {
    config: LinkOpenerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOpenerConfig {
    /// Write the link to stdout so the user can open it.
    Print,
    /// Spawn `program args... <link>` and do not wait for it to exit.
    Command(Arc<[String]>),
}

impl LinkOpenerConfig {
    pub fn new(open_command: Option<&[String]>) -> Self {
        match open_command {
            Some(command) if !command.is_empty() => Self::Command(command.into()),
            _ => Self::Print,
        }
    }
}

impl LinkOpenerService for LinkOpenerServiceImpl {
    #[trace_instrument(fields(host = url.host_str()), ret(level = "trace"))]
    fn open(&self, url: &Url) -> anyhow::Result<()> {
        match &self.config {
            LinkOpenerConfig::Print => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{url}").context("Failed to print link")?;
                Ok(())
            }
            LinkOpenerConfig::Command(command) => {
                let Some((program, args)) = command.split_first() else {
                    bail!("Open command is empty");
                };

                let mut child = Command::new(program)
                    .args(args)
                    .arg(url.as_str())
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .spawn()
                    .with_context(|| format!("Failed to spawn {program:?}"))?;

                debug!(pid = child.id(), "spawned link opener");
                std::thread::spawn(move || child.wait());

                Ok(())
            }
        }
    }
}
