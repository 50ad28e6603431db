use std::process::{Command, Stdio};

pub trait PowerControl {
    /// Best effort; failures are logged and otherwise ignored
    fn shutdown_machine(&mut self);
}

pub struct SystemPower;

impl PowerControl for SystemPower {
    fn shutdown_machine(&mut self) {
        let (program, args) = shutdown_command();
        tracing::info!("Shutting down machine: {program} {}", args.join(" "));

        if let Err(e) = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            tracing::error!("Shutdown command failed: {e}");
        }
    }
}

#[cfg(windows)]
fn shutdown_command() -> (&'static str, &'static [&'static str]) {
    ("shutdown", &["/s", "/t", "1"])
}

#[cfg(not(windows))]
fn shutdown_command() -> (&'static str, &'static [&'static str]) {
    ("shutdown", &["-h", "now"])
}
