use std::process::{Command, Stdio};

use aura_common::PlatformError;
use tracing::{debug, info};

/// Hands `url` to the system browser without waiting for it.
///
/// Returns once the launcher process has been spawned. Whether the page
/// actually loads is never observed.
///
/// - macOS: `open <url>`
/// - Windows: `rundll32 url.dll,FileProtocolHandler <url>`, which never
///   passes the url through the `cmd` parser
/// - Other Unix: `xdg-open <url>`
pub fn open_url(url: &str) -> Result<(), PlatformError> {
    if url.trim().is_empty() {
        return Err(PlatformError::LaunchError("empty url".into()));
    }

    let mut command = launcher_command(url)?;
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| {
            PlatformError::LaunchError(format!("failed to spawn {:?}: {e}", command.get_program()))
        })?;

    // Reap the launcher in the background so it does not linger as a zombie.
    std::thread::spawn(move || {
        if let Ok(status) = child.wait() {
            debug!(%status, "browser launcher exited");
        }
    });

    info!(url, "dispatched url to system browser");
    Ok(())
}

#[cfg(target_os = "macos")]
fn launcher_command(url: &str) -> Result<Command, PlatformError> {
    let mut command = Command::new("open");
    command.arg(url);
    Ok(command)
}

#[cfg(target_os = "windows")]
fn launcher_command(url: &str) -> Result<Command, PlatformError> {
    let mut command = Command::new("rundll32");
    command.arg("url.dll,FileProtocolHandler").arg(url);
    Ok(command)
}

#[cfg(all(unix, not(target_os = "macos")))]
fn launcher_command(url: &str) -> Result<Command, PlatformError> {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    Ok(command)
}

#[cfg(not(any(unix, target_os = "windows")))]
fn launcher_command(_url: &str) -> Result<Command, PlatformError> {
    Err(PlatformError::NotSupported(
        "opening urls on this platform".into(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_url_is_rejected_before_spawning() {
        let err = open_url("   ").unwrap_err();
        assert!(matches!(err, PlatformError::LaunchError(_)));
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    #[test]
    fn linux_uses_xdg_open() {
        let command = launcher_command("https://example.com").unwrap();
        assert_eq!(command.get_program(), "xdg-open");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args, ["https://example.com"]);
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn windows_bypasses_cmd_metacharacters() {
        let url = "https://a.com/?x=1&calc|whoami^";
        let command = launcher_command(url).unwrap();
        assert_eq!(command.get_program(), "rundll32");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args, ["url.dll,FileProtocolHandler", url]);
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn macos_uses_open() {
        let command = launcher_command("https://example.com").unwrap();
        assert_eq!(command.get_program(), "open");
    }
}
