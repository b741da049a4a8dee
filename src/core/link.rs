//! Opening documentation links outside the app.

use std::io;
use std::process::{Command, Stdio};

use log::{info, warn};
use url::Url;

use crate::directory::FetchError;

/// Something that can show a URL to the user.
pub trait LinkOpener {
    fn open(&self, url: &Url) -> io::Result<()>;
}

/// Hands the URL to the platform's default browser.
pub struct SystemBrowser;

impl SystemBrowser {
    fn command(url: &Url) -> Command {
        #[cfg(target_os = "macos")]
        let mut cmd = Command::new("open");
        #[cfg(target_os = "windows")]
        let mut cmd = {
            let mut c = Command::new("cmd");
            c.args(["/C", "start", ""]);
            c
        };
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        let mut cmd = Command::new("xdg-open");

        cmd.arg(url.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }
}

impl LinkOpener for SystemBrowser {
    fn open(&self, url: &Url) -> io::Result<()> {
        launch_detached(Self::command(url))
    }
}

/// Spawns `cmd` and reaps it on a background thread so no zombie is left.
fn launch_detached(mut cmd: Command) -> io::Result<()> {
    let mut child = cmd.spawn()?;
    std::thread::spawn(move || match child.wait() {
        Ok(status) if !status.success() => warn!("Link opener exited with {}", status),
        Ok(_) => {}
        Err(e) => warn!("Failed to wait for link opener: {}", e),
    });
    Ok(())
}

/// Validates `link` and passes it to `opener`.
///
/// Returns `FetchError::InvalidUrl` for links that do not parse. A launch
/// failure is logged and reported as `Ok(false)` since the link itself is
/// fine.
pub fn open_link(opener: &dyn LinkOpener, link: &str) -> Result<bool, FetchError> {
    let url = Url::parse(link.trim()).map_err(|e| {
        warn!("Rejecting link {:?}: {}", link, e);
        FetchError::InvalidUrl(link.to_string())
    })?;

    match opener.open(&url) {
        Ok(()) => {
            info!("Opened {}", url);
            Ok(true)
        }
        Err(e) => {
            warn!("Failed to launch browser for {}: {}", url, e);
            Ok(false)
        }
    }
}
