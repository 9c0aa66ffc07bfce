//! Opening files in the platform viewer.

use std::io;
use std::path::Path;
use std::process::Command;

/// Something that can show a file to the user.
pub trait FileOpener {
    /// Open `path` and wait for the launcher to return.
    fn open(&mut self, path: &Path) -> io::Result<()>;
}

/// Opens files with the desktop's default application.
///
/// Uses `open` on macOS, `cmd /C start` on Windows and `xdg-open` elsewhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl SystemOpener {
    fn command(path: &Path) -> Command {
        if cfg!(target_os = "macos") {
            let mut command = Command::new("open");
            command.arg(path);
            command
        } else if cfg!(windows) {
            let mut command = Command::new("cmd");
            // The empty argument is the window title `start` expects first.
            command.args(["/C", "start", ""]).arg(path);
            command
        } else {
            let mut command = Command::new("xdg-open");
            command.arg(path);
            command
        }
    }
}

impl FileOpener for SystemOpener {
    fn open(&mut self, path: &Path) -> io::Result<()> {
        let mut command = Self::command(path);
        log::debug!("launching viewer: {command:?}");

        let status = command.status()?;
        if status.success() {
            Ok(())
        } else {
            Err(io::Error::other(format!("viewer exited with {status}")))
        }
    }
}
