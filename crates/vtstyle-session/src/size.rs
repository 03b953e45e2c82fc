//! Terminal window-size queries.
//!
//! The OS query sits behind [`SizeQuery`] so the session can be driven by a
//! fake in tests. No implementation caches: every call asks again.

use tracing::debug;

use vtstyle_core::{Dimensions, Error, Result};

/// Capability to read the current terminal size.
pub trait SizeQuery {
    /// Read the current size.
    ///
    /// Fails with [`Error::NoTerminal`] when the target stream is not an
    /// interactive terminal.
    fn query_size(&self) -> Result<Dimensions>;
}

/// Which stream a [`TtySize`] asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TtyTarget {
    Stdout,
    Stderr,
    #[cfg(unix)]
    Fd(std::os::unix::io::RawFd),
}

/// Size query against a real terminal device via the `TIOCGWINSZ` ioctl.
#[derive(Debug, Clone, Copy)]
pub struct TtySize {
    target: TtyTarget,
}

impl TtySize {
    /// Query the terminal attached to standard output.
    pub fn stdout() -> Self {
        Self {
            target: TtyTarget::Stdout,
        }
    }

    /// Query the terminal attached to standard error.
    pub fn stderr() -> Self {
        Self {
            target: TtyTarget::Stderr,
        }
    }

    /// Query the terminal behind an arbitrary file descriptor.
    ///
    /// The descriptor must stay open for as long as this value is queried.
    #[cfg(unix)]
    pub fn for_fd(fd: std::os::unix::io::RawFd) -> Self {
        Self {
            target: TtyTarget::Fd(fd),
        }
    }
}

impl Default for TtySize {
    fn default() -> Self {
        Self::stdout()
    }
}

#[cfg(unix)]
impl SizeQuery for TtySize {
    fn query_size(&self) -> Result<Dimensions> {
        use std::os::unix::io::AsRawFd;

        let fd = match self.target {
            TtyTarget::Stdout => std::io::stdout().as_raw_fd(),
            TtyTarget::Stderr => std::io::stderr().as_raw_fd(),
            TtyTarget::Fd(fd) => fd,
        };

        if unsafe { libc::isatty(fd) } != 1 {
            debug!("fd {} is not a terminal", fd);
            return Err(Error::NoTerminal);
        }

        let mut winsize: libc::winsize = unsafe { std::mem::zeroed() };
        let rc = unsafe { libc::ioctl(fd, libc::TIOCGWINSZ, &mut winsize) };
        if rc == -1 {
            let err = std::io::Error::last_os_error();
            if err.raw_os_error() == Some(libc::ENOTTY) {
                return Err(Error::NoTerminal);
            }
            return Err(err.into());
        }

        // Some pseudo-terminals answer with an unset 0x0 size.
        if winsize.ws_col == 0 || winsize.ws_row == 0 {
            debug!("fd {} reported an empty window size", fd);
            return Err(Error::NoTerminal);
        }

        let dims = Dimensions::new(winsize.ws_col, winsize.ws_row);
        debug!("Terminal size on fd {}: {}", fd, dims);
        Ok(dims)
    }
}

#[cfg(not(unix))]
impl SizeQuery for TtySize {
    fn query_size(&self) -> Result<Dimensions> {
        debug!("Window size query unsupported on this platform ({:?})", self.target);
        Err(Error::NoTerminal)
    }
}

/// Fake that always reports the same size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSize(pub Dimensions);

impl SizeQuery for FixedSize {
    fn query_size(&self) -> Result<Dimensions> {
        Ok(self.0)
    }
}

/// Fake for a non-interactive stream: every query fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTerminalSize;

impl SizeQuery for NoTerminalSize {
    fn query_size(&self) -> Result<Dimensions> {
        Err(Error::NoTerminal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_size() {
        let query = FixedSize(Dimensions::new(132, 43));
        assert_eq!(query.query_size().unwrap(), Dimensions::new(132, 43));
    }

    #[test]
    fn test_no_terminal_size() {
        assert!(matches!(
            NoTerminalSize.query_size(),
            Err(Error::NoTerminal)
        ));
    }

    #[test]
    fn test_tty_size_never_reports_empty() {
        // Under a test harness stdout is usually captured; either way a zero
        // size must never come back as a success.
        match TtySize::stdout().query_size() {
            Ok(dims) => assert!(dims.cols > 0 && dims.rows > 0),
            Err(err) => assert!(matches!(err, Error::NoTerminal | Error::Io(_))),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_tty_size_regular_file_is_no_terminal() {
        use std::os::unix::io::AsRawFd;

        let file = tempfile::tempfile().unwrap();
        let query = TtySize::for_fd(file.as_raw_fd());
        assert!(matches!(query.query_size(), Err(Error::NoTerminal)));
    }

    #[cfg(unix)]
    #[test]
    fn test_tty_size_pipe_is_no_terminal() {
        let mut fds = [0 as libc::c_int; 2];
        assert_eq!(unsafe { libc::pipe(fds.as_mut_ptr()) }, 0);

        let result = TtySize::for_fd(fds[1]).query_size();
        unsafe {
            libc::close(fds[0]);
            libc::close(fds[1]);
        }
        assert!(matches!(result, Err(Error::NoTerminal)));
    }

    #[test]
    fn test_tty_size_default_targets_stdout() {
        assert_eq!(TtySize::default().target, TtyTarget::Stdout);
        assert_eq!(TtySize::stderr().target, TtyTarget::Stderr);
    }
}
