//! Console-printing bus (std only).

use std::io::{self, Write};

use crate::config::units::PortAddress;

use super::bus::PortBus;

/// Render the transcript line for one port write, without newline.
pub fn format_out_line(port: PortAddress, value: u8) -> String {
    format!("OUT Port 0x{:02X} = 0x{:02X}", port.0, value)
}

/// Bus that prints every write and note as a line of text.
#[derive(Debug)]
pub struct ConsoleBus<W: Write> {
    writer: W,
}

/// Writer behind [`ConsoleBus::stdout`].
#[cfg(unix)]
pub type StdoutSink = std::fs::File;

/// Writer behind [`ConsoleBus::stdout`].
#[cfg(not(unix))]
pub type StdoutSink = io::Stdout;

impl ConsoleBus<StdoutSink> {
    /// Bus writing to standard output.
    ///
    /// On unix the bus owns a duplicate of fd 1, so write errors reach the
    /// caller instead of being swallowed by `io::Stdout`.
    ///
    /// # Errors
    ///
    /// Returns an error if standard output is closed.
    #[cfg(unix)]
    pub fn stdout() -> io::Result<Self> {
        use std::os::fd::AsFd;

        let fd = io::stdout().as_fd().try_clone_to_owned()?;
        #[cfg(target_os = "linux")]
        if is_reopened_dev_null(1) {
            return Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "standard output is closed",
            ));
        }
        Ok(Self::new(std::fs::File::from(fd)))
    }

    /// Bus writing to standard output.
    ///
    /// # Errors
    ///
    /// Never fails on this platform.
    #[cfg(not(unix))]
    pub fn stdout() -> io::Result<Self> {
        Ok(Self::new(io::stdout()))
    }
}

/// Whether `fd` is the read-write `/dev/null` the runtime puts in place of
/// a standard stream that was closed at startup.
///
/// Shell redirections to `/dev/null` open it write-only and are not matched.
#[cfg(target_os = "linux")]
fn is_reopened_dev_null(fd: i32) -> bool {
    use std::os::unix::fs::{FileTypeExt, MetadataExt};

    const O_ACCMODE: u32 = 0o3;
    const O_RDWR: u32 = 0o2;

    let target = match std::fs::metadata(format!("/proc/self/fd/{}", fd)) {
        Ok(meta) => meta,
        Err(e) => return e.kind() == io::ErrorKind::NotFound,
    };
    let null = match std::fs::metadata("/dev/null") {
        Ok(meta) => meta,
        Err(_) => return false,
    };
    if !target.file_type().is_char_device() || target.rdev() != null.rdev() {
        return false;
    }

    let info = match std::fs::read_to_string(format!("/proc/self/fdinfo/{}", fd)) {
        Ok(info) => info,
        Err(_) => return false,
    };
    let flags = info
        .lines()
        .find_map(|l| l.strip_prefix("flags:"))
        .and_then(|v| u32::from_str_radix(v.trim(), 8).ok());

    matches!(flags, Some(f) if f & O_ACCMODE == O_RDWR)
}

impl<W: Write> ConsoleBus<W> {
    /// Wrap any writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PortBus for ConsoleBus<W> {
    type Error = io::Error;

    fn out(&mut self, port: PortAddress, value: u8) -> Result<(), Self::Error> {
        writeln!(self.writer, "{}", format_out_line(port, value))?;
        self.writer.flush()
    }

    fn note(&mut self, text: &str) -> Result<(), Self::Error> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()
    }
}
