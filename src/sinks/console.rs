//! Console sink implementation

use crate::core::error::Result;
use crate::core::sink::Sink;

/// Sink writing straight to the process's standard output descriptor.
///
/// There is no user-space buffer, so `flush` has nothing to do.
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(unix)]
fn write_stdout(bytes: &[u8]) -> Result<()> {
    let mut written = 0;
    while written < bytes.len() {
        let remaining = &bytes[written..];
        let ret = unsafe {
            libc::write(
                libc::STDOUT_FILENO,
                remaining.as_ptr().cast(),
                remaining.len(),
            )
        };
        if ret < 0 {
            let err = std::io::Error::last_os_error();
            if err.kind() == std::io::ErrorKind::Interrupted {
                continue;
            }
            return Err(err.into());
        }
        written += ret as usize;
    }
    Ok(())
}

#[cfg(not(unix))]
fn write_stdout(bytes: &[u8]) -> Result<()> {
    use std::io::Write;
    let mut out = std::io::stdout().lock();
    out.write_all(bytes)?;
    out.flush()?;
    Ok(())
}

impl Sink for ConsoleSink {
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        write_stdout(bytes)
    }

    fn write_newline(&mut self) -> Result<()> {
        write_stdout(b"\n")
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
