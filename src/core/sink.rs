//! Sink trait for log output destinations

use super::error::Result;

/// Byte sink the engine's worker writes rendered records to.
///
/// A sink is owned exclusively by its engine; all calls are serialised by
/// the engine's file mutex.
pub trait Sink: Send {
    /// Append the given bytes.
    fn write(&mut self, bytes: &[u8]) -> Result<()>;

    /// Emit a single record terminator (`\n`).
    fn write_newline(&mut self) -> Result<()>;

    /// Push any user-space buffer down to the OS.
    fn flush(&mut self) -> Result<()>;

    /// Replace the underlying destination with a fresh, truncated one.
    ///
    /// Rotation primitive. Sinks without a backing file treat this as a
    /// no-op.
    fn reopen_truncated(&mut self) -> Result<()> {
        Ok(())
    }
}
