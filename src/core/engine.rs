//! Logger engine: ring + worker thread + sink

use super::error::Result;
use super::log_level::LogLevel;
use super::record::Record;
use super::ring::RingQueue;
use super::sink::Sink;
use crate::sinks::FileSink;
use parking_lot::{Condvar, Mutex};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicU8, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Default number of ring slots (rounded up to a power of two).
pub const DEFAULT_RING_CAPACITY: usize = 8192;

/// Default rotation bound in bytes.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Poll interval shared by `sync` and `wait_until_empty`.
const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// `sync` returns once the ring has stayed empty this long.
const SYNC_STABLE_WINDOW: Duration = Duration::from_millis(50);

/// Hard cap on `wait_until_empty`.
const WAIT_EMPTY_TIMEOUT: Duration = Duration::from_millis(500);

/// Sink plus the byte count driving rotation, guarded together by the file
/// mutex.
struct SinkState {
    sink: Box<dyn Sink>,
    written: u64,
}

/// State shared between the engine handle, its producers and the worker.
struct Shared {
    ring: RingQueue<Record>,
    stop: AtomicBool,
    threshold: AtomicU8,
    max_file_size: u64,
    sink: Mutex<SinkState>,
    new_item_mutex: Mutex<()>,
    new_item_cv: Condvar,
    drain_empty_mutex: Mutex<()>,
    drain_empty_cv: Condvar,
    dropped: AtomicU64,
}

impl Shared {
    /// Per-record output path used identically by the worker and by
    /// caller-driven drains: render, rotate if the line would overflow the
    /// bound, write, terminate.
    fn write_record(&self, state: &mut SinkState, record: &Record) {
        let line = record.render();
        let len = line.len() as u64;

        if state.written + len > self.max_file_size {
            match state.sink.reopen_truncated() {
                Ok(()) => state.written = 0,
                Err(e) => eprintln!("[ringlog] rotation failed: {}", e),
            }
        }

        let wrote = state
            .sink
            .write(line.as_bytes())
            .and_then(|()| state.sink.write_newline());
        match wrote {
            Ok(()) => state.written += len,
            Err(e) => eprintln!("[ringlog] sink write failed: {}", e),
        }
    }

    /// Drain everything currently queued through `write_record`, then flush.
    /// Returns whether any record was processed.
    fn drain_to_sink(&self) -> bool {
        let mut processed = false;
        let mut state = self.sink.lock();
        while let Some(record) = self.ring.try_dequeue() {
            self.write_record(&mut state, &record);
            processed = true;
        }
        if let Err(e) = state.sink.flush() {
            eprintln!("[ringlog] sink flush failed: {}", e);
        }
        processed
    }
}

/// One logger instance: its ring, worker thread, sink, severity filter and
/// rotation policy.
///
/// `log` may be called from any thread; a single background worker drains
/// the ring to the sink. Dropping the engine drains outstanding records,
/// stops the worker and closes the sink.
///
/// # Example
///
/// ```no_run
/// use ringlog::{Engine, LogLevel};
///
/// let engine = Engine::new("app.log").unwrap();
/// engine.log(LogLevel::Info, file!(), line!(), "service started".to_string());
/// engine.sync();
/// ```
pub struct Engine {
    path: PathBuf,
    shared: Arc<Shared>,
    worker: Option<thread::JoinHandle<()>>,
}

impl Engine {
    /// Open a file-backed engine at `path` with default capacity, threshold
    /// and rotation bound.
    ///
    /// # Errors
    ///
    /// Returns an error when the sink cannot be opened.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        EngineBuilder::new().build(path)
    }

    /// Create a builder for an engine with non-default settings.
    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    fn spawn(path: PathBuf, sink: Box<dyn Sink>, builder: EngineBuilder) -> Self {
        let shared = Arc::new(Shared {
            ring: RingQueue::with_capacity(builder.capacity),
            stop: AtomicBool::new(false),
            threshold: AtomicU8::new(builder.level as u8),
            max_file_size: builder.max_file_size,
            sink: Mutex::new(SinkState { sink, written: 0 }),
            new_item_mutex: Mutex::new(()),
            new_item_cv: Condvar::new(),
            drain_empty_mutex: Mutex::new(()),
            drain_empty_cv: Condvar::new(),
            dropped: AtomicU64::new(0),
        });

        let worker_shared = Arc::clone(&shared);
        let worker = thread::spawn(move || worker_loop(&worker_shared));

        Self {
            path,
            shared,
            worker: Some(worker),
        }
    }

    /// Path the engine was opened on (the sink target for file-backed
    /// engines, a label otherwise).
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Replace the severity threshold.
    pub fn set_log_level(&self, level: LogLevel) {
        self.shared.threshold.store(level as u8, Ordering::Relaxed);
    }

    /// Current severity threshold.
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.shared.threshold.load(Ordering::Relaxed))
    }

    /// Whether a record at `level` would pass the filter. Call sites use
    /// this to skip payload formatting entirely.
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level as u8 >= self.shared.threshold.load(Ordering::Relaxed)
    }

    /// Enqueue one record.
    ///
    /// Below-threshold records return immediately. A full ring drops the
    /// record silently; the drop is visible only through
    /// [`dropped_count`](Self::dropped_count). Never blocks on the queue.
    pub fn log(
        &self,
        level: LogLevel,
        source_file: &'static str,
        source_line: u32,
        payload: impl Into<String>,
    ) {
        if !self.enabled(level) {
            return;
        }

        let record = Record::new(level, source_file, source_line, payload.into());
        match self.shared.ring.try_enqueue(record) {
            Ok(()) => {
                let _guard = self.shared.new_item_mutex.lock();
                self.shared.new_item_cv.notify_one();
            }
            Err(_) => {
                self.shared.dropped.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    /// Drain queued records on the calling thread until the ring has been
    /// empty for a 50 ms stability window, flushing the sink along the way.
    ///
    /// Runs the same per-record path as the worker, so records racing in
    /// from other producers are still written exactly once.
    pub fn sync(&self) {
        let mut stable_since = Instant::now();
        loop {
            if self.shared.drain_to_sink() {
                stable_since = Instant::now();
            } else if stable_since.elapsed() >= SYNC_STABLE_WINDOW {
                break;
            }
            thread::sleep(POLL_INTERVAL);
        }

        let _guard = self.shared.drain_empty_mutex.lock();
        self.shared.drain_empty_cv.notify_all();
    }

    /// Poll until the ring is observed empty, up to a 500 ms timeout.
    /// Returns whether emptiness was observed.
    pub fn wait_until_empty(&self) -> bool {
        let start = Instant::now();
        while !self.shared.ring.is_empty() {
            if start.elapsed() > WAIT_EMPTY_TIMEOUT {
                return false;
            }
            thread::sleep(POLL_INTERVAL);
        }
        true
    }

    /// Best-effort count of records currently queued.
    pub fn pending(&self) -> usize {
        self.shared.ring.len()
    }

    /// Number of records dropped because the ring was full.
    pub fn dropped_count(&self) -> u64 {
        self.shared.dropped.load(Ordering::Relaxed)
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        // Shutdown protocol: best-effort drain, stop flag, wake the worker,
        // join, final flush. The sink closes when Shared is released.
        self.sync();

        self.shared.stop.store(true, Ordering::Release);
        {
            let _guard = self.shared.new_item_mutex.lock();
            self.shared.new_item_cv.notify_all();
        }

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                eprintln!("[ringlog] worker thread panicked during shutdown");
            }
        }

        let mut state = self.shared.sink.lock();
        if let Err(e) = state.sink.flush() {
            eprintln!("[ringlog] flush during shutdown failed: {}", e);
        }
    }
}

/// Background consumer: sleep on the condition variable, wake on new items
/// or stop, pull everything currently queued into a local batch, then write
/// the batch outside the wait lock.
fn worker_loop(shared: &Shared) {
    loop {
        {
            let mut guard = shared.new_item_mutex.lock();
            while shared.ring.is_empty() && !shared.stop.load(Ordering::Acquire) {
                shared.new_item_cv.wait(&mut guard);
            }
        }
        let stopping = shared.stop.load(Ordering::Acquire);

        let mut batch = Vec::with_capacity(shared.ring.len());
        while let Some(record) = shared.ring.try_dequeue() {
            batch.push(record);
        }
        if !batch.is_empty() {
            let mut state = shared.sink.lock();
            for record in &batch {
                shared.write_record(&mut state, record);
            }
            if let Err(e) = state.sink.flush() {
                eprintln!("[ringlog] sink flush failed: {}", e);
            }
        }

        // One final drain happens naturally: the loop only exits once the
        // stop flag is set and the ring has been emptied.
        if stopping && shared.ring.is_empty() {
            break;
        }
    }
}

/// Builder for engines with non-default ring capacity, threshold, rotation
/// bound, or a caller-provided sink.
///
/// # Example
///
/// ```no_run
/// use ringlog::{Engine, LogLevel};
///
/// let engine = Engine::builder()
///     .capacity(1024)
///     .level(LogLevel::Warn)
///     .max_file_size(1024 * 1024)
///     .build("app.log")
///     .unwrap();
/// ```
pub struct EngineBuilder {
    capacity: usize,
    max_file_size: u64,
    level: LogLevel,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_RING_CAPACITY,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            level: LogLevel::Debug,
        }
    }

    /// Requested ring capacity; rounded up to the next power of two.
    #[must_use = "builder methods return a new value"]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Rotation bound in bytes.
    #[must_use = "builder methods return a new value"]
    pub fn max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// Initial severity threshold.
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Open a file sink at `path` and spawn the engine.
    ///
    /// # Errors
    ///
    /// Returns an error when the sink cannot be opened.
    pub fn build(self, path: impl Into<PathBuf>) -> Result<Engine> {
        let path = path.into();
        let sink = FileSink::append(&path)?;
        Ok(Engine::spawn(path, Box::new(sink), self))
    }

    /// Spawn the engine on a caller-provided sink. `name` labels the engine
    /// where a file path would otherwise appear.
    pub fn build_with_sink(self, name: impl Into<PathBuf>, sink: Box<dyn Sink>) -> Engine {
        Engine::spawn(name.into(), sink, self)
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
