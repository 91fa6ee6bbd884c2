//! Rolling Logger
//!
//! File logging for Tauri apps:
//! - `tracing` events (and `log` records, via the subscriber's log bridge)
//!   go to `<dir>/<app>.log`
//! - the file is archived as `<app>.<timestamp>-<seq>.log` once it reaches
//!   the size cap, keeping only the newest archives
//! - the most recent lines are also kept in memory for diagnostics

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

pub const DEFAULT_MAX_BYTES: u64 = 1024 * 1024;
pub const DEFAULT_MAX_ARCHIVES: usize = 5;
pub const DEFAULT_BUFFER_LINES: usize = 500;

/// Fixed-capacity buffer of the newest log lines
#[derive(Debug)]
pub struct RingBuffer {
    capacity: usize,
    lines: VecDeque<String>,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            lines: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

/// Size-capped log file that archives itself when full
pub struct RollingFile {
    dir: PathBuf,
    prefix: String,
    max_bytes: u64,
    max_archives: usize,
    file: File,
    written: u64,
    seq: u32,
}

impl RollingFile {
    pub fn open(dir: &Path, prefix: &str, max_bytes: u64, max_archives: usize) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.log", prefix));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            dir: dir.to_path_buf(),
            prefix: prefix.to_string(),
            max_bytes,
            max_archives,
            file,
            written,
            seq: 0,
        })
    }

    pub fn current_path(&self) -> PathBuf {
        self.dir.join(format!("{}.log", self.prefix))
    }

    /// Archived files, oldest first
    pub fn archives(&self) -> io::Result<Vec<PathBuf>> {
        let current = format!("{}.log", self.prefix);
        let head = format!("{}.", self.prefix);
        let mut found: Vec<PathBuf> = fs::read_dir(&self.dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .map(|n| n != current && n.starts_with(&head) && n.ends_with(".log"))
                    .unwrap_or(false)
            })
            .collect();
        found.sort();
        Ok(found)
    }

    fn roll(&mut self) -> io::Result<()> {
        self.file.flush()?;
        self.seq = self.seq.wrapping_add(1);
        let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S%.3f");
        let archived = self.dir.join(format!("{}.{}-{:04}.log", self.prefix, stamp, self.seq));
        fs::rename(self.current_path(), archived)?;

        let archives = self.archives()?;
        if archives.len() > self.max_archives {
            for old in &archives[..archives.len() - self.max_archives] {
                let _ = fs::remove_file(old);
            }
        }

        self.file = OpenOptions::new().create(true).append(true).open(self.current_path())?;
        self.written = 0;
        Ok(())
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.roll()?;
        }
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

struct Inner {
    file: RollingFile,
    buffer: RingBuffer,
}

/// Cloneable writer handed to the tracing subscriber
#[derive(Clone)]
pub struct SharedWriter(Arc<Mutex<Inner>>);

impl SharedWriter {
    pub fn new(file: RollingFile, buffer_lines: usize) -> Self {
        Self(Arc::new(Mutex::new(Inner {
            file,
            buffer: RingBuffer::new(buffer_lines),
        })))
    }

    pub fn recent_lines(&self) -> Vec<String> {
        match self.0.lock() {
            Ok(inner) => inner.buffer.lines(),
            Err(_) => Vec::new(),
        }
    }
}

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut inner = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "logger poisoned"))?;
        let n = inner.file.write(buf)?;
        for line in String::from_utf8_lossy(&buf[..n]).lines() {
            if !line.is_empty() {
                inner.buffer.push(line.to_string());
            }
        }
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.0.lock() {
            Ok(mut inner) => inner.file.flush(),
            Err(_) => Ok(()),
        }
    }
}

struct Logger {
    app_name: String,
    writer: Option<SharedWriter>,
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Installs the global logger. Calling it twice is an error.
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), String> {
    if LOGGER.get().is_some() {
        return Err("logger already initialized".to_string());
    }

    #[cfg(target_os = "android")]
    {
        let _ = &log_dir;
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Info)
                .with_tag(app_name),
        );
        LOGGER
            .set(Logger { app_name: app_name.to_string(), writer: None })
            .map_err(|_| "logger already initialized".to_string())?;
        return Ok(());
    }

    #[cfg(not(target_os = "android"))]
    {
        let file = RollingFile::open(&log_dir, app_name, DEFAULT_MAX_BYTES, DEFAULT_MAX_ARCHIVES)
            .map_err(|e| format!("Failed to open log file: {}", e))?;
        let writer = SharedWriter::new(file, DEFAULT_BUFFER_LINES);
        let make_writer = writer.clone();

        tracing_subscriber::fmt()
            .with_writer(move || make_writer.clone())
            .with_ansi(false)
            .with_target(false)
            .with_max_level(tracing::Level::INFO)
            .try_init()
            .map_err(|e| format!("Failed to install subscriber: {}", e))?;

        LOGGER
            .set(Logger { app_name: app_name.to_string(), writer: Some(writer) })
            .map_err(|_| "logger already initialized".to_string())?;
        Ok(())
    }
}

fn app_name() -> Result<&'static str, String> {
    LOGGER
        .get()
        .map(|l| l.app_name.as_str())
        .ok_or_else(|| "logger not initialized".to_string())
}

#[cfg(not(target_os = "android"))]
fn emit(level: log::Level, app: &str, msg: &str) {
    match level {
        log::Level::Error => tracing::error!(app, "{}", msg),
        log::Level::Warn => tracing::warn!(app, "{}", msg),
        _ => tracing::info!(app, "{}", msg),
    }
}

#[cfg(target_os = "android")]
fn emit(level: log::Level, app: &str, msg: &str) {
    log::log!(level, "[{}] {}", app, msg);
}

pub fn info(msg: &str) -> Result<(), String> {
    emit(log::Level::Info, app_name()?, msg);
    Ok(())
}

pub fn warn(msg: &str) -> Result<(), String> {
    emit(log::Level::Warn, app_name()?, msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), String> {
    emit(log::Level::Error, app_name()?, msg);
    Ok(())
}

/// Newest buffered lines, oldest first. Empty where no file writer exists.
pub fn recent_lines() -> Vec<String> {
    LOGGER
        .get()
        .and_then(|l| l.writer.as_ref())
        .map(|w| w.recent_lines())
        .unwrap_or_default()
}
