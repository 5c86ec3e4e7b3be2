//! Trace output: a size-capped file on native builds, the browser console on
//! web builds.

#[cfg(feature = "native")]
use std::fs::{self, File, OpenOptions};
#[cfg(feature = "native")]
use std::io::{Read, Seek, SeekFrom, Write};
#[cfg(feature = "native")]
use std::path::Path;
#[cfg(feature = "native")]
use std::sync::{Arc, Mutex};

#[cfg(feature = "native")]
use tracing_subscriber::fmt::MakeWriter;
#[cfg(feature = "native")]
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log file size that triggers trimming (5 MiB)
#[cfg(feature = "native")]
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
/// Tail kept after trimming (1 MiB)
#[cfg(feature = "native")]
const KEEP_SIZE: u64 = 1024 * 1024;

#[cfg(feature = "native")]
const LOG_FILE: &str = "acedeck.log";

/// Trim `log_path` to its most recent `keep` bytes once it grows past `max`.
/// The cut is moved forward to a line boundary. Returns whether it trimmed.
#[cfg(feature = "native")]
fn trim_log(log_path: &Path, max: u64, keep: u64) -> std::io::Result<bool> {
    let len = match fs::metadata(log_path) {
        Ok(meta) => meta.len(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if len <= max {
        return Ok(false);
    }

    let mut tail = Vec::with_capacity(keep as usize);
    {
        let mut file = File::open(log_path)?;
        file.seek(SeekFrom::Start(len.saturating_sub(keep)))?;
        file.read_to_end(&mut tail)?;
    }
    let start = tail
        .iter()
        .position(|&b| b == b'\n')
        .map_or(0, |newline| newline + 1);

    let mut file = File::create(log_path)?;
    writeln!(file, "--- earlier entries trimmed ---")?;
    file.write_all(&tail[start..])?;
    Ok(true)
}

/// Cloneable handle on the open log file, one writer per event.
#[cfg(feature = "native")]
#[derive(Clone)]
struct SharedFile(Arc<Mutex<File>>);

#[cfg(feature = "native")]
impl Write for SharedFile {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self.0.lock() {
            Ok(mut file) => file.write(buf),
            // a panicked writer leaves the file usable
            Err(poisoned) => poisoned.into_inner().write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self.0.lock() {
            Ok(mut file) => file.flush(),
            Err(poisoned) => poisoned.into_inner().flush(),
        }
    }
}

#[cfg(feature = "native")]
impl<'a> MakeWriter<'a> for SharedFile {
    type Writer = SharedFile;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Initialize logging to `{data_dir}/acedeck.log`.
///
/// The level applies to this crate; the core crate logs warnings only.
/// `RUST_LOG` replaces the whole filter when set.
#[cfg(feature = "native")]
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(data_dir)?;
    let log_path = data_dir.join(LOG_FILE);

    if let Err(e) = trim_log(&log_path, MAX_LOG_SIZE, KEEP_SIZE) {
        eprintln!("Warning: Failed to trim log file: {}", e);
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let default_filter = format!("acedeck={level},acedeck_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(SharedFile(Arc::new(Mutex::new(file))))
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::info!(log_path = %log_path.display(), "acedeck logging initialized");
    Ok(())
}

/// Route tracing output to the browser console.
#[cfg(feature = "web")]
pub fn init_logging_web() {
    tracing_wasm::set_as_global_default();
}
