use std::fs::File;
use std::io::{Result as IoResult, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, OnceLock};
use std::{cell::RefCell, fmt::Display};

static LOG_FILE: OnceLock<Arc<Mutex<File>>> = OnceLock::new();
thread_local! {
    static LOG_PREFIX: RefCell<Option<String>> = const { RefCell::new(None) };
    static CAPTURED: RefCell<Option<Vec<String>>> = const { RefCell::new(None) };
}

fn with_prefix<F, R>(f: F) -> R
where
    F: FnOnce(Option<String>) -> R,
{
    LOG_PREFIX.with(|prefix| f(prefix.borrow().clone()))
}

fn format_with_prefix(message: impl Display) -> String {
    with_prefix(|prefix| prefix.map_or_else(|| message.to_string(), |p| format!("{p}: {message}")))
}

/// Configures a log file that receives every warning emitted while building
/// enumerations.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn set_log_file(path: &Path) -> IoResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    // Ignore error if already set; keep the first writer.
    let _ = LOG_FILE.set(Arc::new(Mutex::new(file)));
    Ok(())
}

/// Sets a thread-local prefix that will be prepended to subsequent log
/// messages. Returns a guard that restores the previous prefix on drop.
pub fn set_log_prefix(prefix: impl Into<String>) -> LogPrefixGuard {
    let prefix = prefix.into();
    let previous = with_prefix(|p| p);
    LOG_PREFIX.with(|slot| {
        *slot.borrow_mut() = Some(prefix);
    });
    LogPrefixGuard { previous }
}

pub struct LogPrefixGuard {
    previous: Option<String>,
}

impl Drop for LogPrefixGuard {
    fn drop(&mut self) {
        let prev = self.previous.take();
        LOG_PREFIX.with(|slot| {
            *slot.borrow_mut() = prev;
        });
    }
}

/// Runs `f` and returns the warnings it emitted on the current thread
/// alongside its result. Warnings still reach stderr and the log file.
pub fn capture_warnings<F, R>(f: F) -> (R, Vec<String>)
where
    F: FnOnce() -> R,
{
    let mut guard = CaptureGuard {
        outer: Some(CAPTURED.with(|slot| slot.borrow_mut().replace(Vec::new()))),
    };
    let result = f();
    let captured = guard.restore();
    (result, captured)
}

/// Puts the enclosing capture buffer back, also when the captured closure unwinds.
struct CaptureGuard {
    outer: Option<Option<Vec<String>>>,
}

impl CaptureGuard {
    fn restore(&mut self) -> Vec<String> {
        let Some(outer) = self.outer.take() else {
            return Vec::new();
        };
        CAPTURED.with(|slot| std::mem::replace(&mut *slot.borrow_mut(), outer).unwrap_or_default())
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

pub fn log_warn(message: &str) {
    let message = format_with_prefix(message);
    eprintln!("warning: {message}");
    CAPTURED.with(|slot| {
        if let Some(captured) = slot.borrow_mut().as_mut() {
            captured.push(message.clone());
        }
    });
    if let Some(writer) = LOG_FILE.get()
        && let Ok(mut file) = writer.lock()
    {
        let _ = writeln!(file, "warning: {message}");
    }
}
