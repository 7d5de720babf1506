use std::fs::{create_dir_all, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::Local;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

lazy_static::lazy_static! {
    static ref LOG_FILE: Mutex<Option<PathBuf>> = Mutex::new(None);
}

/// Install a file-backed `tracing` subscriber.
///
/// Logs go to `<cache dir>/gh-teams/logs/gh-teams-<timestamp>.log` so they never
/// mix with command output. The level comes from `RUST_LOG`, defaulting to `info`.
pub fn init_logging() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("gh-teams")
        .join("logs");

    create_dir_all(&log_dir)?;

    let log_file = log_dir.join(format!("gh-teams-{}.log", Local::now().format("%Y%m%d-%H%M%S")));
    let file = OpenOptions::new().create(true).append(true).open(&log_file)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| e as Box<dyn std::error::Error>)?;

    if let Ok(mut slot) = LOG_FILE.lock() {
        *slot = Some(log_file.clone());
    }

    info!(path = %log_file.display(), "Logging initialized");

    Ok(log_file)
}

pub fn log_panic_info(info: &std::panic::PanicHookInfo<'_>) {
    let mut message = String::from("PANIC: ");

    if let Some(location) = info.location() {
        message.push_str(&format!(
            "at {}:{}:{} - ",
            location.file(),
            location.line(),
            location.column()
        ));
    }

    if let Some(s) = info.payload().downcast_ref::<&str>() {
        message.push_str(s);
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        message.push_str(s);
    } else {
        message.push_str("Unknown panic payload");
    }

    error!("{}", message);

    let backtrace = std::backtrace::Backtrace::capture();
    debug!("Backtrace:\n{}", backtrace);
}

pub fn get_log_file_path() -> Option<PathBuf> {
    LOG_FILE.lock().ok().and_then(|slot| slot.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_records_log_path() {
        // Only the first subscriber in a process can be installed.
        match init_logging() {
            Ok(path) => {
                assert!(path.exists());
                assert_eq!(get_log_file_path(), Some(path.clone()));
                let name = path.file_name().unwrap().to_string_lossy().to_string();
                assert!(name.starts_with("gh-teams-"));
                assert!(name.ends_with(".log"));
            }
            Err(e) => assert!(!e.to_string().is_empty()),
        }
    }

    #[test]
    fn test_log_file_path_unset_until_initialized() {
        if let Some(path) = get_log_file_path() {
            assert!(path.to_string_lossy().contains("gh-teams"));
        }
    }
}
