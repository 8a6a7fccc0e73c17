use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Initialise logging. In debug mode the default level is `debug` and can be
/// overridden via the `RUST_LOG` environment variable; otherwise the level is
/// fixed at `info`.
///
/// When `log_file` is given, output goes to that file (created immediately,
/// no ANSI colors) instead of stdout.
pub fn init(debug: bool, log_file: Option<PathBuf>) {
    let filter = env_filter(debug);

    match log_file {
        Some(path) => {
            let (dir, name) = split_log_path(&path);
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(name.to_string_lossy())
                .build(&dir);
            match appender {
                Ok(appender) => {
                    let _ = tracing_subscriber::fmt()
                        .with_env_filter(filter)
                        .with_ansi(false)
                        .with_writer(appender)
                        .try_init();
                }
                Err(err) => {
                    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
                    tracing::warn!(path = %path.display(), "failed to open log file: {err}");
                }
            }
        }
        None => {
            let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
        }
    }
}

fn env_filter(debug: bool) -> EnvFilter {
    // Without debug logging `info` is forced regardless of `RUST_LOG`.
    if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    }
}

fn split_log_path(path: &Path) -> (PathBuf, PathBuf) {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let name = path
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dashboard.log"));
    (dir, name)
}
