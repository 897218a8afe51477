//! The process-wide default logger and the functions forwarding to it.
//!
//! [`init`] must run before any other function of this module: they panic
//! otherwise. Every forwarding function is `#[track_caller]`, so the lines
//! report the location of their caller, not of this module.

use std::{
    env,
    fmt,
    fs::File,
    io::Write,
    path::{Path, PathBuf},
    process,
    sync::OnceLock,
};

use chrono::Utc;
use tracing::{debug, warn};

use crate::{LogOptions, Logger, LoggerError};

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Initialize the default logger.
///
/// The logger mirrors to stderr and writes to a new file
/// `<log_dir>/<unix seconds>-<executable name>-<pid>.log`. When the file
/// cannot be created the logger still works, without a persisted
/// destination, and the failure is reported as a warning through the logger
/// itself.
///
/// The default logger is created once: later calls log a warning and return
/// the existing instance unchanged.
pub fn init(options: &LogOptions) -> &'static Logger {
    if let Some(logger) = DEFAULT_LOGGER.get() {
        warn!("default logger already initialized");
        logger.warning("default logger already initialized, ignoring the new options");
        return logger;
    }

    // the file is only created by the thread whose logger gets installed
    let mut created = false;
    let mut open_error = None;
    let logger = DEFAULT_LOGGER.get_or_init(|| {
        created = true;
        let (logger, err) = build_default_logger(options);
        open_error = err;
        logger
    });
    if !created {
        logger.warning("default logger already initialized, ignoring the new options");
    }
    if let Some(err) = open_error {
        logger.warningf(format_args!("unable to open default log file: {err}"));
    }
    logger
}

fn build_default_logger(options: &LogOptions) -> (Logger, Option<LoggerError>) {
    let path = options.log_file_path(Utc::now().timestamp(), &executable_name(), process::id());
    let (destinations, open_error) = match create_log_file(&path) {
        Ok(file) => {
            debug!("default log file created at {path:?}");
            (vec![Box::new(file) as Box<dyn Write + Send>], None)
        }
        Err(err) => (Vec::new(), Some(err)),
    };

    let logger = Logger::new(true, options.colorful, options.timestamp, destinations);
    logger.set_verbosity(options.verbosity);
    (logger, open_error)
}

fn create_log_file(path: &Path) -> Result<File, LoggerError> {
    File::create(path).map_err(|e| LoggerError::IOError(format!("{}: {e}", path.display())))
}

/// Base name of the running executable, as invoked.
fn executable_name() -> String {
    env::args_os()
        .next()
        .map(PathBuf::from)
        .or_else(|| env::current_exe().ok())
        .and_then(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "unknown".to_owned())
}

/// The default logger, if [`init`] has run.
#[must_use]
pub fn try_default_logger() -> Option<&'static Logger> {
    DEFAULT_LOGGER.get()
}

/// The default logger.
///
/// # Panics
/// Panics if [`init`] has not been called.
#[must_use]
#[track_caller]
pub fn default_logger() -> &'static Logger {
    match DEFAULT_LOGGER.get() {
        Some(logger) => logger,
        None => panic!("the default logger is used before `init` was called"),
    }
}

#[track_caller]
pub fn info(message: impl fmt::Display) {
    default_logger().info(message);
}

#[track_caller]
pub fn warning(message: impl fmt::Display) {
    default_logger().warning(message);
}

#[track_caller]
pub fn error(message: impl fmt::Display) {
    default_logger().error(message);
}

#[track_caller]
pub fn fatal(message: impl fmt::Display) -> ! {
    default_logger().fatal(message)
}

#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) {
    default_logger().infof(args);
}

#[track_caller]
pub fn warningf(args: fmt::Arguments<'_>) {
    default_logger().warningf(args);
}

#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) {
    default_logger().errorf(args);
}

#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    default_logger().fatalf(args)
}

#[track_caller]
pub fn v_info(v: i32, message: impl fmt::Display) {
    default_logger().v_info(v, message);
}

#[track_caller]
pub fn v_warning(v: i32, message: impl fmt::Display) {
    default_logger().v_warning(v, message);
}

#[track_caller]
pub fn v_error(v: i32, message: impl fmt::Display) {
    default_logger().v_error(v, message);
}

#[track_caller]
pub fn v_infof(v: i32, args: fmt::Arguments<'_>) {
    default_logger().v_infof(v, args);
}

#[track_caller]
pub fn v_warningf(v: i32, args: fmt::Arguments<'_>) {
    default_logger().v_warningf(v, args);
}

#[track_caller]
pub fn v_errorf(v: i32, args: fmt::Arguments<'_>) {
    default_logger().v_errorf(v, args);
}

#[track_caller]
pub fn set_verbosity(v: i32) {
    default_logger().set_verbosity(v);
}

#[track_caller]
pub fn set_default_verbosity(v: i32) {
    default_logger().set_default_verbosity(v);
}
