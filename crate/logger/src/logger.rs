use std::{
    fmt,
    io::{self, Write},
    process,
    sync::{Mutex, MutexGuard, PoisonError},
    thread,
    time::Duration,
};

use chrono::Local;

use crate::{
    call_site::{self, CallSite},
    level::{Level, RESET_COLOR},
    writer::FanOutWriter,
};

/// Time given to a fatal log line to reach its destinations before the
/// watchdog aborts the process.
pub const FATAL_FLUSH_TIMEOUT: Duration = Duration::from_millis(500);

/// Exit status of a process terminated by a fatal log.
pub const FATAL_EXIT_CODE: i32 = 2;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.9f %z";

struct State {
    /// Number of lines emitted so far, per level.
    counts: [u64; Level::COUNT],

    /// Calls logged at a verbosity greater than this one are dropped.
    verbosity: i32,

    /// Verbosity used by the calls that do not provide one.
    default_verbosity: i32,

    /// Mirror of the lines when `log_to_stderr` is set; stderr unless replaced.
    console: Box<dyn Write + Send>,

    /// The persisted destinations. Never colorful.
    destination: FanOutWriter,
}

/// A leveled logger.
///
/// Every emitted line carries a per-level sequence number, the caller's
/// `file:line` and, optionally, a timestamp:
///
/// ```text
/// [2024-05-02 10:12:03.123456789 +0200 ][I0004] main.rs:42: message
/// ```
///
/// All the methods may be called concurrently: gating, formatting, writing
/// and counting happen under a single lock so that lines never interleave.
pub struct Logger {
    state: Mutex<State>,

    /// Mirror every line to stderr.
    log_to_stderr: bool,

    /// Color the stderr mirror. Persisted lines are never colored.
    colorful: bool,

    /// Prepend a timestamp to every line.
    timestamp: bool,
}

impl Logger {
    /// Create a logger writing every line to all of `destinations`, and to
    /// stderr when `log_to_stderr` is set.
    #[must_use]
    pub fn new(
        log_to_stderr: bool,
        colorful: bool,
        timestamp: bool,
        destinations: Vec<Box<dyn Write + Send>>,
    ) -> Self {
        Self {
            state: Mutex::new(State {
                counts: [0; Level::COUNT],
                verbosity: 0,
                default_verbosity: 0,
                console: Box::new(io::stderr()),
                destination: FanOutWriter::new(destinations),
            }),
            log_to_stderr,
            colorful,
            timestamp,
        }
    }

    /// Replace the stream used as the stderr mirror.
    #[must_use]
    pub fn with_console(self, console: Box<dyn Write + Send>) -> Self {
        {
            let mut state = self.lock();
            state.console = console;
        }
        self
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // nothing panics while the lock is held: the state is always consistent
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Set the output verbosity. Calls logged at a verbosity greater than `v`
    /// are dropped from now on.
    pub fn set_verbosity(&self, v: i32) {
        self.lock().verbosity = v;
    }

    /// Set the verbosity of the calls that do not provide one explicitly
    /// (`info`, `warning`, `error` and their `f` forms).
    pub fn set_default_verbosity(&self, v: i32) {
        self.lock().default_verbosity = v;
    }

    #[must_use]
    pub fn verbosity(&self) -> i32 {
        self.lock().verbosity
    }

    #[must_use]
    pub fn default_verbosity(&self) -> i32 {
        self.lock().default_verbosity
    }

    /// Number of lines emitted at `level` since the logger was created.
    #[must_use]
    pub fn count(&self, level: Level) -> u64 {
        self.lock().counts[level.index()]
    }

    /// Log `message` at `level` as if called from `call_site`.
    ///
    /// This is the entry point of bridges that know the location of the
    /// event better than `#[track_caller]` does. `None` is reported as
    /// `unknown file:0`. A `Level::Fatal` message terminates the process.
    pub fn log_at(
        &self,
        level: Level,
        verbosity: i32,
        call_site: Option<CallSite<'_>>,
        message: &dyn fmt::Display,
    ) {
        if level == Level::Fatal {
            self.terminate(call_site, message);
        }
        self.emit(level, verbosity, call_site, message);
    }

    #[track_caller]
    fn log(&self, level: Level, verbosity: Option<i32>, message: &dyn fmt::Display) {
        let call_site = CallSite::caller();
        let mut state = self.lock();
        let verbosity = verbosity.unwrap_or(state.default_verbosity);
        self.write_locked(&mut state, level, verbosity, Some(call_site), message);
    }

    fn emit(
        &self,
        level: Level,
        verbosity: i32,
        call_site: Option<CallSite<'_>>,
        message: &dyn fmt::Display,
    ) {
        let mut state = self.lock();
        self.write_locked(&mut state, level, verbosity, call_site, message);
    }

    fn write_locked(
        &self,
        state: &mut State,
        level: Level,
        verbosity: i32,
        call_site: Option<CallSite<'_>>,
        message: &dyn fmt::Display,
    ) {
        if verbosity > state.verbosity {
            return;
        }
        let line = self.format_line(level, state.counts[level.index()], call_site, message);
        self.mirror(state, level, &line);
        // best effort: a failing destination must not fail the caller
        let _ = state.destination.write_line(&line);
        state.counts[level.index()] += 1;
    }

    fn format_line(
        &self,
        level: Level,
        count: u64,
        call_site: Option<CallSite<'_>>,
        message: &dyn fmt::Display,
    ) -> String {
        let (file, line) = call_site::resolve(call_site);
        let mut prefix = if level == Level::Fatal {
            format!("[{}]", level.tag())
        } else {
            format!("[{}{count:04}]", level.tag())
        };
        if self.timestamp {
            prefix = format!("{} {prefix}", Local::now().format(TIMESTAMP_FORMAT));
        }
        format!("{prefix} {file}:{line}: {message}")
    }

    fn mirror(&self, state: &mut State, level: Level, line: &str) {
        if !self.log_to_stderr {
            return;
        }
        let mirrored = if self.colorful {
            format!("{}{line}{RESET_COLOR}\n", level.color())
        } else {
            format!("{line}\n")
        };
        let _ = state.console.write_all(mirrored.as_bytes());
    }

    /// Write a fatal line and terminate the process.
    ///
    /// A watchdog aborts the process if the persisted destinations do not
    /// accept the line within [`FATAL_FLUSH_TIMEOUT`].
    fn terminate(&self, call_site: Option<CallSite<'_>>, message: &dyn fmt::Display) -> ! {
        let mut state = self.lock();
        let line = self.format_line(Level::Fatal, 0, call_site, message);
        self.mirror(&mut state, Level::Fatal, &line);

        let watchdog_line = line.clone();
        let watchdog = thread::Builder::new()
            .name("fatal-log-watchdog".to_owned())
            .spawn(move || {
                thread::sleep(FATAL_FLUSH_TIMEOUT);
                eprintln!(
                    "timeout waiting for fatal log to write to disk. Log message follows:\n\
                     {watchdog_line}"
                );
                process::abort();
            });
        if let Err(err) = watchdog {
            report_missing_watchdog(state.console.as_mut(), &err);
        }

        let _ = state.destination.write_line(&line);
        let _ = state.console.flush();
        process::exit(FATAL_EXIT_CODE)
    }

    #[track_caller]
    fn fatal_here(&self, message: &dyn fmt::Display) -> ! {
        self.terminate(Some(CallSite::caller()), message)
    }

    /// Log `message` at the info level and the default verbosity.
    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.log(Level::Info, None, &message);
    }

    /// Log a formatted message at the info level and the default verbosity.
    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, None, &args);
    }

    #[track_caller]
    pub fn warning(&self, message: impl fmt::Display) {
        self.log(Level::Warning, None, &message);
    }

    #[track_caller]
    pub fn warningf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warning, None, &args);
    }

    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.log(Level::Error, None, &message);
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, None, &args);
    }

    /// Log `message` at the fatal level, whatever the verbosity, then
    /// terminate the process with [`FATAL_EXIT_CODE`].
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        self.fatal_here(&message)
    }

    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.fatal_here(&args)
    }

    /// Log `message` at the info level if `v` does not exceed the verbosity.
    #[track_caller]
    pub fn v_info(&self, v: i32, message: impl fmt::Display) {
        self.log(Level::Info, Some(v), &message);
    }

    #[track_caller]
    pub fn v_infof(&self, v: i32, args: fmt::Arguments<'_>) {
        self.log(Level::Info, Some(v), &args);
    }

    #[track_caller]
    pub fn v_warning(&self, v: i32, message: impl fmt::Display) {
        self.log(Level::Warning, Some(v), &message);
    }

    #[track_caller]
    pub fn v_warningf(&self, v: i32, args: fmt::Arguments<'_>) {
        self.log(Level::Warning, Some(v), &args);
    }

    #[track_caller]
    pub fn v_error(&self, v: i32, message: impl fmt::Display) {
        self.log(Level::Error, Some(v), &message);
    }

    #[track_caller]
    pub fn v_errorf(&self, v: i32, args: fmt::Arguments<'_>) {
        self.log(Level::Error, Some(v), &args);
    }
}

fn report_missing_watchdog(console: &mut (dyn Write + Send), err: &io::Error) {
    let _ = writeln!(
        console,
        "unable to start the fatal log watchdog, writing without timeout: {err}"
    );
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("Logger")
            .field("counts", &state.counts)
            .field("verbosity", &state.verbosity)
            .field("default_verbosity", &state.default_verbosity)
            .field("destinations", &state.destination.len())
            .field("log_to_stderr", &self.log_to_stderr)
            .field("colorful", &self.colorful)
            .field("timestamp", &self.timestamp)
            .finish()
    }
}
