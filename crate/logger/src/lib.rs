//! # Cosmian Leveled Logger
//!
//! A synchronous, process-local logger writing sequence-numbered lines to
//! stderr and to any number of persisted destinations (typically files):
//!
//! ```text
//! [I0000] main.rs:12: server started
//! [W0000] main.rs:20: slow request
//! [I0001] main.rs:31: server stopped
//! ```
//!
//! ## Usage
//!
//! Either hold a [`Logger`]:
//!
//! ```rust,ignore
//! use cosmian_leveled_logger::Logger;
//!
//! let file = std::fs::File::create("app.log")?;
//! let logger = Logger::new(true, true, false, vec![Box::new(file)]);
//! logger.infof(format_args!("listening on port {}", 8080));
//! logger.v_info(2, "only shown at verbosity 2 and above");
//! ```
//!
//! or initialize the process-wide default logger once and use the macros:
//!
//! ```rust,ignore
//! use cosmian_leveled_logger::{infof, init, v_info, LogOptions};
//!
//! init(&LogOptions::default());
//! infof!("listening on port {}", 8080);
//! v_info!(2, "request", 42, "handled");
//! ```
//!
//! Fatal calls (`fatal`, `fatalf`, `fatal!`, `fatalf!`) never return: the
//! line is written and the process exits.
mod call_site;
mod default_logger;
mod error;
mod level;
mod logger;
mod macros;
mod operands;
mod options;
mod tracing_bridge;
mod writer;

pub use call_site::{CallSite, UNKNOWN_FILE};
pub use default_logger::{
    default_logger, error, errorf, fatal, fatalf, info, infof, init, set_default_verbosity,
    set_verbosity, try_default_logger, v_error, v_errorf, v_info, v_infof, v_warning, v_warningf,
    warning, warningf,
};
pub use error::LoggerError;
pub use level::Level;
pub use logger::{Logger, FATAL_EXIT_CODE, FATAL_FLUSH_TIMEOUT};
pub use operands::{Operand, Operands};
#[doc(hidden)]
pub use operands::{DisplayOperand, OperandKind, TextOperand};
pub use options::{LogOptions, DEFAULT_LOG_DIR};
pub use tracing_bridge::LoggerLayer;
pub use writer::FanOutWriter;
