//! Forward `tracing` events to a [`Logger`].
//!
//! Libraries instrumented with `tracing` end up in the same sequence-numbered
//! lines as the direct calls:
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cosmian_leveled_logger::{Logger, LoggerLayer};
//! use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
//!
//! let logger = Arc::new(Logger::new(true, true, false, vec![]));
//! tracing_subscriber::registry()
//!     .with(LoggerLayer::new(logger))
//!     .init();
//! tracing::info!(user = "alice", "logged in");
//! ```

use std::{fmt, sync::Arc};

use tracing::{
    field::{Field, Visit},
    Event, Level as TracingLevel, Subscriber,
};
use tracing_subscriber::layer::{Context, Layer};

use crate::{CallSite, Level, Logger};

/// A `tracing_subscriber` layer writing every event to a [`Logger`].
///
/// Errors, warnings and infos keep their level at verbosity 0; debug and
/// trace events become infos at verbosity 1 and 2, so they only show once the
/// logger verbosity is raised.
pub struct LoggerLayer {
    logger: Arc<Logger>,
}

impl LoggerLayer {
    #[must_use]
    pub const fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }

    const fn map_level(level: &TracingLevel) -> (Level, i32) {
        match *level {
            TracingLevel::ERROR => (Level::Error, 0),
            TracingLevel::WARN => (Level::Warning, 0),
            TracingLevel::INFO => (Level::Info, 0),
            TracingLevel::DEBUG => (Level::Info, 1),
            TracingLevel::TRACE => (Level::Info, 2),
        }
    }
}

impl<S: Subscriber> Layer<S> for LoggerLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let (level, verbosity) = Self::map_level(metadata.level());
        let call_site = metadata
            .file()
            .zip(metadata.line())
            .map(|(file, line)| CallSite::new(file, line));

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.logger.log_at(level, verbosity, call_site, &visitor);
    }
}

/// Collects the message of an event followed by its other fields as
/// `name=value` pairs.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<(&'static str, String)>,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            value.clone_into(&mut self.message);
        } else {
            self.fields.push((field.name(), value.to_owned()));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields.push((field.name(), format!("{value:?}")));
        }
    }
}

impl fmt::Display for MessageVisitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 || !self.message.is_empty() {
                f.write_str(" ")?;
            }
            write!(f, "{name}={value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io::{self, Write},
        sync::Mutex,
    };

    use tracing_subscriber::layer::SubscriberExt;

    use super::*;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_level_mapping() {
        assert_eq!(LoggerLayer::map_level(&TracingLevel::ERROR), (Level::Error, 0));
        assert_eq!(LoggerLayer::map_level(&TracingLevel::WARN), (Level::Warning, 0));
        assert_eq!(LoggerLayer::map_level(&TracingLevel::INFO), (Level::Info, 0));
        assert_eq!(LoggerLayer::map_level(&TracingLevel::DEBUG), (Level::Info, 1));
        assert_eq!(LoggerLayer::map_level(&TracingLevel::TRACE), (Level::Info, 2));
    }

    #[test]
    fn test_events_are_forwarded() {
        let capture = Capture::default();
        let logger = Arc::new(Logger::new(false, false, false, vec![Box::new(capture.clone())]));
        let subscriber = tracing_subscriber::registry().with(LoggerLayer::new(logger.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(user = "alice", attempts = 3, "login refused");
            tracing::debug!("hidden at verbosity 0");
        });

        let output = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("[W0000] tracing_bridge.rs:"));
        assert!(lines[0].ends_with(": login refused user=alice attempts=3"));
        assert_eq!(logger.count(Level::Info), 0);
    }

    #[test]
    fn test_fields_without_message() {
        let visitor = MessageVisitor {
            message: String::new(),
            fields: vec![("a", "1".to_owned()), ("b", "2".to_owned())],
        };
        assert_eq!(visitor.to_string(), "a=1 b=2");
    }
}
