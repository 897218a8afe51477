use std::fmt;

/// ANSI sequence restoring the terminal's default color.
pub(crate) const RESET_COLOR: &str = "\x1b[0m";

/// Severity of a log message.
///
/// The set is closed: per-level counters are stored in a fixed array indexed
/// by [`Level::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Info,
    Warning,
    Error,
    Fatal,
}

impl Level {
    pub(crate) const COUNT: usize = 4;

    pub const ALL: [Self; Self::COUNT] = [Self::Info, Self::Warning, Self::Error, Self::Fatal];

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Info => 0,
            Self::Warning => 1,
            Self::Error => 2,
            Self::Fatal => 3,
        }
    }

    /// Tag used in the bracketed line prefix.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Info => "I",
            Self::Warning => "W",
            Self::Error => "E",
            Self::Fatal => "FATAL",
        }
    }

    /// ANSI color used when mirroring to a colorful stderr.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Info => "\x1b[32m",
            Self::Warning => "\x1b[33m",
            Self::Error | Self::Fatal => "\x1b[31m",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexes_are_distinct() {
        let mut seen = [false; Level::COUNT];
        for level in Level::ALL {
            assert!(!seen[level.index()], "duplicate index for {level}");
            seen[level.index()] = true;
        }
    }

    #[test]
    fn test_colors() {
        assert_eq!(Level::Info.color(), "\x1b[32m");
        assert_eq!(Level::Warning.color(), "\x1b[33m");
        assert_eq!(Level::Error.color(), Level::Fatal.color());
    }
}
