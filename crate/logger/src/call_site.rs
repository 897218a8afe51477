use std::panic::Location;

/// File reported when the call site cannot be resolved.
pub const UNKNOWN_FILE: &str = "unknown file";

/// Source location attached to a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
    file: &'a str,
    line: u32,
}

impl<'a> CallSite<'a> {
    #[must_use]
    pub const fn new(file: &'a str, line: u32) -> Self {
        Self { file, line }
    }

    /// The location of the first caller not annotated with `#[track_caller]`.
    ///
    /// Every forwarding layer of this crate carries the annotation, so the
    /// reported location is the user's call site rather than a wrapper.
    #[must_use]
    #[track_caller]
    pub fn caller() -> CallSite<'static> {
        let location = Location::caller();
        CallSite::new(location.file(), location.line())
    }

    /// Basename of the source file: everything after the last `/` or `\`.
    #[must_use]
    pub fn file_name(&self) -> &'a str {
        self.file.rsplit(['/', '\\']).next().unwrap_or(self.file)
    }

    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

/// Resolve an optional call site into the `(file, line)` pair printed in a
/// log line.
pub(crate) fn resolve(call_site: Option<CallSite<'_>>) -> (&str, u32) {
    match call_site {
        Some(site) if !site.file_name().is_empty() => (site.file_name(), site.line()),
        _ => (UNKNOWN_FILE, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_strips_directories() {
        assert_eq!(CallSite::new("src/a/b/logger.rs", 3).file_name(), "logger.rs");
        assert_eq!(CallSite::new(r"C:\src\main.rs", 3).file_name(), "main.rs");
        assert_eq!(CallSite::new("main.rs", 3).file_name(), "main.rs");
    }

    #[test]
    fn test_caller_reports_this_file() {
        let site = CallSite::caller();
        let line = line!() - 1;
        assert_eq!(site.file_name(), "call_site.rs");
        assert_eq!(site.line(), line);
    }

    #[test]
    fn test_unresolved_call_site() {
        assert_eq!(resolve(None), (UNKNOWN_FILE, 0));
        assert_eq!(resolve(Some(CallSite::new("dir/", 12))), (UNKNOWN_FILE, 0));
        assert_eq!(resolve(Some(CallSite::new("/x/y.rs", 12))), ("y.rs", 12));
    }
}
