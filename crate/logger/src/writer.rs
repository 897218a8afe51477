use std::io::{self, Write};

/// A set of destinations receiving every log line.
///
/// Each destination gets the whole line in a single `write_all` followed by a
/// `flush`, independently of the others: a failing destination never keeps a
/// line, or part of it, from the healthy ones.
#[derive(Default)]
pub struct FanOutWriter {
    destinations: Vec<Box<dyn Write + Send>>,
}

impl FanOutWriter {
    #[must_use]
    pub fn new(destinations: Vec<Box<dyn Write + Send>>) -> Self {
        Self { destinations }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Write `line` followed by a newline to every destination.
    ///
    /// Returns the errors of the destinations that failed, in destination
    /// order. The other destinations received the complete line.
    pub fn write_line(&mut self, line: &str) -> Vec<io::Error> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        self.destinations
            .iter_mut()
            .filter_map(|destination| {
                destination
                    .write_all(buf.as_bytes())
                    .and_then(|()| destination.flush())
                    .err()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct Shared(Arc<Mutex<Vec<u8>>>);

    impl Write for Shared {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken"))
        }
    }

    #[test]
    fn test_every_destination_receives_writes() {
        let first = Shared::default();
        let second = Shared::default();
        let mut writer = FanOutWriter::new(vec![Box::new(first.clone()), Box::new(second.clone())]);
        assert!(writer.write_line("hello").is_empty());
        assert_eq!(first.0.lock().unwrap().as_slice(), b"hello\n");
        assert_eq!(second.0.lock().unwrap().as_slice(), b"hello\n");
    }

    #[test]
    fn test_broken_destination_does_not_starve_others() {
        let healthy = Shared::default();
        let mut writer = FanOutWriter::new(vec![Box::new(Broken), Box::new(healthy.clone())]);
        let errors = writer.write_line("one");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(writer.write_line("two").len(), 1);
        assert_eq!(healthy.0.lock().unwrap().as_slice(), b"one\ntwo\n");
    }

    /// Accepts one byte per call and reports an interruption before each one.
    #[derive(Clone, Default)]
    struct Stuttering {
        inner: Shared,
        interrupted: bool,
    }

    impl Write for Stuttering {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.interrupted = !self.interrupted;
            if self.interrupted {
                return Err(io::Error::new(io::ErrorKind::Interrupted, "signal"));
            }
            self.inner.write(&buf[..1])
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_interrupted_destination_is_not_duplicated() {
        let stuttering = Stuttering::default();
        let healthy = Shared::default();
        let mut writer = FanOutWriter::new(vec![
            Box::new(stuttering.clone()),
            Box::new(healthy.clone()),
        ]);
        assert!(writer.write_line("ab").is_empty());
        assert_eq!(stuttering.inner.0.lock().unwrap().as_slice(), b"ab\n");
        assert_eq!(healthy.0.lock().unwrap().as_slice(), b"ab\n");
    }

    #[test]
    fn test_empty_writer_accepts_everything() {
        let mut writer = FanOutWriter::default();
        assert!(writer.is_empty());
        assert!(writer.write_line("ignored").is_empty());
    }
}
