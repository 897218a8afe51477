use std::{
    io::{self, Write},
    sync::{Arc, Mutex},
};

/// An in-memory destination that can be inspected while the logger owns a
/// clone of it.
#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    pub fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_owned).collect()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Split `[prefix] file:line: message` into its parts.
pub fn parse_line(line: &str) -> (&str, &str, u32, &str) {
    let (prefix, rest) = line.split_once(' ').unwrap();
    let (location, message) = rest.split_once(": ").unwrap();
    let (file, line_number) = location.rsplit_once(':').unwrap();
    (prefix, file, line_number.parse().unwrap(), message)
}
