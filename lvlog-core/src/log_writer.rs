use std::{
    fs::File,
    io::{self, BufWriter, Seek, SeekFrom, Write},
    path::Path,
    sync::{Arc, Mutex, PoisonError},
};

/// Appends lines to a file, creating it if needed.
pub struct LogFile {
    file: BufWriter<File>,
}

impl LogFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, io::Error> {
        let mut file = File::options()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)?;
        file.seek(SeekFrom::End(0))?;
        Ok(Self {
            file: BufWriter::new(file),
        })
    }
}

impl Write for LogFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Standard error, locked per write.
#[derive(Default, Debug, Clone, Copy)]
pub struct LogStderr;

impl Write for LogStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().lock().write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        io::stderr().lock().write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

/// Standard output, locked per write.
#[derive(Default, Debug, Clone, Copy)]
pub struct LogStdout;

impl Write for LogStdout {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().lock().write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        io::stdout().lock().write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}

/// In-memory sink. Clones share the same buffer, so one clone can be handed
/// to a logger while another reads back what was written.
#[derive(Default, Debug, Clone)]
pub struct LogBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        let bytes = self.bytes.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    pub fn clear(&self) {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_log_file() {
    std::fs::remove_file("/tmp/lvlog_test_log_file.log").ok();
    let mut log_file = LogFile::new("/tmp/lvlog_test_log_file.log").unwrap();
    writeln!(log_file, "Hello, world!").unwrap();
    log_file.flush().unwrap();
    drop(log_file);
    let mut log_file = LogFile::new("/tmp/lvlog_test_log_file.log").unwrap();
    writeln!(log_file, "appended").unwrap();
    log_file.flush().unwrap();
    assert_eq!(
        std::fs::read_to_string("/tmp/lvlog_test_log_file.log").unwrap(),
        "Hello, world!\nappended\n"
    );
}

#[test]
fn test_log_buffer_shared_between_clones() {
    let buffer = LogBuffer::new();
    let mut writer = buffer.clone();
    assert!(buffer.is_empty());
    writer.write_all(b"one\ntwo\n").unwrap();
    assert_eq!(buffer.lines(), vec!["one", "two"]);
    buffer.clear();
    assert!(writer.is_empty());
}
