use std::io::{Error, ErrorKind, Stderr, Stdout, Write};

/// Command output with separate result and diagnostic streams.
pub struct Writer {
    buffer: WriteBuffer,
    err: WriteBuffer,
}

impl Writer {
    pub fn new(buffer: WriteBuffer, err: WriteBuffer) -> Self {
        Self { buffer, err }
    }

    pub fn write_err(&mut self, message: String) -> std::io::Result<()> {
        writeln!(self.err, "{message}")
    }

    pub fn into_string(self) -> std::io::Result<String> {
        self.buffer.into_string()
    }

    pub fn err_to_string(self) -> std::io::Result<String> {
        self.err.into_string()
    }

    /// Captured output with color codes removed.
    pub fn stripped(self) -> std::io::Result<String> {
        self.buffer.stripped()
    }
}

impl Write for Writer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.buffer.flush()
    }
}

pub enum WriteBuffer {
    Stdout(Stdout),
    Stderr(Stderr),
    Vec(Vec<u8>),
}

impl WriteBuffer {
    fn captured(self) -> std::io::Result<Vec<u8>> {
        match self {
            WriteBuffer::Vec(vec) => Ok(vec),
            _ => Err(Error::new(
                ErrorKind::Unsupported,
                "only in-memory output can be read back",
            )),
        }
    }

    fn into_string(self) -> std::io::Result<String> {
        String::from_utf8(self.captured()?).map_err(|e| Error::new(ErrorKind::InvalidData, e))
    }

    fn stripped(self) -> std::io::Result<String> {
        let stripped = strip_ansi_escapes::strip(self.captured()?)?;
        String::from_utf8(stripped).map_err(|e| Error::new(ErrorKind::InvalidData, e))
    }
}

impl Write for WriteBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            WriteBuffer::Stdout(stdout) => stdout.write(buf),
            WriteBuffer::Stderr(stderr) => stderr.write(buf),
            WriteBuffer::Vec(vec) => vec.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            WriteBuffer::Stdout(stdout) => stdout.flush(),
            WriteBuffer::Stderr(stderr) => stderr.flush(),
            WriteBuffer::Vec(vec) => vec.flush(),
        }
    }
}
