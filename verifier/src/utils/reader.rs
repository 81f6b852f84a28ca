use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Read, Stdin};

/// Fallback input for commands that read a document from stdin when no file is given.
pub struct Reader {
    input: BufReader<ReadBuffer>,
}

pub enum ReadBuffer {
    Stdin(Stdin),
    Cursor(Cursor<Vec<u8>>),
    File(File),
}

impl Read for ReadBuffer {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self {
            ReadBuffer::Stdin(stdin) => stdin.read(buf),
            ReadBuffer::Cursor(cursor) => cursor.read(buf),
            ReadBuffer::File(file) => file.read(buf),
        }
    }
}

impl Reader {
    pub fn new(buffer: ReadBuffer) -> Self {
        Reader {
            input: BufReader::new(buffer),
        }
    }

    /// True once nothing is left to read, without consuming anything.
    pub fn is_exhausted(&mut self) -> std::io::Result<bool> {
        Ok(self.input.fill_buf()?.is_empty())
    }

    /// Reads the remaining input, which must be UTF-8.
    pub fn read_content(&mut self) -> std::io::Result<String> {
        let mut content = String::new();
        let read = self.input.read_to_string(&mut content)?;
        log::debug!("read {read} bytes of input");
        Ok(content)
    }
}
