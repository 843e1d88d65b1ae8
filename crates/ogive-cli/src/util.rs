use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use anyhow::Context as _;

/// Destination of a report: stdout, or a file when a path is given.
pub struct Output {
    writer: Box<dyn Write>,
    target: String,
}

impl Output {
    pub fn create(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self {
                writer: Box::new(io::stdout().lock()),
                target: "stdout".to_owned(),
            });
        };
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Self {
            writer: Box::new(BufWriter::new(file)),
            target: path.display().to_string(),
        })
    }

    /// `stdout` or the output file path.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn write_json<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut self.writer, value)
            .with_context(|| format!("Failed to write JSON to {}", self.target))?;
        writeln!(self.writer).with_context(|| format!("Failed to write to {}", self.target))?;
        self.finish()
    }

    pub fn finish(&mut self) -> anyhow::Result<()> {
        self.writer
            .flush()
            .with_context(|| format!("Failed to flush output to {}", self.target))
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
