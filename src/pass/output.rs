//! Batch generation to the terminal, a file, or a clipboard buffer.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use log::debug;
use zeroize::Zeroize;

use super::{GenerationRequest, compose, strength};
use crate::error::Result;
use crate::rand::RandomSource;

const BUF_CAPACITY: usize = 8 * 1024;

/// Where generated passwords go.
#[derive(Debug, Clone, Copy)]
pub enum Sink<'a> {
    Terminal,
    File(&'a Path),
    /// Kept in [`Batch::collected`] for the caller (clipboard).
    Collect,
}

/// What a finished batch produced.
#[derive(Debug, Default)]
pub struct Batch {
    pub generated: usize,
    pub collected: String,
    pub min_bits: Option<f64>,
    pub max_bits: Option<f64>,
}

impl Batch {
    fn record(&mut self, bits: f64) {
        self.generated += 1;
        self.min_bits = Some(self.min_bits.map_or(bits, |b| b.min(bits)));
        self.max_bits = Some(self.max_bits.map_or(bits, |b| b.max(bits)));
    }
}

impl Drop for Batch {
    fn drop(&mut self) {
        self.collected.zeroize();
    }
}

/// Compose `count` passwords for `request`, one per line.
///
/// Each password picks its own word. The first failing composition ends the
/// batch; lines already written are flushed before the error is returned.
pub fn generate_batch<R>(
    request: &GenerationRequest,
    count: usize,
    rng: &mut R,
    sink: Sink<'_>,
) -> Result<Batch>
where
    R: RandomSource + ?Sized,
{
    let mut batch = Batch::default();
    debug!("generating {} password(s) to {:?}", count, sink);

    match sink {
        Sink::Terminal => {
            let stdout = io::stdout();
            let mut out = SecureBufWriter::new(stdout.lock());
            write_batch(request, count, rng, &mut out, &mut batch)?;
            out.flush()?;
        }
        Sink::File(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
                && !parent.exists()
            {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let mut out = SecureBufWriter::new(file);
            write_batch(request, count, rng, &mut out, &mut batch)?;
            out.flush()?;
        }
        Sink::Collect => {
            let mut collected = Vec::new();
            let result = write_batch(request, count, rng, &mut collected, &mut batch);
            match String::from_utf8(collected) {
                Ok(text) => batch.collected = text,
                Err(e) => e.into_bytes().zeroize(),
            }
            result?;
        }
    }

    Ok(batch)
}

fn write_batch<R, W>(
    request: &GenerationRequest,
    count: usize,
    rng: &mut R,
    out: &mut W,
    batch: &mut Batch,
) -> Result<()>
where
    R: RandomSource + ?Sized,
    W: Write,
{
    for _ in 0..count {
        let pass = compose(request, rng)?;
        out.write_all(pass.as_str().as_bytes())?;
        out.write_all(b"\n")?;
        batch.record(strength::entropy_bits(&pass));
    }
    Ok(())
}

/// Buffered writer that wipes its buffer after every flush and on drop.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(BUF_CAPACITY),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        let result = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        result
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > BUF_CAPACITY {
            self.flush_buf()?;
        }
        if data.len() >= BUF_CAPACITY {
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush_buf();
    }
}

#[cfg(test)]
mod tests {
    use ::rand::SeedableRng;
    use ::rand::rngs::StdRng;

    use super::*;
    use crate::error::Error;
    use crate::pass::ValidationError;
    use crate::rand::RngSource;
    use crate::rand::testing::Scripted;

    #[test]
    fn collects_one_line_per_password() {
        let req = GenerationRequest::new(10, ["cat", "owl"]);
        let mut rng = RngSource::new(StdRng::seed_from_u64(11));

        let batch = generate_batch(&req, 5, &mut rng, Sink::Collect).unwrap();
        assert_eq!(batch.generated, 5);
        let lines: Vec<&str> = batch.collected.lines().collect();
        assert_eq!(lines.len(), 5);
        for line in lines {
            assert_eq!(line.chars().count(), 10);
            assert!(line.contains("cat") || line.contains("owl"));
        }
        assert!(batch.min_bits.unwrap() <= batch.max_bits.unwrap());
    }

    #[test]
    fn batch_stops_at_first_failure() {
        let req = GenerationRequest::new(8, ["cat", "rhinoceros"]);
        // word, 5 fill draws of pool[0], then the long word
        let mut rng = Scripted::new(&[0, 0, 0, 0, 0, 0, 1]);
        let mut out = Vec::new();
        let mut batch = Batch::default();

        let err = write_batch(&req, 3, &mut rng, &mut out, &mut batch).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::WordTooLong { .. })
        ));
        assert_eq!(batch.generated, 1);
        assert_eq!(out, b"AAcatAAA\n");
    }

    #[test]
    fn file_sink_appends() {
        let dir = std::env::temp_dir().join(format!("wordpass-test-{}", std::process::id()));
        let path = dir.join("nested/out.txt");
        let req = GenerationRequest::new(12, ["kiwi"]);
        let mut rng = RngSource::new(StdRng::seed_from_u64(3));

        generate_batch(&req, 2, &mut rng, Sink::File(&path)).unwrap();
        generate_batch(&req, 1, &mut rng, Sink::File(&path)).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().all(|l| l.contains("kiwi")));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn buffered_writer_passes_everything_through() {
        let mut sink = Vec::new();
        {
            let mut w = SecureBufWriter::new(&mut sink);
            w.write_all(b"hello\n").unwrap();
            w.write_all(&vec![b'x'; BUF_CAPACITY + 5]).unwrap();
            w.write_all(b"tail").unwrap();
        }
        assert_eq!(sink.len(), 6 + BUF_CAPACITY + 5 + 4);
        assert!(sink.starts_with(b"hello\n"));
        assert!(sink.ends_with(b"xtail"));
    }
}
