use std::io::{self, Write};

/// Writes one label per line, flushing once at the end.
///
/// A reader that goes away (`BrokenPipe`) ends output early without error.
/// Returns how many lines were written.
pub fn write_labels<W, I>(out: W, labels: I) -> io::Result<u64>
where
    W: Write,
    I: IntoIterator<Item = String>,
{
    let mut out = io::BufWriter::new(out);
    let mut written = 0u64;

    for label in labels {
        if let Err(error) = writeln!(out, "{label}") {
            return closed_or(error, written);
        }
        written += 1;
    }

    match out.flush() {
        Ok(()) => Ok(written),
        Err(error) => closed_or(error, written),
    }
}

fn closed_or(error: io::Error, written: u64) -> io::Result<u64> {
    if error.kind() == io::ErrorKind::BrokenPipe {
        tracing::debug!(written, "output closed by reader");
        Ok(written)
    } else {
        Err(error)
    }
}
