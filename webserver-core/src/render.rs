use std::{convert::Infallible, io::Write};

use crate::{Error, usage::UsageDocument};

/// Ends the invocation once the document is out.
pub trait Exit {
    type Outcome;

    fn exit(self, status: i32) -> Self::Outcome;
}

/// Terminates the current process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessExit;

impl Exit for ProcessExit {
    type Outcome = Infallible;

    fn exit(self, status: i32) -> Infallible {
        std::process::exit(status)
    }
}

/// Writes a usage document to an output stream, then exits with success.
pub struct Renderer<W: Write, E: Exit> {
    out: W,
    exit: E,
}

impl<W: Write, E: Exit> Renderer<W, E> {
    pub fn new(out: W, exit: E) -> Self {
        Self { out, exit }
    }

    pub fn render(mut self, document: &UsageDocument) -> Result<E::Outcome, Error> {
        writeln!(self.out, "{document}")?;
        // flush before the process goes away
        self.out.flush()?;

        Ok(self.exit.exit(0))
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::{
        Inner,
        label::Labels,
        style::PlainStyler,
        usage::assemble,
    };

    struct RecordExit;

    impl Exit for RecordExit {
        type Outcome = i32;

        fn exit(self, status: i32) -> i32 {
            status
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_render_writes_once_and_exits_zero() {
        let labels = Labels::new(&PlainStyler);
        let document = assemble(&labels, &"Web Server v1.2.3");

        let mut out = Vec::new();
        let status = Renderer::new(&mut out, RecordExit).render(&document).unwrap();

        assert_eq!(status, 0);
        let written = String::from_utf8(out).unwrap();
        assert_eq!(written, format!("{}\n", document.as_str()));
        assert_eq!(written.matches("Usage:").count(), 1);
    }

    #[test]
    fn test_render_write_failure() {
        let labels = Labels::new(&PlainStyler);
        let document = assemble(&labels, &"Web Server v1.2.3");

        let err = Renderer::new(BrokenPipe, RecordExit)
            .render(&document)
            .unwrap_err();
        assert!(matches!(err.into_inner(), Inner::OutputError { .. }));
    }
}
