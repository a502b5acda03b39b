//! Stream parsing of comma-delimited rational fields.
//!
//! The wire format is a sequence of fields, each terminated by a comma:
//! `<numer>[/<denom>][ ],` with the denominator defaulting to 1 when the
//! `/` segment is absent. A failed read restores the stream cursor, so a
//! caller can retry the same bytes with a different reader.

use std::io::{BufRead, Seek, SeekFrom};

use crate::{Rational, RationalError};

/// Reads comma-terminated rational fields from a seekable stream.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use exact_ratio::{Rational, RationalError, RationalReader};
///
/// let mut reader = RationalReader::new(Cursor::new("3/4,5,x/4,"));
///
/// assert_eq!(reader.read()?, Rational::new(3, 4)?);
/// assert_eq!(reader.read()?, Rational::from_integer(5));
///
/// // The malformed field fails without consuming it.
/// assert!(matches!(reader.read(), Err(RationalError::Parse(_))));
/// assert!(matches!(reader.read(), Err(RationalError::Parse(_))));
/// # Ok::<(), exact_ratio::RationalError>(())
/// ```
#[derive(Debug)]
pub struct RationalReader<R> {
    inner: R,
}

impl<R: BufRead + Seek> RationalReader<R> {
    /// Wrap a seekable buffered stream.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Read and parse the next comma-terminated field.
    ///
    /// On any failure (end of input, missing comma, malformed numeric text,
    /// zero denominator, invalid UTF-8) the stream is rewound to where it
    /// was before the call and the error is returned, as if the read never
    /// happened.
    pub fn read(&mut self) -> Result<Rational, RationalError> {
        let start = self.inner.stream_position()?;
        match self.read_field() {
            Ok(value) => Ok(value),
            Err(err) => {
                self.inner.seek(SeekFrom::Start(start))?;
                Err(err)
            }
        }
    }

    fn read_field(&mut self) -> Result<Rational, RationalError> {
        let mut buf = Vec::new();
        self.inner.read_until(b',', &mut buf)?;
        if buf.last() != Some(&b',') {
            // EOF before a terminating comma; covers the empty-input case.
            return Err(RationalError::Parse(
                String::from_utf8_lossy(&buf).into_owned(),
            ));
        }
        buf.pop();
        let field = std::str::from_utf8(&buf)
            .map_err(|_| RationalError::Parse(String::from_utf8_lossy(&buf).into_owned()))?;
        field.parse()
    }

    /// A shared reference to the underlying stream.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Unwrap the reader, returning the underlying stream.
    pub fn into_inner(self) -> R {
        self.inner
    }
}
