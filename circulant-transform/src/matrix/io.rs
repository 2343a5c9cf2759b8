//! Text I/O for Matrix.
//!
//! Input format: `M N v_1 ... v_{M*N}`, all tokens whitespace separated,
//! values in row-major order. Tokens after the last value are ignored.
//!
//! Output format: one line per row, every value followed by a single space.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::NonFinitePolicy;
use crate::error::{Error, IoTarget, ParseError, ParsePosition, Result};
use crate::layout::BlockLayout;

use super::Matrix;

impl Matrix {
    /// Load a Matrix from a text file.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = read_input(path)?;
        Self::parse(&bytes)
    }

    /// Parse a Matrix from text, passing non-finite values through.
    pub fn parse<T: AsRef<[u8]> + ?Sized>(input: &T) -> Result<Self> {
        let input = input.as_ref();
        let mut tokens = tokenize(input);
        let shape = read_header(&mut tokens)?;
        let data = read_values(&mut tokens, shape, NonFinitePolicy::PassThrough, input.len())?;
        Ok(Self::from_dense(data, shape))
    }

    /// Parse a Matrix whose dimensions must be divisible by `k`.
    ///
    /// The block layout is checked as soon as the header is read, so a bad
    /// `k` is reported before any value token is looked at.
    pub fn parse_blocked<T: AsRef<[u8]> + ?Sized>(
        input: &T,
        k: usize,
        policy: NonFinitePolicy,
    ) -> Result<(Self, BlockLayout)> {
        let input = input.as_ref();
        let mut tokens = tokenize(input);
        let (rows, cols) = read_header(&mut tokens)?;
        let layout = BlockLayout::new(k, rows, cols)?;
        let data = read_values(&mut tokens, (rows, cols), policy, input.len())?;
        Ok((Self::from_dense(data, (rows, cols)), layout))
    }

    /// Save the Matrix as text.
    ///
    /// `precision` fixes the number of decimal places; `None` writes the
    /// shortest representation that round-trips.
    pub fn save(&self, path: &Path, precision: Option<usize>) -> Result<()> {
        let file = File::create(path).map_err(|e| Error::io(IoTarget::Output, path, e))?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer, precision)
            .and_then(|_| writer.flush())
            .map_err(|e| Error::io(IoTarget::Output, path, e))
    }

    /// Write the Matrix as text to any writer.
    pub fn write_to<W: Write>(&self, writer: &mut W, precision: Option<usize>) -> std::io::Result<()> {
        for row in self.iter_rows() {
            for value in row {
                match precision {
                    Some(p) => write!(writer, "{:.*} ", p, value)?,
                    None => write!(writer, "{} ", value)?,
                }
            }
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Render the Matrix in its text output format.
    pub fn to_text(&self, precision: Option<usize>) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.write_to(&mut buf, precision);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Read the raw input bytes. Only opening and reading count as I/O
/// failures; bytes that are not UTF-8 surface later as malformed tokens.
pub(crate) fn read_input(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| Error::io(IoTarget::Input, path, e))
}

fn tokenize(input: &[u8]) -> impl Iterator<Item = &[u8]> {
    input.split(u8::is_ascii_whitespace).filter(|t| !t.is_empty())
}

fn token_text<'a>(token: &'a [u8], position: &ParsePosition, what: &str) -> Result<&'a str> {
    std::str::from_utf8(token).map_err(|_| {
        ParseError::new(
            position.clone(),
            format!("invalid {} `{}`", what, String::from_utf8_lossy(token)),
        )
        .into()
    })
}

fn read_header<'a>(tokens: &mut impl Iterator<Item = &'a [u8]>) -> Result<(usize, usize)> {
    let rows = read_dimension(tokens.next(), "rows")?;
    let cols = read_dimension(tokens.next(), "cols")?;
    Ok((rows, cols))
}

fn read_dimension(token: Option<&[u8]>, field: &'static str) -> Result<usize> {
    let position = ParsePosition::Header(field);
    let token = token.ok_or_else(|| ParseError::new(position.clone(), "missing dimension"))?;
    let token = token_text(token, &position, "dimension")?;
    let value: usize = token
        .parse()
        .map_err(|_| ParseError::new(position.clone(), format!("invalid dimension `{}`", token)))?;
    if value == 0 {
        return Err(ParseError::new(position, "dimension must be positive").into());
    }
    Ok(value)
}

fn read_values<'a>(
    tokens: &mut impl Iterator<Item = &'a [u8]>,
    shape: (usize, usize),
    policy: NonFinitePolicy,
    input_len: usize,
) -> Result<Vec<f64>> {
    let (rows, cols) = shape;
    let total = rows.checked_mul(cols).ok_or_else(|| {
        ParseError::new(ParsePosition::Header("cols"), format!("matrix {}x{} is too large", rows, cols))
    })?;

    // Each value needs at least two bytes of text, so a header that claims
    // more than that is truncated and must not drive the allocation.
    let mut data = Vec::with_capacity(total.min(input_len / 2 + 1));
    for idx in 0..total {
        let (row, col) = (idx / cols, idx % cols);
        let position = ParsePosition::Value { row, col };
        let token = tokens
            .next()
            .ok_or_else(|| ParseError::new(position.clone(), format!("unexpected end of input, expected {} values", total)))?;
        let token = token_text(token, &position, "number")?;
        let value: f64 = token
            .parse()
            .map_err(|_| ParseError::new(position, format!("invalid number `{}`", token)))?;
        if policy == NonFinitePolicy::Reject && !value.is_finite() {
            return Err(Error::NonFinite { row, col, value });
        }
        data.push(value);
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::TempDir;

    // ==================== parse tests ====================

    #[test]
    fn test_parse_basic() {
        let matrix = Matrix::parse("2 3\n1 2 3\n4 5 6\n").unwrap();
        assert_eq!(matrix.shape(), (2, 3));
        assert_eq!(matrix.row(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_parse_ignores_layout_whitespace() {
        let matrix = Matrix::parse("2\t2 1.5\n\n-2   3e1 4").unwrap();
        assert_eq!(matrix.as_slice(), &[1.5, -2.0, 30.0, 4.0]);
    }

    #[test]
    fn test_parse_ignores_trailing_tokens() {
        let matrix = Matrix::parse("1 2 1 2 99 garbage").unwrap();
        assert_eq!(matrix.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn test_parse_missing_header() {
        let err = Matrix::parse("").unwrap_err();
        match err {
            Error::Parse(e) => assert_eq!(e.position, ParsePosition::Header("rows")),
            other => panic!("unexpected error: {:?}", other),
        }

        let err = Matrix::parse("3").unwrap_err();
        match err {
            Error::Parse(e) => assert_eq!(e.position, ParsePosition::Header("cols")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_invalid_header() {
        let err = Matrix::parse("-2 2 1 2 3 4").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().contains("invalid dimension `-2`"));

        let err = Matrix::parse("2.5 2").unwrap_err();
        assert!(err.to_string().contains("header field `rows`"));
    }

    #[test]
    fn test_parse_zero_dimension() {
        let err = Matrix::parse("0 4").unwrap_err();
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn test_parse_bad_value_reports_position() {
        let err = Matrix::parse("2 2 1 2 3 x").unwrap_err();
        match err {
            Error::Parse(e) => {
                assert_eq!(e.position, ParsePosition::Value { row: 1, col: 1 });
                assert!(e.message.contains("`x`"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_truncated_input() {
        let err = Matrix::parse("2 2 1 2 3").unwrap_err();
        match err {
            Error::Parse(e) => {
                assert_eq!(e.position, ParsePosition::Value { row: 1, col: 1 });
                assert!(e.message.contains("unexpected end of input"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_non_utf8_value_reports_position() {
        let err = Matrix::parse(b"2 2 1 2 3 \xff4").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        match err {
            Error::Parse(e) => {
                assert_eq!(e.position, ParsePosition::Value { row: 1, col: 1 });
                assert!(e.message.starts_with("invalid number"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_non_utf8_header() {
        let err = Matrix::parse(b"\xfe2 2 1 2 3 4").unwrap_err();
        match err {
            Error::Parse(e) => assert_eq!(e.position, ParsePosition::Header("rows")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_load_non_utf8_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("matrix.txt");
        fs::write(&path, b"2 2 1 2 3 \xff4").unwrap();

        let err = Matrix::load(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().contains("row 1, column 1"));
    }

    #[test]
    fn test_parse_huge_header_fails_without_allocating() {
        let err = Matrix::parse("1000000 1000000 1 2").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_parse_non_finite_passes_through() {
        let matrix = Matrix::parse("1 3 NaN inf -inf").unwrap();
        assert!(matrix.get(0, 0).is_nan());
        assert_eq!(matrix.get(0, 1), f64::INFINITY);
        assert_eq!(matrix.get(0, 2), f64::NEG_INFINITY);
    }

    // ==================== parse_blocked tests ====================

    #[test]
    fn test_parse_blocked_valid() {
        let (matrix, layout) = Matrix::parse_blocked("2 4 1 2 3 4 5 6 7 8", 2, NonFinitePolicy::PassThrough).unwrap();
        assert_eq!(matrix.shape(), (2, 4));
        assert_eq!(layout.row_blocks(), 1);
        assert_eq!(layout.col_groups(), 2);
    }

    #[test]
    fn test_parse_blocked_checks_k_before_values() {
        // Values are garbage, but the layout error must win
        let err = Matrix::parse_blocked("5 4 not numbers", 2, NonFinitePolicy::PassThrough).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn test_parse_blocked_rejects_non_finite() {
        let err = Matrix::parse_blocked("1 2 1 nan", 1, NonFinitePolicy::Reject).unwrap_err();
        match err {
            Error::NonFinite { row, col, value } => {
                assert_eq!((row, col), (0, 1));
                assert!(value.is_nan());
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    // ==================== write tests ====================

    #[test]
    fn test_to_text_default_format() {
        let matrix = Matrix::from_rows(&[[1.0, 2.5], [-3.0, 0.125]]);
        assert_eq!(matrix.to_text(None), "1 2.5 \n-3 0.125 \n");
    }

    #[test]
    fn test_to_text_fixed_precision() {
        let matrix = Matrix::from_rows(&[[1.0, 2.0 / 3.0]]);
        assert_eq!(matrix.to_text(Some(3)), "1.000 0.667 \n");
    }

    #[test]
    fn test_to_text_extreme_magnitudes_are_written_in_full() {
        // Display never switches to exponent notation, unlike C-style `%g`
        let matrix = Matrix::from_rows(&[[1e300, 1e-7]]);
        assert_eq!(matrix.to_text(None), format!("1{} 0.0000001 \n", "0".repeat(300)));

        // Written tokens read back to the same values
        let reloaded = Matrix::parse(&format!("1 2 {}", matrix.to_text(None))).unwrap();
        assert_eq!(reloaded, matrix);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("matrix.txt");
        let matrix = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.5, 6.0]]);

        matrix.save(&path, None).unwrap();

        // Output has no header, so prepend one to read it back
        let body = fs::read_to_string(&path).unwrap();
        let reloaded = Matrix::parse(&format!("2 3\n{}", body)).unwrap();
        assert_eq!(reloaded, matrix);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Matrix::load(Path::new("/nonexistent/matrix.txt")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("cannot open input"));
    }

    #[test]
    fn test_save_to_missing_directory() {
        let matrix = Matrix::from_rows(&[[1.0]]);
        let err = matrix.save(Path::new("/nonexistent/dir/out.txt"), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("cannot open output"));
    }
}
