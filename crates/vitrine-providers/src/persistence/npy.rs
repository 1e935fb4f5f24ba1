//! NumPy `.npy` matrix codec
//!
//! ## Format
//!
//! ```text
//! [Magic: \x93NUMPY]
//! [Version: major u8, minor u8]
//! [Header length: u16 LE (v1) | u32 LE (v2, v3)]
//! [Header: Python dict literal, space padded, '\n' terminated]
//! [Data: rows * cols f32 LE, row-major]
//! ```
//!
//! Written files are version 1.0 with dtype `<f4`, C order, and the
//! preamble padded to a multiple of 64 bytes.

use std::io::{Read, Write};
use std::sync::LazyLock;

use byteorder::{ByteOrder, LittleEndian, ReadBytesExt, WriteBytesExt};
use regex::Regex;

use vitrine_domain::error::{Error, Result};

use crate::constants::{NPY_DESCR_F32, NPY_HEADER_ALIGN, NPY_MAGIC};

static DESCR_RE: LazyLock<Result<Regex>> = LazyLock::new(|| compile(r"'descr'\s*:\s*'([^']*)'"));
static FORTRAN_RE: LazyLock<Result<Regex>> =
    LazyLock::new(|| compile(r"'fortran_order'\s*:\s*(True|False)"));
static SHAPE_RE: LazyLock<Result<Regex>> = LazyLock::new(|| compile(r"'shape'\s*:\s*\(([^)]*)\)"));

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::persistence(format!("Invalid header pattern: {e}")))
}

fn capture<'h>(re: &LazyLock<Result<Regex>>, header: &'h str, field: &str) -> Result<&'h str> {
    let re = re
        .as_ref()
        .map_err(|e| Error::persistence(e.to_string()))?;
    re.captures(header)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| Error::persistence(format!("Matrix header is missing '{field}'")))
}

/// Dense row-major `f32` matrix
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Matrix {
    /// Wrap row-major data
    ///
    /// # Errors
    /// `Persistence` when `data` does not hold `rows * cols` values.
    pub fn new(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(Error::persistence(format!(
                "Matrix data has {} values, shape ({rows}, {cols}) needs {}",
                data.len(),
                rows.saturating_mul(cols)
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Stack equal-length rows
    pub fn from_rows<'a>(cols: usize, rows: impl IntoIterator<Item = &'a [f32]>) -> Result<Self> {
        let mut data = Vec::new();
        let mut count = 0;
        for row in rows {
            if row.len() != cols {
                return Err(Error::dimension_mismatch(cols, row.len()));
            }
            data.extend_from_slice(row);
            count += 1;
        }
        Self::new(count, cols, data)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major values
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Row `i`
    pub fn row(&self, i: usize) -> Option<&[f32]> {
        (i < self.rows).then(|| &self.data[i * self.cols..(i + 1) * self.cols])
    }

    /// Iterate rows in order
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f32]> + '_ {
        (0..self.rows).filter_map(|i| self.row(i))
    }
}

const F32_BYTES: usize = std::mem::size_of::<f32>();

fn header_text(rows: usize, cols: usize) -> String {
    let dict =
        format!("{{'descr': '{NPY_DESCR_F32}', 'fortran_order': False, 'shape': ({rows}, {cols}), }}");
    // magic + version + u16 length + dict + '\n'
    let unpadded = NPY_MAGIC.len() + 2 + 2 + dict.len() + 1;
    let padding = (NPY_HEADER_ALIGN - unpadded % NPY_HEADER_ALIGN) % NPY_HEADER_ALIGN;
    format!("{dict}{}\n", " ".repeat(padding))
}

/// Write `matrix` as a version 1.0 `.npy` stream
pub fn write_matrix<W: Write>(writer: &mut W, matrix: &Matrix) -> Result<()> {
    let header = header_text(matrix.rows, matrix.cols);
    let header_len = u16::try_from(header.len())
        .map_err(|_| Error::persistence("Matrix header exceeds 65535 bytes"))?;

    writer.write_all(NPY_MAGIC)?;
    writer.write_all(&[1, 0])?;
    writer.write_u16::<LittleEndian>(header_len)?;
    writer.write_all(header.as_bytes())?;
    for value in &matrix.data {
        writer.write_f32::<LittleEndian>(*value)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a 2-D little-endian `f32` matrix from a `.npy` stream
///
/// Versions 1.0, 2.0 and 3.0 are accepted.
///
/// # Errors
/// `Persistence` for a bad magic, an unsupported version or dtype, Fortran
/// order, a shape that is not 2-D, or truncated data.
pub fn read_matrix<R: Read>(reader: &mut R) -> Result<Matrix> {
    let mut magic = [0u8; 6];
    reader
        .read_exact(&mut magic)
        .map_err(|_| Error::persistence("File is too short to be a matrix"))?;
    if &magic != NPY_MAGIC {
        return Err(Error::persistence("Not a NumPy array file"));
    }

    let major = reader.read_u8()?;
    let _minor = reader.read_u8()?;
    let header_len = match major {
        1 => usize::from(reader.read_u16::<LittleEndian>()?),
        2 | 3 => usize::try_from(reader.read_u32::<LittleEndian>()?)
            .map_err(|_| Error::persistence("Matrix header length overflows"))?,
        v => return Err(Error::persistence(format!("Unsupported .npy version {v}"))),
    };

    let header_bytes = read_at_most(reader, header_len)?;
    if header_bytes.len() != header_len {
        return Err(Error::persistence("Matrix header is truncated"));
    }
    let header = String::from_utf8_lossy(&header_bytes);

    let descr = capture(&DESCR_RE, &header, "descr")?;
    if descr != NPY_DESCR_F32 {
        return Err(Error::persistence(format!(
            "Unsupported dtype '{descr}', expected '{NPY_DESCR_F32}'"
        )));
    }
    if capture(&FORTRAN_RE, &header, "fortran_order")? == "True" {
        return Err(Error::persistence("Fortran-ordered matrices are not supported"));
    }
    let (rows, cols) = parse_shape(capture(&SHAPE_RE, &header, "shape")?)?;

    let count = rows
        .checked_mul(cols)
        .ok_or_else(|| Error::persistence("Matrix shape overflows"))?;
    let byte_len = count
        .checked_mul(F32_BYTES)
        .ok_or_else(|| Error::persistence("Matrix shape overflows"))?;

    // One extra byte detects trailing data; buffers grow with the stream,
    // never with the header's claimed shape.
    let body = read_at_most(reader, byte_len.saturating_add(1))?;
    if body.len() < byte_len {
        return Err(Error::persistence(format!(
            "Matrix data is truncated, expected {count} values, found {}",
            body.len() / F32_BYTES
        )));
    }
    if body.len() > byte_len {
        return Err(Error::persistence("Unexpected bytes after matrix data"));
    }

    let mut data = vec![0.0f32; count];
    LittleEndian::read_f32_into(&body, &mut data);
    Matrix::new(rows, cols, data)
}

/// Read up to `limit` bytes, stopping early at end of stream
fn read_at_most<R: Read>(reader: &mut R, limit: usize) -> Result<Vec<u8>> {
    let limit = u64::try_from(limit).unwrap_or(u64::MAX);
    let mut buf = Vec::new();
    reader.take(limit).read_to_end(&mut buf)?;
    Ok(buf)
}

fn parse_shape(shape: &str) -> Result<(usize, usize)> {
    let dims = shape
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(|d| {
            d.parse::<usize>()
                .map_err(|_| Error::persistence(format!("Invalid shape component '{d}'")))
        })
        .collect::<Result<Vec<_>>>()?;

    match dims.as_slice() {
        [rows, cols] => Ok((*rows, *cols)),
        _ => Err(Error::persistence(format!(
            "Expected a 2-D matrix, got shape ({shape})"
        ))),
    }
}
