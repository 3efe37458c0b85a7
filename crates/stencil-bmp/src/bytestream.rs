//! Little endian byte source plumbing for the decoder.

use std::io::{Read, Result, Seek, SeekFrom};

/// A thin wrapper over a seekable byte source with the endian aware
/// reads BMP headers need.
///
/// Every read here is exact, a source that runs out of bytes mid-read
/// surfaces an [`UnexpectedEof`](std::io::ErrorKind::UnexpectedEof)
/// error instead of handing back a partially filled value.
pub(crate) struct ByteReader<T> {
    inner: T,
}

impl<T> ByteReader<T>
where
    T: Read + Seek,
{
    pub fn new(source: T) -> ByteReader<T> {
        ByteReader { inner: source }
    }

    /// Read a `u16` stored little endian.
    pub fn read_u16_le(&mut self) -> Result<u16> {
        let mut space = [0; 2];
        self.inner.read_exact(&mut space)?;
        Ok(u16::from_le_bytes(space))
    }

    /// Read a `u32` stored little endian.
    pub fn read_u32_le(&mut self) -> Result<u32> {
        let mut space = [0; 4];
        self.inner.read_exact(&mut space)?;
        Ok(u32::from_le_bytes(space))
    }

    /// Fill `buf` completely from the source.
    pub fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        self.inner.read_exact(buf)
    }

    /// Skip `num` bytes from the current position.
    pub fn skip(&mut self, num: i64) -> Result<()> {
        self.inner.seek(SeekFrom::Current(num)).map(|_| ())
    }

    /// Seek to `position` counted from the start of the source, regardless
    /// of where previous reads left it.
    pub fn set_position(&mut self, position: u64) -> Result<()> {
        self.inner.seek(SeekFrom::Start(position)).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::ByteReader;

    #[test]
    fn test_little_endian_reads() {
        let mut reader = ByteReader::new(Cursor::new([0x42, 0x4D, 0x01, 0x02, 0x03, 0x04]));

        assert_eq!(reader.read_u16_le().unwrap(), 0x4D42);
        assert_eq!(reader.read_u32_le().unwrap(), 0x04030201);
    }

    #[test]
    fn test_short_read_is_an_error() {
        let mut reader = ByteReader::new(Cursor::new([0xFF, 0xFF]));

        assert!(reader.read_u32_le().is_err());
    }

    #[test]
    fn test_set_position_is_absolute() {
        let mut reader = ByteReader::new(Cursor::new([0, 1, 2, 3, 4, 5, 6, 7]));

        reader.skip(5).unwrap();
        reader.set_position(4).unwrap();
        assert_eq!(reader.read_u32_le().unwrap(), 0x07060504);
    }
}
