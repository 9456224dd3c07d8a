use crate::error::Result;
use crate::macros::{err, try_vec};

use std::io::{Read, Seek, SeekFrom};

use byteorder::{LittleEndian, ReadBytesExt};

const RIFF_CHUNK_HEADER_SIZE: u64 = 8;

/// A sequential walker over the `(fourcc, u32 size, payload, optional pad)` chunks
/// of a RIFF stream.
///
/// `remaining_size` is an upper bound on the bytes left in the stream; it guards
/// declared chunk sizes that could never fit. Truncation inside a payload is
/// caught by the bounds-checked reads themselves.
pub(crate) struct Chunks {
	pub fourcc: [u8; 4],
	pub size: u32,
	remaining_size: u64,
}

impl Chunks {
	#[must_use]
	pub const fn new(stream_len: u64) -> Self {
		Self {
			fourcc: [0; 4],
			size: 0,
			remaining_size: stream_len,
		}
	}

	/// Advance to the next chunk header, returning `false` once fewer than 8 bytes remain
	pub fn next<R>(&mut self, data: &mut R) -> Result<bool>
	where
		R: Read,
	{
		if self.remaining_size < RIFF_CHUNK_HEADER_SIZE {
			return Ok(false);
		}

		data.read_exact(&mut self.fourcc)?;
		self.size = data.read_u32::<LittleEndian>()?;

		self.remaining_size = self.remaining_size.saturating_sub(RIFF_CHUNK_HEADER_SIZE);

		Ok(true)
	}

	/// Read the current chunk's entire declared payload
	pub fn content<R>(&mut self, data: &mut R) -> Result<Vec<u8>>
	where
		R: Read,
	{
		let size = u64::from(self.size);
		if size > self.remaining_size {
			err!(SizeMismatch);
		}

		let mut content = try_vec![0; size as usize];
		data.read_exact(&mut content)?;

		self.remaining_size = self.remaining_size.saturating_sub(size);
		Ok(content)
	}

	pub fn skip<R>(&mut self, data: &mut R) -> Result<()>
	where
		R: Read + Seek,
	{
		data.seek(SeekFrom::Current(i64::from(self.size)))?;
		self.remaining_size = self.remaining_size.saturating_sub(u64::from(self.size));

		self.correct_position(data)?;

		Ok(())
	}

	pub fn correct_position<R>(&mut self, data: &mut R) -> Result<()>
	where
		R: Read + Seek,
	{
		// Chunks are expected to start on even boundaries, and are padded
		// with a 0 if necessary. This pad byte is NOT included in the
		// chunk's size.
		if self.size % 2 != 0 {
			data.seek(SeekFrom::Current(1))?;
			self.remaining_size = self.remaining_size.saturating_sub(1);
		}

		Ok(())
	}
}
