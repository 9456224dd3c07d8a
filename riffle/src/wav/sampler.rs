use crate::error::Result;
use crate::macros::decode_err;

use std::io::Write;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

/// The nine header fields of a `smpl` chunk
///
/// Loop-point sub-records that may follow the header are not modeled; their
/// bytes are skipped on read and never written back.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct Sampler {
	pub manufacturer: u32,
	pub product: u32,
	pub sample_period: u32,
	pub root_note: u32,
	pub pitch_fraction: u32,
	pub smpte_format: u32,
	pub smpte_offset: u32,
	pub sample_loops: u32,
	pub sampler_data: u32,
}

impl Sampler {
	/// The fixed byte length of the modeled header
	pub(crate) const CHUNK_SIZE: u32 = 36;

	/// Parse the header from a `smpl` chunk's payload
	///
	/// Any payload bytes past the 36-byte header (loop tables) are ignored.
	pub(crate) fn parse(data: &[u8]) -> Result<Self> {
		if data.len() < Self::CHUNK_SIZE as usize {
			decode_err!(@BAIL "\"smpl\" chunk too short");
		}

		let mut reader = data;
		Ok(Self {
			manufacturer: reader.read_u32::<LittleEndian>()?,
			product: reader.read_u32::<LittleEndian>()?,
			sample_period: reader.read_u32::<LittleEndian>()?,
			root_note: reader.read_u32::<LittleEndian>()?,
			pitch_fraction: reader.read_u32::<LittleEndian>()?,
			smpte_format: reader.read_u32::<LittleEndian>()?,
			smpte_offset: reader.read_u32::<LittleEndian>()?,
			sample_loops: reader.read_u32::<LittleEndian>()?,
			sampler_data: reader.read_u32::<LittleEndian>()?,
		})
	}

	pub(crate) fn dump_to<W>(&self, writer: &mut W) -> Result<()>
	where
		W: Write,
	{
		writer.write_u32::<LittleEndian>(self.manufacturer)?;
		writer.write_u32::<LittleEndian>(self.product)?;
		writer.write_u32::<LittleEndian>(self.sample_period)?;
		writer.write_u32::<LittleEndian>(self.root_note)?;
		writer.write_u32::<LittleEndian>(self.pitch_fraction)?;
		writer.write_u32::<LittleEndian>(self.smpte_format)?;
		writer.write_u32::<LittleEndian>(self.smpte_offset)?;
		writer.write_u32::<LittleEndian>(self.sample_loops)?;
		writer.write_u32::<LittleEndian>(self.sampler_data)?;

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::Sampler;

	#[test_log::test]
	fn header_layout() {
		let sampler = Sampler {
			manufacturer: 0x47,
			root_note: 60,
			sample_loops: 1,
			..Sampler::default()
		};

		let mut bytes = Vec::new();
		sampler.dump_to(&mut bytes).unwrap();
		assert_eq!(bytes.len() as u32, Sampler::CHUNK_SIZE);

		// Fixed field offsets: root note at 0x0C, loop count at 0x1C
		assert_eq!(&bytes[0x0C..0x10], 60_u32.to_le_bytes());
		assert_eq!(&bytes[0x1C..0x20], 1_u32.to_le_bytes());

		assert_eq!(Sampler::parse(&bytes).unwrap(), sampler);
	}

	#[test_log::test]
	fn trailing_loop_table_ignored() {
		let mut bytes = Vec::new();
		Sampler::default().dump_to(&mut bytes).unwrap();

		// A single 24-byte loop record after the header
		bytes.extend_from_slice(&[0xAB; 24]);

		assert_eq!(Sampler::parse(&bytes).unwrap(), Sampler::default());
	}

	#[test_log::test]
	fn short_chunk_rejected() {
		assert!(Sampler::parse(&[0; 35]).is_err());
	}
}
