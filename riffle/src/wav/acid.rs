use crate::error::Result;
use crate::macros::decode_err;

use std::io::Write;

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};

/// The tempo stored in an `acid` chunk
///
/// The chunk's five leading fields (type flags, root note, an unused pair,
/// and the beat/meter counts) are read and discarded on decode, and written
/// as zero on encode. Only the tempo survives a round-trip.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Acid {
	/// Tempo in beats per minute
	pub bpm: f32,
}

impl Acid {
	/// The fixed byte length of the modeled chunk
	pub(crate) const CHUNK_SIZE: u32 = 24;

	/// Parse an `acid` chunk's payload
	///
	/// Any payload bytes past the fixed 24-byte layout are ignored.
	pub(crate) fn parse(data: &[u8]) -> Result<Self> {
		if data.len() < Self::CHUNK_SIZE as usize {
			decode_err!(@BAIL "\"acid\" chunk too short");
		}

		// Five u32 fields precede the tempo
		let bpm = LittleEndian::read_f32(&data[20..24]);

		Ok(Self { bpm })
	}

	pub(crate) fn dump_to<W>(&self, writer: &mut W) -> Result<()>
	where
		W: Write,
	{
		for _ in 0..5 {
			writer.write_u32::<LittleEndian>(0)?;
		}
		writer.write_f32::<LittleEndian>(self.bpm)?;

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::Acid;

	#[test_log::test]
	fn bpm_survives_round_trip() {
		let acid = Acid { bpm: 128.5 };

		let mut bytes = Vec::new();
		acid.dump_to(&mut bytes).unwrap();
		assert_eq!(bytes.len() as u32, Acid::CHUNK_SIZE);

		// Reserved fields are always zeroed
		assert!(bytes[..20].iter().all(|&b| b == 0));

		assert_eq!(Acid::parse(&bytes).unwrap(), acid);
	}

	#[test_log::test]
	fn reserved_fields_discarded() {
		let mut bytes = vec![0xFF; 20];
		bytes.extend_from_slice(&120.0_f32.to_le_bytes());

		assert_eq!(Acid::parse(&bytes).unwrap(), Acid { bpm: 120.0 });
	}

	#[test_log::test]
	fn short_chunk_rejected() {
		assert!(Acid::parse(&[0; 23]).is_err());
	}
}
