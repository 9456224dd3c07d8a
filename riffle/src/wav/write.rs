use super::info::write::create_info_list;
use super::{Acid, Sampler, Wav};
use crate::error::{ErrorKind, Result, RiffleError};

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

pub(super) fn dump_to<W>(wav: &Wav, writer: &mut W) -> Result<()>
where
	W: Write,
{
	let format = wav.format;
	let bytes_per_sample = u32::from(format.bytes_per_sample());

	let num_channels = u16::try_from(wav.channels.len())
		.map_err(|_| RiffleError::new(ErrorKind::TooMuchData))?;

	// Shorter channels are zero-padded up to the longest during emission
	let num_samples = wav.channels.iter().map(Vec::len).max().unwrap_or(0);
	let num_samples =
		u32::try_from(num_samples).map_err(|_| RiffleError::new(ErrorKind::TooMuchData))?;

	let block_align = u16::try_from(bytes_per_sample * u32::from(num_channels))
		.map_err(|_| RiffleError::new(ErrorKind::TooMuchData))?;

	let data_size = u64::from(num_samples) * u64::from(block_align);

	let mut info_bytes = Vec::new();
	if let Some(info) = &wav.info {
		create_info_list(info, &mut info_bytes)?;
	}

	// The RIFF size field counts everything after itself: "WAVE", the full
	// `fmt ` chunk (8 + 16), the `data` chunk header, and the padded payload
	let mut file_size = 36 + data_size + (data_size % 2);
	if format.is_float() {
		file_size += 12;
	}
	if wav.sampler.is_some() {
		file_size += u64::from(8 + Sampler::CHUNK_SIZE);
	}
	if wav.acid.is_some() {
		file_size += u64::from(8 + Acid::CHUNK_SIZE);
	}
	file_size += info_bytes.len() as u64;

	let file_size =
		u32::try_from(file_size).map_err(|_| RiffleError::new(ErrorKind::TooMuchData))?;
	let data_size = data_size as u32;

	writer.write_all(b"RIFF")?;
	writer.write_u32::<LittleEndian>(file_size)?;
	writer.write_all(b"WAVE")?;

	writer.write_all(b"fmt ")?;
	writer.write_u32::<LittleEndian>(16)?;
	writer.write_u16::<LittleEndian>(format.format_tag())?;
	writer.write_u16::<LittleEndian>(num_channels)?;
	writer.write_u32::<LittleEndian>(wav.sample_rate)?;
	writer.write_u32::<LittleEndian>(u32::from(block_align).saturating_mul(wav.sample_rate))?;
	writer.write_u16::<LittleEndian>(block_align)?;
	writer.write_u16::<LittleEndian>(format.bits_per_sample())?;

	// Float formats conventionally carry a `fact` chunk with the frame count
	if format.is_float() {
		writer.write_all(b"fact")?;
		writer.write_u32::<LittleEndian>(4)?;
		writer.write_u32::<LittleEndian>(num_samples)?;
	}

	if let Some(sampler) = &wav.sampler {
		writer.write_all(b"smpl")?;
		writer.write_u32::<LittleEndian>(Sampler::CHUNK_SIZE)?;
		sampler.dump_to(writer)?;
	}

	if let Some(acid) = &wav.acid {
		writer.write_all(b"acid")?;
		writer.write_u32::<LittleEndian>(Acid::CHUNK_SIZE)?;
		acid.dump_to(writer)?;
	}

	// The INFO list embeds its own LIST header (and is empty for an empty list)
	writer.write_all(&info_bytes)?;

	writer.write_all(b"data")?;
	writer.write_u32::<LittleEndian>(data_size)?;

	for i in 0..num_samples as usize {
		for channel in &wav.channels {
			let sample = channel.get(i).copied().unwrap_or(0.0);
			format.write_sample(writer, sample)?;
		}
	}

	// Chunks are padded to even byte boundaries; the pad is not counted
	// in the declared size
	if data_size % 2 != 0 {
		writer.write_u8(0)?;
	}

	log::debug!("Wrote WAV file, size: {} bytes", u64::from(file_size) + 8);

	Ok(())
}
