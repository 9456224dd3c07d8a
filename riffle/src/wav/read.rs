use super::info::read::parse_info_list;
use super::{Acid, InfoList, SampleFormat, Sampler, Wav};
use crate::chunk::Chunks;
use crate::config::ParseOptions;
use crate::error::Result;
use crate::macros::{decode_err, err};

use std::io::{Read, Seek, SeekFrom};

use byteorder::{LittleEndian, ReadBytesExt};

// Verifies that the stream is a WAV file and returns the declared RIFF size
pub(super) fn verify_wav<T>(data: &mut T) -> Result<u32>
where
	T: Read,
{
	let mut id = [0; 12];
	data.read_exact(&mut id)?;

	if &id[..4] != b"RIFF" {
		decode_err!(@BAIL "WAV file doesn't contain a RIFF chunk");
	}

	if &id[8..] != b"WAVE" {
		decode_err!(@BAIL "Found RIFF file, format is not WAVE");
	}

	log::debug!("File verified to be WAV");
	Ok(u32::from_le_bytes(id[4..8].try_into().unwrap()))
}

struct FmtChunk {
	format_code: u16,
	num_channels: u16,
	sample_rate: u32,
	block_align: u16,
	bits_per_sample: u16,
}

fn read_fmt_chunk(fmt: &[u8]) -> Result<FmtChunk> {
	if fmt.len() < 16 {
		decode_err!(@BAIL "File does not contain a valid \"fmt \" chunk");
	}

	let mut reader = fmt;

	let format_code = reader.read_u16::<LittleEndian>()?;
	let num_channels = reader.read_u16::<LittleEndian>()?;
	let sample_rate = reader.read_u32::<LittleEndian>()?;
	let _bytes_per_second = reader.read_u32::<LittleEndian>()?;
	let block_align = reader.read_u16::<LittleEndian>()?;
	let bits_per_sample = reader.read_u16::<LittleEndian>()?;

	// Anything past the basic 16 bytes (extension size, channel masks, ...)
	// is not modeled and has already been consumed with the chunk content.

	Ok(FmtChunk {
		format_code,
		num_channels,
		sample_rate,
		block_align,
		bits_per_sample,
	})
}

fn decode_samples(fmt: &FmtChunk, format: SampleFormat, content: &[u8]) -> Result<Vec<Vec<f64>>> {
	let num_channels = usize::from(fmt.num_channels);
	if num_channels == 0 {
		decode_err!(@BAIL "File contains 0 channels");
	}

	let frame_width = num_channels * usize::from(format.bytes_per_sample());
	let block_align = usize::from(fmt.block_align);

	// The frame stride must cover one full frame, or the reads below would
	// overrun the payload length the channel buffers were sized from
	if block_align < frame_width {
		err!(SizeMismatch);
	}

	// A trailing partial frame is silently dropped
	let num_samples = content.len() / block_align;

	let mut channels = Vec::with_capacity(num_channels);
	for _ in 0..num_channels {
		channels.push(crate::util::alloc::fallible_vec_from_element(
			0.0_f64,
			num_samples,
		)?);
	}

	let mut reader = content;
	for i in 0..num_samples {
		for channel in &mut channels {
			channel[i] = format.read_sample(&mut reader)?;
		}
		// Skip any non-sample bytes the stride carries
		if block_align > frame_width {
			reader = &reader[block_align - frame_width..];
		}
	}

	Ok(channels)
}

pub(super) fn read_from<R>(data: &mut R, parse_options: ParseOptions) -> Result<Wav>
where
	R: Read + Seek,
{
	verify_wav(data)?;

	let current_pos = data.stream_position()?;
	let file_len = data.seek(SeekFrom::End(0))?;

	data.seek(SeekFrom::Start(current_pos))?;

	let mut chunks = Chunks::new(file_len);

	// The `fmt ` chunk must be seen before anything can be decoded
	let mut fmt = Vec::new();
	while let Ok(true) = chunks.next(data) {
		if &chunks.fourcc == b"fmt " {
			fmt = chunks.content(data)?;
			chunks.correct_position(data)?;
			break;
		}

		log::debug!(
			"Skipping chunk before \"fmt \": {}",
			String::from_utf8_lossy(&chunks.fourcc)
		);
		chunks.skip(data)?;
	}

	let fmt = read_fmt_chunk(&fmt)?;

	let mut format = None;
	let mut channels = Vec::new();
	let mut info: Option<InfoList> = None;
	let mut sampler = None;
	let mut acid = None;

	while let Ok(true) = chunks.next(data) {
		match &chunks.fourcc {
			b"data" if format.is_none() => {
				let resolved = SampleFormat::from_fmt(fmt.format_code, fmt.bits_per_sample)?;

				let content = chunks.content(data)?;
				chunks.correct_position(data)?;

				channels = decode_samples(&fmt, resolved, &content)?;
				format = Some(resolved);
			},
			b"LIST" if parse_options.read_metadata => {
				if chunks.size < 4 {
					decode_err!(@BAIL "Invalid LIST chunk size");
				}

				let content = chunks.content(data)?;
				chunks.correct_position(data)?;

				if &content[..4] == b"INFO" {
					parse_info_list(&content[4..], info.get_or_insert_with(InfoList::default))?;
				} else {
					log::debug!(
						"Skipping non-INFO LIST chunk: {}",
						String::from_utf8_lossy(&content[..4])
					);
				}
			},
			b"smpl" if parse_options.read_metadata => {
				// Whole-payload read keeps the walker aligned past any
				// loop table the declared size carries
				let content = chunks.content(data)?;
				chunks.correct_position(data)?;

				sampler = Some(Sampler::parse(&content)?);
			},
			b"acid" if parse_options.read_metadata => {
				let content = chunks.content(data)?;
				chunks.correct_position(data)?;

				acid = Some(Acid::parse(&content)?);
			},
			_ => {
				log::debug!(
					"Skipping chunk: {}",
					String::from_utf8_lossy(&chunks.fourcc)
				);
				chunks.skip(data)?;
			},
		}
	}

	let Some(format) = format else {
		decode_err!(@BAIL "File does not contain a \"data\" chunk");
	};

	Ok(Wav {
		channels,
		sample_rate: fmt.sample_rate,
		format,
		info,
		sampler,
		acid,
	})
}
