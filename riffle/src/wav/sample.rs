use crate::error::{ErrorKind, Result, RiffleError};

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

pub(crate) const PCM: u16 = 0x0001;
pub(crate) const IEEE_FLOAT: u16 = 0x0003;

/// The sample encoding of a WAV file's `data` chunk
///
/// Only the basic uncompressed encodings are supported: linear PCM
/// (format tag 1) at 8, 16, 24, or 32 bits per sample, and IEEE float
/// (format tag 3) at 32 or 64 bits per sample. Any other pairing fails
/// with [`ErrorKind::UnsupportedFormat`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SampleFormat {
	/// Unsigned 8-bit PCM (stored offset by 128)
	Pcm8,
	/// Signed 16-bit PCM
	Pcm16,
	/// Signed 24-bit PCM
	Pcm24,
	/// Signed 32-bit PCM
	Pcm32,
	/// 32-bit IEEE float
	Float32,
	/// 64-bit IEEE float
	Float64,
}

impl SampleFormat {
	/// Resolve a format from a `fmt ` chunk's format tag and bit depth
	///
	/// # Errors
	///
	/// [`ErrorKind::UnsupportedFormat`] for any pairing outside the six
	/// supported combinations.
	///
	/// # Examples
	///
	/// ```rust
	/// use riffle::SampleFormat;
	///
	/// assert_eq!(SampleFormat::from_fmt(1, 16)?, SampleFormat::Pcm16);
	/// assert_eq!(SampleFormat::from_fmt(3, 32)?, SampleFormat::Float32);
	///
	/// // 12-bit PCM does not exist in the wild
	/// assert!(SampleFormat::from_fmt(1, 12).is_err());
	/// # Ok::<(), riffle::error::RiffleError>(())
	/// ```
	pub fn from_fmt(code: u16, bits_per_sample: u16) -> Result<Self> {
		match (code, bits_per_sample) {
			(PCM, 8) => Ok(Self::Pcm8),
			(PCM, 16) => Ok(Self::Pcm16),
			(PCM, 24) => Ok(Self::Pcm24),
			(PCM, 32) => Ok(Self::Pcm32),
			(IEEE_FLOAT, 32) => Ok(Self::Float32),
			(IEEE_FLOAT, 64) => Ok(Self::Float64),
			_ => Err(RiffleError::new(ErrorKind::UnsupportedFormat {
				code,
				bits_per_sample,
			})),
		}
	}

	/// The format tag written to the `fmt ` chunk (1 = PCM, 3 = IEEE float)
	pub const fn format_tag(self) -> u16 {
		match self {
			Self::Pcm8 | Self::Pcm16 | Self::Pcm24 | Self::Pcm32 => PCM,
			Self::Float32 | Self::Float64 => IEEE_FLOAT,
		}
	}

	/// Bits per sample
	pub const fn bits_per_sample(self) -> u16 {
		match self {
			Self::Pcm8 => 8,
			Self::Pcm16 => 16,
			Self::Pcm24 => 24,
			Self::Pcm32 | Self::Float32 => 32,
			Self::Float64 => 64,
		}
	}

	/// Bytes per sample for a single channel
	pub const fn bytes_per_sample(self) -> u16 {
		self.bits_per_sample() / 8
	}

	/// Whether this is one of the IEEE float formats
	pub const fn is_float(self) -> bool {
		matches!(self, Self::Float32 | Self::Float64)
	}

	/// Decode one sample, consuming exactly [`Self::bytes_per_sample`] bytes
	///
	/// Integer formats are scaled to the nominal `[-1.0, 1.0]` range; float
	/// formats are returned verbatim.
	pub(crate) fn read_sample<R>(self, data: &mut R) -> Result<f64>
	where
		R: Read,
	{
		let sample = match self {
			// 8-bit WAV is unsigned, stored offset by 128
			Self::Pcm8 => (f64::from(data.read_u8()?) - 128.0) / 128.0,
			Self::Pcm16 => f64::from(data.read_i16::<LittleEndian>()?) / 32_768.0,
			Self::Pcm24 => f64::from(data.read_i24::<LittleEndian>()?) / 8_388_608.0,
			Self::Pcm32 => f64::from(data.read_i32::<LittleEndian>()?) / 2_147_483_648.0,
			Self::Float32 => f64::from(data.read_f32::<LittleEndian>()?),
			Self::Float64 => data.read_f64::<LittleEndian>()?,
		};

		Ok(sample)
	}

	/// Encode one sample, producing exactly [`Self::bytes_per_sample`] bytes
	///
	/// Integer formats are scaled back up, rounded to nearest, and clamped to
	/// the representable range, so inputs outside `[-1.0, 1.0]` cannot wrap.
	/// Float formats are written unscaled and unclamped.
	pub(crate) fn write_sample<W>(self, writer: &mut W, sample: f64) -> Result<()>
	where
		W: Write,
	{
		match self {
			Self::Pcm8 => {
				let quantized = ((sample * 128.0).round() + 128.0).clamp(0.0, 255.0);
				writer.write_u8(quantized as u8)?;
			},
			Self::Pcm16 => {
				let quantized = (sample * 32_768.0).round().clamp(-32_768.0, 32_767.0);
				writer.write_i16::<LittleEndian>(quantized as i16)?;
			},
			Self::Pcm24 => {
				let quantized = (sample * 8_388_608.0)
					.round()
					.clamp(-8_388_608.0, 8_388_607.0);
				writer.write_i24::<LittleEndian>(quantized as i32)?;
			},
			Self::Pcm32 => {
				let quantized = (sample * 2_147_483_648.0)
					.round()
					.clamp(-2_147_483_648.0, 2_147_483_647.0);
				writer.write_i32::<LittleEndian>(quantized as i32)?;
			},
			Self::Float32 => writer.write_f32::<LittleEndian>(sample as f32)?,
			Self::Float64 => writer.write_f64::<LittleEndian>(sample)?,
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::SampleFormat;

	fn round_trip(format: SampleFormat, sample: f64) -> f64 {
		let mut bytes = Vec::new();
		format.write_sample(&mut bytes, sample).unwrap();
		assert_eq!(bytes.len(), usize::from(format.bytes_per_sample()));

		format.read_sample(&mut &bytes[..]).unwrap()
	}

	#[test_log::test]
	fn pcm8_quantization_edges() {
		let mut bytes = Vec::new();
		for sample in [0.0, 1.0, -1.0] {
			SampleFormat::Pcm8.write_sample(&mut bytes, sample).unwrap();
		}

		// 0.0 sits at the unsigned midpoint; full scale clamps to the byte range
		assert_eq!(bytes, [128, 255, 0]);
	}

	#[test_log::test]
	fn integer_formats_clamp_out_of_range_input() {
		for format in [
			SampleFormat::Pcm8,
			SampleFormat::Pcm16,
			SampleFormat::Pcm24,
			SampleFormat::Pcm32,
		] {
			let decoded = round_trip(format, 1.5);
			assert!((decoded - 1.0).abs() < 1e-2, "{format:?}: {decoded}");
		}
	}

	#[test_log::test]
	fn float_formats_preserve_out_of_range_input() {
		assert_eq!(round_trip(SampleFormat::Float32, 1.5), 1.5);
		assert_eq!(round_trip(SampleFormat::Float64, -2.25), -2.25);
	}

	#[test_log::test]
	fn round_trip_tolerance() {
		let inputs = [-1.0, -0.5, -0.127, 0.0, 0.33, 0.9999, 1.0];

		for format in [
			SampleFormat::Pcm8,
			SampleFormat::Pcm16,
			SampleFormat::Pcm24,
			SampleFormat::Pcm32,
			SampleFormat::Float32,
			SampleFormat::Float64,
		] {
			let tolerance = if format.is_float() {
				1e-7
			} else {
				1.0 / f64::from(1_u32 << (format.bits_per_sample() - 1))
			};

			for input in inputs {
				let decoded = round_trip(format, input);
				assert!(
					(decoded - input).abs() <= tolerance,
					"{format:?}: {input} -> {decoded}"
				);
			}
		}
	}

	#[test_log::test]
	fn unsupported_pairings_rejected() {
		for (code, bits) in [(1, 12), (1, 64), (3, 16), (2, 16), (0, 0)] {
			assert!(SampleFormat::from_fmt(code, bits).is_err());
		}
	}
}
