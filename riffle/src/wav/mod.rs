//! WAV specific items

mod acid;
mod info;
pub(crate) mod read;
mod sample;
mod sampler;
pub(crate) mod write;

// Exports
pub use acid::Acid;
pub use info::InfoList;
pub use sample::SampleFormat;
pub use sampler::Sampler;

use crate::config::ParseOptions;
use crate::error::Result;

use std::fs;
use std::io::{Cursor, Read, Seek, Write};
use std::path::Path;

/// A WAV file
///
/// Channel data is stored non-interleaved: one `Vec<f64>` of normalized
/// samples per channel. All channels share one sample rate and one
/// [`SampleFormat`]; their lengths may differ, in which case shorter channels
/// are zero-padded up to the longest when the file is written.
#[derive(Debug, Clone, PartialEq)]
pub struct Wav {
	pub(crate) channels: Vec<Vec<f64>>,
	pub(crate) sample_rate: u32,
	pub(crate) format: SampleFormat,
	pub(crate) info: Option<InfoList>,
	pub(crate) sampler: Option<Sampler>,
	pub(crate) acid: Option<Acid>,
}

impl Wav {
	/// Create a new `Wav` from per-channel samples
	///
	/// Samples are expected in the nominal `[-1.0, 1.0]` range; integer
	/// formats clamp anything outside it during encoding.
	///
	/// # Examples
	///
	/// ```rust
	/// use riffle::{SampleFormat, Wav};
	///
	/// let left = vec![0.0, 0.25, 0.5];
	/// let right = vec![0.0, -0.25, -0.5];
	///
	/// let wav = Wav::new(vec![left, right], 48_000, SampleFormat::Pcm24);
	/// assert_eq!(wav.channels().len(), 2);
	/// ```
	#[must_use]
	pub const fn new(channels: Vec<Vec<f64>>, sample_rate: u32, format: SampleFormat) -> Self {
		Self {
			channels,
			sample_rate,
			format,
			info: None,
			sampler: None,
			acid: None,
		}
	}

	/// Read a WAV file from a reader
	///
	/// # Errors
	///
	/// * The stream is not a RIFF/WAVE stream, or is missing its `fmt ` or
	///   `data` chunk ([`ErrorKind::MalformedHeader`](crate::error::ErrorKind::MalformedHeader))
	/// * The format tag/bit depth pairing is not supported
	///   ([`ErrorKind::UnsupportedFormat`](crate::error::ErrorKind::UnsupportedFormat))
	/// * The stream is truncated
	///   ([`ErrorKind::BufferUnderrun`](crate::error::ErrorKind::BufferUnderrun))
	pub fn read_from<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Self>
	where
		R: Read + Seek,
	{
		read::read_from(reader, parse_options)
	}

	/// Read a WAV file from a byte buffer, with default [`ParseOptions`]
	///
	/// # Errors
	///
	/// Same as [`Wav::read_from`]
	pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
		Self::read_from(&mut Cursor::new(bytes), ParseOptions::new())
	}

	/// Read a WAV file from a path, with default [`ParseOptions`]
	///
	/// # Errors
	///
	/// Same as [`Wav::read_from`], plus [`ErrorKind::Io`](crate::error::ErrorKind::Io)
	/// on underlying storage errors
	///
	/// # Examples
	///
	/// ```rust,no_run
	/// # fn main() -> riffle::error::Result<()> {
	/// use riffle::Wav;
	///
	/// let wav = Wav::read_from_path("drumloop.wav")?;
	/// # Ok(())
	/// # }
	/// ```
	pub fn read_from_path(path: impl AsRef<Path>) -> Result<Self> {
		let bytes = fs::read(path)?;
		Self::from_bytes(&bytes)
	}

	/// Write the file to a writer
	///
	/// # Errors
	///
	/// * The writer's underlying sink fails
	/// * A size exceeds what the container can represent
	///   ([`ErrorKind::TooMuchData`](crate::error::ErrorKind::TooMuchData))
	pub fn dump_to<W>(&self, writer: &mut W) -> Result<()>
	where
		W: Write,
	{
		write::dump_to(self, writer)
	}

	/// Encode the file into a byte buffer
	///
	/// # Errors
	///
	/// Same as [`Wav::dump_to`]
	pub fn to_vec(&self) -> Result<Vec<u8>> {
		let mut bytes = Vec::new();
		self.dump_to(&mut bytes)?;
		Ok(bytes)
	}

	/// Write the file to a path
	///
	/// # Errors
	///
	/// Same as [`Wav::dump_to`], plus [`ErrorKind::Io`](crate::error::ErrorKind::Io)
	/// on underlying storage errors
	pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
		fs::write(path, self.to_vec()?)?;
		Ok(())
	}

	/// The per-channel sample data
	pub fn channels(&self) -> &[Vec<f64>] {
		&self.channels
	}

	/// Mutable access to the per-channel sample data
	pub fn channels_mut(&mut self) -> &mut Vec<Vec<f64>> {
		&mut self.channels
	}

	/// Consume the file, returning its per-channel sample data
	pub fn into_channels(self) -> Vec<Vec<f64>> {
		self.channels
	}

	/// Sample rate (Hz)
	pub fn sample_rate(&self) -> u32 {
		self.sample_rate
	}

	/// The sample encoding of the `data` chunk
	pub fn format(&self) -> SampleFormat {
		self.format
	}

	/// Change the sample encoding used when the file is written
	///
	/// Sample data is unaffected; it is re-quantized from the normalized
	/// representation on the next write.
	pub fn set_format(&mut self, format: SampleFormat) {
		self.format = format;
	}

	/// The `LIST`/`INFO` metadata, if present
	pub fn info(&self) -> Option<&InfoList> {
		self.info.as_ref()
	}

	/// Insert or replace the `LIST`/`INFO` metadata
	pub fn set_info(&mut self, info: InfoList) {
		self.info = Some(info);
	}

	/// Take the `LIST`/`INFO` metadata, if present
	pub fn remove_info(&mut self) -> Option<InfoList> {
		self.info.take()
	}

	/// The `smpl` chunk header, if present
	pub fn sampler(&self) -> Option<&Sampler> {
		self.sampler.as_ref()
	}

	/// Insert or replace the `smpl` chunk header
	pub fn set_sampler(&mut self, sampler: Sampler) {
		self.sampler = Some(sampler);
	}

	/// Take the `smpl` chunk header, if present
	pub fn remove_sampler(&mut self) -> Option<Sampler> {
		self.sampler.take()
	}

	/// The `acid` chunk, if present
	pub fn acid(&self) -> Option<&Acid> {
		self.acid.as_ref()
	}

	/// Insert or replace the `acid` chunk
	pub fn set_acid(&mut self, acid: Acid) {
		self.acid = Some(acid);
	}

	/// Take the `acid` chunk, if present
	pub fn remove_acid(&mut self) -> Option<Acid> {
		self.acid.take()
	}

	/// Mix all channels down to one, averaging frame by frame
	///
	/// Channels shorter than the longest contribute silence past their end.
	///
	/// # Examples
	///
	/// ```rust
	/// use riffle::{SampleFormat, Wav};
	///
	/// let wav = Wav::new(
	/// 	vec![vec![1.0, 0.0], vec![0.0, 0.0]],
	/// 	44_100,
	/// 	SampleFormat::Float32,
	/// );
	///
	/// assert_eq!(wav.to_mono(), vec![0.5, 0.0]);
	/// ```
	pub fn to_mono(&self) -> Vec<f64> {
		let num_channels = self.channels.len();
		if num_channels == 0 {
			return Vec::new();
		}

		let num_samples = self.channels.iter().map(Vec::len).max().unwrap_or(0);

		(0..num_samples)
			.map(|i| {
				self.channels
					.iter()
					.map(|channel| channel.get(i).copied().unwrap_or(0.0))
					.sum::<f64>() / num_channels as f64
			})
			.collect()
	}
}
