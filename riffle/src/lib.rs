//! Read and write RIFF/WAVE audio files.
//!
//! Samples are exposed as normalized 64-bit floats in `[-1.0, 1.0]`, regardless of the
//! on-disk bit depth. Supported sample formats are 8/16/24/32-bit integer PCM and
//! 32/64-bit IEEE float. The optional `smpl`, `acid`, and `LIST`/`INFO` metadata chunks
//! are modeled; any other chunk is skipped on read and never re-emitted on write.
//!
//! # Examples
//!
//! ## Reading a file
//!
//! ```rust,no_run
//! # fn main() -> riffle::error::Result<()> {
//! use riffle::Wav;
//!
//! let wav = Wav::read_from_path("drumloop.wav")?;
//!
//! println!(
//! 	"{} Hz, {} channel(s), {:?}",
//! 	wav.sample_rate(),
//! 	wav.channels().len(),
//! 	wav.format()
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Creating a file from scratch
//!
//! ```rust
//! # fn main() -> riffle::error::Result<()> {
//! use riffle::{SampleFormat, Wav};
//!
//! // One second of silence
//! let samples = vec![0.0; 44_100];
//! let wav = Wav::new(vec![samples], 44_100, SampleFormat::Pcm16);
//!
//! let bytes = wav.to_vec()?;
//! assert_eq!(&bytes[..4], b"RIFF");
//! # Ok(())
//! # }
//! ```

pub(crate) mod chunk;
pub mod config;
pub mod error;
pub(crate) mod macros;
mod util;
pub mod wav;

pub use wav::{Acid, InfoList, SampleFormat, Sampler, Wav};
