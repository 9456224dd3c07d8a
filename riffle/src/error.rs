//! Contains the errors that can arise within riffle
//!
//! The primary error is [`RiffleError`]. The type of error is determined by [`ErrorKind`],
//! which can be extended at any time.

use std::collections::TryReserveError;
use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, RiffleError>`
pub type Result<T> = std::result::Result<T, RiffleError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	// Decoding errors
	/// A `RIFF`/`WAVE`/`fmt ` literal mismatch, or a required chunk was not found
	/// before the buffer was exhausted
	MalformedHeader(&'static str),
	/// A format tag/bit depth pairing outside the six supported combinations
	///
	/// See [`SampleFormat`](crate::SampleFormat) for the supported pairings.
	UnsupportedFormat {
		/// The `fmt ` chunk's format tag
		code: u16,
		/// The `fmt ` chunk's bits per sample
		bits_per_sample: u16,
	},
	/// A read would extend past the end of the buffer
	BufferUnderrun,
	/// A chunk's declared size cannot fit in the remaining buffer
	SizeMismatch,

	// Resource errors
	/// Attempting to read/write an abnormally large amount of data
	TooMuchData,
	/// Failure to allocate enough memory
	Alloc(TryReserveError),

	// Conversions for external errors
	/// Represents all cases of [`std::io::Error`], except for [`ErrorKind::BufferUnderrun`]
	Io(std::io::Error),
}

/// Errors that could occur within riffle
pub struct RiffleError {
	pub(crate) kind: ErrorKind,
}

impl RiffleError {
	/// Create a `RiffleError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use riffle::error::{ErrorKind, RiffleError};
	///
	/// let underrun = RiffleError::new(ErrorKind::BufferUnderrun);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use riffle::error::{ErrorKind, RiffleError};
	///
	/// let underrun = RiffleError::new(ErrorKind::BufferUnderrun);
	/// if let ErrorKind::BufferUnderrun = underrun.kind() {
	/// 	println!("Truncated input!");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl std::error::Error for RiffleError {}

impl Debug for RiffleError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<std::io::Error> for RiffleError {
	fn from(input: std::io::Error) -> Self {
		// An `UnexpectedEof` means a fixed-width read ran off the end of the
		// buffer, which is the codec's bounds check for truncated input.
		let kind = if input.kind() == std::io::ErrorKind::UnexpectedEof {
			ErrorKind::BufferUnderrun
		} else {
			ErrorKind::Io(input)
		};

		Self { kind }
	}
}

impl From<TryReserveError> for RiffleError {
	fn from(input: TryReserveError) -> Self {
		Self {
			kind: ErrorKind::Alloc(input),
		}
	}
}

impl Display for RiffleError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			// Conversions
			ErrorKind::Io(ref err) => write!(f, "{err}"),
			ErrorKind::Alloc(ref err) => write!(f, "{err}"),

			ErrorKind::MalformedHeader(message) => write!(f, "Malformed WAV: {message}"),
			ErrorKind::UnsupportedFormat {
				code,
				bits_per_sample,
			} => write!(
				f,
				"Unsupported sample format (format tag {code}, {bits_per_sample} bits per sample)"
			),
			ErrorKind::BufferUnderrun => {
				write!(f, "Attempted to read past the end of the buffer")
			},
			ErrorKind::SizeMismatch => write!(
				f,
				"Encountered an invalid chunk size, either too big or too small to be valid"
			),
			ErrorKind::TooMuchData => write!(
				f,
				"Attempted to read/write an abnormally large amount of data"
			),
		}
	}
}
