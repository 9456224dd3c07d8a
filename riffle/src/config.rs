//! Options to control how riffle parses a file

/// Options to control how riffle parses a WAV stream
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
	pub(crate) read_metadata: bool,
}

impl Default for ParseOptions {
	/// The default implementation for `ParseOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ParseOptions {
	/// 	read_metadata: true,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ParseOptions {
	/// Creates a new `ParseOptions`, alias for `Default` implementation
	///
	/// See also: [`ParseOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use riffle::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			read_metadata: true,
		}
	}

	/// Whether or not to read the metadata chunks (`LIST`/`INFO`, `smpl`, `acid`)
	///
	/// The `fmt ` and `data` chunks are always read.
	///
	/// # Examples
	///
	/// ```rust
	/// use riffle::config::ParseOptions;
	///
	/// // By default, `read_metadata` is enabled. Here, we only care about the samples.
	/// let parsing_options = ParseOptions::new().read_metadata(false);
	/// ```
	pub fn read_metadata(&mut self, read_metadata: bool) -> Self {
		self.read_metadata = read_metadata;
		*self
	}
}
