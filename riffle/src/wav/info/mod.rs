pub(super) mod read;
pub(super) mod write;

/// A RIFF `LIST`/`INFO` metadata list
///
/// This is a transparent bag of `(4-character key, raw bytes)` items: the
/// codec does not interpret key semantics (`IART`, `INAM`, ...). Items keep
/// their insertion order, and duplicate keys are allowed and kept separately.
///
/// Values are byte spans rather than strings; in practice they are almost
/// always NUL-padded ASCII text, which [`InfoList::get_str`] covers.
#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct InfoList {
	/// A collection of key-value pairs
	pub(crate) items: Vec<(String, Vec<u8>)>,
}

impl InfoList {
	/// Create a new empty `InfoList`
	///
	/// # Examples
	///
	/// ```rust
	/// use riffle::InfoList;
	///
	/// let info = InfoList::new();
	/// assert!(info.is_empty());
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Get an item by key
	pub fn get(&self, key: &str) -> Option<&[u8]> {
		self.items
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_slice())
	}

	/// Get an item by key, as UTF-8 text
	///
	/// Returns `None` if the item is missing or is not valid UTF-8.
	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.get(key).and_then(|v| std::str::from_utf8(v).ok())
	}

	/// Insert an item
	///
	/// NOTE: This will do nothing if `key` is invalid (anything other than
	/// 4 ASCII uppercase/digit characters)
	///
	/// This will case-insensitively replace any item with the same key
	///
	/// # Examples
	///
	/// ```rust
	/// use riffle::InfoList;
	///
	/// let mut info = InfoList::new();
	/// info.insert(String::from("INAM"), b"Foo title".to_vec());
	///
	/// assert_eq!(info.get_str("INAM"), Some("Foo title"));
	/// ```
	pub fn insert(&mut self, key: String, value: Vec<u8>) {
		if read::verify_key(key.as_str()) {
			self.items
				.iter()
				.position(|(k, _)| k.eq_ignore_ascii_case(key.as_str()))
				.map(|p| self.items.remove(p));
			self.items.push((key, value));
		}
	}

	/// Remove an item by key
	///
	/// This will case-insensitively remove an item with the key, returning it
	/// if it exists.
	pub fn remove(&mut self, key: &str) -> Option<Vec<u8>> {
		if let Some((_, value)) = self
			.items
			.iter()
			.position(|(k, _)| k.eq_ignore_ascii_case(key))
			.map(|p| self.items.remove(p))
		{
			return Some(value);
		}

		None
	}

	/// Returns the number of items
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Whether the list contains no items
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}

impl IntoIterator for InfoList {
	type Item = (String, Vec<u8>);
	type IntoIter = std::vec::IntoIter<Self::Item>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.into_iter()
	}
}

impl<'a> IntoIterator for &'a InfoList {
	type Item = &'a (String, Vec<u8>);
	type IntoIter = std::slice::Iter<'a, (String, Vec<u8>)>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::InfoList;

	#[test_log::test]
	fn insert_validates_keys() {
		let mut info = InfoList::new();

		info.insert(String::from("IART"), b"Bar artist".to_vec());
		info.insert(String::from("art"), b"rejected".to_vec());
		info.insert(String::from("TOOLONG"), b"rejected".to_vec());

		assert_eq!(info.len(), 1);
		assert_eq!(info.get_str("IART"), Some("Bar artist"));
	}

	#[test_log::test]
	fn insert_replaces_case_insensitively() {
		let mut info = InfoList::new();

		info.insert(String::from("INAM"), b"first".to_vec());
		info.insert(String::from("INAM"), b"second".to_vec());

		assert_eq!(info.len(), 1);
		assert_eq!(info.get_str("INAM"), Some("second"));
	}

	#[test_log::test]
	fn list_round_trip() {
		let mut info = InfoList::new();
		info.insert(String::from("INAM"), b"Test".to_vec());

		let mut bytes = Vec::new();
		super::write::create_info_list(&info, &mut bytes).unwrap();

		// LIST + size + "INFO" + (key + size + padded data)
		assert_eq!(bytes.len(), 8 + 4 + 12);

		// The declared LIST size: 4 (INFO) + 4 (key) + 4 (size) + 4 (padded data)
		assert_eq!(&bytes[4..8], 16_u32.to_le_bytes());

		let mut parsed = InfoList::new();
		super::read::parse_info_list(&bytes[12..], &mut parsed).unwrap();

		assert_eq!(parsed, info);
	}

	#[test_log::test]
	fn padding_stripped_on_read() {
		let mut info = InfoList::new();
		// 6 bytes of data, padded up to 8 on write
		info.insert(String::from("ICMT"), b"Qux co".to_vec());

		let mut bytes = Vec::new();
		super::write::create_info_list(&info, &mut bytes).unwrap();
		assert_eq!(&bytes[16..20], 8_u32.to_le_bytes());

		let mut parsed = InfoList::new();
		super::read::parse_info_list(&bytes[12..], &mut parsed).unwrap();

		assert_eq!(parsed.get("ICMT"), Some(&b"Qux co"[..]));
	}

	#[test_log::test]
	fn duplicate_keys_preserved_on_read() {
		// Two INAM sub-chunks, as some taggers produce
		let mut bytes = Vec::new();
		for value in [&b"one!"[..], &b"two!"[..]] {
			bytes.extend_from_slice(b"INAM");
			bytes.extend_from_slice(&4_u32.to_le_bytes());
			bytes.extend_from_slice(value);
		}

		let mut parsed = InfoList::new();
		super::read::parse_info_list(&bytes, &mut parsed).unwrap();

		assert_eq!(parsed.len(), 2);
	}

	#[test_log::test]
	fn empty_list_writes_nothing() {
		let mut bytes = Vec::new();
		super::write::create_info_list(&InfoList::new(), &mut bytes).unwrap();
		assert!(bytes.is_empty());
	}
}
