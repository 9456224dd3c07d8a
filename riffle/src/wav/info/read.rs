use super::InfoList;
use crate::chunk::Chunks;
use crate::error::Result;
use crate::macros::decode_err;

use std::io::Cursor;

pub(in crate::wav) fn parse_info_list(data: &[u8], list: &mut InfoList) -> Result<()> {
	let mut cursor = Cursor::new(data);
	let mut chunks = Chunks::new(data.len() as u64);

	while matches!(chunks.next(&mut cursor), Ok(true)) {
		let key = std::str::from_utf8(&chunks.fourcc)
			.map_err(|_| decode_err!("INFO item key is not ASCII"))?;

		if !verify_key(key) {
			decode_err!(@BAIL "INFO item key contains invalid characters");
		}

		let key = key.to_owned();
		let value = chunks.content(&mut cursor)?;

		// Writers that pad values to an even length declare the unpadded size;
		// those that pad to 4 declare the padded one. Stay aligned for the
		// former, and strip the trailing NULs either way.
		chunks.correct_position(&mut cursor)?;
		let end = value.iter().rposition(|&b| b != 0).map_or(0, |p| p + 1);

		list.items.push((key, value[..end].to_vec()));
	}

	Ok(())
}

pub(super) fn verify_key(key: &str) -> bool {
	key.len() == 4
		&& key
			.chars()
			.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}
