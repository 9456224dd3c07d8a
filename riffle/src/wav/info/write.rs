use super::InfoList;
use crate::error::Result;
use crate::macros::err;

use byteorder::{LittleEndian, WriteBytesExt};

// INFO sub-chunk values are padded to a 4-byte boundary, and unlike top-level
// chunks the declared size includes the padding.
fn padded_len(len: usize) -> usize {
	len.next_multiple_of(4)
}

pub(in crate::wav) fn create_info_list(list: &InfoList, bytes: &mut Vec<u8>) -> Result<()> {
	if list.items.is_empty() {
		log::debug!("No items to write, omitting INFO list");
		return Ok(());
	}

	let list_size = 4_usize
		+ list
			.items
			.iter()
			.map(|(_, v)| 8 + padded_len(v.len()))
			.sum::<usize>();

	if list_size > u32::MAX as usize {
		err!(TooMuchData);
	}

	bytes.extend_from_slice(b"LIST");
	bytes.write_u32::<LittleEndian>(list_size as u32)?;
	bytes.extend_from_slice(b"INFO");

	for (key, value) in &list.items {
		let padded = padded_len(value.len());

		bytes.extend_from_slice(key.as_bytes());
		bytes.write_u32::<LittleEndian>(padded as u32)?;
		bytes.extend_from_slice(value);
		bytes.resize(bytes.len() + (padded - value.len()), 0);
	}

	log::debug!("Created INFO list, size: {} bytes", list_size);

	Ok(())
}
