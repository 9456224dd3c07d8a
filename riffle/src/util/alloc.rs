use crate::error::Result;
use crate::macros::err;

// Sanity cap for allocations sized from untrusted chunk fields. A RIFF chunk
// size is a u32, so no real payload can ask for more elements than this.
const ALLOCATION_LIMIT: usize = u32::MAX as usize;

/// Creates a `Vec` of the specified length, containing copies of `element`.
///
/// This should be used through [`try_vec!`](crate::macros::try_vec)
pub(crate) fn fallible_vec_from_element<T>(element: T, expected_size: usize) -> Result<Vec<T>>
where
	T: Clone,
{
	if expected_size > ALLOCATION_LIMIT {
		err!(TooMuchData);
	}

	let mut v = Vec::new();
	v.try_reserve_exact(expected_size)?;
	v.resize(expected_size, element);

	Ok(v)
}

#[cfg(test)]
mod tests {
	use crate::util::alloc::fallible_vec_from_element;

	#[test_log::test]
	fn vec_fallible_repeat() {
		let u8_vec_len_20 = fallible_vec_from_element(0u8, 20).unwrap();
		assert_eq!(u8_vec_len_20.len(), 20);
		assert!(u8_vec_len_20.iter().all(|e| *e == 0));

		let f64_vec_len_89 = fallible_vec_from_element(0.0f64, 89).unwrap();
		assert_eq!(f64_vec_len_89.len(), 89);
		assert!(f64_vec_len_89.iter().all(|e| *e == 0.0));

		let oversized = fallible_vec_from_element(0u8, usize::MAX);
		assert!(oversized.is_err());
	}
}
