use range_traits::PartialEnum;

/// Keys that can be walked over.
///
/// `successor` defines the unit range `k..succ(k)` used for point lookups,
/// `advance` moves a key by a stride and `offset` by `n` strides at once.
/// They return `None` when the result is not representable.
pub trait Step: Ord + Clone {
	type Stride: Copy;

	/// Checks if `stride` moves keys upward.
	fn is_forward(stride: Self::Stride) -> bool;

	fn successor(&self) -> Option<Self>;

	fn advance(&self, stride: Self::Stride) -> Option<Self>;

	/// Key `n` strides away, computed in one step so that rounding errors do
	/// not add up.
	fn offset(&self, stride: Self::Stride, n: usize) -> Option<Self>;
}

macro_rules! impl_int_step {
	($($ty:ty),*) => {
		$(
			impl Step for $ty {
				type Stride = $ty;

				fn is_forward(stride: $ty) -> bool {
					stride > 0
				}

				fn successor(&self) -> Option<Self> {
					self.checked_add(1)
				}

				fn advance(&self, stride: $ty) -> Option<Self> {
					self.checked_add(stride)
				}

				fn offset(&self, stride: $ty, n: usize) -> Option<Self> {
					let n = <$ty>::try_from(n).ok()?;
					self.checked_add(stride.checked_mul(n)?)
				}
			}
		)*
	};
}

impl_int_step!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

const SURROGATES_START: u32 = 0xd800;
const SURROGATES_LEN: u32 = 0x800;

impl Step for char {
	type Stride = u32;

	fn is_forward(stride: u32) -> bool {
		stride > 0
	}

	fn successor(&self) -> Option<Self> {
		PartialEnum::succ(self)
	}

	/// Advance by `stride` scalar values, the surrogate block is not counted.
	fn advance(&self, stride: u32) -> Option<Self> {
		let code = *self as u32;
		let mut next = code.checked_add(stride)?;

		if code < SURROGATES_START && next >= SURROGATES_START {
			next = next.checked_add(SURROGATES_LEN)?;
		}

		char::from_u32(next)
	}

	fn offset(&self, stride: u32, n: usize) -> Option<Self> {
		let n = u32::try_from(n).ok()?;
		self.advance(stride.checked_mul(n)?)
	}
}

#[cfg(feature = "ordered-float")]
mod float {
	use super::Step;
	use ordered_float::OrderedFloat;

	macro_rules! impl_float_step {
		($ty:ident) => {
			/// The successor of `k` is `k + 1`.
			impl Step for OrderedFloat<$ty> {
				type Stride = $ty;

				fn is_forward(stride: $ty) -> bool {
					stride > 0.0
				}

				fn successor(&self) -> Option<Self> {
					self.advance(1.0)
				}

				fn advance(&self, stride: $ty) -> Option<Self> {
					let next = self.0 + stride;
					if next.is_finite() {
						Some(OrderedFloat(next))
					} else {
						None
					}
				}

				fn offset(&self, stride: $ty, n: usize) -> Option<Self> {
					self.advance(n as $ty * stride)
				}
			}
		};
	}

	impl_float_step!(f32);
	impl_float_step!(f64);
}
