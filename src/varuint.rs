//! Variable-width unsigned integer type.

//	These lint checks are unnecessary in this module because:
//	  1. Every loop takes its range from the chunk count of the backing Vec,
//	     so all indexing is bounded by construction.
//	  2. Using .get() would add unnecessary runtime checks and make the code
//	     more verbose with .unwrap()s.
#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "We always know the size"
)]

//	This lint check is unnecessary in this module because these arithmetic
//	operations are actually essential parts of our logic. We don't want to add
//	unnecessary checks when we know the operations are safe, or potentially hide
//	actual issues we should catch. We also want to emulate the Rust standard
//	library behaviour.
#![allow(clippy::arithmetic_side_effects, reason = "Needs to emulate Rust standard library behaviour")]



//		Modules																											

#[cfg(test)]
#[path = "tests/varuint.rs"]
mod tests;



//		Packages																										

use crate::bits::{self, Bit};
use crate::errors::{ArithmeticError, ConversionError};
use bytes::BytesMut;
use core::{
	cmp::Ordering,
	error::Error,
	fmt::{Binary, Debug, Display, Formatter, LowerHex, Octal, UpperHex, self},
	hash::{Hash, Hasher},
	iter::{Product, Sum},
	mem::size_of,
	ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr, ShrAssign},
	str::FromStr,
};
use serde::{
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
	de::{Error as SerdeError, Visitor},
};
use serde_json::Error as JsonError;
use std::io::{Error as IoError, ErrorKind as IoErrorKind};
use tokio_postgres::types::{FromSql, IsNull, ToSql, Type, to_sql_checked};



//		Structs																											

//		DivisionResult															
/// The quotient and remainder produced by a single division.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DivisionResult {
	/// The quotient of the division.
	pub quotient:  VarUint,

	/// The remainder of the division.
	pub remainder: VarUint,
}

//		VarUint																	
/// A variable-width unsigned integer.
///
/// This type provides an unsigned integer whose width is chosen at
/// construction time, as a number of bytes, rather than being fixed by the
/// type. All arithmetic is performed modulo `2^(8 × width)`, so an instance
/// behaves exactly like a fixed-width unsigned integer of that many bytes:
/// addition and multiplication wrap silently, and subtracting a larger value
/// from a smaller one wraps around at the wider operand's modulus.
///
/// # Width
///
/// The width is a soft capacity rather than a type-level property:
///
///   - Binary operations between instances of different widths promote to the
///     wider width, treating the missing high chunks of the narrower operand
///     as zero, and produce a result of the combined width.
///   - [`assign()`](VarUint::assign()) resizes the target to the larger of
///     the two widths involved, zero-extended. It never shrinks.
///   - Comparisons, equality, and hashing are width-independent: a 1-byte
///     instance holding 255 is equal to (and hashes the same as) a 4-byte
///     instance holding 255.
///
/// A width of zero is legal and holds the value zero.
///
/// # Arithmetic
///
/// All operations are implemented over the 8-bit chunks directly, with
/// explicit carry and borrow propagation, so no operation depends on a native
/// integer type wider than the chunks themselves:
///
///   1. Addition and subtraction ripple a carry/borrow across the chunks.
///   2. Multiplication is double-and-add (Russian peasant) over single-bit
///      shifts.
///   3. Division and modulus share one restoring binary long division that
///      produces a [`DivisionResult`].
///
/// Division by zero returns an error from [`div_rem()`](VarUint::div_rem())
/// and [`None`] from the checked forms; the `/` and `%` operators panic, as
/// with the standard integer types.
///
/// # Conversion
///
/// Primitives convert in via [`From`], producing an instance of the
/// primitive's own byte width; this single promotion path also powers the
/// mixed-type comparison and arithmetic operators. Conversions out are
/// [`TryFrom`], failing with [`ConversionError::ValueTooLarge`] when the
/// value does not fit the target.
///
/// # Internal representation
///
/// The value is stored as a sequence of bytes in little-endian order (least
/// significant byte first). Within each byte, bits are ordered from least
/// significant (bit 0) to most significant (bit 7), so bit operations use
/// zero-based indices where bit 0 is the least-significant bit of the first
/// byte, bit 8 is the least-significant bit of the second byte, and so on.
///
/// ```text
/// Value:     0x1234
/// In memory: [0x34, 0x12]
///
/// Byte 0:    0011 0100  (bits 0-7)   LSB
/// Byte 1:    0001 0010  (bits 8-15)  MSB
/// ```
///
#[derive(Clone, Default)]
pub struct VarUint(Vec<u8>);

//󰭅		VarUint																	
impl VarUint {
	//		Constructors														

	//		new																	
	/// Creates a new [`VarUint`] of the given width, holding zero.
	///
	/// # Parameters
	///
	/// * `number_of_bytes` - The width of the backing storage, which fixes the
	///                       modulus of all arithmetic performed on the
	///                       instance at `2^(8 × number_of_bytes)`.
	///
	#[must_use]
	pub fn new(number_of_bytes: usize) -> Self {
		Self(vec![0; number_of_bytes])
	}

	//		Public methods														

	//		as_slice															
	/// Represents the internal value as a slice of bytes, in little-endian
	/// order.
	#[must_use]
	pub fn as_slice(&self) -> &[u8] {
		self.0.as_slice()
	}

	//		assign																
	/// Assigns the value of another instance to this one.
	///
	/// The width becomes the larger of the two widths involved: assigning a
	/// narrower value into a wider instance keeps the wider width, with the
	/// high chunks zeroed, while assigning a wider value grows this instance
	/// to match. Assignment never shrinks the width.
	///
	/// # Parameters
	///
	/// * `source` - The instance to copy the value from.
	///
	pub fn assign(&mut self, source: &Self) {
		if source.0.len() > self.0.len() {
			self.0.resize(source.0.len(), 0);
		}
		self.0.fill(0);
		self.0[..source.0.len()].copy_from_slice(&source.0);
	}

	//		bit																	
	/// Gets the state of a specific bit.
	///
	/// Returns [`Bit::Zero`] if the position is out of range.
	///
	/// # Parameters
	///
	/// * `pos` - The position of the bit to get, where `0` is the
	///           least-significant bit.
	///
	#[must_use]
	pub fn bit(&self, pos: usize) -> Bit {
		bits::get_bit(&self.0, pos).unwrap_or(Bit::Zero)
	}

	//		checked_div															
	/// Checked division.
	///
	/// Computes `self / rhs`, returning [`None`] if `rhs` is zero.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	#[must_use]
	pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
		self.div_rem(rhs).ok().map(|result| result.quotient)
	}

	//		checked_rem															
	/// Checked remainder.
	///
	/// Computes `self % rhs`, returning [`None`] if `rhs` is zero.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	#[must_use]
	pub fn checked_rem(&self, rhs: &Self) -> Option<Self> {
		self.div_rem(rhs).ok().map(|result| result.remainder)
	}

	//		decrement															
	/// Decrements the value in place by one, wrapping at zero, and returns
	/// the mutated instance.
	///
	/// # See also
	///
	/// * [`post_decrement()`](VarUint::post_decrement())
	///
	pub fn decrement(&mut self) -> &mut Self {
		*self = self.wrapping_sub(&Self::from(1_u8));
		self
	}

	//		div_rem																
	/// Computes the quotient and remainder of `self / divisor` in a single
	/// pass of restoring binary long division.
	///
	/// One quotient bit is produced per bit of `self`, most significant
	/// first: the running remainder is shifted left by one, the next bit of
	/// `self` is inserted into its low bit, and whenever the remainder
	/// reaches the divisor it is reduced and the corresponding quotient bit
	/// set. Both results are sized to the wider of the two operands.
	///
	/// # Parameters
	///
	/// * `divisor` - The value to divide `self` by.
	///
	/// # Errors
	///
	/// Returns an error if `divisor` is zero.
	///
	pub fn div_rem(&self, divisor: &Self) -> Result<DivisionResult, ArithmeticError> {
		if divisor.is_zero() {
			return Err(ArithmeticError::DivisionByZero);
		}

		let width = self.0.len().max(divisor.0.len());

		//	Dividing by one is an identity operation
		if *divisor == Self::from(1_u8) {
			return Ok(DivisionResult {
				quotient:  self.resized(width),
				remainder: Self::new(width),
			});
		}

		let mut quotient  = Self::new(width);
		//	One chunk wider than the result, so the shift-and-insert step
		//	cannot drop the remainder's top bit
		let mut remainder = Self::new(width + 1);

		//	Process one bit of the dividend at a time, most significant first
		for i in (0..self.0.len() * 8).rev() {
			//	Shift the remainder left by one and insert the next bit of
			//	the dividend
			remainder.shl_one();
			if self.bit(i).is_set() {
				_ = remainder.set_bit(0, Bit::One);
			}

			//	If the remainder has reached the divisor, subtract and set
			//	the quotient bit
			if remainder >= *divisor {
				remainder = remainder.borrowing_sub(divisor);
				_ = quotient.set_bit(i, Bit::One);
			}
		}

		remainder.0.truncate(width);

		Ok(DivisionResult { quotient, remainder })
	}

	//		from_be_bytes()														
	/// Creates a [`VarUint`] from big-endian bytes.
	///
	/// As this type uses little-endian storage internally, this reverses the
	/// bytes. The width of the result is the length of the slice.
	///
	/// # Parameters
	///
	/// * `bytes` - The big-endian bytes to create the [`VarUint`] from.
	///
	#[must_use]
	pub fn from_be_bytes(bytes: &[u8]) -> Self {
		Self(bytes.iter().rev().copied().collect())
	}

	//		from_json															
	/// Deserialises a JSON string into a [`VarUint`].
	///
	/// # Parameters
	///
	/// * `json` - The JSON string to deserialise.
	///
	/// # Errors
	///
	/// If the JSON string is invalid, or the number inside the JSON is
	/// invalid, then an error will be returned.
	///
	pub fn from_json(json: &str) -> Result<Self, JsonError> {
		serde_json::from_str(json)
	}

	//		from_le_bytes()														
	/// Creates a [`VarUint`] from little-endian bytes.
	///
	/// As this type uses little-endian storage internally, this is a direct
	/// copy of the provided bytes. The width of the result is the length of
	/// the slice.
	///
	/// # Parameters
	///
	/// * `bytes` - The little-endian bytes to create the [`VarUint`] from.
	///
	#[must_use]
	pub fn from_le_bytes(bytes: &[u8]) -> Self {
		Self(bytes.to_vec())
	}

	//		increment															
	/// Increments the value in place by one, wrapping at the maximum, and
	/// returns the mutated instance.
	///
	/// # See also
	///
	/// * [`post_increment()`](VarUint::post_increment())
	///
	pub fn increment(&mut self) -> &mut Self {
		*self = self.wrapping_add(&Self::from(1_u8));
		self
	}

	//		into_vec()															
	/// Consumes the value and returns the internal bytes, in little-endian
	/// order.
	#[must_use]
	pub fn into_vec(self) -> Vec<u8> {
		self.0
	}

	//		is_empty															
	/// Determines if the width is zero.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	//		is_zero																
	/// Determines if the value is zero.
	#[must_use]
	pub fn is_zero(&self) -> bool {
		self.0.iter().all(|&byte| byte == 0)
	}

	//		len																	
	/// The width of the instance, in bytes.
	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	//		max_value															
	/// The maximum value representable at this instance's width, i.e. an
	/// instance of the same width with every chunk set to `0xFF`.
	#[must_use]
	pub fn max_value(&self) -> Self {
		Self(vec![0xFF; self.0.len()])
	}

	//		overflowing_add														
	/// Overflowing addition.
	///
	/// Computes `self + rhs` at the wider of the two widths, returning a
	/// tuple of the wrapped result and a boolean indicating whether a carry
	/// was dropped beyond the result width.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to add to `self`.
	///
	#[expect(clippy::cast_possible_truncation, reason = "Lower 8 bits are the chunk, upper bits are the carry")]
	#[must_use]
	pub fn overflowing_add(&self, rhs: &Self) -> (Self, bool) {
		let width      = self.0.len().max(rhs.0.len());
		let mut result = Self::new(width);
		let mut carry  = 0_u16;

		//	Add chunks with carry, in an accumulator wide enough to hold
		//	chunk max plus one
		for i in 0..width {
			let sum     = u16::from(self.chunk(i)) + u16::from(rhs.chunk(i)) + carry;
			result.0[i] = (sum & 0xFF) as u8;
			carry       = sum >> 8_i32;
		}

		(result, carry != 0)
	}

	//		overflowing_mul														
	/// Overflowing multiplication.
	///
	/// Computes `self * rhs` at the wider of the two widths, returning a
	/// tuple of the wrapped result and a boolean indicating whether any
	/// product bits were dropped beyond the result width.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to multiply `self` by.
	///
	#[must_use]
	pub fn overflowing_mul(&self, rhs: &Self) -> (Self, bool) {
		let width = self.0.len().max(rhs.0.len());

		//	Multiply with room for every product bit, then truncate, so the
		//	dropped chunks are visible
		let mut full = self.peasant_mul(rhs, self.0.len() + rhs.0.len());
		let overflow = full.0.get(width..).is_some_and(|high| high.iter().any(|&byte| byte != 0));
		full.0.truncate(width);

		(full, overflow)
	}

	//		overflowing_sub														
	/// Overflowing subtraction.
	///
	/// Computes `self - rhs` at the wider of the two widths, returning a
	/// tuple of the result and a boolean indicating whether the subtraction
	/// wrapped around at that width's modulus.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to subtract from `self`.
	///
	#[must_use]
	pub fn overflowing_sub(&self, rhs: &Self) -> (Self, bool) {
		if *rhs > *self {
			//	Wrap around relative to the wider operand's modulus
			let width      = self.0.len().max(rhs.0.len());
			let difference = rhs.borrowing_sub(self);
			let result     = Self(vec![0xFF; width]).borrowing_sub(&difference).wrapping_add(&Self::from(1_u8));
			(result, true)
		} else {
			(self.borrowing_sub(rhs), false)
		}
	}

	//		post_decrement														
	/// Decrements the value in place by one, wrapping at zero, and returns a
	/// snapshot of the value prior to mutation.
	///
	/// # See also
	///
	/// * [`decrement()`](VarUint::decrement())
	///
	#[must_use]
	pub fn post_decrement(&mut self) -> Self {
		let snapshot = self.clone();
		_ = self.decrement();
		snapshot
	}

	//		post_increment														
	/// Increments the value in place by one, wrapping at the maximum, and
	/// returns a snapshot of the value prior to mutation.
	///
	/// # See also
	///
	/// * [`increment()`](VarUint::increment())
	///
	#[must_use]
	pub fn post_increment(&mut self) -> Self {
		let snapshot = self.clone();
		_ = self.increment();
		snapshot
	}

	//		set_bit																
	/// Sets the state of a specific bit.
	///
	/// Returns `false` if the position is out of range, without changing
	/// anything.
	///
	/// # Parameters
	///
	/// * `pos`   - The position of the bit to set, where `0` is the
	///             least-significant bit.
	/// * `value` - The state to set the bit to.
	///
	pub fn set_bit(&mut self, pos: usize, value: Bit) -> bool {
		bits::set_bit(&mut self.0, pos, value).is_ok()
	}

	//		significant_bytes													
	/// The number of bytes actually needed to represent the value, ignoring
	/// high zero chunks. Zero has no significant bytes.
	#[must_use]
	pub fn significant_bytes(&self) -> usize {
		self.0.iter().rposition(|&byte| byte != 0).map_or(0, |index| index + 1)
	}

	//		to_be_bytes()														
	/// Returns the bytes in big-endian order.
	///
	/// As this type uses little-endian storage internally, this reverses the
	/// bytes before returning.
	///
	#[must_use]
	pub fn to_be_bytes(&self) -> Vec<u8> {
		self.0.iter().rev().copied().collect()
	}

	//		to_json																
	/// Serialises this value to a JSON string.
	///
	/// # Errors
	///
	/// If the number cannot be serialised for whatever reason, an error will
	/// be returned. In reality this should be infallible.
	///
	pub fn to_json(&self) -> Result<String, JsonError> {
		serde_json::to_string(self)
	}

	//		to_le_bytes()														
	/// Returns the bytes in little-endian order.
	///
	/// As this type uses little-endian storage internally, this is a direct
	/// copy of the internal representation.
	///
	#[must_use]
	pub fn to_le_bytes(&self) -> Vec<u8> {
		self.0.clone()
	}

	//		try_set																
	/// Sets the value from a native unsigned primitive, without changing the
	/// width.
	///
	/// All chunks are zeroed and the primitive's bytes written in
	/// little-endian order. Any unsigned primitive can be passed through the
	/// [`u128`] promotion.
	///
	/// # Parameters
	///
	/// * `value` - The value to set.
	///
	/// # Errors
	///
	/// Returns an error if the value's significant bytes exceed this
	/// instance's width. The value is left untouched in that case; use
	/// [`wrapping_set()`](VarUint::wrapping_set()) to truncate instead.
	///
	pub fn try_set(&mut self, value: u128) -> Result<(), ConversionError> {
		let bytes = value.to_le_bytes();
		let count = self.0.len().min(bytes.len());

		if bytes[count..].iter().any(|&byte| byte != 0) {
			return Err(ConversionError::ValueTooLarge);
		}

		self.0.fill(0);
		self.0[..count].copy_from_slice(&bytes[..count]);
		Ok(())
	}

	//		wrapping_add														
	/// Wrapping addition.
	///
	/// Computes `self + rhs` at the wider of the two widths, wrapping around
	/// at that width's numeric bounds: a final carry beyond the result width
	/// is silently dropped.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to add to `self`.
	///
	#[must_use]
	pub fn wrapping_add(&self, rhs: &Self) -> Self {
		self.overflowing_add(rhs).0
	}

	//		wrapping_mul														
	/// Wrapping multiplication.
	///
	/// Computes `self * rhs` at the wider of the two widths, wrapping around
	/// at that width's numeric bounds.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to multiply `self` by.
	///
	#[must_use]
	pub fn wrapping_mul(&self, rhs: &Self) -> Self {
		self.peasant_mul(rhs, self.0.len().max(rhs.0.len()))
	}

	//		wrapping_neg														
	/// Wrapping negation.
	///
	/// Computes the two's complement of the value within its own width, by
	/// inverting all bits and adding one.
	///
	#[must_use]
	pub fn wrapping_neg(&self) -> Self {
		let mut result = Self::new(self.0.len());
		//	Add 1 for two's complement
		let mut carry  = 1_u8;

		for i in 0..self.0.len() {
			let (sum, new_carry) = (!self.0[i]).overflowing_add(carry);
			result.0[i] = sum;
			carry       = u8::from(new_carry);
		}

		result
	}

	//		wrapping_set														
	/// Sets the value from a native unsigned primitive, without changing the
	/// width, truncating any bytes beyond it.
	///
	/// This is the explicitly-lossy counterpart of
	/// [`try_set()`](VarUint::try_set()).
	///
	/// # Parameters
	///
	/// * `value` - The value to set.
	///
	pub fn wrapping_set(&mut self, value: u128) {
		let bytes = value.to_le_bytes();
		let count = self.0.len().min(bytes.len());

		self.0.fill(0);
		self.0[..count].copy_from_slice(&bytes[..count]);
	}

	//		wrapping_shl														
	/// Wrapping left shift.
	///
	/// Shifts the value left one bit at a time, `rhs` times, within its own
	/// width. Bits shifted beyond the top chunk are lost.
	///
	/// # Parameters
	///
	/// * `rhs` - The number of bit positions to shift by.
	///
	#[must_use]
	pub fn wrapping_shl(&self, rhs: u32) -> Self {
		let mut result = self.clone();

		for _ in 0..rhs {
			if result.is_zero() {
				break;
			}
			result.shl_one();
		}

		result
	}

	//		wrapping_shr														
	/// Wrapping right shift.
	///
	/// Shifts the value right one bit at a time, `rhs` times, within its own
	/// width. Bits shifted beyond the bottom chunk are lost.
	///
	/// # Parameters
	///
	/// * `rhs` - The number of bit positions to shift by.
	///
	#[must_use]
	pub fn wrapping_shr(&self, rhs: u32) -> Self {
		let mut result = self.clone();

		for _ in 0..rhs {
			if result.is_zero() {
				break;
			}
			result.shr_one();
		}

		result
	}

	//		wrapping_sub														
	/// Wrapping subtraction.
	///
	/// Computes `self - rhs` at the wider of the two widths. When `rhs` is
	/// greater than `self`, the result wraps around relative to the wider
	/// operand's modulus, i.e. it is `(max_value - (rhs - self)) + 1`.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to subtract from `self`.
	///
	#[must_use]
	pub fn wrapping_sub(&self, rhs: &Self) -> Self {
		self.overflowing_sub(rhs).0
	}

	//		Private methods														

	//		borrowing_sub														
	/// Ripple-borrow subtraction, for callers that have already established
	/// `self >= rhs`.
	///
	/// Works low-to-high: whenever a chunk difference goes negative, the
	/// first nonzero chunk above it is decremented, every chunk in between is
	/// set to its maximum, and the chunk modulus is added back into the local
	/// difference.
	///
	#[expect(clippy::cast_possible_truncation, reason = "Bounded to 0..=255 after the borrow")]
	#[expect(clippy::cast_sign_loss,           reason = "Bounded to 0..=255 after the borrow")]
	fn borrowing_sub(&self, rhs: &Self) -> Self {
		let width      = self.0.len().max(rhs.0.len());
		let mut result = self.resized(width);

		for i in 0..width {
			let mut difference = i16::from(result.0[i]) - i16::from(rhs.chunk(i));

			if difference < 0 {
				//	Borrow from the first nonzero chunk above, setting every
				//	chunk in between to its maximum
				let mut j = i + 1;
				while result.0[j] == 0 {
					result.0[j] = 0xFF;
					j += 1;
				}
				result.0[j] -= 1;
				difference  += 0x100;
			}

			result.0[i] = difference as u8;
		}

		result
	}

	//		chunk																
	/// The chunk at the given index, reading zero beyond the width.
	fn chunk(&self, index: usize) -> u8 {
		self.0.get(index).copied().unwrap_or(0)
	}

	//		peasant_mul															
	/// Russian peasant multiplication at the given width: one operand is
	/// repeatedly halved and the other doubled, summing the doublings that
	/// line up with odd halvings. The truncating shifts keep every
	/// intermediate within the result width, which is what makes the result
	/// correctly modular.
	fn peasant_mul(&self, rhs: &Self, width: usize) -> Self {
		let mut result = Self::new(width);

		if self.is_zero() || rhs.is_zero() {
			return result;
		}

		let mut doubled = self.resized(width);
		let mut halved  = rhs.resized(width);

		while !halved.is_zero() {
			if halved.bit(0).is_set() {
				result = result.wrapping_add(&doubled);
			}
			halved.shr_one();
			doubled.shl_one();
		}

		result
	}

	//		resized																
	/// A copy of the value grown to the given width, zero-extended. Callers
	/// never pass a width below the current one.
	fn resized(&self, width: usize) -> Self {
		let mut result = self.clone();
		result.0.resize(width, 0);
		result
	}

	//		shl_one																
	/// Shifts the value left by a single bit, in place.
	fn shl_one(&mut self) {
		let top = self.0.len().saturating_sub(1);

		//	Walk from the most-significant chunk down, so each chunk's top
		//	bit can be carried into the already-shifted chunk above it
		for i in (0..self.0.len()).rev() {
			if i < top && self.bit((i * 8) + 7).is_set() {
				_ = self.set_bit((i + 1) * 8, Bit::One);
			}
			self.0[i] <<= 1_i32;
		}
	}

	//		shr_one																
	/// Shifts the value right by a single bit, in place.
	fn shr_one(&mut self) {
		//	Walk from the least-significant chunk up, so each chunk's low
		//	bit can be carried into the already-shifted chunk below it
		for i in 0..self.0.len() {
			if i > 0 && self.bit(i * 8).is_set() {
				_ = self.set_bit((i * 8) - 1, Bit::One);
			}
			self.0[i] >>= 1_i32;
		}
	}
}

//󰭅		Add																		
impl Add for &VarUint {
	type Output = VarUint;

	//		add																	
	fn add(self, rhs: Self) -> Self::Output {
		self.wrapping_add(rhs)
	}
}

//󰭅		AddAssign																
impl AddAssign<&Self> for VarUint {
	//		add_assign															
	fn add_assign(&mut self, rhs: &Self) {
		*self = self.wrapping_add(rhs);
	}
}

//󰭅		Binary																	
impl Binary for VarUint {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if f.alternate() {
			write!(f, "0b")?;
		}

		//	Find first non-zero byte (or last byte if all zero)
		let mut start = self.0.len().saturating_sub(1);
		while start > 0 && self.0[start] == 0 {
			start -= 1;
		}

		//	Handle first byte without leading zeros
		write!(f, "{:b}", self.chunk(start))?;

		//	Handle remaining bytes with full width
		for &byte in self.0[..start].iter().rev() {
			write!(f, "{byte:08b}")?;
		}

		Ok(())
	}
}

//󰭅		BitAnd																	
impl BitAnd for &VarUint {
	type Output = VarUint;

	//		bitand																
	fn bitand(self, rhs: Self) -> Self::Output {
		let width      = self.0.len().max(rhs.0.len());
		let mut result = VarUint::new(width);

		for i in 0..width {
			result.0[i] = self.chunk(i) & rhs.chunk(i);
		}

		result
	}
}

//󰭅		BitAndAssign															
impl BitAndAssign<&Self> for VarUint {
	//		bitand_assign														
	fn bitand_assign(&mut self, rhs: &Self) {
		*self = &*self & rhs;
	}
}

//󰭅		BitOr																	
impl BitOr for &VarUint {
	type Output = VarUint;

	//		bitor																
	fn bitor(self, rhs: Self) -> Self::Output {
		let width      = self.0.len().max(rhs.0.len());
		let mut result = VarUint::new(width);

		for i in 0..width {
			result.0[i] = self.chunk(i) | rhs.chunk(i);
		}

		result
	}
}

//󰭅		BitOrAssign																
impl BitOrAssign<&Self> for VarUint {
	//		bitor_assign														
	fn bitor_assign(&mut self, rhs: &Self) {
		*self = &*self | rhs;
	}
}

//󰭅		BitXor																	
impl BitXor for &VarUint {
	type Output = VarUint;

	//		bitxor																
	fn bitxor(self, rhs: Self) -> Self::Output {
		let width      = self.0.len().max(rhs.0.len());
		let mut result = VarUint::new(width);

		for i in 0..width {
			result.0[i] = self.chunk(i) ^ rhs.chunk(i);
		}

		result
	}
}

//󰭅		BitXorAssign															
impl BitXorAssign<&Self> for VarUint {
	//		bitxor_assign														
	fn bitxor_assign(&mut self, rhs: &Self) {
		*self = &*self ^ rhs;
	}
}

//󰭅		Debug																	
impl Debug for VarUint {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		//	Standard format - VarUint<width>(value)
		write!(f, "VarUint<{}>({})", self.0.len(), self)?;

		//	For alternate formatting (#), show the chunk bytes
		if f.alternate() {
			write!(f, " [")?;
			for (i, byte) in self.0.iter().enumerate() {
				if i > 0 {
					write!(f, ", ")?;
				}
				write!(f, "0x{byte:02x}")?;
			}
			write!(f, "]")?;
		}

		Ok(())
	}
}

//󰭅		Deserialize																
impl<'de> Deserialize<'de> for VarUint {
	//		deserialize															
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			//	If the format is human-readable, accept both numbers and strings
			deserializer.deserialize_any(VarUintVisitor)
		} else {
			//	For binary formats, expect raw bytes
			deserializer.deserialize_bytes(BytesVisitor)
		}
	}
}

//󰭅		Display																	
impl Display for VarUint {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		//	Handle zero case
		if self.is_zero() {
			return write!(f, "0");
		}

		//	Convert to decimal digits by repeated division
		let ten           = Self::from(10_u8);
		let mut digits    = Vec::new();
		let mut remaining = self.clone();

		while !remaining.is_zero() {
			let Ok(result) = remaining.div_rem(&ten) else {
				return Err(fmt::Error);
			};
			digits.push(match char::from_digit(u32::from(result.remainder.chunk(0)), 10) {
				Some(d) => d,
				None    => return Err(fmt::Error),
			});
			remaining = result.quotient;
		}

		//	Write digits in reverse order
		for digit in digits.iter().rev() {
			write!(f, "{digit}")?;
		}

		Ok(())
	}
}

//󰭅		Div																		
impl Div for &VarUint {
	type Output = VarUint;

	//		div																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn div(self, rhs: Self) -> Self::Output {
		assert!(!rhs.is_zero(), "Attempt to divide by zero");
		self.checked_div(rhs).expect("Attempt to divide by zero")
	}
}

//󰭅		DivAssign																
impl DivAssign<&Self> for VarUint {
	//		div_assign															
	fn div_assign(&mut self, rhs: &Self) {
		*self = &*self / rhs;
	}
}

//󰭅		FromSql																	
impl<'a> FromSql<'a> for VarUint {
	//		from_sql															
	fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::INT2 => Self::try_from(i16::from_sql(ty, raw)?).map_err(Into::into),
			&Type::INT4 => Self::try_from(i32::from_sql(ty, raw)?).map_err(Into::into),
			&Type::INT8 => Self::try_from(i64::from_sql(ty, raw)?).map_err(Into::into),
			&Type::TEXT => Ok(
				String::from_utf8(raw.to_vec()).map_err(Box::new)?.parse::<Self>().map_err(Box::new)?
			),
			unknown     => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for VarUint: {unknown}"),
			))),
		}
	}

	//		accepts																
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT)
	}
}

//󰭅		FromStr																	
impl FromStr for VarUint {
	type Err = ConversionError;

	//		from_str															
	#[expect(clippy::integer_division, reason = "Precision is not needed here")]
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();

		if trimmed.is_empty() {
			return Err(ConversionError::EmptyValue);
		}

		//	A sign is never valid for an unsigned value, but a minus is
		//	rejected distinctly from arbitrary garbage
		let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
		if unsigned.starts_with('-') {
			return Err(ConversionError::ValueIsNegative);
		}

		//	Handle different bases
		#[expect(clippy::option_if_let_else, reason = "Clearer to read as if-let-else")]
		let (digits, radix) =
			if        let Some(rest) = unsigned.strip_prefix("0x").or_else(|| unsigned.strip_prefix("0X")) {
				(rest, 16)
			} else if let Some(rest) = unsigned.strip_prefix("0b").or_else(|| unsigned.strip_prefix("0B")) {
				(rest, 2)
			} else if let Some(rest) = unsigned.strip_prefix("0o").or_else(|| unsigned.strip_prefix("0O")) {
				(rest, 8)
			} else {
				(unsigned, 10)
			}
		;

		if digits.is_empty() {
			return Err(ConversionError::EmptyValue);
		}

		//	Size the accumulator for the worst case of the digit count, and
		//	trim back to the significant bytes afterwards
		let bits_per_digit: usize = match radix {
			2 => 1,
			8 => 3,
			_ => 4,
		};
		let width = ((digits.len() * bits_per_digit) + 7) / 8;

		let mut result  = Self::new(width.max(1));
		let radix_value = Self::from(radix);

		for c in digits.chars() {
			let digit = match c {
				'0'..='9' => c as u8 - b'0',
				'a'..='f' => c as u8 - b'a' + 10,
				'A'..='F' => c as u8 - b'A' + 10,
				'_'       => continue,  //  Allow underscores between digits
				_         => return Err(ConversionError::InvalidDigit(c)),
			};

			if digit >= radix {
				return Err(ConversionError::InvalidRadix(c, radix));
			}

			result = result.wrapping_mul(&radix_value).wrapping_add(&Self::from(digit));
		}

		result.0.truncate(result.significant_bytes().max(1));

		Ok(result)
	}
}

//󰭅		Hash																	
impl Hash for VarUint {
	//		hash																
	//	Equality is width-independent, so hashing must ignore high zero chunks
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.0[..self.significant_bytes()].hash(state);
	}
}

//󰭅		LowerHex																
impl LowerHex for VarUint {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if f.alternate() {
			write!(f, "0x")?;
		}

		//	Find first non-zero byte (or last byte if all zero)
		let mut start = self.0.len().saturating_sub(1);
		while start > 0 && self.0[start] == 0 {
			start -= 1;
		}

		//	Handle first byte without leading zeros
		write!(f, "{:x}", self.chunk(start))?;

		//	Handle remaining bytes with full width
		for &byte in self.0[..start].iter().rev() {
			write!(f, "{byte:02x}")?;
		}

		Ok(())
	}
}

//󰭅		Mul																		
impl Mul for &VarUint {
	type Output = VarUint;

	//		mul																	
	fn mul(self, rhs: Self) -> Self::Output {
		self.wrapping_mul(rhs)
	}
}

//󰭅		MulAssign																
impl MulAssign<&Self> for VarUint {
	//		mul_assign															
	fn mul_assign(&mut self, rhs: &Self) {
		*self = self.wrapping_mul(rhs);
	}
}

//󰭅		Neg																		
impl Neg for VarUint {
	type Output = Self;

	//		neg																	
	fn neg(self) -> Self::Output {
		self.wrapping_neg()
	}
}

//󰭅		Neg<&>																	
impl Neg for &VarUint {
	type Output = VarUint;

	//		neg																	
	fn neg(self) -> Self::Output {
		self.wrapping_neg()
	}
}

//󰭅		Not																		
impl Not for VarUint {
	type Output = Self;

	//		not																	
	fn not(self) -> Self::Output {
		!&self
	}
}

//󰭅		Not<&>																	
impl Not for &VarUint {
	type Output = VarUint;

	//		not																	
	fn not(self) -> Self::Output {
		VarUint(self.0.iter().map(|&byte| !byte).collect())
	}
}

//󰭅		Octal																	
impl Octal for VarUint {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if f.alternate() {
			write!(f, "0o")?;
		}

		//	Handle zero case
		if self.is_zero() {
			return write!(f, "0");
		}

		//	Convert to octal digits by repeated division
		let eight         = Self::from(8_u8);
		let mut digits    = Vec::new();
		let mut remaining = self.clone();

		while !remaining.is_zero() {
			let Ok(result) = remaining.div_rem(&eight) else {
				return Err(fmt::Error);
			};
			digits.push(match char::from_digit(u32::from(result.remainder.chunk(0)), 8) {
				Some(d) => d,
				None    => return Err(fmt::Error),
			});
			remaining = result.quotient;
		}

		//	Write digits in reverse order
		for &digit in digits.iter().rev() {
			write!(f, "{digit}")?;
		}

		Ok(())
	}
}

//󰭅		Ord																		
impl Ord for VarUint {
	//		cmp																	
	fn cmp(&self, other: &Self) -> Ordering {
		let width = self.0.len().max(other.0.len());

		//	Scan from the most-significant position of the union of both
		//	widths: the first differing chunk decides, and zero-extension
		//	makes leading padding from a width difference irrelevant
		for i in (0..width).rev() {
			match self.chunk(i).cmp(&other.chunk(i)) {
				Ordering::Equal => {},
				unequal         => return unequal,
			}
		}

		Ordering::Equal
	}
}

//󰭅		PartialEq																
impl PartialEq for VarUint {
	//		eq																	
	fn eq(&self, other: &Self) -> bool {
		//	Chunks compare over the overlap, and the extra high chunks of the
		//	wider operand must all be zero, which makes equality
		//	width-independent
		let width = self.0.len().max(other.0.len());
		(0..width).all(|i| self.chunk(i) == other.chunk(i))
	}
}

//󰭅		Eq																		
impl Eq for VarUint {}

//󰭅		PartialOrd																
impl PartialOrd for VarUint {
	//		partial_cmp															
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

//󰭅		Product																	
impl Product for VarUint {
	//		product																
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::from(1_u8), |acc, x| &acc * &x)
	}
}

//󰭅		Product<&>																
impl<'a> Product<&'a Self> for VarUint {
	//		product																
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::from(1_u8), |acc, x| &acc * x)
	}
}

//󰭅		Rem																		
impl Rem for &VarUint {
	type Output = VarUint;

	//		rem																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn rem(self, rhs: Self) -> Self::Output {
		assert!(!rhs.is_zero(), "Attempt to calculate remainder with a divisor of zero");
		self.checked_rem(rhs).expect("Attempt to calculate remainder with a divisor of zero")
	}
}

//󰭅		RemAssign																
impl RemAssign<&Self> for VarUint {
	//		rem_assign															
	fn rem_assign(&mut self, rhs: &Self) {
		*self = &*self % rhs;
	}
}

//󰭅		Serialize																
impl Serialize for VarUint {
	//		serialize															
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		if serializer.is_human_readable() {
			//	For JSON and similar formats, serialise as number if it fits
			if let Ok(value) = u64::try_from(self) {
				return serializer.serialize_u64(value);
			}
			//	Fall back to string for larger numbers
			serializer.serialize_str(&self.to_string())
		} else {
			//	For binary formats, serialise the raw chunk bytes
			serializer.serialize_bytes(&self.0)
		}
	}
}

//󰭅		Shl																		
impl Shl<u32> for &VarUint {
	type Output = VarUint;

	//		shl																	
	fn shl(self, rhs: u32) -> Self::Output {
		self.wrapping_shl(rhs)
	}
}

//󰭅		Shl<&VarUint>															
impl Shl<&VarUint> for &VarUint {
	type Output = VarUint;

	//		shl																	
	fn shl(self, rhs: &VarUint) -> Self::Output {
		//	The shift amount is counted down with the crate's own comparison
		//	and subtraction machinery
		let one        = VarUint::from(1_u8);
		let mut count  = rhs.clone();
		let mut result = self.clone();

		while count > 0_u8 {
			if result.is_zero() {
				break;
			}
			result.shl_one();
			count = &count - &one;
		}

		result
	}
}

//󰭅		ShlAssign																
impl ShlAssign<u32> for VarUint {
	//		shl_assign															
	fn shl_assign(&mut self, rhs: u32) {
		*self = &*self << rhs;
	}
}

//󰭅		ShlAssign<&VarUint>														
impl ShlAssign<&Self> for VarUint {
	//		shl_assign															
	fn shl_assign(&mut self, rhs: &Self) {
		*self = &*self << rhs;
	}
}

//󰭅		Shr																		
impl Shr<u32> for &VarUint {
	type Output = VarUint;

	//		shr																	
	fn shr(self, rhs: u32) -> Self::Output {
		self.wrapping_shr(rhs)
	}
}

//󰭅		Shr<&VarUint>															
impl Shr<&VarUint> for &VarUint {
	type Output = VarUint;

	//		shr																	
	fn shr(self, rhs: &VarUint) -> Self::Output {
		//	The shift amount is counted down with the crate's own comparison
		//	and subtraction machinery
		let one        = VarUint::from(1_u8);
		let mut count  = rhs.clone();
		let mut result = self.clone();

		while count > 0_u8 {
			if result.is_zero() {
				break;
			}
			result.shr_one();
			count = &count - &one;
		}

		result
	}
}

//󰭅		ShrAssign																
impl ShrAssign<u32> for VarUint {
	//		shr_assign															
	fn shr_assign(&mut self, rhs: u32) {
		*self = &*self >> rhs;
	}
}

//󰭅		ShrAssign<&VarUint>														
impl ShrAssign<&Self> for VarUint {
	//		shr_assign															
	fn shr_assign(&mut self, rhs: &Self) {
		*self = &*self >> rhs;
	}
}

//󰭅		Sub																		
impl Sub for &VarUint {
	type Output = VarUint;

	//		sub																	
	fn sub(self, rhs: Self) -> Self::Output {
		self.wrapping_sub(rhs)
	}
}

//󰭅		SubAssign																
impl SubAssign<&Self> for VarUint {
	//		sub_assign															
	fn sub_assign(&mut self, rhs: &Self) {
		*self = self.wrapping_sub(rhs);
	}
}

//󰭅		Sum																		
impl Sum for VarUint {
	//		sum																	
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::default(), |acc, x| &acc + &x)
	}
}

//󰭅		Sum<&>																	
impl<'a> Sum<&'a Self> for VarUint {
	//		sum																	
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::default(), |acc, x| &acc + x)
	}
}

//󰭅		ToSql																	
impl ToSql for VarUint {
	//		to_sql																
	fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::INT2 => i16::try_from(self)?.to_sql(ty, out),
			&Type::INT4 => i32::try_from(self)?.to_sql(ty, out),
			&Type::INT8 => i64::try_from(self)?.to_sql(ty, out),
			&Type::TEXT => self.to_string().to_sql(ty, out),
			unknown     => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for VarUint: {unknown}"),
			))),
		}
	}

	//		accepts																
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT)
	}

	to_sql_checked!();
}

//󰭅		UpperHex																
impl UpperHex for VarUint {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if f.alternate() {
			write!(f, "0x")?;
		}

		//	Find first non-zero byte (or last byte if all zero)
		let mut start = self.0.len().saturating_sub(1);
		while start > 0 && self.0[start] == 0 {
			start -= 1;
		}

		//	Handle first byte without leading zeros
		write!(f, "{:X}", self.chunk(start))?;

		//	Handle remaining bytes with full width
		for &byte in self.0[..start].iter().rev() {
			write!(f, "{byte:02X}")?;
		}

		Ok(())
	}
}

//		BytesVisitor															
/// A visitor for parsing integers from bytes.
struct BytesVisitor;

//󰭅		Visitor																	
impl Visitor<'_> for BytesVisitor {
	type Value = VarUint;

	//		expecting															
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "bytes representing an unsigned integer")
	}

	//		visit_bytes															
	fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(VarUint::from_le_bytes(v))
	}
}

//		VarUintVisitor															
/// A visitor for parsing integers from numbers and strings.
struct VarUintVisitor;

//󰭅		Visitor																	
impl Visitor<'_> for VarUintVisitor {
	type Value = VarUint;

	//		expecting															
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "an unsigned integer")
	}

	//		visit_i64															
	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		VarUint::try_from(v).map_err(E::custom)
	}

	//		visit_u64															
	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(VarUint::from(v))
	}

	//		visit_str															
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		v.parse().map_err(E::custom)
	}

	//		visit_bytes															
	fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(VarUint::from_le_bytes(v))
	}
}



//		Macros																											

//	The canonical binary operator implementations above take references; this
//	forwards the owned-operand combinations to them.
macro_rules! forward_binop {
	($($trait:ident :: $method:ident),* $(,)?) => { $(
		impl $trait for VarUint {
			type Output = Self;

			fn $method(self, rhs: Self) -> Self::Output {
				(&self).$method(&rhs)
			}
		}

		impl $trait<&Self> for VarUint {
			type Output = Self;

			fn $method(self, rhs: &Self) -> Self::Output {
				(&self).$method(rhs)
			}
		}

		impl $trait<VarUint> for &VarUint {
			type Output = VarUint;

			fn $method(self, rhs: VarUint) -> Self::Output {
				self.$method(&rhs)
			}
		}
	)* };
}

forward_binop!(
	Add::add, BitAnd::bitand, BitOr::bitor, BitXor::bitxor, Div::div,
	Mul::mul, Rem::rem, Shl::shl, Shr::shr, Sub::sub,
);

//	As above, for the compound assignment operators.
macro_rules! forward_binop_assign {
	($($trait:ident :: $method:ident),* $(,)?) => { $(
		impl $trait for VarUint {
			fn $method(&mut self, rhs: Self) {
				self.$method(&rhs);
			}
		}
	)* };
}

forward_binop_assign!(
	AddAssign::add_assign, BitAndAssign::bitand_assign, BitOrAssign::bitor_assign,
	BitXorAssign::bitxor_assign, DivAssign::div_assign, MulAssign::mul_assign,
	RemAssign::rem_assign, ShlAssign::shl_assign, ShrAssign::shr_assign,
	SubAssign::sub_assign,
);

//	As above, for the owned forms of the primitive shift amounts.
macro_rules! forward_shift {
	($($trait:ident :: $method:ident),* $(,)?) => { $(
		impl $trait<u32> for VarUint {
			type Output = Self;

			fn $method(self, rhs: u32) -> Self::Output {
				(&self).$method(rhs)
			}
		}
	)* };
}

forward_shift!(Shl::shl, Shr::shr);

//	One uniform promotion path connects VarUint with the native unsigned
//	primitives: a primitive is widened to an instance of its own byte width,
//	and every mixed-type operation goes through that conversion.
macro_rules! impl_unsigned_interop {
	($($t:ty),* $(,)?) => { $(
		impl From<$t> for VarUint {
			fn from(value: $t) -> Self {
				Self::from_le_bytes(&value.to_le_bytes())
			}
		}

		impl TryFrom<&VarUint> for $t {
			type Error = ConversionError;

			fn try_from(value: &VarUint) -> Result<Self, Self::Error> {
				if value.significant_bytes() > size_of::<$t>() {
					return Err(ConversionError::ValueTooLarge);
				}

				let mut bytes = [0_u8; size_of::<$t>()];
				let count     = value.0.len().min(size_of::<$t>());
				bytes[..count].copy_from_slice(&value.0[..count]);
				Ok(<$t>::from_le_bytes(bytes))
			}
		}

		impl TryFrom<VarUint> for $t {
			type Error = ConversionError;

			fn try_from(value: VarUint) -> Result<Self, Self::Error> {
				Self::try_from(&value)
			}
		}

		impl PartialEq<$t> for VarUint {
			fn eq(&self, other: &$t) -> bool {
				*self == Self::from(*other)
			}
		}

		impl PartialEq<VarUint> for $t {
			fn eq(&self, other: &VarUint) -> bool {
				VarUint::from(*self) == *other
			}
		}

		impl PartialOrd<$t> for VarUint {
			fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
				self.partial_cmp(&Self::from(*other))
			}
		}

		impl PartialOrd<VarUint> for $t {
			fn partial_cmp(&self, other: &VarUint) -> Option<Ordering> {
				VarUint::from(*self).partial_cmp(other)
			}
		}
	)* };
}

impl_unsigned_interop!(u8, u16, u32, u64, u128, usize);

//	The arithmetic and bitwise operators accept primitives on either side,
//	promoting through the conversion above.
macro_rules! impl_primitive_binop {
	($trait:ident :: $method:ident for $($t:ty),* $(,)?) => { $(
		impl $trait<$t> for &VarUint {
			type Output = VarUint;

			fn $method(self, rhs: $t) -> Self::Output {
				self.$method(&VarUint::from(rhs))
			}
		}

		impl $trait<$t> for VarUint {
			type Output = Self;

			fn $method(self, rhs: $t) -> Self::Output {
				(&self).$method(&Self::from(rhs))
			}
		}

		impl $trait<VarUint> for $t {
			type Output = VarUint;

			fn $method(self, rhs: VarUint) -> Self::Output {
				(&VarUint::from(self)).$method(&rhs)
			}
		}

		impl $trait<&VarUint> for $t {
			type Output = VarUint;

			fn $method(self, rhs: &VarUint) -> Self::Output {
				(&VarUint::from(self)).$method(rhs)
			}
		}
	)* };
}

impl_primitive_binop!(Add::add       for u8, u16, u32, u64, u128, usize);
impl_primitive_binop!(BitAnd::bitand for u8, u16, u32, u64, u128, usize);
impl_primitive_binop!(BitOr::bitor   for u8, u16, u32, u64, u128, usize);
impl_primitive_binop!(BitXor::bitxor for u8, u16, u32, u64, u128, usize);
impl_primitive_binop!(Div::div       for u8, u16, u32, u64, u128, usize);
impl_primitive_binop!(Mul::mul       for u8, u16, u32, u64, u128, usize);
impl_primitive_binop!(Rem::rem       for u8, u16, u32, u64, u128, usize);
impl_primitive_binop!(Sub::sub       for u8, u16, u32, u64, u128, usize);

//	As above, for the compound assignment operators.
macro_rules! impl_primitive_binop_assign {
	($trait:ident :: $method:ident for $($t:ty),* $(,)?) => { $(
		impl $trait<$t> for VarUint {
			fn $method(&mut self, rhs: $t) {
				self.$method(&Self::from(rhs));
			}
		}
	)* };
}

impl_primitive_binop_assign!(AddAssign::add_assign       for u8, u16, u32, u64, u128, usize);
impl_primitive_binop_assign!(BitAndAssign::bitand_assign for u8, u16, u32, u64, u128, usize);
impl_primitive_binop_assign!(BitOrAssign::bitor_assign   for u8, u16, u32, u64, u128, usize);
impl_primitive_binop_assign!(BitXorAssign::bitxor_assign for u8, u16, u32, u64, u128, usize);
impl_primitive_binop_assign!(DivAssign::div_assign       for u8, u16, u32, u64, u128, usize);
impl_primitive_binop_assign!(MulAssign::mul_assign       for u8, u16, u32, u64, u128, usize);
impl_primitive_binop_assign!(RemAssign::rem_assign       for u8, u16, u32, u64, u128, usize);
impl_primitive_binop_assign!(SubAssign::sub_assign       for u8, u16, u32, u64, u128, usize);

//	The SQL integer types are signed, so the database layer needs checked
//	conversions for the signed widths it speaks.
macro_rules! impl_signed_interop {
	($($t:ty),* $(,)?) => { $(
		impl TryFrom<$t> for VarUint {
			type Error = ConversionError;

			#[allow(clippy::cast_sign_loss, reason = "Already checked")]
			fn try_from(value: $t) -> Result<Self, Self::Error> {
				if value < 0 {
					return Err(ConversionError::ValueIsNegative);
				}

				let mut result = Self::new(size_of::<$t>());
				result.wrapping_set(value as u128);
				Ok(result)
			}
		}

		impl TryFrom<&VarUint> for $t {
			type Error = ConversionError;

			#[allow(
				clippy::cast_possible_truncation,
				clippy::cast_possible_wrap,
				clippy::cast_sign_loss,
				reason = "Already checked"
			)]
			fn try_from(value: &VarUint) -> Result<Self, Self::Error> {
				let wide = u128::try_from(value)?;

				if wide <= <$t>::MAX as u128 {
					Ok(wide as $t)
				} else {
					Err(ConversionError::ValueTooLarge)
				}
			}
		}

		impl TryFrom<VarUint> for $t {
			type Error = ConversionError;

			fn try_from(value: VarUint) -> Result<Self, Self::Error> {
				Self::try_from(&value)
			}
		}
	)* };
}

impl_signed_interop!(i16, i32, i64);
