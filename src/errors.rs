//! Contains error types used throughout the library.



//		Packages

use thiserror::Error as ThisError;



//		Enums

//		AccessError																
/// Represents all possible errors that can occur when accessing bits.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum AccessError {
	/// The bit index addresses a byte beyond the end of the buffer.
	#[error("Bit index {index} is out of bounds for a buffer of {len} bytes")]
	OutOfBounds {
		/// The offending bit index.
		index: usize,

		/// The length of the buffer, in bytes.
		len:   usize,
	},
}

//		ArithmeticError															
/// Represents all possible arithmetic errors that can occur.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ArithmeticError {
	/// The divisor in a division or modulus operation is zero.
	#[error("Division by zero")]
	DivisionByZero,
}

//		ConversionError															
/// Represents all possible conversion errors that can occur.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ConversionError {
	/// The incoming value is empty, e.g. an empty string.
	#[error("Empty value")]
	EmptyValue,

	/// The incoming value is not a valid integer.
	#[error("Invalid digit: {0}")]
	InvalidDigit(char),

	/// The incoming value is not a valid integer.
	#[error("Invalid digit for base {1}: {0}")]
	InvalidRadix(char, u8),

	/// The incoming value is negative, which is not allowed by the destination
	/// type.
	#[error("Value is negative")]
	ValueIsNegative,

	/// The incoming value is too large to be converted to the destination type.
	#[error("Value too large")]
	ValueTooLarge,
}
