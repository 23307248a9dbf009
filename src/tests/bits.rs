//		Packages

use super::*;
use claims::{assert_err_eq, assert_ok, assert_ok_eq};
use rubedo::sugar::s;



//		Tests

mod bit {
	use super::*;

	//		is_set																
	#[test]
	fn is_set() {
		assert!( Bit::One.is_set());
		assert!(!Bit::Zero.is_set());
	}

	//		default																
	#[test]
	fn default() {
		assert_eq!(Bit::default(), Bit::Zero);
	}

	//		from																
	#[test]
	fn from__bool() {
		assert_eq!(Bit::from(true),  Bit::One);
		assert_eq!(Bit::from(false), Bit::Zero);
	}
	#[test]
	fn from__into_bool() {
		assert!( bool::from(Bit::One));
		assert!(!bool::from(Bit::Zero));
	}
	#[test]
	fn from__into_u8() {
		assert_eq!(u8::from(Bit::One),  1);
		assert_eq!(u8::from(Bit::Zero), 0);
	}

	//		ord																	
	#[test]
	fn ord() {
		assert!(Bit::Zero < Bit::One);
	}
}

mod functions {
	use super::*;

	//		get_bit																
	#[test]
	fn get_bit__first_byte() {
		let data = [0b0000_0101_u8];

		assert_ok_eq!(get_bit(&data, 0), Bit::One);
		assert_ok_eq!(get_bit(&data, 1), Bit::Zero);
		assert_ok_eq!(get_bit(&data, 2), Bit::One);
		assert_ok_eq!(get_bit(&data, 7), Bit::Zero);
	}
	#[test]
	fn get_bit__across_bytes() {
		let data = [0b0000_0000_u8, 0b1000_0001];

		assert_ok_eq!(get_bit(&data, 7),  Bit::Zero);
		assert_ok_eq!(get_bit(&data, 8),  Bit::One);
		assert_ok_eq!(get_bit(&data, 9),  Bit::Zero);
		assert_ok_eq!(get_bit(&data, 15), Bit::One);
	}
	#[test]
	fn get_bit__out_of_bounds() {
		let data = [0_u8; 2];

		let err = get_bit(&data, 16);
		assert_err_eq!(&err, &AccessError::OutOfBounds { index: 16, len: 2 });
		assert_eq!(err.unwrap_err().to_string(), s!("Bit index 16 is out of bounds for a buffer of 2 bytes"));
	}
	#[test]
	fn get_bit__empty_buffer() {
		let data: [u8; 0] = [];

		assert_err_eq!(get_bit(&data, 0), AccessError::OutOfBounds { index: 0, len: 0 });
	}

	//		set_bit																
	#[test]
	fn set_bit__set() {
		let mut data = [0_u8, 255];

		assert_ok!(set_bit(&mut data, 0, Bit::One));
		assert_eq!(data, [1, 255]);
	}
	#[test]
	fn set_bit__clear() {
		let mut data = [0_u8, 255];

		assert_ok!(set_bit(&mut data, 8, Bit::Zero));
		assert_eq!(data, [0, 254]);
	}
	#[test]
	fn set_bit__preserves_other_bits() {
		//	Setting bit 2 of 00111000 should yield 00111100
		let mut data = [0b0011_1000_u8];

		assert_ok!(set_bit(&mut data, 2, Bit::One));
		assert_eq!(data, [0b0011_1100]);

		assert_ok!(set_bit(&mut data, 3, Bit::Zero));
		assert_eq!(data, [0b0011_0100]);
	}
	#[test]
	fn set_bit__idempotent() {
		let mut data = [0b0000_0001_u8];

		assert_ok!(set_bit(&mut data, 0, Bit::One));
		assert_eq!(data, [1]);
	}
	#[test]
	fn set_bit__out_of_bounds() {
		let mut data = [0_u8; 3];

		assert_err_eq!(set_bit(&mut data, 24, Bit::One), AccessError::OutOfBounds { index: 24, len: 3 });
		assert_eq!(data, [0, 0, 0]);
	}
}
