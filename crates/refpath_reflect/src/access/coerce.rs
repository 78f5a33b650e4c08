//! Text and byte assignment to scalar leaves.

use alloc::borrow::ToOwned;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Display;

use crate::Reflect;
use crate::access::{AccessError, ErrorKind};

fn invalid_value(text: &str, target: &str, reason: impl Display) -> AccessError {
    AccessError::new(
        ErrorKind::InvalidValue,
        format!("cannot parse {text:?} as `{target}`: {reason}"),
    )
}

fn unsupported(target: &dyn Reflect) -> AccessError {
    AccessError::new(
        ErrorKind::UnsupportedAssignment,
        format!("`{}` cannot be assigned from text", target.reflect_type_path()),
    )
}

/// `1`, `t`, `T`, `TRUE`, `true`, `True` and their `false` counterparts.
fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Whether `text` spells an infinity, so that an infinite parse result is
/// not an overflow.
fn is_infinity(text: &str) -> bool {
    let digits = text.trim_start_matches(['+', '-']);
    digits.eq_ignore_ascii_case("inf") || digits.eq_ignore_ascii_case("infinity")
}

macro_rules! assign_integer {
    (unsigned $target:ident, $text:ident: $($ty:ty),* $(,)?) => {$(
        if $text.starts_with('+') && $target.is::<$ty>() {
            return Err(invalid_value($text, stringify!($ty), "unexpected sign"));
        }
        assign_integer!($target, $text: $ty);
    )*};
    ($target:ident, $text:ident: $($ty:ty),* $(,)?) => {$(
        if let Some(slot) = $target.downcast_mut::<$ty>() {
            *slot = $text
                .parse::<$ty>()
                .map_err(|err| invalid_value($text, stringify!($ty), err))?;
            return Ok(());
        }
    )*};
}

macro_rules! assign_float {
    ($target:ident, $text:ident: $($ty:ty),* $(,)?) => {$(
        if let Some(slot) = $target.downcast_mut::<$ty>() {
            let value = $text
                .parse::<$ty>()
                .map_err(|err| invalid_value($text, stringify!($ty), err))?;
            if value.is_infinite() && !is_infinity($text) {
                return Err(invalid_value($text, stringify!($ty), "value out of range"));
            }
            *slot = value;
            return Ok(());
        }
    )*};
}

/// Writes `text` into a scalar leaf.
///
/// Strings take the text as is, byte vectors take its bytes, and numbers
/// and booleans parse it.
pub(crate) fn assign_text(target: &mut dyn Reflect, text: &str) -> Result<(), AccessError> {
    if let Some(slot) = target.downcast_mut::<String>() {
        text.clone_into(slot);
        return Ok(());
    }
    if let Some(slot) = target.downcast_mut::<Vec<u8>>() {
        slot.clear();
        slot.extend_from_slice(text.as_bytes());
        return Ok(());
    }
    if let Some(slot) = target.downcast_mut::<bool>() {
        *slot = parse_bool(text).ok_or_else(|| invalid_value(text, "bool", "not a boolean"))?;
        return Ok(());
    }

    assign_integer!(target, text: i8, i16, i32, i64, i128, isize);
    assign_integer!(unsigned target, text: u8, u16, u32, u64, u128, usize);
    assign_float!(target, text: f32, f64);

    Err(unsupported(target))
}

/// Writes `bytes` into a scalar leaf.
///
/// Byte vectors take the bytes as is. Every other leaf reads them as UTF-8
/// text.
pub(crate) fn assign_bytes(target: &mut dyn Reflect, bytes: &[u8]) -> Result<(), AccessError> {
    if let Some(slot) = target.downcast_mut::<Vec<u8>>() {
        slot.clear();
        slot.extend_from_slice(bytes);
        return Ok(());
    }
    match core::str::from_utf8(bytes) {
        Ok(text) => assign_text(target, text),
        Err(err) => Err(AccessError::new(
            ErrorKind::InvalidValue,
            format!("bytes for `{}` are not UTF-8: {err}", target.reflect_type_path()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::{assign_bytes, assign_text};
    use crate::access::ErrorKind;

    #[test]
    fn integers_respect_width() {
        let mut small = 0_i8;
        assign_text(&mut small, "-128").unwrap();
        assert_eq!(small, -128);

        let err = assign_text(&mut small, "99999").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);

        let mut unsigned = 0_u16;
        assert_eq!(assign_text(&mut unsigned, "-1").unwrap_err().kind(), ErrorKind::InvalidValue);
        assign_text(&mut unsigned, "65535").unwrap();
        assert_eq!(unsigned, u16::MAX);
    }

    #[test]
    fn unsigned_rejects_plus_sign() {
        let mut unsigned = 7_u32;
        let err = assign_text(&mut unsigned, "+1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert_eq!(unsigned, 7);

        let mut signed = 0_i32;
        assign_text(&mut signed, "+1").unwrap();
        assert_eq!(signed, 1);
    }

    #[test]
    fn floats_detect_overflow() {
        let mut value = 0_f32;
        assign_text(&mut value, "1.5e3").unwrap();
        assert_eq!(value, 1500.0);

        assign_text(&mut value, "-Inf").unwrap();
        assert_eq!(value, f32::NEG_INFINITY);

        assign_text(&mut value, "NaN").unwrap();
        assert!(value.is_nan());

        let err = assign_text(&mut value, "1e40").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);

        let mut wide = 0_f64;
        assign_text(&mut wide, "1e40").unwrap();
        assert_eq!(wide, 1e40);
    }

    #[test]
    fn booleans_use_canonical_literals() {
        for text in ["1", "t", "TRUE", "True"] {
            let mut flag = false;
            assign_text(&mut flag, text).unwrap();
            assert!(flag);
        }

        let mut flag = true;
        assign_text(&mut flag, "F").unwrap();
        assert!(!flag);
        assert_eq!(assign_text(&mut flag, "yes").unwrap_err().kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn text_and_bytes_cross_over() {
        let mut bytes = Vec::<u8>::from([9]);
        assign_text(&mut bytes, "hi").unwrap();
        assert_eq!(bytes, b"hi");

        let mut text = String::new();
        assign_bytes(&mut text, b"hello").unwrap();
        assert_eq!(text, "hello");

        let mut number = 0_u32;
        assign_bytes(&mut number, b"42").unwrap();
        assert_eq!(number, 42);

        let err = assign_bytes(&mut text, &[0xff, 0xfe]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn containers_reject_text() {
        let mut list = Vec::<u32>::new();
        let err = assign_text(&mut list, "1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedAssignment);
    }
}
