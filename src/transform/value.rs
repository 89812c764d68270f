//! Transform option value encoding
//!
//! Every option value carried by a transform step has exactly one canonical
//! textual form. The grammar is small but has two sharp edges:
//!
//! - strings are unquoted when they stand alone but double-quoted inside a
//!   list, so that file handles and URLs in array-valued options are
//!   unambiguous next to bare numeric tokens
//! - floats use the minimal non-scientific decimal form; NaN and infinity
//!   have no wire form and fail before any output is produced

use crate::color::RgbColor;

use super::error::TransformError;

/// A typed transform option value.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Color(RgbColor),
    /// An enumerated symbol such as `crop` or `exif`; rendered bare even
    /// inside lists
    Symbol(String),
    List(Vec<OptionValue>),
    /// Pre-escaped text emitted verbatim; the caller owns its correctness
    Raw(String),
}

impl OptionValue {
    pub fn symbol(name: impl Into<String>) -> Self {
        OptionValue::Symbol(name.into())
    }

    pub fn raw(text: impl Into<String>) -> Self {
        OptionValue::Raw(text.into())
    }

    /// Encodes the canonical textual form.
    ///
    /// `option` is only used to name the offending key when a non-finite
    /// float is rejected.
    pub(crate) fn encode(&self, option: &str) -> Result<String, TransformError> {
        self.encode_in(option, false)
    }

    fn encode_in(&self, option: &str, in_list: bool) -> Result<String, TransformError> {
        match self {
            OptionValue::Bool(b) => Ok(b.to_string()),
            OptionValue::Int(i) => Ok(i.to_string()),
            OptionValue::Float(x) => {
                if !x.is_finite() {
                    return Err(TransformError::non_finite(option, *x));
                }
                Ok(x.to_string())
            }
            OptionValue::Str(s) => {
                if in_list {
                    Ok(format!("\"{}\"", s))
                } else {
                    Ok(s.clone())
                }
            }
            OptionValue::Color(c) => Ok(c.hex()),
            OptionValue::Symbol(s) => Ok(s.clone()),
            OptionValue::List(items) => {
                let mut rendered = Vec::with_capacity(items.len());
                for item in items {
                    rendered.push(item.encode_in(option, true)?);
                }
                Ok(format!("[{}]", rendered.join(",")))
            }
            OptionValue::Raw(s) => Ok(s.clone()),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Bool(b)
    }
}

impl From<i64> for OptionValue {
    fn from(i: i64) -> Self {
        OptionValue::Int(i)
    }
}

impl From<i32> for OptionValue {
    fn from(i: i32) -> Self {
        OptionValue::Int(i64::from(i))
    }
}

impl From<u32> for OptionValue {
    fn from(i: u32) -> Self {
        OptionValue::Int(i64::from(i))
    }
}

impl From<f64> for OptionValue {
    fn from(x: f64) -> Self {
        OptionValue::Float(x)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Str(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Str(s)
    }
}

impl From<RgbColor> for OptionValue {
    fn from(c: RgbColor) -> Self {
        OptionValue::Color(c)
    }
}

impl<T: Into<OptionValue>> From<Vec<T>> for OptionValue {
    fn from(items: Vec<T>) -> Self {
        OptionValue::List(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(value: OptionValue) -> String {
        value.encode("test").unwrap()
    }

    #[test]
    fn test_bool_encoding() {
        assert_eq!(encode(OptionValue::Bool(true)), "true");
        assert_eq!(encode(OptionValue::Bool(false)), "false");
    }

    #[test]
    fn test_int_encoding() {
        assert_eq!(encode(OptionValue::Int(100)), "100");
        assert_eq!(encode(OptionValue::Int(-3)), "-3");
    }

    #[test]
    fn test_float_encoding_is_minimal_decimal() {
        assert_eq!(encode(OptionValue::Float(0.25)), "0.25");
        assert_eq!(encode(OptionValue::Float(340.5)), "340.5");
        // Whole floats drop the fractional part entirely
        assert_eq!(encode(OptionValue::Float(2.0)), "2");
    }

    #[test]
    fn test_non_finite_float_is_rejected() {
        let err = OptionValue::Float(f64::NAN).encode("blur").unwrap_err();
        assert!(matches!(err, TransformError::NonFiniteNumber { .. }));

        let err = OptionValue::Float(f64::INFINITY).encode("blur").unwrap_err();
        assert_eq!(
            err,
            TransformError::non_finite("blur", f64::INFINITY),
        );
    }

    #[test]
    fn test_bare_string_is_unquoted() {
        assert_eq!(encode(OptionValue::from("input")), "input");
    }

    #[test]
    fn test_strings_inside_list_are_quoted() {
        let value: OptionValue = vec!["a", "b"].into();
        assert_eq!(encode(value), "[\"a\",\"b\"]");
    }

    #[test]
    fn test_symbols_stay_bare_inside_list() {
        let value = OptionValue::List(vec![OptionValue::symbol("crop"), OptionValue::Int(3)]);
        assert_eq!(encode(value), "[crop,3]");
    }

    #[test]
    fn test_empty_list_renders_brackets() {
        assert_eq!(encode(OptionValue::List(Vec::new())), "[]");
    }

    #[test]
    fn test_nested_list_encoding() {
        // partial_blur carries rectangles as [[x,y,w,h],...]
        let rect: OptionValue = vec![10, 20, 30, 40].into();
        let objects = OptionValue::List(vec![rect]);
        assert_eq!(encode(objects), "[[10,20,30,40]]");
    }

    #[test]
    fn test_non_finite_inside_list_is_rejected() {
        let value = OptionValue::List(vec![OptionValue::Float(f64::NAN)]);
        assert!(value.encode("objects").is_err());
    }

    #[test]
    fn test_color_encoding_uses_fixed_lowercase_hex() {
        let value: OptionValue = RgbColor::new(255, 136, 0).into();
        assert_eq!(encode(value), "ff8800");
    }

    #[test]
    fn test_raw_is_emitted_verbatim() {
        assert_eq!(
            encode(OptionValue::raw("policy:abc,signature:def")),
            "policy:abc,signature:def"
        );
    }
}
