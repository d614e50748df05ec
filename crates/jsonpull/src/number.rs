use lexical_parse_float::FromLexical as FromLexicalFloat;
use lexical_parse_integer::FromLexical as FromLexicalInt;

/// Parses the complete slice as an integer; trailing bytes fail the parse.
pub(crate) fn int<T: FromLexicalInt>(slice: &[u8]) -> Option<T> {
    T::from_lexical(slice).ok()
}

/// Parses the complete slice as a float, standard or scientific form.
pub(crate) fn float<T: FromLexicalFloat>(slice: &[u8]) -> Option<T> {
    T::from_lexical(slice).ok()
}

/// A JSON number narrowed to the smallest lossless native type.
///
/// Produced by [`JsonReader::as_number`]. Integers narrow to `I32` before
/// `I64` before `I128`; everything else lands in `F64`, except that a float
/// whose value is integral and in range collapses back into the narrowest
/// integer variant. Callers that need a stable numeric type should use the
/// dedicated accessors instead.
///
/// [`JsonReader::as_number`]: crate::JsonReader::as_number
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JsonNumber {
    /// Fits in a 32-bit signed integer.
    I32(i32),
    /// Fits in a 64-bit signed integer.
    I64(i64),
    /// An exact integer wider than 64 bits.
    I128(i128),
    /// Everything else.
    F64(f64),
}

/// Parses `slice` into the narrowest lossless [`JsonNumber`].
///
/// The slice must be a complete RFC 8259 number; trailing bytes fail the
/// parse rather than being ignored.
pub(crate) fn narrowest(slice: &[u8]) -> Option<JsonNumber> {
    if let Ok(n) = i32::from_lexical(slice) {
        return Some(JsonNumber::I32(n));
    }
    if let Ok(n) = i64::from_lexical(slice) {
        return Some(JsonNumber::I64(n));
    }
    if let Ok(n) = i128::from_lexical(slice) {
        return Some(JsonNumber::I128(n));
    }
    let f = f64::from_lexical(slice).ok()?;
    Some(collapse(f))
}

/// Narrows an integral, in-range float into an integer variant.
///
/// Truncation round-trip stands in for a floor comparison: for every finite
/// value inside the i64 range the two agree, and outside that range no
/// narrowing happens anyway.
fn collapse(f: f64) -> JsonNumber {
    // i64::MAX itself is not representable as f64; stay strictly below 2^63
    // so the truncation is exact.
    if f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        let t = f as i64;
        if t as f64 == f {
            if let Ok(n) = i32::try_from(t) {
                return JsonNumber::I32(n);
            }
            return JsonNumber::I64(t);
        }
    }
    JsonNumber::F64(f)
}
