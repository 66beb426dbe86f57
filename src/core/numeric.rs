//! # Lenient Number Parsing
//!
//! Form fields accept whatever the user types, so parsing reads the longest
//! numeric prefix and ignores the rest: `"12abc"` is 12, `"3.7"` read as an
//! integer is 3, `" 5"` is 5. Text with no leading digits is not a number.
//!
//! ```text
//! decimal:  ws* [+-]? ( "Infinity" | digits? ('.' digits?)? ([eE] [+-]? digits)? )
//! integer:  ws* [+-]? ( ("0x" | "0X") hexdigits | digits )
//! ```

/// Parse the leading decimal number in `text`.
///
/// Returns `None` when the prefix contains no mantissa digit (`""`, `"-"`,
/// `"."`, `"abc"`). An exponent without digits is not consumed, so `"2e"`
/// parses as 2.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        return Some(if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        // A bare trailing '.' still belongs to the number ("5." is 5)
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Parse the leading integer in `text`, saturating at the `i64` bounds.
///
/// A `0x` prefix switches to hexadecimal (`"0x10"` is 16); a prefix with
/// no hex digits after it is not a number.
pub fn parse_integer(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let (negative, mut start) = match bytes.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };

    let rest = &s[start..];
    let radix = if rest.starts_with("0x") || rest.starts_with("0X") {
        start += 2;
        16
    } else {
        10
    };

    let digits = bytes[start..]
        .iter()
        .take_while(|b| (**b as char).is_digit(radix))
        .count();
    if digits == 0 {
        return None;
    }

    let literal = &s[start..start + digits];
    let value = i64::from_str_radix(literal, radix).unwrap_or(i64::MAX);

    Some(if negative { value.saturating_neg() } else { value })
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
