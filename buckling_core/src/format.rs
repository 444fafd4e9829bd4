//! # Numeric Formatting
//!
//! Display formatting for calculation results. Values of moderate size are
//! shown in fixed-point; very large or very small values switch to power
//! notation with superscript exponents (`2.106×10⁶`).
//!
//! Output never depends on locale: the decimal separator is always `.`.
//!
//! ## Example
//!
//! ```rust
//! use buckling_core::format::format_power;
//!
//! assert_eq!(format_power(0.0, 3), "0");
//! assert_eq!(format_power(51.69, 2), "51.69");
//! assert_eq!(format_power(1234.0, 3), "1.234×10³");
//! ```

/// Decimal places used when the caller does not choose.
pub const DEFAULT_DECIMALS: usize = 3;

/// Exponent magnitude at which power notation takes over.
const POWER_NOTATION_EXPONENT: i32 = 3;

/// Enough fractional digits to print any `f64` exactly (smallest subnormal is 2⁻¹⁰⁷⁴).
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Fixed-point text with `decimals` places, rounding exact halves away from zero.
///
/// Rounding works on the exact decimal expansion of the binary value, so
/// `0.0625` (exactly representable) becomes `0.063` while `9.995`
/// (stored as `9.99499…`) becomes `9.99`.
///
/// ```rust
/// use buckling_core::format::format_fixed;
///
/// assert_eq!(format_fixed(2.5, 0), "3");
/// assert_eq!(format_fixed(-0.0625, 3), "-0.063");
/// assert_eq!(format_fixed(0.3384, 3), "0.338");
/// ```
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS.max(decimals), value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(decimals))
        .map(|b| b - b'0')
        .collect();
    let mut int_len = int_part.len();

    // First dropped digit >= 5 means at or above the half
    if frac_part.as_bytes().get(decimals).is_some_and(|&b| b >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
            int_len += 1;
        }
    }

    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    for (i, digit) in digits.iter().enumerate() {
        if i == int_len {
            out.push('.');
        }
        out.push(char::from(b'0' + digit));
    }
    out
}

/// Format a value, switching to power notation when |exponent| ≥ 3.
///
/// - `0` renders as the literal `"0"`
/// - `exponent = floor(log10(|value|))`, `mantissa = value / 10^exponent`
/// - exponent ≥ 3 or ≤ -3: `"{mantissa}×10{exponent}"` with superscript digits
/// - otherwise `value` fixed to `decimals` places
///
/// Both branches round through [`format_fixed`], so exact halves go away from zero.
/// Non-finite values fall back to their `Display` form.
pub fn format_power(value: f64, decimals: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let exponent = value.abs().log10().floor() as i32;
    if exponent >= POWER_NOTATION_EXPONENT || exponent <= -POWER_NOTATION_EXPONENT {
        let mantissa = value / 10_f64.powf(f64::from(exponent));
        format!("{}×10{}", format_fixed(mantissa, decimals), superscript(exponent))
    } else {
        format_fixed(value, decimals)
    }
}

/// [`format_power`] with [`DEFAULT_DECIMALS`].
pub fn format_default(value: f64) -> String {
    format_power(value, DEFAULT_DECIMALS)
}

/// Render an integer with Unicode superscript glyphs (`-12` → `⁻¹²`).
pub fn superscript(n: i32) -> String {
    n.to_string()
        .chars()
        .map(|c| match c {
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            '9' => '⁹',
            '-' => '⁻',
            other => other,
        })
        .collect()
}
