//! # Campus Number Formatting (`common::ui::format`)
//!
//! File: cli/src/common/ui/format.rs
//!
//! Number rendering shared by the chatbot and the calculator. Integral values
//! keep a trailing `.0` so `8.0` reads as a real number. Magnitudes from
//! `1e16` upwards, and non-zero ones below `1e-4`, switch to exponent form
//! with a signed two-digit exponent (`1e+20`, `1.5e-05`). Everything else is
//! printed in its shortest round-tripping form.

/// Exponent form starts at this magnitude.
const EXPONENT_ABOVE: f64 = 1e16;
/// ...and below this one.
const EXPONENT_BELOW: f64 = 1e-4;

/// Renders a single `f64`, e.g. `8.0`, `2.5`, `0.30000000000000004`, `1e+20`.
pub fn float(value: f64) -> String {
    let magnitude = value.abs();
    if !value.is_finite() {
        value.to_string()
    } else if magnitude >= EXPONENT_ABOVE || (magnitude != 0.0 && magnitude < EXPONENT_BELOW) {
        exponent_form(value)
    } else if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// `{:e}` gives `1e20` / `1.5e-5`; pad to `1e+20` / `1.5e-05`.
fn exponent_form(value: f64) -> String {
    let raw = format!("{:e}", value);
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => raw,
    }
}

/// Renders a list as `[1.0, 2.5, 3.0]`.
pub fn float_list(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| float(*v)).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float() {
        assert_eq!(float(8.0), "8.0");
        assert_eq!(float(-7.0), "-7.0");
        assert_eq!(float(-0.5), "-0.5");
        assert_eq!(float(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_float_exponent_form() {
        assert_eq!(float(1e20), "1e+20");
        assert_eq!(float(1e16), "1e+16");
        assert_eq!(float(9999999999999998.0), "9999999999999998.0");
        assert_eq!(float(-1.5e17), "-1.5e+17");
        assert_eq!(float(1.23e300), "1.23e+300");
        assert_eq!(float(0.0001), "0.0001");
        assert_eq!(float(0.00001), "1e-05");
        assert_eq!(float(-2.5e-7), "-2.5e-07");
        assert_eq!(float(0.0), "0.0");
    }

    #[test]
    fn test_float_list() {
        assert_eq!(float_list(&[1.0, 2.5, 3.0]), "[1.0, 2.5, 3.0]");
        assert_eq!(float_list(&[]), "[]");
    }
}
