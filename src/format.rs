use std::fmt;

/// Per-type display rules.
///
/// - integers get a `$` prefix;
/// - doubles are truncated, never rounded, to two fractional digits;
/// - text is padded with one space on each side.
///
/// # Example
/// ```
/// use foundations::format::Present;
///
/// assert_eq!(23423_i32.present(), "$23423");
/// assert_eq!(2384.298_423_84_f64.present(), "2384.29");
/// assert_eq!("Hello from NUML".present(), " Hello from NUML ");
/// ```
pub trait Present {
    /// Renders `self` according to its type's rule.
    fn present(&self) -> String;
}

impl Present for i32 {
    fn present(&self) -> String {
        format!("${self}")
    }
}

impl Present for i64 {
    fn present(&self) -> String {
        format!("${self}")
    }
}

impl Present for f64 {
    fn present(&self) -> String {
        truncate_two_places(*self)
    }
}

impl Present for str {
    fn present(&self) -> String {
        format!(" {self} ")
    }
}

impl Present for String {
    fn present(&self) -> String {
        self.as_str().present()
    }
}

/// Cuts the decimal rendering of `value` after two fractional digits.
///
/// Whole numbers and one-digit fractions are padded with zeros. Non-finite
/// values are returned unchanged.
///
/// # Example
/// ```
/// use foundations::format::truncate_two_places;
///
/// assert_eq!(truncate_two_places(1.999), "1.99");
/// assert_eq!(truncate_two_places(-0.5), "-0.50");
/// assert_eq!(truncate_two_places(5.0), "5.00");
/// ```
#[must_use]
pub fn truncate_two_places(value: f64) -> String {
    let rendered = value.to_string();
    if !value.is_finite() {
        return rendered;
    }

    let (whole, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let digits: String = fraction.chars().chain(std::iter::repeat('0')).take(2).collect();
    format!("{whole}.{digits}")
}

/// Rounds the shortest decimal rendering of `value` to `places` fractional
/// digits, with ties going away from zero.
///
/// Rounding works on the digits `value` displays as, not on its binary
/// expansion, so `0.125` becomes `0.13` and `1.005` becomes `1.01`.
/// Non-finite values are returned unchanged.
///
/// # Example
/// ```
/// use foundations::format::round_half_up;
///
/// assert_eq!(round_half_up(0.125, 2), "0.13");
/// assert_eq!(round_half_up(9.999, 2), "10.00");
/// assert_eq!(round_half_up(-1.5, 4), "-1.5000");
/// ```
#[must_use]
pub fn round_half_up(value: f64, places: usize) -> String {
    let rendered = value.to_string();
    if !value.is_finite() {
        return rendered;
    }

    let (sign, magnitude) =
        rendered.strip_prefix('-').map_or(("", rendered.as_str()), |m| ("-", m));
    let (whole, fraction) = magnitude.split_once('.').unwrap_or((magnitude, ""));

    // Decimal digit values, whole part followed by the kept fraction.
    let mut digits: Vec<u8> = whole.bytes()
                                   .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(places))
                                   .map(|b| b - b'0')
                                   .collect();

    if fraction.as_bytes().get(places).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - places;
    let render = |ds: &[u8]| ds.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    if places == 0 {
        format!("{sign}{}", render(&digits))
    } else {
        format!("{sign}{}.{}", render(&digits[..split]), render(&digits[split..]))
    }
}

/// A value of one of the three presentable kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Whole number.
    Integer(i64),
    /// Floating-point number.
    Double(f64),
    /// Free text.
    Text(String),
}

impl Value {
    /// Short name of the kind, as used in the demo output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "Integer",
            Self::Double(_) => "Double",
            Self::Text(_) => "String",
        }
    }
}

impl Present for Value {
    fn present(&self) -> String {
        match self {
            Self::Integer(n) => n.present(),
            Self::Double(d) => d.present(),
            Self::Text(s) => s.present(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Formatted to: {}", self.kind(), self.present())
    }
}

/// The values the demo formats when none are given.
#[must_use]
pub fn demo_values() -> [Value; 3] {
    [Value::Integer(23423),
     Value::Double(2384.298_423_84),
     Value::Text("Hello from NUML".to_owned())]
}

/// One line per value, e.g. `Integer Formatted to: $23423`.
#[must_use]
pub fn demo_lines(values: &[Value]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}
