use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Integral numbers up to 2^53 render and serialize as exact integers.
const SAFE_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Primitive value carried by an enumeration member.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Val {
    /// UTF-8 string value.
    Str(String),
    /// Double precision number; integers are stored exactly up to 2^53.
    Number(f64),
    /// Boolean flag.
    Bool(bool),
}

impl Val {
    /// Renders the value as the name an object property derived from it
    /// would carry: `1`, `1.5`, `true`, `NaN`, or the string itself.
    #[must_use]
    pub fn property_key(&self) -> Cow<'_, str> {
        match self {
            Self::Str(s) => Cow::Borrowed(s.as_str()),
            Self::Bool(true) => Cow::Borrowed("true"),
            Self::Bool(false) => Cow::Borrowed("false"),
            Self::Number(n) => format_number(*n),
        }
    }

    /// Consumes the value and returns its property name.
    #[must_use]
    pub fn into_property_key(self) -> String {
        match self {
            Self::Str(s) => s,
            other => other.property_key().into_owned(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Converts a JSON scalar; arrays, objects and `null` have no primitive form.
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(s) => Some(Self::Str(s.clone())),
            serde_json::Value::Number(n) => n.as_f64().map(Self::Number),
            serde_json::Value::Bool(b) => Some(Self::Bool(*b)),
            serde_json::Value::Null
            | serde_json::Value::Array(_)
            | serde_json::Value::Object(_) => None,
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn format_number(n: f64) -> Cow<'static, str> {
    if n.is_nan() {
        return Cow::Borrowed("NaN");
    }
    if n.is_infinite() {
        return Cow::Borrowed(if n > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if n == 0.0 {
        return Cow::Borrowed("0");
    }
    if n.fract() == 0.0 && n.abs() <= SAFE_INTEGER_LIMIT {
        let mut buffer = itoa::Buffer::new();
        return Cow::Owned(buffer.format(n as i64).to_owned());
    }

    let mut buffer = ryu::Buffer::new();
    let (digits, point) = shortest_digits(buffer.format_finite(n.abs()));
    let mut out = String::with_capacity(digits.len() + 8);
    if n < 0.0 {
        out.push('-');
    }
    layout_digits(&mut out, &digits, point);
    Cow::Owned(out)
}

/// Splits `ryu` output into significant digits and the position of the
/// decimal point relative to them (`value = 0.digits * 10^point`).
fn shortest_digits(formatted: &str) -> (String, i32) {
    let (mantissa, exponent) = formatted
        .split_once('e')
        .map_or((formatted, 0), |(m, e)| (m, e.parse::<i32>().unwrap_or(0)));
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let mut digits: String = int_part.chars().chain(frac_part.chars()).collect();
    let mut point = i32::try_from(int_part.len()).unwrap_or(i32::MAX) + exponent;

    let leading = digits.len() - digits.trim_start_matches('0').len();
    digits.drain(..leading);
    point -= i32::try_from(leading).unwrap_or(0);
    let significant = digits.trim_end_matches('0').len();
    digits.truncate(significant);
    (digits, point)
}

/// Writes digits the way `Number.prototype.toString` does: plain notation for
/// decimal exponents in `-6..21`, exponent notation otherwise.
#[allow(clippy::cast_sign_loss)]
fn layout_digits(out: &mut String, digits: &str, point: i32) {
    let count = i32::try_from(digits.len()).unwrap_or(i32::MAX);
    if count <= point && point <= 21 {
        out.push_str(digits);
        out.extend(std::iter::repeat_n('0', (point - count) as usize));
    } else if 0 < point && point <= 21 {
        let (whole, fraction) = digits.split_at(point as usize);
        out.push_str(whole);
        out.push('.');
        out.push_str(fraction);
    } else if -6 < point && point <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat_n('0', point.unsigned_abs() as usize));
        out.push_str(digits);
    } else {
        let exponent = point - 1;
        let (first, rest) = digits.split_at(1);
        out.push_str(first);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        out.push('e');
        out.push(if exponent < 0 { '-' } else { '+' });
        let mut buffer = itoa::Buffer::new();
        out.push_str(buffer.format(exponent.unsigned_abs()));
    }
}

impl fmt::Display for Val {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.property_key())
    }
}

impl Serialize for Val {
    #[allow(clippy::cast_possible_truncation)]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Str(s) => serializer.serialize_str(s),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) if n.fract() == 0.0 && n.abs() <= SAFE_INTEGER_LIMIT => {
                serializer.serialize_i64(*n as i64)
            }
            Self::Number(n) => serializer.serialize_f64(*n),
        }
    }
}

impl From<&str> for Val {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Val {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for Val {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<f64> for Val {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Val {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for Val {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for Val {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for Val {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&Self> for Val {
    fn from(value: &Self) -> Self {
        value.clone()
    }
}

impl PartialEq<str> for Val {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Val {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<f64> for Val {
    fn eq(&self, other: &f64) -> bool {
        self.as_f64().is_some_and(|n| n == *other)
    }
}

impl PartialEq<i64> for Val {
    fn eq(&self, other: &i64) -> bool {
        *self == Self::from(*other)
    }
}

impl PartialEq<i32> for Val {
    fn eq(&self, other: &i32) -> bool {
        *self == f64::from(*other)
    }
}

impl PartialEq<bool> for Val {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}
