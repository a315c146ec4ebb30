//! Format specifiers for rendering a vector's components.
//!
//! A specifier has the shape `[[fill]align][sign][0][width][.precision][type][p]`. Everything
//! before the optional trailing `p` applies to each of the two components, the `p` marker
//! switches from cartesian `(x, y)` output to polar `<magnitude, angle>` output.
use std::{fmt, str::FromStr};

use super::Vector2;
use crate::{
    core::traits::Real,
    error::{Result, VectorError},
};

/// Marker character selecting polar output.
pub const POLAR_MARKER: char = 'p';

/// Largest accepted width or precision.
const MAX_COUNT: usize = u16::MAX as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// `<`
    Left,
    /// `>`, the default for numbers.
    Right,
    /// `^`, extra padding goes on the right.
    Center,
    /// `=`, padding goes between the sign and the digits.
    AfterSign,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sign {
    /// `-`, only negative values get a sign.
    #[default]
    Negative,
    /// `+`
    Always,
    /// ` `, non negative values get a leading space.
    Space,
}

/// How a single component is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presentation {
    /// No type given: shortest round trip text, or general formatting with at least one
    /// fractional digit when a precision is given.
    #[default]
    Shortest,
    /// `f`
    Fixed,
    /// `e`
    Exponent,
    /// `g`
    General,
    /// `%`
    Percent,
}

/// Parsed format specifier `[[fill]align][sign][0][width][.precision][type][p]`.
///
/// Width and precision are limited to `u16::MAX`.
///
/// # Examples
///
/// ```
/// # use vector2d::*;
/// let spec: FormatSpec = ".2fp".parse()?;
/// assert!(spec.polar);
/// assert_eq!(spec.precision, Some(2));
/// assert_eq!(Vector2d::new(1, 1)?.format_spec(&spec), "<1.41, 0.79>");
/// # Ok::<(), VectorError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpec {
    pub fill: char,
    pub align: Option<Align>,
    pub sign: Sign,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    pub presentation: Presentation,
    pub uppercase: bool,
    pub polar: bool,
}

impl Default for FormatSpec {
    fn default() -> Self {
        FormatSpec {
            fill: ' ',
            align: None,
            sign: Sign::default(),
            width: None,
            precision: None,
            presentation: Presentation::default(),
            uppercase: false,
            polar: false,
        }
    }
}

fn parse_align(c: char) -> Option<Align> {
    match c {
        '<' => Some(Align::Left),
        '>' => Some(Align::Right),
        '^' => Some(Align::Center),
        '=' => Some(Align::AfterSign),
        _ => None,
    }
}

impl FromStr for FormatSpec {
    type Err = VectorError;

    fn from_str(spec: &str) -> Result<Self> {
        let invalid = |reason| VectorError::InvalidFormatSpec {
            spec: spec.to_string(),
            reason,
        };

        let mut result = FormatSpec::default();
        let mut rest = spec;
        if let Some(stripped) = rest.strip_suffix(POLAR_MARKER) {
            result.polar = true;
            rest = stripped;
        }

        let chars: Vec<char> = rest.chars().collect();
        let mut i = 0;

        match (chars.get(0).copied(), chars.get(1).and_then(|&c| parse_align(c))) {
            (Some(fill), Some(align)) => {
                result.fill = fill;
                result.align = Some(align);
                i = 2;
            }
            (Some(c), None) => {
                if let Some(align) = parse_align(c) {
                    result.align = Some(align);
                    i = 1;
                }
            }
            (None, _) => {}
        }

        match chars.get(i) {
            Some('+') => {
                result.sign = Sign::Always;
                i += 1;
            }
            Some('-') => i += 1,
            Some(' ') => {
                result.sign = Sign::Space;
                i += 1;
            }
            _ => {}
        }

        if chars.get(i) == Some(&'0') {
            if result.align.is_none() {
                result.fill = '0';
                result.align = Some(Align::AfterSign);
            }
            i += 1;
        }

        let (width, next) = parse_number(&chars, i);
        if let Some(width) = width {
            if width > MAX_COUNT {
                return Err(invalid("width too large"));
            }
            result.width = Some(width);
        }
        i = next;

        if chars.get(i) == Some(&'.') {
            let (precision, next) = parse_number(&chars, i + 1);
            let precision = precision.ok_or_else(|| invalid("missing precision"))?;
            if precision > MAX_COUNT {
                return Err(invalid("precision too large"));
            }
            result.precision = Some(precision);
            i = next;
        }

        if let Some(&c) = chars.get(i) {
            result.presentation = match c {
                'f' | 'F' => Presentation::Fixed,
                'e' | 'E' => Presentation::Exponent,
                'g' | 'G' => Presentation::General,
                '%' => Presentation::Percent,
                _ => return Err(invalid("unknown presentation type")),
            };
            result.uppercase = c.is_ascii_uppercase();
            i += 1;
        }

        if i != chars.len() {
            return Err(invalid("unexpected trailing characters"));
        }

        Ok(result)
    }
}

fn parse_number(chars: &[char], start: usize) -> (Option<usize>, usize) {
    let mut end = start;
    let mut value: Option<usize> = None;
    while let Some(d) = chars.get(end).and_then(|c| c.to_digit(10)) {
        value = Some(
            value
                .unwrap_or(0)
                .saturating_mul(10)
                .saturating_add(d as usize),
        );
        end += 1;
    }
    (value, end)
}

impl FormatSpec {
    /// Build a specifier from the flags of a standard [fmt::Formatter].
    ///
    /// A precision selects fixed notation (the Rust meaning of `{:.2}`) and the alternate flag
    /// selects polar output.
    pub fn from_formatter(f: &fmt::Formatter<'_>) -> Self {
        let align = f.align().map(|a| match a {
            fmt::Alignment::Left => Align::Left,
            fmt::Alignment::Right => Align::Right,
            fmt::Alignment::Center => Align::Center,
        });

        let (fill, align) = if f.sign_aware_zero_pad() {
            ('0', Some(Align::AfterSign))
        } else {
            (f.fill(), align)
        };

        FormatSpec {
            fill,
            align,
            sign: if f.sign_plus() {
                Sign::Always
            } else {
                Sign::Negative
            },
            width: f.width(),
            precision: f.precision(),
            presentation: if f.precision().is_some() {
                Presentation::Fixed
            } else {
                Presentation::Shortest
            },
            uppercase: false,
            polar: f.alternate(),
        }
    }

    /// Render a single component.
    pub fn render<T>(&self, value: T) -> String
    where
        T: Real,
    {
        let negative = value.is_sign_negative();
        let magnitude = num_traits::real::Real::abs(value);
        let mut body = if magnitude.widen().is_infinite() {
            match self.presentation {
                Presentation::Percent => "inf%".to_string(),
                _ => "inf".to_string(),
            }
        } else {
            self.render_digits(magnitude)
        };

        if self.uppercase {
            body = body.to_uppercase();
        }

        let sign = match (negative, self.sign) {
            (true, _) => "-",
            (false, Sign::Always) => "+",
            (false, Sign::Space) => " ",
            (false, Sign::Negative) => "",
        };

        self.pad(sign, &body)
    }

    fn render_digits<T>(&self, magnitude: T) -> String
    where
        T: Real,
    {
        let value = magnitude.widen();
        match self.presentation {
            Presentation::Shortest => match self.precision {
                None => python_exponent(&format!("{:?}", magnitude)),
                Some(p) => general(value, p, true),
            },
            Presentation::Fixed => format!("{:.*}", self.precision.unwrap_or(6), value),
            Presentation::Exponent => {
                python_exponent(&format!("{:.*e}", self.precision.unwrap_or(6), value))
            }
            Presentation::General => general(value, self.precision.unwrap_or(6), false),
            Presentation::Percent => {
                format!("{:.*}%", self.precision.unwrap_or(6), value * 100.0)
            }
        }
    }

    fn pad(&self, sign: &str, body: &str) -> String {
        let len = sign.chars().count() + body.chars().count();
        let padding = match self.width {
            Some(width) if width > len => width - len,
            _ => return format!("{}{}", sign, body),
        };

        let fill = |n: usize| std::iter::repeat(self.fill).take(n).collect::<String>();
        match self.align.unwrap_or(Align::Right) {
            Align::Left => format!("{}{}{}", sign, body, fill(padding)),
            Align::Right => format!("{}{}{}", fill(padding), sign, body),
            Align::Center => {
                let left = padding / 2;
                format!("{}{}{}{}", fill(left), sign, body, fill(padding - left))
            }
            Align::AfterSign => format!("{}{}{}", sign, fill(padding), body),
        }
    }
}

/// Rewrite a Rust exponent suffix (`e5`, `e-7`) to the signed two digit form (`e+05`, `e-07`).
pub(super) fn python_exponent(text: &str) -> String {
    match text.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text.to_string(),
    }
}

/// General format with `precision` significant digits.
///
/// Picks scientific notation when the decimal exponent is below -4 or too large for the
/// precision, otherwise fixed notation. Trailing zeros are removed, `keep_point` keeps one
/// fractional digit in fixed notation and moves the scientific switch one digit earlier.
fn general(value: f64, precision: usize, keep_point: bool) -> String {
    let p = precision.max(1);
    let sci = format!("{:.*e}", p - 1, value);
    let exp = sci
        .split_once('e')
        .and_then(|(_, e)| e.parse::<i64>().ok())
        .unwrap_or(0);

    let limit = if keep_point { p as i64 - 1 } else { p as i64 };
    if exp < -4 || exp >= limit {
        let (mantissa, _) = sci.split_once('e').unwrap_or((sci.as_str(), ""));
        let mantissa = strip_fraction_zeros(mantissa);
        return python_exponent(&format!("{}e{}", mantissa, exp));
    }

    let decimals = (p as i64 - 1 - exp).max(0) as usize;
    let fixed = format!("{:.*}", decimals, value);
    let fixed = strip_fraction_zeros(&fixed);
    if keep_point && !fixed.contains('.') {
        format!("{}.0", fixed)
    } else {
        fixed
    }
}

fn strip_fraction_zeros(text: &str) -> String {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text.to_string()
    }
}

impl<T> Vector2<T>
where
    T: Real,
{
    /// Format with a parsed specifier.
    pub fn format_spec(&self, spec: &FormatSpec) -> String {
        let (a, b, open, close) = if spec.polar {
            (self.magnitude(), self.angle(), '<', '>')
        } else {
            (self.x(), self.y(), '(', ')')
        };

        format!("{}{}, {}{}", open, spec.render(a), spec.render(b), close)
    }

    /// Format with a specifier string, a trailing `p` selects polar output.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vector2d::*;
    /// let v = Vector2d::new(1, 1)?;
    /// assert_eq!(v.format_with("")?, "(1.0, 1.0)");
    /// assert_eq!(v.format_with(".2f")?, "(1.00, 1.00)");
    /// assert_eq!(v.format_with(".3ep")?, "<1.414e+00, 7.854e-01>");
    /// # Ok::<(), VectorError>(())
    /// ```
    pub fn format_with(&self, spec: &str) -> Result<String> {
        let spec: FormatSpec = spec.parse()?;
        Ok(self.format_spec(&spec))
    }
}
