use crate::conversion::round_db;

pub const DEFAULT_PRECISION: usize = 2;

pub trait ParameterFormatter<T> : Send + Sync {
    fn value_to_string(&self, value: T) -> String;
    fn string_to_value(&self, string: &str) -> Option<T>;
}

/// Formats raw user text for display, treating anything that isn't a number as zero.
pub fn format_lenient(formatter: &dyn ParameterFormatter<f64>, text: Option<&str>) -> String {
    let value = text
        .and_then(|text| text.trim().parse().ok())
        .unwrap_or(0.0);

    formatter.value_to_string(value)
}

pub struct FloatFormatter {
    precision: usize,
    unit: &'static str,
}

impl FloatFormatter {
    pub const fn new(precision: usize, unit: &'static str) -> Self {
        Self {
            precision,
            unit,
        }
    }
}

impl Default for FloatFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION, "")
    }
}

impl ParameterFormatter<f64> for FloatFormatter {
    fn value_to_string(&self, value: f64) -> String {
        let precision = self.precision;
        let scale = 10f64.powi(precision.min(i32::MAX as usize) as i32);

        // Anything that displays as zero is printed unsigned
        let value = if (value * scale).round() == 0.0 { 0.0 } else { value };

        format!("{value:.precision$}{}", self.unit)
    }

    fn string_to_value(&self, string: &str) -> Option<f64> {
        let string = string.trim();
        let string = string.strip_suffix(self.unit).unwrap_or(string);
        string.trim_end().parse().ok()
    }
}

/// Whole-dB formatter, e.g. `-12 dB`, optionally `+3 dB` for positive levels.
pub struct DecibelFormatter {
    plus_sign: bool,
}

impl DecibelFormatter {
    pub const UNIT: &'static str = "dB";

    pub const fn new() -> Self {
        Self {
            plus_sign: false,
        }
    }

    pub const fn with_plus_sign(mut self) -> Self {
        self.plus_sign = true;
        self
    }
}

impl Default for DecibelFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterFormatter<f64> for DecibelFormatter {
    fn value_to_string(&self, value: f64) -> String {
        let value = round_db(value);
        let value = if value == 0.0 { 0.0 } else { value };

        if self.plus_sign && value > 0.0 {
            format!("+{value:.0} {}", Self::UNIT)
        } else {
            format!("{value:.0} {}", Self::UNIT)
        }
    }

    fn string_to_value(&self, string: &str) -> Option<f64> {
        let string = string.trim();
        let string = string.strip_suffix(Self::UNIT).unwrap_or(string);
        string.trim_end().parse().ok()
    }
}
