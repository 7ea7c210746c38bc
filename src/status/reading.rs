//! Parsing of brightnessctl's machine-readable output.

use thiserror::Error;

/// A parse failure on brightnessctl output. Fatal for the cycle in which it
/// occurs; never silently defaulted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("cannot parse brightnessctl output: {0:?}")]
    TooFewFields(String),

    #[error("invalid raw brightness field {0:?} in brightnessctl output")]
    BadRawValue(String),

    #[error("invalid percentage field {0:?} in brightnessctl output")]
    BadPercentage(String),
}

/// A single reading taken from `brightnessctl -m`.
///
/// The machine-readable format emits one comma-separated line per device,
/// such as `intel_backlight,backlight,48000,50%,96000`. Only the trailing
/// three fields are consumed: the raw value, the percentage and one ignored
/// trailing field. Whatever comes before them, in whatever quantity, is
/// skipped, which keeps the parser indifferent to the exact field layout in
/// front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessReading {
    pub raw_value: u64,
    pub percentage: u8,
}

impl BrightnessReading {
    /// Splits the output on its last three commas and reads the raw value
    /// and percentage. Fewer than four resulting segments is a
    /// [ParseError::TooFewFields].
    pub fn parse(output: &str) -> Result<BrightnessReading, ParseError> {
        let mut fields = output.trim_end().rsplitn(4, ',');
        let _trailing = fields
            .next()
            .ok_or_else(|| ParseError::TooFewFields(output.to_string()))?;
        let percentage_field = fields
            .next()
            .ok_or_else(|| ParseError::TooFewFields(output.to_string()))?;
        let raw_field = fields
            .next()
            .ok_or_else(|| ParseError::TooFewFields(output.to_string()))?;
        if fields.next().is_none() {
            return Err(ParseError::TooFewFields(output.to_string()));
        }

        let raw_value = raw_field
            .trim()
            .parse()
            .map_err(|_| ParseError::BadRawValue(raw_field.to_string()))?;
        let percentage = percentage_field
            .trim()
            .strip_suffix('%')
            .and_then(|digits| digits.parse().ok())
            .filter(|parsed| *parsed <= 100)
            .ok_or_else(|| ParseError::BadPercentage(percentage_field.to_string()))?;

        Ok(BrightnessReading {
            raw_value,
            percentage,
        })
    }

    /// Applies the minimum-brightness floor.
    ///
    /// Returns the percentage to display and, when the floor kicked in, the
    /// target of the corrective set command the caller must issue. The
    /// displayed value is substituted immediately; it is not re-read from
    /// the tool afterwards.
    pub fn floored(&self, minimum: u8, allow_below: bool) -> (u8, Option<u8>) {
        if !allow_below && self.percentage < minimum {
            (minimum, Some(minimum))
        } else {
            (self.percentage, None)
        }
    }
}

/// Classification of a percentage against the dark threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Dark,
    Bright,
}

/// Bright iff the percentage strictly exceeds the threshold.
pub fn classify(percentage: u8, dark_threshold: u8) -> Shade {
    if percentage > dark_threshold {
        Shade::Bright
    } else {
        Shade::Dark
    }
}
