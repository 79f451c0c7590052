mod calendar;
mod config;
mod consts;
mod error;
mod parts;
mod prelude;

pub use calendar::{Date, days_in_year, is_leap_year, today};
pub use config::{Config, DEFAULT_MINIMUM_LEGAL_AGE, DEFAULT_OLDEST_VALID_BIRTH_YEAR};
pub use consts::*;
pub use error::NicError;
pub use parts::NicParts;

use crate::prelude::*;
use serde::Serialize;
use std::str::FromStr;

/// A parsed Sri Lankan National Identity Card (NIC) number.
///
/// Covers both the old format (9 digits followed by `V`/`X`) and the new
/// format (12 digits). A `Nic` exists only if the input passed every
/// structural and semantic check; there is no partially valid state, and the
/// record never changes after construction.
///
/// Created exclusively via [`Nic::parse`] (or the equivalent [`FromStr`]
/// impl), which validates, sanitizes, and decomposes the input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{value}")]
pub struct Nic {
    value: String,
    format: Format,
    gender: Gender,
    parts: NicParts,
    birth_year: u16,
    day_of_year: u16,
}

/// Validated fields produced by the internal validator, consumed by the
/// public operations with different result shaping.
struct ValidatorOutcome {
    value: String,
    format: Format,
    gender: Gender,
    birth_year: u16,
    day_of_year: u16,
    parts: NicParts,
}

impl Nic {
    /// Checks a NIC string against the process-wide [`Config`] and the
    /// current Sri Lankan date.
    ///
    /// The error is returned as a value, never panicked; use it to present
    /// the specific reason the input was rejected.
    ///
    /// # Errors
    /// Returns the first failing check's [`NicError`].
    pub fn validate(nic: &str) -> Result<(), NicError> {
        Self::validate_with(nic, &Config::global(), calendar::today())
    }

    /// Checks a NIC string against an explicit config and reference date.
    ///
    /// This is the deterministic variant of [`Nic::validate`]: tests and
    /// embedders pass a pinned `today` and their own thresholds instead of
    /// consulting the ambient clock and global config.
    ///
    /// # Errors
    /// Returns the first failing check's [`NicError`].
    pub fn validate_with(nic: &str, config: &Config, today: Date) -> Result<(), NicError> {
        Self::validator(nic, config, today).map(|_| ())
    }

    /// Whether a NIC string is valid.
    ///
    /// Convenience shorthand for [`Nic::validate`] that discards the error
    /// details.
    pub fn is_valid(nic: &str) -> bool {
        Self::validate(nic).is_ok()
    }

    /// Validates a NIC string and returns its canonical (trimmed,
    /// uppercased) form.
    ///
    /// # Errors
    /// Returns the first failing check's [`NicError`].
    pub fn sanitize(nic: &str) -> Result<String, NicError> {
        Self::validator(nic, &Config::global(), calendar::today()).map(|outcome| outcome.value)
    }

    /// Parses a NIC string into a fully validated [`Nic`].
    ///
    /// Uses the process-wide [`Config`] and the current Sri Lankan date;
    /// see [`Nic::parse_with`] for the deterministic variant.
    ///
    /// # Errors
    /// Returns the first failing check's [`NicError`].
    pub fn parse(nic: &str) -> Result<Self, NicError> {
        Self::parse_with(nic, &Config::global(), calendar::today())
    }

    /// Parses a NIC string against an explicit config and reference date.
    ///
    /// # Errors
    /// Returns the first failing check's [`NicError`].
    pub fn parse_with(nic: &str, config: &Config, today: Date) -> Result<Self, NicError> {
        let outcome = Self::validator(nic, config, today)?;

        Ok(Self {
            value: outcome.value,
            format: outcome.format,
            gender: outcome.gender,
            parts: outcome.parts,
            birth_year: outcome.birth_year,
            day_of_year: outcome.day_of_year,
        })
    }

    /// The sanitized (trimmed, uppercased) NIC string.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The format this NIC was issued in.
    pub const fn format(&self) -> Format {
        self.format
    }

    /// The holder's gender, derived from the encoded day-of-year.
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// The decomposed structural fields.
    pub const fn parts(&self) -> &NicParts {
        &self.parts
    }

    /// Full 4-digit birth year.
    pub const fn birth_year(&self) -> u16 {
        self.birth_year
    }

    /// 1-based day within the birth year, with the female offset removed.
    pub const fn day_of_year(&self) -> u16 {
        self.day_of_year
    }

    /// The date of birth encoded in this NIC.
    pub fn birthday(&self) -> Date {
        calendar::date_from_day_of_year(self.birth_year, self.day_of_year)
    }

    /// The holder's age in whole years as of the current Sri Lankan date.
    ///
    /// Recomputed on every call; the result moves with the clock.
    pub fn age(&self) -> u16 {
        self.age_on(calendar::today())
    }

    /// The holder's age in whole years as of `today`.
    pub fn age_on(&self, today: Date) -> u16 {
        calendar::age_on(self.birthday(), today)
    }

    /// Whether the holder is marked as a registered voter.
    ///
    /// Derived from the trailing letter of the old format (`V` = voter,
    /// `X` = not). The new format does not encode voter status, so this is
    /// `None` for new-format NICs.
    pub fn voter(&self) -> Option<bool> {
        self.parts.letter.map(|letter| letter == VOTER_LETTER)
    }

    /// Converts this NIC to the opposite format.
    ///
    /// Old to new always succeeds: the 4-digit year is kept, the serial
    /// gains a leading `0`, and the voter letter is dropped. New to old only
    /// succeeds for `19xx` birth years with a serial starting `0`, since the
    /// old format holds 2 year digits and 3 serial digits; the trailing
    /// letter is always emitted as `V` because the new format never stored
    /// the original voter status.
    ///
    /// # Errors
    /// Returns [`NicError::InvalidYearForOldFormatConversion`] or
    /// [`NicError::SerialNumberTooLargeForOldFormat`] for new-format NICs
    /// that cannot fit the old format.
    pub fn convert(&self) -> Result<String, NicError> {
        let NicParts {
            year,
            days,
            serial,
            checkdigit,
            ..
        } = &self.parts;

        match self.format {
            Format::Old => Ok(format!("{year}{days}0{serial}{checkdigit}")),
            Format::New => {
                if !year.starts_with(OLD_CENTURY_PREFIX) {
                    return Err(NicError::InvalidYearForOldFormatConversion(year.clone()));
                }

                if !serial.starts_with('0') {
                    return Err(NicError::SerialNumberTooLargeForOldFormat(serial.clone()));
                }

                Ok(format!(
                    "{}{days}{}{checkdigit}{VOTER_LETTER}",
                    &year[2..],
                    &serial[1..]
                ))
            }
        }
    }

    /// A plain serializable snapshot of everything decoded from this NIC,
    /// with the age taken as of the current Sri Lankan date.
    pub fn summary(&self) -> NicSummary {
        self.summary_on(calendar::today())
    }

    /// A plain serializable snapshot with the age taken as of `today`.
    pub fn summary_on(&self, today: Date) -> NicSummary {
        NicSummary {
            nic: self.value.clone(),
            format: self.format,
            gender: self.gender,
            birthday: self.birthday(),
            age: self.age_on(today),
            voter: self.voter(),
            parts: self.parts.clone(),
        }
    }

    /// Matches the input against the two fixed structural patterns.
    fn detect_format(nic: &str) -> Option<Format> {
        let bytes = nic.as_bytes();

        match bytes.len() {
            OLD_NIC_LEN => {
                let (digits, letter) = bytes.split_at(OLD_NIC_LEN - 1);
                let letter = char::from(letter[0]);
                (digits.iter().all(u8::is_ascii_digit)
                    && (letter == VOTER_LETTER || letter == NON_VOTER_LETTER))
                    .then_some(Format::Old)
            }
            NEW_NIC_LEN => bytes
                .iter()
                .all(u8::is_ascii_digit)
                .then_some(Format::New),
            _ => None,
        }
    }

    /// The single validation pipeline behind every public operation.
    ///
    /// Checks run in a fixed order and the first failure wins; no error
    /// accumulation.
    fn validator(nic: &str, config: &Config, today: Date) -> Result<ValidatorOutcome, NicError> {
        let value = nic.trim().to_uppercase();

        let format = Self::detect_format(&value).ok_or(NicError::InvalidNicStructure)?;
        let parts = NicParts::decompose(&value, format);

        // Both substrings are all-digit and at most 4 characters, so these
        // cannot fail after detect_format.
        let birth_year: u16 = parts
            .year
            .parse()
            .map_err(|_| NicError::InvalidNicStructure)?;
        let raw_days: u16 = parts
            .days
            .parse()
            .map_err(|_| NicError::InvalidNicStructure)?;

        let (gender, day_of_year) = if raw_days > FEMALE_DAY_OFFSET {
            (Gender::Female, raw_days - FEMALE_DAY_OFFSET)
        } else {
            (Gender::Male, raw_days)
        };

        let latest_valid_birth_year = today.year.saturating_sub(config.minimum_legal_age);

        if birth_year < config.oldest_valid_birth_year {
            return Err(NicError::MaximumAgeRequirementNotMet);
        }

        if birth_year > latest_valid_birth_year {
            return Err(NicError::MinimumAgeRequirementNotMet);
        }

        if day_of_year == 0 || day_of_year > calendar::days_in_year(birth_year) {
            return Err(NicError::InvalidDayOfYear);
        }

        // Born in the latest acceptable year: the coarse year check passes
        // even when the birthday has not come around yet this year.
        if birth_year == latest_valid_birth_year {
            let birthday = calendar::date_from_day_of_year(birth_year, day_of_year);
            if calendar::age_on(birthday, today) < config.minimum_legal_age {
                return Err(NicError::MinimumAgeRequirementNotMet);
            }
        }

        Ok(ValidatorOutcome {
            value,
            format,
            gender,
            birth_year,
            day_of_year,
            parts,
        })
    }
}

impl FromStr for Nic {
    type Err = NicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for Nic {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> serde::Deserialize<'de> for Nic {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A plain snapshot of a parsed NIC, shaped for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NicSummary {
    /// Canonical NIC string.
    pub nic: String,
    /// Issue format.
    #[serde(rename = "type")]
    pub format: Format,
    /// Derived gender.
    pub gender: Gender,
    /// Decoded date of birth.
    pub birthday: Date,
    /// Age in whole years at the time the summary was taken.
    pub age: u16,
    /// Voter flag; `None` for new-format NICs.
    pub voter: Option<bool>,
    /// Structural fields.
    pub parts: NicParts,
}

/// The issue format of a Sri Lankan NIC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Old format: 9 digits followed by `V` or `X` (e.g. `"932345678V"`),
    /// issued before 2016.
    #[display(fmt = "old")]
    Old,
    /// New format: 12 digits (e.g. `"200012345678"`), issued 2016 onward.
    #[display(fmt = "new")]
    New,
}

/// Gender of the NIC holder, derived from the encoded day-of-year
/// (values above 500 indicate female).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male: day-of-year stored as 1-366.
    #[display(fmt = "male")]
    Male,
    /// Female: day-of-year stored as 501-866.
    #[display(fmt = "female")]
    Female,
}
