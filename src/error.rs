/// Error type for NIC validation, parsing, and format conversion.
///
/// Every failure is an ordinary outcome of invalid input; the crate never
/// panics. Callers should match on the variant, not on the rendered message
/// (message wording is not a stable contract).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NicError {
    /// Input matches neither structural pattern: 9 digits followed by
    /// `V`/`X` (old format), or exactly 12 digits (new format).
    #[error(
        "invalid NIC structure: old format requires 9 digits followed by 'V' or 'X', new format requires 12 digits"
    )]
    InvalidNicStructure,

    /// Birth year is earlier than the oldest year accepted for a valid NIC.
    #[error("maximum age requirement not met: birth year is earlier than the oldest valid birth year")]
    MaximumAgeRequirementNotMet,

    /// Holder has not yet reached the minimum legal age to hold a NIC,
    /// either because the birth year is too recent or because the birthday
    /// in the boundary year has not been reached yet.
    #[error("minimum age requirement not met: holder is younger than the legal age to obtain a NIC")]
    MinimumAgeRequirementNotMet,

    /// Decoded day-of-year falls outside `1..=365` (or `1..=366` for a leap
    /// birth year), after removing the female offset of 500.
    #[error("invalid day of year: must be 001-365/366 for males or 501-865/866 for females")]
    InvalidDayOfYear,

    /// New-to-old conversion requires a birth year starting with "19".
    #[error("only 19xx birth years can be converted to the old format, got year {0}")]
    InvalidYearForOldFormatConversion(String),

    /// New-to-old conversion requires a serial number starting with "0";
    /// the old format only holds 3 serial digits.
    #[error("serial number {0} is too large to fit the 3-digit serial of the old format")]
    SerialNumberTooLargeForOldFormat(String),
}
