/// Total length of an old-format NIC: 9 digits plus the voter letter
pub const OLD_NIC_LEN: usize = 10;

/// Total length of a new-format NIC: 12 digits, no letter
pub const NEW_NIC_LEN: usize = 12;

/// Century prefix prepended to the 2-digit year of old-format NICs
pub const OLD_CENTURY_PREFIX: &str = "19";

/// Offset added to the day-of-year to encode a female holder
pub const FEMALE_DAY_OFFSET: u16 = 500;

/// Trailing letter marking the holder as a registered voter
pub const VOTER_LETTER: char = 'V';

/// Trailing letter marking the holder as a non-voter
pub const NON_VOTER_LETTER: char = 'X';

/// Days in a non-leap year
pub const DAYS_IN_COMMON_YEAR: u16 = 365;

/// Days in a leap year
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

/// Cumulative day count at the end of each month in a non-leap year
/// (index 0 = January). Leap years shift every entry from February onward.
pub const MONTH_END_DAY_COUNTS: [u16; 12] = [
    31,  // January
    59,  // February (non-leap, adjusted by is_leap_year check)
    90,  // March
    120, // April
    151, // May
    181, // June
    212, // July
    243, // August
    273, // September
    304, // October
    334, // November
    365, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Sri Lanka standard time offset from UTC (+05:30), in seconds
pub(crate) const SRI_LANKA_UTC_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;
