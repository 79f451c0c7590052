use std::sync::atomic::{AtomicU16, Ordering};

/// Default minimum legal age to hold a NIC in Sri Lanka.
///
/// "Every person who is a citizen of Sri Lanka and who has attained or
/// attains the age of 15 years shall apply for a National Identity card."
/// <https://drp.gov.lk/en/normal.php>
pub const DEFAULT_MINIMUM_LEGAL_AGE: u16 = 15;

/// Default oldest birth year considered valid. NICs encoding earlier birth
/// years are rejected.
pub const DEFAULT_OLDEST_VALID_BIRTH_YEAR: u16 = 1901;

static MINIMUM_LEGAL_AGE: AtomicU16 = AtomicU16::new(DEFAULT_MINIMUM_LEGAL_AGE);
static OLDEST_VALID_BIRTH_YEAR: AtomicU16 = AtomicU16::new(DEFAULT_OLDEST_VALID_BIRTH_YEAR);

/// Adjustable validation thresholds.
///
/// Every validation reads a config: the ergonomic entry points
/// ([`crate::Nic::validate`], [`crate::Nic::parse`], ...) snapshot the
/// process-wide instance via [`Config::global`], while the `*_with` variants
/// accept an explicit `&Config` so tests and embedders can avoid shared
/// state entirely.
///
/// Changing the global config affects subsequent validations only, never
/// records that already exist. The two fields are stored in independent
/// atomics with relaxed ordering: a concurrent [`Config::set_global`] may
/// interleave between the two field reads of a single validation, so callers
/// mutating the global config at runtime must serialize that mutation
/// themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Minimum legal age to hold a NIC, in years.
    pub minimum_legal_age: u16,
    /// Oldest birth year accepted as valid.
    pub oldest_valid_birth_year: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            minimum_legal_age: DEFAULT_MINIMUM_LEGAL_AGE,
            oldest_valid_birth_year: DEFAULT_OLDEST_VALID_BIRTH_YEAR,
        }
    }
}

impl Config {
    /// Returns a snapshot of the process-wide config.
    pub fn global() -> Self {
        Self {
            minimum_legal_age: MINIMUM_LEGAL_AGE.load(Ordering::Relaxed),
            oldest_valid_birth_year: OLDEST_VALID_BIRTH_YEAR.load(Ordering::Relaxed),
        }
    }

    /// Replaces the process-wide config.
    pub fn set_global(config: Self) {
        MINIMUM_LEGAL_AGE.store(config.minimum_legal_age, Ordering::Relaxed);
        OLDEST_VALID_BIRTH_YEAR.store(config.oldest_valid_birth_year, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.minimum_legal_age, 15);
        assert_eq!(config.oldest_valid_birth_year, 1901);
    }

    #[test]
    fn test_global_roundtrip() {
        // Restore afterwards: the global is shared across the test process.
        let original = Config::global();

        let custom = Config {
            minimum_legal_age: 16,
            oldest_valid_birth_year: 1920,
        };
        Config::set_global(custom);
        assert_eq!(Config::global(), custom);

        Config::set_global(original);
        assert_eq!(Config::global(), original);
    }
}
