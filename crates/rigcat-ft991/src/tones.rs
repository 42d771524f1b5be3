//! CTCSS tone code table for the FT-991.
//!
//! The `CN00` command takes a 3-digit table index rather than the tone
//! frequency itself. The table maps tone frequencies (in Hz x 10, so
//! `1318` is 131.8 Hz) to the indices listed in the CAT reference manual.

/// Tone frequency (Hz x 10) to `CN00` table index.
const CTCSS_TONES: &[(&str, &str)] = &[
    ("670", "000"),
    ("693", "001"),
    ("719", "003"),
    ("744", "004"),
    ("770", "005"),
    ("825", "006"),
    ("854", "007"),
    ("885", "008"),
    ("915", "009"),
    ("948", "010"),
    ("974", "011"),
    ("1000", "012"),
    ("1035", "013"),
    ("1072", "014"),
    ("1109", "015"),
    ("1148", "016"),
    ("1188", "017"),
    ("1230", "018"),
    ("1273", "019"),
    ("1318", "020"),
    ("1365", "021"),
    ("1413", "022"),
    ("1462", "023"),
    ("1514", "024"),
    ("1567", "025"),
    ("1598", "026"),
    ("1622", "027"),
    ("1655", "028"),
    ("1679", "029"),
    ("1713", "030"),
    ("1738", "031"),
    ("1773", "032"),
    ("1799", "033"),
    ("1835", "034"),
    ("1862", "035"),
    ("1899", "036"),
    ("1928", "037"),
    ("1966", "038"),
    ("1995", "039"),
    ("2035", "040"),
    ("2065", "041"),
    ("2107", "042"),
    ("2181", "043"),
    ("2257", "044"),
    ("2291", "045"),
    ("2336", "046"),
    ("2418", "047"),
    ("2503", "048"),
    ("2541", "049"),
];

/// Look up the `CN00` index for a tone frequency given in Hz x 10.
///
/// Returns `None` if the frequency is not a standard CTCSS tone.
pub fn tone_code(freq: &str) -> Option<&'static str> {
    CTCSS_TONES
        .iter()
        .find(|(f, _)| *f == freq)
        .map(|(_, code)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_tones_resolve() {
        assert_eq!(tone_code("670"), Some("000"));
        assert_eq!(tone_code("1318"), Some("020"));
        assert_eq!(tone_code("2541"), Some("049"));
    }

    #[test]
    fn nonstandard_tones_rejected() {
        assert_eq!(tone_code("1000000"), None);
        assert_eq!(tone_code("671"), None);
        assert_eq!(tone_code(""), None);
    }

    #[test]
    fn table_matches_the_cat_reference() {
        // The manual's table runs to index 049 but skips 002, so 49 tones.
        assert_eq!(CTCSS_TONES.len(), 49);
        assert!(!CTCSS_TONES.iter().any(|(_, code)| *code == "002"));
    }
}
