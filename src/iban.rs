/// Turkish IBANs are exactly 26 characters and start with the "TR" prefix.
/// Shape check only, no checksum validation.
pub fn is_valid_iban(iban: &str) -> bool {
    iban.len() == 26 && iban.starts_with("TR")
}

/// The bank code sits at offset 7 of a Turkish IBAN; "46" is Akbank's.
/// Same-bank destinations may be routed as havale instead of EFT upstream.
pub fn is_akbank_iban(iban: &str) -> bool {
    iban.get(7..9) == Some("46")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_26_char_tr_ibans_only() {
        assert!(is_valid_iban("TR330006100519786457841326"));
        assert!(!is_valid_iban("FR7630006000011234567890189"));
        assert!(!is_valid_iban("TR33000610051978645784132"));
        assert!(!is_valid_iban("TR3300061005197864578413261"));
        assert!(!is_valid_iban(""));
    }

    #[test]
    fn detects_akbank_routing_digits() {
        assert!(is_akbank_iban("TR330004600519786457841326"));
        assert!(!is_akbank_iban("TR330006100519786457841326"));
        assert!(!is_akbank_iban("TR"));
    }
}
