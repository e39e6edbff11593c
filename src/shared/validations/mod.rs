use validator::ValidationError;

/// Season codes accepted from the order form.
pub const SEASON_CODES: [&str; 3] = ["0", "1", "2"];

pub fn validate_season(code: &str) -> Result<(), ValidationError> {
    if SEASON_CODES.contains(&code) {
        Ok(())
    } else {
        let mut err = ValidationError::new("season");
        err.message = Some(format!("unknown season code '{}'", code).into());
        Err(err)
    }
}

/// Digits with optional hyphens, e.g. `03-1234-5678` or `09012345678`.
pub fn validate_tel(tel: &str) -> Result<(), ValidationError> {
    let digits = tel.chars().filter(|c| c.is_ascii_digit()).count();
    let well_formed = tel.chars().all(|c| c.is_ascii_digit() || c == '-')
        && !tel.starts_with('-')
        && !tel.ends_with('-');

    if well_formed && (10..=11).contains(&digits) {
        Ok(())
    } else {
        let mut err = ValidationError::new("tel");
        err.message = Some("telephone number must have 10 or 11 digits".into());
        Err(err)
    }
}
