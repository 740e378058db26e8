//! Colon-separated track lengths as reported by the catalog

/// Parses `M:SS` or `H:MM:SS` into seconds.
///
/// Fields are not range checked, `"1:75"` gives 135. Blanks around a
/// field are ignored.
/// Anything else yields `None`.
pub fn parse_duration(text: &str) -> Option<u64> {
    let parts = text
        .split(':')
        .map(|part| part.trim().parse::<u64>().ok())
        .collect::<Option<Vec<_>>>()?;

    let seconds = match parts.as_slice() {
        [minutes, seconds] => minutes.checked_mul(60)?.checked_add(*seconds)?,
        [hours, minutes, seconds] => hours
            .checked_mul(3600)?
            .checked_add(minutes.checked_mul(60)?)?
            .checked_add(*seconds)?,
        _ => return None,
    };
    Some(seconds)
}
