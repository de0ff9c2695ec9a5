use super::Occurrence;
use crate::error::{BindError, BindResult};
use std::collections::HashMap;

/// Rebuild `template` with every occurrence replaced by its literal.
pub(super) fn substitute(
    template: &str,
    occurrences: &[Occurrence],
    values: &HashMap<String, String>,
) -> BindResult<String> {
    if occurrences.is_empty() {
        return Ok(template.to_string());
    }

    let extra: usize = values.values().map(String::len).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut cursor = 0;

    for occ in occurrences {
        out.push_str(&template[cursor..occ.position]);
        let value = values
            .get(&occ.name)
            .ok_or_else(|| BindError::missing(occ.name.as_str()))?;
        out.push_str(value);
        cursor = occ.end();
    }

    out.push_str(&template[cursor..]);
    Ok(out)
}
