use regex::Regex;

use crate::error::{Result, VersioningError};

/// Position in a `base.N` tag sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSequence {
    /// The tag the next release of this base should get
    pub next_tag: String,
    /// The most recent existing tag of the sequence, or empty
    pub last_tag: String,
}

/// Builds the anchored `^<base>\.([0-9]+)$` pattern for a base.
///
/// Only ASCII digits count; `\d` would also accept other Unicode digits.
pub fn base_tag_pattern(base: &str) -> Result<Regex> {
    Regex::new(&format!(r"^{}\.([0-9]+)$", regex::escape(base)))
        .map_err(|e| VersioningError::config(format!("Invalid tag pattern for '{}': {}", base, e)))
}

/// Computes the next tag in the `base.N` sequence.
///
/// `candidates` are the tags of the sequence, most recent first, as supplied
/// by the SCM adapter. The head of the list is re-validated here; a head that
/// is not of the `base.N` form aborts with [`VersioningError::TagParse`].
pub fn next_tag(base: &str, candidates: &[String]) -> Result<TagSequence> {
    let Some(last) = candidates.first() else {
        return Ok(TagSequence {
            next_tag: format!("{}.0", base),
            last_tag: String::new(),
        });
    };

    let last_tag = last.trim();
    let pattern = base_tag_pattern(base)?;
    let number = pattern
        .captures(last_tag)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u64>().ok())
        .and_then(|n| n.checked_add(1))
        .ok_or_else(|| VersioningError::tag_parse(base, last_tag))?;

    Ok(TagSequence {
        next_tag: format!("{}.{}", base, number),
        last_tag: last_tag.to_string(),
    })
}
