/// Classification of a branch name into its type prefix and base remainder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchInfo {
    /// Type token, e.g. `release`; the whole name when unclassifiable
    pub branch_type: String,
    /// Remainder after the separator; empty when there is none
    pub base: String,
}

impl BranchInfo {
    pub fn new(branch_type: impl Into<String>, base: impl Into<String>) -> Self {
        BranchInfo {
            branch_type: branch_type.into(),
            base: base.into(),
        }
    }
}

/// Strategies splitting a branch name into a [`BranchInfo`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchParser {
    /// Splits on the first occurrence of the separator.
    ///
    /// * `release/2.0` -> (`release`, `2.0`)
    /// * `feature/2.0` -> (`feature`, `2.0`)
    /// * `master` -> (`master`, ``)
    ///
    /// A separator at position 0 does not split: `/foo` -> (`/foo`, ``).
    Default,
}

impl BranchParser {
    pub fn parse(&self, branch: &str, separator: &str) -> BranchInfo {
        match self {
            BranchParser::Default => match branch.find(separator) {
                Some(pos) if pos > 0 => {
                    BranchInfo::new(&branch[..pos], &branch[pos + separator.len()..])
                }
                _ => BranchInfo::new(branch, ""),
            },
        }
    }
}
