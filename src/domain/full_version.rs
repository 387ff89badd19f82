/// Strategies combining a branch id and an abbreviated commit into the full version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullVersionBuilder {
    /// `<branchId>-<abbreviated>`
    Default,
}

impl FullVersionBuilder {
    pub fn build(&self, branch_id: &str, abbreviated: &str) -> String {
        match self {
            FullVersionBuilder::Default => format!("{}-{}", branch_id, abbreviated),
        }
    }
}
