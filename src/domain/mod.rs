//! Domain logic - pure version rules independent of any SCM access

pub mod branch;
pub mod branch_id;
pub mod display;
pub mod full_version;
pub mod release;
pub mod scm_info;
pub mod tag;
pub mod version_info;

pub use branch::{BranchInfo, BranchParser};
pub use branch_id::normalize;
pub use display::{BranchVersion, DisplayMode};
pub use full_version::FullVersionBuilder;
pub use release::ReleaseMode;
pub use scm_info::ScmInfo;
pub use tag::{next_tag, TagSequence};
pub use version_info::VersionInfo;
