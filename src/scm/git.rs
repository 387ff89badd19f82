use git2::{DiffOptions, Oid, Repository, Sort};
use std::collections::HashMap;

use crate::config::VersioningConfig;
use crate::domain::tag::base_tag_pattern;
use crate::domain::ScmInfo;
use crate::error::Result;
use crate::scm::{ProjectContext, ScmAdapter};

/// Probes answering "does the working copy differ from HEAD?"; any `true` means dirty.
const DIRTY_PROBES: [fn(&Repository) -> Result<bool>; 2] =
    [workdir_differs_from_index, index_differs_from_head];

/// Reads version facts from a git repository through libgit2
#[derive(Debug, Clone, Copy, Default)]
pub struct GitAdapter;

impl GitAdapter {
    pub fn new() -> Self {
        GitAdapter
    }

    fn open(project: &ProjectContext) -> Result<Repository> {
        Ok(Repository::open(project.root())?)
    }
}

impl ScmAdapter for GitAdapter {
    fn name(&self) -> &'static str {
        "git"
    }

    fn info(&self, project: &ProjectContext, _config: &VersioningConfig) -> Result<ScmInfo> {
        if !project.has_file(".git") {
            tracing::debug!(root = %project.root().display(), "no .git directory");
            return Ok(ScmInfo::none());
        }

        let repo = Self::open(project)?;
        let head = repo.head()?;
        let branch = if repo.head_detached()? {
            "HEAD".to_string()
        } else {
            head.shorthand().unwrap_or("HEAD").to_string()
        };

        let commit = head.peel_to_commit()?;
        let abbreviated = commit
            .as_object()
            .short_id()?
            .as_str()
            .unwrap_or_default()
            .to_string();
        let tag = exact_tag(&repo, commit.id())?;
        let dirty = is_tree_dirty(&repo)?;

        tracing::debug!(%branch, commit = %commit.id(), ?tag, dirty, "git working copy");
        Ok(ScmInfo::new(
            branch,
            commit.id().to_string(),
            abbreviated,
            tag,
            dirty,
        ))
    }

    fn base_tags(
        &self,
        project: &ProjectContext,
        _config: &VersioningConfig,
        base: &str,
    ) -> Result<Vec<String>> {
        let repo = Self::open(project)?;
        let pattern = base_tag_pattern(base)?;

        // Matching tags grouped by the commit they point to
        let mut tagged: HashMap<Oid, Vec<String>> = HashMap::new();
        for (name, oid) in tag_targets(&repo)? {
            if pattern.is_match(&name) {
                tagged.entry(oid).or_default().push(name);
            }
        }

        let mut revwalk = repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push_head()?;

        let mut tags = Vec::new();
        for oid in revwalk {
            if let Some(mut on_commit) = tagged.remove(&oid?) {
                on_commit.sort_by(|a, b| tag_number(b, base).cmp(&tag_number(a, base)));
                tags.extend(on_commit);
            }
        }

        tracing::debug!(base, ?tags, "git base tags");
        Ok(tags)
    }

    fn branch_separator(&self) -> &'static str {
        "/"
    }
}

/// Sort key of a `base.N` tag: numeric order on the digits, whatever their length
fn tag_number<'a>(name: &'a str, base: &str) -> (usize, &'a str) {
    let digits = name
        .get(base.len() + 1..)
        .unwrap_or_default()
        .trim_start_matches('0');
    (digits.len(), digits)
}

/// All tags with the commit they peel to; tags of non-commit objects are skipped
fn tag_targets(repo: &Repository) -> Result<Vec<(String, Oid)>> {
    let mut targets = Vec::new();
    for name in repo.tag_names(None)?.iter().flatten() {
        let commit = repo
            .find_reference(&format!("refs/tags/{}", name))
            .and_then(|reference| reference.peel_to_commit());
        if let Ok(commit) = commit {
            targets.push((name.to_string(), commit.id()));
        }
    }
    Ok(targets)
}

/// First tag, in name order, pointing exactly at `head`
fn exact_tag(repo: &Repository, head: Oid) -> Result<Option<String>> {
    Ok(tag_targets(repo)?
        .into_iter()
        .find(|(_, oid)| *oid == head)
        .map(|(name, _)| name))
}

fn diff_options() -> DiffOptions {
    let mut opts = DiffOptions::new();
    opts.ignore_submodules(true);
    opts
}

fn workdir_differs_from_index(repo: &Repository) -> Result<bool> {
    let diff = repo.diff_index_to_workdir(None, Some(&mut diff_options()))?;
    Ok(diff.deltas().next().is_some())
}

fn index_differs_from_head(repo: &Repository) -> Result<bool> {
    let tree = repo.head()?.peel_to_tree()?;
    let diff = repo.diff_tree_to_index(Some(&tree), None, Some(&mut diff_options()))?;
    Ok(diff.deltas().next().is_some())
}

/// True as soon as one probe reports a difference
pub fn is_tree_dirty(repo: &Repository) -> Result<bool> {
    for probe in DIRTY_PROBES {
        if probe(repo)? {
            return Ok(true);
        }
    }
    Ok(false)
}
