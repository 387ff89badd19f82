use regex::Regex;
use roxmltree::{Document, Node};
use std::sync::{Arc, OnceLock};

use crate::config::VersioningConfig;
use crate::domain::tag::base_tag_pattern;
use crate::domain::ScmInfo;
use crate::error::{Result, VersioningError};
use crate::scm::{CommandRunner, ProjectContext, ScmAdapter};

/// svn error code for a missing URL, i.e. no `tags/` folder yet
const MISSING_PATH_CODE: &str = "E200009";

fn trunk_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r".*/trunk$").expect("valid trunk pattern"))
}

fn branch_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r".*/branches/([^/]+)$").expect("valid branch pattern"))
}

/// Reads version facts by running the `svn` client
pub struct SvnAdapter {
    runner: Arc<dyn CommandRunner>,
}

impl SvnAdapter {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        SvnAdapter { runner }
    }

    fn svn(&self, project: &ProjectContext, args: &[String]) -> Result<String> {
        self.runner.run(project.root(), "svn", args)
    }

    fn info_url_and_revision(&self, project: &ProjectContext) -> Result<(String, String)> {
        let xml = self.svn(project, &strings(&["info", "--xml"]))?;
        parse_info(&xml)
    }
}

impl ScmAdapter for SvnAdapter {
    fn name(&self) -> &'static str {
        "svn"
    }

    fn info(&self, project: &ProjectContext, _config: &VersioningConfig) -> Result<ScmInfo> {
        if !project.has_file(".svn") {
            tracing::debug!(root = %project.root().display(), "no .svn directory");
            return Ok(ScmInfo::none());
        }

        let (url, revision) = self.info_url_and_revision(project)?;
        let branch = parse_branch(&url)?;
        let status = self.svn(project, &strings(&["status", "--xml"]))?;
        let dirty = parse_status_dirty(&status)?;

        tracing::debug!(%url, %branch, %revision, dirty, "svn working copy");
        Ok(ScmInfo::new(branch, revision.clone(), revision, None, dirty))
    }

    fn base_tags(
        &self,
        project: &ProjectContext,
        config: &VersioningConfig,
        base: &str,
    ) -> Result<Vec<String>> {
        let (url, _) = self.info_url_and_revision(project)?;
        let branch = parse_branch(&url)?;
        let tags_url = format!("{}/tags", base_url(&url, &branch));
        tracing::info!(%tags_url, "getting list of tags");

        let mut args = strings(&["list", "--xml", "--non-interactive"]);
        if !config.user.trim().is_empty() {
            tracing::info!(user = %config.user, "authenticating");
            args.extend(strings(&["--no-auth-cache", "--username"]));
            args.push(config.user.clone());
            args.push("--password".to_string());
            args.push(config.password.clone());
        }
        if config.trust_server_cert {
            tracing::info!("trusting server certificate");
            args.push("--trust-server-cert".to_string());
        }
        args.push(tags_url);

        match self.svn(project, &args) {
            Ok(xml) => parse_tag_list(&xml, base),
            Err(VersioningError::Process {
                code: Some(1),
                ref stderr,
                ..
            }) if stderr.contains(MISSING_PATH_CODE) => {
                tracing::info!("the tags/ folder does not exist yet");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    fn branch_separator(&self) -> &'static str {
        "-"
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Branch name from a working copy URL: `trunk` or the name under `branches/`
pub fn parse_branch(url: &str) -> Result<String> {
    if trunk_pattern().is_match(url) {
        return Ok("trunk".to_string());
    }
    branch_pattern()
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| VersioningError::SvnUrl(url.to_string()))
}

/// Repository URL of the project, i.e. the URL without its trunk or branch part
pub fn base_url<'a>(url: &'a str, branch: &str) -> &'a str {
    let suffix = if branch == "trunk" {
        "/trunk".to_string()
    } else {
        format!("/branches/{}", branch)
    };
    url.strip_suffix(suffix.as_str()).unwrap_or(url)
}

fn parse_xml(xml: &str) -> Result<Document<'_>> {
    Document::parse(xml).map_err(|e| VersioningError::xml(format!("Cannot parse XML: {}", e)))
}

/// First descendant element named `name`, excluding `node` itself
fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Result<Node<'a, 'input>> {
    node.descendants()
        .skip(1)
        .find(|n| n.has_tag_name(name))
        .ok_or_else(|| VersioningError::xml(format!("Cannot find element with name {}", name)))
}

fn children<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Vec<Node<'a, 'input>> {
    node.descendants()
        .skip(1)
        .filter(|n| n.has_tag_name(name))
        .collect()
}

fn attribute<'a>(node: Node<'a, '_>, name: &str) -> Result<&'a str> {
    node.attribute(name)
        .ok_or_else(|| VersioningError::xml(format!("Cannot find element with name {}", name)))
}

fn text(node: Node<'_, '_>) -> String {
    node.text().unwrap_or_default().trim().to_string()
}

/// URL and last committed revision from `svn info --xml`
pub fn parse_info(xml: &str) -> Result<(String, String)> {
    let doc = parse_xml(xml)?;
    let entry = child(doc.root_element(), "entry")?;
    let url = text(child(entry, "url")?);
    let revision = attribute(child(entry, "commit")?, "revision")?.to_string();
    Ok((url, revision))
}

/// Dirty state from `svn status --xml`
///
/// An entry counts as a modification when its item status is anything but
/// `none` or `external`, or when its properties changed.
pub fn parse_status_dirty(xml: &str) -> Result<bool> {
    let doc = parse_xml(xml)?;
    let target = child(doc.root_element(), "target")?;
    for entry in children(target, "entry") {
        if attribute(entry, "path")? == "userHome" {
            continue;
        }
        let wc_status = child(entry, "wc-status")?;
        let item = attribute(wc_status, "item")?;
        let props = attribute(wc_status, "props")?;
        if !matches!(item, "none" | "external") || props != "none" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Tags of the `base.N` sequence from `svn list --xml`, most recent revision first
pub fn parse_tag_list(xml: &str, base: &str) -> Result<Vec<String>> {
    let doc = parse_xml(xml)?;
    let list = child(doc.root_element(), "list")?;
    let pattern = base_tag_pattern(base)?;

    let mut entries = Vec::new();
    for entry in children(list, "entry") {
        let revision_text = attribute(child(entry, "commit")?, "revision")?;
        let revision = revision_text.parse::<u64>().map_err(|_| {
            VersioningError::xml(format!("Invalid revision number: {}", revision_text))
        })?;
        entries.push((revision, text(child(entry, "name")?)));
    }
    entries.sort_by(|a, b| b.0.cmp(&a.0));

    let tags: Vec<String> = entries
        .into_iter()
        .map(|(_, name)| name)
        .filter(|name| pattern.is_match(name))
        .collect();
    tracing::debug!(base, ?tags, "svn base tags");
    Ok(tags)
}
