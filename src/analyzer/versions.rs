use crate::domain::ProjectUrl;
use crate::error::Result;
use crate::svn::Subversion;
use crate::version::VersionOrder;

/// Prefix marking branch labels in the version list
pub const BRANCH_PREFIX: &str = "dev-";

/// Reduces one line of `svn list` output to an entry name.
fn entry_name(line: &str) -> Option<&str> {
    let name = line.split_whitespace().next()?.trim_end_matches('/');
    Some(name).filter(|n| !n.is_empty())
}

/// Lists the known versions of a project: every tag by name, then every
/// branch as `dev-<name>`, ordered by `order`.
///
/// The ordering is two full stable sorts: first by conformance
/// (non-conforming labels first), then by `order.compare`. The first pass
/// only decides the relative order of labels the second pass considers equal.
///
/// # Errors
/// Propagates listing failures from `svn`.
pub fn list_versions<S, O>(project_url: &ProjectUrl, svn: &S, order: &O) -> Result<Vec<String>>
where
    S: Subversion + ?Sized,
    O: VersionOrder + ?Sized,
{
    let tags = svn.list(&project_url.tags_url())?;
    let branches = svn.list(&project_url.branches_url())?;

    let mut versions: Vec<String> = tags
        .iter()
        .filter_map(|line| entry_name(line))
        .map(str::to_string)
        .chain(
            branches
                .iter()
                .filter_map(|line| entry_name(line))
                .map(|name| format!("{}{}", BRANCH_PREFIX, name)),
        )
        .collect();

    sort_versions(&mut versions, order);
    Ok(versions)
}

/// Sorts labels by conformance, then sorts that result by version value.
pub fn sort_versions<O: VersionOrder + ?Sized>(versions: &mut [String], order: &O) {
    versions.sort_by_key(|label| order.is_conform(label));
    versions.sort_by(|a, b| order.compare(a, b));
}
