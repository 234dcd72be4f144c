use std::path::{Component, Path, PathBuf};

/// One row of `svn status -v`: a path and the revision it is at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    pub path: PathBuf,
    pub revision: u64,
}

impl StatusEntry {
    pub fn new(path: impl Into<PathBuf>, revision: u64) -> Self {
        StatusEntry {
            path: path.into(),
            revision,
        }
    }
}

/// Highest revision found in a working copy and the file carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConsistencyResult {
    pub max_revision: u64,
    /// Path relative to the working copy root, `/` separated.
    pub file: Option<String>,
}

/// Folds status entries into the highest revision and its path.
///
/// Starts from revision 0 with no file; ties keep the first entry seen.
/// Entry paths are reported as-is, see [`relative_path`] for normalization.
pub fn find_last_change<'a, I>(entries: I) -> Option<(u64, &'a Path)>
where
    I: IntoIterator<Item = &'a StatusEntry>,
{
    entries
        .into_iter()
        .fold(None::<(u64, &'a Path)>, |best, entry| match best {
            Some((max, _)) if entry.revision <= max => best,
            _ if entry.revision == 0 => best,
            _ => Some((entry.revision, entry.path.as_path())),
        })
}

/// Renders `path` relative to `root` with `/` separators and no leading slash.
///
/// Paths outside `root` are rendered whole.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let rendered: Vec<String> = relative
        .components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    rendered.join("/")
}
