use std::{
    env, io,
    path::{Component, Path, PathBuf},
};

/// Cleans `path` lexically: drops `.` segments and folds `..` into its parent.
/// `..` never climbs above the root of an absolute path.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => cleaned.push(".."),
            },
            other => cleaned.push(other.as_os_str()),
        }
    }

    if cleaned.as_os_str().is_empty() {
        cleaned.push(".");
    }

    cleaned
}

/// Makes `path` absolute against the process's current directory and cleans it.
/// Does not touch the filesystem beyond asking for the current directory.
pub fn absolutize(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(clean_path(path));
    }

    let cwd = env::current_dir()?;
    Ok(clean_path(&cwd.join(path)))
}

/// Appends `path` under `base` even when `path` is rooted, so `/etc` joined to
/// `/work` gives `/work/etc` rather than replacing the base.
pub fn join_under(base: &Path, path: &Path) -> PathBuf {
    let mut joined = base.to_path_buf();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {}
            other => joined.push(other.as_os_str()),
        }
    }

    joined
}

/// Whether `path` is `root` or lies below it, compared segment by segment.
/// Both paths are expected to be absolute and cleaned.
pub fn is_within(path: &Path, root: &Path) -> bool {
    path.starts_with(root)
}
