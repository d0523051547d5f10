use std::path::{Component, Path};

/// Render `path` relative to `root` with `/` separators.
///
/// Paths outside `root` are rendered in full, still `/`-separated.
///
/// # Examples
///
/// - root `/code`, path `/code/lib/foo.h` renders as `lib/foo.h`
/// - root `/code`, path `/code/./lib/foo.h` renders as `lib/foo.h`
/// - root `/code`, path `/other/foo.h` renders as `/other/foo.h`
#[must_use]
pub fn relative_display(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);

    let mut out = String::new();
    for component in relative.components() {
        match component {
            Component::CurDir => continue,
            Component::RootDir => {
                out.push('/');
                continue;
            }
            Component::Prefix(prefix) => out.push_str(&prefix.as_os_str().to_string_lossy()),
            Component::ParentDir => out.push_str(".."),
            Component::Normal(part) => out.push_str(&part.to_string_lossy()),
        }
        out.push('/');
    }
    if out.len() > 1 {
        out.pop();
    }
    out
}

/// Flatten a `/`-separated relative path into a single fingerprint-safe token.
#[must_use]
pub fn flatten_path(relative: &str) -> String {
    relative.replace('/', "_")
}
