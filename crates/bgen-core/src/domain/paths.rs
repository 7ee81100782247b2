//! Pure path helpers for generated import statements.
//!
//! Import paths in the generated TypeScript use forward slashes regardless
//! of host platform, so these helpers return `String`, not `PathBuf`.

use std::path::{Component, Path};

/// Compute the relative path from `from` (a directory) to `to`.
///
/// Both inputs are project-relative paths; neither is resolved against the
/// working directory. Equivalent directories yield an empty string.
pub fn relative_from(from: &Path, to: &Path) -> String {
    let from = parts(from);
    let to = parts(to);

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut out: Vec<&str> = Vec::with_capacity(from.len() - common + to.len() - common);
    for _ in common..from.len() {
        out.push("..");
    }
    out.extend(to[common..].iter().map(String::as_str));
    out.join("/")
}

fn parts(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => s.to_str().map(str::to_owned),
            Component::ParentDir => Some("..".to_owned()),
            _ => None,
        })
        .collect()
}

/// Strip the final extension from a path string, if any.
///
/// Applied twice this turns `src_ts/defaultTypes.d.ts` into
/// `src_ts/defaultTypes`. A path with no extension is returned unchanged.
pub fn strip_extension(path: &str) -> String {
    match Path::new(path).extension().and_then(|e| e.to_str()) {
        Some(ext) => path[..path.len() - ext.len() - 1].to_string(),
        None => path.to_string(),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
