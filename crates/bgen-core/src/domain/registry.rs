//! Registry patching: splices a new entry and its import into the text of
//! a `behaviorTypes.ts` registry file.
//!
//! The registry block is located with a fixed-depth regex, not a parser.
//! An entry value containing a nested object literal can defeat the block
//! boundary detection; that limitation is documented here rather than
//! fixed. When the block cannot be located the caller gets
//! [`RegistryPatch::BlockMissing`] back and the file text stays untouched.
//!
//! Duplicate keys and duplicate imports are not detected: re-running the
//! generator for an existing name appends a second entry and a second
//! import line.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

/// Keyword opening the registry block in the target file.
pub const REGISTRY_KEYWORD: &str = "interface BehaviorTypes";

// Matches the whole registry block. The `entries` group captures everything
// between the enclosing braces: zero or more `'key': { ... },` groups.
static BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"interface BehaviorTypes \{(?P<entries>(?:\s*'\S+'\s*:\s*\{[\s\S]*?\},?)*)\s*\}")
        .expect("registry block pattern is valid")
});

// Matches the first contiguous run of import lines. `.` stops at line
// breaks, so each repetition consumes exactly one import statement plus its
// terminating newline; a blank line ends the run.
static IMPORT_RUN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:import\s*\{.+?\}\s*from\s*".*"\s*;?\s*?[\r\n])+"#)
        .expect("import run pattern is valid")
});

/// Outcome of an entry insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryPatch {
    /// The block was located and the updated full file text is returned.
    Applied(String),
    /// No registry block was found; the input text must be kept as-is.
    BlockMissing,
}

/// Insert `entry_text` as the last entry of the registry block in
/// `file_text`.
///
/// - Block with existing entries: the new entry is appended after them,
///   separated by `",\n"`, with every prior entry preserved verbatim.
/// - Block with zero entries: the block is rewritten as
///   `interface BehaviorTypes {\n<entry>\n}`.
/// - No block: returns [`RegistryPatch::BlockMissing`] and logs a warning.
///
/// `entry_text` is expected to carry its own indentation and braces and no
/// trailing comma.
pub fn insert_entry(file_text: &str, entry_text: &str) -> RegistryPatch {
    let Some(caps) = BLOCK_RE.captures(file_text) else {
        warn!("no `{REGISTRY_KEYWORD}` block found; registry left unmodified");
        return RegistryPatch::BlockMissing;
    };
    let Some(whole) = caps.get(0) else {
        return RegistryPatch::BlockMissing;
    };

    match caps.name("entries") {
        Some(entries) if !entries.as_str().is_empty() => {
            // Append after the existing entries, before the closing brace.
            let mut out = String::with_capacity(file_text.len() + entry_text.len() + 2);
            out.push_str(&file_text[..entries.end()]);
            out.push_str(",\n");
            out.push_str(entry_text);
            out.push_str(&file_text[entries.end()..]);
            RegistryPatch::Applied(out)
        }
        _ => {
            // Empty block: synthesize a fresh one in its place.
            let mut out = String::with_capacity(file_text.len() + entry_text.len() + 32);
            out.push_str(&file_text[..whole.start()]);
            out.push_str(REGISTRY_KEYWORD);
            out.push_str(" {\n");
            out.push_str(entry_text);
            out.push_str("\n}");
            out.push_str(&file_text[whole.end()..]);
            RegistryPatch::Applied(out)
        }
    }
}

/// Insert `import_text` after the leading run of import statements.
///
/// Falls back to prepending `import_text` plus a newline when the file has
/// no import lines at all, so this operation always succeeds. Existing
/// imports are never reordered or deduplicated.
pub fn insert_import(file_text: &str, import_text: &str) -> String {
    if let Some(run) = IMPORT_RUN_RE.find(file_text) {
        let mut out = String::with_capacity(file_text.len() + import_text.len() + 1);
        out.push_str(&file_text[..run.end()]);
        out.push_str(import_text);
        out.push('\n');
        out.push_str(&file_text[run.end()..]);
        out
    } else {
        format!("{import_text}\n{file_text}")
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
