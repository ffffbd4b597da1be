//! Directory tree rendering for the generate summary.

use std::fs;
use std::io;
use std::path::Path;

/// Render the contents of `root` as an indented tree, entries sorted by name.
///
/// Each line is prefixed with `indent`. Directories carry a trailing `/`.
pub fn render_tree(root: &Path, indent: &str) -> io::Result<String> {
    let mut out = String::new();
    render_level(root, indent, &mut out)?;
    Ok(out)
}

fn render_level(dir: &Path, indent: &str, out: &mut String) -> io::Result<()> {
    let mut entries = fs::read_dir(dir)?.collect::<io::Result<Vec<_>>>()?;
    entries.sort_by_key(fs::DirEntry::file_name);

    let last_index = entries.len().saturating_sub(1);
    for (index, entry) in entries.iter().enumerate() {
        let is_last = index == last_index;
        let (branch, child_indent) = if is_last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        let is_dir = entry.file_type()?.is_dir();
        let name = entry.file_name().to_string_lossy().into_owned();

        out.push_str(indent);
        out.push_str(branch);
        out.push_str(&name);
        if is_dir {
            out.push('/');
        }
        out.push('\n');

        if is_dir {
            render_level(&entry.path(), &format!("{indent}{child_indent}"), out)?;
        }
    }
    Ok(())
}
