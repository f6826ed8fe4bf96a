use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{DictError, Result};

// Directory helpers
pub fn find_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| DictError::Io {
            path: dir.to_path_buf(),
            source: e.into(),
        })?;
        let p = entry.path();
        if p.is_file() && p.extension().and_then(|s| s.to_str()) == Some("json") {
            out.push(p.to_path_buf());
        }
    }
    out.sort();
    Ok(out)
}

/// Expand directories to their `*.json` files, drop duplicates and sort.
pub fn collect_sources(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut out = BTreeSet::new();
    for p in paths {
        if p.is_dir() {
            out.extend(find_json_files(p)?);
        } else {
            out.insert(p.clone());
        }
    }
    Ok(out.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_and_sort() {
        let paths = [
            PathBuf::from("b.json"),
            PathBuf::from("a.json"),
            PathBuf::from("b.json"),
        ];
        assert_eq!(
            collect_sources(&paths).unwrap(),
            [PathBuf::from("a.json"), PathBuf::from("b.json")]
        );
    }
}
