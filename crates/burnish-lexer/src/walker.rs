use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

/// File extensions the PHP tokenizer accepts.
pub const PHP_EXTENSIONS: &[&str] = &["php", "phtml"];

pub struct SourceWalker {
    roots: Vec<PathBuf>,
    excludes: GlobSet,
}

impl SourceWalker {
    pub fn new(root: &Path) -> Self {
        Self::with_roots(vec![root.to_path_buf()], &[])
    }

    /// Walk several roots, skipping files matched by any of `ignore_patterns`.
    /// Invalid patterns are logged and dropped.
    pub fn with_roots(roots: Vec<PathBuf>, ignore_patterns: &[String]) -> Self {
        let mut builder = GlobSetBuilder::new();
        for pattern in ignore_patterns {
            match Glob::new(pattern) {
                Ok(glob) => {
                    builder.add(glob);
                }
                Err(e) => log::warn!("ignoring bad pattern {:?}: {}", pattern, e),
            }
        }
        let excludes = builder.build().unwrap_or_else(|e| {
            log::warn!("could not compile ignore patterns: {}", e);
            GlobSet::empty()
        });
        Self { roots, excludes }
    }

    /// All PHP sources under the roots, sorted and deduplicated.
    ///
    /// A root that names a file directly is returned as-is when it has a PHP
    /// extension, even if an ignore file would have excluded it.
    pub fn walk(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();

        for root in &self.roots {
            if root.is_file() {
                if is_php_source(root) {
                    paths.push(root.clone());
                }
                continue;
            }

            let walker = WalkBuilder::new(root)
                .hidden(true)
                .git_ignore(true)
                .git_global(false)
                .git_exclude(true)
                .add_custom_ignore_filename(".burnishignore")
                .build();

            for result in walker {
                let entry = match result {
                    Ok(e) => e,
                    Err(e) => {
                        log::debug!("skipping unreadable entry: {}", e);
                        continue;
                    }
                };

                if !entry.file_type().map_or(false, |ft| ft.is_file()) {
                    continue;
                }

                let path = entry.into_path();
                if !is_php_source(&path) || self.is_excluded(root, &path) {
                    continue;
                }
                paths.push(path);
            }
        }

        paths.sort();
        paths.dedup();
        paths
    }

    fn is_excluded(&self, root: &Path, path: &Path) -> bool {
        let relative = path.strip_prefix(root).unwrap_or(path);
        self.excludes.is_match(relative) || self.excludes.is_match(path)
    }
}

pub fn is_php_source(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map_or(false, |ext| {
            PHP_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}
