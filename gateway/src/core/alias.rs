//! Directory alias table and path resolution.
//!
//! The table is built once from configuration and never mutated afterwards,
//! so a single instance can be shared by concurrent requests without locking.

use std::collections::BTreeMap;

use crate::error::{GatewayError, GatewayResult};

/// Ordered `alias -> physical prefix` mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: Vec<(String, String)>,
}

impl AliasTable {
    /// Build a table keeping the iteration order of `aliases`.
    ///
    /// A repeated alias name replaces the earlier prefix in place.
    pub fn new<I, K, V>(aliases: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries: Vec<(String, String)> = Vec::new();
        for (alias, prefix) in aliases {
            let alias = alias.into();
            let prefix = prefix.into();
            match entries.iter_mut().find(|(name, _)| *name == alias) {
                Some(entry) => entry.1 = prefix,
                None => entries.push((alias, prefix)),
            }
        }
        Self { entries }
    }

    pub fn exists(&self, alias: &str) -> bool {
        self.prefix(alias).is_some()
    }

    /// Physical prefix configured for `alias`.
    pub fn prefix(&self, alias: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == alias)
            .map(|(_, prefix)| prefix.as_str())
    }

    pub fn list_aliases(&self) -> BTreeMap<String, String> {
        self.entries.iter().cloned().collect()
    }

    /// Resolve `path` for the file and directory stores.
    ///
    /// 1. A path at or under a physical prefix is rewritten into its alias
    ///    form (see [`AliasTable::contract`]).
    /// 2. `alias/rest` expands to `prefix/rest`; an unknown head segment is
    ///    an [`GatewayError::AliasNotFound`].
    /// 3. Paths without a separator, drive-qualified paths (`C:...`) and
    ///    rooted paths (`/...`) come back unchanged.
    pub fn resolve(&self, path: &str) -> GatewayResult<String> {
        if let Some(contracted) = self.contract(path) {
            return Ok(contracted);
        }
        if path.contains(':') || path.starts_with('/') {
            return Ok(path.to_string());
        }
        match path.split_once('/') {
            Some((head, rest)) => self
                .prefix(head)
                .map(|prefix| join_prefix(prefix, rest))
                .ok_or_else(|| GatewayError::AliasNotFound(head.to_string())),
            None => Ok(path.to_string()),
        }
    }

    /// Rewrite a physical path into its alias-qualified form.
    ///
    /// Looks for a covering prefix in association order, then in reverse
    /// order, and replaces the first occurrence of that prefix with the alias
    /// name. Returns `None` when no prefix covers `path`.
    pub fn contract(&self, path: &str) -> Option<String> {
        let covering = |entry: &&(String, String)| covers(&entry.1, path);
        self.entries
            .iter()
            .find(covering)
            .or_else(|| self.entries.iter().rev().find(covering))
            .map(|(alias, prefix)| path.replacen(prefix.as_str(), alias, 1))
    }
}

impl From<&BTreeMap<String, String>> for AliasTable {
    fn from(map: &BTreeMap<String, String>) -> Self {
        Self::new(map.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}

/// True if `path` equals `prefix` or lies beneath it.
fn covers(prefix: &str, path: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

fn join_prefix(prefix: &str, rest: &str) -> String {
    if prefix.ends_with('/') {
        format!("{prefix}{rest}")
    } else {
        format!("{prefix}/{rest}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> AliasTable {
        AliasTable::new([("repo", "/home/u/project"), ("docs", "/srv/docs")])
    }

    #[test]
    fn alias_expands_to_physical_prefix() {
        let aliases = table();
        assert_eq!(
            aliases.resolve("repo/README.md").expect("resolve"),
            "/home/u/project/README.md"
        );
        assert_eq!(
            aliases.resolve("docs/api/v1.md").expect("resolve"),
            "/srv/docs/api/v1.md"
        );
    }

    #[test]
    fn every_alias_expands_its_children() {
        let aliases = table();
        for (alias, prefix) in aliases.list_aliases() {
            let resolved = aliases.resolve(&format!("{alias}/child")).expect("resolve");
            assert_eq!(resolved, format!("{prefix}/child"));
        }
    }

    #[test]
    fn unknown_alias_names_the_segment() {
        let err = table().resolve("nope/child").expect_err("unknown alias");
        match err {
            GatewayError::AliasNotFound(segment) => assert_eq!(segment, "nope"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn physical_path_is_contracted_to_alias_form() {
        let aliases = table();
        assert_eq!(
            aliases.resolve("/home/u/project/src/lib.rs").expect("resolve"),
            "repo/src/lib.rs"
        );
        assert_eq!(aliases.resolve("/home/u/project").expect("resolve"), "repo");
    }

    #[test]
    fn contraction_respects_segment_boundary() {
        let aliases = table();
        assert_eq!(aliases.contract("/home/u/projectx/a"), None);
        assert_eq!(
            aliases.resolve("/home/u/projectx/a").expect("resolve"),
            "/home/u/projectx/a"
        );
    }

    #[test]
    fn contraction_replaces_only_the_prefix() {
        let aliases = AliasTable::new([("a", "/a")]);
        assert_eq!(aliases.contract("/a/b/a/c"), Some("a/b/a/c".to_string()));
    }

    #[test]
    fn plain_and_drive_qualified_paths_pass_through() {
        let aliases = table();
        assert_eq!(aliases.resolve("README.md").expect("resolve"), "README.md");
        assert_eq!(
            aliases.resolve("C:/Users/me/file.txt").expect("resolve"),
            "C:/Users/me/file.txt"
        );
        assert_eq!(aliases.resolve("/etc/hosts").expect("resolve"), "/etc/hosts");
    }

    #[test]
    fn root_prefix_joins_without_double_separator() {
        let aliases = AliasTable::new([("root", "/")]);
        assert_eq!(aliases.resolve("root/etc").expect("resolve"), "/etc");
    }

    #[test]
    fn exists_and_listing() {
        let aliases = table();
        assert!(aliases.exists("repo"));
        assert!(!aliases.exists("/home/u/project"));
        let listed: Vec<_> = aliases.list_aliases().into_keys().collect();
        assert_eq!(listed, vec!["docs", "repo"]);
    }

    #[test]
    fn repeated_alias_replaces_prefix() {
        let aliases = AliasTable::new([("repo", "/old"), ("repo", "/new")]);
        assert_eq!(aliases.prefix("repo"), Some("/new"));
        assert_eq!(aliases.list_aliases().len(), 1);
    }
}
