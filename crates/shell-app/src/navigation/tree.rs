//! Permission-filtered, section-aware navigation tree
//!
//! The header, the sidebar and the mobile menus all render from the same
//! [`NavTree`] so they can never disagree about what is visible or active.

use serde::Serialize;
use shell_core::{PermissionSet, SectionKey};

use super::expansion::NavExpansion;
use super::model::{NavEntry, NavTable};

/// Where a top-level item came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavScope {
    Global,
    Contextual,
}

/// A rendered navigation item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub key: String,
    pub title: String,
    pub path: String,
    pub icon: Option<String>,
    pub scope: NavScope,
    pub depth: usize,
    /// Route equals or lies below this item's path
    pub active: bool,
    /// The single top-level "current module" indicator
    pub primary: bool,
    pub expanded: bool,
    pub children: Vec<NavItem>,
}

impl NavItem {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Rendered tree: global items followed by the active section's items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavTree {
    pub section: SectionKey,
    pub items: Vec<NavItem>,
}

impl NavTree {
    /// Key of the primary (current module) item, if any route matched
    pub fn primary(&self) -> Option<&NavItem> {
        self.items.iter().find(|i| i.primary)
    }

    /// Depth-first rows as a sidebar shows them (collapsed children hidden)
    pub fn visible_rows(&self) -> Vec<&NavItem> {
        let mut rows = Vec::new();
        for item in &self.items {
            push_visible(item, &mut rows);
        }
        rows
    }

    pub fn find(&self, key: &str) -> Option<&NavItem> {
        fn walk<'a>(items: &'a [NavItem], key: &str) -> Option<&'a NavItem> {
            items.iter().find_map(|i| {
                if i.key == key {
                    Some(i)
                } else {
                    walk(&i.children, key)
                }
            })
        }
        walk(&self.items, key)
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.find(path).is_some()
    }
}

fn push_visible<'a>(item: &'a NavItem, rows: &mut Vec<&'a NavItem>) {
    rows.push(item);
    if item.expanded {
        for child in &item.children {
            push_visible(child, rows);
        }
    }
}

/// Inputs for [`build_tree`]
#[derive(Debug, Clone, Copy)]
pub struct TreeInputs<'a> {
    pub table: &'a NavTable,
    pub section: &'a SectionKey,
    pub permissions: &'a PermissionSet,
    pub expansion: &'a NavExpansion,
    pub route: &'a str,
}

/// Build the rendered tree.
///
/// Entries whose permission list is non-empty and shares nothing with the
/// user's set are dropped together with their children. When several
/// top-level items match the route, the one with the longest path becomes
/// primary; equal lengths keep list order.
pub fn build_tree(inputs: TreeInputs<'_>) -> NavTree {
    let mut items: Vec<NavItem> = inputs
        .table
        .global
        .iter()
        .filter_map(|e| render_entry(e, NavScope::Global, 0, &inputs))
        .chain(
            inputs
                .table
                .contextual(inputs.section)
                .iter()
                .filter_map(|e| render_entry(e, NavScope::Contextual, 0, &inputs)),
        )
        .collect();

    let mut primary: Option<usize> = None;
    for (idx, item) in items.iter().enumerate() {
        if !item.active {
            continue;
        }
        match primary {
            Some(best) if items[best].path.len() >= item.path.len() => {}
            _ => primary = Some(idx),
        }
    }
    if let Some(idx) = primary {
        items[idx].primary = true;
    }

    NavTree {
        section: inputs.section.clone(),
        items,
    }
}

fn render_entry(
    entry: &NavEntry,
    scope: NavScope,
    depth: usize,
    inputs: &TreeInputs<'_>,
) -> Option<NavItem> {
    if !entry.is_visible_to(inputs.permissions) {
        return None;
    }

    let children: Vec<NavItem> = entry
        .children
        .iter()
        .filter_map(|c| render_entry(c, scope, depth + 1, inputs))
        .collect();

    Some(NavItem {
        key: entry.key().to_string(),
        title: entry.title.clone(),
        path: entry.path.clone(),
        icon: entry.icon.clone(),
        scope,
        depth,
        active: entry.matches_route(inputs.route),
        primary: false,
        expanded: !children.is_empty() && inputs.expansion.is_expanded(entry.key()),
        children,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::table::default_table;

    fn build(section: &str, perms: &[&str], route: &str, expansion: &NavExpansion) -> NavTree {
        let table = default_table();
        let section = SectionKey::parse(section).unwrap();
        let permissions = PermissionSet::new(perms.iter().copied());
        build_tree(TreeInputs {
            table: &table,
            section: &section,
            permissions: &permissions,
            expansion,
            route,
        })
    }

    fn titles(tree: &NavTree) -> Vec<&str> {
        tree.items.iter().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn test_global_then_contextual() {
        let tree = build("main", &[], "/dashboard", &NavExpansion::new());
        assert_eq!(
            titles(&tree),
            vec!["Dashboard", "Calendar", "Settings", "Overview", "Classes", "Members"]
        );
        assert_eq!(tree.items[0].scope, NavScope::Global);
        assert_eq!(tree.items[3].scope, NavScope::Contextual);
    }

    #[test]
    fn test_finance_view_gates_entry_regardless_of_section() {
        for section in ["main", "store", "lms"] {
            let without = build(section, &[], "/dashboard", &NavExpansion::new());
            assert!(!without.contains_path("/reports"), "{section}");

            let with = build(section, &["finance.view"], "/dashboard", &NavExpansion::new());
            assert!(with.contains_path("/reports"), "{section}");
        }
    }

    #[test]
    fn test_union_of_required_permissions() {
        let tree = build("payments", &["payments.refunds"], "/", &NavExpansion::new());
        assert!(tree.contains_path("/payments/refunds"));
        assert!(!tree.contains_path("/payments/payouts"));
    }

    #[test]
    fn test_unknown_section_uses_main_row() {
        let tree = build("spa", &[], "/", &NavExpansion::new());
        assert!(tree.contains_path("/classes"));
        assert_eq!(tree.section.as_str(), "spa");
    }

    #[test]
    fn test_active_and_primary_longest_prefix() {
        let tree = build(
            "finance",
            &["finance.view"],
            "/finance/reports/cash-flow",
            &NavExpansion::new(),
        );
        let overview = tree.find("/finance").unwrap();
        let reports = tree.find("/finance/reports").unwrap();
        assert!(overview.active);
        assert!(reports.active);
        assert!(!overview.primary);
        assert!(reports.primary);
        assert_eq!(tree.items.iter().filter(|i| i.primary).count(), 1);
    }

    #[test]
    fn test_no_primary_without_match() {
        let tree = build("main", &[], "/nowhere", &NavExpansion::new());
        assert!(tree.primary().is_none());
    }

    #[test]
    fn test_prefix_does_not_match_sibling_name() {
        let tree = build("main", &[], "/dashboards", &NavExpansion::new());
        assert!(!tree.find("/dashboard").unwrap().active);
    }

    #[test]
    fn test_visible_rows_follow_expansion() {
        let mut expansion = NavExpansion::new();
        let collapsed = build("main", &[], "/", &expansion);
        assert_eq!(collapsed.visible_rows().len(), 6);

        expansion.toggle("/classes");
        let expanded = build("main", &[], "/", &expansion);
        let rows: Vec<_> = expanded.visible_rows().iter().map(|r| r.path.clone()).collect();
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[5], "/classes/schedule");
        assert_eq!(expanded.find("/classes/schedule").unwrap().depth, 1);
    }
}
