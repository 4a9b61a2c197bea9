//! Built-in navigation table for the wellness studio portal

use shell_core::SectionKey;

use super::model::{ModuleEntry, NavEntry, NavTable};

fn module(key: &str, title: &str, icon: &str, permissions: &[&str]) -> ModuleEntry {
    ModuleEntry {
        key: SectionKey::parse(key).unwrap_or_default(),
        title: title.to_string(),
        icon: Some(icon.to_string()),
        permissions: permissions.iter().map(|p| (*p).to_string()).collect(),
    }
}

/// The default table used when no `navigation.toml` override is present
pub fn default_table() -> NavTable {
    let mut table = NavTable {
        global: vec![
            NavEntry::new("Dashboard", "/dashboard").icon("home"),
            NavEntry::new("Calendar", "/calendar").icon("calendar"),
            NavEntry::new("Reports", "/reports")
                .icon("chart")
                .requires(["finance.view"]),
            NavEntry::new("Settings", "/settings").icon("settings"),
        ],
        modules: vec![
            module("main", "Studio", "home", &[]),
            module("lms", "Academy", "book", &[]),
            module("admin", "Admin", "shield", &["admin.access"]),
            module("payments", "Payments", "card", &["payments.view"]),
            module("finance", "Finance", "chart", &["finance.view"]),
            module("store", "Store", "bag", &[]),
            module("international", "International", "globe", &[]),
        ],
        ..Default::default()
    };

    table.sections.insert(
        "main".into(),
        vec![
            NavEntry::new("Overview", "/dashboard/overview").icon("grid"),
            NavEntry::new("Classes", "/classes")
                .icon("yoga")
                .children(vec![
                    NavEntry::new("Schedule", "/classes/schedule"),
                    NavEntry::new("Instructors", "/classes/instructors"),
                ]),
            NavEntry::new("Members", "/members")
                .icon("users")
                .children(vec![
                    NavEntry::new("Directory", "/members/directory"),
                    NavEntry::new("Memberships", "/members/memberships"),
                ]),
        ],
    );

    table.sections.insert(
        "lms".into(),
        vec![
            NavEntry::new("Courses", "/lms/courses")
                .icon("book")
                .children(vec![
                    NavEntry::new("Catalog", "/lms/courses/catalog"),
                    NavEntry::new("Enrollments", "/lms/courses/enrollments"),
                ]),
            NavEntry::new("Certifications", "/lms/certifications").icon("award"),
            NavEntry::new("Reports", "/lms/reports")
                .icon("chart")
                .requires(["lms.reports"]),
        ],
    );

    table.sections.insert(
        "admin".into(),
        vec![
            NavEntry::new("Users", "/admin/users")
                .icon("users")
                .requires(["admin.users"]),
            NavEntry::new("Roles", "/admin/roles")
                .icon("key")
                .requires(["admin.roles"]),
            NavEntry::new("Audit Log", "/admin/audit")
                .icon("list")
                .requires(["admin.audit", "admin.users"]),
        ],
    );

    table.sections.insert(
        "payments".into(),
        vec![
            NavEntry::new("Transactions", "/payments/transactions")
                .icon("card")
                .requires(["payments.view"]),
            NavEntry::new("Payouts", "/payments/payouts")
                .icon("bank")
                .requires(["payments.manage"]),
            NavEntry::new("Refunds", "/payments/refunds")
                .icon("undo")
                .requires(["payments.manage", "payments.refunds"]),
        ],
    );

    table.sections.insert(
        "finance".into(),
        vec![
            NavEntry::new("Overview", "/finance")
                .icon("chart")
                .requires(["finance.view"])
                .children(vec![
                    NavEntry::new("Revenue", "/finance/revenue"),
                    NavEntry::new("Expenses", "/finance/expenses"),
                ]),
            NavEntry::new("Reports", "/finance/reports")
                .icon("file")
                .requires(["finance.view"])
                .children(vec![
                    NavEntry::new("Profit & Loss", "/finance/reports/profit-loss"),
                    NavEntry::new("Cash Flow", "/finance/reports/cash-flow"),
                ]),
            NavEntry::new("Budgets", "/finance/budgets")
                .icon("wallet")
                .requires(["finance.admin"]),
        ],
    );

    table.sections.insert(
        "store".into(),
        vec![
            NavEntry::new("Products", "/store/products").icon("tag"),
            NavEntry::new("Orders", "/store/orders")
                .icon("bag")
                .requires(["store.orders"]),
            NavEntry::new("Inventory", "/store/inventory")
                .icon("box")
                .requires(["store.manage"]),
        ],
    );

    table.sections.insert(
        "international".into(),
        vec![
            NavEntry::new("Locations", "/international/locations").icon("globe"),
            NavEntry::new("Currencies", "/international/currencies")
                .icon("coins")
                .requires(["international.manage"]),
            NavEntry::new("Translations", "/international/translations").icon("language"),
        ],
    );

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use shell_core::{PermissionSet, KNOWN_SECTIONS};

    #[test]
    fn test_every_known_section_has_a_row() {
        let table = default_table();
        for section in KNOWN_SECTIONS {
            assert!(table.sections.contains_key(*section), "{section}");
        }
    }

    #[test]
    fn test_module_selector_filters_by_permission() {
        let table = default_table();
        let perms = PermissionSet::new(["finance.view"]);
        let keys: Vec<_> = table
            .visible_modules(&perms)
            .map(|m| m.key.to_string())
            .collect();
        assert!(keys.contains(&"finance".to_string()));
        assert!(!keys.contains(&"admin".to_string()));
        assert!(!keys.contains(&"payments".to_string()));
    }

    #[test]
    fn test_default_table_survives_toml_round_trip() {
        let table = default_table();
        let text = toml::to_string(&table).unwrap();
        let parsed: NavTable = toml::from_str(&text).unwrap();
        assert_eq!(parsed, table);
    }
}
