//! Navigation tree building
//!
//! - `model`: static table types (`NavTable`, `NavEntry`, `ModuleEntry`)
//! - `table`: the built-in wellness studio table
//! - `expansion`: accordion state and deep-link auto-expansion
//! - `tree`: permission filtering and active/primary highlighting

pub mod expansion;
pub mod model;
pub mod table;
pub mod tree;

pub use expansion::NavExpansion;
pub use model::{path_matches, ModuleEntry, NavEntry, NavTable};
pub use table::default_table;
pub use tree::{build_tree, NavItem, NavScope, NavTree, TreeInputs};
