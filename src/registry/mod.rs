//! Static CI/CD vocabulary: lifecycle categories, the tool registry and the
//! canvas node types.

pub mod category;
pub mod tools;
pub mod vocabulary;

pub use category::{CATEGORY_ORDER, Category};
pub use tools::{Tool, enabled_tools, lookup_tool, tools_for_category};
pub use vocabulary::{NodeFamily, NodeType, UNKNOWN_LABEL, label_for};
