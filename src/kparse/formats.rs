//! Output formats for parse trees
//!
//! Text renderings:
//! - [`bracket`]: indented `Label (` … `)` form, also used in the trace log
//! - [`treeviz`]: one line per node with box-drawing connectors
//!
//! Structured views, serialized with serde:
//! - [`export`]: nested display tree with single-child chains collapsed
//! - [`layout`]: id-indexed tree with per-layer node lists for level rendering
//!
//! [`registry`] makes the string formats selectable by name.

pub mod bracket;
pub mod export;
pub mod layout;
pub mod registry;
pub mod treeviz;

pub use bracket::{to_bracket_str, BracketFormatter};
pub use export::{export_tree, ExportNode, JsonFormatter};
pub use layout::{layout, Layout, LayoutNode, NodeKind};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
