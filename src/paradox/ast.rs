//! Tree definitions for paradox script documents
//!
//! ## Modules
//!
//! - `node` - The [Node] entity and its query/mutation API
//! - `value` - The [Value] sum type held by every node
//! - `position` - Byte offset to line/column conversion for error reporting

pub mod node;
pub mod position;
pub mod value;

pub use node::Node;
pub use position::{Position, SourceLocation};
pub use value::Value;
