mod arena;
mod cursor;
mod handle;
mod node;
mod raw_avl_tree;

pub(crate) use arena::Arena;
pub use cursor::{Ascending, Descending, Direction};
pub(crate) use cursor::RawCursor;
pub(crate) use handle::Handle;
pub(crate) use node::Node;
pub(crate) use raw_avl_tree::RawAvlTree;
