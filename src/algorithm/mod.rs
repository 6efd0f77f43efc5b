//! 图算法模块
//!
//! 包含基于邻接表的广度优先与深度优先遍历

mod traversal;

pub use traversal::{bfs, dfs, Traversal, TraversalOrder};
