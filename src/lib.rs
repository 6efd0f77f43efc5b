//! matgraph - 邻接矩阵与图表示转换
//!
//! 从文本文件读取无向图的邻接矩阵，支持：
//! - 转换为边列表、邻接表、关联矩阵
//! - 列出每个顶点的关联边
//! - 从指定顶点出发的 BFS / DFS 遍历

pub mod algorithm;
pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod import;

// 重导出常用类型
pub use algorithm::{bfs, dfs, Traversal, TraversalOrder};
pub use config::{ReportConfig, ReportFormat};
pub use error::{Error, Result};
pub use graph::{
    AdjacencyList, AdjacencyMatrix, Edge, EdgeList, IncidenceMatrix, IncidentEdges,
    Representations, VertexId,
};
pub use import::{load_matrix, read_matrix};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
