//! 图表示模块
//!
//! 定义邻接矩阵、边、邻接表和关联矩阵，以及它们之间的转换

mod adjacency;
mod convert;
mod edge;
mod incidence;
mod matrix;

pub use adjacency::AdjacencyList;
pub use convert::{
    edge_list_to_adjacency_list, edge_list_to_incident_edges, matrix_to_edge_list,
    matrix_to_incidence_matrix, Representations,
};
pub use edge::{Edge, EdgeList};
pub use incidence::{IncidenceMatrix, IncidentEdges};
pub use matrix::AdjacencyMatrix;

/// 顶点 ID（从 0 开始的连续下标，与矩阵行号一致）
pub type VertexId = usize;
