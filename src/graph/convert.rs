//! 图表示之间的转换
//!
//! 所有转换都是纯函数：输入只读，输出为新构造的结构。

use super::{AdjacencyList, AdjacencyMatrix, Edge, EdgeList, IncidenceMatrix, IncidentEdges};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 邻接矩阵 → 边列表
///
/// 只扫描上三角（`i < j`），外层 i 升序、内层 j 升序，
/// 因此每条无向边只出现一次，且对角线上的自环被忽略。
pub fn matrix_to_edge_list(matrix: &AdjacencyMatrix) -> EdgeList {
    let n = matrix.vertex_count();
    let mut edges = Vec::new();

    for i in 0..n {
        for j in (i + 1)..n {
            if matrix.has_edge(i, j) {
                edges.push(Edge::new(i, j));
            }
        }
    }

    debug!(vertices = n, edges = edges.len(), "邻接矩阵转换为边列表");
    edges
}

/// 边列表 → 邻接表
///
/// 孤立顶点不会出现在结果中。
pub fn edge_list_to_adjacency_list(edges: &[Edge]) -> AdjacencyList {
    let mut adj = AdjacencyList::new();
    for edge in edges {
        adj.add_edge(edge.u(), edge.v());
    }

    debug!(edges = edges.len(), vertices = adj.len(), "边列表转换为邻接表");
    adj
}

/// 邻接矩阵 → 关联矩阵
///
/// 列顺序与 [`matrix_to_edge_list`] 的边顺序一致。
pub fn matrix_to_incidence_matrix(matrix: &AdjacencyMatrix) -> IncidenceMatrix {
    let edges = matrix_to_edge_list(matrix);
    let mut incidence = IncidenceMatrix::zeros(matrix.vertex_count(), edges.len());

    for (k, &edge) in edges.iter().enumerate() {
        incidence.mark(k, edge);
    }

    incidence
}

/// 边列表 → 每个顶点的关联边
pub fn edge_list_to_incident_edges(edges: &[Edge]) -> IncidentEdges {
    let mut incident = IncidentEdges::default();
    for &edge in edges {
        incident.push(edge.u(), edge);
        incident.push(edge.v(), edge);
    }
    incident
}

/// 从邻接矩阵派生出的全部表示
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Representations {
    pub edge_list: EdgeList,
    pub adjacency_list: AdjacencyList,
    pub incidence_matrix: IncidenceMatrix,
    pub incident_edges: IncidentEdges,
}

impl Representations {
    /// 一次性构建所有表示
    pub fn from_matrix(matrix: &AdjacencyMatrix) -> Self {
        let incidence_matrix = matrix_to_incidence_matrix(matrix);
        let edge_list = matrix_to_edge_list(matrix);
        let adjacency_list = edge_list_to_adjacency_list(&edge_list);
        let incident_edges = edge_list_to_incident_edges(&edge_list);

        Self {
            edge_list,
            adjacency_list,
            incidence_matrix,
            incident_edges,
        }
    }
}
