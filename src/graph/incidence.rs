//! 关联矩阵与顶点关联边列表

use super::{Edge, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 关联矩阵，形状为 顶点数 × 边数
///
/// 第 k 列对应边列表中的第 k 条边，该边的两个端点所在行为 1，其余为 0。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidenceMatrix {
    rows: Vec<Vec<u8>>,
    edge_count: usize,
}

impl IncidenceMatrix {
    /// 创建全零矩阵
    pub(crate) fn zeros(vertex_count: usize, edge_count: usize) -> Self {
        Self {
            rows: vec![vec![0; edge_count]; vertex_count],
            edge_count,
        }
    }

    /// 标记第 k 条边的两个端点
    pub(crate) fn mark(&mut self, k: usize, edge: Edge) {
        let (u, v) = edge.endpoints();
        self.rows[u][k] = 1;
        self.rows[v][k] = 1;
    }

    pub fn vertex_count(&self) -> usize {
        self.rows.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    pub fn get(&self, vertex: VertexId, k: usize) -> Option<u8> {
        self.rows.get(vertex).and_then(|r| r.get(k)).copied()
    }

    /// 第 k 列
    pub fn column(&self, k: usize) -> impl Iterator<Item = u8> + '_ {
        self.rows.iter().filter_map(move |r| r.get(k).copied())
    }
}

/// 每个顶点的关联边（顶点升序，边保持边列表顺序；无边的顶点不出现）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IncidentEdges {
    entries: BTreeMap<VertexId, Vec<Edge>>,
}

impl IncidentEdges {
    pub(crate) fn push(&mut self, vertex: VertexId, edge: Edge) {
        self.entries.entry(vertex).or_default().push(edge);
    }

    pub fn edges(&self, vertex: VertexId) -> Option<&[Edge]> {
        self.entries.get(&vertex).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &[Edge])> {
        self.entries.iter().map(|(&v, e)| (v, e.as_slice()))
    }
}
