//! 邻接表
//!
//! 顶点到邻居序列的映射。只有出现在至少一条边中的顶点才有表项，
//! 孤立顶点不在表中（而不是对应一个空列表）。

use super::VertexId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 邻接表（按顶点 ID 升序遍历，邻居保持边的处理顺序）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdjacencyList {
    entries: BTreeMap<VertexId, Vec<VertexId>>,
}

impl AdjacencyList {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加无向边：u 的列表追加 v，v 的列表追加 u
    pub(crate) fn add_edge(&mut self, u: VertexId, v: VertexId) {
        self.entries.entry(u).or_default().push(v);
        self.entries.entry(v).or_default().push(u);
    }

    /// 获取邻居；孤立顶点返回 `None`
    pub fn neighbors(&self, vertex: VertexId) -> Option<&[VertexId]> {
        self.entries.get(&vertex).map(Vec::as_slice)
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.entries.contains_key(&vertex)
    }

    /// 顶点的度（孤立顶点为 0）
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.neighbors(vertex).map_or(0, <[VertexId]>::len)
    }

    /// 有表项的顶点数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &[VertexId])> {
        self.entries.iter().map(|(&v, n)| (v, n.as_slice()))
    }
}

impl FromIterator<(VertexId, Vec<VertexId>)> for AdjacencyList {
    fn from_iter<I: IntoIterator<Item = (VertexId, Vec<VertexId>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_symmetric() {
        let mut adj = AdjacencyList::new();
        adj.add_edge(0, 2);
        adj.add_edge(0, 1);

        assert_eq!(adj.neighbors(0), Some(&[2, 1][..]));
        assert_eq!(adj.neighbors(1), Some(&[0][..]));
        assert_eq!(adj.neighbors(2), Some(&[0][..]));
        assert_eq!(adj.len(), 3);
    }

    #[test]
    fn test_missing_vertex() {
        let mut adj = AdjacencyList::new();
        adj.add_edge(0, 1);

        assert!(!adj.contains(5));
        assert_eq!(adj.neighbors(5), None);
        assert_eq!(adj.degree(5), 0);
        assert_eq!(adj.degree(0), 1);
    }

    #[test]
    fn test_iteration_ascending() {
        let adj: AdjacencyList = vec![(3, vec![1]), (1, vec![3])].into_iter().collect();
        let order: Vec<_> = adj.vertices().collect();
        assert_eq!(order, vec![1, 3]);
    }
}
