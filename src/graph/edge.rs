//! 边定义
//!
//! 无向边 `(u, v)`，端点按 `u <= v` 存储

use super::VertexId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 无向边
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    u: VertexId,
    v: VertexId,
}

/// 边列表（顺序即邻接矩阵上三角的行优先扫描顺序）
pub type EdgeList = Vec<Edge>;

impl Edge {
    /// 创建边，端点自动按从小到大排列
    pub fn new(a: VertexId, b: VertexId) -> Self {
        if a <= b {
            Self { u: a, v: b }
        } else {
            Self { u: b, v: a }
        }
    }

    /// 较小的端点
    pub fn u(&self) -> VertexId {
        self.u
    }

    /// 较大的端点
    pub fn v(&self) -> VertexId {
        self.v
    }

    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.u, self.v)
    }

    /// 顶点是否为该边的端点
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.u == vertex || self.v == vertex
    }
}

impl From<(VertexId, VertexId)> for Edge {
    fn from((a, b): (VertexId, VertexId)) -> Self {
        Self::new(a, b)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.u, self.v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_normalized() {
        let e = Edge::new(3, 1);
        assert_eq!(e.endpoints(), (1, 3));
        assert_eq!(e, Edge::from((1, 3)));
        assert!(e.touches(1));
        assert!(e.touches(3));
        assert!(!e.touches(2));
    }

    #[test]
    fn test_edge_display() {
        assert_eq!(Edge::new(0, 2).to_string(), "(0,2)");
    }

    #[test]
    fn test_edge_serialization() {
        let e = Edge::new(4, 7);
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(json, r#"{"u":4,"v":7}"#);
        let back: Edge = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }
}
