//! 广度优先 / 深度优先遍历
//!
//! 两种遍历都从给定起点出发，输出每个可达顶点各一次，按首次访问顺序排列。
//!
//! 对孤立起点的处理并不对称：BFS 直接查表，起点不在邻接表中时返回
//! [`Error::UnknownStartVertex`]；DFS 把缺失表项视为没有邻居，结果只含起点。

use crate::error::{Error, Result};
use crate::graph::{AdjacencyList, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use std::fmt;
use tracing::debug;

/// 遍历方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraversalOrder {
    /// 广度优先
    Breadth,
    /// 深度优先
    Depth,
}

impl TraversalOrder {
    /// 按当前方式遍历
    pub fn run(self, graph: &AdjacencyList, start: VertexId) -> Result<Vec<VertexId>> {
        match self {
            TraversalOrder::Breadth => bfs(graph, start),
            TraversalOrder::Depth => Ok(dfs(graph, start)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TraversalOrder::Breadth => "BFS",
            TraversalOrder::Depth => "DFS",
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 同一起点的两种遍历结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Traversal {
    pub start: VertexId,
    pub bfs: Vec<VertexId>,
    pub dfs: Vec<VertexId>,
}

impl Traversal {
    /// 依次执行 BFS 和 DFS；BFS 失败时不再执行 DFS
    pub fn run(graph: &AdjacencyList, start: VertexId) -> Result<Self> {
        let bfs = TraversalOrder::Breadth.run(graph, start)?;
        let dfs = TraversalOrder::Depth.run(graph, start)?;
        Ok(Self { start, bfs, dfs })
    }
}

/// 广度优先遍历
///
/// 出队时才检查是否已访问，所以同一顶点可能多次入队，但只记录一次。
pub fn bfs(graph: &AdjacencyList, start: VertexId) -> Result<Vec<VertexId>> {
    let mut order = Vec::new();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(vertex) = queue.pop_front() {
        if !visited.insert(vertex) {
            continue;
        }
        order.push(vertex);

        let neighbors = graph
            .neighbors(vertex)
            .ok_or(Error::UnknownStartVertex(vertex))?;
        queue.extend(neighbors.iter().copied());
    }

    debug!(start, visited = order.len(), "BFS 完成");
    Ok(order)
}

/// 深度优先遍历（显式栈）
///
/// 邻居按降序压栈，弹出时即按升序访问。
pub fn dfs(graph: &AdjacencyList, start: VertexId) -> Vec<VertexId> {
    let mut order = Vec::new();
    let mut visited = HashSet::new();
    let mut stack = vec![start];

    while let Some(vertex) = stack.pop() {
        if !visited.insert(vertex) {
            continue;
        }
        order.push(vertex);

        let mut neighbors = graph.neighbors(vertex).unwrap_or_default().to_vec();
        neighbors.sort_unstable_by(|a, b| b.cmp(a));
        stack.extend(neighbors);
    }

    debug!(start, visited = order.len(), "DFS 完成");
    order
}
