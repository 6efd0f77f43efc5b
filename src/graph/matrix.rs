//! 邻接矩阵
//!
//! 无向图的方阵表示，`matrix[i][j] == 1` 表示顶点 i 与 j 之间有边

use super::VertexId;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 邻接矩阵（构造时保证是方阵）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyMatrix {
    rows: Vec<Vec<i32>>,
}

impl AdjacencyMatrix {
    /// 创建邻接矩阵，行宽与行数不一致时返回 `NonSquareMatrix`
    pub fn new(rows: Vec<Vec<i32>>) -> Result<Self> {
        let count = rows.len();
        if let Some((row, width)) = rows
            .iter()
            .enumerate()
            .map(|(i, r)| (i, r.len()))
            .find(|&(_, width)| width != count)
        {
            return Err(Error::NonSquareMatrix {
                rows: count,
                row,
                width,
            });
        }
        Ok(Self { rows })
    }

    /// 顶点数
    pub fn vertex_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<i32>] {
        &self.rows
    }

    pub fn get(&self, i: VertexId, j: VertexId) -> Option<i32> {
        self.rows.get(i).and_then(|r| r.get(j)).copied()
    }

    /// 只有取值为 1 的单元才算作边
    pub fn has_edge(&self, i: VertexId, j: VertexId) -> bool {
        self.get(i, j) == Some(1)
    }

    /// 是否关于主对角线对称
    ///
    /// 转换只扫描上三角，下三角不参与计算；该方法仅用于在加载时给出提示。
    pub fn is_symmetric(&self) -> bool {
        let n = self.vertex_count();
        (0..n).all(|i| (i + 1..n).all(|j| self.rows[i][j] == self.rows[j][i]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_matrix() {
        let m = AdjacencyMatrix::new(vec![vec![0, 1], vec![1, 0]]).unwrap();
        assert_eq!(m.vertex_count(), 2);
        assert!(m.has_edge(0, 1));
        assert!(!m.has_edge(0, 0));
        assert!(!m.has_edge(5, 0));
        assert!(m.is_symmetric());
    }

    #[test]
    fn test_non_square_rejected() {
        let err = AdjacencyMatrix::new(vec![vec![0, 1, 0], vec![1, 0, 0], vec![0, 0]]).unwrap_err();
        match err {
            Error::NonSquareMatrix { rows, row, width } => {
                assert_eq!(rows, 3);
                assert_eq!(row, 2);
                assert_eq!(width, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_matrix() {
        let m = AdjacencyMatrix::new(Vec::new()).unwrap();
        assert_eq!(m.vertex_count(), 0);
        assert!(m.is_symmetric());
    }

    #[test]
    fn test_asymmetric_detected() {
        let m = AdjacencyMatrix::new(vec![vec![0, 1], vec![0, 0]]).unwrap();
        assert!(!m.is_symmetric());
    }
}
