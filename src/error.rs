//! 错误类型定义

use crate::graph::VertexId;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("第 {line} 行格式错误: \"{content}\"，请检查数据格式")]
    MalformedRow { line: usize, content: String },

    #[error("矩阵必须是方阵: 共 {rows} 行，但下标为 {row} 的行有 {width} 列")]
    NonSquareMatrix {
        rows: usize,
        row: usize,
        width: usize,
    },

    #[error("无法读取文件 {}: {source}", .path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("邻接表中不存在起始顶点: {0}")]
    UnknownStartVertex(VertexId),

    #[error("无效的起始顶点: \"{0}\"")]
    InvalidStartVertex(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::SerializationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_row_message_includes_content() {
        let err = Error::MalformedRow {
            line: 3,
            content: "0 1 x".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("0 1 x"));
        assert!(msg.contains('3'));
    }

    #[test]
    fn test_file_unreadable_keeps_source() {
        use std::error::Error as _;

        let err = Error::FileUnreadable {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("missing.txt"));
        assert!(err.source().is_some());
    }
}
