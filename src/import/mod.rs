//! 邻接矩阵导入模块
//!
//! 从文本文件读取邻接矩阵：每个非空行是一行矩阵，整数之间以空白分隔。

use crate::error::{Error, Result};
use crate::graph::AdjacencyMatrix;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

/// 从文件加载邻接矩阵
///
/// 文件在返回前已读完并关闭。
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<AdjacencyMatrix> {
    let path = path.as_ref();
    let unreadable = |source| Error::FileUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unreadable)?;
    let matrix = read_matrix(BufReader::new(file)).map_err(|e| match e {
        Error::IoError(source) => unreadable(source),
        other => other,
    })?;

    debug!(path = %path.display(), vertices = matrix.vertex_count(), "邻接矩阵加载完成");
    Ok(matrix)
}

/// 从任意输入读取邻接矩阵
pub fn read_matrix<R: BufRead>(reader: R) -> Result<AdjacencyMatrix> {
    let mut rows = Vec::new();

    // 按字节切行，非 UTF-8 内容交给 parse_row 报告为格式错误
    for (index, raw) in reader.split(b'\n').enumerate() {
        let raw = raw?;
        let line = String::from_utf8_lossy(&raw);
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        rows.push(parse_row(index + 1, line)?);
    }

    let matrix = AdjacencyMatrix::new(rows)?;
    if !matrix.is_symmetric() {
        warn!("邻接矩阵不对称，只使用上三角部分");
    }
    Ok(matrix)
}

/// 解析一行矩阵，`line_no` 从 1 开始
fn parse_row(line_no: usize, line: &str) -> Result<Vec<i32>> {
    line.split_whitespace()
        .map(str::parse::<i32>)
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| {
            warn!(line = line_no, error = %e, "矩阵行解析失败");
            Error::MalformedRow {
                line: line_no,
                content: line.to_string(),
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_matrix() {
        let input = "0 1 1\n1 0 0\n1 0 0\n";
        let m = read_matrix(Cursor::new(input)).unwrap();
        assert_eq!(m.vertex_count(), 3);
        assert_eq!(m.rows()[0], vec![0, 1, 1]);
    }

    #[test]
    fn test_blank_lines_and_extra_whitespace() {
        let input = "\n  0   1 \n\n\t1 0\n   \n";
        let m = read_matrix(Cursor::new(input)).unwrap();
        assert_eq!(m.rows(), &[vec![0, 1], vec![1, 0]]);
    }

    #[test]
    fn test_malformed_row() {
        let input = "0 1 0\n0 1 x\n0 0 0\n";
        match read_matrix(Cursor::new(input)) {
            Err(Error::MalformedRow { line, content }) => {
                assert_eq!(line, 2);
                assert_eq!(content, "0 1 x");
            }
            other => panic!("expected MalformedRow, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_row_is_malformed() {
        let input: &[u8] = b"0 1 0\n1 0 \xff\n0 0 0\n";
        assert!(matches!(
            read_matrix(Cursor::new(input)),
            Err(Error::MalformedRow { line: 2, .. })
        ));

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(input).unwrap();
        assert!(matches!(
            load_matrix(file.path()),
            Err(Error::MalformedRow { line: 2, .. })
        ));
    }

    #[test]
    fn test_crlf_line_endings() {
        let m = read_matrix(Cursor::new("0 1\r\n1 0\r\n")).unwrap();
        assert_eq!(m.rows(), &[vec![0, 1], vec![1, 0]]);
    }

    #[test]
    fn test_non_square() {
        let input = "0 1 0\n1 0 1\n0 1\n";
        assert!(matches!(
            read_matrix(Cursor::new(input)),
            Err(Error::NonSquareMatrix { rows: 3, row: 2, width: 2 })
        ));
    }

    #[test]
    fn test_empty_input() {
        let m = read_matrix(Cursor::new("")).unwrap();
        assert_eq!(m.vertex_count(), 0);
    }

    #[test]
    fn test_load_matrix_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "0 1 0 0").unwrap();
        writeln!(file, "1 0 1 0").unwrap();
        writeln!(file, "0 1 0 1").unwrap();
        writeln!(file, "0 0 1 0").unwrap();

        let m = load_matrix(file.path()).unwrap();
        assert_eq!(m.vertex_count(), 4);
        assert!(m.has_edge(2, 3));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matrix.txt");
        match load_matrix(&path) {
            Err(Error::FileUnreadable { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected FileUnreadable, got {other:?}"),
        }
    }
}
