//! 起始顶点输入

use crate::error::{Error, Result};
use crate::graph::VertexId;
use std::io::{BufRead, Write};

pub const START_VERTEX_PROMPT: &str = "Enter start vertex for traversals: ";

/// 输出提示并读取一行作为起始顶点
pub fn read_start_vertex<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<VertexId> {
    write!(output, "\n{}", START_VERTEX_PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    parse_start_vertex(&line)
}

/// 取输入中的第一个记号作为顶点 ID
pub fn parse_start_vertex(input: &str) -> Result<VertexId> {
    let token = input.split_whitespace().next().unwrap_or("");
    token
        .parse::<VertexId>()
        .map_err(|_| Error::InvalidStartVertex(token.to_string()))
}
