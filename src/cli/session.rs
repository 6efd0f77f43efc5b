//! 一次完整的运行：加载 → 转换 → 打印 → 遍历 → 打印

use super::{read_start_vertex, Printer};
use crate::algorithm::Traversal;
use crate::config::{ReportConfig, ReportFormat};
use crate::error::Result;
use crate::graph::Representations;
use crate::import::load_matrix;
use std::io::{BufRead, Write};
use tracing::info;

/// 按配置生成报告
///
/// 未指定起始顶点时从 `input` 读取；提示写到 `out`，JSON 格式下改写到 `err`。
/// 加载失败时不做任何转换；BFS 失败时图表示已经输出。
pub fn run_session<R, W, E>(
    config: &ReportConfig,
    input: R,
    out: &mut W,
    err: &mut E,
) -> Result<Traversal>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let matrix = load_matrix(&config.matrix_path)?;
    let reps = Representations::from_matrix(&matrix);
    info!(
        vertices = matrix.vertex_count(),
        edges = reps.edge_list.len(),
        "图表示构建完成"
    );

    let printer = Printer::new(config.format).with_color(config.color);
    if config.format != ReportFormat::Json {
        write!(out, "{}", printer.format_representations(&reps))?;
    }

    let start = match config.start {
        Some(start) => start,
        None if config.prompt_on_stderr() => read_start_vertex(input, &mut *err)?,
        None => read_start_vertex(input, &mut *out)?,
    };

    let traversal = Traversal::run(&reps.adjacency_list, start)?;
    match config.format {
        ReportFormat::Json => write!(out, "{}", printer.format_json(&reps, &traversal)?)?,
        _ => write!(out, "\n{}", printer.format_traversal(&traversal))?,
    }
    out.flush()?;

    Ok(traversal)
}
