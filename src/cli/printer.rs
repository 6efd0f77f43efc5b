//! 结果打印器
//!
//! 把各种图表示和遍历结果格式化为纯文本、表格或 JSON

use crate::algorithm::{Traversal, TraversalOrder};
use crate::config::ReportFormat;
use crate::error::Result;
use crate::graph::{AdjacencyList, Edge, IncidenceMatrix, IncidentEdges, Representations};
use colored::Colorize;
use prettytable::{format, Cell, Row, Table};
use serde::Serialize;
use std::fmt::Display;

/// JSON 报告
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    #[serde(flatten)]
    pub representations: &'a Representations,
    pub traversal: &'a Traversal,
}

/// 结果打印器
pub struct Printer {
    format: ReportFormat,
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(ReportFormat::Plain)
    }
}

impl Printer {
    pub fn new(format: ReportFormat) -> Self {
        Self {
            format,
            color: false,
        }
    }

    /// 标题着色（仅在终端输出时开启）
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// 打印全部图表示：关联矩阵、关联边、邻接表
    pub fn format_representations(&self, reps: &Representations) -> String {
        [
            self.format_incidence_matrix(&reps.incidence_matrix, &reps.edge_list),
            self.format_incident_edges(&reps.incident_edges),
            self.format_adjacency_list(&reps.adjacency_list),
        ]
        .join("\n")
    }

    /// 关联矩阵
    pub fn format_incidence_matrix(&self, matrix: &IncidenceMatrix, edges: &[Edge]) -> String {
        let mut output = self.heading("Incidence matrix:");
        match self.format {
            ReportFormat::Table => {
                let mut titles = vec![Cell::new("")];
                titles.extend(edges.iter().map(|e| Cell::new(&e.to_string())));

                let rows = matrix.rows().iter().enumerate().map(|(v, row)| {
                    let mut cells = vec![Cell::new(&v.to_string())];
                    cells.extend(row.iter().map(|x| Cell::new(&x.to_string())));
                    cells
                });
                output.push_str(&Self::table(titles, rows));
            }
            _ => {
                for row in matrix.rows() {
                    output.push_str(&bracketed(row.as_slice()));
                    output.push('\n');
                }
            }
        }
        output
    }

    /// 每个顶点的关联边，形如 `0: (0,1)  (0,2)`
    pub fn format_incident_edges(&self, incident: &IncidentEdges) -> String {
        let mut output = self.heading("Incident edges per vertex:");
        let lines = incident.iter().map(|(v, edges)| {
            let joined = edges
                .iter()
                .map(Edge::to_string)
                .collect::<Vec<_>>()
                .join("  ");
            (v, joined)
        });

        match self.format {
            ReportFormat::Table => {
                let rows =
                    lines.map(|(v, joined)| vec![Cell::new(&v.to_string()), Cell::new(&joined)]);
                output.push_str(&Self::table(
                    vec![Cell::new("Vertex"), Cell::new("Edges")],
                    rows,
                ));
            }
            _ => {
                for (v, joined) in lines {
                    output.push_str(&format!("{}: {}\n", v, joined));
                }
            }
        }
        output
    }

    /// 邻接表，形如 `0: [1, 2]`
    pub fn format_adjacency_list(&self, adj: &AdjacencyList) -> String {
        let mut output = self.heading("Adjacency list:");
        match self.format {
            ReportFormat::Table => {
                let rows = adj
                    .iter()
                    .map(|(v, n)| vec![Cell::new(&v.to_string()), Cell::new(&bracketed(n))]);
                output.push_str(&Self::table(
                    vec![Cell::new("Vertex"), Cell::new("Neighbors")],
                    rows,
                ));
            }
            _ => {
                for (v, neighbors) in adj.iter() {
                    output.push_str(&format!("{}: {}\n", v, bracketed(neighbors)));
                }
            }
        }
        output
    }

    /// 遍历结果
    pub fn format_traversal(&self, traversal: &Traversal) -> String {
        let results = [
            (TraversalOrder::Breadth, &traversal.bfs),
            (TraversalOrder::Depth, &traversal.dfs),
        ];

        match self.format {
            ReportFormat::Table => {
                let rows = results.iter().map(|(order, visited)| {
                    vec![
                        Cell::new(order.as_str()),
                        Cell::new(&bracketed(visited.as_slice())),
                    ]
                });
                let title = format!("Traversals from vertex {}:", traversal.start);
                format!(
                    "{}{}",
                    self.heading(&title),
                    Self::table(vec![Cell::new("Order"), Cell::new("Visited")], rows)
                )
            }
            _ => results
                .iter()
                .map(|(order, visited)| format!("{}: {}\n", order, bracketed(visited.as_slice())))
                .collect(),
        }
    }

    /// 完整 JSON 报告
    pub fn format_json(&self, reps: &Representations, traversal: &Traversal) -> Result<String> {
        let report = Report {
            representations: reps,
            traversal,
        };
        Ok(serde_json::to_string_pretty(&report)? + "\n")
    }

    fn heading(&self, title: &str) -> String {
        if self.color {
            format!("{}\n", title.bold().cyan())
        } else {
            format!("{}\n", title)
        }
    }

    fn table<I>(titles: Vec<Cell>, rows: I) -> String
    where
        I: IntoIterator<Item = Vec<Cell>>,
    {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(Row::new(titles));
        for cells in rows {
            table.add_row(Row::new(cells));
        }
        table.to_string()
    }
}

/// `[a, b, c]` 形式
fn bracketed<T: Display>(items: &[T]) -> String {
    let inner = items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", inner)
}
