//! 控制台交互
//!
//! 结果打印、起始顶点输入以及完整的运行流程

mod printer;
mod prompt;
mod session;

pub use printer::{Printer, Report};
pub use prompt::{parse_start_vertex, read_start_vertex, START_VERTEX_PROMPT};
pub use session::run_session;
