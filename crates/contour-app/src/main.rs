//! 轮廓查看器主程序入口
//!
//! 流程是一条直线：解析命令行 → 导入 DXF（仅一次）→ 打印点阵形状 →
//! 打开查看窗口并阻塞到关闭。任何失败直接向上冒泡，进程以非零状态退出。

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use contour_view::ViewOptions;

/// 从DXF文件提取LINE实体端点并绘制2D轮廓
#[derive(Parser, Debug)]
#[command(name = "contour", version, about)]
struct Args {
    /// DXF文件路径
    path: PathBuf,

    /// 不显示背景网格
    #[arg(long)]
    no_grid: bool,

    /// 仅加载并打印形状，不打开查看窗口
    #[arg(long)]
    headless: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 初始化日志
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder().with_max_level(Level::INFO).finish(),
    )?;

    let contour = contour_file::dxf_io::import(&args.path)
        .with_context(|| format!("无法加载 {}", args.path.display()))?;

    let (rows, cols) = contour.shape();
    println!("({rows}, {cols})");

    info!(
        points = rows,
        segments = contour.segment_count(),
        total_length = contour.total_length(),
        "轮廓提取完成"
    );

    if args.headless {
        return Ok(());
    }

    contour_view::show(
        contour,
        ViewOptions {
            show_grid: !args.no_grid,
        },
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {}", e))?;

    Ok(())
}
