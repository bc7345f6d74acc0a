//! 轮廓查看器视图
//!
//! 基于 eframe/egui 的交互式窗口：白底画布、背景网格、等比例坐标轴，
//! 轮廓按点序连成一条黑色折线。[`show`] 会一直阻塞到窗口被关闭。

pub mod app;
pub mod camera;

pub use app::{ContourView, ViewOptions};

use contour_core::contour::Contour;
use eframe::egui;

/// 打开查看窗口并阻塞，直到用户关闭窗口
///
/// 显示后端不可用时返回 eframe 的错误，由调用方处理。
pub fn show(contour: Contour, options: ViewOptions) -> Result<(), eframe::Error> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_title("Contour View"),
        ..Default::default()
    };

    eframe::run_native(
        "Contour View",
        native_options,
        Box::new(move |_cc| Ok(Box::new(ContourView::new(contour, options)))),
    )
}
