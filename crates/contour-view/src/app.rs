//! 查看器主体
//!
//! 白底画布上绘制背景网格和一条黑色折线；折线按点序依次连接
//! 轮廓里的所有点。支持滚轮缩放、中键平移等基本视图操作。

use contour_core::contour::Contour;
use contour_core::math::{Point2, Vector2};
use eframe::egui;
use tracing::debug;

use crate::camera::Camera2D;

/// 查看选项
#[derive(Debug, Clone)]
pub struct ViewOptions {
    /// 是否显示背景网格
    pub show_grid: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self { show_grid: true }
    }
}

/// 轮廓查看窗口
pub struct ContourView {
    contour: Contour,
    camera: Camera2D,
    show_grid: bool,
    fitted: bool,
    /// 上一帧光标所在的世界坐标，供状态栏显示
    cursor_world: Option<Point2>,
}

impl ContourView {
    pub fn new(contour: Contour, options: ViewOptions) -> Self {
        Self {
            contour,
            camera: Camera2D::default(),
            show_grid: options.show_grid,
            fitted: false,
            cursor_world: None,
        }
    }

    /// 缩放到轮廓的包围盒；空轮廓回到默认视图
    fn fit_view(&mut self) {
        match self.contour.bounding_box() {
            Some(bbox) => {
                let padding = (bbox.width().max(bbox.height()) * 0.05).max(1.0);
                self.camera.zoom_to_fit(&bbox, padding);
                debug!(zoom = self.camera.zoom, "视图已适配轮廓");
            }
            None => self.camera.reset(),
        }
    }

    /// 世界坐标转视口内的屏幕位置
    fn world_to_screen(&self, rect: &egui::Rect, point: Point2) -> egui::Pos2 {
        let screen = self.camera.world_to_screen(point);
        egui::Pos2::new(
            rect.left() + screen.x as f32,
            rect.top() + screen.y as f32,
        )
    }

    /// 视口内的屏幕位置转世界坐标
    fn screen_to_world(&self, rect: &egui::Rect, pos: egui::Pos2) -> Point2 {
        self.camera.screen_to_world(Point2::new(
            (pos.x - rect.left()) as f64,
            (pos.y - rect.top()) as f64,
        ))
    }

    /// 绘制网格
    fn draw_grid(&self, painter: &egui::Painter, rect: &egui::Rect) {
        if !self.show_grid {
            return;
        }

        let spacing = grid_spacing(self.camera.zoom);
        let bounds = self.camera.visible_bounds();

        let start_x = (bounds.min.x / spacing).floor() * spacing;
        let end_x = (bounds.max.x / spacing).ceil() * spacing;
        let start_y = (bounds.min.y / spacing).floor() * spacing;
        let end_y = (bounds.max.y / spacing).ceil() * spacing;

        let grid_color = egui::Color32::from_rgb(225, 225, 225);
        let axis_color = egui::Color32::from_rgb(170, 170, 170);

        // 垂直线
        let mut x = start_x;
        while x <= end_x {
            let screen_x = self.world_to_screen(rect, Point2::new(x, 0.0)).x;
            let color = if x.abs() < 0.001 { axis_color } else { grid_color };
            painter.line_segment(
                [
                    egui::Pos2::new(screen_x, rect.top()),
                    egui::Pos2::new(screen_x, rect.bottom()),
                ],
                egui::Stroke::new(1.0, color),
            );
            x += spacing;
        }

        // 水平线
        let mut y = start_y;
        while y <= end_y {
            let screen_y = self.world_to_screen(rect, Point2::new(0.0, y)).y;
            let color = if y.abs() < 0.001 { axis_color } else { grid_color };
            painter.line_segment(
                [
                    egui::Pos2::new(rect.left(), screen_y),
                    egui::Pos2::new(rect.right(), screen_y),
                ],
                egui::Stroke::new(1.0, color),
            );
            y += spacing;
        }
    }

    /// 按点序绘制折线：第 i 个点连向第 i+1 个点
    fn draw_contour(&self, painter: &egui::Painter, rect: &egui::Rect) {
        let stroke = egui::Stroke::new(1.0, egui::Color32::BLACK);

        for pair in self.contour.points().windows(2) {
            let a = self.world_to_screen(rect, pair[0]);
            let b = self.world_to_screen(rect, pair[1]);
            painter.line_segment([a, b], stroke);
        }
    }
}

impl eframe::App for ContourView {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::light());

        // ===== 状态栏（中央面板之前加入，数据取自上一帧的快照）=====
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let (rows, cols) = self.contour.shape();
                ui.label(format!("点数: {rows}  形状: ({rows}, {cols})"));
                ui.separator();
                ui.label(format!("线段: {}", self.contour.segment_count()));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(pos) = self.cursor_world {
                        ui.label(format!("X:{:>10.3} Y:{:>10.3}", pos.x, pos.y));
                    }
                });
            });
        });

        // ===== 中央画布 =====
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                let available_rect = ui.available_rect_before_wrap();
                let (response, painter) =
                    ui.allocate_painter(available_rect.size(), egui::Sense::click_and_drag());
                let rect = response.rect;

                self.camera
                    .set_viewport(rect.width() as u32, rect.height() as u32);

                // 首帧先适配视图，此时视口尺寸才可用
                if !self.fitted {
                    self.fit_view();
                    self.fitted = true;
                }

                self.cursor_world = response
                    .hover_pos()
                    .map(|pos| self.screen_to_world(&rect, pos));

                // 滚轮缩放，保持光标下的点不动
                let scroll_delta = ui.input(|i| i.raw_scroll_delta);
                if scroll_delta.y.abs() > 0.0 && response.hovered() {
                    if let Some(hover_pos) = response.hover_pos() {
                        let factor = if scroll_delta.y > 0.0 { 1.1 } else { 0.9 };
                        let anchor = Point2::new(
                            (hover_pos.x - rect.left()) as f64,
                            (hover_pos.y - rect.top()) as f64,
                        );
                        self.camera.zoom_at(anchor, factor);
                    }
                }

                // 中键平移
                if response.dragged_by(egui::PointerButton::Middle) {
                    let delta = response.drag_delta();
                    self.camera
                        .pan(Vector2::new(-delta.x as f64, delta.y as f64));
                }

                ui.input(|i| {
                    if i.key_pressed(egui::Key::Z) {
                        self.fit_view();
                    }
                    if i.key_pressed(egui::Key::G) {
                        self.show_grid = !self.show_grid;
                    }
                });

                self.draw_grid(&painter, &rect);
                self.draw_contour(&painter, &rect);
            });
    }
}

/// 根据缩放级别选择网格间距，保证网格线在屏幕上既不过密也不过疏
fn grid_spacing(zoom: f64) -> f64 {
    let mut spacing = 50.0;
    while spacing * zoom < 20.0 {
        spacing *= 5.0;
    }
    while spacing * zoom > 200.0 {
        spacing /= 5.0;
    }
    spacing
}
