//! DXF文件导入
//!
//! 读取AutoCAD DXF格式，把模型空间里的LINE实体端点拍平成轮廓点序列。

use std::path::Path;

use contour_core::contour::Contour;
use contour_core::math::Point2;
use tracing::debug;

use crate::error::FileError;

/// 从DXF文件导入轮廓
///
/// 文件缺失返回 [`FileError::NotFound`]；内容无法按DXF解析时返回底层
/// 解析器的错误，不做恢复。函数自身无状态，可重复调用，结果只取决于
/// 文件内容。
pub fn import(path: &Path) -> Result<Contour, FileError> {
    if !path.exists() {
        return Err(FileError::NotFound(path.to_path_buf()));
    }

    let drawing = dxf::Drawing::load_file(path).map_err(|e| FileError::Dxf(e.to_string()))?;

    Ok(extract(&drawing))
}

/// 从已解析的文档提取轮廓
///
/// 按文档自身的实体顺序遍历，不排序。LINE 之外的类型（圆、圆弧、
/// 多段线、文字、块参照等）一律跳过；Z 坐标忽略。
pub fn extract(drawing: &dxf::Drawing) -> Contour {
    let mut contour = Contour::new();
    let mut skipped = 0usize;

    for entity in drawing.entities() {
        match &entity.specific {
            dxf::entities::EntityType::Line(line) => {
                contour.push_segment(
                    Point2::new(line.p1.x, line.p1.y),
                    Point2::new(line.p2.x, line.p2.y),
                );
            }
            _ => skipped += 1,
        }
    }

    debug!(
        lines = contour.segment_count(),
        skipped, "DXF实体提取完成"
    );

    contour
}

#[cfg(test)]
mod tests {
    use super::*;
    use contour_core::math::points_approx_eq;
    use std::io::Write;

    fn line_entity(sx: f64, sy: f64, ex: f64, ey: f64) -> dxf::entities::Entity {
        let mut line = dxf::entities::Line::default();
        line.p1 = dxf::Point::new(sx, sy, 0.0);
        line.p2 = dxf::Point::new(ex, ey, 0.0);
        dxf::entities::Entity::new(dxf::entities::EntityType::Line(line))
    }

    fn circle_entity(cx: f64, cy: f64, radius: f64) -> dxf::entities::Entity {
        let mut circle = dxf::entities::Circle::default();
        circle.center = dxf::Point::new(cx, cy, 0.0);
        circle.radius = radius;
        dxf::entities::Entity::new(dxf::entities::EntityType::Circle(circle))
    }

    fn text_entity(x: f64, y: f64, value: &str) -> dxf::entities::Entity {
        let mut text = dxf::entities::Text::default();
        text.location = dxf::Point::new(x, y, 0.0);
        text.text_height = 2.5;
        text.value = value.to_string();
        dxf::entities::Entity::new(dxf::entities::EntityType::Text(text))
    }

    #[test]
    fn test_extract_lines_in_order() {
        let mut drawing = dxf::Drawing::new();
        drawing.add_entity(line_entity(0.0, 0.0, 1.0, 0.0));
        drawing.add_entity(line_entity(1.0, 0.0, 1.0, 1.0));

        let contour = extract(&drawing);

        assert_eq!(contour.shape(), (4, 2));
        let points = contour.points();
        assert!(points_approx_eq(&points[0], &Point2::new(0.0, 0.0)));
        assert!(points_approx_eq(&points[1], &Point2::new(1.0, 0.0)));
        assert!(points_approx_eq(&points[2], &Point2::new(1.0, 0.0)));
        assert!(points_approx_eq(&points[3], &Point2::new(1.0, 1.0)));
    }

    #[test]
    fn test_extract_ignores_z() {
        let mut drawing = dxf::Drawing::new();
        let mut line = dxf::entities::Line::default();
        line.p1 = dxf::Point::new(2.0, 3.0, 7.5);
        line.p2 = dxf::Point::new(4.0, 5.0, -1.0);
        drawing.add_entity(dxf::entities::Entity::new(
            dxf::entities::EntityType::Line(line),
        ));

        let contour = extract(&drawing);
        let points = contour.points();
        assert!(points_approx_eq(&points[0], &Point2::new(2.0, 3.0)));
        assert!(points_approx_eq(&points[1], &Point2::new(4.0, 5.0)));
    }

    #[test]
    fn test_extract_skips_other_entity_kinds() {
        let mut drawing = dxf::Drawing::new();
        drawing.add_entity(circle_entity(0.0, 0.0, 5.0));
        drawing.add_entity(line_entity(0.0, 0.0, 10.0, 0.0));
        drawing.add_entity(text_entity(3.0, 3.0, "label"));
        drawing.add_entity(line_entity(10.0, 0.0, 10.0, 10.0));

        let contour = extract(&drawing);

        assert_eq!(contour.shape(), (4, 2));
        assert_eq!(contour.segment_count(), 2);
    }

    #[test]
    fn test_extract_empty_document() {
        let drawing = dxf::Drawing::new();
        let contour = extract(&drawing);

        assert!(contour.is_empty());
        assert_eq!(contour.shape(), (0, 2));
    }

    #[test]
    fn test_extract_no_lines_among_entities() {
        let mut drawing = dxf::Drawing::new();
        drawing.add_entity(circle_entity(1.0, 1.0, 2.0));
        drawing.add_entity(text_entity(0.0, 0.0, "nothing to trace"));

        let contour = extract(&drawing);
        assert!(contour.is_empty());
    }

    #[test]
    fn test_import_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does_not_exist.dxf");

        let result = import(&path);
        assert!(matches!(result, Err(FileError::NotFound(_))));
    }

    #[test]
    fn test_import_invalid_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.dxf");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "this is not a drawing").unwrap();
        writeln!(file, "just some text").unwrap();
        drop(file);

        let result = import(&path);
        assert!(matches!(result, Err(FileError::Dxf(_))));
    }

    #[test]
    fn test_import_roundtrip_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("square.dxf");

        let mut drawing = dxf::Drawing::new();
        drawing.add_entity(line_entity(0.0, 0.0, 1.0, 0.0));
        drawing.add_entity(line_entity(1.0, 0.0, 1.0, 1.0));
        drawing.add_entity(circle_entity(0.5, 0.5, 0.25));
        drawing.save_file(&path).unwrap();

        let first = import(&path).unwrap();
        let second = import(&path).unwrap();

        assert_eq!(first.shape(), (4, 2));
        assert_eq!(first, second);
    }
}
