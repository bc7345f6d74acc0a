//! 轮廓查看器核心
//!
//! 提供2D几何图元和从CAD文档提取的轮廓点序列。
//!
//! # 示例
//!
//! ```rust
//! use contour_core::prelude::*;
//!
//! let mut contour = Contour::new();
//! contour.push_segment(Point2::origin(), Point2::new(100.0, 50.0));
//!
//! assert_eq!(contour.shape(), (2, 2));
//! ```

pub mod contour;
pub mod geometry;
pub mod math;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::contour::Contour;
    pub use crate::geometry::Line;
    pub use crate::math::{BoundingBox2, Point2, Vector2};
}
