//! 轮廓点序列
//!
//! 从CAD文档提取的扁平有序点列：每条匹配的线段贡献起点和终点两个点，
//! 插入顺序即文档的实体遍历顺序。点数恒为偶数；不去重，段与段之间
//! 也不保证首尾相接——绘制时仍按顺序连成一条折线。

use crate::geometry::Line;
use crate::math::{BoundingBox2, Point2};
use serde::{Deserialize, Serialize};

/// 轮廓点序列
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contour {
    points: Vec<Point2>,
}

impl Contour {
    /// 创建空轮廓
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// 追加一条线段的两个端点（先起点后终点）
    pub fn push_segment(&mut self, start: Point2, end: Point2) {
        self.points.push(start);
        self.points.push(end);
    }

    /// 点数
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// 数组形状：(点数, 2)
    ///
    /// N 条匹配的线段对应 (2N, 2)。
    pub fn shape(&self) -> (usize, usize) {
        (self.points.len(), 2)
    }

    /// 按插入顺序访问所有点
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// 以线段形式遍历点对 (2i, 2i+1)，即提取时匹配到的各条线段
    pub fn segments(&self) -> impl Iterator<Item = Line> + '_ {
        self.points
            .chunks_exact(2)
            .map(|pair| Line::new(pair[0], pair[1]))
    }

    /// 提取到的线段数量
    pub fn segment_count(&self) -> usize {
        self.points.len() / 2
    }

    /// 所有点的包围盒；空轮廓返回 None
    pub fn bounding_box(&self) -> Option<BoundingBox2> {
        if self.points.is_empty() {
            return None;
        }
        Some(BoundingBox2::from_points(self.points.iter().copied()))
    }

    /// 所有线段的总长度
    pub fn total_length(&self) -> f64 {
        self.segments().map(|line| line.length()).sum()
    }
}
