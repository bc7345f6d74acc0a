//! 轮廓查看器文件处理
//!
//! 通过第三方 dxf 解析器读取文档，仅消费 LINE 实体。
//! 格式解析本身完全委托给 dxf crate。

pub mod dxf_io;
pub mod error;

pub use error::FileError;
