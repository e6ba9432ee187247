//! # DICOM元数据模块
//!
//! 从采集的DICOM文件信息中提取分类所需的元数据字段。

pub mod extractor;
pub mod fields;

pub use extractor::{AcquisitionMetadata, MetadataExtractor, SessionMetadata};
pub use fields::MetadataField;
