//! DICOM元数据提取器
//!
//! 从会话的采集列表构建分类使用的元数据记录

use dicom::object::open_file;
use scanlabel_core::{Acquisition, MetadataRecord, Modality, Result, ScanLabelError, Session};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, error, info};

use crate::fields::MetadataField;

/// 单个采集的元数据
#[derive(Debug, Clone)]
pub struct AcquisitionMetadata {
    pub acquisition_id: String,
    pub acquisition_label: String,
    pub modality: Modality,
    pub record: MetadataRecord,
}

/// 整个会话的提取结果
#[derive(Debug, Clone, Default)]
pub struct SessionMetadata {
    /// 会话内所有采集标签（包括CT/SR）以空格拼接
    pub labels: String,
    /// 参与分类的采集，保持会话中的存储顺序
    pub acquisitions: Vec<AcquisitionMetadata>,
}

/// DICOM元数据提取器
#[derive(Debug)]
pub struct MetadataExtractor;

impl Default for MetadataExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataExtractor {
    /// 创建新的元数据提取器
    pub fn new() -> Self {
        Self
    }

    /// 提取会话内所有参与分类的采集元数据
    pub fn extract_session(&self, session: &Session) -> SessionMetadata {
        let acquisitions = session
            .acquisitions
            .iter()
            .filter_map(|acq| self.extract_acquisition(acq))
            .collect();

        SessionMetadata {
            labels: session.joined_acquisition_labels(),
            acquisitions,
        }
    }

    /// 提取单个采集的元数据，CT和SR采集返回None
    pub fn extract_acquisition(&self, acquisition: &Acquisition) -> Option<AcquisitionMetadata> {
        if !acquisition.modality.is_diagnostic() {
            debug!(
                "Skipping {} acquisition {} without detailed metadata",
                acquisition.modality, acquisition.label
            );
            return None;
        }

        let record = match acquisition.first_dicom_file() {
            Some(file) => self.record_from_info(&file.info),
            None => {
                debug!("Acquisition {} has no dicom file, using empty metadata", acquisition.label);
                MetadataRecord::default()
            }
        };

        Some(AcquisitionMetadata {
            acquisition_id: acquisition.id.clone(),
            acquisition_label: acquisition.label.clone(),
            modality: acquisition.modality.clone(),
            record,
        })
    }

    /// 从文件信息映射构建元数据记录，缺失字段为空字符串
    pub fn record_from_info(&self, info: &HashMap<String, Value>) -> MetadataRecord {
        let read = |field: MetadataField| -> String {
            info.get(field.keyword())
                .map(render_info_value)
                .unwrap_or_default()
        };

        MetadataRecord {
            magnetic_field_strength: read(MetadataField::MagneticFieldStrength),
            institution_name: read(MetadataField::InstitutionName),
            institution_address: read(MetadataField::InstitutionAddress),
            performed_procedure_step_description: read(MetadataField::PerformedProcedureStepDescription),
            protocol_name: read(MetadataField::ProtocolName),
        }
    }

    /// 直接从本地DICOM文件读取同样的五个字段
    pub fn record_from_file<P: AsRef<Path> + std::fmt::Debug>(&self, file_path: P) -> Result<MetadataRecord> {
        let file_path = file_path.as_ref();
        info!("开始读取DICOM文件元数据: {:?}", file_path);

        let obj = open_file(file_path).map_err(|e| {
            error!("DICOM文件解析失败: {:?}", e);
            ScanLabelError::Dicom(format!("无法解析DICOM文件: {:?}", e))
        })?;

        let read = |field: MetadataField| -> String {
            obj.element(field.tag())
                .ok()
                .and_then(|elem| elem.to_str().ok().map(|s| clean_dicom_string(&s)))
                .unwrap_or_default()
        };

        Ok(MetadataRecord {
            magnetic_field_strength: read(MetadataField::MagneticFieldStrength),
            institution_name: read(MetadataField::InstitutionName),
            institution_address: read(MetadataField::InstitutionAddress),
            performed_procedure_step_description: read(MetadataField::PerformedProcedureStepDescription),
            protocol_name: read(MetadataField::ProtocolName),
        })
    }
}

/// 信息映射中的值统一转为字符串
fn render_info_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        // 多值字段按DICOM的反斜杠分隔
        Value::Array(items) => items
            .iter()
            .map(render_info_value)
            .collect::<Vec<_>>()
            .join("\\"),
        Value::Object(_) => String::new(),
    }
}

/// 去掉DICOM字符串的填充字符
fn clean_dicom_string(value: &str) -> String {
    value
        .trim_end_matches(|c: char| c == '\0' || c.is_whitespace())
        .trim_start()
        .to_string()
}
