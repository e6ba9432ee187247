//! 核心数据模型定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use crate::error::ScanLabelError;

/// 受试者信息
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subject {
    #[serde(default)]
    pub id: String,
    pub label: String,
}

/// 影像会话（一次扫描访视）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub label: String,
    pub subject: Subject,
    /// 扫描时间，用于生成规范标签中的日期
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    /// 会话在仓库中的创建时间
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub acquisitions: Vec<Acquisition>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl Session {
    /// 所有采集标签以空格拼接，供规则做跨采集的子串匹配
    pub fn joined_acquisition_labels(&self) -> String {
        self.acquisitions
            .iter()
            .map(|acq| acq.label.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// 单次采集（一个序列或一次PET扫描）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Acquisition {
    pub id: String,
    #[serde(default)]
    pub label: String,
    pub modality: Modality,
    #[serde(default)]
    pub files: Vec<AcquisitionFile>,
}

impl Acquisition {
    /// 第一个DICOM类型的文件，分类只认这个文件的元数据
    pub fn first_dicom_file(&self) -> Option<&AcquisitionFile> {
        self.files.iter().find(|file| file.file_type == FileType::Dicom)
    }
}

/// 采集下的文件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcquisitionFile {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub file_type: FileType,
    /// 稀疏的元数据字段映射
    #[serde(default)]
    pub info: HashMap<String, serde_json::Value>,
}

/// 检查设备类型
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Modality {
    Ct,
    Sr,
    Pt,
    Mr,
    Other(String),
}

impl Modality {
    pub fn as_str(&self) -> &str {
        match self {
            Modality::Ct => "CT",
            Modality::Sr => "SR",
            Modality::Pt => "PT",
            Modality::Mr => "MR",
            Modality::Other(other) => other,
        }
    }

    /// CT和SR采集没有可用于分类的详细元数据
    pub fn is_diagnostic(&self) -> bool {
        !matches!(self, Modality::Ct | Modality::Sr)
    }
}

impl From<String> for Modality {
    fn from(value: String) -> Self {
        match value.as_str() {
            "CT" => Modality::Ct,
            "SR" => Modality::Sr,
            "PT" => Modality::Pt,
            "MR" => Modality::Mr,
            _ => Modality::Other(value),
        }
    }
}

impl From<Modality> for String {
    fn from(value: Modality) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 文件类型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FileType {
    Dicom,
    Other(String),
}

impl From<String> for FileType {
    fn from(value: String) -> Self {
        if value == "dicom" {
            FileType::Dicom
        } else {
            FileType::Other(value)
        }
    }
}

impl From<FileType> for String {
    fn from(value: FileType) -> Self {
        match value {
            FileType::Dicom => "dicom".to_string(),
            FileType::Other(other) => other,
        }
    }
}

/// 扫描类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScanType {
    #[serde(rename = "3T")]
    ThreeTesla,
    #[serde(rename = "7T")]
    SevenTesla,
    #[serde(rename = "PI2620PET")]
    Pi2620Pet,
    #[serde(rename = "FBBPET")]
    FbbPet,
    #[serde(rename = "FlorbetapirPET")]
    FlorbetapirPet,
    #[serde(rename = "AV1451PET")]
    Av1451Pet,
    #[serde(rename = "FDGPET")]
    FdgPet,
}

impl ScanType {
    pub const ALL: [ScanType; 7] = [
        ScanType::ThreeTesla,
        ScanType::SevenTesla,
        ScanType::Pi2620Pet,
        ScanType::FbbPet,
        ScanType::FlorbetapirPet,
        ScanType::Av1451Pet,
        ScanType::FdgPet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScanType::ThreeTesla => "3T",
            ScanType::SevenTesla => "7T",
            ScanType::Pi2620Pet => "PI2620PET",
            ScanType::FbbPet => "FBBPET",
            ScanType::FlorbetapirPet => "FlorbetapirPET",
            ScanType::Av1451Pet => "AV1451PET",
            ScanType::FdgPet => "FDGPET",
        }
    }
}

impl FromStr for ScanType {
    type Err = ScanLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScanType::ALL
            .into_iter()
            .find(|scan_type| scan_type.as_str() == s)
            .ok_or_else(|| ScanLabelError::Validation(format!("未知扫描类型: {}", s)))
    }
}

impl fmt::Display for ScanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 研究项目代码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Study {
    Abc,
    Abcd2,
    Vcid,
    Leads,
    Ymtl,
    Mpc,
}

impl Study {
    pub const ALL: [Study; 6] = [
        Study::Abc,
        Study::Abcd2,
        Study::Vcid,
        Study::Leads,
        Study::Ymtl,
        Study::Mpc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Study::Abc => "ABC",
            Study::Abcd2 => "ABCD2",
            Study::Vcid => "VCID",
            Study::Leads => "LEADS",
            Study::Ymtl => "YMTL",
            Study::Mpc => "MPC",
        }
    }
}

impl FromStr for Study {
    type Err = ScanLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Study::ALL
            .into_iter()
            .find(|study| study.as_str() == s)
            .ok_or_else(|| ScanLabelError::Validation(format!("未知研究代码: {}", s)))
    }
}

impl fmt::Display for Study {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 单个采集的规范化元数据
///
/// 固定的五个字段，源数据中缺失的字段为空字符串。每个采集都重新构建，
/// 不会带入上一个采集的残留值。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetadataRecord {
    pub magnetic_field_strength: String,
    pub institution_name: String,
    pub institution_address: String,
    pub performed_procedure_step_description: String,
    pub protocol_name: String,
}

impl MetadataRecord {
    /// 磁场强度（特斯拉），空值或非数字时返回None
    pub fn field_strength(&self) -> Option<f64> {
        self.magnetic_field_strength.trim().parse::<f64>().ok()
    }

    /// 操作步骤描述或协议名中是否包含给定的协议编号
    pub fn mentions_protocol(&self, number: &str) -> bool {
        self.performed_procedure_step_description.contains(number)
            || self.protocol_name.contains(number)
    }
}

/// 分类结果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub scan_type: Option<ScanType>,
    pub study: Option<Study>,
}

impl ClassificationResult {
    pub fn new(scan_type: ScanType, study: Study) -> Self {
        Self {
            scan_type: Some(scan_type),
            study: Some(study),
        }
    }

    /// 只确定了扫描类型
    pub fn partial(scan_type: ScanType) -> Self {
        Self {
            scan_type: Some(scan_type),
            study: None,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_complete(&self) -> bool {
        self.scan_type.is_some() && self.study.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.scan_type.is_none() && self.study.is_none()
    }

    pub fn scan_type_str(&self) -> &'static str {
        self.scan_type.map(|scan_type| scan_type.as_str()).unwrap_or("")
    }

    pub fn study_str(&self) -> &'static str {
        self.study.map(|study| study.as_str()).unwrap_or("")
    }
}
