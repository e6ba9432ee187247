//! 分类使用的DICOM字段

use dicom::core::Tag;
use dicom::dictionary_std::tags;

/// 分类规则读取的五个DICOM字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataField {
    MagneticFieldStrength,
    InstitutionName,
    InstitutionAddress,
    PerformedProcedureStepDescription,
    ProtocolName,
}

impl MetadataField {
    /// DICOM关键字，同时也是文件信息映射中的键
    pub fn keyword(&self) -> &'static str {
        match self {
            MetadataField::MagneticFieldStrength => "MagneticFieldStrength",
            MetadataField::InstitutionName => "InstitutionName",
            MetadataField::InstitutionAddress => "InstitutionAddress",
            MetadataField::PerformedProcedureStepDescription => "PerformedProcedureStepDescription",
            MetadataField::ProtocolName => "ProtocolName",
        }
    }

    /// 标准字典中的标签
    pub fn tag(&self) -> Tag {
        match self {
            MetadataField::MagneticFieldStrength => tags::MAGNETIC_FIELD_STRENGTH,
            MetadataField::InstitutionName => tags::INSTITUTION_NAME,
            MetadataField::InstitutionAddress => tags::INSTITUTION_ADDRESS,
            MetadataField::PerformedProcedureStepDescription => {
                tags::PERFORMED_PROCEDURE_STEP_DESCRIPTION
            }
            MetadataField::ProtocolName => tags::PROTOCOL_NAME,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_tags() {
        assert_eq!(MetadataField::MagneticFieldStrength.tag(), Tag(0x0018, 0x0087));
        assert_eq!(MetadataField::InstitutionName.tag(), Tag(0x0008, 0x0080));
        assert_eq!(MetadataField::ProtocolName.tag(), Tag(0x0018, 0x1030));
    }
}
