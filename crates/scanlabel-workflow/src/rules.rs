//! 分类规则引擎
//!
//! 按采集顺序逐个评估元数据，先按检查设备类型分派，再按字段子串匹配，
//! 得到会话的扫描类型和研究项目。第一个确定的结果生效。

use scanlabel_core::{ClassificationResult, MetadataRecord, Modality, ScanType, Study};
use scanlabel_dicom::SessionMetadata;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// 单个采集的规则判定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleVerdict {
    /// 已确定，停止扫描后续采集（结果可能仍不完整）
    Found(ClassificationResult),
    /// 记下结果但继续扫描，需人工复核
    Provisional(ClassificationResult),
    /// 无法确定，继续下一个采集
    Inconclusive(ClassificationResult),
}

/// 需要人工复核的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReviewFlag {
    /// 淀粉样蛋白扫描使用的是Florbetapir示踪剂
    FlorbetapirScan,
    /// SC3T扫描仪仅凭MPC后缀得出研究项目
    UnconfirmedMpcSuffix,
}

/// 规则评估上下文
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// 会话当前标签
    pub session_label: &'a str,
    /// 会话内所有采集标签的拼接
    pub labels: &'a str,
    /// 当前采集的元数据
    pub record: &'a MetadataRecord,
}

/// 会话分类结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub result: ClassificationResult,
    /// 给出结果的采集标签
    pub decided_by: Option<String>,
    pub review_flags: Vec<ReviewFlag>,
}

impl Classification {
    fn new(
        session_label: &str,
        result: ClassificationResult,
        decided_by: Option<String>,
        provisional: bool,
    ) -> Self {
        let mut review_flags = Vec::new();
        if result.scan_type == Some(ScanType::FlorbetapirPet) {
            warn!("{}: Florbetapir scan, double check", session_label);
            review_flags.push(ReviewFlag::FlorbetapirScan);
        }
        if provisional {
            review_flags.push(ReviewFlag::UnconfirmedMpcSuffix);
        }

        Self {
            result,
            decided_by,
            review_flags,
        }
    }

    pub fn empty() -> Self {
        Self {
            result: ClassificationResult::empty(),
            decided_by: None,
            review_flags: Vec::new(),
        }
    }

    pub fn needs_review(&self) -> bool {
        !self.result.is_complete() || !self.review_flags.is_empty()
    }
}

/// 协议编号到研究项目的映射
struct ProtocolMapping {
    numbers: &'static [&'static str],
    study: Study,
}

/// 淀粉样蛋白PET协议表，按优先级排列
const AMYLOID_PROTOCOLS: &[ProtocolMapping] = &[
    ProtocolMapping { numbers: &["844047"], study: Study::Abcd2 },
    ProtocolMapping { numbers: &["825943"], study: Study::Abc },
    ProtocolMapping { numbers: &["829602", "850160"], study: Study::Leads },
    ProtocolMapping { numbers: &["850679"], study: Study::Mpc },
];

/// Tau PET协议表，按优先级排列
const TAU_PROTOCOLS: &[ProtocolMapping] = &[
    ProtocolMapping { numbers: &["844403"], study: Study::Abcd2 },
    ProtocolMapping { numbers: &["825944", "833864"], study: Study::Abc },
    ProtocolMapping { numbers: &["829602"], study: Study::Leads },
    ProtocolMapping { numbers: &["850160", "850679"], study: Study::Mpc },
];

/// PET示踪剂规则：采集标签中出现任一标记即命中
struct TracerRule {
    name: &'static str,
    markers: &'static [&'static str],
    resolve: fn(&RuleContext<'_>) -> RuleVerdict,
}

const PET_TRACER_RULES: &[TracerRule] = &[
    TracerRule { name: "amyloid", markers: &["Amyloid", "AV45"], resolve: resolve_amyloid },
    TracerRule { name: "tau", markers: &["AV1451"], resolve: resolve_tau },
    // PI2620有时写成 "PI 2620"
    TracerRule { name: "PI2620", markers: &["2620"], resolve: resolve_pi2620 },
    TracerRule { name: "FDG", markers: &["FDG"], resolve: resolve_fdg },
];

/// 3T扫描仪所在机构规则
struct SiteRule {
    name: &'static str,
    matches: fn(&MetadataRecord) -> bool,
    resolve: fn(&RuleContext<'_>) -> RuleVerdict,
}

const SITE_RULES: &[SiteRule] = &[
    SiteRule {
        name: "HUP",
        matches: is_hup_site,
        resolve: resolve_hup,
    },
    SiteRule {
        name: "SC3T",
        matches: is_sc3t_site,
        resolve: resolve_sc3t,
    },
];

/// SC3T会话标签后缀，按优先级排列；最后一项表示命中后是否停止扫描
const SC3T_SUFFIXES: &[(&str, Study, bool)] = &[
    ("YMTL", Study::Ymtl, true),
    ("ABCD2", Study::Abcd2, true),
    ("ABC", Study::Abc, true),
    ("MPC", Study::Mpc, false),
];

/// 分类规则引擎
#[derive(Debug, Default)]
pub struct RuleEngine;

impl RuleEngine {
    /// 创建新的规则引擎
    pub fn new() -> Self {
        Self
    }

    /// 按采集顺序分类会话
    pub fn classify(&self, session_label: &str, metadata: &SessionMetadata) -> Classification {
        let mut provisional: Option<(ClassificationResult, &str)> = None;
        let mut partial: Option<(ClassificationResult, &str)> = None;

        for acquisition in &metadata.acquisitions {
            let ctx = RuleContext {
                session_label,
                labels: &metadata.labels,
                record: &acquisition.record,
            };

            match self.evaluate(&acquisition.modality, &ctx) {
                RuleVerdict::Found(result) => {
                    debug!(
                        "Acquisition {} classified session {} as {}/{}",
                        acquisition.acquisition_label,
                        session_label,
                        result.scan_type_str(),
                        result.study_str()
                    );
                    return Classification::new(
                        session_label,
                        result,
                        Some(acquisition.acquisition_label.clone()),
                        false,
                    );
                }
                RuleVerdict::Provisional(result) => {
                    warn!(
                        "{}: study {} inferred from label suffix only, double check",
                        session_label,
                        result.study_str()
                    );
                    provisional = Some((result, acquisition.acquisition_label.as_str()));
                }
                RuleVerdict::Inconclusive(result) => {
                    debug!(
                        "Acquisition {} inconclusive for session {}",
                        acquisition.acquisition_label, session_label
                    );
                    if !result.is_empty() {
                        partial = Some((result, acquisition.acquisition_label.as_str()));
                    }
                }
            }
        }

        if let Some((result, label)) = provisional {
            return Classification::new(session_label, result, Some(label.to_string()), true);
        }
        match partial {
            Some((result, label)) => {
                Classification::new(session_label, result, Some(label.to_string()), false)
            }
            None => Classification::empty(),
        }
    }

    /// 评估单个采集
    pub fn evaluate(&self, modality: &Modality, ctx: &RuleContext<'_>) -> RuleVerdict {
        match modality {
            Modality::Pt => self.evaluate_pet(ctx),
            Modality::Mr => self.evaluate_mr(ctx),
            _ => RuleVerdict::Inconclusive(ClassificationResult::empty()),
        }
    }

    fn evaluate_pet(&self, ctx: &RuleContext<'_>) -> RuleVerdict {
        let rule = PET_TRACER_RULES
            .iter()
            .find(|rule| rule.markers.iter().any(|marker| ctx.labels.contains(marker)));

        match rule {
            Some(rule) => {
                debug!("PET tracer rule {} matched labels '{}'", rule.name, ctx.labels);
                (rule.resolve)(ctx)
            }
            None => RuleVerdict::Inconclusive(ClassificationResult::empty()),
        }
    }

    fn evaluate_mr(&self, ctx: &RuleContext<'_>) -> RuleVerdict {
        let Some(strength) = ctx.record.field_strength() else {
            return RuleVerdict::Inconclusive(ClassificationResult::empty());
        };

        if strength.round() == 7.0 {
            let study = if ctx.session_label.ends_with("YMTL") {
                Study::Ymtl
            } else {
                Study::Abc
            };
            return RuleVerdict::Found(ClassificationResult::new(ScanType::SevenTesla, study));
        }

        if strength == 3.0 {
            return match SITE_RULES.iter().find(|site| (site.matches)(ctx.record)) {
                Some(site) => {
                    debug!("3T site rule {} matched", site.name);
                    (site.resolve)(ctx)
                }
                None => RuleVerdict::Inconclusive(ClassificationResult::partial(ScanType::ThreeTesla)),
            };
        }

        RuleVerdict::Inconclusive(ClassificationResult::empty())
    }
}

/// 在协议表中查找第一个匹配的研究项目
fn lookup_protocol(table: &[ProtocolMapping], record: &MetadataRecord) -> Option<Study> {
    table
        .iter()
        .find(|mapping| mapping.numbers.iter().any(|number| record.mentions_protocol(number)))
        .map(|mapping| mapping.study)
}

fn resolve_amyloid(ctx: &RuleContext<'_>) -> RuleVerdict {
    let scan_type = if ctx.session_label.contains("lorbetapir") {
        ScanType::FlorbetapirPet
    } else {
        ScanType::FbbPet
    };

    match lookup_protocol(AMYLOID_PROTOCOLS, ctx.record) {
        Some(study) => RuleVerdict::Found(ClassificationResult::new(scan_type, study)),
        None => RuleVerdict::Inconclusive(ClassificationResult::partial(scan_type)),
    }
}

fn resolve_tau(ctx: &RuleContext<'_>) -> RuleVerdict {
    match lookup_protocol(TAU_PROTOCOLS, ctx.record) {
        Some(study) => RuleVerdict::Found(ClassificationResult::new(ScanType::Av1451Pet, study)),
        None => RuleVerdict::Inconclusive(ClassificationResult::partial(ScanType::Av1451Pet)),
    }
}

fn resolve_pi2620(_ctx: &RuleContext<'_>) -> RuleVerdict {
    RuleVerdict::Found(ClassificationResult::new(ScanType::Pi2620Pet, Study::Abc))
}

fn resolve_fdg(_ctx: &RuleContext<'_>) -> RuleVerdict {
    RuleVerdict::Found(ClassificationResult::new(ScanType::FdgPet, Study::Leads))
}

fn is_hup_site(record: &MetadataRecord) -> bool {
    record.institution_name == "HUP" || record.institution_address.contains("Spruce")
}

fn is_sc3t_site(record: &MetadataRecord) -> bool {
    record.institution_name == "SC3T" || record.institution_address.contains("Curie")
}

fn resolve_hup(ctx: &RuleContext<'_>) -> RuleVerdict {
    if ctx.labels.contains("Axial") {
        RuleVerdict::Found(ClassificationResult::new(ScanType::ThreeTesla, Study::Leads))
    } else if ctx.labels.contains("LLASL") {
        RuleVerdict::Found(ClassificationResult::new(ScanType::ThreeTesla, Study::Vcid))
    } else {
        RuleVerdict::Inconclusive(ClassificationResult::partial(ScanType::ThreeTesla))
    }
}

fn resolve_sc3t(ctx: &RuleContext<'_>) -> RuleVerdict {
    let matched = SC3T_SUFFIXES
        .iter()
        .find(|(suffix, _, _)| ctx.session_label.ends_with(suffix));

    match matched {
        Some((_, study, true)) => {
            RuleVerdict::Found(ClassificationResult::new(ScanType::ThreeTesla, *study))
        }
        Some((_, study, false)) => {
            RuleVerdict::Provisional(ClassificationResult::new(ScanType::ThreeTesla, *study))
        }
        // 扫描仪已确定但标签没有研究后缀，停止扫描并交给人工
        None => RuleVerdict::Found(ClassificationResult::partial(ScanType::ThreeTesla)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scanlabel_dicom::AcquisitionMetadata;

    fn record() -> MetadataRecord {
        MetadataRecord::default()
    }

    fn acq(label: &str, modality: Modality, record: MetadataRecord) -> AcquisitionMetadata {
        AcquisitionMetadata {
            acquisition_id: format!("id-{}", label),
            acquisition_label: label.to_string(),
            modality,
            record,
        }
    }

    fn metadata(acquisitions: Vec<AcquisitionMetadata>) -> SessionMetadata {
        let labels = acquisitions
            .iter()
            .map(|a| a.acquisition_label.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        SessionMetadata { labels, acquisitions }
    }

    fn protocol(name: &str) -> MetadataRecord {
        MetadataRecord {
            protocol_name: name.to_string(),
            ..record()
        }
    }

    fn mr(strength: &str, institution: &str, address: &str) -> MetadataRecord {
        MetadataRecord {
            magnetic_field_strength: strength.to_string(),
            institution_name: institution.to_string(),
            institution_address: address.to_string(),
            ..record()
        }
    }

    #[test]
    fn test_amyloid_protocol_resolves_abcd2() {
        let engine = RuleEngine::new();
        let meta = metadata(vec![acq("AV45 Brain", Modality::Pt, protocol("844047-extra"))]);

        let classification = engine.classify("1234_PET_raw", &meta);
        assert_eq!(
            classification.result,
            ClassificationResult::new(ScanType::FbbPet, Study::Abcd2)
        );
        assert_eq!(classification.decided_by.as_deref(), Some("AV45 Brain"));
        assert!(classification.review_flags.is_empty());
    }

    #[test]
    fn test_florbetapir_overrides_scan_type_only() {
        let engine = RuleEngine::new();
        let meta = metadata(vec![acq("Amyloid", Modality::Pt, protocol("825943"))]);

        let classification = engine.classify("Florbetapir 1234", &meta);
        assert_eq!(classification.result.scan_type, Some(ScanType::FlorbetapirPet));
        assert_eq!(classification.result.study, Some(Study::Abc));
        assert_eq!(classification.review_flags, vec![ReviewFlag::FlorbetapirScan]);

        let unresolved = metadata(vec![acq("Amyloid", Modality::Pt, record())]);
        let classification = engine.classify("florbetapir", &unresolved);
        assert_eq!(classification.result.scan_type, Some(ScanType::FlorbetapirPet));
        assert_eq!(classification.result.study, None);
    }

    #[test]
    fn test_amyloid_850160_resolves_leads() {
        let engine = RuleEngine::new();
        let meta = metadata(vec![acq("AV45 Brain", Modality::Pt, protocol("850160"))]);

        assert_eq!(
            engine.classify("raw", &meta).result,
            ClassificationResult::new(ScanType::FbbPet, Study::Leads)
        );
    }

    #[test]
    fn test_florbetapir_flag_is_raised_once_per_session() {
        let engine = RuleEngine::new();
        let meta = metadata(vec![
            acq("Amyloid dynamic", Modality::Pt, protocol("unknown")),
            acq("Amyloid late", Modality::Pt, protocol("unknown")),
            acq("Amyloid static", Modality::Pt, protocol("829602")),
        ]);

        let classification = engine.classify("Florbetapir 1234", &meta);
        assert_eq!(
            classification.result,
            ClassificationResult::new(ScanType::FlorbetapirPet, Study::Leads)
        );
        assert_eq!(classification.review_flags, vec![ReviewFlag::FlorbetapirScan]);
    }

    #[test]
    fn test_amyloid_mpc_terminates() {
        let engine = RuleEngine::new();
        let meta = metadata(vec![
            acq("AV45", Modality::Pt, MetadataRecord {
                performed_procedure_step_description: "study 850679".to_string(),
                ..record()
            }),
            acq("AV45 second", Modality::Pt, protocol("844047")),
        ]);

        let classification = engine.classify("raw", &meta);
        assert_eq!(classification.result, ClassificationResult::new(ScanType::FbbPet, Study::Mpc));
        assert_eq!(classification.decided_by.as_deref(), Some("AV45"));
    }

    #[test]
    fn test_amyloid_without_protocol_continues_to_next_acquisition() {
        let engine = RuleEngine::new();
        let meta = metadata(vec![
            acq("AV45 dynamic", Modality::Pt, protocol("unknown")),
            acq("AV45 static", Modality::Pt, protocol("829602")),
        ]);

        let classification = engine.classify("raw", &meta);
        assert_eq!(classification.result, ClassificationResult::new(ScanType::FbbPet, Study::Leads));
        assert_eq!(classification.decided_by.as_deref(), Some("AV45 static"));
    }

    #[test]
    fn test_amyloid_without_any_protocol_is_incomplete() {
        let engine = RuleEngine::new();
        let meta = metadata(vec![acq("AV45", Modality::Pt, protocol("unknown"))]);

        let classification = engine.classify("raw", &meta);
        assert_eq!(classification.result, ClassificationResult::partial(ScanType::FbbPet));
        assert!(classification.needs_review());
    }

    #[test]
    fn test_tau_protocol_table() {
        let engine = RuleEngine::new();
        let cases = [
            ("844403", Study::Abcd2),
            ("825944", Study::Abc),
            ("833864", Study::Abc),
            ("829602", Study::Leads),
            ("850160", Study::Mpc),
        ];
        for (number, study) in cases {
            let meta = metadata(vec![acq("AV1451 Brain", Modality::Pt, protocol(number))]);
            let classification = engine.classify("raw", &meta);
            assert_eq!(
                classification.result,
                ClassificationResult::new(ScanType::Av1451Pet, study),
                "protocol {}",
                number
            );
        }
    }

    #[test]
    fn test_amyloid_marker_takes_priority_over_tau() {
        let engine = RuleEngine::new();
        // 标签同时出现两种示踪剂时，淀粉样蛋白优先且使用淀粉样蛋白协议表
        let meta = metadata(vec![
            acq("AV45", Modality::Pt, protocol("844403")),
            acq("AV1451", Modality::Pt, protocol("844047")),
        ]);

        let classification = engine.classify("raw", &meta);
        assert_eq!(classification.result, ClassificationResult::new(ScanType::FbbPet, Study::Abcd2));
        assert_eq!(classification.decided_by.as_deref(), Some("AV1451"));
    }

    #[test]
    fn test_pi2620_and_fdg_terminate_without_protocol() {
        let engine = RuleEngine::new();

        let meta = metadata(vec![acq("PI 2620 Brain", Modality::Pt, record())]);
        assert_eq!(
            engine.classify("raw", &meta).result,
            ClassificationResult::new(ScanType::Pi2620Pet, Study::Abc)
        );

        let meta = metadata(vec![acq("FDG Brain", Modality::Pt, record())]);
        assert_eq!(
            engine.classify("raw", &meta).result,
            ClassificationResult::new(ScanType::FdgPet, Study::Leads)
        );
    }

    #[test]
    fn test_unknown_pet_tracer_falls_through_to_mr() {
        let engine = RuleEngine::new();
        let meta = metadata(vec![
            acq("PET unknown", Modality::Pt, record()),
            acq("T1 MPRAGE", Modality::Mr, mr("7", "", "")),
        ]);

        let classification = engine.classify("raw", &meta);
        assert_eq!(
            classification.result,
            ClassificationResult::new(ScanType::SevenTesla, Study::Abc)
        );
    }

    #[test]
    fn test_seven_tesla_rounding_and_ymtl_suffix() {
        let engine = RuleEngine::new();
        let meta = metadata(vec![acq("T2 hippo", Modality::Mr, mr("6.98", "", ""))]);

        assert_eq!(
            engine.classify("1234 YMTL", &meta).result,
            ClassificationResult::new(ScanType::SevenTesla, Study::Ymtl)
        );
        assert_eq!(
            engine.classify("1234", &meta).result,
            ClassificationResult::new(ScanType::SevenTesla, Study::Abc)
        );
    }

    #[test]
    fn test_hup_site_uses_acquisition_labels() {
        let engine = RuleEngine::new();

        let leads = metadata(vec![acq("Axial T2 FLAIR", Modality::Mr, mr("3", "HUP", ""))]);
        assert_eq!(
            engine.classify("raw", &leads).result,
            ClassificationResult::new(ScanType::ThreeTesla, Study::Leads)
        );

        let vcid = metadata(vec![acq("pCASL LLASL", Modality::Mr, mr("3", "", "3400 Spruce St"))]);
        assert_eq!(
            engine.classify("raw", &vcid).result,
            ClassificationResult::new(ScanType::ThreeTesla, Study::Vcid)
        );

        let unknown = metadata(vec![acq("T1", Modality::Mr, mr("3", "HUP", ""))]);
        assert_eq!(
            engine.classify("raw", &unknown).result,
            ClassificationResult::partial(ScanType::ThreeTesla)
        );
    }

    #[test]
    fn test_sc3t_suffix_resolves_abcd2() {
        let engine = RuleEngine::new();
        let meta = metadata(vec![acq("T1", Modality::Mr, mr("3", "SC3T", ""))]);

        let classification = engine.classify("1234x20230101ABCD2", &meta);
        assert_eq!(
            classification.result,
            ClassificationResult::new(ScanType::ThreeTesla, Study::Abcd2)
        );

        let curie = metadata(vec![acq("T1", Modality::Mr, mr("3", "", "Curie Blvd"))]);
        assert_eq!(
            engine.classify("session YMTL", &curie).result,
            ClassificationResult::new(ScanType::ThreeTesla, Study::Ymtl)
        );
    }

    #[test]
    fn test_sc3t_without_suffix_stops_incomplete() {
        let engine = RuleEngine::new();
        let meta = metadata(vec![
            acq("T1", Modality::Mr, mr("3", "SC3T", "")),
            acq("FDG", Modality::Pt, record()),
        ]);

        let classification = engine.classify("raw", &meta);
        assert_eq!(classification.result, ClassificationResult::partial(ScanType::ThreeTesla));
        assert_eq!(classification.decided_by.as_deref(), Some("T1"));
    }

    #[test]
    fn test_sc3t_mpc_suffix_is_provisional() {
        let engine = RuleEngine::new();

        let only_mpc = metadata(vec![acq("T1", Modality::Mr, mr("3", "SC3T", ""))]);
        let classification = engine.classify("1234 MPC", &only_mpc);
        assert_eq!(
            classification.result,
            ClassificationResult::new(ScanType::ThreeTesla, Study::Mpc)
        );
        assert_eq!(classification.review_flags, vec![ReviewFlag::UnconfirmedMpcSuffix]);
        assert!(classification.needs_review());

        // 后续采集的确定结果优先
        let later = metadata(vec![
            acq("T1", Modality::Mr, mr("3", "SC3T", "")),
            acq("AV1451", Modality::Pt, protocol("850160")),
        ]);
        let classification = engine.classify("1234 MPC", &later);
        assert_eq!(
            classification.result,
            ClassificationResult::new(ScanType::Av1451Pet, Study::Mpc)
        );
        assert!(classification.review_flags.is_empty());
    }

    #[test]
    fn test_other_field_strengths_and_sites_are_inconclusive() {
        let engine = RuleEngine::new();
        let meta = metadata(vec![
            acq("T1 1.5T", Modality::Mr, mr("1.5", "HUP", "")),
            acq("T1 no strength", Modality::Mr, mr("", "HUP", "")),
        ]);
        assert!(engine.classify("raw", &meta).result.is_empty());

        let elsewhere = metadata(vec![acq("T1", Modality::Mr, mr("3", "Elsewhere", ""))]);
        assert_eq!(
            engine.classify("raw", &elsewhere).result,
            ClassificationResult::partial(ScanType::ThreeTesla)
        );
    }

    #[test]
    fn test_non_pet_non_mr_modalities_yield_empty_result() {
        let engine = RuleEngine::new();
        let meta = metadata(vec![
            acq("US", Modality::Other("US".to_string()), protocol("844047")),
            acq("NM FDG", Modality::Other("NM".to_string()), record()),
        ]);

        let classification = engine.classify("raw", &meta);
        assert!(classification.result.is_empty());
        assert_eq!(classification.decided_by, None);
        assert_eq!(engine.classify("raw", &metadata(vec![])), Classification::empty());
    }

    #[test]
    fn test_first_confident_acquisition_wins() {
        let engine = RuleEngine::new();
        let meta = metadata(vec![
            acq("T1", Modality::Mr, mr("3", "Elsewhere", "")),
            acq("Axial FLAIR", Modality::Mr, mr("3", "HUP", "")),
            acq("T2", Modality::Mr, mr("7", "", "")),
        ]);

        let classification = engine.classify("raw", &meta);
        assert_eq!(
            classification.result,
            ClassificationResult::new(ScanType::ThreeTesla, Study::Leads)
        );
        assert_eq!(classification.decided_by.as_deref(), Some("Axial FLAIR"));
    }
}
