use serde::Serialize;

/// 反向引用巡检结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BackReferenceRepairReport {
    // 补齐的科目 → 政策引用
    pub subjects_linked: u64,
    // 清除的悬空科目引用
    pub subjects_cleared: u64,
    // 补齐的课程 → 体系引用
    pub courses_linked: u64,
    // 清除的悬空课程引用
    pub courses_cleared: u64,
}

impl BackReferenceRepairReport {
    pub fn total(&self) -> u64 {
        self.subjects_linked + self.subjects_cleared + self.courses_linked + self.courses_cleared
    }
}
