//! 反向引用巡检
//!
//! 只修正科目与开课实例上的引用字段，从不删除政策或体系。

use tracing::{info, warn};

use crate::errors::Result;
use crate::models::owners::responses::BackReferenceRepairReport;
use crate::storage::Storage;

/// 清除指向不存在记录的引用，并为已有配置却缺少引用的记录补上引用
pub async fn repair_back_references(storage: &dyn Storage) -> Result<BackReferenceRepairReport> {
    let mut report = BackReferenceRepairReport::default();

    for subject in storage.list_subjects().await? {
        let policy_id = storage
            .get_evaluation_policy_by_subject(subject.id)
            .await?
            .map(|policy| policy.id);

        if subject.evaluation_policy_id == policy_id {
            continue;
        }
        warn!(
            "Subject {} references policy {:?}, expected {:?}",
            subject.id, subject.evaluation_policy_id, policy_id
        );
        storage.set_subject_policy_ref(subject.id, policy_id).await?;
        match policy_id {
            Some(_) => report.subjects_linked += 1,
            None => report.subjects_cleared += 1,
        }
    }

    for course in storage.list_courses().await? {
        let system_id = storage
            .get_evaluation_system_by_course(course.id)
            .await?
            .map(|system| system.id);

        if course.evaluation_system_id == system_id {
            continue;
        }
        warn!(
            "Course {} references system {:?}, expected {:?}",
            course.id, course.evaluation_system_id, system_id
        );
        storage.set_course_system_ref(course.id, system_id).await?;
        match system_id {
            Some(_) => report.courses_linked += 1,
            None => report.courses_cleared += 1,
        }
    }

    if report.total() > 0 {
        info!("Back-reference sweep repaired {} records", report.total());
    }
    Ok(report)
}
