use std::sync::Arc;

use crate::models::{
    evaluation_items::{
        entities::EvaluationItem,
        plan::{ItemSyncCounts, ItemSyncPlan},
    },
    evaluation_policies::entities::{EvaluationPolicy, PolicyRule},
    evaluation_systems::entities::{EvaluationGroup, EvaluationSystem},
    owners::entities::{Course, Subject},
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 评价政策方法
    // 创建政策，科目已有政策时返回 PolicyExists
    async fn create_evaluation_policy(
        &self,
        subject_id: i64,
        policy_rules: Vec<PolicyRule>,
    ) -> Result<EvaluationPolicy>;
    // 通过ID获取政策
    async fn get_evaluation_policy_by_id(&self, policy_id: i64)
    -> Result<Option<EvaluationPolicy>>;
    // 通过科目ID获取政策
    async fn get_evaluation_policy_by_subject(
        &self,
        subject_id: i64,
    ) -> Result<Option<EvaluationPolicy>>;
    // 整体替换规则列表
    async fn update_evaluation_policy(
        &self,
        policy_id: i64,
        policy_rules: Vec<PolicyRule>,
    ) -> Result<Option<EvaluationPolicy>>;
    // 删除政策
    async fn delete_evaluation_policy(&self, policy_id: i64) -> Result<bool>;

    /// 评价体系方法
    // 创建体系，课程已有体系时返回 SystemExists
    async fn create_evaluation_system(
        &self,
        course_id: i64,
        evaluation_groups: Vec<EvaluationGroup>,
    ) -> Result<EvaluationSystem>;
    // 通过ID获取体系
    async fn get_evaluation_system_by_id(&self, system_id: i64)
    -> Result<Option<EvaluationSystem>>;
    // 通过课程ID获取体系
    async fn get_evaluation_system_by_course(
        &self,
        course_id: i64,
    ) -> Result<Option<EvaluationSystem>>;
    // 整体替换权重分组
    async fn update_evaluation_system(
        &self,
        system_id: i64,
        evaluation_groups: Vec<EvaluationGroup>,
    ) -> Result<Option<EvaluationSystem>>;
    // 删除体系
    async fn delete_evaluation_system(&self, system_id: i64) -> Result<bool>;

    /// 评价项方法
    // 列出分组内全部评价项
    async fn list_evaluation_items_by_group(&self, group_id: i64) -> Result<Vec<EvaluationItem>>;
    // 按 删除 → 更新 → 新建 顺序执行同步计划，新建阶段容忍逐行唯一冲突
    async fn apply_evaluation_item_plan(
        &self,
        group_id: i64,
        plan: &ItemSyncPlan,
    ) -> Result<ItemSyncCounts>;

    /// 归属记录方法
    // 登记或更新科目
    async fn upsert_subject(&self, subject_id: i64, name: &str) -> Result<Subject>;
    // 通过ID获取科目
    async fn get_subject_by_id(&self, subject_id: i64) -> Result<Option<Subject>>;
    // 列出全部科目
    async fn list_subjects(&self) -> Result<Vec<Subject>>;
    // 删除科目
    async fn delete_subject(&self, subject_id: i64) -> Result<bool>;
    // 写入科目 → 政策反向引用，科目不存在时返回 false
    async fn set_subject_policy_ref(&self, subject_id: i64, policy_id: Option<i64>)
    -> Result<bool>;
    // 登记或更新开课实例
    async fn upsert_course(&self, course_id: i64, subject_id: i64, name: &str) -> Result<Course>;
    // 通过ID获取开课实例及其科目
    async fn get_course_with_subject(
        &self,
        course_id: i64,
    ) -> Result<Option<(Course, Option<Subject>)>>;
    // 列出全部开课实例
    async fn list_courses(&self) -> Result<Vec<Course>>;
    // 删除开课实例
    async fn delete_course(&self, course_id: i64) -> Result<bool>;
    // 写入课程 → 体系反向引用，课程不存在时返回 false
    async fn set_course_system_ref(&self, course_id: i64, system_id: Option<i64>)
    -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
