//! 科目与开课实例存储操作

use super::SeaOrmStorage;
use crate::entity::courses::Column as CourseColumn;
use crate::entity::prelude::{CourseActiveModel, Courses, SubjectActiveModel, Subjects};
use crate::entity::subjects::Column as SubjectColumn;
use crate::errors::{EvalSysError, Result};
use crate::models::owners::entities::{Course, Subject};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 登记科目，已存在时只更新名称
    pub async fn upsert_subject_impl(&self, subject_id: i64, name: &str) -> Result<Subject> {
        let now = chrono::Utc::now().timestamp();
        let existing = Subjects::find_by_id(subject_id)
            .one(&self.db)
            .await
            .map_err(|e| EvalSysError::database_operation(format!("查询科目失败: {e}")))?;

        let result = match existing {
            Some(model) => {
                let mut active: SubjectActiveModel = model.into();
                active.name = Set(name.to_string());
                active.updated_at = Set(now);
                active.update(&self.db).await
            }
            None => {
                SubjectActiveModel {
                    id: Set(subject_id),
                    name: Set(name.to_string()),
                    evaluation_policy_id: Set(None),
                    created_at: Set(now),
                    updated_at: Set(now),
                }
                .insert(&self.db)
                .await
            }
        }
        .map_err(|e| EvalSysError::database_operation(format!("登记科目失败: {e}")))?;

        Ok(result.into_subject())
    }

    pub async fn get_subject_by_id_impl(&self, subject_id: i64) -> Result<Option<Subject>> {
        let result = Subjects::find_by_id(subject_id)
            .one(&self.db)
            .await
            .map_err(|e| EvalSysError::database_operation(format!("查询科目失败: {e}")))?;

        Ok(result.map(|m| m.into_subject()))
    }

    pub async fn list_subjects_impl(&self) -> Result<Vec<Subject>> {
        let subjects = Subjects::find()
            .order_by_asc(SubjectColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| EvalSysError::database_operation(format!("查询科目列表失败: {e}")))?;

        Ok(subjects.into_iter().map(|m| m.into_subject()).collect())
    }

    pub async fn delete_subject_impl(&self, subject_id: i64) -> Result<bool> {
        let result = Subjects::delete_by_id(subject_id)
            .exec(&self.db)
            .await
            .map_err(|e| EvalSysError::database_operation(format!("删除科目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 写入科目的评价政策反向引用
    pub async fn set_subject_policy_ref_impl(
        &self,
        subject_id: i64,
        policy_id: Option<i64>,
    ) -> Result<bool> {
        let Some(model) = Subjects::find_by_id(subject_id)
            .one(&self.db)
            .await
            .map_err(|e| EvalSysError::database_operation(format!("查询科目失败: {e}")))?
        else {
            return Ok(false);
        };

        let mut active: SubjectActiveModel = model.into();
        active.evaluation_policy_id = Set(policy_id);
        active.updated_at = Set(chrono::Utc::now().timestamp());
        active.update(&self.db).await.map_err(|e| {
            EvalSysError::database_operation(format!("更新科目政策引用失败: {e}"))
        })?;

        Ok(true)
    }

    /// 登记开课实例，已存在时更新科目与名称
    pub async fn upsert_course_impl(
        &self,
        course_id: i64,
        subject_id: i64,
        name: &str,
    ) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();
        let existing = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| EvalSysError::database_operation(format!("查询开课实例失败: {e}")))?;

        let result = match existing {
            Some(model) => {
                let mut active: CourseActiveModel = model.into();
                active.subject_id = Set(subject_id);
                active.name = Set(name.to_string());
                active.updated_at = Set(now);
                active.update(&self.db).await
            }
            None => {
                CourseActiveModel {
                    id: Set(course_id),
                    subject_id: Set(subject_id),
                    name: Set(name.to_string()),
                    evaluation_system_id: Set(None),
                    created_at: Set(now),
                    updated_at: Set(now),
                }
                .insert(&self.db)
                .await
            }
        }
        .map_err(|e| EvalSysError::database_operation(format!("登记开课实例失败: {e}")))?;

        Ok(result.into_course())
    }

    /// 获取开课实例及其所属科目
    pub async fn get_course_with_subject_impl(
        &self,
        course_id: i64,
    ) -> Result<Option<(Course, Option<Subject>)>> {
        let result = Courses::find_by_id(course_id)
            .find_also_related(Subjects)
            .one(&self.db)
            .await
            .map_err(|e| EvalSysError::database_operation(format!("查询开课实例失败: {e}")))?;

        Ok(result.map(|(course, subject)| {
            (course.into_course(), subject.map(|s| s.into_subject()))
        }))
    }

    pub async fn list_courses_impl(&self) -> Result<Vec<Course>> {
        let courses = Courses::find()
            .order_by_asc(CourseColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                EvalSysError::database_operation(format!("查询开课实例列表失败: {e}"))
            })?;

        Ok(courses.into_iter().map(|m| m.into_course()).collect())
    }

    pub async fn delete_course_impl(&self, course_id: i64) -> Result<bool> {
        let result = Courses::delete_by_id(course_id)
            .exec(&self.db)
            .await
            .map_err(|e| EvalSysError::database_operation(format!("删除开课实例失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 写入开课实例的评价体系反向引用
    pub async fn set_course_system_ref_impl(
        &self,
        course_id: i64,
        system_id: Option<i64>,
    ) -> Result<bool> {
        let Some(model) = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| EvalSysError::database_operation(format!("查询开课实例失败: {e}")))?
        else {
            return Ok(false);
        };

        let mut active: CourseActiveModel = model.into();
        active.evaluation_system_id = Set(system_id);
        active.updated_at = Set(chrono::Utc::now().timestamp());
        active.update(&self.db).await.map_err(|e| {
            EvalSysError::database_operation(format!("更新开课实例体系引用失败: {e}"))
        })?;

        Ok(true)
    }
}
