//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod evaluation_items;
mod evaluation_policies;
mod evaluation_systems;
mod owners;

use crate::config::AppConfig;
use crate::errors::{EvalSysError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, SqlErr};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| EvalSysError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 创建内存 SQLite 存储（单连接，测试与本地调试使用）
    pub async fn in_memory() -> Result<Self> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| EvalSysError::database_config(format!("SQLite URL 解析失败: {e}")))?;

        // 内存库随连接销毁，连接池必须固定为一个常驻连接
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(opt)
            .await
            .map_err(|e| EvalSysError::database_connection(format!("SQLite 连接失败: {e}")))?;

        let db = SqlxSqliteConnector::from_sqlx_sqlite_pool(pool);

        Migrator::up(&db, None)
            .await
            .map_err(|e| EvalSysError::database_operation(format!("数据库迁移失败: {e}")))?;

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| EvalSysError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| EvalSysError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| EvalSysError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(EvalSysError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

/// 是否为唯一约束冲突
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

// Storage trait 实现
use crate::models::{
    evaluation_items::{
        entities::EvaluationItem,
        plan::{ItemSyncCounts, ItemSyncPlan},
    },
    evaluation_policies::entities::{EvaluationPolicy, PolicyRule},
    evaluation_systems::entities::{EvaluationGroup, EvaluationSystem},
    owners::entities::{Course, Subject},
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 评价政策模块
    async fn create_evaluation_policy(
        &self,
        subject_id: i64,
        policy_rules: Vec<PolicyRule>,
    ) -> Result<EvaluationPolicy> {
        self.create_evaluation_policy_impl(subject_id, policy_rules)
            .await
    }

    async fn get_evaluation_policy_by_id(
        &self,
        policy_id: i64,
    ) -> Result<Option<EvaluationPolicy>> {
        self.get_evaluation_policy_by_id_impl(policy_id).await
    }

    async fn get_evaluation_policy_by_subject(
        &self,
        subject_id: i64,
    ) -> Result<Option<EvaluationPolicy>> {
        self.get_evaluation_policy_by_subject_impl(subject_id).await
    }

    async fn update_evaluation_policy(
        &self,
        policy_id: i64,
        policy_rules: Vec<PolicyRule>,
    ) -> Result<Option<EvaluationPolicy>> {
        self.update_evaluation_policy_impl(policy_id, policy_rules)
            .await
    }

    async fn delete_evaluation_policy(&self, policy_id: i64) -> Result<bool> {
        self.delete_evaluation_policy_impl(policy_id).await
    }

    // 评价体系模块
    async fn create_evaluation_system(
        &self,
        course_id: i64,
        evaluation_groups: Vec<EvaluationGroup>,
    ) -> Result<EvaluationSystem> {
        self.create_evaluation_system_impl(course_id, evaluation_groups)
            .await
    }

    async fn get_evaluation_system_by_id(
        &self,
        system_id: i64,
    ) -> Result<Option<EvaluationSystem>> {
        self.get_evaluation_system_by_id_impl(system_id).await
    }

    async fn get_evaluation_system_by_course(
        &self,
        course_id: i64,
    ) -> Result<Option<EvaluationSystem>> {
        self.get_evaluation_system_by_course_impl(course_id).await
    }

    async fn update_evaluation_system(
        &self,
        system_id: i64,
        evaluation_groups: Vec<EvaluationGroup>,
    ) -> Result<Option<EvaluationSystem>> {
        self.update_evaluation_system_impl(system_id, evaluation_groups)
            .await
    }

    async fn delete_evaluation_system(&self, system_id: i64) -> Result<bool> {
        self.delete_evaluation_system_impl(system_id).await
    }

    // 评价项模块
    async fn list_evaluation_items_by_group(&self, group_id: i64) -> Result<Vec<EvaluationItem>> {
        self.list_evaluation_items_by_group_impl(group_id).await
    }

    async fn apply_evaluation_item_plan(
        &self,
        group_id: i64,
        plan: &ItemSyncPlan,
    ) -> Result<ItemSyncCounts> {
        self.apply_evaluation_item_plan_impl(group_id, plan).await
    }

    // 归属记录模块
    async fn upsert_subject(&self, subject_id: i64, name: &str) -> Result<Subject> {
        self.upsert_subject_impl(subject_id, name).await
    }

    async fn get_subject_by_id(&self, subject_id: i64) -> Result<Option<Subject>> {
        self.get_subject_by_id_impl(subject_id).await
    }

    async fn list_subjects(&self) -> Result<Vec<Subject>> {
        self.list_subjects_impl().await
    }

    async fn delete_subject(&self, subject_id: i64) -> Result<bool> {
        self.delete_subject_impl(subject_id).await
    }

    async fn set_subject_policy_ref(
        &self,
        subject_id: i64,
        policy_id: Option<i64>,
    ) -> Result<bool> {
        self.set_subject_policy_ref_impl(subject_id, policy_id)
            .await
    }

    async fn upsert_course(&self, course_id: i64, subject_id: i64, name: &str) -> Result<Course> {
        self.upsert_course_impl(course_id, subject_id, name).await
    }

    async fn get_course_with_subject(
        &self,
        course_id: i64,
    ) -> Result<Option<(Course, Option<Subject>)>> {
        self.get_course_with_subject_impl(course_id).await
    }

    async fn list_courses(&self) -> Result<Vec<Course>> {
        self.list_courses_impl().await
    }

    async fn delete_course(&self, course_id: i64) -> Result<bool> {
        self.delete_course_impl(course_id).await
    }

    async fn set_course_system_ref(&self, course_id: i64, system_id: Option<i64>) -> Result<bool> {
        self.set_course_system_ref_impl(course_id, system_id).await
    }
}
