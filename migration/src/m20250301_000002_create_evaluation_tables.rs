use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ==================== 评价政策表 ====================
        manager
            .create_table(
                Table::create()
                    .table(EvaluationPolicies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EvaluationPolicies::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EvaluationPolicies::SubjectId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    // 规则列表以 JSON 文本存储
                    .col(
                        ColumnDef::new(EvaluationPolicies::PolicyRules)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EvaluationPolicies::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EvaluationPolicies::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 评价体系表 ====================
        manager
            .create_table(
                Table::create()
                    .table(EvaluationSystems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EvaluationSystems::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EvaluationSystems::CourseId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(EvaluationSystems::EvaluationGroups)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EvaluationSystems::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EvaluationSystems::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 评价项表 ====================
        manager
            .create_table(
                Table::create()
                    .table(EvaluationItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EvaluationItems::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EvaluationItems::GroupId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EvaluationItems::EvaluationSystemId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EvaluationItems::EvaluationTypeId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(EvaluationItems::Name).string().not_null())
                    .col(ColumnDef::new(EvaluationItems::Weight).double().not_null())
                    .col(ColumnDef::new(EvaluationItems::MinGrade).double().null())
                    .col(
                        ColumnDef::new(EvaluationItems::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EvaluationItems::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 同一分组内 (name, evaluation_type_id) 唯一，作为批量插入的兜底约束
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uk_evaluation_items_group_name_type")
                    .table(EvaluationItems::Table)
                    .col(EvaluationItems::GroupId)
                    .col(EvaluationItems::Name)
                    .col(EvaluationItems::EvaluationTypeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_evaluation_items_system_id")
                    .table(EvaluationItems::Table)
                    .col(EvaluationItems::EvaluationSystemId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EvaluationItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EvaluationSystems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EvaluationPolicies::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum EvaluationPolicies {
    #[sea_orm(iden = "evaluation_policies")]
    Table,
    Id,
    SubjectId,
    PolicyRules,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum EvaluationSystems {
    #[sea_orm(iden = "evaluation_systems")]
    Table,
    Id,
    CourseId,
    EvaluationGroups,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum EvaluationItems {
    #[sea_orm(iden = "evaluation_items")]
    Table,
    Id,
    GroupId,
    EvaluationSystemId,
    EvaluationTypeId,
    Name,
    Weight,
    MinGrade,
    CreatedAt,
    UpdatedAt,
}
