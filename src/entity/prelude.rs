//! 预导入模块，方便使用

pub use super::courses::{ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel};
pub use super::evaluation_items::{
    ActiveModel as EvaluationItemActiveModel, Entity as EvaluationItems,
    Model as EvaluationItemModel,
};
pub use super::evaluation_policies::{
    ActiveModel as EvaluationPolicyActiveModel, Entity as EvaluationPolicies,
    Model as EvaluationPolicyModel,
};
pub use super::evaluation_systems::{
    ActiveModel as EvaluationSystemActiveModel, Entity as EvaluationSystems,
    Model as EvaluationSystemModel,
};
pub use super::subjects::{
    ActiveModel as SubjectActiveModel, Entity as Subjects, Model as SubjectModel,
};
