use std::collections::HashSet;

use crate::errors::{EvalSysError, Result};
use crate::models::evaluation_items::entities::DesiredEvaluationItem;
use crate::models::evaluation_policies::entities::{EvaluationPolicy, PolicyRule};
use crate::models::evaluation_systems::entities::EvaluationGroup;

/// 评价项名称最大字符数
pub const MAX_ITEM_NAME_CHARS: usize = 255;

/// 权重合计允许的浮点误差
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

pub fn validate_identifier(field: &str, value: i64) -> Result<()> {
    // ID 必须为正整数
    if value <= 0 {
        return Err(EvalSysError::validation(format!(
            "{field} must be a positive integer, got {value}"
        )));
    }
    Ok(())
}

/// 校验政策规则：百分比位于 [0, 100] 且 min <= max
pub fn validate_policy_rules(rules: &[PolicyRule]) -> Result<()> {
    for (index, rule) in rules.iter().enumerate() {
        validate_identifier(
            &format!("policy_rules[{index}].evaluation_type_id"),
            rule.evaluation_type_id,
        )?;
        for (field, value) in [
            ("min_percentage", rule.min_percentage),
            ("max_percentage", rule.max_percentage),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(EvalSysError::validation(format!(
                    "policy_rules[{index}].{field} must be between 0 and 100"
                )));
            }
        }
        if rule.min_percentage > rule.max_percentage {
            return Err(EvalSysError::validation(format!(
                "policy_rules[{index}]: min_percentage must not exceed max_percentage"
            )));
        }
    }
    Ok(())
}

/// 校验体系分组：至少一组，每组权重位于 (0, 100]
pub fn validate_evaluation_groups(groups: &[EvaluationGroup]) -> Result<()> {
    if groups.is_empty() {
        return Err(EvalSysError::validation(
            "evaluation_groups must contain at least one group",
        ));
    }
    for (index, group) in groups.iter().enumerate() {
        validate_identifier(
            &format!("evaluation_groups[{index}].evaluation_type_id"),
            group.evaluation_type_id,
        )?;
        if !is_positive_percentage(group.total_weight) {
            return Err(EvalSysError::validation(format!(
                "evaluation_groups[{index}].total_weight must be in (0, 100]"
            )));
        }
    }
    Ok(())
}

/// 校验同步请求中的期望评价项
///
/// 同一请求内重复出现的 id 视为非法；名称与类别的重复由同步流程判定。
pub fn validate_desired_items(items: &[DesiredEvaluationItem], max_items: usize) -> Result<()> {
    if items.len() > max_items {
        return Err(EvalSysError::validation(format!(
            "items must not contain more than {max_items} entries"
        )));
    }

    let mut seen_ids = HashSet::new();
    for (index, item) in items.iter().enumerate() {
        if let Some(id) = item.id {
            validate_identifier(&format!("items[{index}].id"), id)?;
            if !seen_ids.insert(id) {
                return Err(EvalSysError::validation(format!(
                    "items[{index}].id {id} appears more than once"
                )));
            }
        }
        validate_identifier(
            &format!("items[{index}].evaluation_system_id"),
            item.evaluation_system_id,
        )?;
        validate_identifier(
            &format!("items[{index}].evaluation_type_id"),
            item.evaluation_type_id,
        )?;

        let name_chars = item.name.chars().count();
        if item.name.trim().is_empty() || name_chars > MAX_ITEM_NAME_CHARS {
            return Err(EvalSysError::validation(format!(
                "items[{index}].name must be non-empty and at most {MAX_ITEM_NAME_CHARS} characters"
            )));
        }
        if !is_positive_percentage(item.weight) {
            return Err(EvalSysError::validation(format!(
                "items[{index}].weight must be in (0, 100]"
            )));
        }
        if let Some(min_grade) = item.min_grade
            && !(0.0..=10.0).contains(&min_grade)
        {
            return Err(EvalSysError::validation(format!(
                "items[{index}].min_grade must be between 0 and 10"
            )));
        }
    }
    Ok(())
}

/// 按科目政策检查课程的权重分组
///
/// 每个分组的类别都必须有对应规则且权重落在 [min, max]，最低比例大于 0 的类别不可缺席，
/// 权重合计必须为 100。
/// 科目没有政策时只检查合计。
pub fn check_groups_against_policy(
    groups: &[EvaluationGroup],
    policy: Option<&EvaluationPolicy>,
) -> Result<()> {
    if let Some(policy) = policy {
        for group in groups {
            let Some(rule) = policy.rule_for(group.evaluation_type_id) else {
                return Err(EvalSysError::policy_violation(format!(
                    "evaluation type {} is not allowed by the subject policy",
                    group.evaluation_type_id
                )));
            };
            if !rule.admits(group.total_weight) {
                return Err(EvalSysError::policy_violation(format!(
                    "weight {} of evaluation type {} is outside [{}, {}]",
                    group.total_weight,
                    group.evaluation_type_id,
                    rule.min_percentage,
                    rule.max_percentage
                )));
            }
        }

        // 课程未列出的类别权重视为 0，最低比例大于 0 的规则因此不满足
        if let Some(rule) = policy.policy_rules.iter().find(|rule| {
            rule.min_percentage > 0.0
                && !groups
                    .iter()
                    .any(|g| g.evaluation_type_id == rule.evaluation_type_id)
        }) {
            return Err(EvalSysError::policy_violation(format!(
                "evaluation type {} requires at least {} but is missing",
                rule.evaluation_type_id, rule.min_percentage
            )));
        }
    }

    let total: f64 = groups.iter().map(|g| g.total_weight).sum();
    if (total - 100.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(EvalSysError::policy_violation(format!(
            "evaluation group weights must sum to 100, got {total}"
        )));
    }
    Ok(())
}

fn is_positive_percentage(value: f64) -> bool {
    value > 0.0 && value <= 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(type_id: i64, min: f64, max: f64) -> PolicyRule {
        PolicyRule {
            evaluation_type_id: type_id,
            min_percentage: min,
            max_percentage: max,
        }
    }

    fn group(type_id: i64, weight: f64) -> EvaluationGroup {
        EvaluationGroup {
            evaluation_type_id: type_id,
            total_weight: weight,
        }
    }

    fn item(id: Option<i64>, name: &str, weight: f64) -> DesiredEvaluationItem {
        DesiredEvaluationItem {
            id,
            evaluation_system_id: 1,
            evaluation_type_id: 1,
            name: name.to_string(),
            weight,
            min_grade: None,
        }
    }

    fn policy(rules: Vec<PolicyRule>) -> EvaluationPolicy {
        EvaluationPolicy {
            id: 1,
            subject_id: 1,
            policy_rules: rules,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("subject_id", 1).is_ok());
        assert!(validate_identifier("subject_id", 0).is_err());
        assert!(validate_identifier("subject_id", -7).is_err());
    }

    #[test]
    fn test_policy_rules_bounds() {
        assert!(validate_policy_rules(&[rule(1, 0.0, 100.0), rule(2, 20.0, 20.0)]).is_ok());
        assert!(validate_policy_rules(&[]).is_ok());
        assert!(validate_policy_rules(&[rule(1, -1.0, 50.0)]).is_err());
        assert!(validate_policy_rules(&[rule(1, 10.0, 100.5)]).is_err());
        assert!(validate_policy_rules(&[rule(1, f64::NAN, 50.0)]).is_err());
    }

    #[test]
    fn test_policy_rules_min_above_max() {
        let err = validate_policy_rules(&[rule(1, 60.0, 40.0)]).unwrap_err();
        assert_eq!(err.code(), "E004");
        assert!(err.message().contains("policy_rules[0]"));
    }

    #[test]
    fn test_evaluation_groups() {
        assert!(validate_evaluation_groups(&[group(1, 60.0), group(2, 40.0)]).is_ok());
        assert!(validate_evaluation_groups(&[group(1, 100.0)]).is_ok());
        assert!(validate_evaluation_groups(&[]).is_err());
        assert!(validate_evaluation_groups(&[group(1, 0.0)]).is_err());
        assert!(validate_evaluation_groups(&[group(1, 100.1)]).is_err());
        assert!(validate_evaluation_groups(&[group(0, 50.0)]).is_err());
    }

    #[test]
    fn test_desired_items_fields() {
        assert!(validate_desired_items(&[item(None, "Midterm", 40.0)], 10).is_ok());
        assert!(validate_desired_items(&[item(None, "   ", 40.0)], 10).is_err());
        assert!(validate_desired_items(&[item(None, "Midterm", 0.0)], 10).is_err());
        assert!(validate_desired_items(&[item(Some(0), "Midterm", 10.0)], 10).is_err());

        let long_name = "x".repeat(MAX_ITEM_NAME_CHARS + 1);
        assert!(validate_desired_items(&[item(None, &long_name, 10.0)], 10).is_err());

        let mut graded = item(None, "Final", 60.0);
        graded.min_grade = Some(10.0);
        assert!(validate_desired_items(std::slice::from_ref(&graded), 10).is_ok());
        graded.min_grade = Some(10.5);
        assert!(validate_desired_items(&[graded], 10).is_err());
    }

    #[test]
    fn test_desired_items_duplicate_id() {
        let items = [item(Some(3), "Quiz1", 30.0), item(Some(3), "Quiz2", 70.0)];
        let err = validate_desired_items(&items, 10).unwrap_err();
        assert!(err.message().contains("more than once"));
    }

    #[test]
    fn test_desired_items_limit() {
        let items = vec![item(None, "A", 10.0), item(None, "B", 10.0)];
        assert!(validate_desired_items(&items, 2).is_ok());
        assert!(validate_desired_items(&items, 1).is_err());
    }

    #[test]
    fn test_groups_against_policy() {
        let policy = policy(vec![rule(1, 50.0, 70.0), rule(2, 30.0, 50.0)]);
        let fitting = [group(1, 60.0), group(2, 40.0)];
        assert!(check_groups_against_policy(&fitting, Some(&policy)).is_ok());

        // 超出区间
        let err = check_groups_against_policy(&[group(1, 80.0), group(2, 20.0)], Some(&policy))
            .unwrap_err();
        assert_eq!(err.code(), "E012");

        // 未定义类别
        assert!(check_groups_against_policy(&[group(3, 100.0)], Some(&policy)).is_err());

        // 合计不为 100
        let short = [group(1, 50.0), group(2, 30.0)];
        assert!(check_groups_against_policy(&short, Some(&policy)).is_err());
    }

    #[test]
    fn test_groups_missing_required_category() {
        let required = policy(vec![rule(1, 0.0, 100.0), rule(2, 20.0, 50.0)]);

        let err = check_groups_against_policy(&[group(1, 100.0)], Some(&required)).unwrap_err();
        assert_eq!(err.code(), "E012");
        assert!(err.message().contains("evaluation type 2"));

        // 最低比例为 0 的类别可以省略
        let optional = policy(vec![rule(1, 0.0, 100.0), rule(2, 0.0, 50.0)]);
        assert!(check_groups_against_policy(&[group(1, 100.0)], Some(&optional)).is_ok());
    }

    #[test]
    fn test_groups_without_policy() {
        assert!(check_groups_against_policy(&[group(7, 33.3), group(8, 66.7)], None).is_ok());
        assert!(check_groups_against_policy(&[group(7, 90.0)], None).is_err());
    }
}
