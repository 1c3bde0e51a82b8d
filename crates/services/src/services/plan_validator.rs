//! Validation of candidate UI plans against the component whitelist.

use std::str::FromStr;

use thiserror::Error;

use super::ui_plan::{ComponentKind, UiPlan};

/// Reason a candidate plan was rejected. Variants mirror the ordered
/// checks in [`validate`]; the first failed check wins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanValidationError {
    #[error("plan is missing a layout")]
    MissingLayout,
    #[error("plan is missing a tone")]
    MissingTone,
    #[error("plan has no components")]
    EmptyComponents,
    #[error("component \"{0}\" is not in the allowed set")]
    DisallowedComponent(String),
    #[error("plan content is missing a title")]
    MissingTitle,
}

/// Check a candidate plan. Side-effect-free; a rejection short-circuits
/// the pipeline so a bad plan is never partially applied.
pub fn validate(plan: &UiPlan) -> Result<(), PlanValidationError> {
    if plan.layout.is_none() {
        return Err(PlanValidationError::MissingLayout);
    }
    if plan.tone.is_none() {
        return Err(PlanValidationError::MissingTone);
    }
    if plan.components.is_empty() {
        return Err(PlanValidationError::EmptyComponents);
    }
    for name in &plan.components {
        if ComponentKind::from_str(name).is_err() {
            return Err(PlanValidationError::DisallowedComponent(name.clone()));
        }
    }
    if plan.content.title.trim().is_empty() {
        return Err(PlanValidationError::MissingTitle);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ui_plan::{Layout, Tone};

    #[test]
    fn test_base_plan_is_valid() {
        assert_eq!(validate(&UiPlan::base()), Ok(()));
    }

    #[test]
    fn test_missing_layout_reported_first() {
        let mut plan = UiPlan::base();
        plan.layout = None;
        plan.components = vec!["CustomWidget".to_string()];
        assert_eq!(validate(&plan), Err(PlanValidationError::MissingLayout));
    }

    #[test]
    fn test_missing_tone() {
        let mut plan = UiPlan::base();
        plan.tone = None;
        assert_eq!(validate(&plan), Err(PlanValidationError::MissingTone));
    }

    #[test]
    fn test_empty_components() {
        let mut plan = UiPlan::base();
        plan.components.clear();
        assert_eq!(validate(&plan), Err(PlanValidationError::EmptyComponents));
    }

    #[test]
    fn test_first_disallowed_component_is_named() {
        let mut plan = UiPlan::base();
        plan.components = vec![
            "AppShell".to_string(),
            "CustomWidget".to_string(),
            "AlsoBad".to_string(),
        ];
        assert_eq!(
            validate(&plan),
            Err(PlanValidationError::DisallowedComponent(
                "CustomWidget".to_string()
            ))
        );
    }

    #[test]
    fn test_blank_title_rejected() {
        let mut plan = UiPlan::base();
        plan.content.title = "   ".to_string();
        assert_eq!(validate(&plan), Err(PlanValidationError::MissingTitle));
    }

    #[test]
    fn test_validation_is_deterministic() {
        let mut plan = UiPlan::base();
        plan.layout = Some(Layout::Settings);
        plan.tone = Some(Tone::Enterprise);
        assert_eq!(validate(&plan), validate(&plan));

        plan.components = vec!["CustomWidget".to_string()];
        assert_eq!(validate(&plan), validate(&plan));
    }
}
