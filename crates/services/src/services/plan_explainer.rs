//! Turns a validated plan into a short natural-language rationale.

use super::ui_plan::{ComponentKind, UiPlan};

const SIDEBAR_SENTENCE: &str =
    "A sidebar keeps primary navigation in reach at every screen size.";
const KPI_SENTENCE: &str =
    "The KPI grid surfaces the headline numbers before anything else.";
const TABLE_SENTENCE: &str =
    "A data table carries the detailed records so nothing hides behind a click.";
const SETTINGS_SENTENCE: &str =
    "Settings live in a modal, keeping configuration out of the main flow.";
const CLOSING_SENTENCE: &str =
    "Tell me what to change and the layout, tone, or content will be reworked in the next pass.";

/// Sentences fire on independent presence checks in a fixed order; the
/// closing sentence is always emitted.
pub fn explain(plan: &UiPlan) -> String {
    let mut sentences = Vec::new();
    if plan.has_component(ComponentKind::Sidebar) {
        sentences.push(SIDEBAR_SENTENCE);
    }
    if plan.has_component(ComponentKind::KpiGrid) {
        sentences.push(KPI_SENTENCE);
    }
    if plan.has_component(ComponentKind::DataTable) {
        sentences.push(TABLE_SENTENCE);
    }
    if plan.has_component(ComponentKind::SettingsModal) {
        sentences.push(SETTINGS_SENTENCE);
    }
    sentences.push(CLOSING_SENTENCE);
    sentences.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::prompt_planner::plan_from_prompt;

    #[test]
    fn test_closing_sentence_always_present() {
        let plan = UiPlan::base();
        assert_eq!(explain(&plan), CLOSING_SENTENCE);
    }

    #[test]
    fn test_sentences_follow_fixed_order() {
        let plan = plan_from_prompt("settings page with a sidebar, metrics and a table", None);
        let text = explain(&plan);
        let positions: Vec<usize> = [
            SIDEBAR_SENTENCE,
            KPI_SENTENCE,
            TABLE_SENTENCE,
            SETTINGS_SENTENCE,
            CLOSING_SENTENCE,
        ]
        .iter()
        .map(|s| text.find(s).expect("sentence present"))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_only_present_components_are_mentioned() {
        let plan = plan_from_prompt("dashboard", None);
        let text = explain(&plan);
        assert!(!text.contains(SIDEBAR_SENTENCE));
        assert!(text.contains(KPI_SENTENCE));
        assert!(text.ends_with(CLOSING_SENTENCE));
    }
}
