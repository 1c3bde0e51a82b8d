//! Derives a UI plan from free text and an optional previous plan.
//!
//! Intent classification is plain regex keyword matching over the
//! lower-cased input. The planner starts from a clone of the previous
//! plan and only ever adds whitelisted components, so its output always
//! passes validation.

use once_cell::sync::Lazy;
use regex::Regex;
use utils::text::truncate_chars;

use super::ui_plan::{ComponentKind, Kpi, Layout, TITLE_MAX_CHARS, TableSpec, Tone, UiPlan};

static LANDING_INTENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(landing|marketing|hero|homepage|home page|splash)\b").unwrap());
static SETTINGS_INTENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(settings|preferences|configuration|account|profile)\b").unwrap());
static DASHBOARD_INTENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(dashboard|analytics|metrics|kpis?|reports?)\b").unwrap());

static SIDEBAR_HINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(sidebar|side nav|navigation)\b").unwrap());
static CHART_HINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(charts?|graphs?|trends?|visuali[sz]ations?)\b").unwrap());
static TABLE_HINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(tables?|rows|records|listing)\b").unwrap());
static EMPTY_HINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(empty state|placeholder|no data)\b").unwrap());

static TONE_MINIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(minimal|minimalist|clean|simple)\b").unwrap());
static TONE_PLAYFUL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(playful|fun|friendly|whimsical)\b").unwrap());
static TONE_ENTERPRISE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(enterprise|corporate|professional|serious)\b").unwrap());

// Matched against the raw text so the captured title keeps its casing.
static TITLE_OVERRIDE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:title|name)\s*:\s*([^\n]+)\s*$").unwrap());

/// Compute a new plan from `text` and the plan it refines. The input
/// plan is never mutated; the result is a fresh value.
pub fn plan_from_prompt(text: &str, previous: Option<&UiPlan>) -> UiPlan {
    let input = text.to_lowercase();
    let mut plan = previous.cloned().unwrap_or_else(UiPlan::base);

    // Layout precedence: landing > settings > dashboard.
    let layout = if LANDING_INTENT.is_match(&input) {
        Layout::Landing
    } else if SETTINGS_INTENT.is_match(&input) {
        Layout::Settings
    } else {
        Layout::Dashboard
    };
    plan.layout = Some(layout);
    plan.tone = Some(tone_from_input(&input));

    if DASHBOARD_INTENT.is_match(&input) {
        plan.add_component(ComponentKind::KpiGrid);
        plan.add_component(ComponentKind::LineChartCard);
    }
    if SIDEBAR_HINT.is_match(&input) {
        plan.add_component(ComponentKind::Sidebar);
    }
    if CHART_HINT.is_match(&input) {
        plan.add_component(ComponentKind::LineChartCard);
        plan.add_component(ComponentKind::BarChartCard);
    }
    if TABLE_HINT.is_match(&input) {
        plan.add_component(ComponentKind::DataTable);
    }
    if EMPTY_HINT.is_match(&input) {
        plan.add_component(ComponentKind::EmptyState);
    }

    if let Some(title) = extract_title_override(text) {
        plan.content.title = title;
    }

    // Landing replaces the accumulated set wholesale; settings appends
    // to it. Long-standing behavior the generated output depends on.
    match layout {
        Layout::Landing => {
            plan.components = vec![
                ComponentKind::AppShell.to_string(),
                ComponentKind::TopNav.to_string(),
                ComponentKind::DataTable.to_string(),
            ];
            plan.content.subtitle = Some("Everything you need, one page down".to_string());
            plan.content.table = Some(landing_feature_table());
        }
        Layout::Settings => {
            plan.add_component(ComponentKind::SettingsModal);
            plan.add_component(ComponentKind::DataTable);
            if plan.content.subtitle.is_none() {
                plan.content.subtitle = Some("Workspace preferences".to_string());
            }
        }
        Layout::Dashboard => {}
    }

    // Components without content render empty; fill deterministic
    // sample data so the generator always has something to show.
    if plan.has_component(ComponentKind::KpiGrid) && plan.content.kpis.is_none() {
        plan.content.kpis = Some(default_kpis());
    }
    if plan.has_component(ComponentKind::DataTable) && plan.content.table.is_none() {
        plan.content.table = Some(default_table());
    }

    plan
}

/// Tone ladder: minimal > playful > enterprise > default bold.
fn tone_from_input(input: &str) -> Tone {
    if TONE_MINIMAL.is_match(input) {
        Tone::Minimal
    } else if TONE_PLAYFUL.is_match(input) {
        Tone::Playful
    } else if TONE_ENTERPRISE.is_match(input) {
        Tone::Enterprise
    } else {
        Tone::Bold
    }
}

/// A trailing `title:` / `name:` suffix overrides the plan title,
/// trimmed and capped. A blank capture is ignored.
fn extract_title_override(text: &str) -> Option<String> {
    let captures = TITLE_OVERRIDE.captures(text.trim())?;
    let raw = captures.get(1)?.as_str().trim();
    if raw.is_empty() {
        return None;
    }
    Some(truncate_chars(raw, TITLE_MAX_CHARS))
}

fn default_kpis() -> Vec<Kpi> {
    vec![
        Kpi {
            label: "Active users".to_string(),
            value: "1,204".to_string(),
            delta: Some("+4.2%".to_string()),
        },
        Kpi {
            label: "Conversion".to_string(),
            value: "3.1%".to_string(),
            delta: Some("+0.4%".to_string()),
        },
        Kpi {
            label: "Churn".to_string(),
            value: "1.8%".to_string(),
            delta: Some("-0.2%".to_string()),
        },
    ]
}

fn default_table() -> TableSpec {
    TableSpec {
        columns: vec!["Name".to_string(), "Status".to_string(), "Updated".to_string()],
        rows: vec![
            vec!["Orion rollout".to_string(), "On track".to_string(), "2h ago".to_string()],
            vec!["Billing revamp".to_string(), "At risk".to_string(), "1d ago".to_string()],
            vec!["Mobile beta".to_string(), "Shipped".to_string(), "3d ago".to_string()],
        ],
    }
}

fn landing_feature_table() -> TableSpec {
    TableSpec {
        columns: vec!["Feature".to_string(), "Why it matters".to_string()],
        rows: vec![
            vec![
                "Instant setup".to_string(),
                "Go live in minutes, not weeks".to_string(),
            ],
            vec![
                "Flexible plans".to_string(),
                "Scale up or down as you grow".to_string(),
            ],
            vec![
                "Priority support".to_string(),
                "A human answers within the hour".to_string(),
            ],
        ],
    }
}
