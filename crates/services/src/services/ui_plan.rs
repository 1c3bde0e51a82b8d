//! Data model for UI plans produced by the prompt planner.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use ts_rs::TS;

/// Maximum length of a plan title, in characters.
pub const TITLE_MAX_CHARS: usize = 60;

/// Page skeleton the plan targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Layout {
    Dashboard,
    Landing,
    Settings,
}

/// Visual register applied across the generated components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tone {
    Minimal,
    Bold,
    Playful,
    Enterprise,
}

/// The nine components the planner is allowed to place. Anything outside
/// this set is rejected by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, EnumString, Display)]
pub enum ComponentKind {
    AppShell,
    TopNav,
    Sidebar,
    #[serde(rename = "KPIGrid")]
    #[strum(serialize = "KPIGrid")]
    KpiGrid,
    LineChartCard,
    BarChartCard,
    DataTable,
    EmptyState,
    SettingsModal,
}

/// One headline metric rendered in the KPI grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct Kpi {
    pub label: String,
    pub value: String,
    pub delta: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct TableSpec {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Text and data the generated components render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
pub struct PlanContent {
    #[serde(default)]
    pub title: String,
    pub subtitle: Option<String>,
    pub kpis: Option<Vec<Kpi>>,
    pub table: Option<TableSpec>,
}

/// A structured description of a UI: layout, tone, the components to
/// place, and the content they render. `layout` and `tone` are optional
/// so a candidate arriving over the wire can be missing them; the
/// validator reports that before anything downstream runs. `components`
/// holds raw names so a disallowed one is representable and reportable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct UiPlan {
    #[serde(default)]
    pub layout: Option<Layout>,
    #[serde(default)]
    pub tone: Option<Tone>,
    #[serde(default)]
    pub components: Vec<String>,
    #[serde(default)]
    pub content: PlanContent,
}

impl UiPlan {
    /// The hard-coded starting point when no previous plan exists.
    pub fn base() -> Self {
        Self {
            layout: Some(Layout::Dashboard),
            tone: Some(Tone::Bold),
            components: vec![
                ComponentKind::AppShell.to_string(),
                ComponentKind::TopNav.to_string(),
            ],
            content: PlanContent {
                title: "Untitled app".to_string(),
                subtitle: None,
                kpis: None,
                table: None,
            },
        }
    }

    pub fn has_component(&self, kind: ComponentKind) -> bool {
        let name = kind.to_string();
        self.components.iter().any(|c| *c == name)
    }

    /// Append `kind` unless it is already present. Components are only
    /// ever added within a planning step, never removed.
    pub fn add_component(&mut self, kind: ComponentKind) {
        let name = kind.to_string();
        if !self.components.iter().any(|c| *c == name) {
            self.components.push(name);
        }
    }
}
