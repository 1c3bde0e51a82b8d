//! Renders a validated plan into a static pseudo-markup text block.

use super::ui_plan::{ComponentKind, Layout, Tone, UiPlan};

/// Emission order for the blocks inside the shell. Membership in
/// `plan.components` is the only gate; the order never changes.
const EMISSION_ORDER: [ComponentKind; 8] = [
    ComponentKind::TopNav,
    ComponentKind::Sidebar,
    ComponentKind::KpiGrid,
    ComponentKind::LineChartCard,
    ComponentKind::BarChartCard,
    ComponentKind::DataTable,
    ComponentKind::EmptyState,
    ComponentKind::SettingsModal,
];

/// Produce the display-only code text for a plan. Deterministic: the
/// same plan always yields the same block.
pub fn generate_code(plan: &UiPlan) -> String {
    let layout = plan.layout.unwrap_or(Layout::Dashboard);
    let tone = plan.tone.unwrap_or(Tone::Bold);

    let mut out = String::new();
    out.push_str("// Generated by UI Studio\n");
    out.push_str(&format!("// layout: {layout} | tone: {tone}\n"));
    out.push_str("//\n// plan:\n");
    let serialized = serde_json::to_string_pretty(plan).unwrap_or_default();
    for line in serialized.lines() {
        out.push_str(&format!("// {line}\n"));
    }
    out.push('\n');

    let mut shell_attrs = format!(
        "layout=\"{layout}\" tone=\"{tone}\" title=\"{}\"",
        plan.content.title
    );
    if let Some(subtitle) = &plan.content.subtitle {
        shell_attrs.push_str(&format!(" subtitle=\"{subtitle}\""));
    }
    out.push_str(&format!("<AppShell {shell_attrs}>\n"));

    for kind in EMISSION_ORDER {
        if plan.has_component(kind) {
            out.push_str(&render_block(kind, plan));
        }
    }

    out.push_str("</AppShell>\n");
    out
}

fn render_block(kind: ComponentKind, plan: &UiPlan) -> String {
    match kind {
        ComponentKind::TopNav => {
            format!("  <TopNav title=\"{}\" />\n", plan.content.title)
        }
        ComponentKind::Sidebar => {
            "  <Sidebar items={[\"Overview\", \"Reports\", \"Settings\"]} />\n".to_string()
        }
        ComponentKind::KpiGrid => {
            let mut block = String::from("  <KPIGrid>\n");
            for kpi in plan.content.kpis.as_deref().unwrap_or(&[]) {
                match &kpi.delta {
                    Some(delta) => block.push_str(&format!(
                        "    <KPI label=\"{}\" value=\"{}\" delta=\"{}\" />\n",
                        kpi.label, kpi.value, delta
                    )),
                    None => block.push_str(&format!(
                        "    <KPI label=\"{}\" value=\"{}\" />\n",
                        kpi.label, kpi.value
                    )),
                }
            }
            block.push_str("  </KPIGrid>\n");
            block
        }
        ComponentKind::LineChartCard => {
            "  <LineChartCard title=\"Trend over time\" />\n".to_string()
        }
        ComponentKind::BarChartCard => "  <BarChartCard title=\"Breakdown\" />\n".to_string(),
        ComponentKind::DataTable => match &plan.content.table {
            Some(table) => format!(
                "  <DataTable columns={{{:?}}} rowCount={{{}}} />\n",
                table.columns,
                table.rows.len()
            ),
            None => "  <DataTable />\n".to_string(),
        },
        ComponentKind::EmptyState => {
            "  <EmptyState message=\"Nothing here yet\" />\n".to_string()
        }
        ComponentKind::SettingsModal => "  <SettingsModal />\n".to_string(),
        // The shell is the wrapper, never a child block.
        ComponentKind::AppShell => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::prompt_planner::plan_from_prompt;

    #[test]
    fn test_blocks_are_gated_by_membership() {
        let plan = UiPlan::base();
        let code = generate_code(&plan);
        assert!(code.contains("<TopNav"));
        assert!(!code.contains("<Sidebar"));
        assert!(!code.contains("<SettingsModal"));
    }

    #[test]
    fn test_emission_order_is_fixed() {
        let plan = plan_from_prompt(
            "dashboard with a sidebar, charts, a table and an empty state",
            None,
        );
        let code = generate_code(&plan);
        let positions: Vec<usize> = [
            "<TopNav", "<Sidebar", "<KPIGrid", "<LineChartCard", "<BarChartCard", "<DataTable",
            "<EmptyState",
        ]
        .iter()
        .map(|tag| code.find(tag).unwrap_or_else(|| panic!("missing {tag}")))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_output_is_deterministic() {
        let plan = plan_from_prompt("analytics dashboard with a table", None);
        assert_eq!(generate_code(&plan), generate_code(&plan));
    }

    #[test]
    fn test_landing_table_columns_are_rendered() {
        let plan = plan_from_prompt("make a landing page", None);
        let code = generate_code(&plan);
        assert!(code.contains("Feature"));
        assert!(code.contains("Why it matters"));
        assert!(code.contains("subtitle="));
    }

    #[test]
    fn test_preamble_carries_layout_and_tone() {
        let plan = plan_from_prompt("minimal settings page", None);
        let code = generate_code(&plan);
        assert!(code.starts_with("// Generated by UI Studio\n"));
        assert!(code.contains("// layout: settings | tone: minimal"));
    }
}
