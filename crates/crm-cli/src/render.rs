//! Plain-text rendering of dashboard reports.

use std::fmt::Write;

use crm_metrics::{format_millions, format_thousands, DirectorMetrics, Metrics};
use crm_models::UpdateEntry;

/// Truncate a string to max length with ellipsis.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Full dashboard report, one block per card.
pub fn metrics_table(m: &Metrics) -> String {
    let mut out = String::new();
    let r = &m.revenue;

    // Writing to a String cannot fail.
    let _ = writeln!(out, "Dashboard ({})", m.period);
    let _ = writeln!(out, "{}", "=".repeat(48));

    let _ = writeln!(out, "\nRevenue");
    let _ = writeln!(out, "  {:<28} {:>16}", "Total revenue", format_millions(r.total_revenue));
    let _ = writeln!(out, "  {:<28} {:>16}", "Total cost", format_millions(r.total_cost));
    let _ = writeln!(out, "  {:<28} {:>16}", "Total income", format_millions(r.total_income));
    let _ = writeln!(out, "  {:<28} {:>16}", "Cost per SOW", format_thousands(r.cost_per_sow));

    let _ = writeln!(out, "\nLeads");
    let _ = writeln!(out, "  {:<28} {:>16}", "Total leads", m.leads.total_leads);
    let _ = writeln!(out, "  {:<28} {:>16}", "Lead cost", format_thousands(m.leads.lead_total_cost));
    for (phase, totals) in &m.leads.leads_by_phase {
        let _ = writeln!(
            out,
            "    {:<26} {:>6}  {:>8} cost",
            phase.as_str(),
            totals.count,
            format_thousands(totals.cost)
        );
    }

    let _ = writeln!(out, "\nSOW");
    let _ = writeln!(out, "  {:<28} {:>16}", "SOW revenue", format_millions(m.sows.total_sow_revenue));
    let _ = writeln!(out, "  {:<28} {:>16}", "Active SOWs", m.sows.active_sows_count);
    for (phase, totals) in &m.sows.sows_by_phase {
        let _ = writeln!(
            out,
            "    {:<26} {:>6}  {:>8} cost",
            phase.as_str(),
            totals.count,
            format_thousands(totals.cost)
        );
    }

    let e = &m.employees;
    let _ = writeln!(out, "\nEmployees");
    let _ = writeln!(out, "  {:<28} {:>16}", "Total hired", e.total_hired);
    let _ = writeln!(out, "  {:<28} {:>16}", "Current", e.current_employees);
    let _ = writeln!(out, "  {:<28} {:>16}", "On bench", e.benched_employees);
    let _ = writeln!(out, "  {:<28} {:>16}", "Cost per employee", format_thousands(r.cost_per_employee));
    let _ = writeln!(out, "  {:<28} {:>16}", "Revenue per employee", format_thousands(r.revenue_per_employee));
    let _ = writeln!(
        out,
        "  {:<28} {:>16}",
        "Cost per benched employee",
        format_thousands(r.cost_per_benched_employee)
    );
    let mut clients: Vec<_> = e.employees_per_client.iter().collect();
    clients.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    for (client, count) in clients {
        let _ = writeln!(out, "    {:<26} {:>6}", truncate(client, 26), count);
    }

    let p = &m.projects;
    let _ = writeln!(out, "\nProjects");
    let _ = writeln!(out, "  {:<28} {:>16}", "Current projects", p.total_projects);
    let _ = writeln!(out, "  {:<28} {:>16}", "Deliverables this period", p.deliverables_this_period);
    for (status, count) in &p.projects_by_status {
        let _ = writeln!(out, "    {:<26} {:>6}", status.as_str(), count);
    }
    for headcount in p.employees_per_project.iter().take(5) {
        let _ = writeln!(
            out,
            "    {:<26} {:>6} people",
            truncate(&headcount.project_name, 26),
            headcount.employees
        );
    }

    if !m.warnings.is_empty() {
        let _ = writeln!(out, "\nWarnings ({})", m.warnings.len());
        for warning in &m.warnings {
            let _ = writeln!(out, "  {}", warning);
        }
    }

    out
}

/// One-line summary.
pub fn metrics_brief(m: &Metrics) -> String {
    format!(
        "{}\trevenue {}\tcost {}\tincome {}\tleads {}\tsows {}\temployees {}\tprojects {}",
        m.period,
        format_millions(m.revenue.total_revenue),
        format_millions(m.revenue.total_cost),
        format_millions(m.revenue.total_income),
        m.leads.total_leads,
        m.sows.active_sows_count,
        m.employees.current_employees,
        m.projects.total_projects
    )
}

/// Director roll-up with one row per lead.
pub fn directors_table(directors: &[DirectorMetrics]) -> String {
    if directors.is_empty() {
        return "No directors with active leads.\n".to_string();
    }

    let mut out = String::new();
    for d in directors {
        let _ = writeln!(
            out,
            "{} ({}, {})  leads {}  cost {}  revenue {}",
            d.director_name,
            d.director_title,
            d.director_company,
            d.lead_count,
            format_thousands(d.total_cost),
            format_thousands(d.total_revenue)
        );
        for lead in &d.lead_details {
            let _ = writeln!(
                out,
                "    {:<30} {:<12} {:>10} {:>10}",
                truncate(&lead.lead_name, 30),
                lead.phase.as_str(),
                format_thousands(lead.cost),
                format_thousands(lead.revenue)
            );
        }
    }
    out
}

/// Tab-separated director totals.
pub fn directors_brief(directors: &[DirectorMetrics]) -> String {
    directors
        .iter()
        .map(|d| format!("{}\t{}\t{}", d.director_id, d.director_name, d.lead_count))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Updates feed, newest first, with a hint about hidden entries.
pub fn updates_table(visible: &[UpdateEntry], remaining: usize) -> String {
    if visible.is_empty() {
        return "No recent updates to display.\n".to_string();
    }

    let mut out = String::new();
    for update in visible {
        let _ = writeln!(
            out,
            "{}  {:<10}  {}",
            update.timestamp.format("%Y-%m-%d %H:%M"),
            update.section,
            update.summary()
        );
    }
    if remaining > 0 {
        let _ = writeln!(out, "\n{} more update(s) not shown", remaining);
    }
    out
}
