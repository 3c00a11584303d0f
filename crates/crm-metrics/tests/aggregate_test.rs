//! End-to-end aggregation over small datasets.

use crm_metrics::{MetricsAggregator, PhaseTotals, Period, RecordKind};
use crm_models::{
    Contact, Dataset, Employee, Entry, Lead, LeadPhase, Project, ProjectPhase, ProjectStatus, Sow,
    SowPhase,
};

fn aggregator() -> MetricsAggregator {
    MetricsAggregator::new("2026-02".parse::<Period>().unwrap())
}

fn sample_dataset() -> Dataset {
    let mut ds = Dataset::new();

    ds.contacts = vec![
        Contact::new("c-1", "Ann Park", "Us", "Director of Delivery"),
        Contact::new("c-2", "Bo Chen", "Us", "SVP Sales"),
        Contact::new("c-3", "Cy Diaz", "Acme", "CIO"),
        Contact::new("c-4", "Di Evans", "Us", "Account Manager"),
    ];

    ds.leads = vec![
        Lead::builder("l-1", "Acme migration", LeadPhase::Proposal)
            .client("Acme")
            .our_contact("c-1")
            .our_contact("c-4")
            .client_contact("c-3")
            .revenue("$1.2M")
            .entry("2026-01-05", "Discovery", 2500.0)
            .build(),
        Lead::builder("l-2", "Globex support", LeadPhase::Won)
            .client("Globex")
            .our_contact("c-1")
            .revenue("$400K")
            .sow("sow-2")
            .entry("2026-01-10", "Negotiation", 1000.0)
            .build(),
        Lead::builder("l-3", "Initech audit", LeadPhase::New)
            .client("Initech")
            .client_contact("c-3")
            .revenue("$90K")
            .build(),
    ];

    ds.sows = vec![
        Sow::new("sow-1", "Acme platform", SowPhase::InProgress, "$2.26M")
            .with_entry(Entry::new("2026-01-01", "Staffing", 300.0)),
        Sow::new("sow-2", "Globex support", SowPhase::Won, "$400K")
            .with_entry(Entry::new("2026-01-15", "Kickoff", 200.0)),
        Sow::new("sow-3", "Old work", SowPhase::Completed, "$750K")
            .with_entry(Entry::new("2025-06-01", "Closeout", 100.0)),
        Sow::new("sow-4", "Prospect", SowPhase::Lead, "$120K"),
    ];

    ds.projects = vec![
        Project::new(
            "p-1",
            "Acme",
            "Platform rebuild",
            ProjectPhase::InProgress,
            ProjectStatus::Green,
        )
        .with_team_size("5 devs, 2 QA, 1 PM")
        .with_release_date("2026-02-27"),
        Project::new(
            "p-2",
            "Acme",
            "Data lake",
            ProjectPhase::Planning,
            ProjectStatus::Yellow,
        )
        .with_team_size("3")
        .with_release_date("2026-02-10"),
        Project::new(
            "p-3",
            "Globex",
            "Legacy sunset",
            ProjectPhase::Canceled,
            ProjectStatus::Red,
        ),
    ];

    ds.employees = vec![
        Employee::new("r-1", "Maya Patel", "$120K", "$200K").with_accounts("Acme"),
        Employee::new("r-2", "Liam Reyes", "$100K", "$150K")
            .with_accounts("Acme, Globex"),
        Employee::new("r-3", "Zara Brooks", "$80K", "$0K")
            .with_accounts("Bench")
            .with_bench_time("2 months"),
        Employee::new("r-4", "Jordan Ellis", "$95K", "$130K")
            .with_accounts("Globex")
            .departed(),
    ];

    ds
}

#[test]
fn test_single_sow_and_employee_scenario() {
    let mut ds = Dataset::new();
    ds.sows.push(
        Sow::new("sow-1", "Platform", SowPhase::Won, "$500K")
            .with_entry(Entry::new("2026-01-01", "a", 300.0))
            .with_entry(Entry::new("2026-01-02", "b", 200.0)),
    );
    ds.employees
        .push(Employee::new("r-1", "Maya", "$100K", "$150K").with_accounts("Acme"));

    let m = aggregator().aggregate(&ds);

    assert_eq!(m.sows.total_sow_revenue, 500.0);
    assert_eq!(
        m.sows.sows_by_phase[&SowPhase::Won],
        PhaseTotals { count: 1, cost: 500.0 }
    );
    assert_eq!(m.employees.employee_cost, 100.0);
    assert_eq!(m.employees.employee_revenue, 150.0);
    assert_eq!(m.revenue.total_revenue, 500.0);
    assert_eq!(m.revenue.total_cost, 600.0);
    assert_eq!(
        m.revenue.total_income,
        m.revenue.total_revenue - m.revenue.total_cost
    );
    assert!(m.directors.is_empty());
    assert!(m.is_clean());
}

#[test]
fn test_bench_token_scenario() {
    let mut ds = Dataset::new();
    ds.employees.push(
        Employee::new("r-1", "Maya", "$100K", "$150K")
            .with_accounts("Acme, Bench")
            .with_bench_time("1 months"),
    );

    let m = aggregator().aggregate(&ds);

    assert_eq!(m.employees.employees_per_client.get("Acme"), Some(&1));
    assert_eq!(m.employees.employees_per_client.len(), 1);
    assert_eq!(m.employees.benched_employees, 1);
}

#[test]
fn test_phase_counts_cover_every_record() {
    let ds = sample_dataset();
    let m = aggregator().aggregate(&ds);

    let sow_count: usize = m.sows.sows_by_phase.values().map(|t| t.count).sum();
    let lead_count: usize = m.leads.leads_by_phase.values().map(|t| t.count).sum();
    assert_eq!(sow_count, ds.sows.len());
    assert_eq!(lead_count, ds.leads.len());
}

#[test]
fn test_aggregation_is_idempotent() {
    let ds = sample_dataset();
    let agg = aggregator();

    assert_eq!(agg.aggregate(&ds), agg.aggregate(&ds));
}

#[test]
fn test_sample_totals() {
    let m = aggregator().aggregate(&sample_dataset());

    assert!((m.sows.total_sow_revenue - 2660.0).abs() < 1e-9);
    assert_eq!(m.sows.active_sows_count, 2);
    assert_eq!(m.sows.total_sow_cost, 600.0);
    assert_eq!(m.sows.sows_by_phase[&SowPhase::Lead].count, 1);

    assert_eq!(m.leads.total_leads, 3);
    assert_eq!(m.leads.lead_total_cost, 3500.0);

    assert_eq!(m.employees.total_hired, 4);
    assert_eq!(m.employees.current_employees, 3);
    assert_eq!(m.employees.benched_employees, 1);
    assert_eq!(m.employees.employee_cost, 300.0);
    assert_eq!(m.employees.employee_revenue, 350.0);
    assert_eq!(m.employees.employees_per_client["Acme"], 2);
    assert_eq!(m.employees.employees_per_client["Globex"], 1);

    assert_eq!(m.projects.total_projects, 2);
    assert_eq!(m.projects.projects_by_status[&ProjectStatus::Red], 1);
    assert_eq!(m.projects.projects_per_client["Acme"], 2);
    assert_eq!(m.projects.deliverables_this_period, 1);
    assert_eq!(m.projects.employees_per_project[0].employees, 8);

    assert_eq!(m.revenue.total_cost, 300.0 + 3500.0 + 600.0);
    assert_eq!(m.revenue.cost_per_sow, 300.0);
    assert_eq!(m.revenue.cost_per_employee, 100.0);
    assert_eq!(m.revenue.cost_per_benched_employee, 300.0);
    assert!(m.is_clean());
}

#[test]
fn test_director_rollup_in_snapshot() {
    let m = aggregator().aggregate(&sample_dataset());

    // c-2 is leadership but works no lead; c-3 is leadership on the client
    // side only; c-4 works a lead but is not leadership.
    assert_eq!(m.directors.len(), 1);
    let ann = &m.directors[0];
    assert_eq!(ann.director_name, "Ann Park");
    assert_eq!(ann.lead_count, 2);
    assert_eq!(ann.total_cost, 3500.0);
    assert!((ann.total_revenue - 1600.0).abs() < 1e-9);
}

#[test]
fn test_unparseable_money_surfaces_as_nan_and_warning() {
    let mut ds = sample_dataset();
    ds.employees[0].salary = "negotiable".to_string();

    let m = aggregator().aggregate(&ds);

    assert!(m.employees.employee_cost.is_nan());
    assert!(m.revenue.total_income.is_nan());
    assert!(!m.is_clean());
    assert_eq!(m.warnings.len(), 1);
    assert_eq!(m.warnings[0].kind, RecordKind::Employee);
    assert_eq!(m.warnings[0].record_id, "r-1");
}

#[test]
fn test_aggregate_parts_matches_dataset() {
    let ds = sample_dataset();
    let agg = aggregator();

    let parts = agg.aggregate_parts(
        &ds.contacts,
        &ds.leads,
        &ds.sows,
        &ds.projects,
        &ds.employees,
    );
    assert_eq!(parts, agg.aggregate(&ds));
}

#[test]
fn test_dataset_loaded_from_json() {
    let json = r#"{
        "contacts": [
            {"id": "c-1", "fullName": "Ann Park", "company": "Us", "title": "VP Delivery"}
        ],
        "leads": [
            {"id": "l-1", "leadName": "Expansion", "phase": "Negotiation",
             "myCompanySideContacts": ["c-1"], "clientSideContacts": [],
             "revenueEstimate": "$750K",
             "entries": [{"id": "e-1", "date": "2026-01-04", "text": "Call", "cost": 1200}]}
        ],
        "sows": [
            {"id": "sow-1", "sowName": "Platform", "phase": "In Progress", "value": "$1,200K"}
        ],
        "employees": [
            {"id": "r-1", "name": "Maya", "currentAccounts": "Acme", "benchTime": "0 weeks",
             "salary": "$110K", "sowValuation": "$160K", "hasLeft": false}
        ]
    }"#;
    let ds: Dataset = serde_json::from_str(json).unwrap();

    let m = aggregator().aggregate(&ds);

    assert_eq!(m.sows.total_sow_revenue, 1200.0);
    assert_eq!(m.leads.leads_by_phase[&LeadPhase::Negotiation].cost, 1200.0);
    assert_eq!(m.employees.benched_employees, 0);
    assert_eq!(m.directors[0].total_revenue, 750.0);
}
