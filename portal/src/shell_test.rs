use super::*;
use crate::types::Category;

#[test]
fn starts_on_employee_form() {
    let shell = Shell::new();
    assert_eq!(shell.active(), ViewKind::Employee);
    assert_eq!(ViewKind::default(), ViewKind::Employee);
}

#[test]
fn selecting_admin_mounts_dashboard_with_fetches() {
    let mut shell = Shell::new();
    let effects = shell.select(ViewKind::Admin);
    assert_eq!(shell.active(), ViewKind::Admin);
    assert_eq!(effects.len(), 2);
    assert!(shell.form_mut().is_none());
    assert!(shell.dashboard_mut().is_some_and(|d| d.is_loading()));
}

#[test]
fn switching_away_discards_form_input() {
    let mut shell = Shell::new();
    let form = shell.form_mut().expect("form");
    form.set_category(Some(Category::Leadership));
    form.set_text("half-written feedback");

    shell.select(ViewKind::Admin);
    assert!(shell.select(ViewKind::Employee).is_empty());

    let form = shell.form_mut().expect("form");
    assert_eq!(form.category(), None);
    assert_eq!(form.text(), "");
}

#[test]
fn reselecting_admin_resets_filters() {
    let mut shell = Shell::new();
    shell.select(ViewKind::Admin);
    let dash = shell.dashboard_mut().expect("dashboard");
    dash.set_category(Some(Category::Growth));
    dash.set_search("coffee");

    shell.select(ViewKind::Employee);
    shell.select(ViewKind::Admin);
    let dash = shell.dashboard_mut().expect("dashboard");
    assert_eq!(dash.query().category, None);
    assert_eq!(dash.search(), "");
}

#[test]
fn view_labels_and_parsing() {
    assert_eq!(ViewKind::Employee.label(), "Employee View");
    assert_eq!(ViewKind::Admin.label(), "Admin Dashboard");
    assert_eq!(ViewKind::Employee.toggled(), ViewKind::Admin);
    assert_eq!("ADMIN".parse::<ViewKind>(), Ok(ViewKind::Admin));
    assert_eq!("form".parse::<ViewKind>(), Ok(ViewKind::Employee));
    assert!("settings".parse::<ViewKind>().is_err());
}
