//! Behaviour-driven tests for the dashboard's text views.

use std::cell::RefCell;

mod support;

use caixa::balance::{BALANCE_HISTORY, BALANCE_OVERVIEW, TRANSACTIONS, render_balance};
use caixa::dashboard::{EXPENSES, MONTH_SUMMARY, render_expenses, render_summary};
use caixa_common::{Language, MemoryPreferenceStore, Translator};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use support::text::StepText;

#[derive(Default)]
struct DashboardWorld {
    language: RefCell<Option<Language>>,
    view: RefCell<Option<String>>,
}

impl DashboardWorld {
    fn translator(&self) -> Translator<MemoryPreferenceStore> {
        let language = self
            .language
            .borrow()
            .unwrap_or_else(|| panic!("the dashboard language should have been chosen"));
        Translator::with_language(MemoryPreferenceStore::default(), language)
    }

    fn view(&self) -> String {
        self.view
            .borrow()
            .clone()
            .unwrap_or_else(|| panic!("a view should have been rendered"))
    }
}

#[fixture]
fn world() -> DashboardWorld {
    DashboardWorld::default()
}

#[given("the dashboard language is {tag}")]
fn choose_language(world: &DashboardWorld, tag: StepText) {
    let language = tag
        .into_inner()
        .parse::<Language>()
        .unwrap_or_else(|error| panic!("scenario language should be supported: {error}"));
    world.language.borrow_mut().replace(language);
}

#[when("the expenses matching {query} are listed")]
fn list_matching(world: &DashboardWorld, query: StepText) {
    let view = render_expenses(&world.translator(), &EXPENSES, &query.into_inner());
    world.view.borrow_mut().replace(view);
}

#[when("all expenses are listed")]
fn list_all(world: &DashboardWorld) {
    let view = render_expenses(&world.translator(), &EXPENSES, "");
    world.view.borrow_mut().replace(view);
}

#[when("the month summary is shown")]
fn show_summary(world: &DashboardWorld) {
    let view = render_summary(&world.translator(), &MONTH_SUMMARY);
    world.view.borrow_mut().replace(view);
}

#[when("the cash balance is shown")]
fn show_balance(world: &DashboardWorld) {
    let view = render_balance(
        &world.translator(),
        &BALANCE_OVERVIEW,
        &BALANCE_HISTORY,
        &TRANSACTIONS,
    );
    world.view.borrow_mut().replace(view);
}

#[then("the view contains {text}")]
fn assert_contains(world: &DashboardWorld, text: StepText) {
    let view = world.view();
    let expected = text.into_inner();

    assert!(view.contains(&expected), "`{expected}` missing from:\n{view}");
}

#[then("the view ends with {text}")]
fn assert_ends_with(world: &DashboardWorld, text: StepText) {
    let view = world.view();
    let expected = text.into_inner();

    assert!(view.ends_with(&expected), "`{expected}` does not end:\n{view}");
}

#[scenario(path = "tests/features/dashboard.feature", index = 0)]
fn scenario_filtered_expenses(world: DashboardWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/dashboard.feature", index = 1)]
fn scenario_all_expenses(world: DashboardWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/dashboard.feature", index = 2)]
fn scenario_no_matches(world: DashboardWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/dashboard.feature", index = 3)]
fn scenario_summary_currency(world: DashboardWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/dashboard.feature", index = 4)]
fn scenario_icelandic_summary(world: DashboardWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/dashboard.feature", index = 5)]
fn scenario_czech_balance(world: DashboardWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/dashboard.feature", index = 6)]
fn scenario_brazilian_transactions(world: DashboardWorld) {
    let _ = world;
}
