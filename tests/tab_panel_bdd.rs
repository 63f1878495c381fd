//! Behavioural tests for the product tab panel.

use bubbletea_rs::Model;
use bubbletea_rs::event::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

use vitrine::catalog::test_support::demo_storefront;
use vitrine::tui::StorefrontApp;

type StepResult = Result<(), Box<dyn std::error::Error>>;

/// State shared across steps in a tab panel scenario.
#[derive(ScenarioState, Default)]
struct TabPanelState {
    app: Slot<StorefrontApp>,
    rendered_view: Slot<String>,
}

#[fixture]
fn tab_state() -> TabPanelState {
    TabPanelState::default()
}

fn parse_key(key: &str) -> Result<KeyCode, Box<dyn std::error::Error>> {
    let normalized = key.trim_matches('"');
    let lower = normalized.to_ascii_lowercase();

    let key_code = match lower.as_str() {
        "enter" => KeyCode::Enter,
        "backspace" => KeyCode::Backspace,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        _ => {
            let mut chars = normalized.chars();
            let Some(character) = chars.next() else {
                return Err("key token must not be empty".into());
            };
            if chars.next().is_some() {
                return Err(format!("unsupported key token: {normalized}").into());
            }
            KeyCode::Char(character)
        }
    };

    Ok(key_code)
}

fn send_key(state: &TabPanelState, key_code: KeyCode) -> StepResult {
    let key_message = KeyMsg {
        key: key_code,
        modifiers: KeyModifiers::empty(),
    };

    state
        .app
        .with_mut(|app| {
            app.update(Box::new(key_message));
        })
        .ok_or("app should be initialised before sending input")?;

    Ok(())
}

// Given steps

#[given("a storefront TUI")]
fn given_storefront_tui(tab_state: &TabPanelState) {
    tab_state.app.set(StorefrontApp::new(demo_storefront(false)));
}

#[given("a premium storefront TUI")]
fn given_premium_storefront_tui(tab_state: &TabPanelState) {
    tab_state.app.set(StorefrontApp::new(demo_storefront(true)));
}

#[given("the Make a Review tab is active")]
fn given_review_form_tab(tab_state: &TabPanelState) -> StepResult {
    send_key(tab_state, KeyCode::Char('2'))
}

// When steps

#[when("the user types {text}")]
fn when_user_types(tab_state: &TabPanelState, text: String) -> StepResult {
    for character in text.trim_matches('"').chars() {
        send_key(tab_state, KeyCode::Char(character))?;
    }
    Ok(())
}

#[when("the user presses {key}")]
fn when_user_presses(tab_state: &TabPanelState, key: String) -> StepResult {
    let key_code = parse_key(&key)?;
    send_key(tab_state, key_code)
}

#[when("the view is rendered")]
fn when_view_is_rendered(tab_state: &TabPanelState) -> StepResult {
    let view = tab_state
        .app
        .with_ref(StorefrontApp::view)
        .ok_or("app should be initialised before rendering")?;
    tab_state.rendered_view.set(view);
    Ok(())
}

// Then steps

#[then("the view contains {text}")]
fn then_view_contains(tab_state: &TabPanelState, text: String) -> StepResult {
    let expected = text.trim_matches('"');
    let view = tab_state
        .rendered_view
        .with_ref(Clone::clone)
        .ok_or("view should be rendered before assertions")?;
    if !view.contains(expected) {
        return Err(format!("expected view to contain '{expected}', got:\n{view}").into());
    }
    Ok(())
}

// Scenario bindings

#[scenario(path = "tests/features/tab_panel.feature", index = 0)]
fn panel_opens_on_the_reviews_tab(tab_state: TabPanelState) {
    let _ = tab_state;
}

#[scenario(path = "tests/features/tab_panel.feature", index = 1)]
fn draft_survives_a_tab_tour(tab_state: TabPanelState) {
    let _ = tab_state;
}

#[scenario(path = "tests/features/tab_panel.feature", index = 2)]
fn shipping_tab_shows_the_standard_rate(tab_state: TabPanelState) {
    let _ = tab_state;
}

#[scenario(path = "tests/features/tab_panel.feature", index = 3)]
fn shipping_tab_shows_free_for_premium(tab_state: TabPanelState) {
    let _ = tab_state;
}

#[scenario(path = "tests/features/tab_panel.feature", index = 4)]
fn details_tab_lists_the_product_details(tab_state: TabPanelState) {
    let _ = tab_state;
}

#[scenario(path = "tests/features/tab_panel.feature", index = 5)]
fn escape_returns_to_the_reviews_tab(tab_state: TabPanelState) {
    let _ = tab_state;
}
