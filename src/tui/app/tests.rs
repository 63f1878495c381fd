//! Tests for the storefront application model.

use bubbletea_rs::Model;
use rstest::{fixture, rstest};

use crate::tui::input::InputContext;
use crate::tui::messages::AppMsg;
use crate::tui::state::{FormField, ProductTab};

use super::StorefrontApp;

#[fixture]
fn app() -> StorefrontApp {
    StorefrontApp::demo()
}

fn key(code: crossterm::event::KeyCode) -> Box<bubbletea_rs::event::KeyMsg> {
    Box::new(bubbletea_rs::event::KeyMsg {
        key: code,
        modifiers: crossterm::event::KeyModifiers::empty(),
    })
}

fn type_into_form(app: &mut StorefrontApp, text: &str) {
    for character in text.chars() {
        let _cmd = app.handle_message(&AppMsg::FormInput(character));
    }
}

fn fill_valid_draft(app: &mut StorefrontApp) {
    type_into_form(app, "Ana");
    let _cmd = app.handle_message(&AppMsg::FormFocusNext);
    type_into_form(app, "Great socks");
    let _cmd = app.handle_message(&AppMsg::FormFocusNext);
    type_into_form(app, "4");
    let _cmd = app.handle_message(&AppMsg::FormFocusNext);
    type_into_form(app, "y");
}

#[rstest]
fn starts_on_the_reviews_tab_in_browsing_context(app: StorefrontApp) {
    assert_eq!(app.active_tab(), ProductTab::Reviews);
    assert_eq!(app.input_context(), InputContext::Browsing);
}

#[rstest]
fn browsing_keys_drive_the_storefront(mut app: StorefrontApp) {
    let _cmd = app.update(key(crossterm::event::KeyCode::Char('a')));
    assert_eq!(app.storefront().cart().len(), 1);

    let _cmd = app.update(key(crossterm::event::KeyCode::Char('l')));
    assert_eq!(app.storefront().display().selected_index(), 1);
}

#[rstest]
fn form_context_turns_printable_keys_into_input(mut app: StorefrontApp) {
    let _cmd = app.handle_message(&AppMsg::SelectTab(ProductTab::MakeReview));
    assert_eq!(app.input_context(), InputContext::FormEditing);

    let _cmd = app.update(key(crossterm::event::KeyCode::Char('a')));
    assert_eq!(app.form.draft().name(), "a");
    assert!(app.storefront().cart().is_empty(), "no cart shortcut fired");
}

#[rstest]
fn tab_switches_preserve_the_review_draft(mut app: StorefrontApp) {
    let _cmd = app.handle_message(&AppMsg::SelectTab(ProductTab::MakeReview));
    type_into_form(&mut app, "Ana");

    let _cmd = app.handle_message(&AppMsg::SelectTab(ProductTab::Details));
    let _cmd = app.handle_message(&AppMsg::SelectTab(ProductTab::Shipping));
    let _cmd = app.handle_message(&AppMsg::SelectTab(ProductTab::MakeReview));

    assert_eq!(app.form.draft().name(), "Ana");
}

#[rstest]
fn accepted_submission_clears_the_form_and_reaches_the_list(mut app: StorefrontApp) {
    let _cmd = app.handle_message(&AppMsg::SelectTab(ProductTab::MakeReview));
    fill_valid_draft(&mut app);

    let _cmd = app.handle_message(&AppMsg::SubmitReview);

    assert_eq!(app.storefront().reviews().len(), 1);
    assert!(app.form.draft().is_empty());
    assert!(app.form.errors().is_empty());
    assert_eq!(app.form.focus(), FormField::Name);
    assert_eq!(app.status.as_deref(), Some("Review submitted"));
}

#[rstest]
fn rejected_submission_keeps_values_and_reports_every_error(mut app: StorefrontApp) {
    let _cmd = app.handle_message(&AppMsg::SelectTab(ProductTab::MakeReview));
    type_into_form(&mut app, "Ana");

    let _cmd = app.handle_message(&AppMsg::SubmitReview);

    assert_eq!(app.form.draft().name(), "Ana");
    assert_eq!(app.form.errors().len(), 3);
    assert!(app.storefront().reviews().is_empty());

    let view = app.view();
    assert!(view.contains("Review is required"));
    assert!(view.contains("Rating is required"));
    assert!(view.contains("Recommendation is required"));
}

#[rstest]
fn out_of_range_selection_reports_in_the_status_bar(mut app: StorefrontApp) {
    let _cmd = app.handle_message(&AppMsg::SelectVariant(9));

    assert_eq!(app.storefront().display().selected_index(), 0);
    let view = app.view();
    assert!(view.contains("9"), "status mentions the rejected index");
}

#[rstest]
fn view_shows_title_tabs_and_empty_review_state(app: StorefrontApp) {
    let view = app.view();

    assert!(view.contains("Vitrine Wool Socks - on sale!"));
    assert!(view.contains("[Reviews]"));
    assert!(view.contains("Make a Review"));
    assert!(view.contains("There are no reviews yet."));
    assert!(view.contains("Cart: 0"));
}

#[rstest]
fn out_of_stock_variant_greys_the_cart_hints(mut app: StorefrontApp) {
    let _cmd = app.handle_message(&AppMsg::NextVariant);

    let view = app.view();
    assert!(view.contains("Out of stock"));
    assert!(view.contains("(out of stock)"));
    assert!(!view.contains("a:add"));
}

#[rstest]
fn help_overlay_replaces_the_view_until_toggled(mut app: StorefrontApp) {
    let _cmd = app.handle_message(&AppMsg::ToggleHelp);
    assert!(app.view().contains("Keyboard Shortcuts"));

    let _cmd = app.handle_message(&AppMsg::ToggleHelp);
    assert!(!app.view().contains("Keyboard Shortcuts"));
}

#[rstest]
fn window_resize_is_absorbed(mut app: StorefrontApp) {
    let _cmd = app.update(Box::new(bubbletea_rs::event::WindowSizeMsg {
        width: 120,
        height: 40,
    }));
    // No observable change beyond layout; the message must not be dropped
    // on the floor by the downcast chain.
    assert!(!app.view().is_empty());
}

#[rstest]
fn quit_message_produces_a_command(mut app: StorefrontApp) {
    assert!(app.handle_message(&AppMsg::Quit).is_some());
}
