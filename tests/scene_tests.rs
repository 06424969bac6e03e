//! Scene controller integration tests.
//!
//! These drive the menu -> playing -> won machine through pointer
//! events only, the way the embedding loop does.

use memora::cards::ComponentCatalog;
use memora::core::{GameConfig, GameRng, Point};
use memora::i18n::Language;
use memora::platform::{InputEvent, PointerButton};
use memora::scene::{Directive, Scene, SceneController};

fn controller(seed: u64) -> SceneController {
    SceneController::with_rng(
        GameConfig::default(),
        ComponentCatalog::electronics(),
        GameRng::new(seed),
    )
    .unwrap()
}

fn click(pos: Point) -> InputEvent {
    InputEvent::PointerDown {
        pos,
        button: PointerButton::Primary,
    }
}

fn press_start(controller: &mut SceneController) {
    let pos = controller.menu().buttons[0].rect.center();
    controller.handle_event(&click(pos), 0);
}

/// Match every pair on the board via pointer events.
fn finish_board(controller: &mut SceneController, now_ms: u64) {
    loop {
        let cards = controller.session().unwrap().cards();
        let Some(first) = cards.iter().position(|c| !c.matched) else {
            break;
        };
        let pair_id = cards[first].pair_id;
        let partner = cards
            .iter()
            .enumerate()
            .position(|(i, c)| i != first && c.pair_id == pair_id)
            .unwrap();

        let targets = [
            cards[first].rect.center(),
            cards[partner].rect.center(),
        ];
        for pos in targets {
            controller.handle_event(&click(pos), now_ms);
        }
    }
}

// =============================================================================
// Transitions
// =============================================================================

/// Test the full loop: menu -> playing -> won -> menu.
#[test]
fn test_menu_play_win_menu_cycle() {
    let mut controller = controller(42);
    assert_eq!(controller.scene(), Scene::Menu);

    press_start(&mut controller);
    assert_eq!(controller.scene(), Scene::Playing);
    assert!(controller.session().is_some());

    finish_board(&mut controller, 0);
    // The transition is observed by the per-frame update, not the click
    assert_eq!(controller.scene(), Scene::Playing);
    controller.update(0);
    assert_eq!(controller.scene(), Scene::Won);

    // The finished board is retained under the overlay
    let session = controller.session().unwrap();
    assert!(session.is_won());
    assert!(session.cards().iter().all(|c| c.matched));

    // Main menu discards the session
    let menu_pos = controller.win().buttons[1].rect.center();
    controller.handle_event(&click(menu_pos), 0);
    assert_eq!(controller.scene(), Scene::Menu);
    assert!(controller.session().is_none());
}

/// Test that restart from the win screen starts a brand-new session.
#[test]
fn test_restart_from_win_screen() {
    let mut controller = controller(42);
    press_start(&mut controller);
    finish_board(&mut controller, 0);
    controller.update(0);
    assert_eq!(controller.scene(), Scene::Won);
    let finished_seed = controller.session().unwrap().seed();

    let restart_pos = controller.win().buttons[0].rect.center();
    controller.handle_event(&click(restart_pos), 0);

    assert_eq!(controller.scene(), Scene::Playing);
    let fresh = controller.session().unwrap();
    assert_eq!(fresh.pairs_found(), 0);
    assert!(fresh.cards().iter().all(|c| !c.matched));
    assert_ne!(fresh.seed(), finished_seed);
}

/// Test that the win transition never re-fires once in Won.
#[test]
fn test_win_transition_fires_once() {
    let mut controller = controller(42);
    press_start(&mut controller);
    finish_board(&mut controller, 0);
    controller.update(0);
    assert_eq!(controller.scene(), Scene::Won);

    // Further frames and stray board clicks leave the scene alone
    for frame in 1..10 {
        controller.update(frame * 16);
        assert_eq!(controller.scene(), Scene::Won);
    }
    controller.handle_event(&click(Point::new(400, 500)), 200);
    assert_eq!(controller.scene(), Scene::Won);
}

/// Test that starting from the menu replaces any prior session state.
#[test]
fn test_start_discards_previous_session() {
    let mut controller = controller(42);
    press_start(&mut controller);
    finish_board(&mut controller, 0);
    controller.update(0);

    let menu_pos = controller.win().buttons[1].rect.center();
    controller.handle_event(&click(menu_pos), 0);

    press_start(&mut controller);
    let session = controller.session().unwrap();
    assert_eq!(session.pairs_found(), 0);
    assert!(!session.is_won());
}

/// Test that exit works from the menu and the win screen.
#[test]
fn test_exit_bubbles_to_embedder() {
    let mut controller = controller(42);
    let exit_pos = controller.menu().buttons[2].rect.center();
    assert_eq!(controller.handle_event(&click(exit_pos), 0), Directive::Exit);

    let mut controller = controller_with_finished_board();
    let exit_pos = controller.win().buttons[2].rect.center();
    assert_eq!(controller.handle_event(&click(exit_pos), 0), Directive::Exit);
}

fn controller_with_finished_board() -> SceneController {
    let mut c = controller(42);
    press_start(&mut c);
    finish_board(&mut c, 0);
    c.update(0);
    c
}

// =============================================================================
// Event routing
// =============================================================================

/// Test that only the active scene sees pointer events.
#[test]
fn test_events_routed_to_active_scene_only() {
    let mut controller = controller(42);
    press_start(&mut controller);

    // Win-screen button positions do nothing while playing
    let restart_pos = controller.win().buttons[0].rect.center();
    let before = controller.session().unwrap().pairs_found();
    controller.handle_event(&click(restart_pos), 0);
    assert_eq!(controller.scene(), Scene::Playing);
    assert_eq!(controller.session().unwrap().pairs_found(), before);
}

/// Test that board clicks do not leak into the won overlay's buttons.
#[test]
fn test_won_scene_ignores_card_positions() {
    let mut controller = controller_with_finished_board();

    // A position that is on a card but on no win button
    let card_pos = controller.session().unwrap().cards()[0].rect.center();
    let on_button = controller.win().intent_at(card_pos).is_some();
    if !on_button {
        controller.handle_event(&click(card_pos), 0);
        assert_eq!(controller.scene(), Scene::Won);
        assert!(controller.session().is_some());
    }
}

// =============================================================================
// Language
// =============================================================================

/// Test the language toggle scenario end to end.
#[test]
fn test_language_toggle_scenario() {
    let mut controller = controller(42);

    controller.set_language(Language::En);
    assert_eq!(controller.strings().get("start"), "Start Game");

    controller.toggle_language();
    assert_eq!(controller.strings().get("start"), "Iniciar Juego");
    assert_eq!(controller.language(), Language::Es);
}

/// Test that toggling the language never touches an in-progress board.
#[test]
fn test_language_toggle_preserves_session_state() {
    let mut controller = controller(42);
    press_start(&mut controller);

    // Make some progress: one matched pair
    let cards = controller.session().unwrap().cards();
    let pair_id = cards[0].pair_id;
    let partner = cards
        .iter()
        .enumerate()
        .position(|(i, c)| i != 0 && c.pair_id == pair_id)
        .unwrap();
    let targets = [cards[0].rect.center(), cards[partner].rect.center()];
    for pos in targets {
        controller.handle_event(&click(pos), 0);
    }

    let before: Vec<_> = controller
        .session()
        .unwrap()
        .cards()
        .iter()
        .map(|c| (c.pair_id, c.kind, c.flipped, c.matched))
        .collect();
    let pairs_before = controller.session().unwrap().pairs_found();

    controller.toggle_language();
    controller.toggle_language();
    controller.toggle_language();

    let after: Vec<_> = controller
        .session()
        .unwrap()
        .cards()
        .iter()
        .map(|c| (c.pair_id, c.kind, c.flipped, c.matched))
        .collect();

    assert_eq!(before, after);
    assert_eq!(controller.session().unwrap().pairs_found(), pairs_before);
}

/// Test that the menu's language button flips the controller language.
#[test]
fn test_menu_language_button() {
    let mut controller = controller(42);
    assert_eq!(controller.language(), Language::Es);

    let lang_pos = controller.menu().buttons[1].rect.center();
    controller.handle_event(&click(lang_pos), 0);
    assert_eq!(controller.language(), Language::En);
    assert_eq!(controller.scene(), Scene::Menu);

    controller.handle_event(&click(lang_pos), 0);
    assert_eq!(controller.language(), Language::Es);
}
