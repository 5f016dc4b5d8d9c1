//! Scoring and elimination through the public controller API.
//!
//! These tests play short games the way a table would and check the
//! resulting score sheets, ball set, and elimination flags.

use pocket_tally::{BallAction, BallId, GameController, GameError, PlayerId};

fn ball(n: u8) -> BallId {
    BallId::new(n).unwrap()
}

fn two_player() -> GameController {
    let mut game = GameController::new();
    game.start_session(&["A", "B"]).unwrap();
    game
}

/// A pockets 3, B fouls 5 with the special ball gone, A pockets 15.
#[test]
fn test_two_player_scenario() {
    let mut game = two_player();

    game.apply_ball_action(0, BallId::SPECIAL, BallAction::Pocket).unwrap();
    let foul = game.apply_ball_action(1, ball(5), BallAction::Foul).unwrap();
    assert_eq!(foul.points, -5);
    game.apply_ball_action(0, ball(15), BallAction::Pocket).unwrap();

    let session = game.session().unwrap();
    let a = session.player(PlayerId::new(0));
    let b = session.player(PlayerId::new(1));

    assert_eq!(a.score, 21);
    assert_eq!(a.balls_pocketed.iter().map(|b| b.number()).collect::<Vec<_>>(), vec![3, 15]);
    assert_eq!(b.score, -5);
    assert_eq!(b.balls_fouled.iter().map(|b| b.number()).collect::<Vec<_>>(), vec![5]);

    let remaining: Vec<u8> = session.remaining_balls().iter().map(|b| b.number()).collect();
    assert_eq!(remaining, vec![4, 6, 7, 8, 9, 10, 11, 12, 13, 14]);
}

/// Any foul costs 4 while the special ball is on the table.
#[test]
fn test_flat_foul_penalty_while_special_on_table() {
    for n in 4..=15 {
        let mut game = two_player();
        let outcome = game.foul_current(ball(n)).unwrap();

        assert_eq!(outcome.points, -4, "ball {}", n);
        assert!(game.session().unwrap().is_on_table(ball(n)));
    }
}

/// After the special ball is pocketed, a foul costs the ball's number.
#[test]
fn test_full_foul_penalty_after_special_pocketed() {
    for n in 4..=15 {
        let mut game = two_player();
        game.pocket_current(BallId::SPECIAL).unwrap();
        let outcome = game.apply_ball_action(1, ball(n), BallAction::Foul).unwrap();

        assert_eq!(outcome.points, -(n as i32), "ball {}", n);
    }
}

/// Fouling the special ball costs 4 and leaves it on the table.
#[test]
fn test_special_ball_foul() {
    let mut game = two_player();

    let outcome = game.foul_current(BallId::SPECIAL).unwrap();

    assert_eq!(outcome.points, -4);
    let session = game.session().unwrap();
    assert!(session.special_ball_on_table());
    assert!(session.is_on_table(BallId::SPECIAL));

    // It can still be pocketed afterwards.
    assert_eq!(game.pocket_current(BallId::SPECIAL).unwrap().points, 6);
}

/// A pocketed ball cannot be pocketed or fouled again.
#[test]
fn test_pocketed_ball_is_gone() {
    let mut game = two_player();
    game.pocket_current(ball(10)).unwrap();
    let before = game.session().cloned();

    assert_eq!(game.pocket_current(ball(10)).unwrap_err(), GameError::InvalidBallState(ball(10)));
    assert_eq!(game.foul_current(ball(10)).unwrap_err(), GameError::InvalidBallState(ball(10)));
    assert_eq!(game.session().cloned(), before);
}

/// The trailing player is eliminated once the table can't close the gap,
/// and the turn skips them from then on.
#[test]
fn test_elimination_and_turn_skip() {
    let mut game = two_player();

    for n in [15, 14, 13, 12] {
        let outcome = game.pocket_current(ball(n)).unwrap();
        assert!(outcome.newly_eliminated.is_empty());
    }
    // A = 54, table = 66: B can still catch up.
    assert_eq!(game.session().unwrap().remaining_value(), 66);

    let outcome = game.pocket_current(ball(11)).unwrap();
    // A = 65, table = 55: B is out.
    assert_eq!(outcome.newly_eliminated.as_slice(), &[PlayerId::new(1)]);

    let view = game.view().unwrap();
    assert!(view.players[1].eliminated);
    assert_eq!(view.players[1].points_needed, 65);
    assert!(view.players[0].is_leading);

    assert_eq!(game.advance_turn().unwrap(), PlayerId::new(0));
    assert_eq!(game.select_player(1).unwrap_err(), GameError::PlayerEliminated(PlayerId::new(1)));
}

/// Three players: elimination of one leaves the other two rotating.
#[test]
fn test_three_player_rotation_after_elimination() {
    let mut game = GameController::new();
    game.start_session(&["A", "B", "C"]).unwrap();

    // C fouls twice with the special ball on (-8), A and B trade pockets.
    game.apply_ball_action(2, ball(4), BallAction::Foul).unwrap();
    game.apply_ball_action(2, ball(4), BallAction::Foul).unwrap();
    for (player, n) in [(0, 15), (1, 14), (0, 13), (1, 12), (0, 11), (1, 10)] {
        game.apply_ball_action(player, ball(n), BallAction::Pocket).unwrap();
    }

    // A = 39, B = 36, C = -8, table = 120 - 75 = 45 < 47.
    let session = game.session().unwrap();
    assert!(session.player(PlayerId::new(2)).eliminated);
    assert!(!session.player(PlayerId::new(1)).eliminated);

    assert_eq!(game.advance_turn().unwrap(), PlayerId::new(1));
    assert_eq!(game.advance_turn().unwrap(), PlayerId::new(0));
    assert_eq!(game.advance_turn().unwrap(), PlayerId::new(1));
}
