use super::*;
use crate::error::ErrorKind;
use crate::secret::{FixedSecretSource, ThreadSecretSource};

fn active_session(limit: &str, secret: u32) -> Session {
    let mut session = Session::new();
    session
        .start_round(limit, &mut FixedSecretSource::always(secret))
        .expect("round starts");
    session
}

fn play_to_win(session: &mut Session, limit: &str, secret: u32, misses: &[&str]) -> Win {
    session
        .start_round(limit, &mut FixedSecretSource::always(secret))
        .expect("round starts");
    for miss in misses {
        let outcome = session.submit_guess(miss).expect("valid miss");
        assert!(!matches!(outcome, GuessOutcome::Won(_)), "{miss} should miss");
    }
    match session.submit_guess(&secret.to_string()).expect("valid hit") {
        GuessOutcome::Won(win) => win,
        other => panic!("expected a win, got {other:?}"),
    }
}

#[test]
fn new_session_is_idle_and_empty() {
    let session = Session::new();
    assert_eq!(session.phase(), Phase::Idle);
    assert_eq!(session.secret(), None);
    assert_eq!(session.attempts(), 0);
    assert_eq!(session.best(), None);
    assert_eq!(session.limit(), 0);
}

#[test]
fn start_round_at_minimum_limit_draws_in_range() {
    let mut session = Session::new();
    let started = session
        .start_round("10", &mut ThreadSecretSource)
        .expect("10 is a valid limit");
    assert_eq!(started, RoundStarted { limit: 10 });
    assert_eq!(session.phase(), Phase::Active);
    let secret = session.secret().expect("secret set");
    assert!((1..=10).contains(&secret));
    assert_eq!(session.attempts(), 0);
}

#[test]
fn start_round_rejects_bad_limits_without_mutation() {
    let cases = [
        ("9", ErrorKind::RangeTooSmall),
        ("-1", ErrorKind::InvalidFormat),
        ("abc", ErrorKind::InvalidFormat),
        ("", ErrorKind::InvalidFormat),
        ("99999999999", ErrorKind::InvalidFormat),
    ];
    for (raw, kind) in cases {
        let mut session = active_session("50", 17);
        session.submit_guess("3").expect("valid guess");
        let before = session.clone();

        let err = session
            .start_round(raw, &mut FixedSecretSource::always(5))
            .expect_err("limit must be rejected");
        assert_eq!(err.kind(), kind, "{raw:?}");
        assert_eq!(session, before, "{raw:?} mutated the session");
    }
}

#[test]
fn range_too_small_reports_parsed_limit() {
    let mut session = Session::new();
    let err = session
        .start_round(" 9 ", &mut ThreadSecretSource)
        .expect_err("9 is too small");
    assert_eq!(err, GameError::RangeTooSmall { limit: 9 });
    assert_eq!(session, Session::new());
}

#[test]
fn guess_before_any_round_is_no_active_round() {
    let mut session = Session::new();
    assert_eq!(session.submit_guess("5"), Err(GameError::NoActiveRound));
    assert_eq!(session.attempts(), 0);
}

#[test]
fn invalid_guesses_never_count() {
    let mut session = active_session("50", 17);
    for raw in ["abc", "0", "51", "-3", "", "99999999999"] {
        assert!(session.submit_guess(raw).is_err(), "{raw:?} accepted");
    }
    assert_eq!(session.attempts(), 0);
    assert_eq!(session.phase(), Phase::Active);
    assert_eq!(
        session.submit_guess("51"),
        Err(GameError::OutOfRange { limit: 50 })
    );
    assert_eq!(
        session.submit_guess("abc"),
        Err(GameError::InvalidFormat(LiteralError::NotANumber))
    );
}

#[test]
fn scripted_round_reports_direction_then_wins() {
    let mut session = active_session("50", 17);

    assert_eq!(
        session.submit_guess("25"),
        Ok(GuessOutcome::Smaller { attempts: 1 })
    );
    assert_eq!(
        session.submit_guess("10"),
        Ok(GuessOutcome::Bigger { attempts: 2 })
    );
    assert_eq!(
        session.submit_guess("17"),
        Ok(GuessOutcome::Won(Win {
            secret: 17,
            attempts: 3,
            best: 3,
            new_best: true,
        }))
    );
    assert_eq!(session.phase(), Phase::Idle);
    assert_eq!(session.best(), Some(3));
    assert_eq!(session.limit(), 50);
    assert_eq!(session.submit_guess("17"), Err(GameError::NoActiveRound));
}

#[test]
fn bounds_of_the_range_are_valid_guesses() {
    let mut session = active_session("10", 5);
    assert_eq!(
        session.submit_guess("1"),
        Ok(GuessOutcome::Bigger { attempts: 1 })
    );
    assert_eq!(
        session.submit_guess("10"),
        Ok(GuessOutcome::Smaller { attempts: 2 })
    );
}

#[test]
fn best_only_improves_across_rounds() {
    let mut session = Session::new();

    let first = play_to_win(&mut session, "50", 17, &["1", "2"]);
    assert_eq!((first.attempts, first.best, first.new_best), (3, 3, true));

    let second = play_to_win(&mut session, "50", 30, &["1"]);
    assert_eq!((second.attempts, second.best, second.new_best), (2, 2, true));

    let third = play_to_win(&mut session, "50", 40, &["1", "2", "3", "4"]);
    assert_eq!((third.attempts, third.best, third.new_best), (5, 2, false));
    assert_eq!(session.best(), Some(2));
}

#[test]
fn restarting_an_active_round_resets_attempts_and_keeps_best() {
    let mut session = Session::new();
    play_to_win(&mut session, "20", 4, &[]);
    assert_eq!(session.best(), Some(1));

    session
        .start_round("30", &mut FixedSecretSource::always(9))
        .expect("first round");
    session.submit_guess("1").expect("valid");
    session.submit_guess("2").expect("valid");
    assert_eq!(session.attempts(), 2);

    session
        .start_round("100", &mut FixedSecretSource::always(60))
        .expect("restart");
    assert_eq!(session.attempts(), 0);
    assert_eq!(session.limit(), 100);
    assert_eq!(session.secret(), Some(60));
    assert_eq!(session.best(), Some(1));
}

#[test]
fn attempts_count_every_valid_guess_until_the_win() {
    let mut session = Session::new();
    let mut source = ThreadSecretSource;
    session.start_round("64", &mut source).expect("round starts");

    let (mut low, mut high) = (1u32, 64u32);
    let mut valid = 0;
    loop {
        let guess = low + (high - low) / 2;
        valid += 1;
        match session.submit_guess(&guess.to_string()).expect("valid") {
            GuessOutcome::Bigger { attempts } => {
                assert_eq!(attempts, valid);
                low = guess + 1;
            }
            GuessOutcome::Smaller { attempts } => {
                assert_eq!(attempts, valid);
                high = guess - 1;
            }
            GuessOutcome::Won(win) => {
                assert_eq!(win.secret, guess);
                assert_eq!(win.attempts, valid);
                break;
            }
        }
        // Rejected input interleaved with valid guesses does not count.
        let _ = session.submit_guess("nope");
        assert_eq!(session.attempts(), valid);
    }
    assert!(valid <= 7);
}
