//! Session integration tests.

use std::fs;

use bjsim::game::judge;
use bjsim::{
    Blackjack, Card, DECK_SIZE, Deck, GameOptions, Hand, LogEvent, Outcome, Rank, Role,
    RoundPhase, RunOutcome, ShuffleOptions, ShufflePlan, Suit,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn unshuffled() -> GameOptions {
    GameOptions::default().with_shuffle(ShufflePlan::Fixed(ShuffleOptions::default()))
}

/// A session whose deck deals exactly `draws`, in order.
fn stacked_game(wallet: usize, options: GameOptions, draws: &[Card]) -> Blackjack {
    let mut game = Blackjack::new(wallet, options, 1);
    *game.deck_mut() = Deck::from_cards(draws.to_vec());
    game
}

/// Player wins 21 to 17, then loses 16 to 19 (player stands at 15).
const WIN_THEN_LOSS: [Card; 8] = [
    card(Rank::Ten, Suit::Clubs),     // player
    card(Rank::Queen, Suit::Clubs),   // dealer
    card(Rank::Ace, Suit::Clubs),     // player
    card(Rank::Seven, Suit::Diamonds), // dealer hole
    card(Rank::Ten, Suit::Hearts),    // player
    card(Rank::Nine, Suit::Spades),   // dealer
    card(Rank::Six, Suit::Hearts),    // player
    card(Rank::King, Suit::Hearts),   // dealer hole
];

#[test]
fn calculate_score_through_session() {
    let mut hand = Hand::player();
    assert_eq!(Blackjack::calculate_score(&hand), 0);
    hand.add_card(card(Rank::Ace, Suit::Diamonds));
    hand.add_card(card(Rank::Jack, Suit::Spades));
    assert_eq!(Blackjack::calculate_score(&hand), 21);
}

#[test]
fn judge_follows_scoring_rules() {
    assert_eq!(judge(10, 12), Outcome::DealerWin);
    assert_eq!(judge(21, 21), Outcome::Tie);
    assert_eq!(judge(22, 23), Outcome::Tie);
    assert_eq!(judge(12, 2), Outcome::PlayerWin);
    assert_eq!(judge(22, 2), Outcome::DealerWin);
    assert_eq!(judge(2, 22), Outcome::PlayerWin);
    assert_eq!(judge(22, 21), Outcome::DealerWin);
    assert_eq!(judge(21, 25), Outcome::PlayerWin);
    assert_eq!(judge(25, 25), Outcome::Tie);
    assert_eq!(judge(18, 18), Outcome::Tie);
}

#[test]
fn determine_winner_settles_wallet_and_logs() {
    let mut game = Blackjack::new(10, GameOptions::default(), 1);

    let results: Vec<i8> = [(10, 12), (21, 21), (22, 23), (12, 2), (22, 2), (2, 22)]
        .into_iter()
        .map(|(player, dealer)| game.determine_winner(player, dealer).sign())
        .collect();
    assert_eq!(results, [-1, 0, 0, 1, -1, 1]);

    assert_eq!(
        game.get_log(),
        "Player lost with a score of 10. Dealer won with a score of 12.\n\
         Player and Dealer tie.\n\
         Player and Dealer tie.\n\
         Player won with a score of 12. Dealer lost with a score of 2.\n\
         Player lost with a score of 22. Dealer won with a score of 2.\n\
         Player won with a score of 2. Dealer lost with a score of 22.\n"
    );
    assert_eq!(game.wallet(), 5);
    assert_eq!(game.bet(), 10);

    game.reset_log();
    assert_eq!(game.get_log(), "");
    assert!(game.log_events().is_empty());
}

#[test]
fn loss_lowers_bet_to_floor() {
    let mut game = Blackjack::new(100, GameOptions::default(), 1);

    for _ in 0..3 {
        assert_eq!(game.determine_winner(21, 17), Outcome::PlayerWin);
    }
    assert_eq!(game.wallet(), 100 + 5 + 10 + 15);
    assert_eq!(game.bet(), 20);

    assert_eq!(game.determine_winner(15, 20), Outcome::DealerWin);
    assert_eq!(game.wallet(), 110);
    assert_eq!(game.bet(), 15);

    for _ in 0..5 {
        game.determine_winner(15, 20);
    }
    assert_eq!(game.bet(), 5);

    assert_eq!(game.determine_winner(19, 19), Outcome::Tie);
    assert_eq!(game.bet(), 5);
}

#[test]
fn unshuffled_deck_plays_out_until_broke() {
    let mut game = Blackjack::new(5, unshuffled(), 1);

    let outcome = game.play_round(5, 21).unwrap();

    assert_eq!(outcome, RunOutcome::InsufficientFunds);
    assert_eq!(
        game.get_log(),
        "Round 1 of Blackjack!\n\
         wallet: 5\n\
         bet: 5\n\
         Player Cards: (2, clubs) (2, hearts)\n\
         Dealer Cards: (2, diamonds) (?, ?)\n\
         Player pulled a (3, clubs)\n\
         Player pulled a (3, diamonds)\n\
         Player pulled a (3, hearts)\n\
         Player pulled a (3, spades)\n\
         Player pulled a (4, clubs)\n\
         Player pulled a (4, diamonds)\n\
         Dealer Cards Revealed: (2, diamonds) (2, spades)\n\
         Dealer pulled a (4, hearts)\n\
         Dealer pulled a (4, spades)\n\
         Dealer pulled a (5, clubs)\n\
         Player lost with a score of 24. Dealer won with a score of 17.\n\
         Wallet amount $0 is less than bet amount $5.\n"
    );
    assert_eq!(game.wallet(), 0);
    assert_eq!(game.deck().len(), DECK_SIZE - 13);
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.round(), 2);
}

#[test]
fn win_then_loss_moves_wallet_and_bet() {
    let mut game = stacked_game(10, unshuffled(), &WIN_THEN_LOSS);

    assert_eq!(game.play_round(1, 15).unwrap(), RunOutcome::Completed);
    assert_eq!(game.wallet(), 15);
    assert_eq!(game.bet(), 10);
    assert_eq!(
        game.get_log(),
        "Round 1 of Blackjack!\n\
         wallet: 10\n\
         bet: 5\n\
         Player Cards: (10, clubs) (A, clubs)\n\
         Dealer Cards: (Q, clubs) (?, ?)\n\
         Dealer Cards Revealed: (Q, clubs) (7, diamonds)\n\
         Player won with a score of 21. Dealer lost with a score of 17.\n"
    );

    // Every run restarts at the opening bet.
    game.reset_log();
    assert_eq!(game.play_round(1, 15).unwrap(), RunOutcome::Completed);
    assert_eq!(
        game.get_log(),
        "Round 2 of Blackjack!\n\
         wallet: 15\n\
         bet: 5\n\
         Player Cards: (10, hearts) (6, hearts)\n\
         Dealer Cards: (9, spades) (?, ?)\n\
         Dealer Cards Revealed: (9, spades) (K, hearts)\n\
         Player lost with a score of 16. Dealer won with a score of 19.\n"
    );
    assert_eq!(game.wallet(), 10);
    assert_eq!(game.bet(), 5);
    assert_eq!(game.phase(), RoundPhase::Settled);
}

#[test]
fn escalated_bet_carries_within_a_run() {
    let mut game = stacked_game(10, unshuffled(), &WIN_THEN_LOSS);

    assert_eq!(game.play_round(2, 15).unwrap(), RunOutcome::Completed);

    let history = game.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].outcome, Outcome::PlayerWin);
    assert_eq!(history[0].wallet, 15);
    assert_eq!(history[1].outcome, Outcome::DealerWin);
    assert_eq!((history[1].player_score, history[1].dealer_score), (16, 19));
    assert_eq!(history[1].wallet, 5);
    assert!(!history[1].dealer.has_hidden());

    assert!(game.get_log().contains("wallet: 15\nbet: 10\n"));
    assert_eq!(game.wallet(), 5);
    assert_eq!(game.bet(), 5);

    assert_eq!(game.play_round(1, 15).unwrap(), RunOutcome::NotEnoughCards);
}

#[test]
fn short_deck_ends_run_without_touching_wallet() {
    let draws = [
        card(Rank::Two, Suit::Clubs),
        card(Rank::Three, Suit::Clubs),
        card(Rank::Four, Suit::Clubs),
    ];
    let mut game = stacked_game(500, unshuffled(), &draws);

    assert_eq!(game.play_round(1, 17).unwrap(), RunOutcome::NotEnoughCards);
    assert_eq!(game.get_log(), "Not enough cards for a game.\n");
    assert_eq!(game.log_events(), [LogEvent::NotEnoughCards]);
    assert_eq!(game.wallet(), 500);
    assert_eq!(game.deck().len(), 3);
    assert!(game.history().is_empty());
}

#[test]
fn low_min_cards_still_needs_an_opening_deal() {
    let draws = [
        card(Rank::Two, Suit::Clubs),
        card(Rank::Three, Suit::Clubs),
        card(Rank::Four, Suit::Clubs),
    ];
    let mut game = stacked_game(10, unshuffled().with_min_cards(2), &draws);

    assert_eq!(game.play_round(1, 17).unwrap(), RunOutcome::NotEnoughCards);
    assert_eq!(game.get_log(), "Not enough cards for a game.\n");
    assert_eq!(game.phase(), RoundPhase::Idle);
    assert_eq!(game.round(), 1);
    assert_eq!(game.deck().len(), 3);
    assert!(game.player_hand().is_empty());
    assert!(game.dealer_hand().is_empty());
    assert_eq!(game.wallet(), 10);
}

#[test]
fn terminal_lines_stay_separate_across_runs() {
    let mut game = Blackjack::new(4, GameOptions::default(), 1);

    game.play_round(1, 17).unwrap();
    game.play_round(1, 17).unwrap();
    assert_eq!(
        game.get_log(),
        "Wallet amount $4 is less than bet amount $5.\n\
         Wallet amount $4 is less than bet amount $5.\n"
    );
}

#[test]
fn full_deck_eventually_runs_out() {
    let mut game = Blackjack::new(500, GameOptions::default(), 7);

    let outcome = game.play_round(13, 21).unwrap();
    assert_ne!(outcome, RunOutcome::InsufficientFunds);

    game.reset_log();
    let outcome = game.play_round(13, 21).unwrap();
    assert_eq!(outcome, RunOutcome::NotEnoughCards);
    assert!(game.get_log().ends_with("Not enough cards for a game.\n"));
}

#[test]
fn short_wallet_ends_run_before_dealing() {
    let mut game = Blackjack::new(4, GameOptions::default(), 1);

    assert_eq!(game.play_round(3, 17).unwrap(), RunOutcome::InsufficientFunds);
    assert_eq!(
        game.get_log(),
        "Wallet amount $4 is less than bet amount $5.\n"
    );
    assert_eq!(game.deck().len(), DECK_SIZE);
    assert_eq!(game.wallet(), 4);
    assert_eq!(game.phase(), RoundPhase::Idle);
    assert!(game.player_hand().is_empty());
}

#[test]
fn player_stops_drawing_when_deck_empties() {
    let draws = [
        card(Rank::Two, Suit::Clubs),     // player
        card(Rank::Ten, Suit::Diamonds),  // dealer
        card(Rank::Three, Suit::Clubs),   // player
        card(Rank::Nine, Suit::Diamonds), // dealer hole
    ];
    let mut game = stacked_game(10, unshuffled(), &draws);

    assert_eq!(game.play_round(1, 17).unwrap(), RunOutcome::Completed);
    assert!(
        !game
            .log_events()
            .iter()
            .any(|event| matches!(event, LogEvent::Pulled { .. }))
    );
    assert_eq!(game.player_hand().score(), 5);
    assert_eq!(game.dealer_hand().score(), 19);
    assert_eq!(game.wallet(), 5);
    assert!(game.deck().is_empty());
}

#[test]
fn dealer_stand_score_is_configurable() {
    let draws = [
        card(Rank::Ten, Suit::Clubs),    // player
        card(Rank::Ten, Suit::Hearts),   // dealer
        card(Rank::Nine, Suit::Clubs),   // player
        card(Rank::Seven, Suit::Hearts), // dealer hole
        card(Rank::Two, Suit::Spades),   // dealer hit
    ];
    let options = unshuffled().with_dealer_stand(18);
    let mut game = stacked_game(10, options, &draws);

    assert_eq!(game.play_round(1, 17).unwrap(), RunOutcome::Completed);
    assert_eq!(
        game.log_events().last(),
        Some(&LogEvent::Outcome {
            outcome: Outcome::Tie,
            player: 19,
            dealer: 19,
        })
    );
    assert!(game.get_log().contains("Dealer pulled a (2, spades)\n"));
    assert_eq!(game.dealer_hand().score(), 19);
    assert_eq!(game.history()[0].outcome, Outcome::Tie);
}

#[test]
fn hit_or_stand_uses_role_threshold() {
    let mut game = stacked_game(
        10,
        unshuffled(),
        &[
            card(Rank::Five, Suit::Clubs),
            card(Rank::Six, Suit::Clubs),
            card(Rank::Seven, Suit::Clubs),
        ],
    );

    game.hit_or_stand(Role::Player, 11).unwrap();
    assert_eq!(game.player_hand().score(), 11);
    assert_eq!(game.deck().len(), 1);
    assert_eq!(
        game.get_log(),
        "Player pulled a (5, clubs)\nPlayer pulled a (6, clubs)\n"
    );

    game.hit_or_stand(Role::Dealer, 0).unwrap();
    assert_eq!(game.dealer_hand().score(), 7);
    assert!(game.deck().is_empty());
}

#[test]
fn same_seed_replays_same_game() {
    let mut first = Blackjack::new(100, GameOptions::default(), 99);
    let mut second = Blackjack::new(100, GameOptions::default(), 99);

    first.play_round(4, 16).unwrap();
    second.play_round(4, 16).unwrap();

    assert_eq!(first.get_log(), second.get_log());
    assert_eq!(first.wallet(), second.wallet());
    assert!(second.game_number() > first.game_number());
}

#[test]
fn summary_file_appends_each_round() {
    let dir = tempfile::tempdir().unwrap();
    let summary_dir = dir.path().join("game_summaries");
    let options = unshuffled().with_summary_dir(&summary_dir);
    let mut game = stacked_game(10, options, &WIN_THEN_LOSS);

    assert_eq!(game.play_round(2, 15).unwrap(), RunOutcome::Completed);

    let path = game.summary_path().unwrap().to_path_buf();
    assert_eq!(
        path,
        summary_dir.join(format!("game_summary{}.txt", game.game_number()))
    );

    let contents = fs::read_to_string(&path).unwrap();
    let first_round = "ROUND 1:\n\
         Player Hand:\n\
         ____\n|10  |\n| ♣ |\n|__10|\n\
         ____\n|A  |\n| ♣ |\n|__A|\n\
         Dealer Hand:\n\
         ____\n|Q  |\n| ♣ |\n|__Q|\n\
         ____\n|7  |\n| ♦ |\n|__7|\n\
         Winner of ROUND 1: Player\n\n";
    assert!(contents.starts_with(first_round));
    assert!(contents[first_round.len()..].starts_with("ROUND 2:\nPlayer Hand:\n"));
    assert!(contents.ends_with("Winner of ROUND 2: Dealer\n\n"));
}

#[test]
fn no_summary_without_directory() {
    let mut game = stacked_game(10, unshuffled(), &WIN_THEN_LOSS);
    game.play_round(1, 15).unwrap();
    assert!(game.summary_path().is_none());
}
