use holdem_engine::errors::GameError;
use holdem_engine::random::{RandomSource, SeededRandom};
use holdem_engine::table::{assign_roles, choose_dealer, seats, Seat};

struct Fixed(f64);

impl RandomSource for Fixed {
    fn next_float(&mut self) -> f64 {
        self.0
    }
}

#[test]
fn six_seat_table_with_dealer_zero() {
    let roles = assign_roles(6, 0, 40).unwrap();
    assert_eq!(roles.dealer.seat.index(), 0);
    assert_eq!(roles.small_blind.seat.index(), 1);
    assert_eq!(roles.big_blind.seat.index(), 2);
    // displayed 1-indexed
    assert_eq!(roles.dealer.seat.to_string(), "Seat 1");
    assert_eq!(roles.big_blind.seat.to_string(), "Seat 3");
}

#[test]
fn blind_amounts_follow_the_big_blind() {
    let roles = assign_roles(6, 3, 40).unwrap();
    assert_eq!(roles.dealer.amount, 0);
    assert_eq!(roles.small_blind.amount, 20);
    assert_eq!(roles.big_blind.amount, 40);
}

#[test]
fn roles_are_circular_for_every_dealer() {
    for dealer in 0..6 {
        let roles = assign_roles(6, dealer, 40).unwrap();
        assert_eq!(roles.small_blind.seat, Seat::new((dealer + 1) % 6));
        assert_eq!(roles.big_blind.seat, Seat::new((dealer + 2) % 6));
    }
}

#[test]
fn assign_roles_is_pure() {
    assert_eq!(assign_roles(5, 2, 100), assign_roles(5, 2, 100));
}

#[test]
fn invalid_tables_are_rejected() {
    assert!(matches!(assign_roles(0, 0, 40), Err(GameError::InvalidTable(_))));
    assert!(matches!(assign_roles(11, 0, 40), Err(GameError::InvalidTable(_))));
    assert!(matches!(assign_roles(4, 4, 40), Err(GameError::InvalidTable(_))));
}

#[test]
fn dealer_pick_uses_the_random_source() {
    assert_eq!(choose_dealer(6, &mut Fixed(0.0)).unwrap(), 0);
    assert_eq!(choose_dealer(6, &mut Fixed(0.5)).unwrap(), 3);
    assert_eq!(choose_dealer(6, &mut Fixed(0.99)).unwrap(), 5);

    let mut rng = SeededRandom::new_with_seed(11);
    for _ in 0..100 {
        assert!(choose_dealer(6, &mut rng).unwrap() < 6);
    }
}

#[test]
fn seats_are_listed_in_table_order() {
    let numbers: Vec<usize> = seats(4).into_iter().map(Seat::number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4]);
}
