use holdem_cli::run_with_input;
use serial_test::serial;
use std::io::Cursor;

fn play(args: &[&str], input: &str) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let mut argv = vec!["holdem", "play"];
    argv.extend_from_slice(args);
    let code = run_with_input(argv, &mut stdin, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

const HEADS_UP: &[&str] = &[
    "--seed",
    "42",
    "--seats",
    "2",
    "--dealer",
    "1",
    "--settlement",
    "active-seats",
];

#[test]
#[serial]
fn bet_and_call_through_every_round() {
    // Seat 2 opens pre-flop; seat 1 opens every later round.
    let input = "bet 40\ncall\nbet 80\ncall 80\ncheck\ncheck\nallin 200\ncall\n";
    let (code, stdout, stderr) = play(HEADS_UP, input);
    assert_eq!(code, 0, "stderr={}", stderr);
    assert!(stdout.contains("Seat 2: bet 40"));
    assert!(stdout.contains("Seat 1: call 40"));
    assert!(stdout.contains("Seat 2: call 80"));
    assert!(stdout.contains("Seat 1: all-in 200"));
    assert!(stdout.contains("Seat 2: call 200"));
    assert!(stdout.contains("Hand complete: Showdown"));
    assert!(stderr.is_empty());
}

#[test]
#[serial]
fn wrong_call_amount_is_rejected_and_reprompted() {
    let (code, stdout, stderr) = play(HEADS_UP, "bet 40\ncall 10\ncall 40\nfold\n");
    assert_eq!(code, 0);
    assert!(stderr.contains("Error: Invalid action: Invalid amount for call"));
    // Seat 1 is asked twice pre-flop.
    assert_eq!(
        stdout
            .matches("Seat 1 to act (fold/call/raise/all-in)")
            .count(),
        2
    );
    assert!(stdout.contains("Seat 1: call 40"));
    assert!(stdout.contains("Hand complete: Seat 2 wins uncontested"));
}

#[test]
#[serial]
fn raise_must_exceed_the_current_bet() {
    let (code, _, stderr) = play(HEADS_UP, "bet 40\nraise 30\nraise 100\nq\n");
    assert_eq!(code, 130);
    assert!(stderr.contains("Invalid amount for raise"));
}

#[test]
#[serial]
fn json_snapshot_follows_each_action() {
    let mut args = HEADS_UP.to_vec();
    args.push("--json");
    let (code, stdout, _) = play(&args, "bet 40\nq\n");
    assert_eq!(code, 130);
    let start = stdout.find('{').expect("snapshot printed");
    let end = stdout.rfind('}').expect("snapshot closed");
    let json: serde_json::Value = serde_json::from_str(&stdout[start..=end]).unwrap();
    assert_eq!(json["round"], "preFlop");
    assert_eq!(json["actingSeat"], 1);
    assert_eq!(json["handComplete"], false);
    assert_eq!(json["deckRemaining"], 48);
    assert_eq!(
        json["ledger"]["preFlop"][0],
        serde_json::json!({"seat": 2, "action": "bet", "amount": 40})
    );
}

#[test]
#[serial]
fn strict_rule_is_the_default_and_warns() {
    let (code, _, stderr) = play(&["--seed", "1"], "q\n");
    assert_eq!(code, 130);
    assert!(stderr.contains("WARNING: strict settlement"));
}
