use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn hongbao() -> Command {
    Command::cargo_bin("hongbao").unwrap()
}

#[test]
fn test_handshake() {
    hongbao()
        .write_stdin("hongbao\nisready\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("id name Hongbao")
            .and(predicate::str::contains("hongbaook"))
            .and(predicate::str::contains("readyok")));
}

#[test]
fn test_normal_game_to_the_end() {
    hongbao()
        .write_stdin(
            "setoption name seed value 7\n\
             newgame fund 500000 packets 5 min 50000 max 200000\n\
             open 0\nopen 1\nopen 2\nopen 3\nopen 4\n\
             leaderboard\nquit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("newgame 5 envelopes 500.000 VND normal")
            .and(predicate::str::contains("reveal 4 "))
            .and(predicate::str::contains("info finished totalwon 500000"))
            .and(predicate::str::contains("entry 1 500000 0%")));
}

#[test]
fn test_challenge_asks_a_question() {
    hongbao()
        .write_stdin(
            "setoption name seed value 3\n\
             newgame fund 200000 packets 4 mode challenge\n\
             open 2\ndisplay\nquit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"question 2 (Easy|Medium|Hard) ").unwrap()
            .and(predicate::str::contains("choice 0 "))
            .and(predicate::str::contains("choice 3 ")));
}

#[test]
fn test_answer_reports_outcome() {
    hongbao()
        .write_stdin(
            "newgame fund 200000 packets 4 mode challenge\n\
             open 1\nanswer 0\namounts\nquit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("correct\nreveal 1 ")
            .or(predicate::str::contains("redistributed"))
            .and(predicate::str::contains("amounts ")));
}

#[test]
fn test_skip_leaves_envelope_closed() {
    hongbao()
        .write_stdin(
            "newgame fund 200000 packets 4 mode challenge\n\
             open 1\nskip\nopen 1\nquit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped 1"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_errors_are_reported_and_ignored() {
    hongbao()
        .write_stdin("bogus\nnewgame fund 1000 packets 5\nopen 0\nisready\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("readyok"))
        .stderr(predicate::str::contains("Unknown command: bogus")
            .and(predicate::str::contains("too small"))
            .and(predicate::str::contains("No game in progress")));
}

#[test]
fn test_strict_mode_stops_on_error() {
    hongbao()
        .write_stdin("setoption name strictmode value true\nbogus\nisready\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("readyok").not());
}

#[test]
fn test_leaderboard_file_is_written() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("board.json");

    hongbao()
        .write_stdin(format!(
            "setoption name leaderboard value {}\n\
             newgame fund 100000 packets 2\n\
             open 0\nopen 1\nquit\n",
            path.display()
        ))
        .assert()
        .success();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"totalWon\": 100000"));
}
