use std::process::Command;

#[test]
fn sim_reports_every_game() {
    let exe = env!("CARGO_BIN_EXE_sim");
    let output = Command::new(exe)
        .args(["7", "3"])
        .output()
        .expect("failed to run sim");
    assert!(output.status.success());

    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("invalid json");
    assert_eq!(v["games"], 3);
    let reports = v["reports"].as_array().unwrap();
    assert_eq!(reports.len(), 3);
    let user_wins = v["user_wins"].as_u64().unwrap();
    let computer_wins = v["computer_wins"].as_u64().unwrap();
    assert_eq!(user_wins + computer_wins, 3);
    for (i, r) in reports.iter().enumerate() {
        assert_eq!(r["seed"], 7 + i as u64);
        let winner = r["winner"].as_str().unwrap();
        assert!(winner == "User" || winner == "Computer");
        assert_eq!(r[winner.to_lowercase()]["performance"], 100);
    }
}

#[test]
fn sim_is_reproducible() {
    let exe = env!("CARGO_BIN_EXE_sim");
    let run = || Command::new(exe).arg("99").output().unwrap().stdout;
    assert_eq!(run(), run());
}

#[test]
fn sim_requires_a_seed() {
    let exe = env!("CARGO_BIN_EXE_sim");
    let output = Command::new(exe).output().unwrap();
    assert!(!output.status.success());
}
