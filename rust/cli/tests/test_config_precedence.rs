use keno_cli::run;
use serde_json::Value;
use serial_test::serial;
use std::io::Write;

const KEYS: &[&str] = &[
    "KENO_CONFIG",
    "KENO_BANKROLL",
    "KENO_CARDS",
    "KENO_BET",
    "KENO_PRESET",
    "KENO_SEED",
];

fn clear_env() {
    for key in KEYS {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

fn run_capture(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn write_config(body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    clear_env();
    let (code, out, _) = run_capture(&["keno", "cfg"]);
    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["starting_bankroll"]["value"], 1000);
    assert_eq!(json["starting_bankroll"]["source"], "default");
    assert_eq!(json["preset"]["value"], "Fun");
    assert!(json["seed"]["value"].is_null());
}

#[test]
#[serial]
fn env_overrides_file() {
    clear_env();
    let file = write_config("cards = 3\nbet_per_card = 2\npreset = \"casino-ish\"\nseed = 5\n");
    unsafe {
        std::env::set_var("KENO_CONFIG", file.path());
        std::env::set_var("KENO_BET", "10");
    }
    let (code, out, _) = run_capture(&["keno", "cfg"]);
    clear_env();
    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["cards"]["value"], 3);
    assert_eq!(json["cards"]["source"], "file");
    assert_eq!(json["bet_per_card"]["value"], 10);
    assert_eq!(json["bet_per_card"]["source"], "env");
    assert_eq!(json["preset"]["value"], "Casino-ish");
    assert_eq!(json["seed"]["value"], 5);
}

#[test]
#[serial]
fn flags_override_config_in_play() {
    clear_env();
    let file = write_config("cards = 3\nbet_per_card = 2\nseed = 8\n");
    unsafe {
        std::env::set_var("KENO_CONFIG", file.path());
    }
    let (code, out, err) = run_capture(&["keno", "play", "--bet", "5", "--auto", "1"]);
    clear_env();
    assert_eq!(code, 0, "{}", err);
    assert!(out.starts_with("play: cards=3 bet=5 preset=Fun"));
}

#[test]
#[serial]
fn invalid_env_value_is_reported() {
    clear_env();
    unsafe {
        std::env::set_var("KENO_BET", "3");
    }
    let (code, _, err) = run_capture(&["keno", "cfg"]);
    clear_env();
    assert_eq!(code, 2);
    assert!(err.contains("Invalid configuration"));
}

#[test]
#[serial]
fn configured_seed_makes_sim_reproducible() {
    clear_env();
    unsafe {
        std::env::set_var("KENO_SEED", "99");
    }
    let (_, first, _) = run_capture(&["keno", "sim", "--rounds", "20"]);
    let (_, second, _) = run_capture(&["keno", "sim", "--rounds", "20"]);
    clear_env();
    assert_eq!(first, second);
    let json: Value = serde_json::from_str(&first).unwrap();
    assert_eq!(json["seed"], 99);
}

fn drawn_line(out: &str) -> String {
    out.lines()
        .find(|l| l.starts_with("Drawn: "))
        .unwrap()
        .to_string()
}

#[test]
#[serial]
fn configured_seed_does_not_fix_play_draws() {
    clear_env();
    unsafe {
        std::env::set_var("KENO_SEED", "5");
    }
    let (code_a, first, _) = run_capture(&["keno", "play", "--auto", "1"]);
    let (code_b, second, _) = run_capture(&["keno", "play", "--auto", "1"]);
    clear_env();
    assert_eq!((code_a, code_b), (0, 0));
    assert_ne!(drawn_line(&first), drawn_line(&second));
}
