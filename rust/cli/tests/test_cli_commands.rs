use freecell_cli::run_with_input;
use serial_test::serial;
use std::io::Cursor;
use std::io::Write;

const ENV_KEYS: [&str; 4] = [
    "FREECELL_CONFIG",
    "FREECELL_SEED",
    "FREECELL_SHOW_MOVES",
    "FREECELL_SYMBOLS",
];

struct TempEnvVar {
    key: &'static str,
    previous: Option<String>,
}

impl TempEnvVar {
    fn set(key: &'static str, value: &str) -> Self {
        let previous = std::env::var(key).ok();
        unsafe { std::env::set_var(key, value) };
        Self { key, previous }
    }
}

impl Drop for TempEnvVar {
    fn drop(&mut self) {
        match &self.previous {
            Some(prev) => unsafe { std::env::set_var(self.key, prev) },
            None => unsafe { std::env::remove_var(self.key) },
        }
    }
}

fn clear_env() {
    for key in ENV_KEYS {
        unsafe { std::env::remove_var(key) };
    }
}

fn run(args: &[&str]) -> (i32, String, String) {
    let mut input = Cursor::new(Vec::new());
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run_with_input(args.iter().copied(), &mut input, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
fn help_lists_expected_commands() {
    let (code, out, _) = run(&["freecell", "--help"]);
    assert_eq!(code, 0);
    for cmd in ["deal", "play", "cfg"] {
        assert!(out.contains(cmd), "help should mention {}: {}", cmd, out);
    }
}

#[test]
fn missing_command_is_an_error() {
    let (code, out, err) = run(&["freecell"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Usage: freecell <command> [options]"));
}

#[test]
#[serial]
fn deal_prints_full_layout() {
    clear_env();
    let _symbols = TempEnvVar::set("FREECELL_SYMBOLS", "off");
    let (code, out, _) = run(&["freecell", "deal", "--seed", "2024"]);
    assert_eq!(code, 0);

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "Seed: 2024");
    assert_eq!(lines[1], "Free:  f1:-- f2:-- f3:-- f4:--");
    assert_eq!(lines[2], "Suits: s1:-- s2:-- s3:-- s4:--");
    for (i, line) in lines[3..11].iter().enumerate() {
        let expected = if i < 4 { 7 } else { 6 };
        assert!(line.starts_with(&format!("c{}: [", i + 1)));
        let cards = line.split_once('[').unwrap().1.trim_end_matches(']');
        assert_eq!(cards.split_whitespace().count(), expected, "{}", line);
    }
    assert_eq!(lines[11], "Moves available: 5");
}

#[test]
#[serial]
fn deal_json_holds_every_card_once() {
    clear_env();
    let (code, out, _) = run(&["freecell", "deal", "--seed", "5", "--json"]);
    assert_eq!(code, 0);

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let mut seen = std::collections::HashSet::new();
    for column in value["columns"].as_array().unwrap() {
        for card in column.as_array().unwrap() {
            assert!(seen.insert(card.to_string()), "duplicate card {}", card);
        }
    }
    assert_eq!(seen.len(), 52);
    assert!(value["selection"].as_array().unwrap().is_empty());
}

#[test]
#[serial]
fn seed_flag_beats_environment_and_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("freecell.toml");
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(f, "seed = 1\nshow_moves = false").unwrap();

    let _file = TempEnvVar::set("FREECELL_CONFIG", path.to_str().unwrap());
    let (_, from_file, _) = run(&["freecell", "deal"]);
    assert!(from_file.starts_with("Seed: 1\n"));
    assert!(!from_file.contains("Moves available"));

    let _seed = TempEnvVar::set("FREECELL_SEED", "2");
    let (_, from_env, _) = run(&["freecell", "deal"]);
    assert!(from_env.starts_with("Seed: 2\n"));

    let (_, from_flag, _) = run(&["freecell", "deal", "--seed", "3"]);
    assert!(from_flag.starts_with("Seed: 3\n"));
}

#[test]
#[serial]
fn cfg_reports_file_source() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("freecell.toml");
    std::fs::write(&path, "symbols = false\n").unwrap();
    let _file = TempEnvVar::set("FREECELL_CONFIG", path.to_str().unwrap());

    let (code, out, _) = run(&["freecell", "cfg"]);
    assert_eq!(code, 0);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["symbols"]["value"], false);
    assert_eq!(value["symbols"]["source"], "file");
    assert_eq!(value["seed"]["source"], "default");
}

#[test]
#[serial]
fn missing_config_file_fails() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let _file = TempEnvVar::set("FREECELL_CONFIG", path.to_str().unwrap());

    let (code, _, err) = run(&["freecell", "cfg"]);
    assert_eq!(code, 2);
    assert!(err.contains("Invalid configuration"));
}
