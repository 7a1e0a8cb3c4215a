use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use gdsave_core::tag_tree::parse_tag_tree;
use gdsave_core::transport::{decode_transport, encode_transport};
use gdsave_core::{Tables, Value, decode};
use serde_json::Value as JsonValue;

const PLAINTEXT: &str = concat!(
    r#"<?xml version="1.0"?><plist version="1.0" gjver="2.0"><dict>"#,
    "<k>GS_value</k><d><k>1</k><s>88012</s><k>6</k><s>1204</s><k>unique_3_1</k><s>1</s></d>",
    "<k>GLM_03</k><d><k>128</k><d><k>kCEK</k><i>4</i><k>k7</k><i>3</i><k>k19</k><i>100</i></d>",
    "<k>129</k><d><k>kCEK</k><i>4</i><k>k19</k><i>12</i></d></d>",
    "<k>unlockValueKeeper</k><d><k>ugv_1</k><s>1</s></d>",
    "<k>playerName</k><s>RobTop</s>",
    "<k>playerUserID</k><i>16</i>",
    "<k>bgVolume</k><r>0.5</r>",
    "</dict></plist>"
);

fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_gdsave"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run gdsave CLI")
}

fn temp_path(prefix: &str, extension: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!(
        "{prefix}_{}_{}.{extension}",
        std::process::id(),
        nanos
    ))
}

fn write_fixture_save(prefix: &str) -> PathBuf {
    let path = temp_path(prefix, "dat");
    let bytes = encode_transport(PLAINTEXT).expect("fixture should encode");
    std::fs::write(&path, bytes).expect("fixture should be writable");
    path
}

fn path_arg(path: &PathBuf) -> String {
    path.to_string_lossy().to_string()
}

#[test]
fn show_prints_summary_sheet() {
    let save = write_fixture_save("gdsave_show");
    let output = run_cli(&["show", &path_arg(&save)]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Player: RobTop"));
    assert!(stdout.contains("88,012"));
    assert!(stdout.contains("onlineLevels"));

    let _ = std::fs::remove_file(save);
}

#[test]
fn show_prints_selected_fields_in_fixed_order() {
    let save = write_fixture_save("gdsave_fields");
    let output = run_cli(&["show", "--events", "--levels", "--stats", &path_arg(&save)]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "stat.jumps=88012",
            "stat.stars=1204",
            "coins=1",
            "levels.onlineLevels.count=2",
            "levels.onlineLevels.completed=1",
            "events=challengeUnlocked",
        ]
    );

    let _ = std::fs::remove_file(save);
}

#[test]
fn show_json_is_machine_readable() {
    let save = write_fixture_save("gdsave_show_json");
    let output = run_cli(&["show", "--json", &path_arg(&save)]);
    assert!(output.status.success());

    let value: JsonValue = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["player"]["name"], "RobTop");
    assert_eq!(value["stats"]["stars"], 1204);

    let _ = std::fs::remove_file(save);
}

#[test]
fn decode_then_encode_round_trips_through_json() {
    let save = write_fixture_save("gdsave_roundtrip");
    let json_path = temp_path("gdsave_roundtrip", "json");
    let rebuilt = temp_path("gdsave_roundtrip_out", "dat");

    let output = run_cli(&[
        "decode",
        &path_arg(&save),
        "--output",
        &path_arg(&json_path),
    ]);
    assert!(output.status.success());
    let text = std::fs::read_to_string(&json_path).expect("json output should exist");
    let value: JsonValue = serde_json::from_str(&text).expect("output should be JSON");
    assert_eq!(value["onlineLevels"]["128"]["difficulty"], "Hard");

    let output = run_cli(&[
        "encode",
        &path_arg(&json_path),
        "--output",
        &path_arg(&rebuilt),
        "--compression-level",
        "9",
    ]);
    assert!(output.status.success());

    let tables = Tables::global();
    let original = decode(&std::fs::read(&save).expect("save"), tables).expect("decode");
    let roundtrip = decode(&std::fs::read(&rebuilt).expect("rebuilt"), tables).expect("decode");
    assert_eq!(roundtrip, original);

    let _ = std::fs::remove_file(save);
    let _ = std::fs::remove_file(json_path);
    let _ = std::fs::remove_file(rebuilt);
}

#[test]
fn decode_plaintext_prints_the_tag_tree() {
    let save = write_fixture_save("gdsave_plaintext");
    let output = run_cli(&["decode", "--plaintext", &path_arg(&save)]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), PLAINTEXT);

    let _ = std::fs::remove_file(save);
}

#[test]
fn encode_plaintext_builds_a_container() {
    let input = temp_path("gdsave_plain_in", "xml");
    let output_path = temp_path("gdsave_plain_out", "dat");
    std::fs::write(&input, PLAINTEXT).expect("plaintext should be writable");

    let output = run_cli(&[
        "encode",
        "--plaintext",
        &path_arg(&input),
        "--output",
        &path_arg(&output_path),
    ]);
    assert!(output.status.success());

    let bytes = std::fs::read(&output_path).expect("container should exist");
    assert_eq!(decode_transport(&bytes).expect("decode"), PLAINTEXT);

    let _ = std::fs::remove_file(input);
    let _ = std::fs::remove_file(output_path);
}

#[test]
fn set_stat_writes_edited_copy() {
    let save = write_fixture_save("gdsave_set_stat");
    let edited = temp_path("gdsave_set_stat_out", "dat");

    let output = run_cli(&[
        "set-stat",
        &path_arg(&save),
        "--stat",
        "stars=2000",
        "--stat",
        "diamonds=50",
        "--output",
        &path_arg(&edited),
    ]);
    assert!(output.status.success());

    let document = decode(&std::fs::read(&edited).expect("edited"), Tables::global())
        .expect("edited save should decode");
    let stats = document["stats"].as_dict().expect("stats");
    assert_eq!(stats["stars"], Value::from("2000"));
    assert_eq!(stats["diamonds"], Value::from("50"));
    assert_eq!(stats["jumps"], Value::from("88012"));

    let _ = std::fs::remove_file(save);
    let _ = std::fs::remove_file(edited);
}

#[test]
fn set_stat_rejects_unknown_statistic() {
    let save = write_fixture_save("gdsave_bad_stat");
    let edited = temp_path("gdsave_bad_stat_out", "dat");

    let output = run_cli(&[
        "set-stat",
        &path_arg(&save),
        "--stat",
        "moons=3",
        "--output",
        &path_arg(&edited),
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("moons"));
    assert!(!edited.exists());

    let _ = std::fs::remove_file(save);
}

#[test]
fn usage_errors_exit_with_two() {
    let save = write_fixture_save("gdsave_usage");

    let output = run_cli(&["set-stat", &path_arg(&save), "--stat", "stars"]);
    assert_eq!(output.status.code(), Some(2));

    let output = run_cli(&["show", "--json", "--player", &path_arg(&save)]);
    assert_eq!(output.status.code(), Some(2));

    let output = run_cli(&["encode", &path_arg(&save)]);
    assert_eq!(output.status.code(), Some(2));

    let _ = std::fs::remove_file(save);
}

#[test]
fn unreadable_save_exits_with_one() {
    let missing = temp_path("gdsave_missing", "dat");
    let output = run_cli(&["show", &path_arg(&missing)]);
    assert_eq!(output.status.code(), Some(1));

    let garbage = temp_path("gdsave_garbage", "dat");
    std::fs::write(&garbage, b"not a save at all").expect("writable");
    let output = run_cli(&["show", &path_arg(&garbage)]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error parsing save file"));

    let _ = std::fs::remove_file(garbage);
}

#[test]
fn unlock_event_writes_ugv_codes() {
    let save = write_fixture_save("gdsave_unlock_event");
    let edited = temp_path("gdsave_unlock_event_out", "dat");

    let output = run_cli(&[
        "unlock-event",
        &path_arg(&save),
        "--event",
        "demonKey3",
        "--event",
        "youtubeChest",
        "--output",
        &path_arg(&edited),
    ]);
    assert!(output.status.success());

    let bytes = std::fs::read(&edited).expect("edited");
    let tree = parse_tag_tree(&decode_transport(&bytes).expect("transport")).expect("tag tree");
    let events = tree["unlockValueKeeper"].as_dict().expect("events");
    let mut keys: Vec<&str> = events.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["ugv_1", "ugv_16", "ugv_22"]);

    let output = run_cli(&[
        "unlock-event",
        &path_arg(&save),
        "--all",
        "--output",
        &path_arg(&edited),
    ]);
    assert!(output.status.success());
    let document = decode(&std::fs::read(&edited).expect("edited"), Tables::global())
        .expect("edited save should decode");
    assert_eq!(
        document["unlockValueKeeper"].as_dict().expect("events").len(),
        24
    );

    let _ = std::fs::remove_file(save);
    let _ = std::fs::remove_file(edited);
}

#[test]
fn unlock_icon_writes_internal_item_keys() {
    let save = write_fixture_save("gdsave_unlock_icon");
    let edited = temp_path("gdsave_unlock_icon_out", "dat");

    let output = run_cli(&[
        "unlock-icon",
        &path_arg(&save),
        "--kind",
        "wave",
        "--id",
        "12",
        "--output",
        &path_arg(&edited),
    ]);
    assert!(output.status.success());

    let bytes = std::fs::read(&edited).expect("edited");
    let tree = parse_tag_tree(&decode_transport(&bytes).expect("transport")).expect("tag tree");
    let items = tree["valueKeeper"].as_dict().expect("unlocked items");
    assert_eq!(items["dart_12"], Value::from("1"));
    assert_eq!(items.len(), 1);

    let output = run_cli(&[
        "unlock-icon",
        &path_arg(&save),
        "--kind",
        "trail",
        "--output",
        &path_arg(&edited),
    ]);
    assert!(output.status.success());
    let document = decode(&std::fs::read(&edited).expect("edited"), Tables::global())
        .expect("edited save should decode");
    let items = document["unlockedItems"].as_dict().expect("unlocked items");
    assert_eq!(items.len(), 6);
    assert!(items.contains_key("special_2"));
    assert!(items.contains_key("special_7"));

    let _ = std::fs::remove_file(save);
    let _ = std::fs::remove_file(edited);
}

#[test]
fn unlock_commands_reject_bad_input() {
    let save = write_fixture_save("gdsave_unlock_bad");
    let edited = temp_path("gdsave_unlock_bad_out", "dat");

    let output = run_cli(&[
        "unlock-icon",
        &path_arg(&save),
        "--kind",
        "trail",
        "--id",
        "8",
        "--output",
        &path_arg(&edited),
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!edited.exists());

    let output = run_cli(&[
        "unlock-event",
        &path_arg(&save),
        "--event",
        "moonKey",
        "--output",
        &path_arg(&edited),
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("moonKey"));

    let output = run_cli(&[
        "unlock-icon",
        &path_arg(&save),
        "--kind",
        "hat",
        "--output",
        &path_arg(&edited),
    ]);
    assert_eq!(output.status.code(), Some(2));

    let output = run_cli(&["unlock-event", &path_arg(&save), "--output", &path_arg(&edited)]);
    assert_eq!(output.status.code(), Some(2));
    assert!(!edited.exists());

    let _ = std::fs::remove_file(save);
}
