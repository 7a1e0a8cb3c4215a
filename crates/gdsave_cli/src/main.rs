use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};
use gdsave_core::Compression;
use gdsave_core::core_api::{Engine, IconKind, Session, Snapshot};
use gdsave_core::transport::{decode_transport, encode_transport_with};
use gdsave_render::{
    document_from_json, render_json_full, render_json_snapshot, render_summary_sheet,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const UNKNOWN: &str = "unknown";

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Log codec stages to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a summary of a save.
    Show(ShowArgs),
    /// Write a save as readable JSON, or as its decoded plaintext.
    Decode(DecodeArgs),
    /// Build a save from readable JSON, or from plaintext.
    Encode(EncodeArgs),
    /// Change statistics in a save.
    SetStat(SetStatArgs),
    /// Mark story events as unlocked.
    UnlockEvent(UnlockEventArgs),
    /// Unlock icons.
    UnlockIcon(UnlockIconArgs),
}

#[derive(Debug, Args)]
struct ShowArgs {
    #[arg(value_name = "SAVE")]
    path: PathBuf,
    #[arg(long, conflicts_with_all = ["player", "stats", "levels", "events"])]
    json: bool,
    #[arg(long)]
    player: bool,
    #[arg(long)]
    stats: bool,
    #[arg(long)]
    levels: bool,
    #[arg(long)]
    events: bool,
}

#[derive(Debug, Args)]
struct DecodeArgs {
    #[arg(value_name = "SAVE")]
    path: PathBuf,
    #[arg(long)]
    plaintext: bool,
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct EncodeArgs {
    #[arg(value_name = "INPUT")]
    path: PathBuf,
    #[arg(long)]
    output: PathBuf,
    #[arg(long)]
    plaintext: bool,
    #[arg(
        long = "compression-level",
        value_name = "0-9",
        value_parser = clap::value_parser!(u32).range(0..=9)
    )]
    compression_level: Option<u32>,
}

#[derive(Debug, Args)]
struct SetStatArgs {
    #[arg(value_name = "SAVE")]
    path: PathBuf,
    #[arg(
        long = "stat",
        value_name = "NAME=VALUE",
        required = true,
        allow_hyphen_values = true,
        value_parser = parse_stat_assignment
    )]
    stats: Vec<(String, i64)>,
    #[arg(long)]
    output: PathBuf,
}

#[derive(Debug, Args)]
struct UnlockEventArgs {
    #[arg(value_name = "SAVE")]
    path: PathBuf,
    #[arg(
        long = "event",
        value_name = "NAME",
        required_unless_present = "all",
        conflicts_with = "all"
    )]
    events: Vec<String>,
    #[arg(long)]
    all: bool,
    #[arg(long)]
    output: PathBuf,
}

#[derive(Debug, Args)]
struct UnlockIconArgs {
    #[arg(value_name = "SAVE")]
    path: PathBuf,
    #[arg(
        long,
        value_name = "cube|ship|ball|ufo|wave|robot|spider|trail|death",
        value_parser = parse_icon_kind,
        required_unless_present = "all",
        conflicts_with = "all"
    )]
    kind: Option<IconKind>,
    #[arg(long, requires = "kind")]
    id: Option<u32>,
    #[arg(long)]
    all: bool,
    #[arg(long)]
    output: PathBuf,
}

#[derive(Debug, Default, Clone, Copy)]
struct FieldSelection {
    player: bool,
    stats: bool,
    levels: bool,
    events: bool,
}

impl FieldSelection {
    fn from_args(args: &ShowArgs) -> Self {
        Self {
            player: args.player,
            stats: args.stats,
            levels: args.levels,
            events: args.events,
        }
    }

    fn is_field_mode(&self) -> bool {
        self.player || self.stats || self.levels || self.events
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Show(args) => show(&args),
        Command::Decode(args) => decode(&args),
        Command::Encode(args) => encode(&args),
        Command::SetStat(args) => set_stat(&args),
        Command::UnlockEvent(args) => unlock_event(&args),
        Command::UnlockIcon(args) => unlock_icon(&args),
    }
}

fn init_tracing(verbose: bool) {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if verbose && let Ok(directive) = "gdsave_core=debug".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn show(args: &ShowArgs) {
    let session = open_session(&Engine::new(), &args.path);
    let snapshot = session.snapshot();
    let fields = FieldSelection::from_args(args);

    if args.json {
        print_json(&render_json_snapshot(&snapshot));
    } else if fields.is_field_mode() {
        for line in field_lines(&snapshot, fields) {
            println!("{line}");
        }
    } else {
        print!("{}", render_summary_sheet(&snapshot));
    }
}

fn decode(args: &DecodeArgs) {
    let bytes = read_input(&args.path);
    let text = if args.plaintext {
        decode_transport(&bytes).unwrap_or_else(|e| {
            eprintln!("Error decoding save file: {}", args.path.display());
            eprintln!("  {e}");
            process::exit(1);
        })
    } else {
        let document = Engine::new().decode_bytes(bytes).unwrap_or_else(|e| {
            eprintln!("Error parsing save file: {}", args.path.display());
            eprintln!("  {e}");
            process::exit(1);
        });
        let mut text = to_pretty_json(&render_json_full(&document));
        text.push('\n');
        text
    };

    match &args.output {
        Some(path) => write_output(path, text.as_bytes()),
        None => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = stdout.write_all(text.as_bytes()) {
                eprintln!("Error writing to stdout: {e}");
                process::exit(1);
            }
        }
    }
}

fn encode(args: &EncodeArgs) {
    let level = args
        .compression_level
        .map_or_else(Compression::default, Compression::new);
    let engine = Engine::new().with_compression(level);

    let input = fs::read_to_string(&args.path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {e}", args.path.display());
        process::exit(1);
    });

    let bytes = if args.plaintext {
        encode_transport_with(&input, level).unwrap_or_else(|e| {
            eprintln!("Error encoding plaintext: {e}");
            process::exit(1);
        })
    } else {
        let document = serde_json::from_str(&input)
            .and_then(document_from_json)
            .unwrap_or_else(|e| {
                eprintln!("Error parsing JSON document: {}", args.path.display());
                eprintln!("  {e}");
                process::exit(1);
            });
        engine.encode_document(&document).unwrap_or_else(|e| {
            eprintln!("Error encoding save: {e}");
            process::exit(1);
        })
    };

    write_output(&args.output, &bytes);
}

fn set_stat(args: &SetStatArgs) {
    let mut session = open_session(&Engine::new(), &args.path);

    for (name, value) in &args.stats {
        session.set_stat(name, *value).unwrap_or_else(|e| {
            eprintln!("Error applying stat edit {name}={value}: {e}");
            process::exit(1);
        });
    }

    save_session(&session, &args.output);
}

fn unlock_event(args: &UnlockEventArgs) {
    let mut session = open_session(&Engine::new(), &args.path);

    if args.all {
        session.unlock_all_events().unwrap_or_else(|e| {
            eprintln!("Error unlocking events: {e}");
            process::exit(1);
        });
    }
    for name in &args.events {
        session.unlock_event(name).unwrap_or_else(|e| {
            eprintln!("Error unlocking event {name}: {e}");
            process::exit(1);
        });
    }

    save_session(&session, &args.output);
}

fn unlock_icon(args: &UnlockIconArgs) {
    let mut session = open_session(&Engine::new(), &args.path);

    let result = match (args.kind, args.id) {
        (Some(kind), Some(id)) => session.unlock_icon(kind, id),
        (Some(kind), None) => session.unlock_icon_kind(kind),
        (None, _) => session.unlock_all_icons(),
    };
    if let Err(e) = result {
        eprintln!("Error unlocking icons: {e}");
        process::exit(1);
    }

    save_session(&session, &args.output);
}

fn save_session(session: &Session, output: &Path) {
    let bytes = session.to_bytes().unwrap_or_else(|e| {
        eprintln!("Error encoding save: {e}");
        process::exit(1);
    });
    write_output(output, &bytes);
}

fn open_session(engine: &Engine<'static>, path: &Path) -> Session<'static> {
    let bytes = read_input(path);
    engine.open_bytes(bytes).unwrap_or_else(|e| {
        eprintln!("Error parsing save file: {}", path.display());
        eprintln!("  {e}");
        process::exit(1);
    })
}

fn read_input(path: &Path) -> Vec<u8> {
    let bytes = fs::read(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {e}", path.display());
        process::exit(1);
    });
    debug!(path = %path.display(), len = bytes.len(), "read input");
    bytes
}

fn write_output(path: &Path, bytes: &[u8]) {
    if let Err(e) = fs::write(path, bytes) {
        eprintln!("Error writing {}: {e}", path.display());
        process::exit(1);
    }
    debug!(path = %path.display(), len = bytes.len(), "wrote output");
}

fn print_json(value: &serde_json::Value) {
    println!("{}", to_pretty_json(value));
}

fn to_pretty_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Error serializing JSON: {e}");
        process::exit(1);
    })
}

fn field_lines(snapshot: &Snapshot, fields: FieldSelection) -> Vec<String> {
    let mut lines = Vec::new();

    if fields.player {
        lines.push(format!(
            "player_name={}",
            snapshot.player_name.as_deref().unwrap_or(UNKNOWN)
        ));
        lines.push(format!("player_id={}", optional(snapshot.player_id)));
        lines.push(format!(
            "username={}",
            snapshot.username.as_deref().unwrap_or(UNKNOWN)
        ));
        lines.push(format!("account_id={}", optional(snapshot.account_id)));
        lines.push(format!("bootups={}", optional(snapshot.bootups)));
    }
    if fields.stats {
        for stat in &snapshot.stats {
            lines.push(format!("stat.{}={}", stat.name, stat.value));
        }
        lines.push(format!("coins={}", snapshot.collected_coin_flags));
    }
    if fields.levels {
        for entry in &snapshot.levels {
            lines.push(format!("levels.{}.count={}", entry.collection, entry.count));
            lines.push(format!(
                "levels.{}.completed={}",
                entry.collection, entry.completed
            ));
        }
    }
    if fields.events {
        lines.push(format!("events={}", snapshot.unlocked_events.join(",")));
    }
    lines
}

fn optional(value: Option<i64>) -> String {
    value.map_or_else(|| UNKNOWN.to_string(), |v| v.to_string())
}

fn parse_stat_assignment(value: &str) -> Result<(String, i64), String> {
    let (name, number) = value
        .split_once('=')
        .ok_or_else(|| format!("invalid stat '{value}', expected NAME=VALUE"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("invalid stat '{value}', missing name"));
    }
    let number = number
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid value for stat '{name}': {e}"))?;
    Ok((name.to_string(), number))
}

fn parse_icon_kind(value: &str) -> Result<IconKind, String> {
    IconKind::from_name(&value.to_ascii_lowercase()).ok_or_else(|| {
        let names: Vec<&str> = IconKind::ALL.iter().map(|kind| kind.name()).collect();
        format!(
            "invalid icon kind '{value}', expected one of: {}",
            names.join(", ")
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_assignment_splits_name_and_value() {
        assert_eq!(
            parse_stat_assignment("stars=120"),
            Ok(("stars".to_string(), 120))
        );
        assert_eq!(
            parse_stat_assignment(" jumps = -1 "),
            Ok(("jumps".to_string(), -1))
        );
        assert!(parse_stat_assignment("stars").is_err());
        assert!(parse_stat_assignment("=5").is_err());
        assert!(parse_stat_assignment("stars=many").is_err());
    }

    #[test]
    fn icon_kind_accepts_menu_names() {
        assert_eq!(parse_icon_kind("ufo"), Ok(IconKind::Ufo));
        assert_eq!(parse_icon_kind("Wave"), Ok(IconKind::Wave));
        assert!(parse_icon_kind("bird").is_err());
    }

    #[test]
    fn field_lines_follow_fixed_order() {
        let snapshot = Snapshot {
            player_name: Some("RobTop".to_string()),
            player_id: Some(16),
            username: None,
            account_id: None,
            bootups: Some(2),
            stats: Vec::new(),
            collected_coin_flags: 0,
            levels: Vec::new(),
            unlocked_events: vec!["demonKey1".to_string(), "demonKey2".to_string()],
        };
        let fields = FieldSelection {
            player: true,
            events: true,
            ..FieldSelection::default()
        };
        assert_eq!(
            field_lines(&snapshot, fields),
            vec![
                "player_name=RobTop",
                "player_id=16",
                "username=unknown",
                "account_id=unknown",
                "bootups=2",
                "events=demonKey1,demonKey2",
            ]
        );
    }
}
