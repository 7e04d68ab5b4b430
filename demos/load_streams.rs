//! Load stream definitions from a simple key/value file
//!
//! Run with: cargo run --example load_streams [FILE]
//!
//! Each non-empty line has the form `<stream>.<attribute> = <value>`, and
//! lines starting with `#` are ignored. An empty value clears the setting.
//! Without FILE a built-in sample is used.
//!
//! Example:
//!   main.format = ogg
//!   main.mountpoint = /live.ogg
//!   main.public = yes
//!   Main.stream_genre = Jazz

use streamcfg::{ConfigContext, SharedStreamList, StreamAttribute, StreamList};

const SAMPLE: &str = "\
# sample configuration
main.format = ogg
main.mountpoint = /live.ogg
main.intake = playlist
main.server = icecast
main.public = yes
Main.stream_name = Late Night Jazz
main.stream_genre = Jazz
backup.format = mp3
backup.mountpoint = /backup.mp3
backup.encoder = lame
";

/// Apply every line of `source` to `streams`, reporting bad lines
fn load(streams: &mut StreamList, source: &str) -> usize {
    let mut errors = 0;

    for (lineno, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            eprintln!("line {}: expected <stream>.<attribute> = <value>", lineno + 1);
            errors += 1;
            continue;
        };
        let Some((name, attribute)) = key.trim().split_once('.') else {
            eprintln!("line {}: missing stream name", lineno + 1);
            errors += 1;
            continue;
        };

        let attribute = match attribute.parse::<StreamAttribute>() {
            Ok(attribute) => attribute,
            Err(e) => {
                eprintln!("line {}: {}", lineno + 1, e);
                errors += 1;
                continue;
            }
        };
        let Some(entry) = streams.get_or_create(Some(name)) else {
            eprintln!("line {}: missing stream name", lineno + 1);
            errors += 1;
            continue;
        };

        let value = value.trim();
        let value = (!value.is_empty()).then_some(value);
        if let Err(e) = entry.set(attribute, value) {
            eprintln!("line {}: {}: {}", lineno + 1, attribute, e);
            errors += 1;
        }
    }

    errors
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("streamcfg=debug".parse()?),
        )
        .init();

    let source = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => SAMPLE.to_owned(),
    };

    let ctx = ConfigContext::new().with_program_name("load_streams")?;
    let mut streams = StreamList::new(&ctx);

    let errors = load(&mut streams, &source);
    if errors > 0 {
        eprintln!("{} setting(s) rejected", errors);
        std::process::exit(1);
    }

    let shared = SharedStreamList::new(streams)?;
    let snapshot = shared.snapshot().await;

    println!("{} stream(s) configured", snapshot.len());
    for entry in snapshot.iter() {
        println!();
        println!("[{}]", entry.name());
        println!("  format:     {}", entry.format());
        println!("  mountpoint: {}", entry.mountpoint().unwrap_or("-"));
        println!("  intake:     {}", entry.intake().unwrap_or("-"));
        println!("  server:     {}", entry.server().unwrap_or("-"));
        println!("  encoder:    {}", entry.encoder().unwrap_or("(none)"));
        println!("  public:     {}", entry.public());
        if let Some(title) = entry.stream_name() {
            println!("  title:      {}", title);
        }
        if let Some(genre) = entry.stream_genre() {
            println!("  genre:      {}", genre);
        }
    }

    Ok(())
}
