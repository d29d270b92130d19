// Test runner: decodes its argv into a demo record and prints every field.

use gangopt::{store, Error, Opt, Parser, Positional, SetResult};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct Record {
    all: bool,
    verbose: u32,
    name: String,
    port: u16,
    color: String,
    include: Vec<String>,
    source: String,
    targets: Vec<String>,
}

fn set_color(record: &mut Record, value: &str) -> SetResult {
    match value {
        "always" | "never" | "auto" => {
            record.color = value.to_string();
            Ok(())
        }
        _ => Err("expected always, never or auto".to_string()),
    }
}

fn parser() -> gangopt::Result<Parser<Record>> {
    Parser::builder("optdump")
        .option(
            Opt::boolean(store::flag(|r: &mut Record| &mut r.all))
                .short('a')
                .long("all")
                .help("Show everything"),
        )
        .option(
            Opt::boolean(store::count(|r: &mut Record| &mut r.verbose))
                .short('v')
                .long("verbose")
                .help("More output (repeatable)"),
        )
        .option(
            Opt::direct(store::parse(|r: &mut Record| &mut r.name))
                .short('n')
                .long("name")
                .arg_name("NAME")
                .help("Name to use"),
        )
        .option(
            Opt::direct(store::parse(|r: &mut Record| &mut r.port))
                .short('p')
                .long("port")
                .arg_name("PORT")
                .help("Port number"),
        )
        .group("Output")
        .option(
            Opt::optional(set_color)
                .long("color")
                .alias("colour")
                .arg_name("WHEN")
                .implicit("always")
                .help("Colorize output"),
        )
        .option(
            Opt::list(store::push(|r: &mut Record| &mut r.include))
                .short('I')
                .long("include")
                .arg_name("DIR")
                .help("Directories to search"),
        )
        .positional(
            Positional::new()
                .arg("SOURCE", store::parse(|r: &mut Record| &mut r.source))
                .list("TARGET", store::push(|r: &mut Record| &mut r.targets)),
        )
        .auto_help()
        .build()
}

fn dump(record: &Record) {
    println!("all: {}", record.all);
    println!("verbose: {}", record.verbose);
    println!("name: {}", record.name);
    println!("port: {}", record.port);
    println!("color: {}", record.color);
    println!("include: {}", record.include.join(","));
    println!("source: {}", record.source);
    println!("targets: {}", record.targets.join(","));
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let parser = match parser() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("optdump: {}", e);
            std::process::exit(2);
        }
    };

    let mut record = Record::default();
    match parser.parse_env(&mut record) {
        Ok(()) => dump(&record),
        Err(e @ Error::Help(_)) => print!("{}", parser.report(&e)),
        Err(e) => {
            eprint!("{}", parser.report(&e));
            std::process::exit(1);
        }
    }
}
