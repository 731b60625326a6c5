use anyhow::Result;
use clap::{App, load_yaml};
use env_logger::Builder;
use log::info;
use log::LevelFilter::*;
use commatrix::compare::compare;
use commatrix::generate::generate;

fn main() -> Result<()> {
    let yaml = load_yaml!("args.yml");
    let ver  = env!("CARGO_PKG_VERSION");
    let args = App::from_yaml(&yaml).version(ver).get_matches();

    let verbose = match args.subcommand() {
        (_, Some(sub)) => sub.occurrences_of("verbose").max(args.occurrences_of("verbose")),
        (_, None)      => args.occurrences_of("verbose"),
    };

    let (module, level) = match verbose {
        0 => (Some(module_path!()), Info),
        1 => (Some(module_path!()), Debug),
        2 => (Some(module_path!()), Trace),
        _ => (None,                 Trace),
    };
    Builder::from_default_env().filter(module, level).init();

    info!("initializing commatrix {}", ver);

    match args.subcommand() {
        ("generate", Some(args)) => generate(args),
        ("diff",     Some(args)) => compare(args),
        _                        => unreachable!(),
    }
}
