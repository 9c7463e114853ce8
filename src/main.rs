use clap::{crate_description, crate_name, crate_version, Arg, ArgAction, Command};

// The CLI layer should only parse inputs and forward them to library code.
fn main() {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .get_matches();

    let is_verbose = matches.get_flag("verbose");

    let default_level = if is_verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(error) = sapling::api::run() {
        // report the full diagnostic chain, then terminate normally
        eprintln!("{:?}", miette::Report::new(error));
    }
}
