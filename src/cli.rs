use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

pub fn build_cli() -> Command {
    Command::new("m3uclean")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Fetch an M3U playlist, drop radio channels and renumber the rest")
        .long_about(
            "Fetch an M3U playlist, drop radio channels and renumber the rest\n\n\
             Entries whose group-title contains a denylisted keyword are removed,\n\
             comment and directive lines are dropped, and every remaining entry\n\
             gets a sequential channel-number attribute.\n\n\
             EXAMPLE:\n    m3uclean http://example.com/playlist.m3u ./kodi.m3u8",
        )
        .arg(
            Arg::new("url")
                .help("URL of the source playlist")
                .value_name("URL")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Path of the playlist file to write")
                .value_name("OUTPUT")
                .required(true)
                .index(2)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Read settings from this JSON file instead of the default location")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("keyword")
                .short('k')
                .long("keyword")
                .value_name("KEYWORD")
                .help("Category keyword to filter out (repeatable, replaces the configured list)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECONDS")
                .help("Fetch timeout in seconds (default: 20)")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print debug diagnostics")
                .action(ArgAction::SetTrue),
        )
}
