use colored::*;
use std::process;

use m3uclean::cli::build_cli;
use m3uclean::PlaylistError;

fn main() {
    let matches = match build_cli().try_get_matches() {
        Ok(matches) => matches,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let err = PlaylistError::usage(e.render().to_string());
            eprint!("{}", err);
            process::exit(err.exit_code());
        }
    };

    m3uclean::init_logging(matches.get_flag("verbose"));

    if let Err(err) = m3uclean::commands::process(&matches) {
        eprintln!("{} {:#}", "Error:".red().bold(), err);

        let code = match err.downcast_ref::<PlaylistError>() {
            Some(e) if e.leaves_destination_untouched() => {
                eprintln!(
                    "{}",
                    "Operation aborted; the output file was not created or overwritten.".dimmed()
                );
                e.exit_code()
            }
            Some(e) => e.exit_code(),
            None => 1,
        };
        process::exit(code);
    }
}
