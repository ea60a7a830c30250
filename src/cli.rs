extern crate clap;
extern crate rehex;

use clap::{App, Arg};
use rehex::{replace_bytes, Config};
use std::process::exit;

fn main() {
    env_logger::init();

    let matches = App::new("rehex")
        .version("0.1.0")
        .about("Replace a fixed byte sequence in a binary file. Patterns are space separated hex bytes (e.g. \"4c 89 44\")")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("FILE")
                .help("Path to the configuration file")
                .takes_value(true),
        )
        .get_matches();

    let config_path = match matches.value_of("config") {
        Some(config_path) if !config_path.is_empty() => config_path,
        _ => {
            eprintln!("Usage: rehex -c config.json");
            eprintln!("{}", matches.usage());
            exit(1);
        }
    };

    let config = match Config::from_path(config_path) {
        Ok(config) => config,
        Err(why) => {
            eprintln!("{}", why);
            exit(1);
        }
    };

    match replace_bytes(&config) {
        Ok(replacements) => {
            println!("Replaced {} occurrences.", replacements.count());
            println!("Replacement successful!");
        }
        Err(why) => {
            eprintln!("Error during byte replacement: {}", why);
            exit(1);
        }
    }
}
