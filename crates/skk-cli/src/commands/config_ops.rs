use std::fs;
use std::process;

use skk_core::config;
use skk_session::DictSpec;

use super::die;

/// Print the embedded default engine configuration.
pub fn config_export() {
    print!("{}", config::DEFAULT_CONFIG_TOML);
}

/// Validate a custom engine configuration file.
pub fn config_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    match config::parse_config_toml(&content) {
        Ok(_) => println!("ok"),
        Err(e) => {
            eprintln!("Invalid config: {e}");
            process::exit(1);
        }
    }
}

/// Parse a `user=PATH;SYSTEM;...` dictionary spec and show the result.
pub fn spec_show(spec: &str) {
    match DictSpec::parse(spec) {
        Ok(parsed) => {
            match parsed.user {
                Some(path) => println!("user:   {}", path.display()),
                None => println!("user:   (none)"),
            }
            for path in parsed.systems {
                println!("system: {}", path.display());
            }
        }
        Err(e) => {
            eprintln!("Invalid spec: {e}");
            process::exit(1);
        }
    }
}
