use std::io::{self, Write};

use crate::config::{Config, DEFAULT_API_URL};
use crate::error::{Result, TeamsError};

fn prompt(question: &str) -> Result<String> {
    print!("{question}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub async fn run() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() {
        let answer = prompt(&format!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        ))?;

        if !answer.eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("Team Browser Configuration");
    println!("==========================\n");

    let api_url = prompt(&format!("API URL [{DEFAULT_API_URL}]: "))?;
    let auth_token = prompt("Auth token (leave empty to browse logged out): ")?;

    let config = Config {
        api_url: (!api_url.is_empty()).then_some(api_url),
        auth_token: (!auth_token.is_empty()).then_some(auth_token),
        columns: None,
    };

    // Create config directory if it doesn't exist
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| TeamsError::ConfigWrite {
            path: config_path.clone(),
            source: e,
        })?;
    }

    let contents = config.to_toml()?;
    std::fs::write(&config_path, contents).map_err(|e| TeamsError::ConfigWrite {
        path: config_path.clone(),
        source: e,
    })?;

    println!("\nConfig saved to {}", config_path.display());
    println!("You can now use 'teams' commands!");

    Ok(())
}
