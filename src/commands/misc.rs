use crate::api::ApiClient;
use crate::config::DiscoverConfig;
use crate::error::Result;
use crate::query::SortKey;

use clap_complete::{generate, Shell};
use std::io;

pub fn generate_completions(shell: Shell, cmd: &mut clap::Command) {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, &mut io::stdout());

    eprintln!();
    eprintln!("Save the output to the appropriate location for your shell:");
    match shell {
        Shell::Bash => {
            eprintln!("  repodiscover completions bash > ~/.local/share/bash-completion/completions/repodiscover");
        }
        Shell::Zsh => {
            eprintln!("  repodiscover completions zsh > ~/.zsh/completions/_repodiscover");
            eprintln!("  # (Add 'fpath=(~/.zsh/completions $fpath)' before 'compinit' in .zshrc)");
        }
        Shell::Fish => {
            eprintln!("  repodiscover completions fish > ~/.config/fish/completions/repodiscover.fish");
        }
        _ => {}
    }
}

/// Candidates for dynamic completion. Failures print nothing.
pub fn complete_suggestions(client: &ApiClient, completion_type: &str, partial: &str) {
    match completion_type {
        "languages" => {
            if let Ok(languages) = client.languages() {
                for entry in languages {
                    if entry.language.starts_with(partial) || partial.is_empty() {
                        println!("{}", entry.language);
                    }
                }
            }
        }
        "sort-keys" => {
            for key in SortKey::ALL {
                if key.as_str().starts_with(partial) {
                    println!("{}", key);
                }
            }
        }
        _ => {}
    }
}

pub fn show_config(config: &DiscoverConfig) -> Result<()> {
    println!("Config file: {}", DiscoverConfig::config_path()?.display());
    println!("API base:    {}", config.api_root());
    println!("User agent:  {}", config.user_agent);
    match config.timeout_secs {
        Some(secs) => println!("Timeout:     {}s", secs),
        None => println!("Timeout:     transport default"),
    }
    Ok(())
}

pub fn set_api_base(config: &mut DiscoverConfig, url: &str) -> Result<()> {
    config.set_api_base(url)?;
    println!("✓ API base set to {}", config.api_root());
    Ok(())
}
