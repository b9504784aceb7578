//! Shell completion scripts.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::TomatickError;

const BIN_NAME: &str = "tomatick";

/// Generate the completion script for `shell`.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String, TomatickError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut buf);
    String::from_utf8(buf).map_err(|e| TomatickError::InvalidInput(format!("UTF-8 error: {e}")))
}

/// Where to put the script for `shell`.
#[must_use]
pub fn completion_install_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => "# Add to ~/.bashrc:\nsource <(tomatick completions bash)\n".to_string(),
        Shell::Zsh => "# Save to your fpath:\n\
             tomatick completions zsh > ~/.zsh/completions/_tomatick\n\
             # Then in ~/.zshrc:\n\
             fpath=(~/.zsh/completions $fpath)\n\
             autoload -Uz compinit && compinit\n"
            .to_string(),
        Shell::Fish => "tomatick completions fish > ~/.config/fish/completions/tomatick.fish\n"
            .to_string(),
        Shell::PowerShell => {
            "# Add to $PROFILE:\ntomatick completions powershell | Out-String | Invoke-Expression\n"
                .to_string()
        }
        Shell::Elvish => "tomatick completions elvish > ~/.elvish/lib/tomatick.elv\n".to_string(),
        _ => "Unknown shell".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_bash_completions() {
        let script = generate_completions(Shell::Bash).unwrap();
        assert!(script.contains("tomatick"));
        assert!(script.contains("complete"));
    }

    #[test]
    fn test_generate_fish_mentions_subcommands() {
        let script = generate_completions(Shell::Fish).unwrap();
        assert!(script.contains("stopwatch"));
        assert!(script.contains("focus"));
    }

    #[test]
    fn test_completion_instructions_not_empty() {
        assert!(!completion_install_instructions(Shell::Bash).is_empty());
        assert!(completion_install_instructions(Shell::Zsh).contains("fpath"));
        assert!(!completion_install_instructions(Shell::Fish).is_empty());
    }
}
