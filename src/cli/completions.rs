use clap::Parser;

/// Arguments for completions command
///
/// The shell name is matched case-insensitively when the command runs, so an
/// unknown shell is reported as a merge-yaml error rather than a usage error.
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  merge-yaml completions bash > ~/.local/share/bash-completion/completions/merge-yaml\n  \
                  merge-yaml completions zsh > \"${fpath[1]}/_merge-yaml\"\n  \
                  merge-yaml completions fish > ~/.config/fish/completions/merge-yaml.fish")]
pub struct CompletionsArgs {
    /// Target shell: bash, elvish, fish, powershell (or pwsh), zsh
    #[arg(value_name = "SHELL")]
    pub shell: String,
}
