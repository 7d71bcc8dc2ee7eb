use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "zephyr-scale-mcp")]
#[command(version)]
#[command(about = "An MCP server for Zephyr Scale Cloud test management")]
#[command(long_about = "
zephyr-scale-mcp exposes the Zephyr Scale Cloud REST API as MCP
(Model Context Protocol) tools: priorities, statuses, folders, test
cases, test steps, test scripts, test cycles and test plans.

Configuration is read from environment variables:
  ZEPHYR_SCALE_API_TOKEN           required bearer token
  ZEPHYR_SCALE_BASE_URL            optional API endpoint override
  ZEPHYR_SCALE_DEFAULT_PROJECT_KEY optional default Jira project key

Example usage:
  zephyr-scale-mcp serve     # Run as MCP server over stdio
  zephyr-scale-mcp doctor    # Check configuration and API connectivity
  zephyr-scale-mcp completion bash > ~/.bashrc.d/zephyr-scale-mcp
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run as MCP server (default when invoked via stdio)
    #[command(long_about = "
Runs zephyr-scale-mcp as an MCP server over stdio. This is the mode
MCP clients such as Claude Code use. The server will:

- Register one tool per Zephyr Scale operation
- Validate tool arguments before any network call
- Return structured JSON results and error envelopes

If ZEPHYR_SCALE_API_TOKEN is not set the server still starts and lists
its tools, but every call returns a configuration error.

Example:
  zephyr-scale-mcp serve
  # Or configure in your MCP client's settings
")]
    Serve,
    /// Diagnose configuration and connectivity issues
    #[command(long_about = "
Runs diagnostics to help troubleshoot setup issues. The doctor
command will check:

- Whether ZEPHYR_SCALE_API_TOKEN is set
- Which base URL and default project key are in effect
- Whether the Zephyr Scale Cloud API answers the healthcheck

Exit codes:
  0 - All checks passed
  1 - Warnings found
  2 - Errors found

Example:
  zephyr-scale-mcp doctor
")]
    Doctor,
    /// Generate shell completion scripts
    #[command(long_about = "
Generates shell completion scripts for various shells.
The script is written to standard output.

Examples:
  zephyr-scale-mcp completion bash > ~/.local/share/bash-completion/completions/zephyr-scale-mcp
  zephyr-scale-mcp completion zsh > ~/.zfunc/_zephyr-scale-mcp
  zephyr-scale-mcp completion fish > ~/.config/fish/completions/zephyr-scale-mcp.fish
")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    #[cfg(test)]
    pub fn try_parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from_args(["zephyr-scale-mcp"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_serve_subcommand_parses() {
        let cli = Cli::try_parse_from_args(["zephyr-scale-mcp", "serve"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Serve)));
    }

    #[test]
    fn test_completion_requires_shell() {
        assert!(Cli::try_parse_from_args(["zephyr-scale-mcp", "completion"]).is_err());
        let cli = Cli::try_parse_from_args(["zephyr-scale-mcp", "completion", "zsh"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Completion { .. })));
    }

    #[test]
    fn test_verbosity_flags() {
        let cli = Cli::try_parse_from_args(["zephyr-scale-mcp", "--debug", "doctor"]).unwrap();
        assert!(cli.debug);
        assert!(!cli.quiet);
    }
}
