use phonebook_config::Config;
use tracing::info;

/// Strategy for displaying the effective configuration.
///
/// Outputs the config file location and whether it exists, the parser
/// options, and the session texts (help text shortened to its first line).
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config_path = Config::config_path()?;
        info!("Reading configuration from {}", config_path.display());
        let config = Config::load_from(&config_path)?;

        println!("=== phonebook Configuration ===\n");

        println!("Config File:");
        println!("  Path: {}", config_path.display());
        if config_path.exists() {
            println!("  Status: Loaded");
        } else {
            println!("  Status: Not found (using defaults)");
        }
        println!();

        println!("Parser:");
        println!(
            "  Collapse Whitespace: {}",
            config.parser.collapse_whitespace
        );
        println!();

        println!("Messages:");
        println!("  Prompt: {:?}", config.messages.prompt);
        println!("  Error: {}", truncate(&config.messages.error, 60));
        let first_line = config.messages.help.lines().next().unwrap_or_default();
        println!(
            "  Help: {} ({} lines)",
            truncate(first_line, 60),
            config.messages.help.lines().count()
        );

        Ok(())
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars - 3).collect();
        format!("{head}...")
    }
}
