use phonebook_config::Config;
use phonebook_core::Session;
use tracing::info;

/// Strategy for the interactive contact book session.
///
/// Loads the optional configuration, then reads commands from stdin until
/// `exit` or end of input. Records live only as long as the session.
#[derive(Debug, Clone, Copy)]
pub struct RunStrategy;

impl super::CommandStrategy for RunStrategy {
    type Input = ();

    fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        info!(
            "Starting session (collapse_whitespace={})",
            config.parser.collapse_whitespace
        );

        let mut session = Session::new(config.messages, config.parser);
        session.run_interactive()?;
        Ok(())
    }
}
