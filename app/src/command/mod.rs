//! Static strategy pattern for CLI subcommands.
//!
//! Each subcommand is a separate strategy type with its own input, dispatched
//! statically from `main`.

mod info;
mod init;
mod run;
mod version;

pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use run::RunStrategy;
pub use version::VersionStrategy;

/// Core trait defining the contract for all subcommand strategies.
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         // Command logic here
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the subcommand with the given input.
    ///
    /// # Errors
    /// Returns an error if the subcommand fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
