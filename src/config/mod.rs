#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "lambda")]
pub mod lambda;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
#[cfg(feature = "lambda")]
pub use lambda::LambdaConfig;
