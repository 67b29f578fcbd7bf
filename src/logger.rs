//! Logging setup.
//!
//! Installs a `tracing-subscriber` registry that writes to standard error,
//! filtered per phase target by the levels of a [`LogConfig`].

use std::io;

use tracing_subscriber::{
    Layer, filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::{LogConfig, Phase};

/// Builds the target filter for `config`.
#[must_use]
pub fn targets(config: &LogConfig) -> Targets {
    [Phase::Lexer, Phase::Parser, Phase::Eval].into_iter()
                                              .fold(Targets::new().with_default(config.global),
                                                    |targets, phase| {
                                                        targets.with_target(phase.target(),
                                                                            config.level_for(phase))
                                                    })
}

/// Installs the global subscriber.
///
/// Only the first call in a process takes effect; later calls, and calls
/// made after another subscriber was installed, return `false` and change
/// nothing.
pub fn init(config: &LogConfig) -> bool {
    let layer = fmt::layer().compact()
                            .with_target(true)
                            .without_time()
                            .with_writer(io::stderr)
                            .with_filter(targets(config));

    tracing_subscriber::registry().with(layer).try_init().is_ok()
}
