use reckon::{
    config::{LogConfig, Phase},
    logger,
};
use tracing::{Level, level_filters::LevelFilter};

#[test]
fn phase_levels_fall_back_to_the_global_level() {
    let config = LogConfig { global: Level::WARN,
                             eval: Some(Level::DEBUG),
                             ..Default::default() };

    assert_eq!(config.level_for(Phase::Eval), Level::DEBUG);
    assert_eq!(config.level_for(Phase::Lexer), Level::WARN);

    let targets = logger::targets(&config);
    assert!(targets.would_enable(Phase::Eval.target(), &Level::DEBUG));
    assert!(!targets.would_enable(Phase::Parser.target(), &Level::DEBUG));
    assert!(targets.would_enable("somewhere::else", &Level::WARN));
    assert_eq!(targets.default_level(), Some(LevelFilter::WARN));
}

#[test]
fn init_installs_the_subscriber_once() {
    let config = LogConfig::default();
    assert!(logger::init(&config));
    assert!(!logger::init(&config));
}
