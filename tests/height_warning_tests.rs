use std::sync::atomic::{AtomicUsize, Ordering};

use log::{Level, LevelFilter, Metadata, Record};
use quikcli::{PromptConfig, PromptRequest, Prompter, ScriptedConsole};

static HEIGHT_WARNINGS: AtomicUsize = AtomicUsize::new(0);

struct CountingLogger;

impl log::Log for CountingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record) {
        if record.level() == Level::Warn && record.args().to_string().contains("lines") {
            HEIGHT_WARNINGS.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn flush(&self) {}
}

static LOGGER: CountingLogger = CountingLogger;

#[test]
fn test_tall_frame_warned_once_per_question() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Warn);

    let config = PromptConfig::new()
        .with_warn_screen_clear(false)
        .with_width(12)
        .with_max_lines(2);
    let prompter = Prompter::new(config).unwrap();
    let mut console = ScriptedConsole::new(["", "", "x"]);
    let request = PromptRequest::new("a question long enough to wrap a few times");

    prompter.ask(&request, &mut console).unwrap();

    assert_eq!(console.clears(), 3);
    assert_eq!(HEIGHT_WARNINGS.load(Ordering::SeqCst), 1);
}
