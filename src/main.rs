#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use quikcli::{
    init_logging, PromptConfig, PromptRequest, Prompter, Terminal, DEFAULT_MAX_LINES,
    DEFAULT_SCREEN_WIDTH,
};

#[cfg(feature = "std")]
const SAMPLE_QUESTION: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do \
    eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis \
    nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure \
    dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. \
    Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit \
    anim id est laborum.";

/// Walk through one question of every kind.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Box width in columns.
    #[arg(long, default_value_t = DEFAULT_SCREEN_WIDTH)]
    width: usize,
    #[arg(long, default_value_t = DEFAULT_MAX_LINES)]
    max_lines: usize,
    /// Let every question be skipped with an empty answer.
    #[arg(long)]
    optional: bool,
    #[arg(long, default_value = " *** Running in dev mode ***")]
    app_header: String,
    /// Print a note before each screen clear.
    #[arg(long)]
    warn_clear: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = PromptConfig::new()
        .with_width(cli.width)
        .with_max_lines(cli.max_lines)
        .with_default_required(!cli.optional)
        .with_app_header(cli.app_header)
        .with_warn_screen_clear(cli.warn_clear);
    let prompter = Prompter::new(config)?;
    let mut terminal = Terminal::new();

    let options = ["alpha", "beta", "gamma"];
    let choice = prompter.choose(
        PromptRequest::new(SAMPLE_QUESTION)
            .options(options)
            .header("This is question 1"),
        &mut terminal,
    )?;
    let text = prompter.ask_text(
        PromptRequest::new(SAMPLE_QUESTION).header("This is question 2"),
        &mut terminal,
    )?;
    let yes = prompter.ask_yes_no(
        PromptRequest::new(SAMPLE_QUESTION).header("This is question 3"),
        &mut terminal,
    )?;
    let number = prompter.ask_integer(
        PromptRequest::new(SAMPLE_QUESTION).header("This is question 4"),
        &mut terminal,
    )?;

    println!();
    println!("Question 1: {:?}", choice.map(|i| options[i]));
    println!("Question 2: {:?}", text);
    println!("Question 3: {:?}", yes);
    println!("Question 4: {:?}", number);
    Ok(())
}
