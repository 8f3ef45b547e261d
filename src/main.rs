use clap::{Parser, Subcommand};
use strasort_core::OrstArgs;

#[derive(Parser)]
#[command(author, version, about, long_about = None, styles=get_styles())] // Read from `Cargo.toml`
struct Cli {
    #[command(subcommand)]
    commands: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort values through interchangeable sorting strategies
    Orst(OrstArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.commands {
        Commands::Orst(orst_args) => orst_args.run(),
    }
}

fn get_styles() -> clap::builder::Styles {
    use anstyle::{AnsiColor, Color, Style};

    clap::builder::Styles::styled()
        .usage(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Blue))),
        )
        .header(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
        .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
        .invalid(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Red))))
        .error(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Red))))
        .valid(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Cyan))),
        )
        .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert()
}

#[test]
fn parses_sort_with_negative_values() {
    let cli = Cli::try_parse_from([
        "strasort", "orst", "sort", "-a", "quick", "-r", "--", "-3", "5", "-1.5",
    ]);
    assert!(cli.is_ok());
}
