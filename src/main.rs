use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;

use boolsat::dot::to_dot;
use boolsat::parser::parse;
use boolsat::report::{Report, ReportConfig};
use boolsat::sat::solve;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Input file; only its first line is read. With `--expr`, the expression itself.
    #[arg(value_name = "INPUT")]
    input: String,

    /// Treat INPUT as the expression instead of a file path.
    #[arg(long)]
    expr: bool,

    /// List every assignment with its value.
    #[arg(short, long, visible_alias = "debug")]
    verbose: bool,

    /// Print the expression tree in DOT format instead of the report.
    #[arg(long)]
    dot: bool,

    /// Log level.
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: simplelog::LevelFilter,
}

fn read_expression(cli: &Cli) -> color_eyre::Result<String> {
    if cli.expr {
        return Ok(cli.input.clone());
    }
    let path = PathBuf::from(&cli.input);
    let content = std::fs::read_to_string(&path)
        .wrap_err_with(|| format!("'{}' is not a valid file path", path.display()))?;
    Ok(content.lines().next().unwrap_or_default().to_string())
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    simplelog::TermLogger::init(
        cli.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;
    log::debug!("cli = {:?}", cli);

    let expression = read_expression(&cli)?;
    let root = parse(&expression).wrap_err("failed to parse expression")?;

    if cli.dot {
        println!("{}", expression);
        print!("{}", to_dot(root.as_ref())?);
        return Ok(());
    }

    let results = solve(root.as_ref());
    let config = ReportConfig { verbose: cli.verbose };
    print!("{}", Report::new(&expression, &results, &config));

    Ok(())
}
