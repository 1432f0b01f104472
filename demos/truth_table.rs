use clap::Parser;
use simplelog::LevelFilter;

use truth_tables::expr::{binding, Expr};
use truth_tables::table::TruthTable;

#[derive(Parser, Debug)]
#[command(name = "truth_table")]
#[command(about = "Print truth tables of a few sample expressions")]
struct Args {
    /// Initial value of variable a
    #[arg(short)]
    a: bool,

    /// Initial value of variable b
    #[arg(short)]
    b: bool,

    /// Initial value of variable c
    #[arg(short)]
    c: bool,

    /// Print the full tables, without removing irrelevant variables
    #[arg(long)]
    raw: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let a = binding(args.a);
    let b = binding(args.b);
    let c = binding(args.c);

    let samples = [
        Expr::or(
            Expr::not(Expr::leaf("a", &a)),
            Expr::and(Expr::leaf("c", &c), Expr::leaf("b", &b)),
        ),
        Expr::or(Expr::not(Expr::leaf("a", &a)), Expr::leaf("a", &a)),
        Expr::and(Expr::not(Expr::leaf("a", &a)), Expr::leaf("a", &a)),
    ];

    for f in samples.iter() {
        println!("f = {}", f);
        println!("f(a={}, b={}, c={}) = {}", a.get(), b.get(), c.get(), f.evaluate());

        let time_analyze = std::time::Instant::now();
        let table: TruthTable = f.analyze();
        log::info!(
            "Analyzed {} in {:?}: {} rows, {} columns",
            f,
            time_analyze.elapsed(),
            table.len(),
            table.headers().len()
        );

        if args.raw {
            println!("{}", table);
        } else {
            let simplified = table.simplify();
            log::info!(
                "Removed {} irrelevant variables",
                table.variable_count() - simplified.variable_count()
            );
            println!("{}", simplified);
        }
    }

    Ok(())
}
