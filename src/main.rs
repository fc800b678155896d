use anyhow::Result;
use is_terminal::IsTerminal;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vset::calculate::calculate;
use vset::operands::Operands;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("VSET_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = vset::args::parsed();
    let operands = Operands::from_paths(&args.files)?;
    let result = calculate(args.op, operands.map(|o| o.into_set(args.policy)), &args.selection)?;

    if args.render {
        println!("{result}");
    } else if let Some(path) = &args.output {
        vset::save(&result, path)?;
    } else if io::stdout().is_terminal() {
        vset::write_to(&result, io::stdout().lock())?;
    } else {
        vset::write_to(&result, io::BufWriter::new(io::stdout().lock()))?;
    }
    Ok(())
}
