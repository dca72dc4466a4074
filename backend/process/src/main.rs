use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Raw food dataset
    foods: PathBuf,

    /// Snapshot to (over)write
    index: PathBuf,

    /// Print the matches for this query after rebuilding
    #[arg(short, long)]
    query: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    process::run(&args.foods, &args.index, args.query.as_deref())
}
