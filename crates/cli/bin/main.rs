use clap::Parser;
use eyre::Result;
use filestamp_cli::{args::Filestamp, handler, utils};

fn main() -> Result<()> {
    handler::install();
    let args = Filestamp::parse();
    utils::subscriber(args.shell.level());
    args.run()
}
