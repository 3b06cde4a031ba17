use clap::Parser;
use log::info;
use miette::IntoDiagnostic;

mod cli;

fn main() -> miette::Result<()> {
    env_logger::init();
    let args = cli::Args::parse();

    let modules = catena::load_modules(&args.modules)?;

    if args.mode == cli::Mode::Parse {
        for module in modules.values() {
            println!("module `{}` ({})", module.name, module.path.display());
            for func in module.funcs.values() {
                func.node.pretty_print().into_diagnostic()?;
            }
        }
        return Ok(());
    }

    catena::check_modules(&modules)?;
    info!("all modules are well-typed");

    for module in modules.values() {
        println!("ok: module `{}` ({} functions)", module.name, module.funcs.len());
    }
    Ok(())
}
