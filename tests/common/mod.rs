use std::collections::BTreeMap;
use std::path::PathBuf;

use catena::module::{Module, ModuleFunc};

/// Run a single source through the whole front end as the module `main`
pub fn run_pipeline(src: &str) {
    let program = catena::parse(src, "<test>").unwrap();

    let mut funcs = BTreeMap::new();
    for function in program.functions {
        funcs.insert(function.name.clone(), ModuleFunc::new(function));
    }
    let module = Module {
        name: String::from("main"),
        path: PathBuf::from("<test>"),
        funcs,
    };

    let mut modules = BTreeMap::new();
    modules.insert(module.name.clone(), module);
    catena::check_modules(&modules).unwrap();
}
