use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use catena::module::LoadError;
use catena::type_checking::TypeCheckError;
use catena::Module;

fn testfile(dir: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/testfiles")
        .join(dir)
}

fn single(module: Module) -> BTreeMap<String, Module> {
    let mut modules = BTreeMap::new();
    modules.insert(module.name.clone(), module);
    modules
}

#[test]
fn geometry_module_checks() {
    let module = catena::load_module(&testfile("geometry")).unwrap();
    assert_eq!(module.name, "geometry");
    assert_eq!(module.funcs.len(), 6);

    catena::check_modules(&single(module)).unwrap();
}

#[test]
fn union_module_checks() {
    let module = catena::load_module(&testfile("colors")).unwrap();
    catena::check_modules(&single(module)).unwrap();
}

#[test]
fn cross_module_calls_check() {
    let modules = catena::load_modules(&[testfile("geometry"), testfile("physics")]).unwrap();
    catena::check_modules(&modules).unwrap();
}

#[test]
fn loading_is_deterministic() {
    let first = catena::load_module(&testfile("geometry")).unwrap();
    let second = catena::load_module(&testfile("geometry")).unwrap();

    let first_names: Vec<&String> = first.funcs.keys().collect();
    let second_names: Vec<&String> = second.funcs.keys().collect();
    assert_eq!(first_names, second_names);
}

#[test]
fn broken_module_fails_with_a_mismatch() {
    let module = catena::load_module(&testfile("broken")).unwrap();
    let err = catena::check_modules(&single(module)).unwrap_err();

    let TypeCheckError::Mismatch { wanted, got, .. } = err else {
        panic!("wrong error: {err}");
    };
    assert_eq!(wanted.to_string(), "int");
    assert_eq!(got.to_string(), "float");
}

#[test]
fn duplicate_functions_are_rejected_at_load_time() {
    let err = catena::load_module(&testfile("duplicated")).unwrap_err();
    let LoadError::DuplicateFunction { name, .. } = err else {
        panic!("wrong error: {err}");
    };
    assert_eq!(name, "same");
}

#[test]
fn a_file_is_not_a_module() {
    let err = catena::load_module(&testfile("geometry/shapes.cat")).unwrap_err();
    assert!(matches!(err, LoadError::NotADirectory { .. }));
}

#[test]
fn a_missing_directory_is_an_io_error() {
    let err = catena::load_module(&testfile("does-not-exist")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}
