//! Module assembly
//!
//! A module is a directory; every `.cat` file in it contributes function
//! definitions. The module's name is the directory's base name. This module
//! parses all files of a module, rejects duplicate function names and
//! derives each function's [FuncType] from its declaration.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use miette::Diagnostic;
use thiserror::Error;

use crate::ast;
use crate::common::FuncType;
use crate::parsing::{self, ParseError};

/// File name suffix of module source files
pub const MODULE_SUFFIX: &str = "cat";

#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("Cannot load module at `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("`{path}` is not a module directory")]
    NotADirectory { path: PathBuf },

    #[error("Duplicate function `{name}` in module `{module}` (file `{file}`)")]
    DuplicateFunction {
        name: String,
        module: String,
        file: PathBuf,
    },

    #[error("Two module directories share the name `{name}`")]
    DuplicateModule { name: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
}

type Result<T> = std::result::Result<T, LoadError>;

/// A loaded module: a named set of functions
#[derive(Debug, Clone)]
pub struct Module {
    pub name: String,
    pub path: PathBuf,
    pub funcs: BTreeMap<String, ModuleFunc>,
}

/// A function assembled into a module
#[derive(Debug, Clone)]
pub struct ModuleFunc {
    pub name: String,
    pub func_type: FuncType,
    pub node: ast::Function,
}

impl ModuleFunc {
    /// Wrap a parsed function, deriving its type from the declaration
    pub fn new(node: ast::Function) -> Self {
        let func_type = FuncType::new(
            node.args.iter().map(|arg| arg.typ.clone()).collect(),
            node.ret_types.clone(),
        );
        Self {
            name: node.name.clone(),
            func_type,
            node,
        }
    }
}

/// Load a single module from a directory of `.cat` files
pub fn load_module(path: &Path) -> Result<Module> {
    let io_err = |source| LoadError::Io {
        path: path.to_owned(),
        source,
    };

    let metadata = fs::metadata(path).map_err(io_err)?;
    if !metadata.is_dir() {
        return Err(LoadError::NotADirectory {
            path: path.to_owned(),
        });
    }

    let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
        return Err(LoadError::NotADirectory {
            path: path.to_owned(),
        });
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(path).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let file = entry.path();
        if file.extension().and_then(|ext| ext.to_str()) == Some(MODULE_SUFFIX) {
            files.push(file);
        }
    }
    // Files are parsed in name order; the first reported error must not
    // depend on directory enumeration order.
    files.sort();

    let mut funcs = BTreeMap::new();
    for file in files {
        debug!("parsing {}", file.display());
        let source = fs::read_to_string(&file).map_err(|source| LoadError::Io {
            path: file.clone(),
            source,
        })?;
        let program = parsing::parse(&source, &file.to_string_lossy())?;

        for function in program.functions {
            if funcs.contains_key(&function.name) {
                return Err(LoadError::DuplicateFunction {
                    name: function.name,
                    module: name,
                    file,
                });
            }
            funcs.insert(function.name.clone(), ModuleFunc::new(function));
        }
    }

    debug!("loaded module `{}` with {} function(s)", name, funcs.len());
    Ok(Module {
        name,
        path: path.to_owned(),
        funcs,
    })
}

/// Load several module directories, keyed by module name
pub fn load_modules(paths: &[PathBuf]) -> Result<BTreeMap<String, Module>> {
    let mut modules = BTreeMap::new();
    for path in paths {
        let module = load_module(path)?;
        if modules.contains_key(&module.name) {
            return Err(LoadError::DuplicateModule { name: module.name });
        }
        modules.insert(module.name.clone(), module);
    }
    Ok(modules)
}
