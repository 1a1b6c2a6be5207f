pub mod ast;
pub mod lexer;
pub mod parser;
pub mod semantics;

pub use ast::{CellMethod, CellMethods, ExtraInfo, Match, Method, SxiInterval, Token};
pub use lexer::{LexError, Lexer};
pub use parser::{Parser, SyntaxError, parse};
pub use semantics::{
    AsCellMethods, is_conventional, is_conventional_1, is_conventional_climatology,
    is_ensemble_percentile, is_extended_1, is_streamflow_climatology, is_streamflow_raw,
};
