//! 字母表间转换：转写器与遗传密码翻译

pub mod genetic_code;
pub mod transliterator;

pub use genetic_code::{CodeVariant, GeneticCode};
pub use transliterator::{DnaToRna, NucleicReplication, RnaToDna, Transliterator};
