//! FASTA 读写

pub mod fasta;

pub use fasta::{read_sequence_set, write_sequence_set, FastaReader, FastaRecord, FastaWriter};
