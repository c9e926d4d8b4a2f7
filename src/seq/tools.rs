//! 序列工具函数：反转、互补、转写

use crate::error::BioResult;
use crate::seq::{Sequence, SymbolList};
use crate::translate::{DnaToRna, NucleicReplication, RnaToDna, Transliterator};

fn with_same_identity(seq: &Sequence, symbols: SymbolList) -> Sequence {
    let out = Sequence::from_symbols(seq.name(), symbols);
    match seq.comment() {
        Some(comment) => out.with_comment(comment),
        None => out,
    }
}

pub fn reverse(seq: &Sequence) -> Sequence {
    let mut codes = seq.codes().to_vec();
    codes.reverse();
    with_same_identity(
        seq,
        SymbolList::from_codes_unchecked(codes, seq.alphabet().clone()),
    )
}

/// 逐位互补，不反转；仅核酸序列有效
pub fn complement(seq: &Sequence) -> BioResult<Sequence> {
    let replication = NucleicReplication::new(seq.alphabet().clone(), seq.alphabet().clone())?;
    replication.translate_sequence(seq)
}

pub fn reverse_complement(seq: &Sequence) -> BioResult<Sequence> {
    Ok(reverse(&complement(seq)?))
}

/// DNA -> RNA 转写
pub fn transcript(seq: &Sequence) -> BioResult<Sequence> {
    DnaToRna::new().translate_sequence(seq)
}

/// RNA -> DNA 逆转写
pub fn reverse_transcript(seq: &Sequence) -> BioResult<Sequence> {
    RnaToDna::new().translate_sequence(seq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;
    use crate::error::BioError;

    #[test]
    fn reverse_complement_family() {
        let seq = Sequence::new("s1", "AACG", Alphabet::dna()).unwrap();
        assert_eq!(reverse(&seq).to_string(), "GCAA");
        assert_eq!(complement(&seq).unwrap().to_string(), "TTGC");
        assert_eq!(reverse_complement(&seq).unwrap().to_string(), "CGTT");
        assert_eq!(reverse_complement(&seq).unwrap().name(), "s1");
    }

    #[test]
    fn transcription_roundtrip() {
        let dna = Sequence::new("s1", "GATTACA", Alphabet::dna()).unwrap();
        let rna = transcript(&dna).unwrap();
        assert_eq!(rna.to_string(), "GAUUACA");
        let back = reverse_transcript(&rna).unwrap();
        assert_eq!(back.to_string(), "GATTACA");
        assert_eq!(back.alphabet(), &Alphabet::dna());
    }

    #[test]
    fn transcript_rejects_non_dna() {
        let rna = Sequence::new("s1", "GAUU", Alphabet::rna()).unwrap();
        assert!(matches!(
            transcript(&rna),
            Err(BioError::AlphabetMismatch { .. })
        ));
    }

    #[test]
    fn complement_rejects_protein() {
        let protein = Sequence::new("s1", "MKV", Alphabet::protein()).unwrap();
        assert!(matches!(
            complement(&protein),
            Err(BioError::UnsupportedAlphabetPair { .. })
        ));
    }
}
