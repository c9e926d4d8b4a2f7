use crate::alphabet::Alphabet;
use crate::error::{BioError, BioResult};
use crate::seq::{Sequence, SymbolList};

/// 字母表之间的逐位符号转换器
///
/// 转换是纯位置映射：输出与输入等长，不反转、不合并符号。
pub trait Transliterator {
    fn source_alphabet(&self) -> &Alphabet;

    fn target_alphabet(&self) -> &Alphabet;

    /// 转换编码串；输入绑定的字母表与源字母表不符时
    /// 返回 [`BioError::AlphabetMismatch`]
    fn translate(&self, list: &SymbolList) -> BioResult<SymbolList>;

    /// 转换具名序列，保留名称与注释
    fn translate_sequence(&self, seq: &Sequence) -> BioResult<Sequence> {
        let symbols = self.translate(seq.symbols())?;
        let out = Sequence::from_symbols(seq.name(), symbols);
        Ok(match seq.comment() {
            Some(comment) => out.with_comment(comment),
            None => out,
        })
    }
}

fn check_source(list: &SymbolList, expected: &Alphabet) -> BioResult<()> {
    if list.alphabet() != expected {
        return Err(BioError::AlphabetMismatch {
            expected: expected.name(),
            actual: list.alphabet().name(),
        });
    }
    Ok(())
}

// A<->T/U, C<->G; unresolved and gap stay in place
fn complement_code(code: u8) -> u8 {
    match code {
        0 => 3,
        1 => 2,
        2 => 1,
        3 => 0,
        other => other,
    }
}

/// DNA -> RNA 转写：T 读作 U，其余符号不变
#[derive(Debug)]
pub struct DnaToRna {
    source: Alphabet,
    target: Alphabet,
}

impl DnaToRna {
    pub fn new() -> Self {
        Self {
            source: Alphabet::dna(),
            target: Alphabet::rna(),
        }
    }
}

impl Default for DnaToRna {
    fn default() -> Self {
        Self::new()
    }
}

impl Transliterator for DnaToRna {
    fn source_alphabet(&self) -> &Alphabet {
        &self.source
    }

    fn target_alphabet(&self) -> &Alphabet {
        &self.target
    }

    fn translate(&self, list: &SymbolList) -> BioResult<SymbolList> {
        check_source(list, &self.source)?;
        // DNA 与 RNA 共用编码布局，仅字母表不同
        Ok(SymbolList::from_codes_unchecked(
            list.codes().to_vec(),
            self.target.clone(),
        ))
    }
}

/// RNA -> DNA 逆转写：U 读作 T，其余符号不变
#[derive(Debug)]
pub struct RnaToDna {
    source: Alphabet,
    target: Alphabet,
}

impl RnaToDna {
    pub fn new() -> Self {
        Self {
            source: Alphabet::rna(),
            target: Alphabet::dna(),
        }
    }
}

impl Default for RnaToDna {
    fn default() -> Self {
        Self::new()
    }
}

impl Transliterator for RnaToDna {
    fn source_alphabet(&self) -> &Alphabet {
        &self.source
    }

    fn target_alphabet(&self) -> &Alphabet {
        &self.target
    }

    fn translate(&self, list: &SymbolList) -> BioResult<SymbolList> {
        check_source(list, &self.source)?;
        Ok(SymbolList::from_codes_unchecked(
            list.codes().to_vec(),
            self.target.clone(),
        ))
    }
}

/// 核酸复制：逐位互补（A<->T/U，C<->G），不反转方向
///
/// 源与目标可以是 DNA/RNA 的任意组合，其余组合在构造时拒绝。
#[derive(Debug)]
pub struct NucleicReplication {
    source: Alphabet,
    target: Alphabet,
}

impl NucleicReplication {
    pub fn new(source: Alphabet, target: Alphabet) -> BioResult<Self> {
        if !source.is_nucleic() || !target.is_nucleic() {
            return Err(BioError::UnsupportedAlphabetPair {
                from: source.name(),
                to: target.name(),
            });
        }
        Ok(Self { source, target })
    }
}

impl Transliterator for NucleicReplication {
    fn source_alphabet(&self) -> &Alphabet {
        &self.source
    }

    fn target_alphabet(&self) -> &Alphabet {
        &self.target
    }

    fn translate(&self, list: &SymbolList) -> BioResult<SymbolList> {
        check_source(list, &self.source)?;
        let codes = list.codes().iter().map(|&c| complement_code(c)).collect();
        Ok(SymbolList::from_codes_unchecked(codes, self.target.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dna_to_rna_and_back_roundtrip() {
        let dna_seq = Sequence::new("s1", "GATTACA", Alphabet::dna()).unwrap();
        let rna_seq = DnaToRna::new().translate_sequence(&dna_seq).unwrap();
        assert_eq!(rna_seq.to_string(), "GAUUACA");
        assert_eq!(rna_seq.alphabet(), &Alphabet::rna());
        assert_eq!(rna_seq.name(), "s1");

        let back = RnaToDna::new().translate_sequence(&rna_seq).unwrap();
        assert_eq!(back.to_string(), "GATTACA");
        assert_eq!(back.alphabet(), &Alphabet::dna());
    }

    #[test]
    fn replication_complements_without_reversing() {
        let seq = Sequence::new("s1", "AAC", Alphabet::dna()).unwrap();

        let same = NucleicReplication::new(Alphabet::dna(), Alphabet::dna()).unwrap();
        assert_eq!(same.translate_sequence(&seq).unwrap().to_string(), "TTG");

        let to_rna = NucleicReplication::new(Alphabet::dna(), Alphabet::rna()).unwrap();
        assert_eq!(to_rna.translate_sequence(&seq).unwrap().to_string(), "UUG");
    }

    #[test]
    fn replication_keeps_unresolved_and_gap() {
        let list = SymbolList::new("A-N", Alphabet::dna()).unwrap();
        let same = NucleicReplication::new(Alphabet::dna(), Alphabet::dna()).unwrap();
        assert_eq!(same.translate(&list).unwrap().to_string(), "T-N");
    }

    #[test]
    fn replication_rejects_non_nucleic_pair() {
        let err = NucleicReplication::new(Alphabet::dna(), Alphabet::protein()).unwrap_err();
        assert_eq!(
            err,
            BioError::UnsupportedAlphabetPair {
                from: "DNA",
                to: "Protein",
            }
        );
    }

    #[test]
    fn translate_rejects_foreign_input() {
        let rna_list = SymbolList::new("GAUU", Alphabet::rna()).unwrap();
        let err = DnaToRna::new().translate(&rna_list).unwrap_err();
        assert_eq!(
            err,
            BioError::AlphabetMismatch {
                expected: "DNA",
                actual: "RNA",
            }
        );
    }

    #[test]
    fn transliterators_implement_debug() {
        let repl = NucleicReplication::new(Alphabet::dna(), Alphabet::rna()).unwrap();
        assert!(format!("{repl:?}").contains("NucleicReplication"));
        assert!(format!("{:?}", DnaToRna::new()).contains("DnaToRna"));
        assert!(format!("{:?}", RnaToDna::new()).contains("RnaToDna"));
    }
}
