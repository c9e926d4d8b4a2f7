use serde::{Deserialize, Serialize};
use std::fmt;

use crate::alphabet::Alphabet;
use crate::error::{BioError, BioResult};
use crate::seq::{Sequence, SymbolList};

/// ATG 的密码子编码：16*A + 4*T + G
const ATG: u8 = 14;

/// NCBI 遗传密码表变体（transl_table 编号见 [`CodeVariant::ncbi_id`]）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeVariant {
    Standard,
    VertebrateMitochondrial,
    YeastMitochondrial,
    MoldMitochondrial,
    InvertebrateMitochondrial,
    EchinodermMitochondrial,
    AscidianMitochondrial,
}

impl CodeVariant {
    pub const ALL: [CodeVariant; 7] = [
        CodeVariant::Standard,
        CodeVariant::VertebrateMitochondrial,
        CodeVariant::YeastMitochondrial,
        CodeVariant::MoldMitochondrial,
        CodeVariant::InvertebrateMitochondrial,
        CodeVariant::EchinodermMitochondrial,
        CodeVariant::AscidianMitochondrial,
    ];

    /// NCBI transl_table 编号
    pub fn ncbi_id(self) -> u8 {
        match self {
            CodeVariant::Standard => 1,
            CodeVariant::VertebrateMitochondrial => 2,
            CodeVariant::YeastMitochondrial => 3,
            CodeVariant::MoldMitochondrial => 4,
            CodeVariant::InvertebrateMitochondrial => 5,
            CodeVariant::EchinodermMitochondrial => 9,
            CodeVariant::AscidianMitochondrial => 13,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CodeVariant::Standard => "Standard",
            CodeVariant::VertebrateMitochondrial => "Vertebrate Mitochondrial",
            CodeVariant::YeastMitochondrial => "Yeast Mitochondrial",
            CodeVariant::MoldMitochondrial => "Mold Mitochondrial",
            CodeVariant::InvertebrateMitochondrial => "Invertebrate Mitochondrial",
            CodeVariant::EchinodermMitochondrial => "Echinoderm Mitochondrial",
            CodeVariant::AscidianMitochondrial => "Ascidian Mitochondrial",
        }
    }

    /// 氨基酸行与起始行，NCBI 格式：64 字符按 TCAG 嵌套顺序
    fn tables(self) -> (&'static str, &'static str) {
        match self {
            CodeVariant::Standard => (
                "FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
                "---M------**--*----M---------------M----------------------------",
            ),
            CodeVariant::VertebrateMitochondrial => (
                "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSS**VVVVAAAADDEEGGGG",
                "----------**--------------------MMMM----------**---M------------",
            ),
            CodeVariant::YeastMitochondrial => (
                "FFLLSSSSYY**CCWWTTTTPPPPHHQQRRRRIIMMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
                "----------**----------------------MM---------------M------------",
            ),
            CodeVariant::MoldMitochondrial => (
                "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
                "--MM------**-------M------------MMMM---------------M------------",
            ),
            CodeVariant::InvertebrateMitochondrial => (
                "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSSSVVVVAAAADDEEGGGG",
                "---M------**--------------------MMMM---------------M------------",
            ),
            CodeVariant::EchinodermMitochondrial => (
                "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNNKSSSSVVVVAAAADDEEGGGG",
                "----------**-----------------------M---------------M------------",
            ),
            CodeVariant::AscidianMitochondrial => (
                "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSGGVVVVAAAADDEEGGGG",
                "---M------**----------------------MM---------------M------------",
            ),
        }
    }
}

impl fmt::Display for CodeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// 遗传密码：64 个密码子到氨基酸的固定映射
///
/// 源字母表为 DNA 密码子，目标为蛋白质。构造后不可变，
/// 查询均为 O(1) 数组访问。
pub struct GeneticCode {
    variant: CodeVariant,
    amino: [u8; 64],
    stops: [bool; 64],
    starts: [bool; 64],
    source: Alphabet,
    target: Alphabet,
}

impl GeneticCode {
    pub fn new(variant: CodeVariant) -> GeneticCode {
        let source = Alphabet::codon_dna();
        let target = Alphabet::protein();
        let (aa_line, start_line) = variant.tables();

        let mut amino = [0u8; 64];
        let mut stops = [false; 64];
        let mut starts = [false; 64];
        // NCBI 行序为 TCAG 嵌套，这里重排到本库的密码子编码
        const TCAG: [usize; 4] = [3, 1, 0, 2];
        for (i, (aa, start)) in aa_line.chars().zip(start_line.chars()).enumerate() {
            let code = 16 * TCAG[i / 16] + 4 * TCAG[(i / 4) % 4] + TCAG[i % 4];
            amino[code] = amino_code(aa, &target);
            stops[code] = aa == '*';
            starts[code] = start == 'M';
        }

        GeneticCode {
            variant,
            amino,
            stops,
            starts,
            source,
            target,
        }
    }

    /// 标准遗传密码（transl_table=1）
    pub fn standard() -> GeneticCode {
        GeneticCode::new(CodeVariant::Standard)
    }

    pub fn variant(&self) -> CodeVariant {
        self.variant
    }

    pub fn description(&self) -> &'static str {
        self.variant.description()
    }

    pub fn source_alphabet(&self) -> &Alphabet {
        &self.source
    }

    pub fn target_alphabet(&self) -> &Alphabet {
        &self.target
    }

    /// 单个密码子 -> 氨基酸编码
    ///
    /// 终止密码子返回 [`BioError::StopCodon`]；NNN 译作 X，
    /// `---` 译作 `-`；越界编码返回 [`BioError::InvalidCode`]。
    pub fn translate(&self, codon: u8) -> BioResult<u8> {
        let idx = codon as usize;
        if idx < 64 {
            if self.stops[idx] {
                return Err(BioError::StopCodon {
                    codon: self.codon_token(codon),
                });
            }
            return Ok(self.amino[idx]);
        }
        if codon == self.source.unknown_code() {
            return Ok(self.target.unknown_code());
        }
        if codon == self.source.gap_code() {
            return Ok(self.target.gap_code());
        }
        Err(BioError::InvalidCode {
            code: idx,
            alphabet: self.source.name(),
        })
    }

    pub fn is_stop(&self, codon: u8) -> bool {
        (codon as usize) < 64 && self.stops[codon as usize]
    }

    /// 标准起始密码子：该表将 ATG 标记为起始
    pub fn is_start(&self, codon: u8) -> bool {
        codon == ATG && self.starts[codon as usize]
    }

    /// 替代起始密码子：起始表中 ATG 以外的条目
    pub fn is_alt_start(&self, codon: u8) -> bool {
        (codon as usize) < 64 && self.starts[codon as usize] && codon != ATG
    }

    /// 整条密码子序列 -> 蛋白质序列（保留名称与注释）
    ///
    /// 与 [`GeneticCode::translate`] 不同，这里是全映射：
    /// 终止密码子产出 `*`，由调用方决定如何截断。
    pub fn translate_sequence(&self, seq: &Sequence) -> BioResult<Sequence> {
        if seq.alphabet() != &self.source {
            return Err(BioError::AlphabetMismatch {
                expected: self.source.name(),
                actual: seq.alphabet().name(),
            });
        }
        let mut codes = Vec::with_capacity(seq.len());
        for &codon in seq.codes() {
            let idx = codon as usize;
            let aa = if idx < 64 {
                self.amino[idx]
            } else if codon == self.source.unknown_code() {
                self.target.unknown_code()
            } else {
                self.target.gap_code()
            };
            codes.push(aa);
        }
        let symbols = SymbolList::from_codes_unchecked(codes, self.target.clone());
        let out = Sequence::from_symbols(seq.name(), symbols);
        Ok(match seq.comment() {
            Some(comment) => out.with_comment(comment),
            None => out,
        })
    }

    fn codon_token(&self, codon: u8) -> String {
        self.source
            .decode(codon)
            .map(str::to_string)
            .unwrap_or_default()
    }
}

fn amino_code(aa: char, protein: &Alphabet) -> u8 {
    match protein.encode(&aa.to_string()) {
        Ok(code) => code,
        Err(_) => protein.unknown_code(),
    }
}
