use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::error::{BioError, BioResult};

/// 字母表种类（封闭集合）
///
/// 所有字母表实例都来自本 crate 内置的固定集合，
/// 两个 [`Alphabet`] 句柄的相等性由种类标签决定。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlphabetKind {
    Dna,
    Rna,
    Protein,
    CodonDna,
    CodonRna,
}

struct State {
    token: String,
    name: String,
    abbrev: Option<String>,
}

struct Inner {
    kind: AlphabetKind,
    name: &'static str,
    token_len: usize,
    /// 规范状态数（不含未解析符号与间隔符）
    size: usize,
    unknown: u8,
    gap: u8,
    states: Vec<State>,
    index: HashMap<String, u8>,
}

/// 生物序列字母表：符号与整数编码之间的封闭映射
///
/// 规范状态占用编码 `0..size`，其后是未解析符号与间隔符。
/// 小写符号在编码时视为对应大写符号的别名，解码始终返回规范写法。
/// 句柄内部共享同一张编码表，克隆开销为一次引用计数。
#[derive(Clone)]
pub struct Alphabet {
    inner: Arc<Inner>,
}

impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.inner.kind == other.inner.kind
    }
}

impl Eq for Alphabet {}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alphabet({})", self.inner.name)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.inner.name)
    }
}

const PROTEIN_STATES: [(&str, &str, &str); 20] = [
    ("A", "Ala", "Alanine"),
    ("C", "Cys", "Cysteine"),
    ("D", "Asp", "Aspartic acid"),
    ("E", "Glu", "Glutamic acid"),
    ("F", "Phe", "Phenylalanine"),
    ("G", "Gly", "Glycine"),
    ("H", "His", "Histidine"),
    ("I", "Ile", "Isoleucine"),
    ("K", "Lys", "Lysine"),
    ("L", "Leu", "Leucine"),
    ("M", "Met", "Methionine"),
    ("N", "Asn", "Asparagine"),
    ("P", "Pro", "Proline"),
    ("Q", "Gln", "Glutamine"),
    ("R", "Arg", "Arginine"),
    ("S", "Ser", "Serine"),
    ("T", "Thr", "Threonine"),
    ("V", "Val", "Valine"),
    ("W", "Trp", "Tryptophan"),
    ("Y", "Tyr", "Tyrosine"),
];

impl Alphabet {
    /// DNA 字母表：A C G T + N + `-`
    pub fn dna() -> Alphabet {
        static DNA: OnceLock<Alphabet> = OnceLock::new();
        DNA.get_or_init(|| Alphabet::nucleic(AlphabetKind::Dna, "DNA", "T", "Thymine"))
            .clone()
    }

    /// RNA 字母表：A C G U + N + `-`
    pub fn rna() -> Alphabet {
        static RNA: OnceLock<Alphabet> = OnceLock::new();
        RNA.get_or_init(|| Alphabet::nucleic(AlphabetKind::Rna, "RNA", "U", "Uracil"))
            .clone()
    }

    /// 蛋白质字母表：20 种氨基酸 + 终止符 `*` + X + `-`
    pub fn protein() -> Alphabet {
        static PROTEIN: OnceLock<Alphabet> = OnceLock::new();
        PROTEIN.get_or_init(Alphabet::build_protein).clone()
    }

    /// DNA 密码子字母表：64 个三联体 + NNN + `---`
    pub fn codon_dna() -> Alphabet {
        static CODON_DNA: OnceLock<Alphabet> = OnceLock::new();
        CODON_DNA
            .get_or_init(|| Alphabet::codon(AlphabetKind::CodonDna, "Codon(DNA)", &Alphabet::dna()))
            .clone()
    }

    /// RNA 密码子字母表：64 个三联体 + NNN + `---`
    pub fn codon_rna() -> Alphabet {
        static CODON_RNA: OnceLock<Alphabet> = OnceLock::new();
        CODON_RNA
            .get_or_init(|| Alphabet::codon(AlphabetKind::CodonRna, "Codon(RNA)", &Alphabet::rna()))
            .clone()
    }

    fn nucleic(kind: AlphabetKind, name: &'static str, fourth: &str, fourth_name: &str) -> Alphabet {
        let defs = [
            ("A", "Adenine"),
            ("C", "Cytosine"),
            ("G", "Guanine"),
            (fourth, fourth_name),
            ("N", "Unresolved base"),
            ("-", "Gap"),
        ];
        let states: Vec<State> = defs
            .iter()
            .map(|&(token, state_name)| State {
                token: token.to_string(),
                name: state_name.to_string(),
                abbrev: None,
            })
            .collect();
        Alphabet::from_states(kind, name, 1, 4, states)
    }

    fn build_protein() -> Alphabet {
        let mut states: Vec<State> = PROTEIN_STATES
            .iter()
            .map(|&(token, abbrev, state_name)| State {
                token: token.to_string(),
                name: state_name.to_string(),
                abbrev: Some(abbrev.to_string()),
            })
            .collect();
        states.push(State {
            token: "*".to_string(),
            name: "Stop".to_string(),
            abbrev: Some("Ter".to_string()),
        });
        states.push(State {
            token: "X".to_string(),
            name: "Unknown amino acid".to_string(),
            abbrev: Some("Xaa".to_string()),
        });
        states.push(State {
            token: "-".to_string(),
            name: "Gap".to_string(),
            abbrev: None,
        });
        Alphabet::from_states(AlphabetKind::Protein, "Protein", 1, 21, states)
    }

    fn codon(kind: AlphabetKind, name: &'static str, base: &Alphabet) -> Alphabet {
        let mut states = Vec::with_capacity(66);
        for c1 in 0..4usize {
            for c2 in 0..4usize {
                for c3 in 0..4usize {
                    let token = format!(
                        "{}{}{}",
                        base.inner.states[c1].token,
                        base.inner.states[c2].token,
                        base.inner.states[c3].token
                    );
                    states.push(State {
                        name: token.clone(),
                        token,
                        abbrev: None,
                    });
                }
            }
        }
        states.push(State {
            token: "NNN".to_string(),
            name: "Unresolved codon".to_string(),
            abbrev: None,
        });
        states.push(State {
            token: "---".to_string(),
            name: "Gap".to_string(),
            abbrev: None,
        });
        Alphabet::from_states(kind, name, 3, 64, states)
    }

    fn from_states(
        kind: AlphabetKind,
        name: &'static str,
        token_len: usize,
        size: usize,
        states: Vec<State>,
    ) -> Alphabet {
        let mut index = HashMap::with_capacity(states.len());
        for (code, state) in states.iter().enumerate() {
            index.insert(state.token.clone(), code as u8);
        }
        let unknown = (states.len() - 2) as u8;
        let gap = (states.len() - 1) as u8;
        Alphabet {
            inner: Arc::new(Inner {
                kind,
                name,
                token_len,
                size,
                unknown,
                gap,
                states,
                index,
            }),
        }
    }

    pub fn kind(&self) -> AlphabetKind {
        self.inner.kind
    }

    pub fn name(&self) -> &'static str {
        self.inner.name
    }

    /// 每个符号占用的字符数（核苷酸与氨基酸为 1，密码子为 3）
    pub fn token_len(&self) -> usize {
        self.inner.token_len
    }

    /// 规范状态数：DNA/RNA 为 4，蛋白质为 21（含终止符），密码子为 64
    pub fn size(&self) -> usize {
        self.inner.size
    }

    /// 含未解析符号与间隔符在内的全部编码数
    pub fn num_codes(&self) -> usize {
        self.inner.states.len()
    }

    pub fn is_valid(&self, token: &str) -> bool {
        self.inner.index.contains_key(&token.to_ascii_uppercase())
    }

    /// 符号 -> 编码，未知符号返回 [`BioError::UnknownSymbol`]
    pub fn encode(&self, token: &str) -> BioResult<u8> {
        self.inner
            .index
            .get(&token.to_ascii_uppercase())
            .copied()
            .ok_or_else(|| BioError::UnknownSymbol {
                token: token.to_string(),
                alphabet: self.inner.name,
            })
    }

    /// 编码 -> 规范符号，越界编码返回 [`BioError::InvalidCode`]
    pub fn decode(&self, code: u8) -> BioResult<&str> {
        self.state(code).map(|s| s.token.as_str())
    }

    /// 状态全名，如 `"Adenine"`、`"Lysine"`
    pub fn name_of(&self, code: u8) -> BioResult<&str> {
        self.state(code).map(|s| s.name.as_str())
    }

    /// 状态缩写：氨基酸为三字母缩写（如 `"Lys"`），其余回落到符号本身
    pub fn abbreviation(&self, code: u8) -> BioResult<&str> {
        self.state(code)
            .map(|s| s.abbrev.as_deref().unwrap_or(s.token.as_str()))
    }

    /// 全部符号，按编码顺序（规范状态在前，未解析符号与间隔符在后）
    pub fn supported_tokens(&self) -> impl Iterator<Item = &str> {
        self.inner.states.iter().map(|s| s.token.as_str())
    }

    pub fn unknown_code(&self) -> u8 {
        self.inner.unknown
    }

    pub fn gap_code(&self) -> u8 {
        self.inner.gap
    }

    pub fn is_gap(&self, code: u8) -> bool {
        code == self.inner.gap
    }

    pub fn is_nucleic(&self) -> bool {
        matches!(self.inner.kind, AlphabetKind::Dna | AlphabetKind::Rna)
    }

    pub fn is_codon(&self) -> bool {
        matches!(self.inner.kind, AlphabetKind::CodonDna | AlphabetKind::CodonRna)
    }

    pub(crate) fn valid_code(&self, code: u8) -> bool {
        (code as usize) < self.inner.states.len()
    }

    fn state(&self, code: u8) -> BioResult<&State> {
        self.inner
            .states
            .get(code as usize)
            .ok_or(BioError::InvalidCode {
                code: code as usize,
                alphabet: self.inner.name,
            })
    }
}
