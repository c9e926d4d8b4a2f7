//! 符号序列：绑定字母表的编码串及其上的编辑操作

pub mod tools;

use std::fmt;

use crate::alphabet::Alphabet;
use crate::error::{BioError, BioResult};

/// 绑定单一字母表的有序符号编码串
///
/// 所有元素在任意时刻都是所属字母表的合法编码。
/// 构造采用整体解析：任一符号无法编码则整体失败，不保留部分结果。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolList {
    codes: Vec<u8>,
    alphabet: Alphabet,
}

impl SymbolList {
    /// 从文本解析：按 `token_len` 个字符为一个符号，自左向右切分
    pub fn new(text: &str, alphabet: Alphabet) -> BioResult<Self> {
        let step = alphabet.token_len();
        let chars: Vec<char> = text.chars().collect();
        let mut codes = Vec::with_capacity(chars.len() / step);
        for (position, chunk) in chars.chunks(step).enumerate() {
            let token: String = chunk.iter().collect();
            if chunk.len() != step {
                return Err(BioError::Parse { position, token });
            }
            match alphabet.encode(&token) {
                Ok(code) => codes.push(code),
                Err(_) => return Err(BioError::Parse { position, token }),
            }
        }
        Ok(Self { codes, alphabet })
    }

    /// 从已有编码构造，逐一校验编码合法性
    pub fn from_codes(codes: Vec<u8>, alphabet: Alphabet) -> BioResult<Self> {
        for &code in &codes {
            if !alphabet.valid_code(code) {
                return Err(BioError::InvalidCode {
                    code: code as usize,
                    alphabet: alphabet.name(),
                });
            }
        }
        Ok(Self { codes, alphabet })
    }

    /// 内部构造：调用方保证编码合法
    pub(crate) fn from_codes_unchecked(codes: Vec<u8>, alphabet: Alphabet) -> Self {
        debug_assert!(codes.iter().all(|&c| alphabet.valid_code(c)));
        Self { codes, alphabet }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn codes(&self) -> &[u8] {
        &self.codes
    }

    pub fn code_at(&self, position: usize) -> BioResult<u8> {
        self.check(position)?;
        Ok(self.codes[position])
    }

    pub fn token_at(&self, position: usize) -> BioResult<&str> {
        self.check(position)?;
        self.alphabet.decode(self.codes[position])
    }

    /// 替换 `position` 处的符号
    pub fn set(&mut self, position: usize, token: &str) -> BioResult<()> {
        self.check(position)?;
        self.codes[position] = self.alphabet.encode(token)?;
        Ok(())
    }

    /// 在 `position` 处插入符号，`position == len` 表示追加
    pub fn insert(&mut self, position: usize, token: &str) -> BioResult<()> {
        if position > self.codes.len() {
            return Err(BioError::IndexOutOfRange {
                index: position,
                len: self.codes.len(),
            });
        }
        let code = self.alphabet.encode(token)?;
        self.codes.insert(position, code);
        Ok(())
    }

    /// 在末尾追加符号
    pub fn push(&mut self, token: &str) -> BioResult<()> {
        let code = self.alphabet.encode(token)?;
        self.codes.push(code);
        Ok(())
    }

    /// 删除 `position` 处的符号
    pub fn delete(&mut self, position: usize) -> BioResult<()> {
        self.check(position)?;
        self.codes.remove(position);
        Ok(())
    }

    /// 取 `[start, end)` 的拷贝
    pub fn subsequence(&self, start: usize, end: usize) -> BioResult<SymbolList> {
        if end > self.codes.len() {
            return Err(BioError::IndexOutOfRange {
                index: end,
                len: self.codes.len(),
            });
        }
        if start > end {
            return Err(BioError::IndexOutOfRange {
                index: start,
                len: self.codes.len(),
            });
        }
        Ok(Self {
            codes: self.codes[start..end].to_vec(),
            alphabet: self.alphabet.clone(),
        })
    }

    fn check(&self, position: usize) -> BioResult<()> {
        if position >= self.codes.len() {
            return Err(BioError::IndexOutOfRange {
                index: position,
                len: self.codes.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for SymbolList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &code in &self.codes {
            match self.alphabet.decode(code) {
                Ok(token) => f.write_str(token)?,
                Err(_) => return Err(fmt::Error),
            }
        }
        Ok(())
    }
}

/// 具名符号序列：名称 + 可选注释 + 编码串
///
/// 名称仅用于在容器中定位，类型本身不限制其内容。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sequence {
    name: String,
    comment: Option<String>,
    symbols: SymbolList,
}

impl Sequence {
    pub fn new(name: impl Into<String>, text: &str, alphabet: Alphabet) -> BioResult<Self> {
        Ok(Self {
            name: name.into(),
            comment: None,
            symbols: SymbolList::new(text, alphabet)?,
        })
    }

    pub fn from_symbols(name: impl Into<String>, symbols: SymbolList) -> Self {
        Self {
            name: name.into(),
            comment: None,
            symbols,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn symbols(&self) -> &SymbolList {
        &self.symbols
    }

    pub fn symbols_mut(&mut self) -> &mut SymbolList {
        &mut self.symbols
    }

    pub fn alphabet(&self) -> &Alphabet {
        self.symbols.alphabet()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn codes(&self) -> &[u8] {
        self.symbols.codes()
    }

    pub fn code_at(&self, position: usize) -> BioResult<u8> {
        self.symbols.code_at(position)
    }

    pub fn token_at(&self, position: usize) -> BioResult<&str> {
        self.symbols.token_at(position)
    }

    pub fn set(&mut self, position: usize, token: &str) -> BioResult<()> {
        self.symbols.set(position, token)
    }

    pub fn insert(&mut self, position: usize, token: &str) -> BioResult<()> {
        self.symbols.insert(position, token)
    }

    pub fn push(&mut self, token: &str) -> BioResult<()> {
        self.symbols.push(token)
    }

    pub fn delete(&mut self, position: usize) -> BioResult<()> {
        self.symbols.delete(position)
    }

    /// 取 `[start, end)` 的子序列，保留名称与注释
    pub fn subsequence(&self, start: usize, end: usize) -> BioResult<Sequence> {
        Ok(Self {
            name: self.name.clone(),
            comment: self.comment.clone(),
            symbols: self.symbols.subsequence(start, end)?,
        })
    }

    /// 解码为文本后按另一字母表重新解析
    ///
    /// 例如核苷酸序列可重解析为密码子序列（长度须为 3 的倍数），
    /// 含 `T` 的 DNA 文本重解析为 RNA 则失败。
    pub fn recode(&self, alphabet: Alphabet) -> BioResult<Sequence> {
        let text = self.symbols.to_string();
        Ok(Self {
            name: self.name.clone(),
            comment: self.comment.clone(),
            symbols: SymbolList::new(&text, alphabet)?,
        })
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_render() {
        let seq = Sequence::new("s1", "GATTACA", Alphabet::dna()).unwrap();
        assert_eq!(seq.len(), 7);
        assert_eq!(seq.codes(), &[2, 0, 3, 3, 0, 1, 0]);
        assert_eq!(seq.to_string(), "GATTACA");
        assert_eq!(seq.token_at(2).unwrap(), "T");
    }

    #[test]
    fn parse_is_all_or_nothing() {
        let err = Sequence::new("s1", "GAXTACA", Alphabet::dna()).unwrap_err();
        assert_eq!(
            err,
            BioError::Parse {
                position: 2,
                token: "X".to_string(),
            }
        );
    }

    #[test]
    fn lowercase_input_is_canonicalized() {
        let seq = Sequence::new("s1", "gattaca", Alphabet::dna()).unwrap();
        assert_eq!(seq.to_string(), "GATTACA");
    }

    #[test]
    fn clone_is_independent() {
        let original = Sequence::new("s1", "GATTACA", Alphabet::dna()).unwrap();
        let mut copy = original.clone();
        copy.set_name("edited");
        copy.set(0, "T").unwrap();
        copy.delete(6).unwrap();
        assert_eq!(original.name(), "s1");
        assert_eq!(original.to_string(), "GATTACA");
        assert_eq!(copy.name(), "edited");
        assert_eq!(copy.to_string(), "TATTAC");
    }

    #[test]
    fn mutators_check_bounds_and_alphabet() {
        let mut seq = Sequence::new("s1", "ACGT", Alphabet::dna()).unwrap();

        assert!(matches!(
            seq.set(4, "A"),
            Err(BioError::IndexOutOfRange { index: 4, len: 4 })
        ));
        assert!(matches!(
            seq.set(0, "X"),
            Err(BioError::UnknownSymbol { .. })
        ));

        // insert at len appends, one past len is out of range
        seq.insert(4, "N").unwrap();
        assert_eq!(seq.to_string(), "ACGTN");
        assert!(matches!(
            seq.insert(6, "A"),
            Err(BioError::IndexOutOfRange { .. })
        ));

        seq.push("-").unwrap();
        assert_eq!(seq.to_string(), "ACGTN-");

        seq.delete(0).unwrap();
        assert_eq!(seq.to_string(), "CGTN-");
        assert!(matches!(
            seq.delete(5),
            Err(BioError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn subsequence_copies_range() {
        let seq = Sequence::new("s1", "GATTACA", Alphabet::dna()).unwrap();
        let sub = seq.subsequence(2, 5).unwrap();
        assert_eq!(sub.name(), "s1");
        assert_eq!(sub.to_string(), "TTA");

        // both failure payloads carry the real list length
        assert_eq!(
            seq.subsequence(2, 8).unwrap_err(),
            BioError::IndexOutOfRange { index: 8, len: 7 }
        );
        assert_eq!(
            seq.subsequence(5, 2).unwrap_err(),
            BioError::IndexOutOfRange { index: 5, len: 7 }
        );
    }

    #[test]
    fn recode_between_alphabets() {
        let dna = Sequence::new("s1", "ATGGCC", Alphabet::dna()).unwrap();

        // the same letters read as amino acids
        let protein = dna.recode(Alphabet::protein()).unwrap();
        assert_eq!(protein.to_string(), "ATGGCC");
        assert_eq!(protein.alphabet(), &Alphabet::protein());

        // as codons
        let codons = dna.recode(Alphabet::codon_dna()).unwrap();
        assert_eq!(codons.len(), 2);
        assert_eq!(codons.token_at(0).unwrap(), "ATG");

        // T is not an RNA symbol
        let err = dna.recode(Alphabet::rna()).unwrap_err();
        assert_eq!(
            err,
            BioError::Parse {
                position: 1,
                token: "T".to_string(),
            }
        );
    }

    #[test]
    fn codon_parse_rejects_trailing_partial_triplet() {
        let err = SymbolList::new("ATGG", Alphabet::codon_dna()).unwrap_err();
        assert_eq!(
            err,
            BioError::Parse {
                position: 1,
                token: "G".to_string(),
            }
        );
    }

    #[test]
    fn gapped_list_from_codes() {
        let dna = Alphabet::dna();
        let gap = dna.gap_code();
        let list = SymbolList::from_codes(vec![2, 0, gap, 3], dna.clone()).unwrap();
        assert_eq!(list.to_string(), "GA-T");
        assert!(SymbolList::from_codes(vec![9], dna).is_err());
    }
}
