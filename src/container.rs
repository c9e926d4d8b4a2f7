//! 序列容器：同字母表的序列集合与等长位点视图

use crate::alphabet::Alphabet;
use crate::error::{BioError, BioResult};
use crate::seq::{Sequence, SymbolList};

/// 绑定单一字母表的有序序列集合
///
/// 名称在集合内不强制唯一，按名称查找返回首个匹配。
#[derive(Debug, Clone)]
pub struct SequenceSet {
    alphabet: Alphabet,
    sequences: Vec<Sequence>,
}

impl SequenceSet {
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            sequences: Vec::new(),
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// 加入序列；字母表不符返回 [`BioError::AlphabetMismatch`]
    pub fn add(&mut self, seq: Sequence) -> BioResult<()> {
        if seq.alphabet() != &self.alphabet {
            return Err(BioError::AlphabetMismatch {
                expected: self.alphabet.name(),
                actual: seq.alphabet().name(),
            });
        }
        self.sequences.push(seq);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Sequence> {
        self.sequences.get(index)
    }

    /// 按名称查找，返回首个匹配
    pub fn by_name(&self, name: &str) -> Option<&Sequence> {
        self.sequences.iter().find(|s| s.name() == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sequence> {
        self.sequences.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.sequences.iter().map(Sequence::name).collect()
    }

    /// 所有序列是否等长（空集与单条序列视为等长）
    pub fn have_same_length(&self) -> bool {
        match self.sequences.first() {
            Some(first) => self.sequences.iter().all(|s| s.len() == first.len()),
            None => true,
        }
    }
}

/// 等长序列的位点视图
///
/// 每一列本身是同字母表下的符号串，可按列取出检查。
#[derive(Debug, Clone)]
pub struct Alignment {
    set: SequenceSet,
}

impl Alignment {
    /// 由序列集构造；序列长度不一返回 [`BioError::NotAligned`]
    pub fn from_set(set: SequenceSet) -> BioResult<Alignment> {
        if !set.have_same_length() {
            return Err(BioError::NotAligned);
        }
        Ok(Alignment { set })
    }

    /// 追加一条序列，长度必须与现有位点数一致
    pub fn add(&mut self, seq: Sequence) -> BioResult<()> {
        if !self.set.is_empty() && seq.len() != self.num_sites() {
            return Err(BioError::NotAligned);
        }
        self.set.add(seq)
    }

    pub fn num_sequences(&self) -> usize {
        self.set.len()
    }

    /// 位点数（列数）
    pub fn num_sites(&self) -> usize {
        self.set.sequences.first().map_or(0, Sequence::len)
    }

    /// 取第 `position` 列
    pub fn site(&self, position: usize) -> BioResult<SymbolList> {
        if position >= self.num_sites() {
            return Err(BioError::IndexOutOfRange {
                index: position,
                len: self.num_sites(),
            });
        }
        let codes = self
            .set
            .sequences
            .iter()
            .map(|s| s.codes()[position])
            .collect();
        Ok(SymbolList::from_codes_unchecked(
            codes,
            self.set.alphabet.clone(),
        ))
    }

    pub fn sequences(&self) -> &SequenceSet {
        &self.set
    }

    pub fn into_set(self) -> SequenceSet {
        self.set
    }
}
