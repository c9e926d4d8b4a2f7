use rayon::prelude::*;

use crate::align::matrix::SubstitutionMatrix;
use crate::alphabet::Alphabet;
use crate::container::{Alignment, SequenceSet};
use crate::error::{BioError, BioResult};
use crate::seq::{Sequence, SymbolList};

/// 全局比对结果：最优得分与两条等长的带间隔序列
#[derive(Debug, Clone)]
pub struct NwAlignment {
    pub score: i32,
    pub first: Sequence,
    pub second: Sequence,
}

impl NwAlignment {
    /// 装入位点容器（两条输出序列按构造等长）
    pub fn into_alignment(self) -> BioResult<Alignment> {
        let mut set = SequenceSet::new(self.first.alphabet().clone());
        set.add(self.first)?;
        set.add(self.second)?;
        Alignment::from_set(set)
    }
}

/// Needleman-Wunsch 全局比对，线性间隔罚分
///
/// 得分矩阵与两条序列必须绑定同一字母表。动态规划矩阵首行首列
/// 以 `i * gap_penalty` 初始化，回溯从右下角开始，得分相同时
/// 依次偏好对角、竖直（消耗第一条）、水平（消耗第二条）。
/// 空输入不是错误：结果为另一条序列对全间隔。
pub fn align_global(
    first: &Sequence,
    second: &Sequence,
    matrix: &SubstitutionMatrix,
    gap_penalty: i32,
) -> BioResult<NwAlignment> {
    let alphabet = matrix.alphabet();
    check_alphabet(first, alphabet)?;
    check_alphabet(second, alphabet)?;

    let a = first.codes();
    let b = second.codes();
    let m = a.len();
    let n = b.len();
    let cols = n + 1;

    // flat (m+1) x (n+1) score matrix
    let mut s = vec![0i32; (m + 1) * cols];
    for j in 1..=n {
        s[j] = j as i32 * gap_penalty;
    }
    for i in 1..=m {
        s[i * cols] = i as i32 * gap_penalty;
    }

    for i in 1..=m {
        for j in 1..=n {
            let diag = s[(i - 1) * cols + (j - 1)] + matrix.score(a[i - 1], b[j - 1]);
            let up = s[(i - 1) * cols + j] + gap_penalty;
            let left = s[i * cols + (j - 1)] + gap_penalty;
            s[i * cols + j] = diag.max(up).max(left);
        }
    }
    let score = s[m * cols + n];

    // backtrack from the bottom-right corner
    let gap = alphabet.gap_code();
    let mut out_a: Vec<u8> = Vec::with_capacity(m + n);
    let mut out_b: Vec<u8> = Vec::with_capacity(m + n);
    let mut i = m;
    let mut j = n;
    while i > 0 && j > 0 {
        let here = s[i * cols + j];
        let diag = s[(i - 1) * cols + (j - 1)] + matrix.score(a[i - 1], b[j - 1]);
        if here == diag {
            out_a.push(a[i - 1]);
            out_b.push(b[j - 1]);
            i -= 1;
            j -= 1;
        } else if here == s[(i - 1) * cols + j] + gap_penalty {
            out_a.push(a[i - 1]);
            out_b.push(gap);
            i -= 1;
        } else {
            out_a.push(gap);
            out_b.push(b[j - 1]);
            j -= 1;
        }
    }
    while i > 0 {
        out_a.push(a[i - 1]);
        out_b.push(gap);
        i -= 1;
    }
    while j > 0 {
        out_a.push(gap);
        out_b.push(b[j - 1]);
        j -= 1;
    }
    out_a.reverse();
    out_b.reverse();

    Ok(NwAlignment {
        score,
        first: Sequence::from_symbols(
            first.name(),
            SymbolList::from_codes_unchecked(out_a, alphabet.clone()),
        ),
        second: Sequence::from_symbols(
            second.name(),
            SymbolList::from_codes_unchecked(out_b, alphabet.clone()),
        ),
    })
}

/// 一批查询序列独立地与同一目标全局比对（rayon 并行）
pub fn align_global_many(
    queries: &[Sequence],
    target: &Sequence,
    matrix: &SubstitutionMatrix,
    gap_penalty: i32,
) -> BioResult<Vec<NwAlignment>> {
    queries
        .par_iter()
        .map(|query| align_global(query, target, matrix, gap_penalty))
        .collect()
}

fn check_alphabet(seq: &Sequence, expected: &Alphabet) -> BioResult<()> {
    if seq.alphabet() != expected {
        return Err(BioError::AlphabetMismatch {
            expected: expected.name(),
            actual: seq.alphabet().name(),
        });
    }
    Ok(())
}
