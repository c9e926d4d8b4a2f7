use crate::alphabet::Alphabet;
use crate::error::{BioError, BioResult};

/// 置换得分矩阵，覆盖所属字母表的全部编码
///
/// `uniform` 构造即默认核苷酸得分的角色：相同规范状态得 match 分，
/// 其余组合（含未解析符号之间）得 mismatch 分；需要真实打分表时
/// 用 [`SubstitutionMatrix::set_score`] 逐点覆盖。
#[derive(Debug, Clone)]
pub struct SubstitutionMatrix {
    alphabet: Alphabet,
    n: usize,
    scores: Vec<i32>,
}

impl SubstitutionMatrix {
    pub fn uniform(alphabet: Alphabet, matched: i32, mismatched: i32) -> Self {
        let n = alphabet.num_codes();
        let mut scores = vec![mismatched; n * n];
        for code in 0..alphabet.size() {
            scores[code * n + code] = matched;
        }
        Self {
            alphabet,
            n,
            scores,
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// 读取一对编码的得分；编码合法性由序列类型保证
    pub fn score(&self, a: u8, b: u8) -> i32 {
        debug_assert!((a as usize) < self.n && (b as usize) < self.n);
        self.scores[a as usize * self.n + b as usize]
    }

    /// 单点覆盖，越界编码返回 [`BioError::InvalidCode`]
    pub fn set_score(&mut self, a: u8, b: u8, score: i32) -> BioResult<()> {
        self.check_code(a)?;
        self.check_code(b)?;
        self.scores[a as usize * self.n + b as usize] = score;
        Ok(())
    }

    fn check_code(&self, code: u8) -> BioResult<()> {
        if (code as usize) >= self.n {
            return Err(BioError::InvalidCode {
                code: code as usize,
                alphabet: self.alphabet.name(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_scores() {
        let m = SubstitutionMatrix::uniform(Alphabet::dna(), 1, -1);
        assert_eq!(m.score(0, 0), 1);
        assert_eq!(m.score(0, 3), -1);
        // N is not canonical, even against itself
        let n = Alphabet::dna().unknown_code();
        assert_eq!(m.score(n, n), -1);
    }

    #[test]
    fn set_score_overrides_one_pair() {
        let mut m = SubstitutionMatrix::uniform(Alphabet::dna(), 1, -1);
        m.set_score(0, 2, 2).unwrap();
        assert_eq!(m.score(0, 2), 2);
        assert_eq!(m.score(2, 0), -1);
        assert!(matches!(
            m.set_score(9, 0, 0),
            Err(BioError::InvalidCode { code: 9, .. })
        ));
    }
}
