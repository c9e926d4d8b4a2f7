use thiserror::Error;

/// 库内所有可失败操作共用的错误类型
///
/// 每个变体对应一类契约违规：符号不在字母表中、编码越界、
/// 序列解析失败、下标越界、终止密码子无氨基酸翻译、
/// 转换器不支持的字母表组合、以及字母表不一致。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BioError {
    #[error("unknown symbol '{token}' for alphabet {alphabet}")]
    UnknownSymbol { token: String, alphabet: &'static str },

    #[error("code {code} out of range for alphabet {alphabet}")]
    InvalidCode { code: usize, alphabet: &'static str },

    #[error("cannot parse symbol '{token}' at position {position}")]
    Parse { position: usize, token: String },

    #[error("position {index} out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("stop codon {codon} has no amino acid translation")]
    StopCodon { codon: String },

    #[error("unsupported alphabet pair {from} -> {to}")]
    UnsupportedAlphabetPair { from: &'static str, to: &'static str },

    #[error("alphabet mismatch: expected {expected}, got {actual}")]
    AlphabetMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("sequences do not have the same length")]
    NotAligned,
}

/// 核心 API 的 Result 别名
pub type BioResult<T> = Result<T, BioError>;
