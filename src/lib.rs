//! # bioseq-rust
//!
//! 内存中的生物序列处理库：编码字母表、符号序列、遗传密码翻译
//! 与 Needleman-Wunsch 全局比对。
//!
//! 本 crate 提供以下能力：
//!
//! - **字母表**：DNA / RNA / 蛋白质 / 密码子的符号 <-> 编码封闭映射
//! - **序列**：绑定字母表的编码串，整体解析、编辑与子序列
//! - **翻译**：DNA/RNA 转写、核酸互补、七张 NCBI 遗传密码表
//! - **比对**：置换矩阵 + 线性间隔罚分的全局比对，支持批量并行
//! - **容器与 IO**：同字母表序列集合、位点视图与 FASTA 读写
//!
//! ## 快速示例
//!
//! ```rust
//! use bioseq_rust::align::{align_global, SubstitutionMatrix};
//! use bioseq_rust::alphabet::Alphabet;
//! use bioseq_rust::seq::Sequence;
//! use bioseq_rust::translate::GeneticCode;
//!
//! # fn main() -> bioseq_rust::error::BioResult<()> {
//! // 解析一段开放阅读框并翻译为蛋白质
//! let orf = Sequence::new("orf", "ATGAAATGA", Alphabet::dna())?;
//! let codons = orf.recode(Alphabet::codon_dna())?;
//! let protein = GeneticCode::standard().translate_sequence(&codons)?;
//! assert_eq!(protein.to_string(), "MK*");
//!
//! // 全局比对
//! let first = Sequence::new("s1", "GATTACA", Alphabet::dna())?;
//! let second = Sequence::new("s2", "GATACA", Alphabet::dna())?;
//! let matrix = SubstitutionMatrix::uniform(Alphabet::dna(), 1, -1);
//! let result = align_global(&first, &second, &matrix, -2)?;
//! assert_eq!(result.score, 4);
//! assert_eq!(result.second.to_string(), "GA-TACA");
//! # Ok(())
//! # }
//! ```
//!
//! ## 模块说明
//!
//! - [`alphabet`] — 封闭字母表（DNA / RNA / 蛋白质 / 密码子）
//! - [`seq`] — 符号序列与序列工具函数
//! - [`translate`] — 转写器与遗传密码
//! - [`align`] — 置换得分矩阵与全局比对
//! - [`container`] — 序列集合与位点视图
//! - [`io`] — FASTA 解析与写出
//! - [`error`] — 统一错误类型

pub mod alphabet;
pub mod align;
pub mod container;
pub mod error;
pub mod io;
pub mod seq;
pub mod translate;
