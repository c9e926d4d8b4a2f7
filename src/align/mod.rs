//! 序列比对：置换得分矩阵与 Needleman-Wunsch 全局比对

pub mod matrix;
pub mod nw;

pub use matrix::SubstitutionMatrix;
pub use nw::{align_global, align_global_many, NwAlignment};
