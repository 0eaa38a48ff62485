//! 外部API連携

pub mod emailjs;
