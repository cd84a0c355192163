//! Key block formats for transporting cryptographic keys.

pub mod tr31_2018;
