//! Pure movement rules: legal-move enumeration per piece kind.

pub mod movegen;
