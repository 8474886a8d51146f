//! Noyau du simulateur de fractions
//!
//! Organisation interne :
//! - fraction.rs : fractions impropre/mixte + conversions exactes
//! - format.rs   : affichage texte (7/4, 1 と 3/4)
//! - etapes.rs   : séquence d'explication pas à pas + curseur
//! - figure.rs   : découpage d'une fraction en figures à remplir
//! - quiz.rs     : tirage des questions, correction, score

pub mod etapes;
pub mod figure;
pub mod format;
pub mod fraction;
pub mod quiz;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use fraction::{FractionImpropre, FractionMixte};
