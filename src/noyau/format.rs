// src/noyau/format.rs

use super::fraction::{FractionImpropre, FractionMixte};

/// "7/4"
pub fn format_impropre(f: &FractionImpropre) -> String {
    format!("{}/{}", f.numerateur(), f.denominateur())
}

/// "1 と 3/4" ; la partie fractionnaire est omise quand le numerateur est
/// nul ("2", pas "2 と 0/4").
pub fn format_mixte(m: &FractionMixte) -> String {
    if m.numerateur() > 0 {
        format!("{} と {}/{}", m.entier(), m.numerateur(), m.denominateur())
    } else {
        format!("{}", m.entier())
    }
}
