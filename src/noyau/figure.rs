// src/noyau/figure.rs
//
// Découpage d'une fraction en figures à remplir. Le dessin lui-même vit
// dans la vue ; ici on ne calcule que "combien de figures, combien de
// cases pleines dans chacune".

use super::fraction::FractionImpropre;

/// Figure utilisée pour représenter la fraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Figure {
    Cercle,
    Rectangle,
}

impl Figure {
    pub fn libelle(&self) -> &'static str {
        match self {
            Figure::Cercle => "円形（ピザ型）",
            Figure::Rectangle => "長方形（バー型）",
        }
    }
}

/// Remplissage d'une figure individuelle, découpée en `denominateur` cases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Remplissage {
    pub cases_pleines: u32,
    pub complet: bool,
}

/// Découpe n/d en figures successives : une figure pleine par unité entière,
/// plus une figure partielle si le reste est non nul. Un numerateur nul ne
/// produit aucune figure.
pub fn decouper(f: &FractionImpropre) -> Vec<Remplissage> {
    let mixte = f.en_mixte();
    let nb_figures = mixte.entier() + u32::from(mixte.numerateur() > 0);

    let mut restant = f.numerateur();
    (0..nb_figures)
        .map(|_| {
            let cases_pleines = restant.min(f.denominateur());
            restant -= cases_pleines;
            Remplissage {
                cases_pleines,
                complet: cases_pleines == f.denominateur(),
            }
        })
        .collect()
}
