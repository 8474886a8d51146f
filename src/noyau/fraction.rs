//! Fractions impropres et mixtes.
//!
//! Deux vues du même nombre :
//! - impropre : numerateur/denominateur (7/4)
//! - mixte    : entier + numerateur/denominateur (1 + 3/4)
//!
//! Contrats :
//! - denominateur >= 1, garanti par construction ET par toute mutation
//!   (aucune division par zéro possible dans le noyau).
//! - AUCUNE réduction (pas de pgcd) : 14/8 reste 14/8. Seule la *valeur*
//!   (`valeur_exacte`) se normalise, jamais la fraction stockée.
//! - Conversions totales : une fois le type construit, rien n'échoue.
//! - La forme mixte saisie par l'utilisateur peut avoir numerateur >=
//!   denominateur ; on ne normalise jamais une saisie.

use num_rational::Ratio;
use num_traits::ToPrimitive;

/// Fraction impropre : numerateur/denominateur, numerateur libre de dépasser
/// le denominateur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FractionImpropre {
    numerateur: u32,
    denominateur: u32, // >= 1
}

/// Fraction mixte : entier + numerateur/denominateur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FractionMixte {
    entier: u32,
    numerateur: u32,
    denominateur: u32, // >= 1
}

impl Default for FractionImpropre {
    fn default() -> Self {
        Self::new(0, 1)
    }
}

impl Default for FractionMixte {
    fn default() -> Self {
        Self::new(0, 0, 1)
    }
}

impl FractionImpropre {
    /// Un denominateur nul est ramené à 1.
    pub fn new(numerateur: u32, denominateur: u32) -> Self {
        Self {
            numerateur,
            denominateur: denominateur.max(1),
        }
    }

    pub fn numerateur(&self) -> u32 {
        self.numerateur
    }

    pub fn denominateur(&self) -> u32 {
        self.denominateur
    }

    pub fn regle_numerateur(&mut self, numerateur: u32) {
        self.numerateur = numerateur;
    }

    /// Même clampe qu'à la construction : 0 devient 1.
    pub fn regle_denominateur(&mut self, denominateur: u32) {
        self.denominateur = denominateur.max(1);
    }

    /// true ssi numerateur >= denominateur.
    pub fn est_impropre(&self) -> bool {
        self.numerateur >= self.denominateur
    }

    /// Forme mixte canonique : 0 <= numerateur < denominateur garanti.
    pub fn en_mixte(&self) -> FractionMixte {
        FractionMixte {
            entier: self.numerateur / self.denominateur,
            numerateur: self.numerateur % self.denominateur,
            denominateur: self.denominateur,
        }
    }

    /// Valeur exacte. `Ratio` se réduit en tant que valeur (14/8 et 7/4 sont
    /// la même valeur) ; la fraction stockée, elle, n'est jamais réduite.
    pub fn valeur_exacte(&self) -> Ratio<u32> {
        Ratio::new(self.numerateur, self.denominateur)
    }

    /// Lecture décimale, pour affichage ou comparaison approximative
    /// seulement. Les corrections du quiz comparent composante par
    /// composante, jamais par cette valeur.
    pub fn valeur(&self) -> f64 {
        self.valeur_exacte().to_f64().unwrap_or(0.0)
    }
}

impl FractionMixte {
    /// Un denominateur nul est ramené à 1. Le numerateur n'est PAS borné par
    /// le denominateur : la forme non canonique est une saisie légale.
    pub fn new(entier: u32, numerateur: u32, denominateur: u32) -> Self {
        Self {
            entier,
            numerateur,
            denominateur: denominateur.max(1),
        }
    }

    pub fn entier(&self) -> u32 {
        self.entier
    }

    pub fn numerateur(&self) -> u32 {
        self.numerateur
    }

    pub fn denominateur(&self) -> u32 {
        self.denominateur
    }

    pub fn regle_entier(&mut self, entier: u32) {
        self.entier = entier;
    }

    pub fn regle_numerateur(&mut self, numerateur: u32) {
        self.numerateur = numerateur;
    }

    pub fn regle_denominateur(&mut self, denominateur: u32) {
        self.denominateur = denominateur.max(1);
    }

    /// entier*denominateur + numerateur, denominateur inchangé. Totale :
    /// accepte aussi une forme non canonique (le resultat reste juste).
    /// Arithmétique saturante, les bornes des saisies restant très en deçà.
    pub fn en_impropre(&self) -> FractionImpropre {
        FractionImpropre {
            numerateur: self
                .entier
                .saturating_mul(self.denominateur)
                .saturating_add(self.numerateur),
            denominateur: self.denominateur,
        }
    }

    /// Valeur exacte : entier + numerateur/denominateur.
    pub fn valeur_exacte(&self) -> Ratio<u32> {
        Ratio::from_integer(self.entier) + Ratio::new(self.numerateur, self.denominateur)
    }
}

#[cfg(test)]
mod tests {
    use super::{FractionImpropre, FractionMixte};

    #[test]
    fn sept_quarts_en_mixte() {
        let m = FractionImpropre::new(7, 4).en_mixte();
        assert_eq!(m, FractionMixte::new(1, 3, 4));
    }

    #[test]
    fn reste_nul_en_mixte() {
        let m = FractionImpropre::new(8, 4).en_mixte();
        assert_eq!(m, FractionMixte::new(2, 0, 4));
    }

    #[test]
    fn mixte_en_impropre() {
        let f = FractionMixte::new(1, 3, 4).en_impropre();
        assert_eq!(f, FractionImpropre::new(7, 4));
    }

    #[test]
    fn mixte_non_canonique_acceptee() {
        // numerateur >= denominateur : pas une erreur, juste non canonique
        let f = FractionMixte::new(1, 7, 4).en_impropre();
        assert_eq!(f, FractionImpropre::new(11, 4));
    }

    #[test]
    fn denominateur_zero_clampe_a_un() {
        assert_eq!(FractionImpropre::new(7, 0).denominateur(), 1);
        assert_eq!(FractionMixte::new(1, 2, 0).denominateur(), 1);

        let mut f = FractionImpropre::new(7, 4);
        f.regle_denominateur(0);
        assert_eq!(f.denominateur(), 1);

        let mut m = FractionMixte::new(1, 3, 4);
        m.regle_denominateur(0);
        assert_eq!(m.denominateur(), 1);
    }

    #[test]
    fn est_impropre() {
        assert!(FractionImpropre::new(7, 4).est_impropre());
        assert!(FractionImpropre::new(4, 4).est_impropre());
        assert!(!FractionImpropre::new(3, 4).est_impropre());
    }

    #[test]
    fn valeur_exacte_sans_reduction_stockee() {
        let a = FractionImpropre::new(14, 8);
        let b = FractionImpropre::new(7, 4);

        // même valeur...
        assert_eq!(a.valeur_exacte(), b.valeur_exacte());
        // ...mais composantes intactes : on ne réduit jamais le stocké
        assert_eq!(a.numerateur(), 14);
        assert_eq!(a.denominateur(), 8);
        assert_ne!(a, b);
    }

    #[test]
    fn valeur_decimale() {
        assert_eq!(FractionImpropre::new(7, 4).valeur(), 1.75);
        assert_eq!(
            FractionMixte::new(1, 3, 4).valeur_exacte(),
            FractionImpropre::new(7, 4).valeur_exacte()
        );
    }
}
