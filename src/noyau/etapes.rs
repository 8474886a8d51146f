//! Étapes de conversion : la séquence d'explication pas à pas.
//!
//! La séquence est entièrement matérialisée (5 étapes fixes par sens) pour
//! un couple (sens, fraction) donné, puis parcourue avec un curseur borné.
//! Elle n'est jamais rapiécée : tout changement de fraction ou de sens la
//! régénère et ramène le curseur à 0.

use super::format::{format_impropre, format_mixte};
use super::fraction::{FractionImpropre, FractionMixte};

/// Champ mis en avant par l'affichage pendant une étape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Surlignage {
    Numerateur,
    Denominateur,
    Entier,
    Resultat,
}

/// Une étape d'explication. Immuable une fois générée.
#[derive(Clone, Debug)]
pub struct Etape {
    pub description: String,
    pub formule: Option<String>,
    pub resultat: Option<String>,
    pub surlignage: Option<Surlignage>,
}

/// Sens de la conversion expliquée.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sens {
    ImpropreVersMixte,
    MixteVersImpropre,
}

impl Sens {
    /// Titre du panneau d'explication.
    pub fn titre(&self) -> &'static str {
        match self {
            Sens::ImpropreVersMixte => "仮分数 → 帯分数",
            Sens::MixteVersImpropre => "帯分数 → 仮分数",
        }
    }
}

fn etape_formule(description: &str, formule: String, surlignage: Option<Surlignage>) -> Etape {
    Etape {
        description: description.into(),
        formule: Some(formule),
        resultat: None,
        surlignage,
    }
}

fn etape_resultat(description: &str, resultat: String, surlignage: Option<Surlignage>) -> Etape {
    Etape {
        description: description.into(),
        formule: None,
        resultat: Some(resultat),
        surlignage,
    }
}

/// Fonction pure de (sens, impropre, mixte) : mêmes entrées, mêmes étapes.
pub fn generer_etapes(
    sens: Sens,
    impropre: &FractionImpropre,
    mixte: &FractionMixte,
) -> Vec<Etape> {
    match sens {
        Sens::ImpropreVersMixte => etapes_impropre_vers_mixte(impropre),
        Sens::MixteVersImpropre => etapes_mixte_vers_impropre(mixte),
    }
}

fn etapes_impropre_vers_mixte(f: &FractionImpropre) -> Vec<Etape> {
    let mixte = f.en_mixte();
    let entier = mixte.entier();
    let reste = mixte.numerateur();

    vec![
        etape_formule("仮分数を帯分数に変換します。", format_impropre(f), None),
        etape_formule(
            "分子を分母で割って、整数部分（商）を求めます。",
            format!(
                "{} ÷ {} = {} あまり {}",
                f.numerateur(),
                f.denominateur(),
                entier,
                reste
            ),
            Some(Surlignage::Entier),
        ),
        etape_resultat(
            "商が整数部分になります。",
            format!("整数部分 = {entier}"),
            Some(Surlignage::Entier),
        ),
        etape_resultat(
            "余りが新しい分子になります。分母はそのままです。",
            format!("分数部分 = {}/{}", reste, f.denominateur()),
            Some(Surlignage::Numerateur),
        ),
        // reste nul : format_mixte omet la partie fractionnaire ("8/4 = 2")
        etape_resultat(
            "変換完了！",
            format!("{} = {}", format_impropre(f), format_mixte(&mixte)),
            Some(Surlignage::Resultat),
        ),
    ]
}

fn etapes_mixte_vers_impropre(m: &FractionMixte) -> Vec<Etape> {
    let impropre = m.en_impropre();
    let produit = m.entier().saturating_mul(m.denominateur());

    vec![
        // numerateur nul : la formule affiche l'entier seul
        etape_formule("帯分数を仮分数に変換します。", format_mixte(m), None),
        etape_formule(
            "整数部分と分母を掛けます。",
            format!("{} × {} = {}", m.entier(), m.denominateur(), produit),
            Some(Surlignage::Entier),
        ),
        etape_formule(
            "その結果に元の分子を足します。",
            format!("{} + {} = {}", produit, m.numerateur(), impropre.numerateur()),
            Some(Surlignage::Numerateur),
        ),
        etape_resultat(
            "これが新しい分子になります。分母はそのままです。",
            format!("新しい分子 = {}", impropre.numerateur()),
            Some(Surlignage::Numerateur),
        ),
        etape_resultat(
            "変換完了！",
            format!("{} = {}", format_mixte(m), format_impropre(&impropre)),
            Some(Surlignage::Resultat),
        ),
    ]
}

/* ------------------------ Parcours (curseur d'étapes) ------------------------ */

/// Parcours d'une séquence d'étapes : curseur borné dans [0, len-1].
///
/// Contrats :
/// - `suivante` bloque sur la dernière étape (l'UI propose alors de
///   recommencer, jamais d'indice hors bornes).
/// - `precedente` plancher à 0 ; `recommencer` idempotent.
/// - `regenerer` abandonne silencieusement la progression en cours.
#[derive(Clone, Debug)]
pub struct Parcours {
    etapes: Vec<Etape>,
    curseur: usize,
}

impl Parcours {
    pub fn nouveau(sens: Sens, impropre: &FractionImpropre, mixte: &FractionMixte) -> Self {
        Self {
            etapes: generer_etapes(sens, impropre, mixte),
            curseur: 0,
        }
    }

    /// Régénère la séquence et ramène le curseur à 0.
    pub fn regenerer(&mut self, sens: Sens, impropre: &FractionImpropre, mixte: &FractionMixte) {
        self.etapes = generer_etapes(sens, impropre, mixte);
        self.curseur = 0;
    }

    pub fn etapes(&self) -> &[Etape] {
        &self.etapes
    }

    pub fn curseur(&self) -> usize {
        self.curseur
    }

    /// Toujours définie : une séquence compte 5 étapes fixes.
    pub fn etape_courante(&self) -> &Etape {
        &self.etapes[self.curseur]
    }

    pub fn est_premiere(&self) -> bool {
        self.curseur == 0
    }

    pub fn est_derniere(&self) -> bool {
        self.curseur + 1 == self.etapes.len()
    }

    pub fn suivante(&mut self) {
        if self.curseur + 1 < self.etapes.len() {
            self.curseur += 1;
        }
    }

    pub fn precedente(&mut self) {
        self.curseur = self.curseur.saturating_sub(1);
    }

    pub fn recommencer(&mut self) {
        self.curseur = 0;
    }
}
