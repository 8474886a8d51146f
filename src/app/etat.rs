//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l'état du simulateur (mode, figure, les deux formes de
//! la fraction, parcours d'étapes, quiz) et offrir des transitions simples,
//! sans logique d'affichage.
//!
//! Contrats :
//! - Les deux formes (impropre/mixte) sont recalculées ENSEMBLE dans la
//!   même transition : jamais l'une sans l'autre.
//! - Toute modification de fraction ou de forme saisie régénère le parcours
//!   et ramène son curseur à 0.
//! - Une saisie mixte non canonique est stockée telle quelle, jamais
//!   normalisée.
//! - Aucun dessin ici.

use rand::Rng;

use crate::noyau::etapes::{Parcours, Sens};
use crate::noyau::figure::Figure;
use crate::noyau::quiz::{Quiz, TypeQuiz};
use crate::noyau::{FractionImpropre, FractionMixte};

/// Mode d'affichage de l'application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Visualisation,
    Quiz,
}

impl Mode {
    pub fn libelle(&self) -> &'static str {
        match self {
            Mode::Visualisation => "可視化モード",
            Mode::Quiz => "クイズモード",
        }
    }
}

/// Forme éditée dans le mode visualisation ; fixe aussi le sens expliqué.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormeSaisie {
    Impropre,
    Mixte,
}

impl FormeSaisie {
    pub fn libelle(&self) -> &'static str {
        match self {
            FormeSaisie::Impropre => "仮分数",
            FormeSaisie::Mixte => "帯分数",
        }
    }
}

pub struct AppSimulateur {
    pub mode: Mode,
    pub figure: Figure,

    // --- mode visualisation ---
    forme_saisie: FormeSaisie,
    impropre: FractionImpropre,
    mixte: FractionMixte,
    parcours: Parcours,

    // --- mode quiz ---
    pub type_quiz: TypeQuiz,
    pub quiz: Quiz,
}

impl Default for AppSimulateur {
    fn default() -> Self {
        // 7/4 au démarrage : une figure pleine + une partielle, parlant
        // dès le premier écran
        let impropre = FractionImpropre::new(7, 4);
        let mixte = impropre.en_mixte();
        let parcours = Parcours::nouveau(Sens::ImpropreVersMixte, &impropre, &mixte);

        Self {
            mode: Mode::Visualisation,
            figure: Figure::Cercle,
            forme_saisie: FormeSaisie::Impropre,
            impropre,
            mixte,
            parcours,
            type_quiz: TypeQuiz::VisuelVersNombre,
            quiz: Quiz::default(),
        }
    }
}

impl AppSimulateur {
    pub fn impropre(&self) -> FractionImpropre {
        self.impropre
    }

    pub fn mixte(&self) -> FractionMixte {
        self.mixte
    }

    pub fn forme_saisie(&self) -> FormeSaisie {
        self.forme_saisie
    }

    /// Sens expliqué par le panneau d'étapes, dicté par la forme saisie.
    pub fn sens(&self) -> Sens {
        match self.forme_saisie {
            FormeSaisie::Impropre => Sens::ImpropreVersMixte,
            FormeSaisie::Mixte => Sens::MixteVersImpropre,
        }
    }

    pub fn parcours(&self) -> &Parcours {
        &self.parcours
    }

    /// Navigation dans les étapes (suivante/precedente/recommencer).
    pub fn parcours_mut(&mut self) -> &mut Parcours {
        &mut self.parcours
    }

    /// Dépose une nouvelle fraction impropre ; la forme mixte est recalculée
    /// dans la même transition et le parcours repart de zéro.
    pub fn modifier_impropre(&mut self, f: FractionImpropre) {
        self.impropre = f;
        self.mixte = f.en_mixte();
        debug_assert_eq!(self.impropre.valeur_exacte(), self.mixte.valeur_exacte());
        self.regenere_parcours();
    }

    /// Dépose une nouvelle fraction mixte, stockée telle quelle (pas de
    /// normalisation) ; la forme impropre est recalculée dans la même
    /// transition et le parcours repart de zéro.
    pub fn modifier_mixte(&mut self, m: FractionMixte) {
        self.mixte = m;
        self.impropre = m.en_impropre();
        debug_assert_eq!(self.mixte.valeur_exacte(), self.impropre.valeur_exacte());
        self.regenere_parcours();
    }

    /// Change la forme éditée, donc le sens expliqué : la progression en
    /// cours est abandonnée.
    pub fn changer_forme_saisie(&mut self, forme: FormeSaisie) {
        if self.forme_saisie != forme {
            self.forme_saisie = forme;
            self.regenere_parcours();
        }
    }

    fn regenere_parcours(&mut self) {
        self.parcours
            .regenerer(self.sens(), &self.impropre, &self.mixte);
    }

    /// Tire la question suivante avec les réglages courants.
    pub fn quiz_nouvelle_question<R: Rng>(&mut self, rng: &mut R) {
        self.quiz.nouvelle_question(rng, self.type_quiz, self.figure);
    }
}
