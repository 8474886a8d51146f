//! Quiz : tirage des questions, correction, score.
//!
//! Cycle de vie d'une question : Repos -> Active -> Corrigee, puis retour
//! en Active (question suivante) ou en Repos (remise à zéro). L'état est
//! une variante taguée : être "corrigé" sans question est irreprésentable.
//!
//! Contrats :
//! - Le tirage passe par un `rand::Rng` injecté ; les tests fournissent une
//!   source déterministe, la vue fournit `thread_rng`.
//! - Chaque correction avance `total` de 1 exactement ; `justes` de 0 ou 1.
//! - Les comparaisons sont composante par composante, jamais par valeur.

use rand::Rng;

use super::figure::Figure;
use super::fraction::{FractionImpropre, FractionMixte};

/// Type d'exercice proposé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeQuiz {
    /// Lire la figure affichée et répondre en impropre OU en mixte.
    VisuelVersNombre,
    /// Convertir la fraction impropre affichée en forme mixte.
    Conversion,
}

impl TypeQuiz {
    pub fn libelle(&self) -> &'static str {
        match self {
            TypeQuiz::VisuelVersNombre => "図形から数値を当てる",
            TypeQuiz::Conversion => "変換トレーニング",
        }
    }

    /// Consigne affichée avant de démarrer.
    pub fn consigne(&self) -> &'static str {
        match self {
            TypeQuiz::VisuelVersNombre => {
                "表示された図形を見て、仮分数または帯分数で答えてください。"
            }
            TypeQuiz::Conversion => "表示された分数を変換してください。",
        }
    }
}

/// Question tirée ; immuable, jetée au tirage suivant ou à la remise à zéro.
#[derive(Clone, Debug)]
pub struct Question {
    pub id: u32,
    pub type_quiz: TypeQuiz,
    pub impropre: FractionImpropre,
    /// Forme mixte canonique correspondante (jamais réduite).
    pub mixte: FractionMixte,
    pub figure: Figure,
}

/// Tire une question d'exercice :
/// - denominateur uniforme dans [2, 9]
/// - entier uniforme dans [1, 4] (le tirage ne produit jamais une question
///   sans partie entière)
/// - reste uniforme dans [0, denominateur-1] (un reste nul donne une
///   équivalence en nombre entier, c'est voulu)
pub fn generer_question<R: Rng>(
    rng: &mut R,
    id: u32,
    type_quiz: TypeQuiz,
    figure: Figure,
) -> Question {
    let denominateur: u32 = rng.gen_range(2..=9);
    let entier: u32 = rng.gen_range(1..=4);
    let reste: u32 = rng.gen_range(0..denominateur);

    let impropre = FractionImpropre::new(entier * denominateur + reste, denominateur);
    Question {
        id,
        type_quiz,
        impropre,
        mixte: impropre.en_mixte(),
        figure,
    }
}

/// Réponse en cours de saisie. Les deux groupes sont indépendants : ils ne
/// sont jamais confrontés l'un à l'autre.
#[derive(Clone, Debug)]
pub struct Saisie {
    pub impropre: FractionImpropre,
    pub mixte: FractionMixte,
}

impl Saisie {
    /// Valeurs de départ : numerateurs et entier à 0, denominateurs repris
    /// de la question.
    fn pour(question: &Question) -> Self {
        Self {
            impropre: FractionImpropre::new(0, question.impropre.denominateur()),
            mixte: FractionMixte::new(0, 0, question.mixte.denominateur()),
        }
    }
}

/// Score de la session. Remis à zéro uniquement par `reinitialiser`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub justes: u32,
    pub total: u32,
}

/// Cycle de vie d'une question. La saisie n'existe qu'avec une question.
#[derive(Clone, Debug, Default)]
pub enum Phase {
    /// Aucune question en cours.
    #[default]
    Repos,
    /// Question affichée, réponse en cours de saisie.
    Active { question: Question, saisie: Saisie },
    /// Réponse jugée ; la saisie est figée pour l'affichage.
    Corrigee {
        question: Question,
        saisie: Saisie,
        juste: bool,
    },
}

/// Moteur de quiz : phase + score. Toutes les transitions sont synchrones.
#[derive(Clone, Debug, Default)]
pub struct Quiz {
    phase: Phase,
    score: Score,
}

impl Quiz {
    pub fn score(&self) -> Score {
        self.score
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn question(&self) -> Option<&Question> {
        match &self.phase {
            Phase::Repos => None,
            Phase::Active { question, .. } | Phase::Corrigee { question, .. } => Some(question),
        }
    }

    /// Saisie visible (en cours ou figée).
    pub fn saisie(&self) -> Option<&Saisie> {
        match &self.phase {
            Phase::Repos => None,
            Phase::Active { saisie, .. } | Phase::Corrigee { saisie, .. } => Some(saisie),
        }
    }

    /// Saisie éditable : seulement tant que la question n'est pas corrigée.
    pub fn saisie_mut(&mut self) -> Option<&mut Saisie> {
        match &mut self.phase {
            Phase::Active { saisie, .. } => Some(saisie),
            _ => None,
        }
    }

    /// Verdict de la question courante, une fois corrigée.
    pub fn resultat(&self) -> Option<bool> {
        match &self.phase {
            Phase::Corrigee { juste, .. } => Some(*juste),
            _ => None,
        }
    }

    /// Tire une nouvelle question (id = total + 1) et ouvre la saisie.
    /// Valide depuis n'importe quelle phase.
    pub fn nouvelle_question<R: Rng>(&mut self, rng: &mut R, type_quiz: TypeQuiz, figure: Figure) {
        let question = generer_question(rng, self.score.total + 1, type_quiz, figure);
        log::debug!(
            "question #{} : {}/{}",
            question.id,
            question.impropre.numerateur(),
            question.impropre.denominateur()
        );
        let saisie = Saisie::pour(&question);
        self.phase = Phase::Active { question, saisie };
    }

    /// Juge la réponse courante : `total` avance toujours de 1, `justes`
    /// seulement si la réponse est bonne. Sans effet hors de la phase
    /// Active (retourne None).
    pub fn corriger(&mut self) -> Option<bool> {
        match std::mem::take(&mut self.phase) {
            Phase::Active { question, saisie } => {
                let juste = juger(&question, &saisie);
                self.score.total += 1;
                if juste {
                    self.score.justes += 1;
                }
                log::debug!(
                    "question #{} corrigée : {} ({}/{})",
                    question.id,
                    if juste { "juste" } else { "fausse" },
                    self.score.justes,
                    self.score.total
                );
                self.phase = Phase::Corrigee {
                    question,
                    saisie,
                    juste,
                };
                Some(juste)
            }
            autre => {
                self.phase = autre;
                None
            }
        }
    }

    /// Remise à zéro : score effacé, question jetée, retour au repos.
    pub fn reinitialiser(&mut self) {
        self.phase = Phase::Repos;
        self.score = Score::default();
    }
}

/// Règle de correction.
/// - VisuelVersNombre : l'une OU l'autre forme suffit, chacune comparée
///   champ à champ contre sa forme canonique. Une saisie absente garde ses
///   valeurs de départ et sera simplement fausse.
/// - Conversion : la saisie mixte est convertie en impropre puis comparée
///   champ à champ ; une saisie non canonique (numerateur >= denominateur)
///   reste juste si la conversion retombe sur la bonne fraction.
fn juger(question: &Question, saisie: &Saisie) -> bool {
    match question.type_quiz {
        TypeQuiz::VisuelVersNombre => {
            saisie.impropre == question.impropre || saisie.mixte == question.mixte
        }
        TypeQuiz::Conversion => saisie.mixte.en_impropre() == question.impropre,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn question_fixe(type_quiz: TypeQuiz, impropre: FractionImpropre) -> Question {
        Question {
            id: 1,
            type_quiz,
            impropre,
            mixte: impropre.en_mixte(),
            figure: Figure::Cercle,
        }
    }

    fn quiz_avec(question: Question) -> Quiz {
        let saisie = Saisie::pour(&question);
        let mut quiz = Quiz::default();
        quiz.phase = Phase::Active { question, saisie };
        quiz
    }

    #[test]
    fn saisie_de_depart_reprend_les_denominateurs() {
        let q = question_fixe(TypeQuiz::VisuelVersNombre, FractionImpropre::new(7, 4));
        let s = Saisie::pour(&q);
        assert_eq!(s.impropre, FractionImpropre::new(0, 4));
        assert_eq!(s.mixte, FractionMixte::new(0, 0, 4));
    }

    #[test]
    fn visuel_impropre_seule_suffit() {
        // saisie mixte laissée à 0 と 0/1 : la forme impropre juste suffit,
        // les deux groupes ne sont pas confrontés entre eux
        let mut quiz = quiz_avec(question_fixe(
            TypeQuiz::VisuelVersNombre,
            FractionImpropre::new(7, 4),
        ));
        let saisie = quiz.saisie_mut().unwrap();
        saisie.impropre = FractionImpropre::new(7, 4);
        saisie.mixte = FractionMixte::new(0, 0, 1);

        assert_eq!(quiz.corriger(), Some(true));
        assert_eq!(quiz.score(), Score { justes: 1, total: 1 });
    }

    #[test]
    fn visuel_mixte_seule_suffit() {
        let mut quiz = quiz_avec(question_fixe(
            TypeQuiz::VisuelVersNombre,
            FractionImpropre::new(7, 4),
        ));
        quiz.saisie_mut().unwrap().mixte = FractionMixte::new(1, 3, 4);

        assert_eq!(quiz.corriger(), Some(true));
    }

    #[test]
    fn visuel_aucune_forme_juste() {
        let mut quiz = quiz_avec(question_fixe(
            TypeQuiz::VisuelVersNombre,
            FractionImpropre::new(7, 4),
        ));
        quiz.saisie_mut().unwrap().impropre = FractionImpropre::new(6, 4);

        assert_eq!(quiz.corriger(), Some(false));
        assert_eq!(quiz.score(), Score { justes: 0, total: 1 });
    }

    #[test]
    fn conversion_mixte_canonique_juste() {
        // 11/4 attendu ; saisie 2 と 3/4 -> 11/4
        let mut quiz = quiz_avec(question_fixe(
            TypeQuiz::Conversion,
            FractionImpropre::new(11, 4),
        ));
        quiz.saisie_mut().unwrap().mixte = FractionMixte::new(2, 3, 4);

        assert_eq!(quiz.corriger(), Some(true));
    }

    #[test]
    fn conversion_mixte_non_canonique_acceptee() {
        // 1 と 7/4 -> 11/4 : juste aussi, l'égalité porte sur le converti
        let mut quiz = quiz_avec(question_fixe(
            TypeQuiz::Conversion,
            FractionImpropre::new(11, 4),
        ));
        quiz.saisie_mut().unwrap().mixte = FractionMixte::new(1, 7, 4);

        assert_eq!(quiz.corriger(), Some(true));
    }

    #[test]
    fn conversion_mauvais_denominateur_fausse() {
        // 22/8 a la même valeur que 11/4 mais pas les mêmes composantes
        let mut quiz = quiz_avec(question_fixe(
            TypeQuiz::Conversion,
            FractionImpropre::new(11, 4),
        ));
        quiz.saisie_mut().unwrap().mixte = FractionMixte::new(2, 6, 8);

        assert_eq!(quiz.corriger(), Some(false));
    }

    #[test]
    fn corriger_hors_question_sans_effet() {
        let mut quiz = Quiz::default();
        assert_eq!(quiz.corriger(), None);
        assert_eq!(quiz.score(), Score::default());

        // une question déjà corrigée ne se recorrige pas
        let mut quiz = quiz_avec(question_fixe(
            TypeQuiz::VisuelVersNombre,
            FractionImpropre::new(7, 4),
        ));
        quiz.corriger();
        assert_eq!(quiz.corriger(), None);
        assert_eq!(quiz.score().total, 1);
    }

    #[test]
    fn identifiants_suivent_le_total() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut quiz = Quiz::default();

        quiz.nouvelle_question(&mut rng, TypeQuiz::Conversion, Figure::Cercle);
        assert_eq!(quiz.question().unwrap().id, 1);
        quiz.corriger();

        quiz.nouvelle_question(&mut rng, TypeQuiz::Conversion, Figure::Cercle);
        assert_eq!(quiz.question().unwrap().id, 2);
    }

    #[test]
    fn reinitialiser_efface_tout() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut quiz = Quiz::default();
        quiz.nouvelle_question(&mut rng, TypeQuiz::VisuelVersNombre, Figure::Rectangle);
        quiz.corriger();

        quiz.reinitialiser();
        assert!(quiz.question().is_none());
        assert!(quiz.saisie().is_none());
        assert_eq!(quiz.score(), Score::default());
    }

    #[test]
    fn saisie_figee_apres_correction() {
        let mut quiz = quiz_avec(question_fixe(
            TypeQuiz::VisuelVersNombre,
            FractionImpropre::new(7, 4),
        ));
        quiz.corriger();
        assert!(quiz.saisie_mut().is_none());
        assert!(quiz.saisie().is_some());
    }
}
