// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppSimulateur (etat.rs) pour natif + wasm
// - Deux écrans : visualisation (figures + saisie + étapes) et quiz
// - Tout le dessin vit ici ; les calculs restent dans le noyau
//   (figure::decouper fournit les remplissages, la vue ne fait que peindre)

use eframe::egui;

use super::etat::{AppSimulateur, FormeSaisie, Mode};
use crate::noyau::etapes::Surlignage;
use crate::noyau::figure::{self, Figure, Remplissage};
use crate::noyau::format::{format_impropre, format_mixte};
use crate::noyau::quiz::{Phase, TypeQuiz};
use crate::noyau::{FractionImpropre, FractionMixte};

const COULEUR_PLEINE: egui::Color32 = egui::Color32::from_rgb(91, 141, 239);
const COULEUR_COMPLETE: egui::Color32 = egui::Color32::from_rgb(122, 106, 243);
const COULEUR_JUSTE: egui::Color32 = egui::Color32::from_rgb(46, 160, 67);
const COULEUR_ENTIER: egui::Color32 = egui::Color32::from_rgb(91, 141, 239);
const COULEUR_NUMERATEUR: egui::Color32 = egui::Color32::from_rgb(46, 160, 67);
const COULEUR_DENOMINATEUR: egui::Color32 = egui::Color32::from_rgb(212, 132, 31);

impl AppSimulateur {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_entete(ui);

                ui.separator();

                match self.mode {
                    Mode::Visualisation => self.ui_visualisation(ui),
                    Mode::Quiz => self.ui_quiz(ui),
                }

                ui.add_space(12.0);
                ui.separator();
                ui.vertical_centered(|ui| {
                    ui.weak("分数の理解を深めよう");
                });
            });
    }

    fn ui_entete(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading("分数シミュレーター");
            ui.weak("仮分数と帯分数の可視化と相互変換");

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                // centre les deux onglets à la main
                let largeur = 220.0;
                ui.add_space((ui.available_width() - largeur).max(0.0) / 2.0);
                for mode in [Mode::Visualisation, Mode::Quiz] {
                    if ui.selectable_label(self.mode == mode, mode.libelle()).clicked() {
                        self.mode = mode;
                    }
                }
            });
        });
    }

    /* ------------------------ Mode visualisation ------------------------ */

    fn ui_visualisation(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.strong("分数可視化モード");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                egui::ComboBox::from_label("図形の種類")
                    .selected_text(self.figure.libelle())
                    .show_ui(ui, |ui| {
                        for figure in [Figure::Cercle, Figure::Rectangle] {
                            ui.selectable_value(&mut self.figure, figure, figure.libelle());
                        }
                    });
            });
        });

        Self::ui_figures(ui, self.impropre(), self.figure, true);

        ui.add_space(4.0);
        self.ui_saisie_fraction(ui);

        ui.add_space(8.0);
        ui.separator();

        self.ui_etapes(ui);
    }

    fn ui_saisie_fraction(&mut self, ui: &mut egui::Ui) {
        let mut forme = self.forme_saisie();
        egui::ComboBox::from_label("入力モード")
            .selected_text(forme.libelle())
            .show_ui(ui, |ui| {
                for f in [FormeSaisie::Impropre, FormeSaisie::Mixte] {
                    ui.selectable_value(&mut forme, f, f.libelle());
                }
            });
        self.changer_forme_saisie(forme);

        match self.forme_saisie() {
            FormeSaisie::Impropre => {
                let f = self.impropre();
                let mut numerateur = f.numerateur();
                let mut denominateur = f.denominateur();
                let mut change = false;

                ui.horizontal(|ui| {
                    ui.label("分子");
                    change |= ui
                        .add(egui::DragValue::new(&mut numerateur).range(0..=99))
                        .changed();
                    ui.label("／ 分母");
                    change |= ui
                        .add(egui::DragValue::new(&mut denominateur).range(1..=12))
                        .changed();
                });
                change |= ui
                    .add(egui::Slider::new(&mut numerateur, 0..=99).text("分子"))
                    .changed();
                change |= ui
                    .add(egui::Slider::new(&mut denominateur, 1..=12).text("分母"))
                    .changed();

                if change {
                    self.modifier_impropre(FractionImpropre::new(numerateur, denominateur));
                }
            }
            FormeSaisie::Mixte => {
                let m = self.mixte();
                let mut entier = m.entier();
                let mut numerateur = m.numerateur();
                let mut denominateur = m.denominateur();
                let mut change = false;

                ui.horizontal(|ui| {
                    ui.label("整数");
                    change |= ui
                        .add(egui::DragValue::new(&mut entier).range(0..=10))
                        .changed();
                    ui.label("と");
                    change |= ui
                        .add(egui::DragValue::new(&mut numerateur).range(0..=99))
                        .changed();
                    ui.label("／ 分母");
                    change |= ui
                        .add(egui::DragValue::new(&mut denominateur).range(1..=12))
                        .changed();
                });
                change |= ui
                    .add(egui::Slider::new(&mut entier, 0..=10).text("整数"))
                    .changed();
                // la saisie mixte a le droit d'être non canonique : la borne
                // haute du numerateur ne dépend pas du denominateur
                change |= ui
                    .add(egui::Slider::new(&mut numerateur, 0..=99).text("分子"))
                    .changed();
                change |= ui
                    .add(egui::Slider::new(&mut denominateur, 1..=12).text("分母"))
                    .changed();

                if change {
                    self.modifier_mixte(FractionMixte::new(entier, numerateur, denominateur));
                }
            }
        }
    }

    /* ------------------------ Panneau d'étapes ------------------------ */

    fn ui_etapes(&mut self, ui: &mut egui::Ui) {
        ui.strong(format!("{} の変換手順", self.sens().titre()));

        let total = self.parcours().etapes().len();
        let curseur = self.parcours().curseur();

        Self::pastilles(ui, total, curseur);
        ui.monospace(format!("ステップ {} / {}", curseur + 1, total));

        let etape = self.parcours().etape_courante().clone();
        ui.label(&etape.description);

        if let Some(formule) = &etape.formule {
            Self::champ_monospace(ui, "etape_formule", formule, couleur_surlignage(etape.surlignage));
        }
        if let Some(resultat) = &etape.resultat {
            Self::champ_monospace(ui, "etape_resultat", resultat, couleur_surlignage(etape.surlignage));
        }

        ui.horizontal(|ui| {
            let premiere = self.parcours().est_premiere();
            let derniere = self.parcours().est_derniere();

            if ui.add_enabled(!premiere, egui::Button::new("前へ")).clicked() {
                self.parcours_mut().precedente();
            }
            // sur la dernière étape, "suivant" laisse place à "recommencer"
            if derniere {
                if ui.button("最初から").clicked() {
                    self.parcours_mut().recommencer();
                }
            } else if ui.button("次へ").clicked() {
                self.parcours_mut().suivante();
            }
        });
    }

    fn pastilles(ui: &mut egui::Ui, total: usize, curseur: usize) {
        const PAS: f32 = 18.0;
        let (resp, peintre) =
            ui.allocate_painter(egui::vec2(PAS * total as f32, 16.0), egui::Sense::hover());
        let y = resp.rect.center().y;

        for i in 0..total {
            let centre = egui::pos2(resp.rect.left() + PAS * (i as f32 + 0.5), y);
            let couleur = if i <= curseur {
                COULEUR_PLEINE
            } else {
                ui.visuals().weak_text_color()
            };
            peintre.circle_filled(centre, 4.0, couleur);
            if i == curseur {
                peintre.circle_stroke(centre, 6.5, egui::Stroke::new(1.5, COULEUR_PLEINE));
            }
        }
    }

    /* ------------------------ Mode quiz ------------------------ */

    fn ui_quiz(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.strong("クイズモード");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let score = self.quiz.score();
                ui.monospace(format!("正解: {} / {}", score.justes, score.total));
            });
        });

        ui.horizontal(|ui| {
            egui::ComboBox::from_label("クイズの種類")
                .selected_text(self.type_quiz.libelle())
                .show_ui(ui, |ui| {
                    for t in [TypeQuiz::VisuelVersNombre, TypeQuiz::Conversion] {
                        ui.selectable_value(&mut self.type_quiz, t, t.libelle());
                    }
                });
            egui::ComboBox::from_label("図形の種類")
                .selected_text(self.figure.libelle())
                .show_ui(ui, |ui| {
                    for figure in [Figure::Cercle, Figure::Rectangle] {
                        ui.selectable_value(&mut self.figure, figure, figure.libelle());
                    }
                });
        });

        ui.add_space(4.0);

        // écran de démarrage tant qu'aucune question n'est tirée
        if matches!(self.quiz.phase(), Phase::Repos) {
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                ui.label(self.type_quiz.consigne());
                ui.add_space(8.0);
                if ui.button("クイズを開始").clicked() {
                    self.quiz_nouvelle_question(&mut rand::thread_rng());
                }
                ui.add_space(16.0);
            });
            return;
        }
        let Some(question) = self.quiz.question().cloned() else {
            return;
        };

        let verdict = self.quiz.resultat();
        ui.monospace(format!("問題 {}", question.id));

        // c'est le type porté par la question qui commande l'écran, pas le
        // sélecteur : changer le sélecteur en cours de question n'affecte
        // que le tirage suivant
        match question.type_quiz {
            TypeQuiz::VisuelVersNombre => {
                // la figure de la question, pas celle du sélecteur
                Self::ui_figures(ui, question.impropre, question.figure, false);
                self.ui_reponse_visuel(ui, verdict.is_some());
            }
            TypeQuiz::Conversion => {
                Self::champ_monospace(
                    ui,
                    "question_conversion",
                    &format!("{} を帯分数に変換", format_impropre(&question.impropre)),
                    None,
                );
                self.ui_reponse_conversion(ui, verdict.is_some());
            }
        }

        if let Some(juste) = verdict {
            if juste {
                ui.label(
                    egui::RichText::new("正解!")
                        .strong()
                        .size(18.0)
                        .color(COULEUR_JUSTE),
                );
            } else {
                ui.label(
                    egui::RichText::new("不正解")
                        .strong()
                        .size(18.0)
                        .color(ui.visuals().error_fg_color),
                );
                ui.label(format!(
                    "正解: {} = {}",
                    format_impropre(&question.impropre),
                    format_mixte(&question.mixte)
                ));
            }
        }

        ui.horizontal(|ui| match verdict {
            None => {
                if ui.button("回答する").clicked() {
                    self.quiz.corriger();
                }
            }
            Some(_) => {
                if ui.button("次の問題").clicked() {
                    self.quiz_nouvelle_question(&mut rand::thread_rng());
                }
                if ui.button("リセット").clicked() {
                    self.quiz.reinitialiser();
                }
            }
        });
    }

    /// Les deux groupes de réponse (impropre / mixte) ; figés après correction.
    fn ui_reponse_visuel(&mut self, ui: &mut egui::Ui, fige: bool) {
        let Some(saisie) = self.quiz.saisie() else {
            return;
        };
        let mut num_impropre = saisie.impropre.numerateur();
        let mut den_impropre = saisie.impropre.denominateur();
        let mut entier = saisie.mixte.entier();
        let mut num_mixte = saisie.mixte.numerateur();
        let mut den_mixte = saisie.mixte.denominateur();
        let mut change = false;

        ui.label("仮分数で答える:");
        ui.horizontal(|ui| {
            change |= ui
                .add_enabled(!fige, egui::DragValue::new(&mut num_impropre).range(0..=99))
                .changed();
            ui.label("/");
            change |= ui
                .add_enabled(!fige, egui::DragValue::new(&mut den_impropre).range(1..=12))
                .changed();
        });

        ui.label("または帯分数で答える:");
        ui.horizontal(|ui| {
            change |= ui
                .add_enabled(!fige, egui::DragValue::new(&mut entier).range(0..=10))
                .changed();
            ui.label("と");
            change |= ui
                .add_enabled(!fige, egui::DragValue::new(&mut num_mixte).range(0..=99))
                .changed();
            ui.label("/");
            change |= ui
                .add_enabled(!fige, egui::DragValue::new(&mut den_mixte).range(1..=12))
                .changed();
        });

        if change {
            if let Some(saisie) = self.quiz.saisie_mut() {
                saisie.impropre.regle_numerateur(num_impropre);
                saisie.impropre.regle_denominateur(den_impropre);
                saisie.mixte.regle_entier(entier);
                saisie.mixte.regle_numerateur(num_mixte);
                saisie.mixte.regle_denominateur(den_mixte);
            }
        }
    }

    /// Le groupe de réponse mixte seul (exercice de conversion).
    fn ui_reponse_conversion(&mut self, ui: &mut egui::Ui, fige: bool) {
        let Some(saisie) = self.quiz.saisie() else {
            return;
        };
        let mut entier = saisie.mixte.entier();
        let mut numerateur = saisie.mixte.numerateur();
        let mut denominateur = saisie.mixte.denominateur();
        let mut change = false;

        ui.label("帯分数:");
        ui.horizontal(|ui| {
            change |= ui
                .add_enabled(!fige, egui::DragValue::new(&mut entier).range(0..=10))
                .changed();
            ui.label("と");
            change |= ui
                .add_enabled(!fige, egui::DragValue::new(&mut numerateur).range(0..=99))
                .changed();
            ui.label("/");
            change |= ui
                .add_enabled(!fige, egui::DragValue::new(&mut denominateur).range(1..=12))
                .changed();
        });

        if change {
            if let Some(saisie) = self.quiz.saisie_mut() {
                saisie.mixte.regle_entier(entier);
                saisie.mixte.regle_numerateur(numerateur);
                saisie.mixte.regle_denominateur(denominateur);
            }
        }
    }

    /* ------------------------ Dessin des figures ------------------------ */

    /// Peint la fraction découpée en figures, avec au besoin la ligne de
    /// texte "7/4 = 1 と 3/4" dessous.
    fn ui_figures(ui: &mut egui::Ui, f: FractionImpropre, figure: Figure, avec_texte: bool) {
        let remplissages = figure::decouper(&f);

        ui.horizontal_wrapped(|ui| {
            for remplissage in &remplissages {
                match figure {
                    Figure::Cercle => Self::dessine_cercle(ui, f.denominateur(), *remplissage),
                    Figure::Rectangle => {
                        Self::dessine_rectangle(ui, f.denominateur(), *remplissage)
                    }
                }
            }
        });

        if avec_texte {
            let texte = if f.est_impropre() {
                format!("{} = {}", format_impropre(&f), format_mixte(&f.en_mixte()))
            } else {
                format_impropre(&f)
            };
            ui.monospace(egui::RichText::new(texte).strong().size(18.0));
            // lecture décimale, à titre indicatif
            ui.weak(format!("小数では約 {:.2}", f.valeur()));
        }
    }

    fn couleur_case(ui: &egui::Ui, remplissage: Remplissage, pleine: bool) -> egui::Color32 {
        if !pleine {
            ui.visuals().faint_bg_color
        } else if remplissage.complet {
            COULEUR_COMPLETE
        } else {
            COULEUR_PLEINE
        }
    }

    /// Camembert : une part par case, remplie en éventail de triangles
    /// (une part peut dépasser 180°, un polygone convexe ne suffit pas).
    fn dessine_cercle(ui: &mut egui::Ui, denominateur: u32, remplissage: Remplissage) {
        const TAILLE: f32 = 96.0;
        const RAYON: f32 = 40.0;

        let (resp, peintre) =
            ui.allocate_painter(egui::vec2(TAILLE, TAILLE), egui::Sense::hover());
        let centre = resp.rect.center();
        let contour = ui.visuals().widgets.noninteractive.bg_stroke.color;

        let parts = denominateur.max(1);
        let angle_part = std::f32::consts::TAU / parts as f32;
        // départ en haut du cercle
        let depart = -std::f32::consts::FRAC_PI_2;

        let point = |angle: f32| {
            egui::pos2(
                centre.x + RAYON * angle.cos(),
                centre.y + RAYON * angle.sin(),
            )
        };

        let echantillons = (48 / parts).max(2);
        for i in 0..parts {
            let pleine = i < remplissage.cases_pleines;
            let couleur = Self::couleur_case(ui, remplissage, pleine);
            let a0 = depart + angle_part * i as f32;

            for j in 0..echantillons {
                let b0 = a0 + angle_part * j as f32 / echantillons as f32;
                let b1 = a0 + angle_part * (j + 1) as f32 / echantillons as f32;
                peintre.add(egui::Shape::convex_polygon(
                    vec![centre, point(b0), point(b1)],
                    couleur,
                    egui::Stroke::NONE,
                ));
            }
        }

        // rayons de séparation (aucun pour un disque entier)
        if parts > 1 {
            for i in 0..parts {
                let a = depart + angle_part * i as f32;
                peintre.line_segment([centre, point(a)], egui::Stroke::new(1.0, contour));
            }
        }
        peintre.circle_stroke(centre, RAYON, egui::Stroke::new(2.0, contour));
    }

    /// Barre : une case par part, remplies de gauche à droite.
    fn dessine_rectangle(ui: &mut egui::Ui, denominateur: u32, remplissage: Remplissage) {
        const LARGEUR: f32 = 180.0;
        const HAUTEUR: f32 = 36.0;

        let (resp, peintre) =
            ui.allocate_painter(egui::vec2(LARGEUR, HAUTEUR), egui::Sense::hover());
        let rect = resp.rect;
        let contour = ui.visuals().widgets.noninteractive.bg_stroke.color;

        let parts = denominateur.max(1);
        let largeur_case = rect.width() / parts as f32;

        for i in 0..parts {
            let pleine = i < remplissage.cases_pleines;
            let case = egui::Rect::from_min_size(
                egui::pos2(rect.left() + largeur_case * i as f32, rect.top()),
                egui::vec2(largeur_case, rect.height()),
            );
            peintre.rect_filled(
                case,
                egui::CornerRadius::ZERO,
                Self::couleur_case(ui, remplissage, pleine),
            );
        }

        for i in 1..parts {
            let x = rect.left() + largeur_case * i as f32;
            peintre.line_segment(
                [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
                egui::Stroke::new(1.0, contour),
            );
        }
        peintre.rect_stroke(
            rect,
            egui::CornerRadius::ZERO,
            egui::Stroke::new(2.0, contour),
            egui::StrokeKind::Inside,
        );
    }

    /* ------------------------ Aides d'affichage ------------------------ */

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, couleur: Option<egui::Color32>) {
        // Affichage lecture seule "stable", sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    let mut texte = egui::RichText::new(contenu).monospace().size(16.0);
                    if let Some(c) = couleur {
                        texte = texte.color(c).strong();
                    }
                    ui.label(texte);
                });
            });
    }
}

/// Teinte du champ formule/resultat selon le surlignage de l'étape.
fn couleur_surlignage(surlignage: Option<Surlignage>) -> Option<egui::Color32> {
    surlignage.map(|s| match s {
        Surlignage::Entier => COULEUR_ENTIER,
        Surlignage::Numerateur => COULEUR_NUMERATEUR,
        Surlignage::Denominateur => COULEUR_DENOMINATEUR,
        Surlignage::Resultat => COULEUR_COMPLETE,
    })
}
