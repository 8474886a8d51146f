// src/app.rs
//
// Simulateur de fractions — module App (racine)
// ---------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppSimulateur (pour main.rs: use crate::app::AppSimulateur;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppSimulateur;`
pub use etat::AppSimulateur;

use eframe::egui;

use etat::Mode;

impl eframe::App for AppSimulateur {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Raccourci clavier global minimal (safe natif + web) :
        // ESC = recommencer l'explication en cours (mode visualisation).
        // Les flèches restent aux widgets (sliders, DragValue) pour éviter
        // les doubles déclenchements.
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc && self.mode == Mode::Visualisation {
            self.parcours_mut().recommencer();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
