// src/app.rs
//
// Pendu — module App (racine)
// ---------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppPendu (pour main.rs: use crate::app::AppPendu;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Les minuteries d’appui long sont des échéances : on les fait avancer
//   à chaque frame, et on demande une frame pour la prochaine échéance.

pub mod etat;
pub mod vue;

pub use etat::AppPendu;

use std::time::Duration;

use eframe::egui;

impl eframe::App for AppPendu {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Touche "retour" matérielle (ESC sur PC) = quitter l’application.
        let retour = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if retour {
            // Sur le web, Close est ignoré : rien à faire de plus.
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        let now = self.maintenant_ms();
        self.avance(now);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui, now);
        });

        if self.animation_en_cours(now) {
            ctx.request_repaint();
        } else if let Some(echeance) = self.prochaine_echeance() {
            ctx.request_repaint_after(Duration::from_millis(echeance.saturating_sub(now)));
        }
    }
}
