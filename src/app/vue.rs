// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Cœurs en haut, tirets, équation, afficheur, pavé tactile
// - Chaque case du pavé produit des contacts (début / fin / annulation)
//   confiés à la machine d’appui : la vue ne décide jamais d’un déclenchement
// - Bannières gagné / perdu en surimpression
//
// Note :
// - Doigt qui glisse hors de la case avant de relâcher = annulation
// - Plus d’un doigt posé = geste ignoré (la machine filtre)

use eframe::egui;

use super::etat::AppPendu;
use crate::noyau::appui::{doigts_restants, Contact};
use crate::noyau::banniere::AspectBanniere;
use crate::noyau::touches::{DefTouche, GenreCible, Touche, PAVE};

const TAILLE_CASE: [f32; 2] = [72.0, 56.0];

const POLICE_EQUATION: f32 = 30.0;
const POLICE_EQUATION_MOYENNE: f32 = 22.0;
const POLICE_EQUATION_HAUT: f32 = 18.0;
const POLICE_AFFICHEUR: f32 = 34.0;
const POLICE_AFFICHEUR_PETITE: f32 = 20.0;

const COULEUR_COEUR: egui::Color32 = egui::Color32::from_rgb(220, 40, 60);
const COULEUR_OPERATEUR: egui::Color32 = egui::Color32::from_rgb(90, 160, 230);
const COULEUR_VICTOIRE: egui::Color32 = egui::Color32::from_rgb(60, 190, 90);
const COULEUR_DEFAITE: egui::Color32 = egui::Color32::from_rgb(220, 60, 60);

impl AppPendu {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui, now_ms: u64) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.vertical_centered(|ui| {
            self.ui_vies(ui);
            ui.add_space(8.0);
            self.ui_ecran(ui);
            ui.add_space(12.0);
            self.ui_pave(ui, now_ms);
        });

        self.ui_bannieres(ui.ctx(), now_ms);
    }

    fn ui_vies(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for n in 1..=self.vies.nb_coeurs() {
                let couleur = if self.vies.coeur_eteint(n) {
                    ui.visuals().weak_text_color()
                } else {
                    COULEUR_COEUR
                };
                ui.label(egui::RichText::new("♥").size(28.0).color(couleur));
            }
        });
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let p = &self.presentation;

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.monospace(&p.tirets);

                let taille = if p.haut {
                    POLICE_EQUATION_HAUT
                } else if p.equation.moyenne {
                    POLICE_EQUATION_MOYENNE
                } else {
                    POLICE_EQUATION
                };

                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing.x = 2.0;
                    for seg in &p.equation.segments {
                        let mut texte = egui::RichText::new(&seg.texte).size(taille);
                        if seg.operateur {
                            texte = texte.color(COULEUR_OPERATEUR);
                        }
                        ui.label(texte);
                    }
                });

                if !p.vide {
                    let taille = if p.petit {
                        POLICE_AFFICHEUR_PETITE
                    } else {
                        POLICE_AFFICHEUR
                    };
                    let mut texte = egui::RichText::new(&p.valeur).size(taille).strong();
                    if p.style_erreur {
                        texte = texte.color(ui.visuals().error_fg_color);
                    }
                    ui.label(texte);
                }
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui, now_ms: u64) {
        let mut contacts: Vec<Contact<'static>> = Vec::new();

        // doigts posés (souris = 1)
        let doigts = ui.input(|i| i.multi_touch().map_or(1, |m| m.num_touches));

        egui::Grid::new("pave_pendu")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in PAVE.iter() {
                    for def in rangee {
                        if let Some(c) = self.case(ui, def, doigts) {
                            contacts.push(c);
                        }
                    }
                    ui.end_row();
                }
            });

        for c in contacts {
            self.contact(c, now_ms);
        }
    }

    /// Dessine une case et traduit l’état du pointeur en contact.
    fn case(&mut self, ui: &mut egui::Ui, def: &DefTouche, doigts: usize) -> Option<Contact<'static>> {
        let resp = match def.genre {
            GenreCible::Autre => ui.allocate_response(TAILLE_CASE.into(), egui::Sense::click()),
            GenreCible::Touche | GenreCible::ToucheLongue => {
                let pressee = self.appui.est_pressee(&Touche::depuis_id(def.id));
                let bouton = egui::Button::new(egui::RichText::new(def.libelle).size(24.0))
                    .selected(pressee);
                ui.add_sized(TAILLE_CASE, bouton)
            }
        };

        let bas = resp.is_pointer_button_down_on();
        let avant = self.cases_enfoncees.contains(def.id);
        let cible = def.cible();

        match (avant, bas) {
            (false, true) => {
                self.cases_enfoncees.insert(def.id);
                Some(Contact::Debut {
                    cible,
                    contacts: doigts,
                })
            }
            (true, false) => {
                self.cases_enfoncees.remove(def.id);
                if resp.clicked() || resp.hovered() {
                    let restants = ui.input(|i| {
                        doigts_restants(i.multi_touch().map(|m| m.num_touches), i.pointer.any_down())
                    });
                    Some(Contact::Fin { cible, restants })
                } else {
                    Some(Contact::Annulation { cible })
                }
            }
            _ => None,
        }
    }

    fn ui_bannieres(&self, ctx: &egui::Context, now_ms: u64) {
        let bannieres = [
            ("banniere_victoire", "You win!", COULEUR_VICTOIRE, &self.victoire),
            ("banniere_defaite", "You lose!", COULEUR_DEFAITE, &self.defaite),
        ];

        for (id, texte, couleur, banniere) in bannieres {
            if let Some(aspect) = banniere.aspect(now_ms) {
                Self::banniere(ctx, id, texte, couleur, aspect);
            }
        }
    }

    fn banniere(ctx: &egui::Context, id: &str, texte: &str, couleur: egui::Color32, a: AspectBanniere) {
        let decalage = -40.0 * a.glissement;
        egui::Area::new(egui::Id::new(id))
            .anchor(egui::Align2::CENTER_CENTER, [0.0, decalage])
            .interactable(false)
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(texte)
                        .size(a.taille_police)
                        .strong()
                        .color(couleur.gamma_multiply(a.opacite)),
                );
            });
    }
}
