//! src/app/etat.rs
//!
//! État de l’écran du Pendu + traitement des touches.
//!
//! Rôle : relier la machine d’appui, le modèle et la présentation.
//! Une touche est d’abord classée (noyau::touches::classe), puis confiée
//! au gestionnaire de son genre : saisie modèle, effet de jeu, ou décor.
//!
//! Contrats :
//! - Aucun rendu egui ici (voir vue.rs).
//! - L’horloge est passée explicitement (ms depuis le lancement).
//! - Rien ne remonte : toute erreur du modèle finit sur l’afficheur.

use std::collections::BTreeSet;

use tracing::{debug, info};
use web_time::Instant;

use crate::noyau::appui::{Contact, MachineAppui};
use crate::noyau::banniere::Banniere;
use crate::noyau::jeu::{IssueChiffre, Vies};
use crate::noyau::modele::{Modele, ModeleCalcul};
use crate::noyau::presentation::Presentation;
use crate::noyau::reglages::Reglages;
use crate::noyau::touches::{classe, ActionTouche, Touche};

#[derive(Clone, Debug)]
pub struct AppPendu {
    pub reglages: Reglages,

    // --- logique ---
    pub modele: ModeleCalcul,
    pub presentation: Presentation,
    pub vies: Vies,
    pub appui: MachineAppui,

    // --- animations ---
    pub victoire: Banniere,
    pub defaite: Banniere,

    // --- UX ---
    /// Cases sous le doigt à la frame précédente (pour détecter début / fin).
    pub(crate) cases_enfoncees: BTreeSet<&'static str>,
    horloge: Instant,
}

impl Default for AppPendu {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl AppPendu {
    pub fn new(reglages: Reglages) -> Self {
        let mut app = Self {
            reglages,
            modele: ModeleCalcul::new(reglages.max_chiffres),
            presentation: Presentation::default(),
            vies: Vies::new(reglages.nb_coeurs),
            appui: MachineAppui::new(&reglages),
            victoire: Banniere::default(),
            defaite: Banniere::default(),
            cases_enfoncees: BTreeSet::new(),
            horloge: Instant::now(),
        };
        app.init();
        app
    }

    /// Cœurs allumés, tirets dessinés, afficheur vide.
    fn init(&mut self) {
        self.vies.reinitialise();
        self.presentation.clear_result();
        self.presentation.dessine_tirets(&self.reglages);
        self.presentation.show_equation(&self.modele, &self.reglages);
        info!(coeurs = self.vies.nb_coeurs(), "écran initialisé");
    }

    pub fn maintenant_ms(&self) -> u64 {
        u64::try_from(self.horloge.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /* ------------------------ Contacts -> touches ------------------------ */

    /// Confie un contact à la machine d’appui puis traite les touches déclenchées.
    pub fn contact(&mut self, contact: Contact<'_>, now_ms: u64) {
        for touche in self.appui.traite(contact, now_ms) {
            self.traite_touche(&touche, now_ms);
        }
    }

    /// Minuteries d’appui long + fin des bannières.
    pub fn avance(&mut self, now_ms: u64) {
        for touche in self.appui.avance(now_ms) {
            self.traite_touche(&touche, now_ms);
        }
        self.victoire.avance(now_ms);
        self.defaite.avance(now_ms);
    }

    /* ------------------------ Touches -> actions ------------------------ */

    pub fn traite_touche(&mut self, touche: &Touche, now_ms: u64) {
        let action = classe(touche);
        debug!(%touche, ?action, "touche");

        match action {
            ActionTouche::Chiffre(c) => {
                self.pousse_chiffre(c);
                self.effet_de_jeu(now_ms);
            }
            ActionTouche::Tirets => self.presentation.dessine_tirets(&self.reglages),
            ActionTouche::Operateur(op) => {
                self.efface_resultat();
                self.modele.ajoute_operateur(op);
            }
            ActionTouche::Egal => {
                self.defaite.declenche(now_ms);
                self.presentation.calculate(&self.modele, &self.reglages);
            }
            ActionTouche::Efface => {
                self.efface_resultat();
                self.modele.efface_dernier();
            }
            ActionTouche::NouvellePartie => self.nouvelle_partie(),
            ActionTouche::Inconnue => {}
        }

        self.presentation.show_equation(&self.modele, &self.reglages);
    }

    fn efface_resultat(&mut self) {
        if self.presentation.resultat_visible() {
            self.presentation.clear_result();
        }
    }

    fn pousse_chiffre(&mut self, c: char) {
        self.efface_resultat();
        if !self.modele.ajoute_chiffre(c) {
            let msg = format!("Only {} digits available", self.reglages.max_chiffres);
            self.presentation.show_error(&msg, &self.reglages);
        }
    }

    fn effet_de_jeu(&mut self, now_ms: u64) {
        match self.vies.consomme() {
            IssueChiffre::CoeurEteint(n) => debug!(coeur = n, "cœur éteint"),
            IssueChiffre::Victoire => {
                info!("partie gagnée");
                self.victoire.declenche(now_ms);
            }
            IssueChiffre::DejaGagnee => {}
        }
    }

    pub fn nouvelle_partie(&mut self) {
        self.modele.reinitialise();
        self.victoire.annule();
        self.defaite.annule();
        self.init();
    }

    /// Prochain instant où la boucle doit se réveiller (appui long en attente).
    pub fn prochaine_echeance(&self) -> Option<u64> {
        self.appui.prochaine_echeance()
    }

    pub fn animation_en_cours(&self, now_ms: u64) -> bool {
        self.victoire.est_active(now_ms) || self.defaite.est_active(now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::banniere::PhaseBanniere;
    use crate::noyau::touches::PAVE;

    fn tape(app: &mut AppPendu, id: &str, now: u64) {
        let cible = PAVE
            .iter()
            .flatten()
            .find(|d| d.id == id)
            .map(|d| d.cible())
            .unwrap_or_else(|| panic!("case absente: {id}"));
        app.contact(Contact::Debut { cible, contacts: 1 }, now);
        app.contact(Contact::Fin { cible, restants: 0 }, now + 30);
    }

    #[test]
    fn init_dessine_tirets_et_coeurs() {
        let app = AppPendu::default();
        assert_eq!(app.presentation.tirets, "----");
        assert_eq!(app.vies.compteur(), 1);
        assert!(app.presentation.vide);
    }

    #[test]
    fn chiffres_eteignent_puis_victoire_unique() {
        let mut app = AppPendu::default();
        for (i, id) in ["key_1", "key_2", "key_3", "key_5"].iter().enumerate() {
            tape(&mut app, id, i as u64 * 100);
        }
        assert_eq!(app.vies.compteur(), 5);
        assert_eq!(app.victoire.phase(400), PhaseBanniere::Repos);

        tape(&mut app, "key_6", 1000);
        assert_eq!(app.victoire.phase(1000), PhaseBanniere::Entree);

        tape(&mut app, "key_7", 1100);
        tape(&mut app, "key_8", 1200);
        // relancée à 1200, la bannière serait encore en Entree à 1350
        assert_eq!(
            app.victoire.phase(1350),
            PhaseBanniere::Maintien,
            "une seule victoire par franchissement"
        );
        assert_eq!(app.presentation.equation.texte(), "1,235,678");
    }

    #[test]
    fn touche_tirets_ne_touche_ni_modele_ni_vies() {
        let mut app = AppPendu::default();
        app.presentation.tirets.clear();
        tape(&mut app, "key_4", 0);
        assert_eq!(app.presentation.tirets, "----");
        assert!(app.modele.equation().is_empty());
        assert_eq!(app.vies.compteur(), 1);
    }

    #[test]
    fn egal_lance_toujours_la_defaite() {
        let mut app = AppPendu::default();
        tape(&mut app, "key_eql", 0);
        assert_eq!(app.defaite.phase(0), PhaseBanniere::Entree);
        assert_eq!(app.presentation.valeur, "Wrong format");

        tape(&mut app, "key_9", 2000);
        tape(&mut app, "key_add", 2100);
        tape(&mut app, "key_1", 2200);
        tape(&mut app, "key_eql", 2300);
        assert_eq!(app.defaite.phase(2300), PhaseBanniere::Entree);
        assert_eq!(app.presentation.valeur, "=\u{a0}10");
    }

    #[test]
    fn budget_de_chiffres_affiche_une_erreur() {
        let mut app = AppPendu::default();
        for i in 0..10 {
            app.traite_touche(&Touche::depuis_id("7"), i);
        }
        assert!(!app.presentation.erreur);
        app.traite_touche(&Touche::depuis_id("7"), 20);
        assert!(app.presentation.erreur);
        assert_eq!(app.presentation.valeur, "Only 10 digits available");
    }

    #[test]
    fn saisie_efface_le_resultat_affiche() {
        let mut app = AppPendu::default();
        tape(&mut app, "key_2", 0);
        tape(&mut app, "key_eql", 100);
        assert!(app.presentation.resultat_visible());
        tape(&mut app, "key_add", 200);
        assert!(!app.presentation.resultat_visible());
        assert!(app.presentation.vide);
    }

    #[test]
    fn effacer_long_vide_l_equation() {
        let mut app = AppPendu::default();
        for (i, id) in ["key_1", "key_2", "key_3"].iter().enumerate() {
            tape(&mut app, id, i as u64 * 100);
        }
        let del = PAVE[0][1].cible();
        app.contact(Contact::Debut { cible: del, contacts: 1 }, 1000);
        app.avance(1400);
        assert_eq!(app.presentation.equation.texte(), "12");
        app.avance(1440);
        assert!(app.modele.equation().is_empty());
        app.contact(Contact::Fin { cible: del, restants: 0 }, 1450);
        assert_eq!(app.prochaine_echeance(), None);
    }

    #[test]
    fn nouvelle_partie_remet_tout() {
        let mut app = AppPendu::default();
        for i in 0..5 {
            app.traite_touche(&Touche::depuis_id("9"), i * 10);
        }
        assert!(app.vies.est_gagnee());
        tape(&mut app, "key_c", 100);
        assert!(!app.vies.est_gagnee());
        assert!(app.modele.equation().is_empty());
        assert!(!app.animation_en_cours(100));
    }
}
