// src/noyau/presentation.rs
//
// État de présentation de l’écran (sans egui).
//
// Invariants :
// - resultat_affiche == true dès que l’afficheur contient un texte non vide.
// - clear_result remet resultat_affiche ET erreur à false ensemble.
// - "vide" et "haut" sont toujours opposés.

use tracing::warn;

use super::erreurs::ErreurModele;
use super::format::{ajoute_separateurs, avec_moins, rendu_equation, RenduEquation};
use super::modele::Modele;
use super::reglages::Reglages;

/// Espace insécable entre "=" et le résultat.
const PREFIXE_RESULTAT: &str = "=\u{a0}";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Presentation {
    // --- drapeaux logiques ---
    pub resultat_affiche: bool,
    pub erreur: bool,

    // --- styles ---
    /// Équation remontée au-dessus de l’afficheur ("top").
    pub haut: bool,
    /// Afficheur vide ("empty-result").
    pub vide: bool,
    /// Texte de l’afficheur en style erreur ("error").
    pub style_erreur: bool,
    /// Petite police pour un long message d’erreur ("small").
    pub petit: bool,

    // --- contenus ---
    pub valeur: String,
    pub equation: RenduEquation,
    pub tirets: String,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            resultat_affiche: false,
            erreur: false,
            haut: false,
            vide: true,
            style_erreur: false,
            petit: false,
            valeur: String::new(),
            equation: RenduEquation::default(),
            tirets: String::new(),
        }
    }
}

impl Presentation {
    pub fn resultat_visible(&self) -> bool {
        self.resultat_affiche
    }

    fn clear(&mut self) {
        self.haut = false;
        self.vide = true;
        self.style_erreur = false;
        self.petit = false;
        self.valeur.clear();
    }

    /// Vide l’afficheur et remet les drapeaux.
    pub fn clear_result(&mut self) {
        self.clear();
        self.resultat_affiche = false;
        self.erreur = false;
    }

    /// Affiche une valeur ; "" vide l’afficheur quel que soit l’état précédent.
    pub fn show(&mut self, valeur: &str, erreur: bool, reglages: &Reglages) {
        if valeur.is_empty() {
            self.clear_result();
            return;
        }

        self.haut = true;
        self.vide = false;

        if erreur {
            self.style_erreur = true;
            self.petit = valeur.chars().count() > reglages.seuil_petite_police;
        } else {
            self.style_erreur = false;
            self.petit = false;
        }

        self.valeur = avec_moins(valeur);
        self.resultat_affiche = true;
        self.erreur = erreur;
    }

    pub fn show_error(&mut self, message: &str, reglages: &Reglages) {
        self.show(message, true, reglages);
    }

    pub fn show_result(&mut self, valeur: &str, reglages: &Reglages) {
        self.show(valeur, false, reglages);
    }

    pub fn show_equation<M: Modele + ?Sized>(&mut self, modele: &M, reglages: &Reglages) {
        self.equation = rendu_equation(&modele.equation(), modele, reglages);
    }

    /// Demande le résultat au modèle et l’affiche ; aucune erreur ne remonte.
    pub fn calculate<M: Modele + ?Sized>(&mut self, modele: &M, reglages: &Reglages) {
        match modele.calcule() {
            Ok(brut) => {
                let joli = ajoute_separateurs(&brut, modele, reglages.separateur);
                self.show_result(&format!("{PREFIXE_RESULTAT}{joli}"), reglages);
            }
            Err(ErreurModele::FormatInvalide) => self.show_result("Wrong format", reglages),
            Err(ErreurModele::Calcul) => self.show_result("Invalid operation", reglages),
            Err(ErreurModele::Infini { positif }) => {
                let signe = if positif { "" } else { "-" };
                self.show_result(&format!("{signe}∞"), reglages);
            }
            Err(e @ ErreurModele::Autre(_)) => {
                warn!(erreur = %e, "échec de calcul inattendu");
                self.show_error("Unknown error.", reglages);
            }
        }
    }

    /// Redessine la rangée de tirets décoratifs.
    pub fn dessine_tirets(&mut self, reglages: &Reglages) {
        self.tirets = "-".repeat(usize::from(reglages.nb_coeurs));
    }
}
