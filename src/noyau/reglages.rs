// src/noyau/reglages.rs
//
// Réglages de l’écran (délais, seuils, séparateur).
// Tout est figé à la compilation : pas de fichier de config, pas de stockage.

/// Délai avant le premier déclenchement d’un appui long (ms).
pub const DELAI_APPUI_LONG_MS: u64 = 400;

/// Intervalle de répétition pendant un appui long (ms).
pub const INTERVALLE_REPETITION_MS: u64 = 20;

/// Nombre maximal de chiffres dans l’équation.
pub const MAX_CHIFFRES: usize = 10;

/// Au-delà de cette longueur, un message d’erreur passe en petite police.
pub const SEUIL_PETITE_POLICE: usize = 9;

/// À partir de cette longueur du premier jeton, l’équation passe en police moyenne.
pub const SEUIL_POLICE_MOYENNE: usize = 7;

/// Nombre de cœurs dessinés au démarrage.
pub const NB_COEURS: u8 = 4;

/// Séparateur de milliers.
pub const SEPARATEUR: char = ',';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub delai_appui_long_ms: u64,
    pub intervalle_repetition_ms: u64,
    pub max_chiffres: usize,
    pub seuil_petite_police: usize,
    pub seuil_police_moyenne: usize,
    pub nb_coeurs: u8,
    pub separateur: char,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            delai_appui_long_ms: DELAI_APPUI_LONG_MS,
            intervalle_repetition_ms: INTERVALLE_REPETITION_MS,
            max_chiffres: MAX_CHIFFRES,
            seuil_petite_police: SEUIL_PETITE_POLICE,
            seuil_police_moyenne: SEUIL_POLICE_MOYENNE,
            nb_coeurs: NB_COEURS,
            separateur: SEPARATEUR,
        }
    }
}

impl Reglages {
    /// Garde-fou : un intervalle nul ferait boucler la répétition.
    pub fn intervalle_effectif(&self) -> u64 {
        self.intervalle_repetition_ms.max(1)
    }
}
