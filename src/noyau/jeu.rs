// src/noyau/jeu.rs
//
// Compteur de vies : un cœur s’éteint par chiffre tapé ; au-delà du dernier cœur,
// la partie est gagnée (une seule fois par franchissement).

use super::reglages::NB_COEURS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IssueChiffre {
    /// Numéro (1..=nb_coeurs) du cœur qui vient de s’éteindre.
    CoeurEteint(u8),
    Victoire,
    /// Partie déjà gagnée : rien ne se passe jusqu’à la prochaine partie.
    DejaGagnee,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Vies {
    /// Dans [1, nb_coeurs + 1].
    compteur: u8,
    nb_coeurs: u8,
    gagnee: bool,
}

impl Default for Vies {
    fn default() -> Self {
        Self::new(NB_COEURS)
    }
}

impl Vies {
    pub fn new(nb_coeurs: u8) -> Self {
        Self {
            compteur: 1,
            nb_coeurs,
            gagnee: false,
        }
    }

    pub fn consomme(&mut self) -> IssueChiffre {
        if self.gagnee {
            return IssueChiffre::DejaGagnee;
        }
        if self.compteur <= self.nb_coeurs {
            let eteint = self.compteur;
            self.compteur += 1;
            return IssueChiffre::CoeurEteint(eteint);
        }
        self.gagnee = true;
        IssueChiffre::Victoire
    }

    pub fn compteur(&self) -> u8 {
        self.compteur
    }

    pub fn nb_coeurs(&self) -> u8 {
        self.nb_coeurs
    }

    /// Cœur n (1-indexé) éteint ?
    pub fn coeur_eteint(&self, n: u8) -> bool {
        n < self.compteur
    }

    pub fn est_gagnee(&self) -> bool {
        self.gagnee
    }

    pub fn reinitialise(&mut self) {
        *self = Self::new(self.nb_coeurs);
    }
}
