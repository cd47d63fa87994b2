// src/noyau/banniere.rs
//
// Bannière "gagné" / "perdu" : séquence animée pilotée par l’horloge.
//
//   Repos -> Entree (0..300) -> Maintien (..1000) -> Fondu (1000..1500) -> Masque (..1600) -> Repos
//
// Une bannière ne porte qu’un instant de départ : redéclencher pendant une
// séquence l’écrase et repart de Entree, sans course entre deux séquences.

const ENTREE_MS: u64 = 300;
const DEBUT_FONDU_MS: u64 = 1000;
const FONDU_MS: u64 = 500;
const GLISSEMENT_MS: u64 = 400;
const FIN_MS: u64 = 1600;

const POLICE_MIN: f32 = 10.0;
const POLICE_MAX: f32 = 33.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseBanniere {
    Repos,
    Entree,
    Maintien,
    Fondu,
    Masque,
}

/// Rendu instantané d’une bannière active.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AspectBanniere {
    pub opacite: f32,
    pub taille_police: f32,
    /// 0 -> 1 : glissement du texte pendant le fondu.
    pub glissement: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Banniere {
    debut_ms: Option<u64>,
}

fn progression(ecoule: u64, debut: u64, duree: u64) -> f32 {
    if ecoule <= debut {
        0.0
    } else if ecoule >= debut + duree {
        1.0
    } else {
        (ecoule - debut) as f32 / duree as f32
    }
}

fn interpole(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

impl Banniere {
    /// (Re)lance la séquence depuis Entree.
    pub fn declenche(&mut self, now_ms: u64) {
        self.debut_ms = Some(now_ms);
    }

    pub fn annule(&mut self) {
        self.debut_ms = None;
    }

    pub fn phase(&self, now_ms: u64) -> PhaseBanniere {
        let Some(debut) = self.debut_ms else {
            return PhaseBanniere::Repos;
        };
        match now_ms.saturating_sub(debut) {
            e if e < ENTREE_MS => PhaseBanniere::Entree,
            e if e < DEBUT_FONDU_MS => PhaseBanniere::Maintien,
            e if e < DEBUT_FONDU_MS + FONDU_MS => PhaseBanniere::Fondu,
            e if e < FIN_MS => PhaseBanniere::Masque,
            _ => PhaseBanniere::Repos,
        }
    }

    /// Libère la séquence terminée.
    pub fn avance(&mut self, now_ms: u64) {
        if self.debut_ms.is_some() && self.phase(now_ms) == PhaseBanniere::Repos {
            self.debut_ms = None;
        }
    }

    pub fn est_active(&self, now_ms: u64) -> bool {
        self.phase(now_ms) != PhaseBanniere::Repos
    }

    pub fn aspect(&self, now_ms: u64) -> Option<AspectBanniere> {
        let debut = self.debut_ms?;
        let e = now_ms.saturating_sub(debut);

        let aspect = match self.phase(now_ms) {
            PhaseBanniere::Repos => return None,
            PhaseBanniere::Entree => {
                let t = progression(e, 0, ENTREE_MS);
                AspectBanniere {
                    opacite: t,
                    taille_police: interpole(POLICE_MIN, POLICE_MAX, t),
                    glissement: 0.0,
                }
            }
            PhaseBanniere::Maintien => AspectBanniere {
                opacite: 1.0,
                taille_police: POLICE_MAX,
                glissement: 0.0,
            },
            PhaseBanniere::Fondu | PhaseBanniere::Masque => {
                let t = progression(e, DEBUT_FONDU_MS, FONDU_MS);
                AspectBanniere {
                    opacite: 1.0 - t,
                    taille_police: interpole(POLICE_MAX, POLICE_MIN, t),
                    glissement: progression(e, DEBUT_FONDU_MS, GLISSEMENT_MS),
                }
            }
        };
        Some(aspect)
    }
}
