// src/noyau/appui.rs
//
// Machine d’appui : contacts bruts (début / fin / annulation) -> touches déclenchées.
//
// Contrats :
// - Horloge explicite en millisecondes : les minuteries sont des échéances,
//   `avance(now_ms)` déclenche celles qui sont dues.
// - Au plus une minuterie "début" et une minuterie "répétition" par touche.
// - Toute nouvelle minuterie pour une touche efface d’abord la paire existante.
// - Effacer est idempotent (aucune minuterie en attente => rien à faire).

use std::collections::{BTreeMap, BTreeSet};

use super::reglages::Reglages;
use super::touches::{Cible, Touche};

/// Rattrapage maximal par touche et par appel à `avance` (gel de la boucle UI).
const MAX_RATTRAPAGE: usize = 64;

/// Paire de minuteries d’une touche (échéances absolues, ms).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Minuteries {
    pub debut: Option<u64>,
    pub repetition: Option<u64>,
}

impl Minuteries {
    fn prochaine(&self) -> Option<u64> {
        match (self.debut, self.repetition) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

/// Événement de contact sur le pavé.
#[derive(Clone, Copy, Debug)]
pub enum Contact<'a> {
    /// `contacts` : nombre de doigts posés, celui-ci compris.
    Debut { cible: Cible<'a>, contacts: usize },
    /// `restants` : doigts encore posés après ce relâché.
    Fin { cible: Cible<'a>, restants: usize },
    Annulation { cible: Cible<'a> },
}

/// Doigts encore posés après un relâché.
///
/// egui ne décrit le multi-touch qu’à partir de deux doigts : en dessous,
/// seul l’état du pointeur dit s’il reste un contact.
pub fn doigts_restants(multi_touch: Option<usize>, pointeur_bas: bool) -> usize {
    multi_touch.unwrap_or(usize::from(pointeur_bas))
}

#[derive(Clone, Debug)]
pub struct MachineAppui {
    delai_ms: u64,
    intervalle_ms: u64,
    minuteries: BTreeMap<Touche, Minuteries>,
    pressees: BTreeSet<Touche>,
    /// Gestes commencés à plusieurs doigts : leur fin ne déclenche rien.
    abandonnes: BTreeSet<Touche>,
}

impl Default for MachineAppui {
    fn default() -> Self {
        Self::new(&Reglages::default())
    }
}

impl MachineAppui {
    pub fn new(reglages: &Reglages) -> Self {
        Self {
            delai_ms: reglages.delai_appui_long_ms,
            intervalle_ms: reglages.intervalle_effectif(),
            minuteries: BTreeMap::new(),
            pressees: BTreeSet::new(),
            abandonnes: BTreeSet::new(),
        }
    }

    /// Point d’entrée unique pour la vue.
    pub fn traite(&mut self, contact: Contact<'_>, now_ms: u64) -> Vec<Touche> {
        match contact {
            Contact::Debut { cible, contacts } => self.debut_contact(&cible, contacts, now_ms),
            Contact::Fin { cible, restants } => self.fin_contact(&cible, restants, now_ms),
            Contact::Annulation { cible } => {
                self.annulation(&cible);
                Vec::new()
            }
        }
    }

    pub fn debut_contact(&mut self, cible: &Cible<'_>, contacts: usize, now_ms: u64) -> Vec<Touche> {
        if !cible.est_touche() {
            return Vec::new();
        }

        let touche = Touche::depuis_id(cible.id);

        // multi-touch : le geste entier est ignoré, jusqu’à sa fin
        if contacts > 1 {
            self.efface_minuteries(&touche);
            self.abandonnes.insert(touche);
            return Vec::new();
        }

        self.abandonnes.remove(&touche);
        self.pressees.insert(touche.clone());

        if !cible.repetition {
            return vec![touche];
        }

        self.efface_minuteries(&touche);
        self.minuteries.insert(
            touche,
            Minuteries {
                debut: Some(now_ms.saturating_add(self.delai_ms)),
                repetition: None,
            },
        );
        Vec::new()
    }

    pub fn fin_contact(&mut self, cible: &Cible<'_>, restants: usize, now_ms: u64) -> Vec<Touche> {
        if !cible.est_touche() {
            return Vec::new();
        }

        let touche = Touche::depuis_id(cible.id);
        self.pressees.remove(&touche);

        if self.abandonnes.remove(&touche) {
            self.efface_minuteries(&touche);
            return Vec::new();
        }

        // Échéances passées mais pas encore traitées par la boucle : elles comptent.
        let mut sortie = self.avance_touche(&touche, now_ms);

        if cible.repetition {
            let repetition_lancee = self
                .minuteries
                .get(&touche)
                .is_some_and(|m| m.repetition.is_some());
            if !repetition_lancee && restants == 0 {
                sortie.push(touche.clone());
            }
        }

        self.efface_minuteries(&touche);
        sortie
    }

    pub fn annulation(&mut self, cible: &Cible<'_>) {
        if !cible.est_touche() {
            return;
        }
        let touche = Touche::depuis_id(cible.id);
        self.pressees.remove(&touche);
        self.abandonnes.remove(&touche);
        self.efface_minuteries(&touche);
    }

    /// Déclenche toutes les échéances dues à `now_ms`, dans l’ordre des touches.
    pub fn avance(&mut self, now_ms: u64) -> Vec<Touche> {
        let touches: Vec<Touche> = self.minuteries.keys().cloned().collect();
        let mut sortie = Vec::new();
        for t in &touches {
            sortie.extend(self.avance_touche(t, now_ms));
        }
        sortie
    }

    fn avance_touche(&mut self, touche: &Touche, now_ms: u64) -> Vec<Touche> {
        let intervalle = self.intervalle_ms;
        let Some(m) = self.minuteries.get_mut(touche) else {
            return Vec::new();
        };

        let mut n = 0usize;

        if let Some(d) = m.debut {
            if now_ms >= d {
                m.debut = None;
                m.repetition = Some(d.saturating_add(intervalle));
                n += 1;
            }
        }

        let mut rattrapage = 0usize;
        while let Some(r) = m.repetition {
            if now_ms < r {
                break;
            }
            if rattrapage == MAX_RATTRAPAGE {
                m.repetition = Some(now_ms.saturating_add(intervalle));
                break;
            }
            m.repetition = Some(r.saturating_add(intervalle));
            n += 1;
            rattrapage += 1;
        }

        vec![touche.clone(); n]
    }

    /// Efface la paire de minuteries d’une touche. Sans effet si rien n’est en attente.
    pub fn efface_minuteries(&mut self, touche: &Touche) {
        self.minuteries.remove(touche);
    }

    pub fn est_pressee(&self, touche: &Touche) -> bool {
        self.pressees.contains(touche)
    }

    #[cfg(test)]
    fn minuteries(&self, touche: &Touche) -> Option<Minuteries> {
        self.minuteries.get(touche).copied()
    }

    /// Prochaine échéance toutes touches confondues (pour planifier un rafraîchissement).
    pub fn prochaine_echeance(&self) -> Option<u64> {
        self.minuteries.values().filter_map(Minuteries::prochaine).min()
    }
}
