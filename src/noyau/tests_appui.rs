//! Tests campagne : machine d’appui sur des scénarios de doigt complets.
//!
//! Horloge simulée : on avance par pas de "frame" (16 ms) comme le ferait la boucle egui,
//! et on compte les déclenchements.

use super::appui::{Contact, MachineAppui};
use super::reglages::{Reglages, DELAI_APPUI_LONG_MS, INTERVALLE_REPETITION_MS};
use super::touches::{Touche, PAVE};

const FRAME_MS: u64 = 16;

fn def(id: &str) -> super::touches::DefTouche {
    *PAVE
        .iter()
        .flatten()
        .find(|d| d.id == id)
        .unwrap_or_else(|| panic!("case absente: {id}"))
}

/// Pose le doigt à `debut`, le tient `duree` ms en faisant tourner la boucle,
/// puis le relâche. Renvoie (déclenchements pendant l’appui, au relâché, après).
fn appui(m: &mut MachineAppui, id: &str, debut: u64, duree: u64) -> (usize, usize, usize) {
    let cible = def(id).cible();
    let mut pendant = m
        .traite(Contact::Debut { cible, contacts: 1 }, debut)
        .len();

    let fin = debut + duree;
    let mut t = debut;
    while t + FRAME_MS < fin {
        t += FRAME_MS;
        pendant += m.avance(t).len();
    }

    let au_relache = m.traite(Contact::Fin { cible, restants: 0 }, fin).len();

    let mut apres = 0;
    for k in 1..=20 {
        apres += m.avance(fin + k * FRAME_MS).len();
    }
    (pendant, au_relache, apres)
}

#[test]
fn camp_tape_courte_une_seule_fois() {
    let mut m = MachineAppui::default();
    for duree in [1, 50, 200, DELAI_APPUI_LONG_MS - 1] {
        let (pendant, relache, apres) = appui(&mut m, "key_del", 10_000, duree);
        assert_eq!(pendant + relache + apres, 1, "durée={duree}");
        assert_eq!(relache, 1);
    }
}

#[test]
fn camp_appui_long_delai_plus_trois_intervalles() {
    let mut m = MachineAppui::default();
    let duree = DELAI_APPUI_LONG_MS + 3 * INTERVALLE_REPETITION_MS + 1;
    let (pendant, relache, apres) = appui(&mut m, "key_del", 0, duree);
    assert!(pendant + relache >= 4, "pendant={pendant} relache={relache}");
    assert_eq!(apres, 0, "la répétition doit cesser au relâché");
}

#[test]
fn camp_appui_long_frequence() {
    let mut m = MachineAppui::default();
    // 1 s de répétition à 20 ms => ~50 déclenchements, +1 au délai
    let (pendant, relache, _) = appui(&mut m, "key_del", 0, DELAI_APPUI_LONG_MS + 1000);
    let total = pendant + relache;
    assert!((50..=52).contains(&total), "total={total}");
}

#[test]
fn camp_touches_simples_indifferentes_a_la_duree() {
    let mut m = MachineAppui::default();
    for id in ["key_7", "key_add", "key_eql", "key_c"] {
        let (pendant, relache, apres) = appui(&mut m, id, 0, 2_000);
        assert_eq!((pendant, relache, apres), (1, 0, 0), "case {id}");
    }
}

#[test]
fn camp_annulation_jamais_de_declenchement() {
    let mut m = MachineAppui::default();
    for duree in [10, 399, 400, 2_000] {
        let cible = def("key_del").cible();
        m.traite(Contact::Debut { cible, contacts: 1 }, 0);
        // pas d’avance de la boucle : seule l’annulation arrive
        let t = m.traite(Contact::Annulation { cible }, duree);
        assert!(t.is_empty());
        assert!(m.avance(duree + 5_000).is_empty());
        assert!(!m.est_pressee(&Touche::depuis_id("del")));
    }
}

#[test]
fn camp_deux_touches_longues_independantes() {
    // une seule touche longue sur le pavé : on en fabrique une seconde
    let mut m = MachineAppui::new(&Reglages::default());
    let a = def("key_del").cible();
    let mut b = a;
    b.id = "key_autre";

    m.traite(Contact::Debut { cible: a, contacts: 1 }, 0);
    m.traite(Contact::Debut { cible: b, contacts: 1 }, 100);
    assert_eq!(m.avance(400).len(), 1);

    m.traite(Contact::Annulation { cible: a }, 410);
    let t = m.avance(500);
    assert!(t.iter().all(|k| k.nom() == "autre"));
    assert_eq!(t.len(), 1);
}
