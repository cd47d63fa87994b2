//! Propriétés (proptest) : séparateurs et rendu d’équation.

use proptest::prelude::*;

use super::format::{ajoute_separateurs, rendu_equation};
use super::modele::{Modele, ModeleCalcul};
use super::reglages::Reglages;

proptest! {
    #[test]
    fn prop_nombre_de_separateurs(chiffres in "[1-9][0-9]{0,30}") {
        let m = ModeleCalcul::default();
        let out = ajoute_separateurs(&chiffres, &m, ',');
        let l = chiffres.len();
        prop_assert_eq!(out.matches(',').count(), (l - 1) / 3);
        prop_assert_eq!(out.replace(',', ""), chiffres.clone());
        // groupes complets depuis la droite
        for g in out.split(',').skip(1) {
            prop_assert_eq!(g.len(), 3);
        }
    }

    #[test]
    fn prop_negatif_toujours_entre_parentheses(chiffres in "[1-9][0-9]{0,12}") {
        let m = ModeleCalcul::default();
        let out = ajoute_separateurs(&format!("-{chiffres}"), &m, ',');
        prop_assert!(out.starts_with("(-"));
        prop_assert!(out.ends_with(')'));
    }

    #[test]
    fn prop_equation_saisie_jamais_de_panique(touches in proptest::collection::vec(0u8..14, 0..40)) {
        let mut m = ModeleCalcul::default();
        for t in touches {
            match t {
                0..=9 => { m.ajoute_chiffre(char::from(b'0' + t)); }
                10 => m.ajoute_operateur('+'),
                11 => m.ajoute_operateur('-'),
                12 => m.ajoute_operateur('*'),
                _ => m.ajoute_operateur('/'),
            }
        }
        let rendu = rendu_equation(&m.equation(), &m, &Reglages::default());
        prop_assert!(!rendu.texte().contains('-'));
        let _ = m.calcule();
    }
}
