// src/noyau/touches.rs
//
// Touches du pavé : identifiants, table, classification.
// La classification est pure : elle dit QUELLE action une touche désigne,
// sans rien exécuter (l’exécution vit dans app/etat.rs).

use std::fmt;

/// Préfixe des identifiants d’éléments du pavé ("key_7" -> touche "7").
const PREFIXE_ID: &str = "key_";

/// Chiffres dans l’ordre du pavé logique. La 5e entrée déclenche les tirets.
pub const CHIFFRES: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Position (dans CHIFFRES) de la touche "tirets".
const POSITION_TIRETS: usize = 4;

/// Nom de touche -> opérateur du modèle.
const OPERATEURS: [(&str, char); 4] = [("add", '+'), ("sub", '-'), ("mul", '*'), ("div", '/')];

/// Identifiant logique d’une touche.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Touche(String);

impl Touche {
    /// Dérive l’identifiant depuis l’id d’élément (retire "key_").
    pub fn depuis_id(id: &str) -> Self {
        Self(id.strip_prefix(PREFIXE_ID).unwrap_or(id).to_string())
    }

    pub fn nom(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Touche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Marquage d’un élément touché ("key", "longkey", ou rien).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenreCible {
    Touche,
    ToucheLongue,
    Autre,
}

/// Élément sous le doigt, tel que la vue le décrit à la machine d’appui.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cible<'a> {
    pub id: &'a str,
    pub genre: GenreCible,
    /// "long-tap-repeat" : délai puis répétition tant que la touche est tenue.
    pub repetition: bool,
}

impl Cible<'_> {
    pub fn est_touche(&self) -> bool {
        matches!(self.genre, GenreCible::Touche | GenreCible::ToucheLongue)
    }
}

/// Case du pavé numérique.
#[derive(Clone, Copy, Debug)]
pub struct DefTouche {
    pub id: &'static str,
    pub libelle: &'static str,
    pub genre: GenreCible,
    pub repetition: bool,
}

impl DefTouche {
    const fn touche(id: &'static str, libelle: &'static str) -> Self {
        Self {
            id,
            libelle,
            genre: GenreCible::Touche,
            repetition: false,
        }
    }

    const fn longue(id: &'static str, libelle: &'static str) -> Self {
        Self {
            id,
            libelle,
            genre: GenreCible::ToucheLongue,
            repetition: true,
        }
    }

    const fn vide(id: &'static str) -> Self {
        Self {
            id,
            libelle: "",
            genre: GenreCible::Autre,
            repetition: false,
        }
    }

    pub fn cible(&self) -> Cible<'static> {
        Cible {
            id: self.id,
            genre: self.genre,
            repetition: self.repetition,
        }
    }
}

/// Pavé : 5 rangées de 4 cases.
pub const PAVE: [[DefTouche; 4]; 5] = [
    [
        DefTouche::touche("key_c", "C"),
        DefTouche::longue("key_del", "⌫"),
        DefTouche::touche("key_div", "÷"),
        DefTouche::touche("key_mul", "×"),
    ],
    [
        DefTouche::touche("key_7", "7"),
        DefTouche::touche("key_8", "8"),
        DefTouche::touche("key_9", "9"),
        DefTouche::touche("key_sub", "−"),
    ],
    [
        DefTouche::touche("key_4", "4"),
        DefTouche::touche("key_5", "5"),
        DefTouche::touche("key_6", "6"),
        DefTouche::touche("key_add", "+"),
    ],
    [
        DefTouche::touche("key_1", "1"),
        DefTouche::touche("key_2", "2"),
        DefTouche::touche("key_3", "3"),
        DefTouche::touche("key_eql", "="),
    ],
    [
        DefTouche::vide("vide_0"),
        DefTouche::touche("key_0", "0"),
        DefTouche::vide("vide_1"),
        DefTouche::vide("vide_2"),
    ],
];

/// Ce qu’une touche désigne.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionTouche {
    Chiffre(char),
    /// Redessin décoratif des tirets (pas de saisie).
    Tirets,
    Operateur(char),
    Egal,
    Efface,
    NouvellePartie,
    Inconnue,
}

/// Classification pure : touche -> action.
pub fn classe(touche: &Touche) -> ActionTouche {
    let nom = touche.nom();

    let mut chars = nom.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(pos) = CHIFFRES.iter().position(|&d| d == c) {
            return if pos == POSITION_TIRETS {
                ActionTouche::Tirets
            } else {
                ActionTouche::Chiffre(c)
            };
        }
    }

    if let Some((_, op)) = OPERATEURS.iter().find(|(n, _)| *n == nom) {
        return ActionTouche::Operateur(*op);
    }

    match nom {
        "eql" => ActionTouche::Egal,
        "del" => ActionTouche::Efface,
        "c" => ActionTouche::NouvellePartie,
        _ => ActionTouche::Inconnue,
    }
}
