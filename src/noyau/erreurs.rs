// src/noyau/erreurs.rs

use thiserror::Error;

/// Échecs rapportés par le modèle lors d’un calcul.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurModele {
    #[error("équation mal formée")]
    FormatInvalide,

    #[error("opération invalide")]
    Calcul,

    #[error("infini ({})", signe(.positif))]
    Infini { positif: bool },

    /// Tout le reste : la vue affiche un message générique et journalise.
    #[error("erreur inattendue: {0}")]
    Autre(String),
}

fn signe(positif: &bool) -> char {
    if *positif {
        '+'
    } else {
        '-'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_lisibles() {
        assert_eq!(ErreurModele::Infini { positif: false }.to_string(), "infini (-)");
        assert_eq!(ErreurModele::Autre("x".into()).to_string(), "erreur inattendue: x");
    }
}
