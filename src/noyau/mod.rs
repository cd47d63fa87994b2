//! Noyau du Pendu (sans egui)
//!
//! Organisation interne :
//! - reglages.rs     : délais, seuils, séparateur
//! - erreurs.rs      : erreurs rapportées par le modèle
//! - touches.rs      : identifiants de touches + pavé + classification
//! - appui.rs        : machine d’appui (tape courte / appui long / annulation)
//! - modele.rs       : contrat du modèle + modèle exact (rationnels)
//! - format.rs       : séparateurs de milliers + glyphes
//! - presentation.rs : état d’affichage (vide, erreur, petite/moyenne police)
//! - jeu.rs          : compteur de vies
//! - banniere.rs     : animation gagné / perdu

pub mod appui;
pub mod banniere;
pub mod erreurs;
pub mod format;
pub mod jeu;
pub mod modele;
pub mod presentation;
pub mod reglages;
pub mod touches;

#[cfg(test)]
mod tests_appui;

#[cfg(test)]
mod tests_proprietes;
