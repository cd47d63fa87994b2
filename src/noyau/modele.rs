// src/noyau/modele.rs
//
// Modèle de l’équation : contrat (trait) + implémentation exacte (rationnels).
//
// Contrats :
// - L’équation est une suite de jetons : nombres ("12", "-3") et opérateurs (+ - * /).
// - Budget de chiffres global (MAX_CHIFFRES) : ajoute_chiffre renvoie false au-delà.
// - calcule() ne panique jamais : toute impasse devient une ErreurModele.

use std::sync::OnceLock;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};
use regex_lite::Regex;

use super::erreurs::ErreurModele;
use super::reglages::MAX_CHIFFRES;

/// Décimales affichées pour un résultat non entier.
const DECIMALES_RESULTAT: usize = 9;

/// Opérateurs connus du modèle.
pub const OPERATEURS: [char; 4] = ['+', '-', '*', '/'];

/// Composante reconnue comme négative : "-42" ou "(-42)" -> magnitude "42".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposanteNegative {
    pub magnitude: String,
}

pub trait Modele {
    fn ajoute_chiffre(&mut self, chiffre: char) -> bool;
    fn ajoute_operateur(&mut self, operateur: char);
    fn composante_negative(&self, texte: &str) -> Option<ComposanteNegative>;
    fn calcule(&self) -> Result<String, ErreurModele>;
    fn equation(&self) -> Vec<String>;
    fn efface_dernier(&mut self);
    fn reinitialise(&mut self);
}

fn regex_negative() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\(?-([0-9]+(?:\.[0-9]+)?)\)?$").expect("regex composante négative")
    })
}

/// Prédicat partagé : toute implémentation de Modele peut s’y adosser.
pub fn composante_negative(texte: &str) -> Option<ComposanteNegative> {
    let caps = regex_negative().captures(texte)?;
    Some(ComposanteNegative {
        magnitude: caps.get(1)?.as_str().to_string(),
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Jeton {
    Nombre(String),
    Operateur(char),
}

/// Modèle "calculatrice" : saisie chiffre par chiffre, évaluation exacte.
#[derive(Clone, Debug)]
pub struct ModeleCalcul {
    jetons: Vec<Jeton>,
    max_chiffres: usize,
}

impl Default for ModeleCalcul {
    fn default() -> Self {
        Self::new(MAX_CHIFFRES)
    }
}

impl ModeleCalcul {
    pub fn new(max_chiffres: usize) -> Self {
        Self {
            jetons: Vec::new(),
            max_chiffres,
        }
    }

    fn nb_chiffres(&self) -> usize {
        self.jetons
            .iter()
            .map(|j| match j {
                Jeton::Nombre(n) => n.chars().filter(char::is_ascii_digit).count(),
                Jeton::Operateur(_) => 0,
            })
            .sum()
    }
}

impl Modele for ModeleCalcul {
    fn ajoute_chiffre(&mut self, chiffre: char) -> bool {
        if !chiffre.is_ascii_digit() || self.nb_chiffres() >= self.max_chiffres {
            return false;
        }

        match self.jetons.last_mut() {
            Some(Jeton::Nombre(n)) => {
                // pas de zéros en tête : "0" puis "7" => "7"
                if n == "0" {
                    n.clear();
                } else if n == "-0" {
                    n.truncate(1);
                }
                n.push(chiffre);
            }
            _ => self.jetons.push(Jeton::Nombre(chiffre.to_string())),
        }
        true
    }

    fn ajoute_operateur(&mut self, operateur: char) {
        if !OPERATEURS.contains(&operateur) {
            return;
        }

        match self.jetons.last_mut() {
            // "-" en tête d’équation : début d’un nombre négatif
            None => {
                if operateur == '-' {
                    self.jetons.push(Jeton::Nombre("-".into()));
                }
            }
            // signe seul en attente de chiffres : rien à faire
            Some(Jeton::Nombre(n)) if n == "-" => {}
            Some(Jeton::Nombre(_)) => self.jetons.push(Jeton::Operateur(operateur)),
            Some(Jeton::Operateur(prec)) => {
                if operateur == '-' && matches!(*prec, '*' | '/') {
                    // 5 × −3
                    self.jetons.push(Jeton::Nombre("-".into()));
                } else {
                    *prec = operateur;
                }
            }
        }
    }

    fn composante_negative(&self, texte: &str) -> Option<ComposanteNegative> {
        composante_negative(texte)
    }

    fn calcule(&self) -> Result<String, ErreurModele> {
        let valeur = evalue(&self.jetons)?;
        Ok(formate_resultat(&valeur))
    }

    fn equation(&self) -> Vec<String> {
        self.jetons
            .iter()
            .map(|j| match j {
                Jeton::Nombre(n) => n.clone(),
                Jeton::Operateur(op) => op.to_string(),
            })
            .collect()
    }

    fn efface_dernier(&mut self) {
        match self.jetons.last_mut() {
            None => {}
            Some(Jeton::Operateur(_)) => {
                self.jetons.pop();
            }
            Some(Jeton::Nombre(n)) => {
                n.pop();
                if n.is_empty() {
                    self.jetons.pop();
                }
            }
        }
    }

    fn reinitialise(&mut self) {
        self.jetons.clear();
    }
}

/* ------------------------ Évaluation exacte ------------------------ */

fn lit_nombre(n: &str) -> Result<BigRational, ErreurModele> {
    let entier: BigInt = n.parse().map_err(|_| ErreurModele::FormatInvalide)?;
    Ok(BigRational::from_integer(entier))
}

/// Priorité usuelle : × ÷ d’abord, puis + −. Division par zéro :
/// 0/0 => Calcul, x/0 => Infini (signe de x).
fn evalue(jetons: &[Jeton]) -> Result<BigRational, ErreurModele> {
    // forme attendue : Nombre (Op Nombre)*
    if jetons.len() % 2 == 0 {
        return Err(ErreurModele::FormatInvalide);
    }

    let mut total = BigRational::zero();
    let mut signe = true; // signe du terme en cours
    let mut terme: Option<BigRational> = None;
    let mut op_attente: Option<char> = None;

    for (i, j) in jetons.iter().enumerate() {
        match (i % 2, j) {
            (0, Jeton::Nombre(n)) => {
                let x = lit_nombre(n)?;
                terme = Some(match (terme.take(), op_attente.take()) {
                    (None, _) => x,
                    (Some(t), Some('*')) => t * x,
                    (Some(t), Some('/')) => divise(t, x)?,
                    (Some(t), Some(op)) => {
                        cumule(&mut total, t, signe);
                        signe = op == '+';
                        x
                    }
                    (Some(_), None) => return Err(ErreurModele::FormatInvalide),
                });
            }
            (1, Jeton::Operateur(op)) => op_attente = Some(*op),
            _ => return Err(ErreurModele::FormatInvalide),
        }
    }

    let t = terme.ok_or(ErreurModele::FormatInvalide)?;
    cumule(&mut total, t, signe);
    Ok(total)
}

fn cumule(total: &mut BigRational, terme: BigRational, positif: bool) {
    if positif {
        *total += terme;
    } else {
        *total -= terme;
    }
}

fn divise(a: BigRational, b: BigRational) -> Result<BigRational, ErreurModele> {
    if b.is_zero() {
        if a.is_zero() {
            return Err(ErreurModele::Calcul);
        }
        return Err(ErreurModele::Infini {
            positif: a.is_positive(),
        });
    }
    Ok(a / b)
}

/// Entier tel quel ; sinon DECIMALES_RESULTAT décimales tronquées, zéros de queue retirés.
fn formate_resultat(r: &BigRational) -> String {
    if r.is_integer() {
        return r.to_integer().to_string();
    }

    let neg = r.is_negative();
    let abs = r.abs();
    let echelle = BigInt::from(10u32).pow(DECIMALES_RESULTAT as u32);
    let scaled = (abs.numer() * &echelle) / abs.denom();

    let partie_ent = &scaled / &echelle;
    let mut frac = (&scaled % &echelle).to_str_radix(10);
    while frac.len() < DECIMALES_RESULTAT {
        frac.insert(0, '0');
    }
    let frac = frac.trim_end_matches('0');

    let signe = if neg { "-" } else { "" };
    if frac.is_empty() {
        format!("{signe}{partie_ent}")
    } else {
        format!("{signe}{partie_ent}.{frac}")
    }
}
