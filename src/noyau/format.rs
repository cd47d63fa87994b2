// src/noyau/format.rs
//
// Mise en forme de l’équation et des résultats :
// - séparateurs de milliers (depuis le chiffre de poids faible)
// - négatifs affichés "(-42)"
// - glyphes typographiques : − × ÷

use std::sync::OnceLock;

use regex_lite::Regex;

use super::modele::{Modele, OPERATEURS};
use super::reglages::Reglages;

/// Moins typographique (U+2212).
pub const MOINS: char = '\u{2212}';

fn regex_tete() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(-?)([0-9]+)").expect("regex tête numérique"))
}

/// Glyphe d’affichage d’un opérateur du modèle.
pub fn glyphe_operateur(op: char) -> Option<char> {
    match op {
        '+' => Some('+'),
        '-' => Some(MOINS),
        '*' => Some('×'),
        '/' => Some('÷'),
        _ => None,
    }
}

/// Remplace chaque '-' par le moins typographique.
pub fn avec_moins(texte: &str) -> String {
    texte.replace('-', &MOINS.to_string())
}

/// Groupe une suite de chiffres par 3 depuis la droite : "1234567" -> "1,234,567".
fn groupe(chiffres: &str, separateur: char) -> String {
    let n = chiffres.chars().count();
    let mut out = String::with_capacity(n + n / 3);
    for (i, c) in chiffres.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push(separateur);
        }
        out.push(c);
    }
    out
}

/// Ajoute les séparateurs à la tête numérique d’un texte.
///
/// Si le modèle reconnaît une composante négative, seule la magnitude est groupée
/// puis le tout est rendu "(-…)". La suite non numérique (ex: ".5") est conservée.
pub fn ajoute_separateurs<M: Modele + ?Sized>(texte: &str, modele: &M, separateur: char) -> String {
    let negative = modele.composante_negative(texte);
    let base = negative.as_ref().map_or(texte, |c| c.magnitude.as_str());

    let groupe_txt = match regex_tete().captures(base) {
        Some(caps) => {
            let signe = caps.get(1).map_or("", |m| m.as_str());
            let chiffres = caps.get(2).map_or("", |m| m.as_str());
            let fin = caps.get(0).map_or(0, |m| m.end());
            format!("{signe}{}{}", groupe(chiffres, separateur), &base[fin..])
        }
        None => base.to_string(),
    };

    if negative.is_some() {
        format!("(-{groupe_txt})")
    } else {
        groupe_txt
    }
}

/// Morceau d’équation à afficher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub texte: String,
    pub operateur: bool,
}

/// Équation prête pour la vue.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenduEquation {
    pub segments: Vec<Segment>,
    /// Police moyenne : premier jeton long.
    pub moyenne: bool,
}

impl RenduEquation {
    pub fn texte(&self) -> String {
        self.segments.iter().map(|s| s.texte.as_str()).collect()
    }
}

/// Rend une suite de jetons (nombres / opérateurs).
pub fn rendu_equation<M: Modele + ?Sized>(
    jetons: &[String],
    modele: &M,
    reglages: &Reglages,
) -> RenduEquation {
    let segments = jetons
        .iter()
        .map(|jeton| {
            let mut chars = jeton.chars();
            let op = match (chars.next(), chars.next()) {
                (Some(c), None) if OPERATEURS.contains(&c) => glyphe_operateur(c),
                _ => None,
            };
            match op {
                Some(g) => Segment {
                    texte: g.to_string(),
                    operateur: true,
                },
                None => Segment {
                    texte: avec_moins(&ajoute_separateurs(jeton, modele, reglages.separateur)),
                    operateur: false,
                },
            }
        })
        .collect();

    let moyenne = jetons
        .first()
        .is_some_and(|j| j.chars().count() >= reglages.seuil_police_moyenne);

    RenduEquation { segments, moyenne }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::modele::ModeleCalcul;

    fn sep(s: &str) -> String {
        ajoute_separateurs(s, &ModeleCalcul::default(), ',')
    }

    #[test]
    fn groupes_de_trois() {
        assert_eq!(sep("1"), "1");
        assert_eq!(sep("123"), "123");
        assert_eq!(sep("1234"), "1,234");
        assert_eq!(sep("1234567"), "1,234,567");
        assert_eq!(sep("123456"), "123,456");
    }

    #[test]
    fn negatif_entre_parentheses() {
        assert_eq!(sep("-42"), "(-42)");
        assert_eq!(sep("-1234"), "(-1,234)");
        assert_eq!(sep("-1234.5678"), "(-1,234.5678)");
    }

    #[test]
    fn suite_non_numerique_conservee() {
        assert_eq!(sep("1234.5"), "1,234.5");
        assert_eq!(sep("abc"), "abc");
        assert_eq!(sep("-"), "-");
        assert_eq!(sep(""), "");
    }

    #[test]
    fn equation_avec_glyphes() {
        let m = ModeleCalcul::default();
        let r = Reglages::default();
        let jetons: Vec<String> = ["1234", "-", "5", "*", "-6", "/", "7", "+", "8"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let rendu = rendu_equation(&jetons, &m, &r);

        assert_eq!(rendu.texte(), "1,234−5×(−6)÷7+8");
        let ops: Vec<bool> = rendu.segments.iter().map(|s| s.operateur).collect();
        assert_eq!(ops, vec![false, true, false, true, false, true, false, true, false]);
        assert!(!rendu.moyenne);
    }

    #[test]
    fn police_moyenne_selon_premier_jeton() {
        let m = ModeleCalcul::default();
        let r = Reglages::default();

        let long = vec!["1234567".to_string()];
        assert!(rendu_equation(&long, &m, &r).moyenne);

        let court_puis_long = vec!["1".to_string(), "+".to_string(), "99999999".to_string()];
        assert!(!rendu_equation(&court_puis_long, &m, &r).moyenne);

        assert!(!rendu_equation(&[], &m, &r).moyenne);
    }

    #[test]
    fn signe_seul_rendu_comme_moins() {
        let m = ModeleCalcul::default();
        let r = Reglages::default();
        let rendu = rendu_equation(&["-".to_string()], &m, &r);
        assert_eq!(rendu.texte(), "−");
    }
}
