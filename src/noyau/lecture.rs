// src/noyau/lecture.rs
//
// Lecture de l’entrée : normalisation + garde-fou de caractères.
//
// Règles:
// - on retire SEULEMENT les espaces de tête/queue (les espaces internes séparent
//   termes et opérateurs, ils sont structurants)
// - ordre des contrôles : vide -> intervalle -> alphabet

use super::erreur::EvalError;

/// Alphabet accepté (hors chiffres) : x, lettres de sin/cos/tan, ( ) * / + - . ^ et espace.
const LETTRES_PERMISES: &str = "xsincota()*/+-.^ ";

pub fn est_permis(c: char) -> bool {
    c.is_ascii_digit() || LETTRES_PERMISES.contains(c)
}

/// Retire les espaces de tête et de queue (pas les tabulations : elles sont refusées plus loin).
pub fn normalise(s: &str) -> &str {
    s.trim_matches(' ')
}

/// Premier caractère hors alphabet : (index en caractères, caractère).
/// L’index porte sur la chaîne telle que reçue (non tronquée).
pub fn premier_caractere_invalide(s: &str) -> Option<(usize, char)> {
    s.chars().enumerate().find(|(_, c)| !est_permis(*c))
}

/// Règle unique de l’intervalle : bornes finies, min < max, largeur finie.
pub fn verifie_intervalle(min_x: f64, max_x: f64) -> Result<(), EvalError> {
    let bornes_finies = min_x.is_finite() && max_x.is_finite();
    if bornes_finies && min_x < max_x && (max_x - min_x).is_finite() {
        Ok(())
    } else {
        Err(EvalError::InvalidRange {
            min: min_x,
            max: max_x,
        })
    }
}

/// Valide la requête et renvoie l’expression normalisée.
pub fn valide_entrees(brut: &str, min_x: f64, max_x: f64) -> Result<&str, EvalError> {
    let s = normalise(brut);
    if s.is_empty() {
        return Err(EvalError::EmptyInput);
    }

    verifie_intervalle(min_x, max_x)?;

    if let Some((index, caractere)) = premier_caractere_invalide(brut) {
        return Err(EvalError::InvalidCharacter { index, caractere });
    }

    Ok(s)
}
