//! Noyau — évaluation (pipeline réel)
//!
//! entrée brute -> garde-fou (vide / intervalle / alphabet) -> domaine
//!        -> RPN (termes évalués au fil de l’eau) -> réduction -> Courbe
//!
//! Aucune présentation ici : l’erreur sort structurée (EvalError),
//! c’est l’app qui décide comment l’afficher.

use log::{debug, info, warn};

use super::domaine::{Domaine, Echantillonnage};
use super::erreur::EvalError;
use super::jetons::format_tokens;
use super::lecture::valide_entrees;
use super::rpn::{eval_rpn, to_rpn};

/// Résultat d’un tracé : points (x, y) co-indexés + titre + RPN (démarche).
#[derive(Clone, Debug, PartialEq)]
pub struct Courbe {
    pub titre: String,
    pub domaine: Domaine,
    pub valeurs: Vec<f64>,
    pub rpn: String,
}

impl Courbe {
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.domaine
            .points()
            .iter()
            .copied()
            .zip(self.valeurs.iter().copied())
    }
}

/// API publique : évalue `expr` sur [min_x, max_x] (100 points par unité).
pub fn eval_expression(expr: &str, min_x: f64, max_x: f64) -> Result<Courbe, EvalError> {
    eval_expression_avec(expr, min_x, max_x, &Echantillonnage::default())
}

pub fn eval_expression_avec(
    expr: &str,
    min_x: f64,
    max_x: f64,
    reglages: &Echantillonnage,
) -> Result<Courbe, EvalError> {
    let res = pipeline(expr, min_x, max_x, reglages);
    match &res {
        Ok(c) => info!("{} : {} points", c.titre, c.valeurs.len()),
        Err(e) => warn!("entrée refusée {expr:?} : {e}"),
    }
    res
}

fn pipeline(
    expr: &str,
    min_x: f64,
    max_x: f64,
    reglages: &Echantillonnage,
) -> Result<Courbe, EvalError> {
    // 1) Garde-fou + normalisation
    let s = valide_entrees(expr, min_x, max_x)?;

    // 2) Domaine
    let domaine = Domaine::echantillonne(min_x, max_x, reglages)?;
    debug!("domaine: {} points sur [{min_x}, {max_x}]", domaine.len());

    // 3) RPN (chaque terme est déjà un vecteur)
    let rpn = to_rpn(s, domaine.points())?;
    let rpn_txt = format_tokens(&rpn);
    debug!("rpn: {rpn_txt}");

    // 4) Réduction
    let valeurs = eval_rpn(rpn)?;
    if valeurs.len() != domaine.len() {
        return Err(EvalError::Interne(format!(
            "{} valeurs pour {} points",
            valeurs.len(),
            domaine.len()
        )));
    }

    Ok(Courbe {
        titre: format!("f(x) = {s}"),
        domaine,
        valeurs,
        rpn: rpn_txt,
    })
}
