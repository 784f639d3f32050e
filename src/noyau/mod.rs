//! Noyau du traceur f(x)
//!
//! Organisation interne :
//! - erreur.rs   : EvalError (une valeur structurée par requête)
//! - lecture.rs  : normalisation + garde-fou d’alphabet
//! - domaine.rs  : échantillonnage de [min, max]
//! - trig.rs     : sin/cos/tan + coefficient angulaire w
//! - terme.rs    : reconnaissance + évaluation d’un terme
//! - jetons.rs   : jetons RPN (vecteur | opérateur)
//! - rpn.rs      : infixe -> RPN + réduction
//! - eval.rs     : pipeline complet

pub mod domaine;
pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod lecture;
pub mod rpn;
pub mod terme;
pub mod trig;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;


// API publique minimale
pub use erreur::EvalError;
pub use eval::{eval_expression, Courbe};
