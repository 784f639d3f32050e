//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état du traceur (entrée, bornes, courbe, erreur, démarche)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucun parsing ici : le noyau évalue, l’état range.
//! - Actions déterministes, sans effet de bord caché.

use crate::noyau::{Courbe, EvalError};

/// Intervalle proposé au lancement.
pub const MIN_X_DEFAUT: f64 = -10.0;
pub const MAX_X_DEFAUT: f64 = 10.0;

/// Garde-fou : bornes saisissables (anti-gel : 100 points par unité).
pub const BORNE_MAX: f64 = 1000.0;

/// Marque de soulignement (U+0332, COMBINING LOW LINE).
const SOULIGNE: char = '\u{0332}';

#[derive(Clone, Debug)]
pub struct AppTraceur {
    // --- entrée utilisateur ---
    pub entree: String,
    pub min_x: f64,
    pub max_x: f64,

    // --- sorties ---
    pub courbe: Option<Courbe>,
    pub erreur: String,
    pub demarche: String, // RPN textuelle du dernier tracé

    // --- UX ---
    pub focus_entree: bool,
}

impl Default for AppTraceur {
    fn default() -> Self {
        Self {
            entree: String::new(),
            min_x: MIN_X_DEFAUT,
            max_x: MAX_X_DEFAUT,
            courbe: None,
            erreur: String::new(),
            demarche: String::new(),
            focus_entree: true,
        }
    }
}

impl AppTraceur {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + bornes par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.min_x = MIN_X_DEFAUT;
        self.max_x = MAX_X_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer courbe + erreur + démarche.
    pub fn clear_resultats(&mut self) {
        self.courbe = None;
        self.erreur.clear();
        self.demarche.clear();
        self.focus_entree = true;
    }

    /// Dépose une erreur. La courbe précédente est retirée (comme l’ancien plt.close()).
    pub fn set_erreur(&mut self, err: &EvalError) {
        self.erreur = message_erreur(err, &self.entree);
        self.courbe = None;
        self.demarche.clear();
        self.focus_entree = true;
    }

    pub fn set_courbe(&mut self, courbe: Courbe) {
        self.erreur.clear();
        self.demarche = courbe.rpn.clone();
        self.courbe = Some(courbe);
        self.focus_entree = true;
    }

    /// Bornes bornées (la validation min < max reste au noyau).
    pub fn set_bornes(&mut self, min_x: f64, max_x: f64) {
        self.min_x = min_x.clamp(-BORNE_MAX, BORNE_MAX);
        self.max_x = max_x.clamp(-BORNE_MAX, BORNE_MAX);
    }

    /// Évalue l’entrée via le noyau et range le résultat.
    pub fn tracer(&mut self) {
        match crate::noyau::eval_expression(&self.entree, self.min_x, self.max_x) {
            Ok(c) => self.set_courbe(c),
            Err(e) => self.set_erreur(&e),
        }
    }
}

/// Texte affiché pour une erreur du noyau.
/// Caractère invalide : on le met en majuscule et on le souligne dans l’entrée.
pub fn message_erreur(err: &EvalError, entree: &str) -> String {
    if let Some(index) = err.position() {
        return format!(
            "Erreur de syntaxe : {} n’est pas un caractère valide dans la fonction",
            souligne(entree, index)
        );
    }

    match err {
        EvalError::EmptyInput | EvalError::InvalidRange { .. } => format!("ERREUR : {err}"),
        e if !e.est_syntaxe() => format!(
            "Erreur de syntaxe : {} est une fonction invalide",
            entree.trim()
        ),
        _ => format!("Erreur de syntaxe : {err}"),
    }
}

/// Entrée avec le caractère `index` en majuscule suivi de U+0332.
pub fn souligne(entree: &str, index: usize) -> String {
    let mut out = String::with_capacity(entree.len() + 4);
    for (i, c) in entree.chars().enumerate() {
        if i == index {
            out.extend(c.to_uppercase());
            out.push(SOULIGNE);
        } else {
            out.push(c);
        }
    }
    out
}
