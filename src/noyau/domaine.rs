// src/noyau/domaine.rs
//
// Échantillonnage de [min, max] (linspace, bornes incluses).

use log::warn;

use super::erreur::EvalError;
use super::lecture::verifie_intervalle;

/// Densité par défaut : 100 points par unité d’intervalle.
pub const POINTS_PAR_UNITE_DEFAUT: f64 = 100.0;

/// Plafond du nombre de points : au-delà, la densité est réduite.
pub const POINTS_MAX: usize = 1_000_000;

/// Réglages d’échantillonnage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Echantillonnage {
    pub points_par_unite: f64,
}

impl Default for Echantillonnage {
    fn default() -> Self {
        Self {
            points_par_unite: POINTS_PAR_UNITE_DEFAUT,
        }
    }
}

/// Points d’évaluation ordonnés. Immuable une fois construit.
#[derive(Clone, Debug, PartialEq)]
pub struct Domaine {
    points: Vec<f64>,
}

impl Domaine {
    /// Même règle d’intervalle que le garde-fou de lecture.
    /// Nombre de points : max(2, ⌈(max - min) · points_par_unite⌉), plafonné à POINTS_MAX.
    pub fn echantillonne(
        min_x: f64,
        max_x: f64,
        reglages: &Echantillonnage,
    ) -> Result<Self, EvalError> {
        verifie_intervalle(min_x, max_x)?;

        let densite = if reglages.points_par_unite.is_finite() && reglages.points_par_unite > 0.0 {
            reglages.points_par_unite
        } else {
            POINTS_PAR_UNITE_DEFAUT
        };

        let voulu = ((max_x - min_x) * densite).ceil();
        let n = if voulu > POINTS_MAX as f64 {
            warn!("domaine [{min_x}, {max_x}] : {voulu} points demandés, plafonné à {POINTS_MAX}");
            POINTS_MAX
        } else {
            (voulu as usize).max(2)
        };
        let pas = (max_x - min_x) / (n - 1) as f64;

        let mut points: Vec<f64> = (0..n).map(|i| min_x + pas * i as f64).collect();
        // dernier point exact (pas d’erreur d’arrondi sur la borne)
        if let Some(dernier) = points.last_mut() {
            *dernier = max_x;
        }

        Ok(Self { points })
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
