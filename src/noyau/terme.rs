// src/noyau/terme.rs
//
// Terme (opérande unique) : reconnaissance + évaluation vectorisée
// ----------------------------------------------------------------
// Formes, dans l’ordre d’essai :
//   1) constante        : "3", "-2.5"             -> c
//   2) monôme           : "x", "2x", "2*x^3"      -> coeff * x^n
//   3) trig             : "sin(x)", "2*cos(3*x)"  -> coeff * f(w*x)
//   4) exponentielle    : "2^x"                   -> coeff ^ x
//
// Le terme arrive SANS espaces.

use super::erreur::EvalError;
use super::trig::{parse_coeff_trig, TrigFn};

#[derive(Clone, Debug, PartialEq)]
pub enum Terme {
    Constante(f64),
    Monome {
        coeff: f64,
        puissance: usize,
    },
    Trig {
        coeff: f64,
        fonction: TrigFn,
        w: f64,
    },
    Exponentielle {
        base: f64,
    },
}

/// Caractères qui terminent le coefficient et lancent la reconnaissance.
fn est_declencheur(c: char) -> bool {
    matches!(c, '*' | '^' | 'c' | 's' | 't' | 'x')
}

fn premier_valide(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, 'x' | 's' | 'c' | 't')
}

fn dernier_valide(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, 'x' | ')')
}

impl Terme {
    pub fn parse(terme: &str) -> Result<Terme, EvalError> {
        if let Ok(c) = terme.parse::<f64>() {
            return Ok(Terme::Constante(c));
        }

        let invalide = || EvalError::terme_invalide(terme);

        let cars: Vec<(usize, char)> = terme.char_indices().collect();
        let (Some(&(_, premier)), Some(&(_, dernier))) = (cars.first(), cars.last()) else {
            return Err(invalide());
        };
        if !premier_valide(premier) || !dernier_valide(dernier) {
            return Err(invalide());
        }

        let mut coeff = 1.0;
        let mut coeff_txt = String::new();

        for (i, &(_, c)) in cars.iter().enumerate() {
            if !est_declencheur(c) {
                coeff_txt.push(c);
                continue;
            }

            if !coeff_txt.is_empty() {
                coeff = coeff_txt.parse::<f64>().map_err(|_| invalide())?;
                coeff_txt.clear();
            }

            for (j, &(pos, cj)) in cars.iter().enumerate().skip(i) {
                if cj == 'x' {
                    return match cars.get(j + 1) {
                        Some(&(pos_caret, '^')) => {
                            let exposant = &terme[pos_caret + 1..];
                            if exposant.is_empty() || !exposant.chars().all(|d| d.is_ascii_digit())
                            {
                                return Err(EvalError::InvalidPower(terme.to_string()));
                            }
                            let puissance = exposant
                                .parse::<usize>()
                                .map_err(|_| EvalError::InvalidPower(terme.to_string()))?;
                            Ok(Terme::Monome { coeff, puissance })
                        }
                        None => Ok(Terme::Monome {
                            coeff,
                            puissance: 1,
                        }),
                        Some(_) => Err(EvalError::MissingCaret(terme.to_string())),
                    };
                }

                if let Some(fonction) = TrigFn::en_tete(&terme[pos..]) {
                    let arg = &terme[pos + fonction.nom().len()..];
                    let w = parse_coeff_trig(arg)
                        .ok_or_else(|| EvalError::InvalidTrigArgument(terme.to_string()))?;
                    return Ok(Terme::Trig { coeff, fonction, w });
                }

                if cj == '^' {
                    if !terme.ends_with("^x") {
                        return Err(invalide());
                    }
                    return Ok(Terme::Exponentielle { base: coeff });
                }
            }
        }

        Err(invalide())
    }

    /// Évalue le terme point par point sur le domaine.
    pub fn evalue(&self, domaine: &[f64]) -> Vec<f64> {
        match *self {
            Terme::Constante(c) => vec![c; domaine.len()],
            Terme::Monome { coeff, puissance } => domaine
                .iter()
                .map(|&x| coeff * num_traits::pow(x, puissance))
                .collect(),
            Terme::Trig { coeff, fonction, w } => domaine
                .iter()
                .map(|&x| coeff * fonction.applique(w * x))
                .collect(),
            Terme::Exponentielle { base } => domaine.iter().map(|&x| base.powf(x)).collect(),
        }
    }
}

/// Reconnaît puis évalue un terme sans espaces.
pub fn eval_terme(terme: &str, domaine: &[f64]) -> Result<Vec<f64>, EvalError> {
    Ok(Terme::parse(terme)?.evalue(domaine))
}
