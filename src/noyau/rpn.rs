// src/noyau/rpn.rs
//
// Infixe (termes séparés par " op ") -> RPN -> vecteur
// ----------------------------------------------------
// Règles de construction :
// - un opérateur binaire n’existe QUE sous la forme " op " (espace, op, espace)
// - " ^ " est refusé : ^ n’est jamais un opérateur entre deux termes
// - chaque terme est évalué dès qu’il est complet (la RPN porte des vecteurs)
//
// Vidage de la pile (PAS le shunting-yard classique) :
// - déclenché seulement si priorité(nouveau) < priorité(sommet)
// - une fois déclenché, on vide TOUT jusqu’à la sentinelle
// - à priorité égale, rien ne sort : "8 - 4 - 2" donne 8 - (4 - 2)

use log::debug;

use super::erreur::EvalError;
use super::jetons::{precedence, Op, Tok};
use super::terme::eval_terme;

/// Construit la RPN d’une expression normalisée (sans espaces de tête/queue).
pub fn to_rpn(expr: &str, domaine: &[f64]) -> Result<Vec<Tok>, EvalError> {
    // espace final = terminateur du dernier terme
    let cars: Vec<char> = expr.chars().chain(std::iter::once(' ')).collect();
    let n = cars.len();

    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Op> = Vec::new();
    let mut terme = String::new();
    let mut nb_termes = 0usize;
    let mut nb_ops = 0usize;

    for i in 0..n {
        let c = cars[i];
        let fenetre = (i > 0 && i + 1 < n).then(|| (cars[i - 1], c, cars[i + 1]));
        let op_binaire = match fenetre {
            Some((' ', o, ' ')) => Some(o),
            _ => None,
        };

        if c == ' ' && i != 0 && !terme.is_empty() {
            terme.retain(|t| t != ' ');
            let valeurs = eval_terme(&terme, domaine)?;
            out.push(Tok::Valeurs {
                terme: std::mem::take(&mut terme),
                valeurs,
            });
            nb_termes += 1;
        } else if let Some(op) = op_binaire.and_then(Op::depuis_char) {
            if precedence(Some(op)) < precedence(ops.last().copied()) {
                while let Some(top) = ops.pop() {
                    out.push(Tok::Op(top));
                }
            }
            ops.push(op);
            nb_ops += 1;
        } else if op_binaire == Some('^') {
            return Err(EvalError::DisallowedCaretOperator);
        } else if c != ' ' {
            terme.push(c);
        }
    }

    while let Some(op) = ops.pop() {
        out.push(Tok::Op(op));
    }

    debug!("to_rpn: {nb_termes} terme(s), {nb_ops} opérateur(s)");

    if nb_ops + 1 != nb_termes {
        return Err(EvalError::UnbalancedTerms {
            expression: expr.to_string(),
        });
    }

    Ok(out)
}

/// Réduit une RPN validée. Un échec ici = invariant violé (pas une erreur de syntaxe).
/// Consomme la RPN : les vecteurs des termes sont déplacés, `b OP a` s’écrit dans `b`.
pub fn eval_rpn(rpn: Vec<Tok>) -> Result<Vec<f64>, EvalError> {
    let mut st: Vec<Vec<f64>> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Valeurs { valeurs, .. } => st.push(valeurs),
            Tok::Op(op) => {
                let a = st.pop().ok_or_else(|| pile_vide(op))?;
                let mut b = st.pop().ok_or_else(|| pile_vide(op))?;
                if a.len() != b.len() {
                    return Err(EvalError::Interne(format!(
                        "longueurs incompatibles ({} et {})",
                        b.len(),
                        a.len()
                    )));
                }
                for (vb, &va) in b.iter_mut().zip(&a) {
                    *vb = op.applique(*vb, va);
                }
                st.push(b);
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        (None, _) => Err(EvalError::Interne("RPN vide".into())),
        (Some(_), false) => Err(EvalError::Interne(format!(
            "{} valeur(s) orpheline(s) en fin de RPN",
            st.len()
        ))),
    }
}

fn pile_vide(op: Op) -> EvalError {
    EvalError::Interne(format!("opérande manquante pour '{}'", op.symbole()))
}
