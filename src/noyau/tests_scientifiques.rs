//! Tests scientifiques (campagne) : propriétés du traceur de bout en bout.
//!
//! - termes seuls sur des domaines choisis
//! - ordre des opérandes pour - et /
//! - quirk de priorité égale (figé volontairement)
//! - erreurs : une par famille, avec la bonne forme

use approx::assert_relative_eq;

use super::eval_expression;
use super::erreur::EvalError;
use super::jetons::{Op, Tok};
use super::rpn::eval_rpn;
use super::terme::eval_terme;

fn courbe_ok(expr: &str, min: f64, max: f64) -> (Vec<f64>, Vec<f64>) {
    let c = eval_expression(expr, min, max).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
    assert_eq!(c.valeurs.len(), c.domaine.len(), "expr={expr:?}");
    (c.domaine.points().to_vec(), c.valeurs)
}

fn assert_courbe(expr: &str, f: impl Fn(f64) -> f64) {
    let (xs, ys) = courbe_ok(expr, -3.0, 3.0);
    for (x, y) in xs.into_iter().zip(ys) {
        assert_relative_eq!(y, f(x), epsilon = 1e-9, max_relative = 1e-12);
    }
}

fn vecteur(v: &[f64]) -> Tok {
    Tok::Valeurs {
        terme: format!("{v:?}"),
        valeurs: v.to_vec(),
    }
}

/* ------------------------ Termes ------------------------ */

#[test]
fn sci_constante_sur_tout_le_domaine() {
    let (_, ys) = courbe_ok("3", -5.0, 5.0);
    assert!(ys.iter().all(|&y| y == 3.0));
    assert_eq!(eval_terme("3", &[1.0, 2.0, 3.0]).unwrap(), vec![3.0; 3]);
}

#[test]
fn sci_monomes_de_reference() {
    assert_eq!(
        eval_terme("x", &[-2.0, -1.0, 0.0, 1.0, 2.0]).unwrap(),
        vec![-2.0, -1.0, 0.0, 1.0, 2.0]
    );
    assert_eq!(
        eval_terme("2*x^2", &[0.0, 1.0, 2.0]).unwrap(),
        vec![0.0, 2.0, 8.0]
    );
}

#[test]
fn sci_trig_point_par_point() {
    assert_courbe("sin(x)", f64::sin);
    assert_courbe("2*sin(3*x)", |x| 2.0 * (3.0 * x).sin());
    assert_courbe("cos(x) - sin(x)", |x| x.cos() - x.sin());
}

/* ------------------------ Opérateurs ------------------------ */

#[test]
fn sci_ordre_des_operandes() {
    let r = eval_rpn(vec![vecteur(&[5.0]), vecteur(&[2.0]), Tok::Op(Op::Minus)]).unwrap();
    assert_eq!(r, vec![3.0]);
    let r = eval_rpn(vec![vecteur(&[5.0]), vecteur(&[2.0]), Tok::Op(Op::Slash)]).unwrap();
    assert_eq!(r, vec![2.5]);
}

#[test]
fn sci_priorites_melangees() {
    assert_courbe("x + 2 * x^2", |x| x + 2.0 * x * x);
    assert_courbe("x^2 / 2 + 1", |x| x * x / 2.0 + 1.0);
    assert_courbe("1 - 2 * x + x^2", |x| (1.0 - 2.0 * x) + x * x);
}

#[test]
fn sci_regression_priorite_egale() {
    // Chaînes de - et / : les opérateurs s’empilent sans sortir.
    assert_courbe("x - 1 - 1", |x| x - (1.0 - 1.0));
    assert_courbe("x / 2 / 2", |x| x / (2.0 / 2.0));
    assert_courbe("8 - 4 - 2", |_| 6.0);
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn sci_caret_entre_termes() {
    assert_eq!(
        eval_expression("x ^ x", 0.0, 1.0),
        Err(EvalError::DisallowedCaretOperator)
    );
}

#[test]
fn sci_operateur_final() {
    assert!(matches!(
        eval_expression("x + ", 0.0, 1.0),
        Err(EvalError::UnbalancedTerms { .. })
    ));
}

#[test]
fn sci_caractere_hors_alphabet() {
    assert_eq!(
        eval_expression("x + y", 0.0, 1.0),
        Err(EvalError::InvalidCharacter {
            index: 4,
            caractere: 'y'
        })
    );
}

#[test]
fn sci_intervalle_inverse() {
    for expr in ["x", "x ^ x", "y"] {
        assert!(matches!(
            eval_expression(expr, 5.0, 1.0),
            Err(EvalError::InvalidRange { .. })
        ));
    }
}

#[test]
fn sci_familles_de_termes_invalides() {
    let cas: [(&str, fn(&EvalError) -> bool); 4] = [
        ("x^2.5 + 1", |e| matches!(e, EvalError::InvalidPower(_))),
        ("3 * x3", |e| matches!(e, EvalError::MissingCaret(_))),
        ("sin(x+1)", |e| matches!(e, EvalError::InvalidTrigArgument(_))),
        ("(x) + 1", |e| matches!(e, EvalError::InvalidSingleTerm(_))),
    ];
    for (expr, attendu) in cas {
        let e = eval_expression(expr, 0.0, 1.0).unwrap_err();
        assert!(attendu(&e), "expr={expr:?} err={e:?}");
        assert!(e.est_syntaxe());
    }
}

#[test]
fn sci_longueur_egale_au_domaine() {
    for expr in ["x", "1", "tan(x)", "2^x - x^3", "x / x"] {
        let c = eval_expression(expr, -2.5, 4.0).unwrap();
        assert_eq!(c.valeurs.len(), c.domaine.len(), "expr={expr:?}");
    }
}

#[test]
fn sci_compte_equilibre_mais_ordre_incoherent() {
    // 3 termes / 2 opérateurs : le contrôle de compte passe,
    // mais "*" sort avant d’avoir deux opérandes => invariant interne.
    let e = eval_expression("x * + 1 1", 0.0, 1.0).unwrap_err();
    assert!(matches!(e, EvalError::Interne(_)), "err={e:?}");
    assert!(!e.est_syntaxe());
}
