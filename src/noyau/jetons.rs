// src/noyau/jetons.rs
//
// Jetons de la RPN : opérande déjà évaluée OU opérateur binaire.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
}

impl Op {
    pub fn depuis_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Minus),
            '*' => Some(Op::Star),
            '/' => Some(Op::Slash),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Minus => '-',
            Op::Star => '*',
            Op::Slash => '/',
        }
    }

    /// `b OP a` (b = empilé en premier). L’ordre compte pour - et /.
    pub fn applique(self, b: f64, a: f64) -> f64 {
        match self {
            Op::Plus => b + a,
            Op::Minus => b - a,
            Op::Star => b * a,
            Op::Slash => b / a,
        }
    }
}

/// Priorité : + - = 1 ; * / = 2 ; sentinelle (pile vide) = 0.
pub fn precedence(op: Option<Op>) -> u8 {
    match op {
        Some(Op::Plus | Op::Minus) => 1,
        Some(Op::Star | Op::Slash) => 2,
        None => 0,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    /// Terme évalué (une valeur par point du domaine) + son texte source.
    Valeurs { terme: String, valeurs: Vec<f64> },
    Op(Op),
}

/// Format utilitaire (démarche) : RPN en texte, termes par leur source.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Tok::Valeurs { terme, .. } => terme.clone(),
            Tok::Op(op) => op.symbole().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
