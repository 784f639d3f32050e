// src/noyau/trig.rs
//
// Trig : fonctions reconnues + lecture du coefficient angulaire w
// ---------------------------------------------------------------
// Formes d’argument acceptées (et SEULEMENT celles-là) :
//   (x)        -> w = 1
//   (w*x)      -> w
//   (-w*x)     -> -w
// Pas de parenthèses imbriquées, pas d’addition dans l’argument, pas d’autre variable.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
}

impl TrigFn {
    /// Reconnaît `sin` / `cos` / `tan` au DÉBUT de `s`.
    pub fn en_tete(s: &str) -> Option<TrigFn> {
        if s.starts_with("cos") {
            Some(TrigFn::Cos)
        } else if s.starts_with("sin") {
            Some(TrigFn::Sin)
        } else if s.starts_with("tan") {
            Some(TrigFn::Tan)
        } else {
            None
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            TrigFn::Sin => "sin",
            TrigFn::Cos => "cos",
            TrigFn::Tan => "tan",
        }
    }

    pub fn applique(self, v: f64) -> f64 {
        match self {
            TrigFn::Sin => v.sin(),
            TrigFn::Cos => v.cos(),
            TrigFn::Tan => v.tan(),
        }
    }
}

/// Lit w dans la parenthèse qui suit le mot-clé trig.
/// None si la forme n’est pas reconnue.
pub fn parse_coeff_trig(arg: &str) -> Option<f64> {
    if arg.len() < 3 {
        return None;
    }
    if arg == "(x)" {
        return Some(1.0);
    }

    // motif : "(" [-] [0-9.]* "*x)"
    let corps = arg.strip_prefix('(')?.strip_suffix("*x)")?;
    let chiffres = corps.strip_prefix('-').unwrap_or(corps);
    if !chiffres.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }

    // "-" seul ou "" : pas de littéral => refus
    corps.parse::<f64>().ok()
}
