// src/noyau/erreur.rs
//
// Erreurs du noyau (une valeur structurée par requête).
// La présentation (soulignement, boîte de dialogue…) reste côté app.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("il faut entrer une fonction")]
    EmptyInput,

    #[error("x minimum ({min}) doit être strictement inférieur à x maximum ({max})")]
    InvalidRange { min: f64, max: f64 },

    #[error("'{caractere}' (position {index}) n’est pas un caractère valide dans la fonction")]
    InvalidCharacter { index: usize, caractere: char },

    #[error("{expression} est une fonction invalide")]
    UnbalancedTerms { expression: String },

    #[error("l’opérateur ^ n’est pas permis entre deux fonctions simples")]
    DisallowedCaretOperator,

    #[error("{0} est une fonction simple invalide")]
    InvalidSingleTerm(String),

    #[error("la puissance n’est pas un entier positif dans {0}")]
    InvalidPower(String),

    #[error("^ manquant dans {0}")]
    MissingCaret(String),

    #[error("contenu de parenthèse invalide dans {0}")]
    InvalidTrigArgument(String),

    /// Invariant violé (RPN mal formée malgré le contrôle d’équilibre).
    #[error("erreur interne : {0}")]
    Interne(String),
}

impl EvalError {
    /// Index (en caractères, dans l’entrée NON tronquée) du caractère fautif.
    pub fn position(&self) -> Option<usize> {
        match self {
            EvalError::InvalidCharacter { index, .. } => Some(*index),
            _ => None,
        }
    }

    pub fn terme_invalide(terme: impl Into<String>) -> Self {
        EvalError::InvalidSingleTerm(terme.into())
    }

    /// Erreur de syntaxe (au sens utilisateur) : tout sauf l’invariant interne.
    pub fn est_syntaxe(&self) -> bool {
        !matches!(self, EvalError::Interne(_))
    }
}
