// src/noyau/erreur.rs
//
// Erreurs d’évaluation (seul l’évaluateur en lève).
// Le tokenizer et la conversion RPN n’échouent jamais : une entrée mal formée
// se manifeste ici (InsufficientOperands / InvalidExpression).

use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ErreurEval {
    #[error("opérandes insuffisants")]
    InsufficientOperands,

    #[error("division par zéro")]
    DivisionByZero,

    #[error("log d’un nombre négatif ou nul")]
    NonPositiveLog,

    #[error("racine carrée d’un nombre négatif")]
    NegativeSqrt,

    #[error("argument hors de [-1, 1]")]
    OutOfRange,

    #[error("tan indéfinie (90° + k·180°)")]
    TanUndefined,

    #[error("factorielle : entier positif ou nul attendu")]
    FactorialDomain,

    #[error("opérateur inconnu: '{0}'")]
    UnknownOperator(String),

    #[error("fonction inconnue: '{0}'")]
    UnknownFunction(String),

    #[error("nombre invalide: '{0}'")]
    InvalidNumber(String),

    #[error("expression invalide")]
    InvalidExpression,
}
