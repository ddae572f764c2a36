//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> pile numérique -> f64 -> texte arrondi
//!
//! Chaque étape est une fonction pure : mêmes entrées, mêmes sorties,
//! aucune donnée partagée entre deux appels.

use super::erreur::ErreurEval;
use super::fonctions::{appliquer_fonction, appliquer_op};
use super::format::formater_resultat;
use super::jetons::{format_tokens, tokenize, Tok};
use super::rpn::to_rpn;

/// Démarche d’une expression : jetons puis RPN, en texte.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

/// Évalue une suite de jetons en RPN.
///
/// La première erreur rencontrée interrompt l’évaluation (pas de résultat partiel).
pub fn eval_postfix(rpn: &[Tok]) -> Result<f64, ErreurEval> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num(lit) => {
                let v = lit
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| ErreurEval::InvalidNumber(lit.clone()))?;
                st.push(v);
            }

            Tok::Op(op) => {
                if st.len() < 2 {
                    return Err(ErreurEval::InsufficientOperands);
                }
                let b = st.pop().ok_or(ErreurEval::InsufficientOperands)?;
                let a = st.pop().ok_or(ErreurEval::InsufficientOperands)?;
                st.push(appliquer_op(*op, a, b)?);
            }

            Tok::Fonc(f) => {
                let a = st.pop().ok_or(ErreurEval::InsufficientOperands)?;
                st.push(appliquer_fonction(*f, a)?);
            }

            // to_rpn n’en produit jamais ; RPN construite à la main
            Tok::LPar => return Err(ErreurEval::UnknownOperator("(".into())),
            Tok::RPar => return Err(ErreurEval::UnknownOperator(")".into())),
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurEval::InvalidExpression),
    }
}

/// API publique : évalue une expression infixe.
pub fn evaluer(expr: &str) -> Result<f64, ErreurEval> {
    eval_postfix(&to_rpn(&tokenize(expr)))
}

/// Frontière consommée par l’UI : expression -> texte arrondi à `decimales`.
pub fn calculer(expr: &str, decimales: u32) -> Result<String, ErreurEval> {
    evaluer(expr).map(|v| formater_resultat(v, decimales))
}

/// Trace jetons + RPN (n’échoue jamais, même si l’évaluation échoue).
pub fn demarche(expr: &str) -> Demarche {
    let jetons = tokenize(expr);
    let rpn = to_rpn(&jetons);

    Demarche {
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
    }
}
