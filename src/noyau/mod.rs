//! Noyau de calcul (moteur d’expressions)
//!
//! Organisation interne :
//! - jetons.rs     : tokenisation (Tok, Op, Fonction)
//! - operateurs.rs : table précédence / associativité
//! - rpn.rs        : shunting-yard -> RPN
//! - fonctions.rs  : sémantique des opérateurs et fonctions (+ domaines)
//! - eval.rs       : évaluation RPN + pipeline complet
//! - format.rs     : affichage arrondi du résultat
//! - erreur.rs     : ErreurEval
//!
//! Aucun état partagé, aucun journal : chaque appel est indépendant.

pub mod erreur;
pub mod eval;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod operateurs;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale (celle que consomme l’UI)
pub use erreur::ErreurEval;
pub use eval::{calculer, demarche, Demarche};
pub use format::DECIMALES_DEFAUT;
pub use jetons::{Fonction, Op};
