// src/noyau/operateurs.rs
//
// Table fixe : précédence + associativité.
// Fonctions > ^ > * / > + -

use super::jetons::{Op, Tok};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assoc {
    Gauche,
    Droite,
}

/// Palier commun à toutes les fonctions unaires.
pub const PRECEDENCE_FONCTION: u8 = 4;

fn meta_op(op: Op) -> (u8, Assoc) {
    match op {
        Op::Plus | Op::Minus => (1, Assoc::Gauche),
        Op::Star | Op::Slash => (2, Assoc::Gauche),
        Op::Caret => (3, Assoc::Droite),
    }
}

/// (précédence, associativité) d’un opérateur ou d’une fonction.
/// None pour les nombres et les parenthèses.
pub fn meta(t: &Tok) -> Option<(u8, Assoc)> {
    match t {
        Tok::Op(op) => Some(meta_op(*op)),
        Tok::Fonc(_) => Some((PRECEDENCE_FONCTION, Assoc::Droite)),
        Tok::Num(_) | Tok::LPar | Tok::RPar => None,
    }
}
