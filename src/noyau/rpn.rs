// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), sans jamais échouer
// - Une entrée mal formée est transmise telle quelle : l’évaluateur la signalera
//
// Règles:
// - Fonctions = opérateurs unaires associatifs à droite, au palier le plus haut
// - Après une parenthèse fermante, une fonction au sommet sort aussi
//   ("sqrt(x)" => "x sqrt")
// - Parenthèse fermante sans ouvrante : ignorée
// - Parenthèses ouvrantes orphelines en fin d’entrée : jetées

use super::jetons::Tok;
use super::operateurs::{meta, Assoc};

/// Le sommet `top` doit-il sortir avant d’empiler `tok` ?
fn doit_depiler(top: &Tok, tok: &Tok) -> bool {
    match (meta(top), meta(tok)) {
        (Some((p_top, _)), Some((p_tok, assoc))) => {
            p_top > p_tok || (p_top == p_tok && assoc == Assoc::Gauche)
        }
        _ => false,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Fonc(Sqrt), LPar, Num("16"), RPar, Op(Plus), Num("1")]
///   rpn:    [Num("16"), Fonc(Sqrt), Num("1"), Op(Plus)]
pub fn to_rpn(tokens: &[Tok]) -> Vec<Tok> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::Op(_) | Tok::Fonc(_) => {
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) || !doit_depiler(top, &tok) {
                        break;
                    }
                    if let Some(t) = ops.pop() {
                        out.push(t);
                    }
                }
                ops.push(tok);
            }

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // dépile jusqu’à '(' (jetée) ; pile vide => rien de plus
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }
                    out.push(top);
                }

                // si une fonction est au sommet, on la sort aussi
                if matches!(ops.last(), Some(Tok::Fonc(_))) {
                    if let Some(f) = ops.pop() {
                        out.push(f);
                    }
                }
            }
        }
    }

    // vide la pile ops (les '(' orphelines disparaissent)
    while let Some(op) = ops.pop() {
        if !matches!(op, Tok::LPar) {
            out.push(op);
        }
    }

    out
}
