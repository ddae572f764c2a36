//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : une expression bien formée ne produit jamais d’erreur
//!   de structure (opérandes, pile, nombre) ; seules les erreurs de domaine passent

use std::time::{Duration, Instant};

use proptest::prelude::*;

use super::jetons::{tokenize, Tok};
use super::rpn::to_rpn;
use super::eval::evaluer;
use super::{ErreurEval, Fonction};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn is_erreur_de_domaine(e: &ErreurEval) -> bool {
    matches!(
        e,
        ErreurEval::DivisionByZero
            | ErreurEval::NonPositiveLog
            | ErreurEval::NegativeSqrt
            | ErreurEval::OutOfRange
            | ErreurEval::TanUndefined
            | ErreurEval::FactorialDomain
    )
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let n = rng.pick(9) as i32 - 2; // -2..=6, zéro compris (divisions par zéro)
    match rng.pick(4) {
        0 => format!("{n}.5"),
        1 => format!("({n})"),
        _ => format!("{n}"),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(8) {
        0 => gen_nombre(rng),
        1 => format!("({}+{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("({}-{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("{}*{}", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        4 => format!("({}/{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        5 => format!("({})^2", gen_expr(rng, depth - 1)),
        _ => {
            let f = Fonction::TOUTES[rng.pick(Fonction::TOUTES.len() as u32) as usize];
            format!("{f}({})", gen_expr(rng, depth - 1))
        }
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        match evaluer(&expr) {
            Ok(_) => seen_ok += 1,
            Err(e) => {
                assert!(
                    is_erreur_de_domaine(&e),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 30, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    let mut a = Rng::new(0xBADC0DE_u64);
    let mut b = Rng::new(0xBADC0DE_u64);

    for _ in 0..100 {
        let ea = gen_expr(&mut a, 3);
        let eb = gen_expr(&mut b, 3);
        assert_eq!(ea, eb);

        // f64 NaN != NaN : on compare les bits
        let ra = evaluer(&ea).map(f64::to_bits);
        let rb = evaluer(&eb).map(f64::to_bits);
        assert_eq!(ra, rb, "expr={ea:?}");
    }
}

#[test]
fn fuzz_safe_alphabet_brut() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // N’importe quelle suite de symboles : pas de panique, parenthèses jamais en RPN.
    const ALPHABET: [&str; 16] = [
        "1", "2", "0", ".", "+", "-", "*", "/", "^", "(", ")", "sin", "fact", "√", " ", "x",
    ];
    let mut rng = Rng::new(42);

    for _ in 0..500 {
        budget(t0, max);

        let len = 1 + rng.pick(12) as usize;
        let expr: String = (0..len)
            .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
            .collect();

        let rpn = to_rpn(&tokenize(&expr));
        assert!(
            rpn.iter().all(|t| !matches!(t, Tok::LPar | Tok::RPar)),
            "expr={expr:?}"
        );
        let _ = evaluer(&expr);
    }
}

proptest! {
    #[test]
    fn prop_jamais_de_panique(s in "\\PC{0,40}") {
        let _ = evaluer(&s);
    }

    #[test]
    fn prop_caracteres_ignores(a in 0u32..1000, b in 1u32..1000, bruit in "[ a-dg-kmo-ruvwyzA-Z#_,;:!?]{0,3}") {
        let propre = format!("{a}*{b}");
        let bruite = format!("{a}{bruit}*{bruit}{b}");
        prop_assert_eq!(evaluer(&propre), evaluer(&bruite));
    }
}
