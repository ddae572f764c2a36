// src/noyau/fonctions.rs
//
// Sémantique des opérateurs et des fonctions (table fixe, un bras par entrée).
// Trigonométrie en degrés.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

use super::erreur::ErreurEval;
use super::jetons::{Fonction, Op};

/// Tolérance des tests d’« entier » (fact) et de l’indéfini de tan.
const EPS: f64 = 1e-9;

/// Au-delà, n! dépasse f64::MAX.
const FACT_MAX: u64 = 170;

fn rad(deg: f64) -> f64 {
    deg.to_radians()
}

fn deg(rad: f64) -> f64 {
    rad.to_degrees()
}

/// a <op> b
pub fn appliquer_op(op: Op, a: f64, b: f64) -> Result<f64, ErreurEval> {
    match op {
        Op::Plus => Ok(a + b),
        Op::Minus => Ok(a - b),
        Op::Star => Ok(a * b),
        Op::Slash => {
            if b == 0.0 {
                return Err(ErreurEval::DivisionByZero);
            }
            Ok(a / b)
        }
        Op::Caret => Ok(a.powf(b)),
    }
}

/// f(a), avec contrôle de domaine.
pub fn appliquer_fonction(f: Fonction, a: f64) -> Result<f64, ErreurEval> {
    match f {
        Fonction::Log => {
            if a <= 0.0 {
                return Err(ErreurEval::NonPositiveLog);
            }
            Ok(a.log10())
        }
        Fonction::Ln => Ok(a.ln()),
        Fonction::Sqrt => {
            if a < 0.0 {
                return Err(ErreurEval::NegativeSqrt);
            }
            Ok(a.sqrt())
        }
        Fonction::Exp => Ok(a.exp()),

        Fonction::Sin => Ok(rad(a).sin()),
        Fonction::Cos => Ok(rad(a).cos()),
        Fonction::Tan => {
            if tan_indefinie(a) {
                return Err(ErreurEval::TanUndefined);
            }
            Ok(rad(a).tan())
        }

        Fonction::Asin => {
            if a.abs() > 1.0 {
                return Err(ErreurEval::OutOfRange);
            }
            Ok(deg(a.asin()))
        }
        Fonction::Acos => {
            if a.abs() > 1.0 {
                return Err(ErreurEval::OutOfRange);
            }
            Ok(deg(a.acos()))
        }
        Fonction::Atan => Ok(deg(a.atan())),

        Fonction::Abs => Ok(a.abs()),
        Fonction::Fact => factorielle(a),
        Fonction::Reciprocal => {
            if a == 0.0 {
                return Err(ErreurEval::DivisionByZero);
            }
            Ok(1.0 / a)
        }
    }
}

/// a ≡ 90 (mod 180), à EPS près.
fn tan_indefinie(a: f64) -> bool {
    let r = (a - 90.0).rem_euclid(180.0);
    r < EPS || 180.0 - r < EPS
}

/// n! par produit itératif exact (BigUint), converti en f64 à la fin.
/// n > 170 => +∞.
fn factorielle(a: f64) -> Result<f64, ErreurEval> {
    if a.is_nan() || a < 0.0 || (a - a.round()).abs() > EPS {
        return Err(ErreurEval::FactorialDomain);
    }
    if a.is_infinite() || a.round() > FACT_MAX as f64 {
        return Ok(f64::INFINITY);
    }

    let n = a.round() as u64;
    let mut acc = BigUint::one();
    for k in 2..=n {
        acc *= k;
    }
    Ok(acc.to_f64().unwrap_or(f64::INFINITY))
}
