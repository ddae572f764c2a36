//! Tests scientifiques (campagne) : invariants + propriétés + limites contrôlées.
//!
//! But : vérifier le pipeline complet sur ce qu’il promet.
//! - précédence / associativité sur des familles d’expressions
//! - idempotence de l’affichage (texte du résultat ré-évalué => même valeur)
//! - identités trig en degrés
//! - budget temps global sur les stress

use std::time::{Duration, Instant};

use proptest::prelude::*;

use super::eval::evaluer;
use super::{calculer, ErreurEval, DECIMALES_DEFAUT};

fn eval_ok(expr: &str) -> f64 {
    evaluer(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, attendu: f64) {
    let v = eval_ok(expr);
    assert!(
        (v - attendu).abs() < 1e-9,
        "expr={expr:?} v={v} attendu={attendu}"
    );
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Identités trig (degrés) ------------------------ */

#[test]
fn sci_identites_trig() {
    for a in [0, 15, 30, 45, 60, 75, 120, 200, 330] {
        // sin² + cos² = 1
        assert_proche(&format!("sin({a})^2+cos({a})^2"), 1.0);
        // sin(-x) = -sin(x)
        assert_proche(&format!("sin(-{a})+sin({a})"), 0.0);
        // cos(x + 360) = cos(x)
        assert_proche(&format!("cos({a}+360)-cos({a})"), 0.0);
    }
}

#[test]
fn sci_inverses_trig() {
    assert_proche("asin(sin(30))", 30.0);
    assert_proche("acos(cos(60))", 60.0);
    assert_proche("atan(tan(45))", 45.0);
    assert_proche("asin(0.5)", 30.0);
}

#[test]
fn sci_tan_indefinie_periodique() {
    for k in -3..=3 {
        let a = 90 + 180 * k;
        assert_eq!(
            evaluer(&format!("tan({a})")),
            Err(ErreurEval::TanUndefined),
            "a={a}"
        );
    }
    // tan(x+180) = tan(x) ailleurs
    assert_proche("tan(30+180)-tan(30)", 0.0);
}

/* ------------------------ Précédence ------------------------ */

#[test]
fn sci_precedence_familles() {
    for (a, b, c) in [(2, 3, 4), (7, 5, 3), (1, 9, 2), (10, 2, 5)] {
        let (af, bf, cf) = (a as f64, b as f64, c as f64);
        assert_proche(&format!("{a}+{b}*{c}"), af + bf * cf);
        assert_proche(&format!("{a}*{b}+{c}"), af * bf + cf);
        assert_proche(&format!("{a}-{b}-{c}"), (af - bf) - cf);
        assert_proche(&format!("{a}/{b}/{c}"), (af / bf) / cf);
        assert_proche(&format!("{a}^{b}^{c}"), af.powf(bf.powf(cf)));
        assert_proche(&format!("{a}*{b}^{c}"), af * bf.powf(cf));
        assert_proche(&format!("({a}+{b})*{c}"), (af + bf) * cf);
    }
}

#[test]
fn sci_fonctions_lient_plus_fort() {
    assert_proche("sqrt9*2", 6.0);
    assert_proche("sqrt 9^2", 9.0);
    assert_proche("2^log100", 4.0);
    assert_proche("fact3!+1", 7.0); // '!' ignoré
}

/* ------------------------ Idempotence de l’affichage ------------------------ */

fn reevaluer(expr: &str) {
    let txt = calculer(expr, DECIMALES_DEFAUT)
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
    let v1: f64 = txt.parse().unwrap_or_else(|_| panic!("txt={txt:?}"));
    let v2 = eval_ok(&txt);
    assert!((v1 - v2).abs() < 1e-10, "expr={expr:?} txt={txt:?}");

    let txt2 = calculer(&txt, DECIMALES_DEFAUT).unwrap_or_else(|e| panic!("err={e}"));
    assert_eq!(txt, txt2, "expr={expr:?}");
}

#[test]
fn sci_idempotence_exemples() {
    for expr in [
        "2+3*4",
        "1/3",
        "sqrt(2)",
        "sin(45)",
        "0-7/3",
        "fact(20)",
        "10^15+0.5",
        "exp(1)",
        "2^0.5*1000000",
    ] {
        reevaluer(expr);
    }
}

proptest! {
    #[test]
    fn prop_idempotence_affichage(a in -1.0e6f64..1.0e6, b in 1.0f64..1.0e3) {
        let expr = format!("{a}/{b}");
        let txt = calculer(&expr, DECIMALES_DEFAUT).unwrap();
        let v = evaluer(&txt).unwrap();
        let attendu = a / b;
        prop_assert!((v - attendu).abs() < 1e-9 * attendu.abs().max(1.0));
        prop_assert_eq!(calculer(&txt, DECIMALES_DEFAUT).unwrap(), txt);
    }

    #[test]
    fn prop_addition_commutative(a in 0u32..100_000, b in 0u32..100_000) {
        prop_assert_eq!(
            evaluer(&format!("{a}+{b}")).unwrap(),
            evaluer(&format!("{b}+{a}")).unwrap()
        );
    }
}

/* ------------------------ Stress contrôlé ------------------------ */

#[test]
fn sci_stress_imbrication_parentheses() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // pile RPN + pile d’opérateurs : pas de récursion, profondeur arbitraire
    let n = 5_000;
    let expr = format!("{}1{}", "(".repeat(n), "+1)".repeat(n));
    budget(t0, max);

    assert_proche(&expr, (n + 1) as f64);
    budget(t0, max);
}

#[test]
fn sci_stress_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = vec!["0.5"; 10_000].join("+");
    assert_proche(&expr, 5_000.0);
    budget(t0, max);
}

#[test]
fn sci_stress_fonctions_chainees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = format!("{}256", "sqrt ".repeat(3));
    assert_proche(&expr, 2.0);

    let expr = format!("{}1{}", "abs(".repeat(2_000), ")".repeat(2_000));
    assert_proche(&expr, 1.0);
    budget(t0, max);
}
